use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, StdError, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use lz_endpoint_api::ChainId;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error("endpoint config is missing")]
    MissingConfig,
    #[error("no delivery is in flight")]
    PendingPayloadNotFound,
    #[error("nonce overflow")]
    NonceOverflow,
}

#[cw_serde]
pub struct Config {
    pub chain_id: ChainId,
    pub denom: String,
    pub base_fee: Uint128,
    pub fee_per_byte: Uint128,
}

#[cw_serde]
pub struct StoredPayload {
    pub dst_address: Addr,
    pub nonce: u64,
    pub payload: HexBinary,
}

#[cw_serde]
pub struct PendingPayload {
    pub src_chain_id: ChainId,
    pub src_address: HexBinary,
    pub stored: StoredPayload,
}

type PathKey = (u16, Vec<u8>);

const CONFIG: Item<Config> = Item::new("config");
const DEST_ENDPOINTS: Map<&Addr, Addr> = Map::new("dest_endpoints");
const INBOUND_NONCES: Map<PathKey, u64> = Map::new("inbound_nonces");
const OUTBOUND_NONCES: Map<(u16, &Addr), u64> = Map::new("outbound_nonces");
const STORED_PAYLOADS: Map<PathKey, StoredPayload> = Map::new("stored_payloads");
const PENDING_PAYLOAD: Item<PendingPayload> = Item::new("pending_payload");

fn path_key(src_chain_id: ChainId, src_address: &[u8]) -> PathKey {
    (src_chain_id.into(), src_address.to_vec())
}

pub fn load_config(storage: &dyn Storage) -> Result<Config, Error> {
    CONFIG.may_load(storage)?.ok_or(Error::MissingConfig)
}

pub fn save_config(storage: &mut dyn Storage, config: &Config) -> Result<(), Error> {
    Ok(CONFIG.save(storage, config)?)
}

pub fn save_dest_endpoint(
    storage: &mut dyn Storage,
    destination: &Addr,
    endpoint: &Addr,
) -> Result<(), Error> {
    Ok(DEST_ENDPOINTS.save(storage, destination, endpoint)?)
}

pub fn may_load_dest_endpoint(
    storage: &dyn Storage,
    destination: &Addr,
) -> Result<Option<Addr>, Error> {
    Ok(DEST_ENDPOINTS.may_load(storage, destination)?)
}

pub fn inbound_nonce(
    storage: &dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
) -> Result<u64, Error> {
    Ok(INBOUND_NONCES
        .may_load(storage, path_key(src_chain_id, src_address))?
        .unwrap_or_default())
}

pub fn save_inbound_nonce(
    storage: &mut dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
    nonce: u64,
) -> Result<(), Error> {
    Ok(INBOUND_NONCES.save(storage, path_key(src_chain_id, src_address), &nonce)?)
}

pub fn outbound_nonce(
    storage: &dyn Storage,
    dst_chain_id: ChainId,
    sender: &Addr,
) -> Result<u64, Error> {
    Ok(OUTBOUND_NONCES
        .may_load(storage, (dst_chain_id.into(), sender))?
        .unwrap_or_default())
}

/// Increments and returns the outbound nonce of `sender` towards `dst_chain_id`.
pub fn incr_outbound_nonce(
    storage: &mut dyn Storage,
    dst_chain_id: ChainId,
    sender: &Addr,
) -> Result<u64, Error> {
    let nonce = outbound_nonce(storage, dst_chain_id, sender)?
        .checked_add(1)
        .ok_or(Error::NonceOverflow)?;
    OUTBOUND_NONCES.save(storage, (dst_chain_id.into(), sender), &nonce)?;

    Ok(nonce)
}

pub fn may_load_stored_payload(
    storage: &dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
) -> Result<Option<StoredPayload>, Error> {
    Ok(STORED_PAYLOADS.may_load(storage, path_key(src_chain_id, src_address))?)
}

pub fn save_stored_payload(
    storage: &mut dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
    stored: &StoredPayload,
) -> Result<(), Error> {
    Ok(STORED_PAYLOADS.save(storage, path_key(src_chain_id, src_address), stored)?)
}

pub fn remove_stored_payload(storage: &mut dyn Storage, src_chain_id: ChainId, src_address: &[u8]) {
    STORED_PAYLOADS.remove(storage, path_key(src_chain_id, src_address))
}

pub fn save_pending_payload(storage: &mut dyn Storage, pending: &PendingPayload) -> Result<(), Error> {
    Ok(PENDING_PAYLOAD.save(storage, pending)?)
}

pub fn take_pending_payload(storage: &mut dyn Storage) -> Result<PendingPayload, Error> {
    let pending = PENDING_PAYLOAD
        .may_load(storage)?
        .ok_or(Error::PendingPayloadNotFound)?;
    PENDING_PAYLOAD.remove(storage);

    Ok(pending)
}
