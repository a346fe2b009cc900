use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, HexBinary, StdError, Storage, Uint128};
use cw_storage_plus::{Item, Map};
use lz_endpoint_api::{ChainId, LzReceiveMsg};
use relayer_wasm_std::counter::Counter;
use sha3::{Digest, Keccak256};

use crate::msg::ConfigResponse;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Std(#[from] StdError),
    #[error("relayer config is missing")]
    MissingConfig,
    #[error("no trusted remote configured for chain {0}")]
    TrustedRemoteNotFound(ChainId),
    #[error("no inbound delivery is in flight")]
    PendingDeliveryNotFound,
}

#[cw_serde]
pub struct Config {
    pub endpoint: Addr,
    pub denom: String,
    pub protocol_fee: Uint128,
    pub delivery_amount: Uint128,
    pub require_trusted_destination: bool,
}

impl From<Config> for ConfigResponse {
    fn from(config: Config) -> Self {
        ConfigResponse {
            endpoint: config.endpoint,
            denom: config.denom,
            protocol_fee: config.protocol_fee,
            delivery_amount: config.delivery_amount,
            require_trusted_destination: config.require_trusted_destination,
        }
    }
}

type FailedMessageKey = (u16, Vec<u8>, u64);

const CONFIG: Item<Config> = Item::new("config");
const TRUSTED_REMOTES: Map<u16, HexBinary> = Map::new("trusted_remotes");
/// keccak256 of the payload of every delivery that failed and awaits a retry
const FAILED_MESSAGES: Map<FailedMessageKey, HexBinary> = Map::new("failed_messages");
const PENDING_DELIVERY: Item<LzReceiveMsg> = Item::new("pending_delivery");
pub const RELAYS_SENT: Counter<u64> = Counter::new("relays_sent");

pub fn load_config(storage: &dyn Storage) -> Result<Config, Error> {
    CONFIG.may_load(storage)?.ok_or(Error::MissingConfig)
}

pub fn save_config(storage: &mut dyn Storage, config: &Config) -> Result<(), Error> {
    Ok(CONFIG.save(storage, config)?)
}

pub fn update_config(
    storage: &mut dyn Storage,
    update: impl FnOnce(Config) -> Config,
) -> Result<Config, Error> {
    let config = update(load_config(storage)?);
    save_config(storage, &config)?;
    Ok(config)
}

pub fn may_load_trusted_remote(
    storage: &dyn Storage,
    chain_id: ChainId,
) -> Result<Option<HexBinary>, Error> {
    Ok(TRUSTED_REMOTES.may_load(storage, chain_id.into())?)
}

pub fn save_trusted_remote(
    storage: &mut dyn Storage,
    chain_id: ChainId,
    path: &HexBinary,
) -> Result<(), Error> {
    Ok(TRUSTED_REMOTES.save(storage, chain_id.into(), path)?)
}

pub fn remove_trusted_remote(storage: &mut dyn Storage, chain_id: ChainId) -> Result<(), Error> {
    if !TRUSTED_REMOTES.has(storage, chain_id.into()) {
        return Err(Error::TrustedRemoteNotFound(chain_id));
    }

    TRUSTED_REMOTES.remove(storage, chain_id.into());
    Ok(())
}

pub fn payload_hash(payload: &[u8]) -> HexBinary {
    HexBinary::from(Keccak256::digest(payload).as_slice())
}

fn failed_message_key(src_chain_id: ChainId, src_address: &[u8], nonce: u64) -> FailedMessageKey {
    (src_chain_id.into(), src_address.to_vec(), nonce)
}

pub fn save_failed_message(storage: &mut dyn Storage, msg: &LzReceiveMsg) -> Result<(), Error> {
    Ok(FAILED_MESSAGES.save(
        storage,
        failed_message_key(msg.src_chain_id, &msg.src_address, msg.nonce),
        &payload_hash(&msg.payload),
    )?)
}

pub fn may_load_failed_message(
    storage: &dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
    nonce: u64,
) -> Result<Option<HexBinary>, Error> {
    Ok(FAILED_MESSAGES.may_load(
        storage,
        failed_message_key(src_chain_id, src_address, nonce),
    )?)
}

pub fn remove_failed_message(
    storage: &mut dyn Storage,
    src_chain_id: ChainId,
    src_address: &[u8],
    nonce: u64,
) {
    FAILED_MESSAGES.remove(
        storage,
        failed_message_key(src_chain_id, src_address, nonce),
    )
}

pub fn save_pending_delivery(storage: &mut dyn Storage, msg: &LzReceiveMsg) -> Result<(), Error> {
    Ok(PENDING_DELIVERY.save(storage, msg)?)
}

pub fn take_pending_delivery(storage: &mut dyn Storage) -> Result<LzReceiveMsg, Error> {
    let msg = PENDING_DELIVERY
        .may_load(storage)?
        .ok_or(Error::PendingDeliveryNotFound)?;
    PENDING_DELIVERY.remove(storage);

    Ok(msg)
}
