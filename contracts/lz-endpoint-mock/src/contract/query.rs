use cosmwasm_std::{to_json_binary, Binary, Deps, HexBinary};
use error_stack::{Result, ResultExt};
use lz_endpoint_api::{ChainId, FeesResponse};
use relayer_wasm_std::address;

use super::execute;
use crate::state;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to serialize the response")]
    JsonSerialization,
    #[error("failed to access the endpoint state")]
    State,
    #[error("invalid address")]
    InvalidAddress,
    #[error("failed to compute the fee")]
    Fee,
}

pub fn estimate_fees(
    deps: Deps,
    payload: HexBinary,
    adapter_params: HexBinary,
) -> Result<Binary, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;
    let native_fee =
        execute::fee(&config, payload.len(), adapter_params.len()).change_context(Error::Fee)?;

    to_json_binary(&FeesResponse {
        native_fee,
        zro_fee: Default::default(),
    })
    .change_context(Error::JsonSerialization)
}

pub fn inbound_nonce(
    deps: Deps,
    src_chain_id: ChainId,
    src_address: HexBinary,
) -> Result<Binary, Error> {
    let nonce = state::inbound_nonce(deps.storage, src_chain_id, &src_address)
        .change_context(Error::State)?;

    to_json_binary(&nonce).change_context(Error::JsonSerialization)
}

pub fn outbound_nonce(
    deps: Deps,
    dst_chain_id: ChainId,
    src_address: String,
) -> Result<Binary, Error> {
    let sender = address::validate_cosmwasm_address(deps.api, &src_address)
        .change_context(Error::InvalidAddress)?;
    let nonce =
        state::outbound_nonce(deps.storage, dst_chain_id, &sender).change_context(Error::State)?;

    to_json_binary(&nonce).change_context(Error::JsonSerialization)
}

pub fn has_stored_payload(
    deps: Deps,
    src_chain_id: ChainId,
    src_address: HexBinary,
) -> Result<Binary, Error> {
    let stored = state::may_load_stored_payload(deps.storage, src_chain_id, &src_address)
        .change_context(Error::State)?
        .is_some();

    to_json_binary(&stored).change_context(Error::JsonSerialization)
}

pub fn chain_id(deps: Deps) -> Result<Binary, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;

    to_json_binary(&config.chain_id).change_context(Error::JsonSerialization)
}
