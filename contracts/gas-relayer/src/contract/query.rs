use cosmwasm_std::{to_json_binary, Binary, Deps, Env, HexBinary};
use error_stack::{Result, ResultExt};
use lz_endpoint_api::ChainId;
use relayer_wasm_std::permission_control;

use super::execute;
use crate::msg::ConfigResponse;
use crate::state;
use crate::Recipient;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to serialize the response")]
    JsonSerialization,
    #[error("failed to access the relayer state")]
    State,
    #[error("invalid recipient")]
    InvalidRecipient,
    #[error("failed to compute the relay fee")]
    Fee,
}

pub fn estimate_fee_relay(
    deps: Deps,
    env: Env,
    destination_chain_id: ChainId,
    recipient: HexBinary,
) -> Result<Binary, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;
    let payload = Recipient::try_from(recipient.as_slice())
        .change_context(Error::InvalidRecipient)?
        .abi_encode();

    let endpoint: lz_endpoint_api::Client =
        client::ContractClient::new(deps.querier, config.endpoint.clone()).into();
    let fee = execute::relay_fee(
        &endpoint,
        &config,
        &env.contract.address,
        destination_chain_id,
        payload,
    )
    .change_context(Error::Fee)?;

    to_json_binary(&fee).change_context(Error::JsonSerialization)
}

pub fn config(deps: Deps) -> Result<Binary, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;

    to_json_binary(&ConfigResponse::from(config)).change_context(Error::JsonSerialization)
}

pub fn trusted_remote(deps: Deps, chain_id: ChainId) -> Result<Binary, Error> {
    let path = state::may_load_trusted_remote(deps.storage, chain_id).change_context(Error::State)?;

    to_json_binary(&path).change_context(Error::JsonSerialization)
}

pub fn is_trusted_remote(deps: Deps, chain_id: ChainId, path: HexBinary) -> Result<Binary, Error> {
    let trusted = state::may_load_trusted_remote(deps.storage, chain_id)
        .change_context(Error::State)?
        .is_some_and(|trusted| trusted == path);

    to_json_binary(&trusted).change_context(Error::JsonSerialization)
}

pub fn failed_message(
    deps: Deps,
    src_chain_id: ChainId,
    src_address: HexBinary,
    nonce: u64,
) -> Result<Binary, Error> {
    let payload_hash =
        state::may_load_failed_message(deps.storage, src_chain_id, &src_address, nonce)
            .change_context(Error::State)?;

    to_json_binary(&payload_hash).change_context(Error::JsonSerialization)
}

pub fn admin(deps: Deps) -> Result<Binary, Error> {
    let admin = permission_control::admin(deps.storage).change_context(Error::State)?;

    to_json_binary(&admin).change_context(Error::JsonSerialization)
}

pub fn relays_sent(deps: Deps) -> Result<Binary, Error> {
    let count = state::RELAYS_SENT
        .current(deps.storage)
        .change_context(Error::State)?;

    to_json_binary(&count).change_context(Error::JsonSerialization)
}
