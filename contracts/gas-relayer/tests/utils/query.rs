use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{from_json, Addr, Deps, HexBinary, Uint128};
use gas_relayer::contract::query;
use gas_relayer::msg::{ConfigResponse, QueryMsg};
use lz_endpoint_api::ChainId;
use relayer_wasm_std::error::ContractError;

pub fn query_estimate_fee_relay(
    deps: Deps,
    destination_chain_id: ChainId,
    recipient: HexBinary,
) -> Result<Uint128, ContractError> {
    let bin = query(
        deps,
        mock_env(),
        QueryMsg::EstimateFeeRelay {
            destination_chain_id,
            recipient,
        },
    )?;
    Ok(from_json(bin)?)
}

pub fn query_config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    let bin = query(deps, mock_env(), QueryMsg::Config)?;
    Ok(from_json(bin)?)
}

pub fn query_trusted_remote(
    deps: Deps,
    chain_id: ChainId,
) -> Result<Option<HexBinary>, ContractError> {
    let bin = query(deps, mock_env(), QueryMsg::TrustedRemote { chain_id })?;
    Ok(from_json(bin)?)
}

pub fn query_failed_message(
    deps: Deps,
    src_chain_id: ChainId,
    src_address: HexBinary,
    nonce: u64,
) -> Result<Option<HexBinary>, ContractError> {
    let bin = query(
        deps,
        mock_env(),
        QueryMsg::FailedMessage {
            src_chain_id,
            src_address,
            nonce,
        },
    )?;
    Ok(from_json(bin)?)
}

pub fn query_admin(deps: Deps) -> Result<Addr, ContractError> {
    let bin = query(deps, mock_env(), QueryMsg::Admin)?;
    Ok(from_json(bin)?)
}

pub fn query_relays_sent(deps: Deps) -> Result<u64, ContractError> {
    let bin = query(deps, mock_env(), QueryMsg::RelaysSent)?;
    Ok(from_json(bin)?)
}
