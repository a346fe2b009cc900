use cosmwasm_std::testing::{message_info, mock_env};
use cosmwasm_std::{coins, Addr, DepsMut, HexBinary, Response, Uint128};
use gas_relayer::contract;
use gas_relayer::msg::ExecuteMsg;
use lz_endpoint_api::{ChainId, LzReceiveMsg};
use relayer_wasm_std::error::ContractError;

use crate::utils::params;

pub fn relay(
    deps: DepsMut,
    sender: &Addr,
    payment: u128,
    destination_chain_id: ChainId,
    recipient: Option<HexBinary>,
) -> Result<Response, ContractError> {
    contract::execute(
        deps,
        mock_env(),
        message_info(sender, &coins(payment, params::DENOM)),
        ExecuteMsg::Relay {
            destination_chain_id,
            recipient,
        },
    )
}

pub fn inbound_msg(src_chain_id: ChainId, src_address: HexBinary, nonce: u64) -> LzReceiveMsg {
    LzReceiveMsg {
        src_chain_id,
        src_address,
        nonce,
        payload: params::recipient().abi_encode(),
    }
}

pub fn lz_receive(
    deps: DepsMut,
    sender: &Addr,
    msg: LzReceiveMsg,
) -> Result<Response, ContractError> {
    contract::execute(
        deps,
        mock_env(),
        message_info(sender, &[]),
        ExecuteMsg::LzReceive(msg),
    )
}

pub fn nonblocking_lz_receive(
    deps: DepsMut,
    sender: &Addr,
    msg: LzReceiveMsg,
) -> Result<Response, ContractError> {
    contract::execute(
        deps,
        mock_env(),
        message_info(sender, &[]),
        ExecuteMsg::NonblockingLzReceive(msg),
    )
}

pub fn retry_message(deps: DepsMut, msg: LzReceiveMsg) -> Result<Response, ContractError> {
    contract::execute(
        deps,
        mock_env(),
        message_info(&params::user(), &[]),
        ExecuteMsg::RetryMessage(msg),
    )
}

pub fn execute_as(
    deps: DepsMut,
    sender: &Addr,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    contract::execute(deps, mock_env(), message_info(sender, &[]), msg)
}

pub fn set_protocol_fee(
    deps: DepsMut,
    sender: &Addr,
    protocol_fee: u128,
) -> Result<Response, ContractError> {
    execute_as(
        deps,
        sender,
        ExecuteMsg::SetProtocolFee {
            protocol_fee: Uint128::new(protocol_fee),
        },
    )
}

pub fn set_trusted_remote(
    deps: DepsMut,
    sender: &Addr,
    chain_id: ChainId,
    path: HexBinary,
) -> Result<Response, ContractError> {
    execute_as(deps, sender, ExecuteMsg::SetTrustedRemote { chain_id, path })
}
