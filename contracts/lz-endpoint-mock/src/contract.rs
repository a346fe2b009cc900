#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response};
use error_stack::{report, ResultExt};
use lz_endpoint_api::ChainId;
use relayer_wasm_std::error::ContractError;
use relayer_wasm_std::{FnExt, IntoContractError};

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{self, Config};

mod execute;
mod query;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

const RECEIVE_REPLY_ID: u64 = 1;

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("failed to instantiate the endpoint")]
    Instantiate,
    #[error("failed to set a destination endpoint")]
    SetDestLzEndpoint,
    #[error("failed to send to chain {0}")]
    Send(ChainId),
    #[error("failed to receive payload {nonce} from chain {src_chain_id}")]
    ReceivePayload { src_chain_id: ChainId, nonce: u64 },
    #[error("failed to retry the stored payload from chain {0}")]
    RetryPayload(ChainId),
    #[error("failed to handle reply {0}")]
    Reply(u64),
    #[error("unknown reply id {0}")]
    UnknownReplyId(u64),
    #[error("failed to estimate fees to chain {0}")]
    EstimateFees(ChainId),
    #[error("failed to query a nonce")]
    QueryNonce,
    #[error("failed to query a stored payload")]
    QueryStoredPayload,
    #[error("failed to query the chain id")]
    QueryChainId,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    state::save_config(
        deps.storage,
        &Config {
            chain_id: msg.chain_id,
            denom: msg.denom,
            base_fee: msg.base_fee,
            fee_per_byte: msg.fee_per_byte,
        },
    )
    .change_context(Error::Instantiate)?;

    Ok(Response::new())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetDestLzEndpoint {
            destination,
            endpoint,
        } => execute::set_dest_lz_endpoint(deps, destination, endpoint)
            .change_context(Error::SetDestLzEndpoint),
        ExecuteMsg::Send {
            dst_chain_id,
            destination,
            payload,
            refund_address,
            zro_payment_address: _,
            adapter_params,
        } => execute::send(
            deps,
            info,
            dst_chain_id,
            destination,
            payload,
            refund_address,
            adapter_params,
        )
        .change_context(Error::Send(dst_chain_id)),
        ExecuteMsg::ReceivePayload {
            src_chain_id,
            src_address,
            dst_address,
            nonce,
            payload,
        } => execute::receive_payload(deps, src_chain_id, src_address, dst_address, nonce, payload)
            .change_context(Error::ReceivePayload {
                src_chain_id,
                nonce,
            }),
        ExecuteMsg::RetryPayload {
            src_chain_id,
            src_address,
            payload,
        } => execute::retry_payload(deps, src_chain_id, src_address, payload)
            .change_context(Error::RetryPayload(src_chain_id)),
    }?
    .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        RECEIVE_REPLY_ID => {
            execute::handle_receive_result(deps, reply.result).change_context(Error::Reply(reply.id))
        }
        id => Err(report!(Error::UnknownReplyId(id))),
    }?
    .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::EstimateFees {
            dst_chain_id,
            payload,
            adapter_params,
            ..
        } => query::estimate_fees(deps, payload, adapter_params)
            .change_context(Error::EstimateFees(dst_chain_id)),
        QueryMsg::InboundNonce {
            src_chain_id,
            src_address,
        } => query::inbound_nonce(deps, src_chain_id, src_address).change_context(Error::QueryNonce),
        QueryMsg::OutboundNonce {
            dst_chain_id,
            src_address,
        } => query::outbound_nonce(deps, dst_chain_id, src_address).change_context(Error::QueryNonce),
        QueryMsg::HasStoredPayload {
            src_chain_id,
            src_address,
        } => query::has_stored_payload(deps, src_chain_id, src_address)
            .change_context(Error::QueryStoredPayload),
        QueryMsg::ChainId => query::chain_id(deps).change_context(Error::QueryChainId),
    }?
    .then(Ok)
}
