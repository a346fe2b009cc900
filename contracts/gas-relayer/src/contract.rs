#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, Storage};
use error_stack::{report, Report, ResultExt};
use lz_endpoint_api::ChainId;
use relayer_wasm_std::error::ContractError;
use relayer_wasm_std::{FnExt, IntoContractError};

use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state;

mod execute;
mod migrations;
mod query;
mod receive;

pub use migrations::MigrateMsg;

const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Reply id of the self-call that performs an inbound delivery
const NONBLOCKING_RECEIVE_REPLY_ID: u64 = 1;

#[derive(thiserror::Error, Debug, IntoContractError)]
pub enum Error {
    #[error("failed to instantiate the gas relayer")]
    Instantiate,
    #[error("failed to relay gas to chain {0}")]
    Relay(ChainId),
    #[error("failed to receive message {nonce} from chain {src_chain_id}")]
    LzReceive { src_chain_id: ChainId, nonce: u64 },
    #[error("failed to deliver message {nonce} from chain {src_chain_id}")]
    NonblockingLzReceive { src_chain_id: ChainId, nonce: u64 },
    #[error("failed to retry message {nonce} from chain {src_chain_id}")]
    RetryMessage { src_chain_id: ChainId, nonce: u64 },
    #[error("failed to set the trusted remote of chain {0}")]
    SetTrustedRemote(ChainId),
    #[error("failed to remove the trusted remote of chain {0}")]
    RemoveTrustedRemote(ChainId),
    #[error("failed to set the protocol fee")]
    SetProtocolFee,
    #[error("failed to set the delivery amount")]
    SetDeliveryAmount,
    #[error("failed to set the outbound policy")]
    SetOutboundPolicy,
    #[error("failed to top up the relayer balance")]
    TopUp,
    #[error("failed to withdraw from the relayer balance")]
    Withdraw,
    #[error("failed to update the admin")]
    UpdateAdmin,
    #[error("failed to handle reply {0}")]
    Reply(u64),
    #[error("unknown reply id {0}")]
    UnknownReplyId(u64),
    #[error("failed to estimate the relay fee to chain {0}")]
    EstimateFeeRelay(ChainId),
    #[error("failed to query the relayer config")]
    QueryConfig,
    #[error("failed to query the trusted remote of chain {0}")]
    QueryTrustedRemote(ChainId),
    #[error("failed to query failed message {nonce} from chain {src_chain_id}")]
    QueryFailedMessage { src_chain_id: ChainId, nonce: u64 },
    #[error("failed to query the admin")]
    QueryAdmin,
    #[error("failed to query the number of relays sent")]
    QueryRelaysSent,
    #[error("failed to migrate the gas relayer")]
    Migrate,
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _: Env,
    _: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    execute::instantiate(deps, msg)
        .change_context(Error::Instantiate)?
        .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    let own_address = env.contract.address.clone();

    match msg.ensure_permissions(deps.storage, &info.sender, match_endpoint, |_, _| {
        Ok::<_, Report<Error>>(own_address)
    })? {
        ExecuteMsg::Relay {
            destination_chain_id,
            recipient,
        } => execute::relay(deps, env, info, destination_chain_id, recipient)
            .change_context(Error::Relay(destination_chain_id)),
        ExecuteMsg::LzReceive(msg) => {
            let context = Error::LzReceive {
                src_chain_id: msg.src_chain_id,
                nonce: msg.nonce,
            };
            receive::lz_receive(deps, env, msg).change_context(context)
        }
        ExecuteMsg::NonblockingLzReceive(msg) => {
            let context = Error::NonblockingLzReceive {
                src_chain_id: msg.src_chain_id,
                nonce: msg.nonce,
            };
            receive::deliver(deps, env, msg).change_context(context)
        }
        ExecuteMsg::RetryMessage(msg) => {
            let context = Error::RetryMessage {
                src_chain_id: msg.src_chain_id,
                nonce: msg.nonce,
            };
            receive::retry_message(deps, env, msg).change_context(context)
        }
        ExecuteMsg::SetTrustedRemote { chain_id, path } => {
            execute::set_trusted_remote(deps, chain_id, path)
                .change_context(Error::SetTrustedRemote(chain_id))
        }
        ExecuteMsg::SetTrustedRemoteAddress {
            chain_id,
            remote_address,
        } => execute::set_trusted_remote_address(deps, env, chain_id, remote_address)
            .change_context(Error::SetTrustedRemote(chain_id)),
        ExecuteMsg::RemoveTrustedRemote { chain_id } => {
            execute::remove_trusted_remote(deps, chain_id)
                .change_context(Error::RemoveTrustedRemote(chain_id))
        }
        ExecuteMsg::SetProtocolFee { protocol_fee } => {
            execute::set_protocol_fee(deps, protocol_fee).change_context(Error::SetProtocolFee)
        }
        ExecuteMsg::SetDeliveryAmount { delivery_amount } => {
            execute::set_delivery_amount(deps, delivery_amount)
                .change_context(Error::SetDeliveryAmount)
        }
        ExecuteMsg::SetOutboundPolicy {
            require_trusted_destination,
        } => execute::set_outbound_policy(deps, require_trusted_destination)
            .change_context(Error::SetOutboundPolicy),
        ExecuteMsg::TopUp => execute::top_up(deps, info).change_context(Error::TopUp),
        ExecuteMsg::Withdraw { recipient, amount } => {
            execute::withdraw(deps, env, recipient, amount).change_context(Error::Withdraw)
        }
        ExecuteMsg::UpdateAdmin { new_admin_address } => {
            execute::update_admin(deps, new_admin_address).change_context(Error::UpdateAdmin)
        }
    }?
    .then(Ok)
}

fn match_endpoint(storage: &dyn Storage, _: &ExecuteMsg) -> Result<Addr, Report<state::Error>> {
    Ok(state::load_config(storage)?.endpoint)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _: Env, reply: Reply) -> Result<Response, ContractError> {
    match reply.id {
        NONBLOCKING_RECEIVE_REPLY_ID => {
            receive::handle_delivery_result(deps, reply.result).change_context(Error::Reply(reply.id))
        }
        id => Err(report!(Error::UnknownReplyId(id))),
    }?
    .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::EstimateFeeRelay {
            destination_chain_id,
            recipient,
        } => query::estimate_fee_relay(deps, env, destination_chain_id, recipient)
            .change_context(Error::EstimateFeeRelay(destination_chain_id)),
        QueryMsg::Config => query::config(deps).change_context(Error::QueryConfig),
        QueryMsg::TrustedRemote { chain_id } => {
            query::trusted_remote(deps, chain_id).change_context(Error::QueryTrustedRemote(chain_id))
        }
        QueryMsg::IsTrustedRemote { chain_id, path } => query::is_trusted_remote(deps, chain_id, path)
            .change_context(Error::QueryTrustedRemote(chain_id)),
        QueryMsg::FailedMessage {
            src_chain_id,
            src_address,
            nonce,
        } => query::failed_message(deps, src_chain_id, src_address, nonce).change_context(
            Error::QueryFailedMessage {
                src_chain_id,
                nonce,
            },
        ),
        QueryMsg::Admin => query::admin(deps).change_context(Error::QueryAdmin),
        QueryMsg::RelaysSent => query::relays_sent(deps).change_context(Error::QueryRelaysSent),
    }?
    .then(Ok)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, msg: MigrateMsg) -> Result<Response, ContractError> {
    migrations::migrate(deps.storage, msg).change_context(Error::Migrate)?;

    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::default())
}
