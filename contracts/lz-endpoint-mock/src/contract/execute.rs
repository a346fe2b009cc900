use cosmwasm_std::{
    coin, Addr, BankMsg, DepsMut, Empty, HexBinary, MessageInfo, QuerierWrapper, Response,
    SubMsg, SubMsgResult, Uint128, WasmMsg,
};
use error_stack::{ensure, Result, ResultExt};
use lz_endpoint_api::{path, ChainId, LzReceiveMsg, LzReceiverMsg};
use relayer_wasm_std::address;

use super::RECEIVE_REPLY_ID;
use crate::events::EndpointEvent;
use crate::msg::{ExecuteMsg, QueryMsg};
use crate::state::{self, Config, PendingPayload, StoredPayload};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access the endpoint state")]
    State,
    #[error("invalid address")]
    InvalidAddress,
    #[error("invalid payment")]
    InvalidPayment,
    #[error("fee computation overflowed")]
    FeeOverflow,
    #[error("insufficient fee: required {required}, paid {paid}")]
    InsufficientFee { required: Uint128, paid: Uint128 },
    #[error("destination path {0} does not end with the sender address")]
    InvalidDestination(HexBinary),
    #[error("no destination endpoint registered for {0}")]
    UnknownDestination(Addr),
    #[error("path from chain {src_chain_id} is blocked by a stored payload")]
    PathBlocked { src_chain_id: ChainId },
    #[error("wrong nonce: expected {expected}, got {actual}")]
    WrongNonce { expected: u64, actual: u64 },
    #[error("no payload stored for the path from chain {0}")]
    NoStoredPayload(ChainId),
    #[error("payload does not match the stored payload")]
    InvalidPayload,
}

pub fn set_dest_lz_endpoint(
    deps: DepsMut,
    destination: String,
    endpoint: String,
) -> Result<Response, Error> {
    let destination = address::validate_cosmwasm_address(deps.api, &destination)
        .change_context(Error::InvalidAddress)?;
    let endpoint = address::validate_cosmwasm_address(deps.api, &endpoint)
        .change_context(Error::InvalidAddress)?;

    state::save_dest_endpoint(deps.storage, &destination, &endpoint)
        .change_context(Error::State)?;

    Ok(Response::new().add_event(
        EndpointEvent::DestLzEndpointSet {
            destination,
            endpoint,
        },
    ))
}

pub fn fee(config: &Config, payload_len: usize, adapter_params_len: usize) -> Result<Uint128, Error> {
    let bytes = payload_len
        .checked_add(adapter_params_len)
        .ok_or(Error::FeeOverflow)?;

    config
        .fee_per_byte
        .checked_mul(Uint128::new(bytes as u128))
        .and_then(|per_byte| per_byte.checked_add(config.base_fee))
        .change_context(Error::FeeOverflow)
}

/// Charges the fee, refunds any excess and forwards the payload to the endpoint serving the
/// destination application.
pub fn send(
    deps: DepsMut,
    info: MessageInfo,
    dst_chain_id: ChainId,
    destination: HexBinary,
    payload: HexBinary,
    refund_address: String,
    adapter_params: HexBinary,
) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;

    let required = fee(&config, payload.len(), adapter_params.len())?;
    let paid = cw_utils::may_pay(&info, &config.denom).change_context(Error::InvalidPayment)?;
    ensure!(paid >= required, Error::InsufficientFee { required, paid });

    let refund_address = address::validate_cosmwasm_address(deps.api, &refund_address)
        .change_context(Error::InvalidAddress)?;

    let sender = address::to_bytes(deps.api, &info.sender).change_context(Error::InvalidAddress)?;
    let dst_bytes = path::remote(&destination, &sender)
        .ok_or_else(|| Error::InvalidDestination(destination.clone()))?;
    let dst_address = address::from_bytes(deps.api, dst_bytes)
        .change_context_lazy(|| Error::InvalidDestination(destination.clone()))?;

    let dst_endpoint = state::may_load_dest_endpoint(deps.storage, &dst_address)
        .change_context(Error::State)?
        .ok_or_else(|| Error::UnknownDestination(dst_address.clone()))?;

    let nonce = state::incr_outbound_nonce(deps.storage, dst_chain_id, &info.sender)
        .change_context(Error::State)?;

    let forward = client::ContractClient::<ExecuteMsg, QueryMsg>::new(deps.querier, dst_endpoint)
        .execute(&ExecuteMsg::ReceivePayload {
            src_chain_id: config.chain_id,
            src_address: path::encode(&sender, dst_bytes),
            dst_address: dst_address.to_string(),
            nonce,
            payload,
        });

    let refund = paid.checked_sub(required).change_context(Error::FeeOverflow)?;
    let response = if refund.is_zero() {
        Response::new()
    } else {
        Response::new().add_message(BankMsg::Send {
            to_address: refund_address.to_string(),
            amount: vec![coin(refund.u128(), &config.denom)],
        })
    };

    Ok(response.add_message(forward).add_event(
        EndpointEvent::PacketSent {
            dst_chain_id,
            dst_address,
            nonce,
        },
    ))
}

/// Delivers an inbound payload in nonce order. If the application fails, the payload is stored
/// and blocks its path until retried.
pub fn receive_payload(
    deps: DepsMut,
    src_chain_id: ChainId,
    src_address: HexBinary,
    dst_address: String,
    nonce: u64,
    payload: HexBinary,
) -> Result<Response, Error> {
    let dst_address = address::validate_cosmwasm_address(deps.api, &dst_address)
        .change_context(Error::InvalidAddress)?;

    ensure!(
        state::may_load_stored_payload(deps.storage, src_chain_id, &src_address)
            .change_context(Error::State)?
            .is_none(),
        Error::PathBlocked { src_chain_id }
    );

    let expected = state::inbound_nonce(deps.storage, src_chain_id, &src_address)
        .change_context(Error::State)?
        .saturating_add(1);
    ensure!(
        nonce == expected,
        Error::WrongNonce {
            expected,
            actual: nonce
        }
    );
    state::save_inbound_nonce(deps.storage, src_chain_id, &src_address, nonce)
        .change_context(Error::State)?;

    let pending = PendingPayload {
        src_chain_id,
        src_address,
        stored: StoredPayload {
            dst_address,
            nonce,
            payload,
        },
    };
    state::save_pending_payload(deps.storage, &pending).change_context(Error::State)?;

    Ok(Response::new()
        .add_submessage(SubMsg::reply_always(
            lz_receive_msg(deps.querier, &pending),
            RECEIVE_REPLY_ID,
        ))
        .add_event(
            EndpointEvent::PacketReceived {
                src_chain_id: pending.src_chain_id,
                src_address: pending.src_address,
                dst_address: pending.stored.dst_address,
                nonce,
            },
        ))
}

fn lz_receive_msg(querier: QuerierWrapper, pending: &PendingPayload) -> WasmMsg {
    client::ContractClient::<LzReceiverMsg, Empty>::new(querier, pending.stored.dst_address.clone())
        .execute(&LzReceiverMsg::LzReceive(LzReceiveMsg {
            src_chain_id: pending.src_chain_id,
            src_address: pending.src_address.clone(),
            nonce: pending.stored.nonce,
            payload: pending.stored.payload.clone(),
        }))
}

pub fn handle_receive_result(deps: DepsMut, result: SubMsgResult) -> Result<Response, Error> {
    let PendingPayload {
        src_chain_id,
        src_address,
        stored,
    } = state::take_pending_payload(deps.storage).change_context(Error::State)?;

    match result {
        SubMsgResult::Ok(_) => Ok(Response::new()),
        SubMsgResult::Err(reason) => {
            state::save_stored_payload(deps.storage, src_chain_id, &src_address, &stored)
                .change_context(Error::State)?;

            Ok(Response::new().add_event(
                EndpointEvent::PayloadStored {
                    src_chain_id,
                    src_address,
                    dst_address: stored.dst_address,
                    nonce: stored.nonce,
                    payload: stored.payload,
                    reason,
                },
            ))
        }
    }
}

/// Re-delivers the stored payload of a path. A failing application reverts the retry and the
/// path stays blocked.
pub fn retry_payload(
    deps: DepsMut,
    src_chain_id: ChainId,
    src_address: HexBinary,
    payload: HexBinary,
) -> Result<Response, Error> {
    let stored = state::may_load_stored_payload(deps.storage, src_chain_id, &src_address)
        .change_context(Error::State)?
        .ok_or(Error::NoStoredPayload(src_chain_id))?;
    ensure!(stored.payload == payload, Error::InvalidPayload);

    state::remove_stored_payload(deps.storage, src_chain_id, &src_address);

    let pending = PendingPayload {
        src_chain_id,
        src_address,
        stored,
    };

    Ok(Response::new()
        .add_message(lz_receive_msg(deps.querier, &pending))
        .add_event(
            EndpointEvent::PayloadCleared {
                src_chain_id,
                src_address: pending.src_address,
            },
        ))
}
