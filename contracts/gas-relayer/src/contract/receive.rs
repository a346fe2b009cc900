use cosmwasm_std::{
    coin, BankMsg, DepsMut, Env, HexBinary, Response, Storage, SubMsg, SubMsgResult,
};
use error_stack::{ensure, Result, ResultExt};
use lz_endpoint_api::{ChainId, LzReceiveMsg};
use relayer_wasm_std::address;

use super::{execute, NONBLOCKING_RECEIVE_REPLY_ID};
use crate::events::RelayerEvent;
use crate::msg::{ExecuteMsg, QueryMsg};
use crate::state;
use crate::Recipient;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to access the relayer state")]
    State,
    #[error("source {src_address} is not the trusted remote of chain {src_chain_id}")]
    UntrustedRemote {
        src_chain_id: ChainId,
        src_address: HexBinary,
    },
    #[error("invalid payload")]
    InvalidPayload,
    #[error("recipient {0} is not a valid address on this chain")]
    InvalidRecipient(Recipient),
    #[error("relayer balance cannot cover the delivery")]
    Balance,
    #[error("no failed message {nonce} from chain {src_chain_id} is stored")]
    FailedMessageNotFound { src_chain_id: ChainId, nonce: u64 },
    #[error("payload hash {actual} does not match the stored hash {expected}")]
    InvalidPayloadHash {
        expected: HexBinary,
        actual: HexBinary,
    },
}

/// Validates an inbound message from the endpoint and dispatches its delivery.
///
/// An untrusted source or malformed payload rejects the whole call. Once validated, the delivery
/// runs as a self-call whose failure is caught in `reply` and stored for a retry, so the endpoint
/// sees the message as received either way.
pub fn lz_receive(deps: DepsMut, env: Env, msg: LzReceiveMsg) -> Result<Response, Error> {
    ensure_trusted_remote(deps.storage, msg.src_chain_id, &msg.src_address)?;
    Recipient::abi_decode(&msg.payload).change_context(Error::InvalidPayload)?;

    state::save_pending_delivery(deps.storage, &msg).change_context(Error::State)?;

    let relayer = client::ContractClient::<ExecuteMsg, QueryMsg>::new(
        deps.querier,
        env.contract.address,
    );

    Ok(Response::new().add_submessage(SubMsg::reply_always(
        relayer.execute(&ExecuteMsg::NonblockingLzReceive(msg)),
        NONBLOCKING_RECEIVE_REPLY_ID,
    )))
}

fn ensure_trusted_remote(
    storage: &dyn Storage,
    src_chain_id: ChainId,
    src_address: &HexBinary,
) -> Result<(), Error> {
    let trusted = state::may_load_trusted_remote(storage, src_chain_id)
        .change_context(Error::State)?;

    ensure!(
        trusted.as_ref() == Some(src_address),
        Error::UntrustedRemote {
            src_chain_id,
            src_address: src_address.clone(),
        }
    );

    Ok(())
}

/// Pays the configured delivery amount to the recipient encoded in the payload.
pub fn deliver(deps: DepsMut, env: Env, msg: LzReceiveMsg) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;

    let recipient = Recipient::abi_decode(&msg.payload).change_context(Error::InvalidPayload)?;
    let recipient = address::from_bytes(deps.api, recipient.as_slice())
        .change_context(Error::InvalidRecipient(recipient))?;

    execute::ensure_balance(
        deps.querier,
        &env.contract.address,
        &config.denom,
        config.delivery_amount,
    )
    .change_context(Error::Balance)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![coin(config.delivery_amount.u128(), &config.denom)],
        })
        .add_event(
            RelayerEvent::GasReceived {
                recipient,
                src_chain_id: msg.src_chain_id,
                amount: config.delivery_amount,
            },
        ))
}

pub fn handle_delivery_result(deps: DepsMut, result: SubMsgResult) -> Result<Response, Error> {
    let msg = state::take_pending_delivery(deps.storage).change_context(Error::State)?;

    match result {
        SubMsgResult::Ok(_) => Ok(Response::new()),
        SubMsgResult::Err(reason) => {
            state::save_failed_message(deps.storage, &msg).change_context(Error::State)?;

            Ok(Response::new().add_event(
                RelayerEvent::MessageFailed {
                    src_chain_id: msg.src_chain_id,
                    src_address: msg.src_address,
                    nonce: msg.nonce,
                    payload: msg.payload,
                    reason,
                },
            ))
        }
    }
}

/// Re-runs a stored failed delivery. The stored entry is only cleared if the delivery succeeds.
pub fn retry_message(mut deps: DepsMut, env: Env, msg: LzReceiveMsg) -> Result<Response, Error> {
    let LzReceiveMsg {
        src_chain_id,
        src_address,
        nonce,
        ..
    } = msg.clone();

    let expected = state::may_load_failed_message(deps.storage, src_chain_id, &src_address, nonce)
        .change_context(Error::State)?
        .ok_or(Error::FailedMessageNotFound {
            src_chain_id,
            nonce,
        })?;

    let actual = state::payload_hash(&msg.payload);
    ensure!(
        actual == expected,
        Error::InvalidPayloadHash { expected, actual }
    );

    let response = deliver(deps.branch(), env, msg)?;
    state::remove_failed_message(deps.storage, src_chain_id, &src_address, nonce);

    Ok(response.add_event(
        RelayerEvent::RetryMessageSuccess {
            src_chain_id,
            src_address,
            nonce,
            payload_hash: actual,
        },
    ))
}
