use cosmwasm_std::{
    coin, Addr, Api, BankMsg, Deps, DepsMut, Env, HexBinary, MessageInfo, QuerierWrapper,
    Response, Storage, Uint128,
};
use error_stack::{ensure, Result, ResultExt};
use lz_endpoint_api::{path, ChainId};
use relayer_wasm_std::{address, permission_control};

use crate::events::RelayerEvent;
use crate::msg::{InstantiateMsg, TrustedRemote};
use crate::state::{self, Config};
use crate::Recipient;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("invalid address")]
    InvalidAddress,
    #[error("failed to access the relayer state")]
    State,
    #[error("invalid payment")]
    InvalidPayment,
    #[error("invalid recipient")]
    InvalidRecipient,
    #[error("caller address cannot be used as an implicit recipient")]
    ImplicitRecipientUnavailable,
    #[error("no trusted remote configured for destination chain {0}")]
    UntrustedDestination(ChainId),
    #[error("trusted remote path for chain {0} must not be empty")]
    EmptyTrustedRemotePath(ChainId),
    #[error("failed to estimate the transport fee")]
    FeeEstimation,
    #[error("fee computation overflowed")]
    FeeOverflow,
    #[error("insufficient fee: required {required}, paid {paid}")]
    InsufficientFee { required: Uint128, paid: Uint128 },
    #[error("delivery amount must be greater than zero")]
    ZeroDeliveryAmount,
    #[error("amount must be greater than zero")]
    ZeroAmount,
    #[error("failed to query the relayer balance")]
    BalanceQuery,
    #[error("insufficient balance: required {required}, available {available}")]
    InsufficientBalance {
        required: Uint128,
        available: Uint128,
    },
}

pub fn instantiate(deps: DepsMut, msg: InstantiateMsg) -> Result<Response, Error> {
    let admin = address::validate_cosmwasm_address(deps.api, &msg.admin_address)
        .change_context(Error::InvalidAddress)?;
    let endpoint = address::validate_cosmwasm_address(deps.api, &msg.endpoint_address)
        .change_context(Error::InvalidAddress)?;

    ensure!(!msg.delivery_amount.is_zero(), Error::ZeroDeliveryAmount);

    permission_control::set_admin(deps.storage, &admin).change_context(Error::State)?;

    state::save_config(
        deps.storage,
        &Config {
            endpoint,
            denom: msg.denom,
            protocol_fee: msg
                .protocol_fee
                .unwrap_or(Uint128::new(lz_networks::DEFAULT_PROTOCOL_FEE)),
            delivery_amount: msg.delivery_amount,
            require_trusted_destination: msg.require_trusted_destination,
        },
    )
    .change_context(Error::State)?;

    for TrustedRemote { chain_id, path } in msg.trusted_remotes {
        save_trusted_remote(deps.storage, chain_id, &path)?;
    }

    Ok(Response::new())
}

/// Sends a relay message that delivers gas to `recipient` on `destination_chain_id`.
///
/// The attached payment must cover the live transport fee plus the protocol fee. The protocol fee
/// stays in the relayer's balance and everything else is forwarded to the endpoint, which refunds
/// any excess over its own fee to the caller.
pub fn relay(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    destination_chain_id: ChainId,
    recipient: Option<HexBinary>,
) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;
    let paid = cw_utils::must_pay(&info, &config.denom).change_context(Error::InvalidPayment)?;

    let recipient = match recipient {
        Some(recipient) => {
            Recipient::try_from(recipient.as_slice()).change_context(Error::InvalidRecipient)?
        }
        None => implicit_recipient(deps.api, &info.sender)?,
    };
    let payload = recipient.abi_encode();

    let destination = destination_path(
        deps.as_ref(),
        &config,
        &env.contract.address,
        destination_chain_id,
    )?;

    let endpoint: lz_endpoint_api::Client =
        client::ContractClient::new(deps.querier, config.endpoint.clone()).into();
    let required = relay_fee(
        &endpoint,
        &config,
        &env.contract.address,
        destination_chain_id,
        payload.clone(),
    )?;
    ensure!(paid >= required, Error::InsufficientFee { required, paid });

    let amount_forwarded = paid
        .checked_sub(config.protocol_fee)
        .change_context(Error::FeeOverflow)?;
    let funds = if amount_forwarded.is_zero() {
        vec![]
    } else {
        vec![coin(amount_forwarded.u128(), &config.denom)]
    };

    let relay_index = state::RELAYS_SENT
        .incr(deps.storage)
        .change_context(Error::State)?;

    Ok(Response::new()
        .add_message(endpoint.send(
            destination_chain_id,
            destination,
            payload,
            &info.sender,
            HexBinary::default(),
            funds,
        ))
        .add_event(
            RelayerEvent::GasSent {
                relay_index,
                sender: info.sender,
                destination_chain_id,
                recipient,
                amount_forwarded,
                protocol_fee: config.protocol_fee,
            },
        ))
}

/// Total amount a relay to `destination_chain_id` must carry: the endpoint's current native fee
/// for the payload plus the protocol fee. Never cached.
pub(super) fn relay_fee(
    endpoint: &lz_endpoint_api::Client,
    config: &Config,
    relayer: &Addr,
    destination_chain_id: ChainId,
    payload: HexBinary,
) -> Result<Uint128, Error> {
    let fees = endpoint
        .estimate_fees(destination_chain_id, relayer, payload, HexBinary::default())
        .change_context(Error::FeeEstimation)?;

    fees.native_fee
        .checked_add(config.protocol_fee)
        .change_context(Error::FeeOverflow)
}

fn implicit_recipient(api: &dyn Api, sender: &Addr) -> Result<Recipient, Error> {
    let sender_bytes = address::to_bytes(api, sender).change_context(Error::InvalidAddress)?;

    Recipient::try_from(sender_bytes.as_slice())
        .change_context(Error::ImplicitRecipientUnavailable)
}

fn destination_path(
    deps: Deps,
    config: &Config,
    relayer: &Addr,
    destination_chain_id: ChainId,
) -> Result<HexBinary, Error> {
    match state::may_load_trusted_remote(deps.storage, destination_chain_id)
        .change_context(Error::State)?
    {
        Some(path) => Ok(path),
        None => {
            ensure!(
                !config.require_trusted_destination,
                Error::UntrustedDestination(destination_chain_id)
            );

            // mirrored deployment: the relayer on the destination has this relayer's address
            let relayer_bytes =
                address::to_bytes(deps.api, relayer).change_context(Error::InvalidAddress)?;
            Ok(path::encode(&relayer_bytes, &relayer_bytes))
        }
    }
}

fn save_trusted_remote(
    storage: &mut dyn Storage,
    chain_id: ChainId,
    path: &HexBinary,
) -> Result<(), Error> {
    ensure!(!path.is_empty(), Error::EmptyTrustedRemotePath(chain_id));

    state::save_trusted_remote(storage, chain_id, path).change_context(Error::State)
}

pub fn set_trusted_remote(
    deps: DepsMut,
    chain_id: ChainId,
    path: HexBinary,
) -> Result<Response, Error> {
    save_trusted_remote(deps.storage, chain_id, &path)?;

    Ok(Response::new().add_event(RelayerEvent::TrustedRemoteSet { chain_id, path }))
}

pub fn set_trusted_remote_address(
    deps: DepsMut,
    env: Env,
    chain_id: ChainId,
    remote_address: HexBinary,
) -> Result<Response, Error> {
    ensure!(
        !remote_address.is_empty(),
        Error::EmptyTrustedRemotePath(chain_id)
    );

    let relayer_bytes = address::to_bytes(deps.api, &env.contract.address)
        .change_context(Error::InvalidAddress)?;

    set_trusted_remote(deps, chain_id, path::encode(&remote_address, &relayer_bytes))
}

pub fn remove_trusted_remote(deps: DepsMut, chain_id: ChainId) -> Result<Response, Error> {
    state::remove_trusted_remote(deps.storage, chain_id).change_context(Error::State)?;

    Ok(Response::new().add_event(RelayerEvent::TrustedRemoteRemoved { chain_id }))
}

pub fn set_protocol_fee(deps: DepsMut, protocol_fee: Uint128) -> Result<Response, Error> {
    state::update_config(deps.storage, |config| Config {
        protocol_fee,
        ..config
    })
    .change_context(Error::State)?;

    Ok(Response::new().add_event(RelayerEvent::ProtocolFeeSet { protocol_fee }))
}

pub fn set_delivery_amount(deps: DepsMut, delivery_amount: Uint128) -> Result<Response, Error> {
    ensure!(!delivery_amount.is_zero(), Error::ZeroDeliveryAmount);

    state::update_config(deps.storage, |config| Config {
        delivery_amount,
        ..config
    })
    .change_context(Error::State)?;

    Ok(Response::new().add_event(RelayerEvent::DeliveryAmountSet { delivery_amount }))
}

pub fn set_outbound_policy(
    deps: DepsMut,
    require_trusted_destination: bool,
) -> Result<Response, Error> {
    state::update_config(deps.storage, |config| Config {
        require_trusted_destination,
        ..config
    })
    .change_context(Error::State)?;

    Ok(Response::new().add_event(
        RelayerEvent::OutboundPolicySet {
            require_trusted_destination,
        },
    ))
}

pub fn top_up(deps: DepsMut, info: MessageInfo) -> Result<Response, Error> {
    let config = state::load_config(deps.storage).change_context(Error::State)?;
    let amount = cw_utils::must_pay(&info, &config.denom).change_context(Error::InvalidPayment)?;

    Ok(Response::new().add_event(
        RelayerEvent::ToppedUp {
            sender: info.sender,
            amount,
        },
    ))
}

pub fn withdraw(
    deps: DepsMut,
    env: Env,
    recipient: String,
    amount: Uint128,
) -> Result<Response, Error> {
    let recipient = address::validate_cosmwasm_address(deps.api, &recipient)
        .change_context(Error::InvalidAddress)?;
    ensure!(!amount.is_zero(), Error::ZeroAmount);

    let config = state::load_config(deps.storage).change_context(Error::State)?;
    ensure_balance(deps.querier, &env.contract.address, &config.denom, amount)?;

    Ok(Response::new()
        .add_message(BankMsg::Send {
            to_address: recipient.to_string(),
            amount: vec![coin(amount.u128(), &config.denom)],
        })
        .add_event(RelayerEvent::Withdrawn { recipient, amount }))
}

pub fn update_admin(deps: DepsMut, new_admin_address: String) -> Result<Response, Error> {
    let new_admin = address::validate_cosmwasm_address(deps.api, &new_admin_address)
        .change_context(Error::InvalidAddress)?;

    permission_control::set_admin(deps.storage, &new_admin).change_context(Error::State)?;

    Ok(Response::new().add_event(RelayerEvent::AdminUpdated { new_admin }))
}

/// Fails unless the relayer holds at least `required` of `denom`.
pub(super) fn ensure_balance(
    querier: QuerierWrapper,
    relayer: &Addr,
    denom: &str,
    required: Uint128,
) -> Result<(), Error> {
    let available = querier
        .query_balance(relayer, denom)
        .change_context(Error::BalanceQuery)?
        .amount;

    ensure!(
        available >= required,
        Error::InsufficientBalance {
            required,
            available
        }
    );

    Ok(())
}
