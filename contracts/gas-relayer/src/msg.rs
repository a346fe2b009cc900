use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, HexBinary, Uint128};
use lz_endpoint_api::{ChainId, LzReceiveMsg};
use msgs_derive::EnsurePermissions;

#[cw_serde]
pub struct InstantiateMsg {
    pub admin_address: String,
    /// Address of the messaging layer endpoint on this chain
    pub endpoint_address: String,
    /// Native denom in which relay fees are paid and gas is delivered
    pub denom: String,
    /// Flat fee retained per relay. Defaults to 50,000,000 when omitted.
    pub protocol_fee: Option<Uint128>,
    /// Amount of `denom` delivered to the recipient of each inbound relay
    pub delivery_amount: Uint128,
    /// If set, relays are only sent to chains that have a trusted remote configured
    pub require_trusted_destination: bool,
    /// Initial trusted remotes
    pub trusted_remotes: Vec<TrustedRemote>,
}

#[cw_serde]
pub struct TrustedRemote {
    pub chain_id: ChainId,
    /// Remote relayer address bytes followed by this relayer's address bytes
    pub path: HexBinary,
}

#[cw_serde]
#[derive(EnsurePermissions)]
pub enum ExecuteMsg {
    /// Pay to have gas delivered to `recipient` on the destination chain.
    /// Without an explicit recipient the caller's own address is used, which then must be 20 bytes long.
    #[permission(Any)]
    Relay {
        destination_chain_id: ChainId,
        recipient: Option<HexBinary>,
    },
    /// Inbound delivery, only callable by the messaging layer endpoint
    #[permission(Specific(endpoint))]
    LzReceive(LzReceiveMsg),
    /// Delivery stage of an inbound message, only callable by the relayer itself
    #[permission(Specific(own_address))]
    NonblockingLzReceive(LzReceiveMsg),
    /// Retry a delivery that previously failed and was stored
    #[permission(Any)]
    RetryMessage(LzReceiveMsg),

    #[permission(Admin)]
    SetTrustedRemote { chain_id: ChainId, path: HexBinary },
    /// Trust `remote_address` on `chain_id`, deriving the path from this relayer's own address
    #[permission(Admin)]
    SetTrustedRemoteAddress {
        chain_id: ChainId,
        remote_address: HexBinary,
    },
    #[permission(Admin)]
    RemoveTrustedRemote { chain_id: ChainId },
    #[permission(Admin)]
    SetProtocolFee { protocol_fee: Uint128 },
    #[permission(Admin)]
    SetDeliveryAmount { delivery_amount: Uint128 },
    #[permission(Admin)]
    SetOutboundPolicy { require_trusted_destination: bool },
    /// Add the attached funds to the balance used for deliveries
    #[permission(Any)]
    TopUp,
    #[permission(Admin)]
    Withdraw { recipient: String, amount: Uint128 },
    #[permission(Admin)]
    UpdateAdmin { new_admin_address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Total amount to attach to a `Relay` call: the live transport fee plus the protocol fee
    #[returns(Uint128)]
    EstimateFeeRelay {
        destination_chain_id: ChainId,
        recipient: HexBinary,
    },
    #[returns(ConfigResponse)]
    Config,
    #[returns(Option<HexBinary>)]
    TrustedRemote { chain_id: ChainId },
    #[returns(bool)]
    IsTrustedRemote { chain_id: ChainId, path: HexBinary },
    /// Payload hash of a stored failed delivery
    #[returns(Option<HexBinary>)]
    FailedMessage {
        src_chain_id: ChainId,
        src_address: HexBinary,
        nonce: u64,
    },
    #[returns(Addr)]
    Admin,
    #[returns(u64)]
    RelaysSent,
}

#[cw_serde]
pub struct ConfigResponse {
    pub endpoint: Addr,
    pub denom: String,
    pub protocol_fee: Uint128,
    pub delivery_amount: Uint128,
    pub require_trusted_destination: bool,
}
