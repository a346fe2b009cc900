use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{HexBinary, Uint128};
use lz_endpoint_api::{ChainId, FeesResponse};

#[cw_serde]
pub struct InstantiateMsg {
    /// Chain id this endpoint reports as the source of the messages it sends
    pub chain_id: ChainId,
    pub denom: String,
    pub base_fee: Uint128,
    /// Charged per byte of payload and adapter params
    pub fee_per_byte: Uint128,
}

/// `Send` and the shared queries mirror `lz_endpoint_api::msg`, so applications talk to this
/// contract through the regular endpoint client.
#[cw_serde]
pub enum ExecuteMsg {
    /// Route messages for the application `destination` through `endpoint`
    SetDestLzEndpoint {
        destination: String,
        endpoint: String,
    },
    Send {
        dst_chain_id: ChainId,
        destination: HexBinary,
        payload: HexBinary,
        refund_address: String,
        zro_payment_address: Option<String>,
        adapter_params: HexBinary,
    },
    /// Delivers a payload to `dst_address`. Any caller may deliver, this contract is not meant to
    /// authenticate its peers.
    ReceivePayload {
        src_chain_id: ChainId,
        src_address: HexBinary,
        dst_address: String,
        nonce: u64,
        payload: HexBinary,
    },
    /// Delivers a payload that is blocking its path and unblocks the path on success
    RetryPayload {
        src_chain_id: ChainId,
        src_address: HexBinary,
        payload: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(FeesResponse)]
    EstimateFees {
        dst_chain_id: ChainId,
        user_application: String,
        payload: HexBinary,
        pay_in_zro: bool,
        adapter_params: HexBinary,
    },
    #[returns(u64)]
    InboundNonce {
        src_chain_id: ChainId,
        src_address: HexBinary,
    },
    #[returns(u64)]
    OutboundNonce {
        dst_chain_id: ChainId,
        src_address: String,
    },
    #[returns(bool)]
    HasStoredPayload {
        src_chain_id: ChainId,
        src_address: HexBinary,
    },
    #[returns(ChainId)]
    ChainId,
}
