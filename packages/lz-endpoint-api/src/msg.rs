use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{HexBinary, Uint128};

use crate::ChainId;

/// Execute interface every endpoint offers to user applications.
#[cw_serde]
pub enum ExecuteMsg {
    /// Send `payload` to the application addressed by `destination` (a trusted-remote path) on
    /// `dst_chain_id`. The native fee is attached as funds; any excess goes to `refund_address`.
    Send {
        dst_chain_id: ChainId,
        destination: HexBinary,
        payload: HexBinary,
        refund_address: String,
        zro_payment_address: Option<String>,
        adapter_params: HexBinary,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Fees to deliver `payload` from `user_application` to `dst_chain_id` under current conditions
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
}

#[cw_serde]
pub struct FeesResponse {
    pub native_fee: Uint128,
    pub zro_fee: Uint128,
}

/// A message delivered by an endpoint to the receiving application.
#[cw_serde]
pub struct LzReceiveMsg {
    pub src_chain_id: ChainId,
    /// trusted-remote path of the sender: remote application bytes followed by local application bytes
    pub src_address: HexBinary,
    pub nonce: u64,
    pub payload: HexBinary,
}

/// Execute message shape the endpoint uses to call into a receiving application.
/// Applications embed it as an `LzReceive(LzReceiveMsg)` variant of their own `ExecuteMsg`.
#[cw_serde]
pub enum LzReceiverMsg {
    LzReceive(LzReceiveMsg),
}
