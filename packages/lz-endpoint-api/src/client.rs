use cosmwasm_std::{Addr, Coin, HexBinary, WasmMsg};
use error_stack::{Result, ResultExt};

use crate::msg::{ExecuteMsg, FeesResponse, QueryMsg};
use crate::ChainId;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("failed to estimate fees to chain {dst_chain_id} at endpoint {endpoint}")]
    EstimateFees {
        dst_chain_id: ChainId,
        endpoint: Addr,
    },
    #[error("failed to query inbound nonce from chain {src_chain_id} at endpoint {endpoint}")]
    InboundNonce {
        src_chain_id: ChainId,
        endpoint: Addr,
    },
}

impl<'a> From<client::ContractClient<'a, ExecuteMsg, QueryMsg>> for Client<'a> {
    fn from(client: client::ContractClient<'a, ExecuteMsg, QueryMsg>) -> Self {
        Client { client }
    }
}

/// Typed client for the endpoint a user application sends through.
pub struct Client<'a> {
    client: client::ContractClient<'a, ExecuteMsg, QueryMsg>,
}

impl<'a> Client<'a> {
    pub fn address(&self) -> &Addr {
        &self.client.address
    }

    pub fn send(
        &self,
        dst_chain_id: ChainId,
        destination: HexBinary,
        payload: HexBinary,
        refund_address: &Addr,
        adapter_params: HexBinary,
        funds: Vec<Coin>,
    ) -> WasmMsg {
        self.client.execute_with_funds(
            &ExecuteMsg::Send {
                dst_chain_id,
                destination,
                payload,
                refund_address: refund_address.to_string(),
                zro_payment_address: None,
                adapter_params,
            },
            funds,
        )
    }

    pub fn estimate_fees(
        &self,
        dst_chain_id: ChainId,
        user_application: &Addr,
        payload: HexBinary,
        adapter_params: HexBinary,
    ) -> Result<FeesResponse, Error> {
        self.client
            .query(&QueryMsg::EstimateFees {
                dst_chain_id,
                user_application: user_application.to_string(),
                payload,
                pay_in_zro: false,
                adapter_params,
            })
            .change_context_lazy(|| Error::EstimateFees {
                dst_chain_id,
                endpoint: self.client.address.clone(),
            })
    }

    pub fn inbound_nonce(&self, src_chain_id: ChainId, src_address: HexBinary) -> Result<u64, Error> {
        self.client
            .query(&QueryMsg::InboundNonce {
                src_chain_id,
                src_address,
            })
            .change_context_lazy(|| Error::InboundNonce {
                src_chain_id,
                endpoint: self.client.address.clone(),
            })
    }
}
