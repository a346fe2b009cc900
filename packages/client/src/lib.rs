use std::marker::PhantomData;

use cosmwasm_std::{
    to_json_binary, Addr, Coin, QuerierWrapper, QueryRequest, StdError, WasmMsg, WasmQuery,
};
use error_stack::{Report, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    QueryFailed(#[from] StdError),
}

/// Untyped building block for contract clients: serializes execute messages of type `M` into
/// `WasmMsg`s and runs smart queries of type `Q` against the contract at `address`.
pub struct ContractClient<'a, M, Q>
where
    M: Serialize,
    Q: Serialize,
{
    pub querier: QuerierWrapper<'a>,
    pub address: Addr,
    execute_msg_type: PhantomData<M>,
    query_msg_type: PhantomData<Q>,
}

impl<'a, M, Q> ContractClient<'a, M, Q>
where
    M: Serialize,
    Q: Serialize,
{
    pub fn new(querier: QuerierWrapper<'a>, address: Addr) -> Self {
        ContractClient {
            querier,
            address,
            execute_msg_type: PhantomData,
            query_msg_type: PhantomData,
        }
    }

    pub fn execute(&self, msg: &M) -> WasmMsg {
        self.execute_with_funds(msg, vec![])
    }

    pub fn execute_with_funds(&self, msg: &M, funds: Vec<Coin>) -> WasmMsg {
        WasmMsg::Execute {
            contract_addr: self.address.to_string(),
            msg: to_json_binary(msg).expect("msg should always be serializable"),
            funds,
        }
    }

    pub fn query<R>(&self, msg: &Q) -> Result<R, Error>
    where
        R: DeserializeOwned,
    {
        self.querier
            .query(&QueryRequest::Wasm(WasmQuery::Smart {
                contract_addr: self.address.to_string(),
                msg: to_json_binary(msg).expect("msg should always be serializable"),
            }))
            .map_err(Error::from)
            .map_err(Report::new)
    }
}
