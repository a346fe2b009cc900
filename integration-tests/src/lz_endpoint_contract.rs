use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};
use lz_endpoint_api::ChainId;
use lz_endpoint_mock::msg::InstantiateMsg;

use crate::contract::Contract;

#[derive(Clone)]
pub struct LzEndpointContract {
    pub contract_addr: Addr,
    pub chain_id: ChainId,
}

impl LzEndpointContract {
    pub fn instantiate_contract(
        app: &mut App,
        owner: Addr,
        chain_id: ChainId,
        denom: &str,
        base_fee: Uint128,
        fee_per_byte: Uint128,
    ) -> Self {
        let code = ContractWrapper::new(
            lz_endpoint_mock::contract::execute,
            lz_endpoint_mock::contract::instantiate,
            lz_endpoint_mock::contract::query,
        )
        .with_reply(lz_endpoint_mock::contract::reply);
        let code_id = app.store_code(Box::new(code));

        let contract_addr = app
            .instantiate_contract(
                code_id,
                owner,
                &InstantiateMsg {
                    chain_id,
                    denom: denom.to_string(),
                    base_fee,
                    fee_per_byte,
                },
                &[],
                format!("lz_endpoint_{}", chain_id),
                None,
            )
            .unwrap();

        LzEndpointContract {
            contract_addr,
            chain_id,
        }
    }

    pub fn has_stored_payload(
        &self,
        app: &App,
        src_chain_id: ChainId,
        src_address: HexBinary,
    ) -> bool {
        self.query(
            app,
            &lz_endpoint_mock::msg::QueryMsg::HasStoredPayload {
                src_chain_id,
                src_address,
            },
        )
        .unwrap()
    }
}

impl Contract for LzEndpointContract {
    type QMsg = lz_endpoint_mock::msg::QueryMsg;
    type ExMsg = lz_endpoint_mock::msg::ExecuteMsg;

    fn contract_address(&self) -> &Addr {
        &self.contract_addr
    }
}
