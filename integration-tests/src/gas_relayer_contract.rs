use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_multi_test::{App, ContractWrapper, Executor};
use gas_relayer::msg::{InstantiateMsg, TrustedRemote};
use lz_endpoint_api::ChainId;

use crate::contract::Contract;

#[derive(Clone)]
pub struct GasRelayerContract {
    pub contract_addr: Addr,
}

impl GasRelayerContract {
    pub fn instantiate_contract(
        app: &mut App,
        admin: Addr,
        endpoint: Addr,
        denom: &str,
        protocol_fee: Uint128,
        delivery_amount: Uint128,
        trusted_remotes: Vec<TrustedRemote>,
    ) -> Self {
        let code = ContractWrapper::new(
            gas_relayer::contract::execute,
            gas_relayer::contract::instantiate,
            gas_relayer::contract::query,
        )
        .with_reply(gas_relayer::contract::reply);
        let code_id = app.store_code(Box::new(code));

        let contract_addr = app
            .instantiate_contract(
                code_id,
                admin.clone(),
                &InstantiateMsg {
                    admin_address: admin.to_string(),
                    endpoint_address: endpoint.to_string(),
                    denom: denom.to_string(),
                    protocol_fee: Some(protocol_fee),
                    delivery_amount,
                    require_trusted_destination: false,
                    trusted_remotes,
                },
                &[],
                "gas_relayer",
                None,
            )
            .unwrap();

        GasRelayerContract { contract_addr }
    }

    pub fn estimate_fee_relay(
        &self,
        app: &App,
        destination_chain_id: ChainId,
        recipient: HexBinary,
    ) -> Uint128 {
        self.query(
            app,
            &gas_relayer::msg::QueryMsg::EstimateFeeRelay {
                destination_chain_id,
                recipient,
            },
        )
        .unwrap()
    }

    pub fn relays_sent(&self, app: &App) -> u64 {
        self.query(app, &gas_relayer::msg::QueryMsg::RelaysSent)
            .unwrap()
    }
}

impl Contract for GasRelayerContract {
    type QMsg = gas_relayer::msg::QueryMsg;
    type ExMsg = gas_relayer::msg::ExecuteMsg;

    fn contract_address(&self) -> &Addr {
        &self.contract_addr
    }
}
