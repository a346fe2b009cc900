use cosmwasm_std::Addr;
use cw_multi_test::App;
use lz_endpoint_api::ChainId;

use crate::gas_relayer_contract::GasRelayerContract;
use crate::lz_endpoint_contract::LzEndpointContract;

/// One simulated chain: its messaging layer endpoint and the gas relayer deployed against it.
#[derive(Clone)]
pub struct Chain {
    pub chain_id: ChainId,
    pub endpoint: LzEndpointContract,
    pub gas_relayer: GasRelayerContract,
}

pub struct Protocol {
    pub genesis_address: Addr, // holds u128::max coins, can use to send coins to other addresses
    pub admin_address: Addr,
    pub app: App,
}
