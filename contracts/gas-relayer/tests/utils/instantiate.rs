use cosmwasm_std::testing::{message_info, mock_env};
use cosmwasm_std::{DepsMut, Response, Uint128};
use gas_relayer::contract;
use gas_relayer::msg::{InstantiateMsg, TrustedRemote};
use relayer_wasm_std::error::ContractError;

use crate::utils::params;

pub fn instantiate_msg() -> InstantiateMsg {
    InstantiateMsg {
        admin_address: params::admin().to_string(),
        endpoint_address: params::endpoint().to_string(),
        denom: params::DENOM.to_string(),
        protocol_fee: Some(Uint128::new(params::PROTOCOL_FEE)),
        delivery_amount: Uint128::new(params::DELIVERY_AMOUNT),
        require_trusted_destination: false,
        trusted_remotes: vec![TrustedRemote {
            chain_id: params::REMOTE_CHAIN,
            path: params::trusted_path(),
        }],
    }
}

pub fn instantiate(deps: DepsMut, msg: InstantiateMsg) -> Result<Response, ContractError> {
    contract::instantiate(deps, mock_env(), message_info(&params::admin(), &[]), msg)
}

pub fn instantiate_contract(deps: DepsMut) -> Result<Response, ContractError> {
    instantiate(deps, instantiate_msg())
}
