use cosmwasm_std::testing::{mock_dependencies, mock_env, MockApi, MockQuerier, MockStorage};
use cosmwasm_std::{
    coins, from_json, to_json_binary, ContractResult, OwnedDeps, SystemError, SystemResult,
    Uint128, WasmQuery,
};
use lz_endpoint_api::msg::QueryMsg as EndpointQueryMsg;
use lz_endpoint_api::FeesResponse;

use crate::utils::params;

/// Dependencies whose querier answers fee estimates the way a messaging layer endpoint would:
/// a base fee plus one unit per payload byte, for every chain except `UNKNOWN_CHAIN`.
pub fn mock_deps() -> OwnedDeps<MockStorage, MockApi, MockQuerier> {
    let mut deps = mock_dependencies();
    let endpoint = params::endpoint();

    deps.querier.update_wasm(move |query| match query {
        WasmQuery::Smart { contract_addr, msg } if contract_addr == endpoint.as_str() => {
            match from_json::<EndpointQueryMsg>(msg) {
                Ok(EndpointQueryMsg::EstimateFees {
                    dst_chain_id,
                    payload,
                    ..
                }) if dst_chain_id != params::UNKNOWN_CHAIN => {
                    let native_fee = params::BASE_NATIVE_FEE.saturating_add(payload.len() as u128);
                    SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&FeesResponse {
                            native_fee: Uint128::new(native_fee),
                            zro_fee: Uint128::zero(),
                        })
                        .unwrap(),
                    ))
                }
                Ok(_) => SystemResult::Ok(ContractResult::Err(
                    "unknown destination chain".to_string(),
                )),
                Err(err) => SystemResult::Err(SystemError::InvalidRequest {
                    error: err.to_string(),
                    request: msg.clone(),
                }),
            }
        }
        WasmQuery::Smart { contract_addr, .. } => SystemResult::Err(SystemError::NoSuchContract {
            addr: contract_addr.clone(),
        }),
        _ => SystemResult::Err(SystemError::UnsupportedRequest {
            kind: "wasm".to_string(),
        }),
    });

    deps
}

pub fn set_relayer_balance(deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>, amount: u128) {
    deps.querier
        .bank
        .update_balance(mock_env().contract.address, coins(amount, params::DENOM));
}
