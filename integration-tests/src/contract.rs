use cosmwasm_std::{Addr, Coin, StdError, StdResult, Uint128};
use cw_multi_test::{App, AppResponse, Executor};
use error_stack::{report, Result};
use relayer_wasm_std::error::ContractError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// A contract instantiated in the multi-test app, addressed through its own message types.
pub trait Contract {
    type QMsg: Serialize;
    type ExMsg: Serialize + std::fmt::Debug;

    fn contract_address(&self) -> &Addr;

    fn query<T: DeserializeOwned>(&self, app: &App, msg: &Self::QMsg) -> StdResult<T> {
        app.wrap().query_wasm_smart(self.contract_address(), msg)
    }

    /// Bank balance held by the contract itself.
    fn balance(&self, app: &App, denom: &str) -> StdResult<Uint128> {
        app.wrap()
            .query_balance(self.contract_address(), denom)
            .map(|coin| coin.amount)
    }

    fn execute(
        &self,
        app: &mut App,
        caller: Addr,
        msg: &Self::ExMsg,
    ) -> Result<AppResponse, ContractError> {
        self.execute_with_funds(app, caller, msg, &[])
    }

    /// Executes `msg` as `caller`. A failure is reported as the error the contract returned, or,
    /// when the app rejected the call before reaching the contract, as a generic std error.
    fn execute_with_funds(
        &self,
        app: &mut App,
        caller: Addr,
        msg: &Self::ExMsg,
        funds: &[Coin],
    ) -> Result<AppResponse, ContractError> {
        app.execute_contract(caller, self.contract_address().clone(), msg, funds)
            .map_err(|err| match err.downcast::<ContractError>() {
                Ok(contract_err) => report!(contract_err),
                Err(err) => {
                    let std_err = err
                        .downcast::<StdError>()
                        .unwrap_or_else(|err| StdError::generic_err(format!("{err:#}")));
                    report!(ContractError::from(std_err))
                }
            })
    }
}
