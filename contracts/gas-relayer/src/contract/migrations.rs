use cosmwasm_schema::cw_serde;
use cosmwasm_std::Storage;
use error_stack::{ensure, Result, ResultExt};

use super::CONTRACT_NAME;

#[cw_serde]
pub struct MigrateMsg {}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read the stored contract version")]
    ContractVersion,
    #[error("cannot migrate from contract {0}")]
    WrongContract(String),
}

pub fn migrate(storage: &mut dyn Storage, _msg: MigrateMsg) -> Result<(), Error> {
    let stored = cw2::get_contract_version(storage).change_context(Error::ContractVersion)?;

    ensure!(
        stored.contract == CONTRACT_NAME,
        Error::WrongContract(stored.contract)
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_ok::assert_ok;
    use cosmwasm_std::testing::MockStorage;
    use relayer_wasm_std::assert_err_contains;

    use super::*;

    #[test]
    fn migrate_accepts_a_previous_gas_relayer_version() {
        let mut storage = MockStorage::new();
        assert_ok!(cw2::set_contract_version(&mut storage, CONTRACT_NAME, "0.9.0"));

        assert_ok!(migrate(&mut storage, MigrateMsg {}));
    }

    #[test]
    fn migrate_rejects_other_contracts() {
        let mut storage = MockStorage::new();
        assert_ok!(cw2::set_contract_version(&mut storage, "lz-endpoint-mock", "1.0.0"));

        assert_err_contains!(
            migrate(&mut storage, MigrateMsg {}),
            Error,
            Error::WrongContract(name) if name == "lz-endpoint-mock"
        );
    }

    #[test]
    fn migrate_requires_a_stored_version() {
        let mut storage = MockStorage::new();

        assert_err_contains!(
            migrate(&mut storage, MigrateMsg {}),
            Error,
            Error::ContractVersion
        );
    }
}
