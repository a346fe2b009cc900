use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Item;
pub use flagset::FlagSet;
use flagset::flags;

flags! {
    #[repr(u8)]
    pub enum Permission: u8 {
        NoPrivilege = 0b01, // the sender MUST NOT be the admin
        Admin = 0b10,
        Any = (Permission::NoPrivilege | Permission::Admin).bits(),
    }
}

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("sender with role '{actual:?}' is not allowed to perform this action that requires '{expected:?}' permissions")]
    PermissionDenied {
        expected: FlagSet<Permission>,
        actual: FlagSet<Permission>,
    },
    #[error("sender '{actual}' must be one of the addresses {expected:?}")]
    AddressNotWhitelisted { expected: Vec<Addr>, actual: Addr },
    #[error("no whitelisting condition found for sender '{sender}'")]
    WhitelistNotFound { sender: Addr },
}

const ADMIN: Item<Addr> = Item::new("permission_control_contract_admin_addr");

pub fn set_admin(storage: &mut dyn Storage, addr: &Addr) -> StdResult<()> {
    ADMIN.save(storage, addr)
}

pub fn admin(storage: &dyn Storage) -> StdResult<Addr> {
    ADMIN.load(storage)
}

// called by the code generated from `msgs_derive::EnsurePermissions`
#[doc(hidden)]
pub fn sender_role(storage: &dyn Storage, sender: &Addr) -> StdResult<FlagSet<Permission>> {
    let role = match ADMIN.may_load(storage)? {
        Some(admin) if admin == sender => Permission::Admin,
        _ => Permission::NoPrivilege,
    };

    Ok(role.into())
}
