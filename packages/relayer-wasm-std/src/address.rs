use cosmwasm_std::{Addr, Api, CanonicalAddr, HexBinary};
use error_stack::{Result, ResultExt};

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("invalid address '{0}'")]
    InvalidAddress(String),
    #[error("bytes {0} do not form a valid address on this chain")]
    InvalidAddressBytes(HexBinary),
}

pub fn validate_cosmwasm_address(api: &dyn Api, addr: &str) -> Result<Addr, Error> {
    api.addr_validate(addr)
        .change_context(Error::InvalidAddress(addr.to_string()))
}

/// Raw address bytes of `addr`, the form in which addresses travel across chains.
pub fn to_bytes(api: &dyn Api, addr: &Addr) -> Result<Vec<u8>, Error> {
    api.addr_canonicalize(addr.as_str())
        .map(Vec::from)
        .change_context(Error::InvalidAddress(addr.to_string()))
}

pub fn from_bytes(api: &dyn Api, bytes: &[u8]) -> Result<Addr, Error> {
    api.addr_humanize(&CanonicalAddr::from(bytes))
        .change_context(Error::InvalidAddressBytes(bytes.into()))
}
