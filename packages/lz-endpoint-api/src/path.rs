//! Trusted-remote paths: the remote application's address bytes followed by the local one's.

use cosmwasm_std::HexBinary;

pub fn encode(remote: &[u8], local: &[u8]) -> HexBinary {
    [remote, local].concat().into()
}

/// Splits the remote application's bytes off a path that ends with `local`.
pub fn remote<'a>(path: &'a [u8], local: &[u8]) -> Option<&'a [u8]> {
    path.strip_suffix(local).filter(|remote| !remote.is_empty())
}
