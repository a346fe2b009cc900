use cosmwasm_std::testing::MockApi;
use cosmwasm_std::{Addr, Api, CanonicalAddr, HexBinary};
use gas_relayer::Recipient;
use lz_endpoint_api::ChainId;

pub const DENOM: &str = "uatom";
pub const PROTOCOL_FEE: u128 = 50_000_000;
pub const DELIVERY_AMOUNT: u128 = 1_000_000;
/// Native fee the mocked endpoint charges on top of the payload length
pub const BASE_NATIVE_FEE: u128 = 1_000;

pub const REMOTE_CHAIN: ChainId = ChainId::new(10102);
pub const OTHER_REMOTE_CHAIN: ChainId = ChainId::new(10109);
/// Known to the endpoint, but without a trusted remote
pub const UNTRUSTED_CHAIN: ChainId = ChainId::new(10143);
/// Unknown to the endpoint
pub const UNKNOWN_CHAIN: ChainId = ChainId::new(9999);

pub fn admin() -> Addr {
    MockApi::default().addr_make("admin")
}

pub fn endpoint() -> Addr {
    MockApi::default().addr_make("endpoint")
}

pub fn user() -> Addr {
    MockApi::default().addr_make("user")
}

/// A caller whose canonical address is 20 bytes long and can therefore receive gas implicitly
pub fn evm_style_user() -> Addr {
    MockApi::default()
        .addr_humanize(&CanonicalAddr::from(vec![0x42; 20]))
        .unwrap()
}

pub fn recipient_bytes() -> HexBinary {
    HexBinary::from([0xca; 20])
}

pub fn recipient() -> Recipient {
    Recipient::try_from(recipient_bytes().as_slice()).unwrap()
}

/// Local address of the bytes carried in a relay payload
pub fn recipient_addr() -> Addr {
    MockApi::default()
        .addr_humanize(&CanonicalAddr::from(recipient_bytes().to_vec()))
        .unwrap()
}

pub fn remote_relayer() -> HexBinary {
    HexBinary::from([0xaa; 20])
}

pub fn trusted_path() -> HexBinary {
    HexBinary::from([[0xaa; 20], [0xbb; 20]].concat())
}

/// Native fee the mocked endpoint charges for a relay payload
pub fn native_fee() -> u128 {
    BASE_NATIVE_FEE.saturating_add(32)
}

pub fn relay_fee() -> u128 {
    native_fee().saturating_add(PROTOCOL_FEE)
}
