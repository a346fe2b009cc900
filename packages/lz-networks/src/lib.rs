//! Static deployment tables mapping public chain ids to messaging layer chain ids, and network
//! names to the messaging layer endpoint deployed on them.

use error_stack::{report, Result};
use lz_endpoint_api::ChainId;

/// Protocol fee used when a deployment does not configure one.
pub const DEFAULT_PROTOCOL_FEE: u128 = 50_000_000;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    #[error("Unknown network {0}")]
    UnknownNetwork(String),
    #[error("no messaging layer chain id known for public chain id {0}")]
    UnknownChainId(u64),
}

const CHAIN_IDS: &[(u64, u16)] = &[
    (5, 10121),        // goerli
    (97, 10102),       // bsc-testnet
    (43113, 10106),    // fuji
    (80001, 10109),    // mumbai
    (421613, 10143),   // arbitrum-goerli
    (84531, 10160),    // base-goerli
    (11155111, 10161), // sepolia
];

const ENDPOINTS: &[(&str, &str)] = &[
    ("goerli", "0xbfD2135BFfbb0B5378b56643c2Df8a87552Bfa23"),
    ("bsc-testnet", "0x6Fcb97553D41516Cb228ac03FdC8B9a0a9df04A1"),
    ("fuji", "0x93f54D755A063cE7bB9e6Ac47Eccc8e33411d706"),
    ("mumbai", "0xf69186dfBa60DdB133E91E9A4B5673624293d8F8"),
    ("arbitrum-goerli", "0x6aB5Ae6822647046626e83ee6dB8187151E1d5ab"),
    ("optimism-goerli", "0xae92d5aD7583AD66E49A0c67BAd18F6ba52dDDc1"),
    ("fantom-testnet", "0x7dcAD72640F835B0FA36EFD3D6d3ec902C7E5acf"),
    ("meter-testnet", "0x3De2f3D1Ac59F18159ebCB422322Cb209BA96aAD"),
    ("zksync-testnet", "0x093D2CF57f764f09C3c2Ac58a42A2601B8C79281"),
];

pub fn lz_chain_id(public_chain_id: u64) -> Result<ChainId, Error> {
    CHAIN_IDS
        .iter()
        .find(|(public, _)| *public == public_chain_id)
        .map(|(_, lz)| ChainId::new(*lz))
        .ok_or_else(|| report!(Error::UnknownChainId(public_chain_id)))
}

pub fn endpoint(network: &str) -> Result<&'static str, Error> {
    ENDPOINTS
        .iter()
        .find(|(name, _)| *name == network)
        .map(|(_, endpoint)| *endpoint)
        .ok_or_else(|| report!(Error::UnknownNetwork(network.to_string())))
}

pub fn networks() -> impl Iterator<Item = &'static str> {
    ENDPOINTS.iter().map(|(name, _)| *name)
}
