use cosmwasm_std::HexBinary;
use error_stack::{Result, ResultExt};
use serde::Deserialize;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to parse the deployment file")]
    Parse,
}

/// Per-chain deployment file of a gas relayer.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct DeploymentConfig {
    pub admin: String,
    pub denom: String,
    pub protocol_fee: Option<u128>,
    pub delivery_amount: u128,
    #[serde(default)]
    pub require_trusted_destination: bool,
    /// Overrides the endpoint registered for the network
    pub endpoint: Option<String>,
    #[serde(default)]
    pub trusted_remotes: Vec<TrustedRemoteConfig>,
}

/// Remote chain and path of a trusted remote. The chain is given either by its messaging layer
/// id or by its public id, which is resolved through the chain id registry.
#[derive(Deserialize, Debug, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrustedRemoteConfig {
    pub chain_id: Option<u16>,
    pub public_chain_id: Option<u64>,
    pub path: HexBinary,
}

impl DeploymentConfig {
    pub fn parse(content: &str) -> Result<Self, Error> {
        toml::from_str(content).change_context(Error::Parse)
    }
}
