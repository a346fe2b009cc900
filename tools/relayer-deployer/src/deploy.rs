use bech32::primitives::decode::CheckedHrpstring;
use bech32::Bech32;
use cosmwasm_std::Uint128;
use error_stack::{bail, ensure, report, Result, ResultExt};
use gas_relayer::msg::{InstantiateMsg, TrustedRemote};
use lz_endpoint_api::ChainId;
use tracing::{debug, info};

use crate::config::{DeploymentConfig, TrustedRemoteConfig};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to resolve the messaging layer endpoint of network {0}")]
    Endpoint(String),
    #[error("endpoint {endpoint} registered for network {network} is not a CosmWasm address, set `endpoint` in the deployment file")]
    ForeignEndpoint { network: String, endpoint: String },
    #[error("{field} address {address} is not a bech32 address")]
    InvalidAddress {
        field: &'static str,
        address: String,
    },
    #[error("delivery amount must be greater than zero")]
    ZeroDeliveryAmount,
    #[error("trusted remote must set exactly one of `chain_id` and `public_chain_id`")]
    AmbiguousRemoteChain,
    #[error("failed to resolve the messaging layer chain id of public chain {0}")]
    RemoteChain(u64),
    #[error("trusted remote path for chain {0} must not be empty")]
    EmptyTrustedRemotePath(ChainId),
    #[error("chain {0} has more than one trusted remote")]
    DuplicateTrustedRemote(ChainId),
}

/// Builds the instantiate message of the gas relayer deployed on `network`.
pub fn instantiate_msg(network: &str, config: DeploymentConfig) -> Result<InstantiateMsg, Error> {
    let endpoint_address = match config.endpoint {
        Some(endpoint) => {
            info!(network, endpoint = %endpoint, "using configured endpoint");
            ensure_bech32("endpoint", &endpoint)?;
            endpoint
        }
        None => registered_endpoint(network)?,
    };
    ensure_bech32("admin", &config.admin)?;

    ensure!(config.delivery_amount > 0, Error::ZeroDeliveryAmount);

    let trusted_remotes = trusted_remotes(config.trusted_remotes)?;
    debug!(count = trusted_remotes.len(), "trusted remotes loaded");

    Ok(InstantiateMsg {
        admin_address: config.admin,
        endpoint_address,
        denom: config.denom,
        protocol_fee: Some(Uint128::new(
            config
                .protocol_fee
                .unwrap_or(lz_networks::DEFAULT_PROTOCOL_FEE),
        )),
        delivery_amount: Uint128::new(config.delivery_amount),
        require_trusted_destination: config.require_trusted_destination,
        trusted_remotes,
    })
}

// the registry holds the endpoints of EVM networks, which a relayer cannot use directly
fn registered_endpoint(network: &str) -> Result<String, Error> {
    let endpoint = lz_networks::endpoint(network)
        .attach_printable_lazy(|| {
            format!(
                "known networks: {}",
                lz_networks::networks().collect::<Vec<_>>().join(", ")
            )
        })
        .change_context_lazy(|| Error::Endpoint(network.to_string()))?;

    ensure_bech32("endpoint", endpoint).change_context_lazy(|| Error::ForeignEndpoint {
        network: network.to_string(),
        endpoint: endpoint.to_string(),
    })?;

    Ok(endpoint.to_string())
}

fn ensure_bech32(field: &'static str, address: &str) -> Result<(), Error> {
    CheckedHrpstring::new::<Bech32>(address)
        .map(|_| ())
        .change_context_lazy(|| Error::InvalidAddress {
            field,
            address: address.to_string(),
        })
}

fn remote_chain_id(remote: &TrustedRemoteConfig) -> Result<ChainId, Error> {
    match (remote.chain_id, remote.public_chain_id) {
        (Some(chain_id), None) => Ok(ChainId::from(chain_id)),
        (None, Some(public_chain_id)) => lz_networks::lz_chain_id(public_chain_id)
            .change_context(Error::RemoteChain(public_chain_id)),
        _ => bail!(Error::AmbiguousRemoteChain),
    }
}

fn trusted_remotes(remotes: Vec<TrustedRemoteConfig>) -> Result<Vec<TrustedRemote>, Error> {
    let mut trusted_remotes: Vec<TrustedRemote> = Vec::with_capacity(remotes.len());

    for remote in remotes {
        let chain_id = remote_chain_id(&remote)?;

        ensure!(
            !remote.path.is_empty(),
            Error::EmptyTrustedRemotePath(chain_id)
        );
        if trusted_remotes
            .iter()
            .any(|trusted| trusted.chain_id == chain_id)
        {
            return Err(report!(Error::DuplicateTrustedRemote(chain_id)));
        }

        trusted_remotes.push(TrustedRemote {
            chain_id,
            path: remote.path,
        });
    }

    Ok(trusted_remotes)
}
