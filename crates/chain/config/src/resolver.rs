use op_params_registry::Registry;

use crate::{ChainConfig, chain_override};

/// An error that occurs when resolving a [`ChainConfig`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChainConfigError {
    /// The chain is not registered.
    #[error("Unknown chain ID: {chain_id}")]
    UnknownChain {
        /// The requested chain ID.
        chain_id: u64,
    },
    /// The chain refers to a superchain that is not registered.
    #[error("Chain {chain_id} belongs to unknown superchain '{superchain}'")]
    UnknownSuperchain {
        /// The requested chain ID.
        chain_id: u64,
        /// The superchain the chain refers to.
        superchain: String,
    },
}

/// Resolves the [`ChainConfig`] of the chain with the provided ID.
///
/// The result only depends on `chain_id` and the contents of `registry`.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn resolve_chain_config<RegistryT: Registry + ?Sized>(
    registry: &RegistryT,
    chain_id: u64,
) -> Result<ChainConfig, ChainConfigError> {
    let chain = registry
        .chain_metadata(chain_id)
        .ok_or(ChainConfigError::UnknownChain { chain_id })?;

    // Superchain-wide upgrades are not scheduled from the registry yet, but a
    // chain must belong to a known superchain to resolve.
    let _superchain = registry.superchain_metadata(&chain.superchain).ok_or_else(|| {
        ChainConfigError::UnknownSuperchain {
            chain_id,
            superchain: chain.superchain.clone(),
        }
    })?;

    let mut config = ChainConfig::bedrock_genesis(chain_id);
    if let Some(chain_override) = chain_override(chain_id) {
        log::debug!(
            "Applying pre-Regolith override of {} to chain {chain_id}",
            chain_override.name
        );

        config.apply_override(chain_override);
    }

    Ok(config)
}
