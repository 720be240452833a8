#![warn(missing_docs)]

//! Chain parameters of OP Stack chains.
//!
//! Resolves per-chain consensus configuration, builds and verifies genesis
//! blocks, and looks up `SystemConfig` contract addresses, all from the
//! registry that is embedded in the binary. The underlying crates accept any
//! [`Registry`] for callers that bring their own data.

mod system_config;

pub use op_params_chain_config::{
    ChainConfig, ChainConfigError, ChainOverride, ForkCondition, ForkOrderError, Hardfork,
    OptimismConfig, chain_override,
};
pub use op_params_genesis::{
    BlockHeader, Genesis, GenesisAccount, GenesisAlloc, GenesisError, GenesisHasher,
    HeaderHasher, VerifiedGenesis, build_genesis, verify_genesis,
};
pub use op_params_primitives::{Address, B256};
pub use op_params_registry::{
    ChainMetadata, Registry, StaticRegistry, SuperchainMetadata, embedded_registry,
};

pub use self::system_config::{
    RegistryAddressLookup, SystemConfigAddressResolver, SystemConfigError,
};

/// Resolves the [`ChainConfig`] of the chain with the provided ID from the
/// embedded registry.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn resolve_chain_config(chain_id: u64) -> Result<ChainConfig, ChainConfigError> {
    op_params_chain_config::resolve_chain_config(embedded_registry(), chain_id)
}

/// Builds the genesis block of the chain with the provided ID from the
/// embedded registry and verifies it with [`HeaderHasher`].
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn build_and_verify_genesis(chain_id: u64) -> Result<VerifiedGenesis, GenesisError> {
    op_params_genesis::build_and_verify_genesis(embedded_registry(), &HeaderHasher, chain_id)
}

/// Returns the `SystemConfig` proxy address of the chain with the provided ID
/// from the embedded registry.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn resolve_system_config_address(chain_id: u64) -> Result<Address, SystemConfigError> {
    RegistryAddressLookup::new(embedded_registry()).system_config_address(chain_id)
}
