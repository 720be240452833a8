use op_params_primitives::Address;
use op_params_registry::Registry;

/// An error that occurs when looking up a `SystemConfig` contract address.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SystemConfigError {
    /// The chain is not registered.
    #[error("Unknown chain ID: {chain_id}")]
    UnknownChain {
        /// The requested chain ID.
        chain_id: u64,
    },
}

/// Resolves the L1 address of a chain's `SystemConfig` contract.
pub trait SystemConfigAddressResolver {
    /// Returns the address of the `SystemConfig` contract of the chain with
    /// the provided ID.
    fn system_config_address(&self, chain_id: u64) -> Result<Address, SystemConfigError>;
}

/// Looks up `SystemConfig` proxy addresses in a [`Registry`].
#[derive(Clone, Copy, Debug)]
pub struct RegistryAddressLookup<RegistryT> {
    registry: RegistryT,
}

impl<RegistryT: Registry> RegistryAddressLookup<RegistryT> {
    /// Constructs a new instance that reads from the provided registry.
    pub fn new(registry: RegistryT) -> Self {
        Self { registry }
    }
}

impl<RegistryT: Registry> SystemConfigAddressResolver for RegistryAddressLookup<RegistryT> {
    fn system_config_address(&self, chain_id: u64) -> Result<Address, SystemConfigError> {
        let address = self
            .registry
            .chain_metadata(chain_id)
            .map(|chain| chain.addresses.system_config_proxy)
            .ok_or(SystemConfigError::UnknownChain { chain_id })?;

        log::debug!("SystemConfig of chain {chain_id} is at {address}");

        Ok(address)
    }
}
