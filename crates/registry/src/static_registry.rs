use op_params_primitives::HashMap;

use crate::{ChainMetadata, Registry, SuperchainMetadata};

/// An error that occurs while constructing a [`StaticRegistry`].
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// The registry data is not valid TOML or does not match the expected
    /// layout.
    #[error("Failed to parse registry data: {0}")]
    Parse(#[from] toml::de::Error),
    /// Two chains share the same chain ID.
    #[error("Chain ID {chain_id} is registered more than once")]
    DuplicateChain {
        /// The duplicated chain ID.
        chain_id: u64,
    },
    /// Two superchains share the same name.
    #[error("Superchain '{name}' is registered more than once")]
    DuplicateSuperchain {
        /// The duplicated superchain name.
        name: String,
    },
}

/// On-disk layout of registry data.
#[derive(serde::Deserialize)]
struct RegistryFile {
    #[serde(default)]
    superchains: Vec<SuperchainMetadata>,
    #[serde(default)]
    chains: Vec<ChainMetadata>,
}

/// An immutable, in-memory [`Registry`].
#[derive(Clone, Debug, Default)]
pub struct StaticRegistry {
    chains: HashMap<u64, ChainMetadata>,
    superchains: HashMap<String, SuperchainMetadata>,
}

impl StaticRegistry {
    /// Parses registry data in TOML format.
    ///
    /// The data consists of a `superchains` and a `chains` array of tables.
    /// Chains may refer to superchains that are not part of the data; such
    /// chains fail to resolve instead of failing to load.
    pub fn from_toml_str(data: &str) -> Result<Self, RegistryError> {
        let RegistryFile {
            superchains,
            chains,
        } = toml::from_str(data)?;

        let mut registry = Self::default();
        for superchain in superchains {
            registry.insert_superchain(superchain)?;
        }
        for chain in chains {
            registry.insert_chain(chain)?;
        }

        log::debug!(
            "Loaded registry with {} chains and {} superchains",
            registry.chains.len(),
            registry.superchains.len()
        );

        Ok(registry)
    }

    /// Adds a chain to the registry.
    pub fn insert_chain(&mut self, chain: ChainMetadata) -> Result<(), RegistryError> {
        let chain_id = chain.chain_id;
        if self.chains.contains_key(&chain_id) {
            return Err(RegistryError::DuplicateChain { chain_id });
        }

        self.chains.insert(chain_id, chain);
        Ok(())
    }

    /// Adds a superchain to the registry.
    pub fn insert_superchain(
        &mut self,
        superchain: SuperchainMetadata,
    ) -> Result<(), RegistryError> {
        if self.superchains.contains_key(&superchain.name) {
            return Err(RegistryError::DuplicateSuperchain {
                name: superchain.name,
            });
        }

        self.superchains.insert(superchain.name.clone(), superchain);
        Ok(())
    }

    /// Returns the IDs of all registered chains in ascending order.
    pub fn chain_ids(&self) -> Vec<u64> {
        let mut chain_ids: Vec<u64> = self.chains.keys().copied().collect();
        chain_ids.sort_unstable();
        chain_ids
    }
}

impl Registry for StaticRegistry {
    fn chain_metadata(&self, chain_id: u64) -> Option<&ChainMetadata> {
        self.chains.get(&chain_id)
    }

    fn superchain_metadata(&self, name: &str) -> Option<&SuperchainMetadata> {
        self.superchains.get(name)
    }
}
