#![warn(missing_docs)]

//! Read-only access to OP Stack chain and superchain metadata.
//!
//! The [`Registry`] trait is the only way the resolver, genesis builder and
//! address lookups see chain data. [`StaticRegistry`] is an immutable,
//! in-memory implementation; [`embedded_registry`] returns the dataset that is
//! compiled into the binary.

mod embedded;
mod metadata;
mod static_registry;

pub use self::{
    embedded::{EMBEDDED_REGISTRY_TOML, embedded_registry},
    metadata::{AddressList, BlockRef, ChainMetadata, GenesisMetadata, L1Metadata, SuperchainMetadata},
    static_registry::{RegistryError, StaticRegistry},
};

/// Lookups of per-chain and per-superchain metadata.
///
/// Implementations are immutable after construction, so they can be shared
/// between threads without synchronization.
pub trait Registry: Send + Sync {
    /// Returns the metadata of the chain with the provided ID, if registered.
    fn chain_metadata(&self, chain_id: u64) -> Option<&ChainMetadata>;

    /// Returns the metadata of the superchain with the provided name, if
    /// registered.
    fn superchain_metadata(&self, name: &str) -> Option<&SuperchainMetadata>;
}

impl<RegistryT: Registry + ?Sized> Registry for &RegistryT {
    fn chain_metadata(&self, chain_id: u64) -> Option<&ChainMetadata> {
        (**self).chain_metadata(chain_id)
    }

    fn superchain_metadata(&self, name: &str) -> Option<&SuperchainMetadata> {
        (**self).superchain_metadata(name)
    }
}
