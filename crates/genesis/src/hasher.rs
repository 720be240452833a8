use op_params_primitives::B256;

use crate::Genesis;

/// Computes the block hash of a genesis block.
pub trait GenesisHasher {
    /// Returns the hash of the provided genesis block.
    fn genesis_hash(&self, genesis: &Genesis) -> B256;
}

impl<HasherT: GenesisHasher + ?Sized> GenesisHasher for &HasherT {
    fn genesis_hash(&self, genesis: &Genesis) -> B256 {
        (**self).genesis_hash(genesis)
    }
}

/// Hashes the RLP-encoded [`crate::BlockHeader`] of the genesis block, the
/// way an execution client commits to it.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeaderHasher;

impl GenesisHasher for HeaderHasher {
    fn genesis_hash(&self, genesis: &Genesis) -> B256 {
        genesis.to_header().hash()
    }
}
