// Part of this code was adapted from foundry and is distributed under their
// licenses:
// - https://github.com/foundry-rs/foundry/blob/01b16238ff87dc7ca8ee3f5f13e389888c2a2ee4/LICENSE-APACHE
// - https://github.com/foundry-rs/foundry/blob/01b16238ff87dc7ca8ee3f5f13e389888c2a2ee4/LICENSE-MIT
// For the original context see: https://github.com/foundry-rs/foundry/blob/01b16238ff87dc7ca8ee3f5f13e389888c2a2ee4/anvil/core/src/eth/trie.rs

#![warn(missing_docs)]
//! Merkle-Patricia trie roots for genesis state.

use hash256_std_hasher::Hash256StdHasher;
use op_params_primitives::B256;
use sha3::{
    Digest, Keccak256,
    digest::generic_array::{GenericArray, typenum::consts::U32},
};

/// Generates a key-hashed (secure) trie root hash for a vector of key-value
/// tuples.
///
/// This is the layout of both the world state trie (keyed by address) and
/// account storage tries (keyed by slot).
pub fn sec_trie_root<I, K, V>(input: I) -> B256
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<[u8]>,
    V: AsRef<[u8]>,
{
    B256::from_slice(triehash::sec_trie_root::<KeccakHasher, _, _, _>(input).as_ref())
}

struct KeccakHasher;

impl hash_db::Hasher for KeccakHasher {
    type Out = GenericArray<u8, U32>;

    type StdHasher = Hash256StdHasher;

    const LENGTH: usize = 32;

    fn hash(x: &[u8]) -> Self::Out {
        Keccak256::digest(x)
    }
}
