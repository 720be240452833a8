#![warn(missing_docs)]

//! Primitive types shared by the `op_params` crates.
//!
//! All types are re-exported from `alloy-primitives` so that every crate in
//! the workspace agrees on a single definition.

pub use alloy_primitives::{
    Address, B64, B256, Bloom, Bytes, U256, address, b256, bytes, hex, keccak256, map::HashMap,
};

/// Keccak-256 hash of the RLP encoding of an empty byte string, i.e. the root
/// of an empty Merkle-Patricia trie.
pub const KECCAK_NULL_RLP: B256 =
    b256!("0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421");

/// Keccak-256 hash of empty input, i.e. the code hash of an account without
/// code.
pub const KECCAK_EMPTY: B256 =
    b256!("0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470");

/// Keccak-256 hash of the RLP encoding of an empty list, i.e. the ommers hash
/// of a block without ommers.
pub const KECCAK_EMPTY_LIST_RLP: B256 =
    b256!("0x1dcc4de8dec75d7aab85b567b6ccd41ad312451b948a7413f0a142fd40d49347");
