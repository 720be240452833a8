#![warn(missing_docs)]

//! Construction and verification of OP Stack genesis blocks.
//!
//! [`build_genesis`] derives a chain's genesis block from its registry
//! metadata and resolved [`ChainConfig`]. [`verify_genesis`] recomputes the
//! block hash with a [`GenesisHasher`] and only releases a [`VerifiedGenesis`]
//! if it matches the hash that the registry expects.

mod alloc;
mod builder;
mod hasher;
mod header;
mod verifier;

use op_params_chain_config::{ChainConfig, ChainConfigError};
use op_params_primitives::{Address, B256, Bytes, U256};

pub use self::{
    alloc::{GenesisAccount, GenesisAlloc, state_root},
    builder::{DEFAULT_EXTRA_DATA, GENESIS_GAS_LIMIT, MAX_EXTRA_DATA_SIZE, build_genesis},
    hasher::{GenesisHasher, HeaderHasher},
    header::BlockHeader,
    verifier::{VerifiedGenesis, build_and_verify_genesis, verify_genesis},
};

/// An error that occurs when building or verifying a genesis block.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GenesisError {
    /// The chain configuration could not be resolved.
    #[error(transparent)]
    ChainConfig(#[from] ChainConfigError),
    /// The genesis block belongs to a chain that is not registered.
    #[error("Genesis block belongs to unknown chain ID: {chain_id}")]
    UnknownChain {
        /// The chain ID of the genesis block.
        chain_id: u64,
    },
    /// The genesis block's chain configuration differs from the one resolved
    /// from the registry.
    #[error("Genesis block of chain {chain_id} has a chain configuration that differs from the registry's")]
    ConfigMismatch {
        /// The chain ID of the genesis block.
        chain_id: u64,
    },
    /// The genesis extra data exceeds the maximum size.
    #[error(
        "Genesis extra data of chain {chain_id} is {len} bytes long, which exceeds the maximum of {max} bytes",
        max = MAX_EXTRA_DATA_SIZE
    )]
    ExtraDataTooLarge {
        /// The chain ID of the genesis block.
        chain_id: u64,
        /// The length of the extra data.
        len: usize,
    },
    /// The computed genesis hash differs from the registry's.
    #[error("Produced genesis with hash {computed} but expected {expected} for chain {chain_id}")]
    GenesisHashMismatch {
        /// The chain ID of the genesis block.
        chain_id: u64,
        /// The hash computed from the genesis block.
        computed: B256,
        /// The hash recorded in the registry.
        expected: B256,
    },
}

/// The genesis block of a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Genesis {
    /// The chain's configuration
    pub config: ChainConfig,
    /// The block's nonce
    #[serde(default)]
    pub nonce: u64,
    /// The block's timestamp
    #[serde(default)]
    pub timestamp: u64,
    /// The block's extra data
    #[serde(default)]
    pub extra_data: Bytes,
    /// The block's gas limit
    pub gas_limit: u64,
    /// The block's difficulty
    #[serde(default)]
    pub difficulty: U256,
    /// The block's mix hash
    #[serde(default)]
    pub mix_hash: B256,
    /// The block's beneficiary address
    #[serde(default)]
    pub coinbase: Address,
    /// The accounts that exist at genesis
    #[serde(default)]
    pub alloc: GenesisAlloc,
    /// The block's number
    #[serde(default)]
    pub number: u64,
    /// The amount of gas used by the block
    #[serde(default)]
    pub gas_used: u64,
    /// The parent block's hash
    #[serde(default)]
    pub parent_hash: B256,
    /// The block's base fee. Defaults to the initial base fee when London is
    /// active at genesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_fee: Option<u128>,
}

impl Genesis {
    /// Constructs a genesis block for the provided configuration, with every
    /// header field zeroed and an empty allocation.
    pub fn new(config: ChainConfig) -> Self {
        Self {
            config,
            nonce: 0,
            timestamp: 0,
            extra_data: Bytes::new(),
            gas_limit: 0,
            difficulty: U256::ZERO,
            mix_hash: B256::ZERO,
            coinbase: Address::ZERO,
            alloc: GenesisAlloc::new(),
            number: 0,
            gas_used: 0,
            parent_hash: B256::ZERO,
            base_fee: None,
        }
    }

    /// Returns the chain ID of the genesis block.
    pub fn chain_id(&self) -> u64 {
        self.config.chain_id
    }

    /// Constructs the block header of the genesis block.
    pub fn to_header(&self) -> BlockHeader {
        BlockHeader::genesis(self)
    }
}
