//! Fixtures shared by the tests of the `op_params` crates.

use op_params_primitives::{Address, B256, b256};
use op_params_registry::{
    AddressList, BlockRef, ChainMetadata, GenesisMetadata, StaticRegistry,
};

/// Superchain of the devnet fixtures.
pub const DEVNET_SUPERCHAIN: &str = "devnet";

/// Devnet chain with default genesis extra data.
pub const DEVNET_CHAIN_ID: u64 = 901;

/// Devnet chain with 32 bytes of genesis extra data.
pub const DEVNET_MAX_EXTRA_DATA_CHAIN_ID: u64 = 902;

/// Devnet chain with 33 bytes of genesis extra data.
pub const DEVNET_OVERSIZED_EXTRA_DATA_CHAIN_ID: u64 = 903;

/// Devnet chain whose genesis hash commits to [`devnet_alloc_account`].
pub const DEVNET_WITH_ALLOC_CHAIN_ID: u64 = 904;

/// Genesis timestamp of all devnet chains.
pub const DEVNET_GENESIS_TIME: u64 = 1_700_000_000;

/// Genesis hash of [`DEVNET_CHAIN_ID`].
pub const DEVNET_GENESIS_HASH: B256 =
    b256!("0x195b362460ade3b31a3f128ce03e596c99604476d94dd3cdf91e1a884988472f");

/// Genesis hash of [`DEVNET_MAX_EXTRA_DATA_CHAIN_ID`].
pub const DEVNET_MAX_EXTRA_DATA_GENESIS_HASH: B256 =
    b256!("0xc4a48ef1630476a58bc98e8b1ebec236bd1a24cf2493d3c884d7f40d90b7f7d4");

/// Genesis hash of [`DEVNET_WITH_ALLOC_CHAIN_ID`].
pub const DEVNET_WITH_ALLOC_GENESIS_HASH: B256 =
    b256!("0x84d940b03c7c269a63c31d0785ff71b68b65526f63d873e1f542ede3a0507aa1");

/// State root of an allocation of [`devnet_alloc_account`] only.
pub const DEVNET_ALLOC_STATE_ROOT: B256 =
    b256!("0x176a3fe6cfe66b3061f2f8750206530da568ca5be992641af0d1fe227156159f");

const DEVNET_REGISTRY_TOML: &str = include_str!("../fixtures/devnet.toml");

/// Returns a registry containing the devnet fixtures.
///
/// # Panics
///
/// Panics if the fixture data is invalid.
pub fn devnet_registry() -> StaticRegistry {
    StaticRegistry::from_toml_str(DEVNET_REGISTRY_TOML).expect("devnet fixture is valid")
}

/// Returns the address and balance (in wei) of the single account that
/// [`DEVNET_WITH_ALLOC_CHAIN_ID`] allocates at genesis.
pub fn devnet_alloc_account() -> (Address, u128) {
    (Address::with_last_byte(1), 1_000_000_000_000_000_000)
}

/// Constructs chain metadata with zeroed genesis hashes and addresses.
pub fn fixture_chain(chain_id: u64, superchain: &str) -> ChainMetadata {
    ChainMetadata {
        name: format!("Fixture {chain_id}"),
        chain_id,
        superchain: superchain.to_owned(),
        genesis: GenesisMetadata {
            l2_time: DEVNET_GENESIS_TIME,
            extra_data: None,
            l1: BlockRef {
                number: 0,
                hash: B256::ZERO,
            },
            l2: BlockRef {
                number: 0,
                hash: B256::ZERO,
            },
        },
        addresses: AddressList {
            system_config_proxy: Address::ZERO,
        },
    }
}
