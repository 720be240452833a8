use std::sync::LazyLock;

use op_params_primitives::HashMap;

/// OP Mainnet chain ID
pub const OP_MAINNET_CHAIN_ID: u64 = 0xa;

/// OP Goerli chain ID
pub const OP_GOERLI_CHAIN_ID: u64 = 0x1a4;

/// Base Goerli chain ID
pub const BASE_GOERLI_CHAIN_ID: u64 = 0x14a33;

/// Regolith activation time of OP Goerli
pub const OP_GOERLI_REGOLITH_TIME: u64 = 1_679_079_600;

/// Regolith activation time of Base Goerli
pub const BASE_GOERLI_REGOLITH_TIME: u64 = 1_683_219_600;

/// Block at which OP Mainnet activated Bedrock, together with the L1 forks
/// that the legacy network never scheduled.
const OP_MAINNET_BEDROCK_BLOCK: u64 = 105_235_063;

/// Block at which OP Mainnet activated Berlin on the legacy network.
const OP_MAINNET_BERLIN_BLOCK: u64 = 3_950_000;

/// Block at which OP Goerli activated Bedrock, together with the L1 forks
/// that the legacy network never scheduled.
const OP_GOERLI_BEDROCK_BLOCK: u64 = 4_061_224;

/// A patch of [`crate::ChainConfig`] fields for chains with pre-Regolith
/// upgrade history.
///
/// Fields that are set replace the baseline values; nothing is merged.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ChainOverride {
    /// Chain name
    pub name: &'static str,
    /// Berlin switch block
    pub berlin_block: Option<u64>,
    /// London switch block
    pub london_block: Option<u64>,
    /// Arrow Glacier switch block
    pub arrow_glacier_block: Option<u64>,
    /// Gray Glacier switch block
    pub gray_glacier_block: Option<u64>,
    /// Merge netsplit block
    pub merge_netsplit_block: Option<u64>,
    /// Bedrock switch block
    pub bedrock_block: Option<u64>,
    /// Regolith switch time
    pub regolith_time: Option<u64>,
    /// EIP-1559 elasticity multiplier
    pub eip1559_elasticity: Option<u64>,
}

static CHAIN_OVERRIDES: LazyLock<HashMap<u64, ChainOverride>> = LazyLock::new(|| {
    let mut overrides = HashMap::default();

    overrides.insert(
        OP_MAINNET_CHAIN_ID,
        ChainOverride {
            name: "OP Mainnet",
            berlin_block: Some(OP_MAINNET_BERLIN_BLOCK),
            london_block: Some(OP_MAINNET_BEDROCK_BLOCK),
            arrow_glacier_block: Some(OP_MAINNET_BEDROCK_BLOCK),
            gray_glacier_block: Some(OP_MAINNET_BEDROCK_BLOCK),
            merge_netsplit_block: Some(OP_MAINNET_BEDROCK_BLOCK),
            bedrock_block: Some(OP_MAINNET_BEDROCK_BLOCK),
            ..ChainOverride::default()
        },
    );

    overrides.insert(
        OP_GOERLI_CHAIN_ID,
        ChainOverride {
            name: "OP Goerli",
            london_block: Some(OP_GOERLI_BEDROCK_BLOCK),
            arrow_glacier_block: Some(OP_GOERLI_BEDROCK_BLOCK),
            gray_glacier_block: Some(OP_GOERLI_BEDROCK_BLOCK),
            merge_netsplit_block: Some(OP_GOERLI_BEDROCK_BLOCK),
            bedrock_block: Some(OP_GOERLI_BEDROCK_BLOCK),
            regolith_time: Some(OP_GOERLI_REGOLITH_TIME),
            eip1559_elasticity: Some(10),
            ..ChainOverride::default()
        },
    );

    overrides.insert(
        BASE_GOERLI_CHAIN_ID,
        ChainOverride {
            name: "Base Goerli",
            regolith_time: Some(BASE_GOERLI_REGOLITH_TIME),
            ..ChainOverride::default()
        },
    );

    overrides
});

/// Returns the override for the chain with the provided ID, if any.
pub fn chain_override(chain_id: u64) -> Option<&'static ChainOverride> {
    CHAIN_OVERRIDES.get(&chain_id)
}
