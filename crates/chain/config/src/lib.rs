#![warn(missing_docs)]

//! Consensus parameters of OP Stack chains.
//!
//! A [`ChainConfig`] is resolved per chain from registry metadata: every
//! Ethereum fork up to and including Bedrock is active at genesis, after
//! which the static override table restores the historical activation points
//! of chains that predate Bedrock.

mod fork_order;
mod overrides;
mod resolver;

use alloy_eips::eip1559::BaseFeeParams;
use op_params_primitives::U256;

pub use self::{
    fork_order::ForkOrderError,
    overrides::{
        BASE_GOERLI_CHAIN_ID, BASE_GOERLI_REGOLITH_TIME, ChainOverride, OP_GOERLI_CHAIN_ID,
        OP_GOERLI_REGOLITH_TIME, OP_MAINNET_CHAIN_ID, chain_override,
    },
    resolver::{ChainConfigError, resolve_chain_config},
};

/// Default EIP-1559 elasticity multiplier of OP Stack chains.
pub const DEFAULT_EIP1559_ELASTICITY: u64 = 6;

/// Default EIP-1559 base fee max change denominator of OP Stack chains.
pub const DEFAULT_EIP1559_DENOMINATOR: u64 = 50;

/// Fork condition for a hardfork.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ForkCondition {
    /// Activation based on block number.
    Block(u64),
    /// Activation based on UNIX timestamp.
    Timestamp(u64),
}

/// Hardforks that a [`ChainConfig`] schedules, in historical order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum Hardfork {
    /// Homestead
    Homestead,
    /// DAO fork
    DaoFork,
    /// EIP-150 (Tangerine Whistle)
    Eip150,
    /// EIP-155 (Spurious Dragon)
    Eip155,
    /// EIP-158 (Spurious Dragon)
    Eip158,
    /// Byzantium
    Byzantium,
    /// Constantinople
    Constantinople,
    /// Petersburg
    Petersburg,
    /// Istanbul
    Istanbul,
    /// Muir Glacier
    MuirGlacier,
    /// Berlin
    Berlin,
    /// London
    London,
    /// Arrow Glacier
    ArrowGlacier,
    /// Gray Glacier
    GrayGlacier,
    /// The Merge netsplit block
    MergeNetsplit,
    /// Bedrock, the first OP Stack protocol version
    Bedrock,
    /// Regolith
    Regolith,
    /// Shanghai
    Shanghai,
    /// Cancun
    Cancun,
    /// Prague
    Prague,
}

/// OP Stack specific parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimismConfig {
    /// EIP-1559 elasticity multiplier
    pub eip1559_elasticity: u64,
    /// EIP-1559 base fee max change denominator
    pub eip1559_denominator: u64,
}

impl OptimismConfig {
    /// Returns the EIP-1559 parameters.
    pub fn base_fee_params(&self) -> BaseFeeParams {
        BaseFeeParams::new(
            u128::from(self.eip1559_denominator),
            u128::from(self.eip1559_elasticity),
        )
    }
}

impl Default for OptimismConfig {
    fn default() -> Self {
        Self {
            eip1559_elasticity: DEFAULT_EIP1559_ELASTICITY,
            eip1559_denominator: DEFAULT_EIP1559_DENOMINATOR,
        }
    }
}

/// Consensus parameters of a chain.
///
/// Block-keyed activations are listed in historical order. `None` means the
/// fork is not scheduled.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// The chain ID
    pub chain_id: u64,
    /// Homestead switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub homestead_block: Option<u64>,
    /// DAO hard-fork switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dao_fork_block: Option<u64>,
    /// Whether the node supports or opposes the DAO hard-fork
    #[serde(default)]
    pub dao_fork_support: bool,
    /// EIP-150 switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip150_block: Option<u64>,
    /// EIP-155 switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip155_block: Option<u64>,
    /// EIP-158 switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eip158_block: Option<u64>,
    /// Byzantium switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub byzantium_block: Option<u64>,
    /// Constantinople switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constantinople_block: Option<u64>,
    /// Petersburg switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub petersburg_block: Option<u64>,
    /// Istanbul switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub istanbul_block: Option<u64>,
    /// Muir Glacier switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muir_glacier_block: Option<u64>,
    /// Berlin switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub berlin_block: Option<u64>,
    /// London switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub london_block: Option<u64>,
    /// Arrow Glacier switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arrow_glacier_block: Option<u64>,
    /// Gray Glacier switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray_glacier_block: Option<u64>,
    /// Virtual fork after The Merge to use as a network splitter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_netsplit_block: Option<u64>,
    /// Shanghai switch time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shanghai_time: Option<u64>,
    /// Cancun switch time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancun_time: Option<u64>,
    /// Prague switch time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prague_time: Option<u64>,
    /// Bedrock switch block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bedrock_block: Option<u64>,
    /// Regolith switch time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regolith_time: Option<u64>,
    /// Total difficulty at which the consensus upgrade is triggered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_total_difficulty: Option<U256>,
    /// Whether the terminal total difficulty has been reached
    #[serde(default)]
    pub terminal_total_difficulty_passed: bool,
    /// OP Stack parameters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optimism: Option<OptimismConfig>,
}

impl ChainConfig {
    /// Constructs the configuration of a chain that started with Bedrock.
    ///
    /// All forks up to and including Bedrock are active at genesis and
    /// Regolith is active from time zero. The terminal total difficulty is
    /// zero and has passed, as the chain inherits a post-merge L1. Forks that
    /// are keyed by timestamp on L1 remain unscheduled.
    pub fn bedrock_genesis(chain_id: u64) -> Self {
        Self {
            chain_id,
            homestead_block: Some(0),
            dao_fork_block: None,
            dao_fork_support: false,
            eip150_block: Some(0),
            eip155_block: Some(0),
            eip158_block: Some(0),
            byzantium_block: Some(0),
            constantinople_block: Some(0),
            petersburg_block: Some(0),
            istanbul_block: Some(0),
            muir_glacier_block: Some(0),
            berlin_block: Some(0),
            london_block: Some(0),
            arrow_glacier_block: Some(0),
            gray_glacier_block: Some(0),
            merge_netsplit_block: Some(0),
            shanghai_time: None,
            cancun_time: None,
            prague_time: None,
            bedrock_block: Some(0),
            regolith_time: Some(0),
            terminal_total_difficulty: Some(U256::ZERO),
            terminal_total_difficulty_passed: true,
            optimism: Some(OptimismConfig::default()),
        }
    }

    /// Applies the provided override to the current instance. Fields that the
    /// override sets replace the current values.
    pub fn apply_override(&mut self, chain_override: &ChainOverride) {
        let ChainOverride {
            name: _,
            berlin_block,
            london_block,
            arrow_glacier_block,
            gray_glacier_block,
            merge_netsplit_block,
            bedrock_block,
            regolith_time,
            eip1559_elasticity,
        } = *chain_override;

        replace_if_set(&mut self.berlin_block, berlin_block);
        replace_if_set(&mut self.london_block, london_block);
        replace_if_set(&mut self.arrow_glacier_block, arrow_glacier_block);
        replace_if_set(&mut self.gray_glacier_block, gray_glacier_block);
        replace_if_set(&mut self.merge_netsplit_block, merge_netsplit_block);
        replace_if_set(&mut self.bedrock_block, bedrock_block);
        replace_if_set(&mut self.regolith_time, regolith_time);

        if let Some(elasticity) = eip1559_elasticity {
            self.optimism
                .get_or_insert_with(OptimismConfig::default)
                .eip1559_elasticity = elasticity;
        }
    }

    /// Returns the activation of every scheduled fork, block-keyed forks
    /// first, each group in historical order.
    pub fn fork_activations(&self) -> Vec<(Hardfork, ForkCondition)> {
        let blocks = [
            (Hardfork::Homestead, self.homestead_block),
            (Hardfork::DaoFork, self.dao_fork_block),
            (Hardfork::Eip150, self.eip150_block),
            (Hardfork::Eip155, self.eip155_block),
            (Hardfork::Eip158, self.eip158_block),
            (Hardfork::Byzantium, self.byzantium_block),
            (Hardfork::Constantinople, self.constantinople_block),
            (Hardfork::Petersburg, self.petersburg_block),
            (Hardfork::Istanbul, self.istanbul_block),
            (Hardfork::MuirGlacier, self.muir_glacier_block),
            (Hardfork::Berlin, self.berlin_block),
            (Hardfork::London, self.london_block),
            (Hardfork::ArrowGlacier, self.arrow_glacier_block),
            (Hardfork::GrayGlacier, self.gray_glacier_block),
            (Hardfork::MergeNetsplit, self.merge_netsplit_block),
            (Hardfork::Bedrock, self.bedrock_block),
        ];
        let timestamps = [
            (Hardfork::Regolith, self.regolith_time),
            (Hardfork::Shanghai, self.shanghai_time),
            (Hardfork::Cancun, self.cancun_time),
            (Hardfork::Prague, self.prague_time),
        ];

        blocks
            .into_iter()
            .filter_map(|(hardfork, block)| {
                block.map(|block| (hardfork, ForkCondition::Block(block)))
            })
            .chain(timestamps.into_iter().filter_map(|(hardfork, timestamp)| {
                timestamp.map(|timestamp| (hardfork, ForkCondition::Timestamp(timestamp)))
            }))
            .collect()
    }

    /// Whether London is active at the provided block number.
    pub fn is_london(&self, block_number: u64) -> bool {
        is_block_active(self.london_block, block_number)
    }

    /// Whether Bedrock is active at the provided block number.
    pub fn is_bedrock(&self, block_number: u64) -> bool {
        is_block_active(self.bedrock_block, block_number)
    }

    /// Whether Regolith is active at the provided timestamp.
    pub fn is_regolith(&self, timestamp: u64) -> bool {
        is_timestamp_active(self.regolith_time, timestamp)
    }

    /// Whether Shanghai is active at the provided timestamp.
    pub fn is_shanghai(&self, timestamp: u64) -> bool {
        is_timestamp_active(self.shanghai_time, timestamp)
    }

    /// Whether Cancun is active at the provided timestamp.
    pub fn is_cancun(&self, timestamp: u64) -> bool {
        is_timestamp_active(self.cancun_time, timestamp)
    }

    /// Whether Prague is active at the provided timestamp.
    pub fn is_prague(&self, timestamp: u64) -> bool {
        is_timestamp_active(self.prague_time, timestamp)
    }
}

fn replace_if_set(field: &mut Option<u64>, value: Option<u64>) {
    if value.is_some() {
        *field = value;
    }
}

fn is_block_active(activation: Option<u64>, block_number: u64) -> bool {
    activation.is_some_and(|activation| activation <= block_number)
}

fn is_timestamp_active(activation: Option<u64>, timestamp: u64) -> bool {
    activation.is_some_and(|activation| activation <= timestamp)
}
