use op_params::{
    ChainConfig, ChainConfigError, ForkCondition, Hardfork, OptimismConfig, embedded_registry,
    resolve_chain_config,
};
use op_params_primitives::U256;
use proptest::prelude::*;

/// Asserts the baseline fields that no override touches.
fn assert_bedrock_baseline(config: &ChainConfig) {
    assert_eq!(config.homestead_block, Some(0));
    assert_eq!(config.dao_fork_block, None);
    assert!(!config.dao_fork_support);
    assert_eq!(config.eip150_block, Some(0));
    assert_eq!(config.eip155_block, Some(0));
    assert_eq!(config.eip158_block, Some(0));
    assert_eq!(config.byzantium_block, Some(0));
    assert_eq!(config.constantinople_block, Some(0));
    assert_eq!(config.petersburg_block, Some(0));
    assert_eq!(config.istanbul_block, Some(0));
    assert_eq!(config.muir_glacier_block, Some(0));
    assert_eq!(config.shanghai_time, None);
    assert_eq!(config.cancun_time, None);
    assert_eq!(config.prague_time, None);
    assert_eq!(config.terminal_total_difficulty, Some(U256::ZERO));
    assert!(config.terminal_total_difficulty_passed);
    assert_eq!(
        config.optimism.map(|optimism| optimism.eip1559_denominator),
        Some(50)
    );
}

macro_rules! impl_test_chain_without_override {
    ($(
        $name:ident => $chain_id:literal,
    )+) => {
        $(
            paste::item! {
                #[test]
                fn [<resolve_ $name _chain_config>]() -> anyhow::Result<()> {
                    let config = resolve_chain_config($chain_id)?;

                    assert_eq!(config.chain_id, $chain_id);
                    assert_bedrock_baseline(&config);
                    assert_eq!(config.berlin_block, Some(0));
                    assert_eq!(config.london_block, Some(0));
                    assert_eq!(config.arrow_glacier_block, Some(0));
                    assert_eq!(config.gray_glacier_block, Some(0));
                    assert_eq!(config.merge_netsplit_block, Some(0));
                    assert_eq!(config.bedrock_block, Some(0));
                    assert_eq!(config.regolith_time, Some(0));
                    assert_eq!(config.optimism, Some(OptimismConfig::default()));
                    assert_eq!(config, ChainConfig::bedrock_genesis($chain_id));

                    Ok(())
                }
            }
        )+
    };
}

impl_test_chain_without_override! {
    base_mainnet => 8453,
    base_sepolia => 84532,
    op_sepolia => 11155420,
}

#[test]
fn resolve_op_mainnet_chain_config() -> anyhow::Result<()> {
    let config = resolve_chain_config(10)?;

    assert_bedrock_baseline(&config);
    assert_eq!(config.berlin_block, Some(3_950_000));
    assert_eq!(config.london_block, Some(105_235_063));
    assert_eq!(config.arrow_glacier_block, Some(105_235_063));
    assert_eq!(config.gray_glacier_block, Some(105_235_063));
    assert_eq!(config.merge_netsplit_block, Some(105_235_063));
    assert_eq!(config.bedrock_block, Some(105_235_063));
    assert_eq!(config.regolith_time, Some(0));
    assert_eq!(config.optimism, Some(OptimismConfig::default()));

    Ok(())
}

#[test]
fn resolve_op_goerli_chain_config() -> anyhow::Result<()> {
    let config = resolve_chain_config(420)?;

    assert_bedrock_baseline(&config);
    assert_eq!(config.berlin_block, Some(0));
    assert_eq!(config.london_block, Some(4_061_224));
    assert_eq!(config.arrow_glacier_block, Some(4_061_224));
    assert_eq!(config.gray_glacier_block, Some(4_061_224));
    assert_eq!(config.merge_netsplit_block, Some(4_061_224));
    assert_eq!(config.bedrock_block, Some(4_061_224));
    assert_eq!(config.regolith_time, Some(1_679_079_600));
    assert_eq!(
        config.optimism,
        Some(OptimismConfig {
            eip1559_elasticity: 10,
            eip1559_denominator: 50,
        })
    );

    Ok(())
}

#[test]
fn resolve_base_goerli_chain_config() -> anyhow::Result<()> {
    let config = resolve_chain_config(84531)?;

    let mut expected = ChainConfig::bedrock_genesis(84531);
    expected.regolith_time = Some(1_683_219_600);

    assert_eq!(config, expected);

    Ok(())
}

#[test]
fn resolve_unknown_chain() {
    assert_eq!(
        resolve_chain_config(999_999),
        Err(ChainConfigError::UnknownChain { chain_id: 999_999 })
    );
}

#[test]
fn embedded_fork_schedules_are_ordered() -> anyhow::Result<()> {
    for chain_id in embedded_registry().chain_ids() {
        resolve_chain_config(chain_id)?.check_fork_order()?;
    }

    Ok(())
}

#[test]
fn op_mainnet_activates_bedrock_after_berlin() -> anyhow::Result<()> {
    let activations = resolve_chain_config(10)?.fork_activations();

    let activation = |hardfork| {
        activations
            .iter()
            .find_map(|(candidate, condition)| (*candidate == hardfork).then_some(*condition))
    };

    assert_eq!(
        activation(Hardfork::Berlin),
        Some(ForkCondition::Block(3_950_000))
    );
    assert_eq!(
        activation(Hardfork::Bedrock),
        Some(ForkCondition::Block(105_235_063))
    );
    assert_eq!(
        activation(Hardfork::Regolith),
        Some(ForkCondition::Timestamp(0))
    );
    assert_eq!(activation(Hardfork::DaoFork), None);

    Ok(())
}

proptest! {
    #[test]
    fn resolution_is_pure(chain_id in prop::sample::select(embedded_registry().chain_ids())) {
        prop_assert_eq!(resolve_chain_config(chain_id), resolve_chain_config(chain_id));
    }

    #[test]
    fn unregistered_chains_are_unknown(chain_id in any::<u64>()) {
        prop_assume!(!embedded_registry().chain_ids().contains(&chain_id));

        prop_assert_eq!(
            resolve_chain_config(chain_id),
            Err(ChainConfigError::UnknownChain { chain_id })
        );
    }
}
