use core::ops::Deref;

use op_params_chain_config::resolve_chain_config;
use op_params_primitives::B256;
use op_params_registry::Registry;

use crate::{Genesis, GenesisError, GenesisHasher, build_genesis, builder::ensure_extra_data_size};

/// A genesis block whose chain configuration and hash match the registry.
///
/// Can only be obtained through [`verify_genesis`] or
/// [`build_and_verify_genesis`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VerifiedGenesis {
    genesis: Genesis,
    hash: B256,
}

impl VerifiedGenesis {
    /// Returns the verified genesis block.
    pub fn genesis(&self) -> &Genesis {
        &self.genesis
    }

    /// Returns the genesis block's hash.
    pub fn hash(&self) -> B256 {
        self.hash
    }

    /// Converts the instance into the verified genesis block.
    pub fn into_inner(self) -> Genesis {
        self.genesis
    }
}

impl Deref for VerifiedGenesis {
    type Target = Genesis;

    fn deref(&self) -> &Self::Target {
        &self.genesis
    }
}

/// Verifies that the provided genesis block belongs to its chain in the
/// registry.
///
/// The chain configuration must equal the one resolved from the registry, as
/// the block hash only commits to a few of its fields. The hash must match the
/// registry's expected genesis hash.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn verify_genesis<RegistryT: Registry + ?Sized, HasherT: GenesisHasher + ?Sized>(
    registry: &RegistryT,
    hasher: &HasherT,
    genesis: Genesis,
) -> Result<VerifiedGenesis, GenesisError> {
    let chain_id = genesis.chain_id();

    let expected = registry
        .chain_metadata(chain_id)
        .ok_or(GenesisError::UnknownChain { chain_id })?
        .expected_genesis_hash();

    if genesis.config != resolve_chain_config(registry, chain_id)? {
        return Err(GenesisError::ConfigMismatch { chain_id });
    }

    ensure_extra_data_size(chain_id, &genesis.extra_data)?;

    let computed = hasher.genesis_hash(&genesis);
    if computed != expected {
        log::debug!("Genesis of chain {chain_id} has hash {computed}, expected {expected}");

        return Err(GenesisError::GenesisHashMismatch {
            chain_id,
            computed,
            expected,
        });
    }

    log::debug!("Verified genesis of chain {chain_id}: {computed}");

    Ok(VerifiedGenesis {
        genesis,
        hash: computed,
    })
}

/// Builds the genesis block of the chain with the provided ID and verifies
/// its hash.
///
/// Chains whose genesis commits to a non-empty allocation fail with
/// [`GenesisError::GenesisHashMismatch`]. To verify those, fill
/// [`Genesis::alloc`] between [`build_genesis`] and [`verify_genesis`].
pub fn build_and_verify_genesis<RegistryT: Registry + ?Sized, HasherT: GenesisHasher + ?Sized>(
    registry: &RegistryT,
    hasher: &HasherT,
    chain_id: u64,
) -> Result<VerifiedGenesis, GenesisError> {
    let genesis = build_genesis(registry, chain_id)?;
    verify_genesis(registry, hasher, genesis)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use op_params_chain_config::{ChainConfig, ChainConfigError, OptimismConfig};
    use op_params_primitives::{Bytes, U256};
    use op_params_registry::embedded_registry;
    use op_params_test_utils::{
        DEVNET_ALLOC_STATE_ROOT, DEVNET_CHAIN_ID, DEVNET_GENESIS_HASH,
        DEVNET_MAX_EXTRA_DATA_CHAIN_ID, DEVNET_MAX_EXTRA_DATA_GENESIS_HASH,
        DEVNET_OVERSIZED_EXTRA_DATA_CHAIN_ID, DEVNET_WITH_ALLOC_CHAIN_ID,
        DEVNET_WITH_ALLOC_GENESIS_HASH, devnet_alloc_account, devnet_registry, fixture_chain,
    };
    use proptest::prelude::*;

    use super::*;
    use crate::{GenesisAccount, HeaderHasher, MAX_EXTRA_DATA_SIZE};

    /// Counts invocations and delegates to [`HeaderHasher`].
    #[derive(Default)]
    struct CountingHasher {
        calls: AtomicUsize,
    }

    impl CountingHasher {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl GenesisHasher for CountingHasher {
        fn genesis_hash(&self, genesis: &Genesis) -> B256 {
            self.calls.fetch_add(1, Ordering::SeqCst);
            HeaderHasher.genesis_hash(genesis)
        }
    }

    #[test]
    fn devnet_genesis_verifies() -> anyhow::Result<()> {
        let registry = devnet_registry();

        let verified = build_and_verify_genesis(&registry, &HeaderHasher, DEVNET_CHAIN_ID)?;
        assert_eq!(verified.hash(), DEVNET_GENESIS_HASH);
        assert_eq!(verified.chain_id(), DEVNET_CHAIN_ID);
        assert_eq!(verified.genesis(), &build_genesis(&registry, DEVNET_CHAIN_ID)?);

        Ok(())
    }

    #[test]
    fn max_extra_data_verifies() -> anyhow::Result<()> {
        let registry = devnet_registry();

        let verified =
            build_and_verify_genesis(&registry, &HeaderHasher, DEVNET_MAX_EXTRA_DATA_CHAIN_ID)?;
        assert_eq!(verified.hash(), DEVNET_MAX_EXTRA_DATA_GENESIS_HASH);
        assert_eq!(verified.extra_data.len(), MAX_EXTRA_DATA_SIZE);

        Ok(())
    }

    #[test]
    fn mutated_genesis_is_rejected() -> anyhow::Result<()> {
        let registry = devnet_registry();

        let mut genesis = build_genesis(&registry, DEVNET_CHAIN_ID)?;
        genesis.gas_limit += 1;

        let computed = HeaderHasher.genesis_hash(&genesis);
        assert_ne!(computed, DEVNET_GENESIS_HASH);

        assert_eq!(
            verify_genesis(&registry, &HeaderHasher, genesis),
            Err(GenesisError::GenesisHashMismatch {
                chain_id: DEVNET_CHAIN_ID,
                computed,
                expected: DEVNET_GENESIS_HASH,
            })
        );

        Ok(())
    }

    #[test]
    fn oversized_extra_data_is_never_hashed() {
        let registry = devnet_registry();
        let hasher = CountingHasher::default();

        assert_eq!(
            build_and_verify_genesis(&registry, &hasher, DEVNET_OVERSIZED_EXTRA_DATA_CHAIN_ID),
            Err(GenesisError::ExtraDataTooLarge {
                chain_id: DEVNET_OVERSIZED_EXTRA_DATA_CHAIN_ID,
                len: 33,
            })
        );
        assert_eq!(hasher.calls(), 0);
    }

    #[test]
    fn verify_rejects_oversized_extra_data_before_hashing() -> anyhow::Result<()> {
        let registry = devnet_registry();
        let hasher = CountingHasher::default();

        let mut genesis = build_genesis(&registry, DEVNET_CHAIN_ID)?;
        genesis.extra_data = Bytes::from(vec![0u8; MAX_EXTRA_DATA_SIZE + 1]);

        assert_eq!(
            verify_genesis(&registry, &hasher, genesis),
            Err(GenesisError::ExtraDataTooLarge {
                chain_id: DEVNET_CHAIN_ID,
                len: MAX_EXTRA_DATA_SIZE + 1,
            })
        );
        assert_eq!(hasher.calls(), 0);

        Ok(())
    }

    #[test]
    fn allocation_is_committed_to() -> anyhow::Result<()> {
        let registry = devnet_registry();

        let genesis = build_genesis(&registry, DEVNET_WITH_ALLOC_CHAIN_ID)?;
        assert_eq!(
            verify_genesis(&registry, &HeaderHasher, genesis.clone()),
            Err(GenesisError::GenesisHashMismatch {
                chain_id: DEVNET_WITH_ALLOC_CHAIN_ID,
                computed: HeaderHasher.genesis_hash(&genesis),
                expected: DEVNET_WITH_ALLOC_GENESIS_HASH,
            })
        );

        let (address, balance) = devnet_alloc_account();
        let mut genesis = genesis;
        genesis.alloc.insert(
            address,
            GenesisAccount {
                balance: U256::from(balance),
                ..GenesisAccount::default()
            },
        );

        let verified = verify_genesis(&registry, &HeaderHasher, genesis)?;
        assert_eq!(verified.hash(), DEVNET_WITH_ALLOC_GENESIS_HASH);
        assert_eq!(verified.to_header().state_root, DEVNET_ALLOC_STATE_ROOT);

        Ok(())
    }

    #[test]
    fn altered_chain_config_is_rejected() -> anyhow::Result<()> {
        let registry = devnet_registry();
        let hasher = CountingHasher::default();

        let mut genesis = build_genesis(&registry, DEVNET_CHAIN_ID)?;
        genesis.config.regolith_time = Some(u64::MAX);
        genesis.config.bedrock_block = Some(7);
        if let Some(optimism) = genesis.config.optimism.as_mut() {
            optimism.eip1559_elasticity = 999;
        }

        // None of these fields are committed to by the header.
        assert_eq!(HeaderHasher.genesis_hash(&genesis), DEVNET_GENESIS_HASH);

        assert_eq!(
            verify_genesis(&registry, &hasher, genesis),
            Err(GenesisError::ConfigMismatch {
                chain_id: DEVNET_CHAIN_ID
            })
        );
        assert_eq!(hasher.calls(), 0);

        Ok(())
    }

    #[test]
    fn altered_elasticity_is_rejected() -> anyhow::Result<()> {
        let registry = devnet_registry();

        let mut genesis = build_genesis(&registry, DEVNET_CHAIN_ID)?;
        genesis.config.optimism = Some(OptimismConfig {
            eip1559_elasticity: 999,
            ..OptimismConfig::default()
        });

        assert_eq!(
            verify_genesis(&registry, &HeaderHasher, genesis),
            Err(GenesisError::ConfigMismatch {
                chain_id: DEVNET_CHAIN_ID
            })
        );

        Ok(())
    }

    #[test]
    fn unregistered_genesis() {
        let registry = devnet_registry();
        let genesis = Genesis::new(ChainConfig::bedrock_genesis(12_345));

        assert_eq!(
            verify_genesis(&registry, &HeaderHasher, genesis),
            Err(GenesisError::UnknownChain { chain_id: 12_345 })
        );
    }

    #[test]
    fn unknown_chain_propagates_from_resolver() {
        let registry = devnet_registry();

        assert_eq!(
            build_and_verify_genesis(&registry, &HeaderHasher, 12_345),
            Err(GenesisError::ChainConfig(ChainConfigError::UnknownChain {
                chain_id: 12_345
            }))
        );
    }

    #[test]
    fn hasher_can_be_replaced() -> anyhow::Result<()> {
        struct RegistryHash(B256);

        impl GenesisHasher for RegistryHash {
            fn genesis_hash(&self, _genesis: &Genesis) -> B256 {
                self.0
            }
        }

        let registry = devnet_registry();
        let genesis = build_genesis(&registry, DEVNET_WITH_ALLOC_CHAIN_ID)?;

        let verified = verify_genesis(
            &registry,
            &RegistryHash(DEVNET_WITH_ALLOC_GENESIS_HASH),
            genesis,
        )?;
        assert_eq!(verified.hash(), DEVNET_WITH_ALLOC_GENESIS_HASH);

        Ok(())
    }

    #[test]
    fn embedded_chains_fail_closed_without_allocation() -> anyhow::Result<()> {
        let registry = embedded_registry();

        for chain_id in registry.chain_ids() {
            let result = build_and_verify_genesis(registry, &HeaderHasher, chain_id);

            let Err(GenesisError::GenesisHashMismatch {
                chain_id: mismatched_chain_id,
                computed,
                expected,
            }) = result
            else {
                anyhow::bail!("Expected hash mismatch for chain {chain_id}, got {result:?}");
            };

            assert_eq!(mismatched_chain_id, chain_id);
            assert_ne!(computed, expected);
        }

        Ok(())
    }

    proptest! {
        #[test]
        fn extra_data_size_limit(len in 0usize..=64) {
            let mut registry = devnet_registry();

            let mut chain = fixture_chain(905, "devnet");
            chain.genesis.extra_data = Some(Bytes::from(vec![0xab; len]));
            registry.insert_chain(chain).expect("chain ID is unused");

            let hasher = CountingHasher::default();
            let result = build_and_verify_genesis(&registry, &hasher, 905);

            if len > MAX_EXTRA_DATA_SIZE {
                prop_assert_eq!(result, Err(GenesisError::ExtraDataTooLarge { chain_id: 905, len }));
                prop_assert_eq!(hasher.calls(), 0);
            } else {
                // The fixture expects a zero hash.
                let is_mismatch = matches!(result, Err(GenesisError::GenesisHashMismatch { .. }));
                prop_assert!(is_mismatch);
                prop_assert_eq!(hasher.calls(), 1);
            }
        }
    }
}
