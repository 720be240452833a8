use op_params::{GenesisError, build_and_verify_genesis, build_genesis, embedded_registry};
use op_params_primitives::B256;

macro_rules! impl_test_embedded_genesis {
    ($(
        $name:ident => $chain_id:literal, $l2_time:literal,
    )+) => {
        $(
            paste::item! {
                #[test]
                fn [<build_ $name _genesis>]() -> anyhow::Result<()> {
                    let registry = embedded_registry();

                    let genesis = build_genesis(registry, $chain_id)?;
                    assert_eq!(genesis.chain_id(), $chain_id);
                    assert_eq!(genesis.timestamp, $l2_time);
                    assert_eq!(genesis.gas_limit, 30_000_000);
                    assert_eq!(genesis.extra_data.as_ref(), b"BEDROCK");
                    assert!(genesis.alloc.is_empty());

                    Ok(())
                }

                #[test]
                fn [<verify_ $name _genesis_without_allocation>]() {
                    let result = build_and_verify_genesis($chain_id);

                    let Err(GenesisError::GenesisHashMismatch { chain_id, computed, expected }) = result else {
                        panic!("Expected a hash mismatch, got {result:?}");
                    };

                    assert_eq!(chain_id, $chain_id);
                    assert_ne!(computed, expected);
                    assert_ne!(expected, B256::ZERO);
                }
            }
        )+
    };
}

impl_test_embedded_genesis! {
    op_mainnet => 10, 1_686_068_903,
    base_mainnet => 8453, 1_686_789_347,
}

#[test]
fn verify_unknown_chain() {
    assert!(matches!(
        build_and_verify_genesis(999_999),
        Err(GenesisError::ChainConfig(_))
    ));
}
