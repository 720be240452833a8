use op_params::{SystemConfigError, embedded_registry, resolve_system_config_address};
use op_params_primitives::address;

#[test]
fn op_mainnet_system_config() {
    assert_eq!(
        resolve_system_config_address(10),
        Ok(address!("0x229047fed2591dbec1ef1118d64f7af3db9eb290"))
    );
}

#[test]
fn base_mainnet_system_config() {
    assert_eq!(
        resolve_system_config_address(8453),
        Ok(address!("0x73a79fab69143498ed3712e519a88a918e1f4072"))
    );
}

#[test]
fn every_embedded_chain_has_a_system_config() -> anyhow::Result<()> {
    let registry = embedded_registry();

    for chain_id in registry.chain_ids() {
        let address = resolve_system_config_address(chain_id)?;
        assert!(!address.is_zero(), "chain {chain_id}");
    }

    Ok(())
}

#[test]
fn unknown_chain() {
    assert_eq!(
        resolve_system_config_address(999_999),
        Err(SystemConfigError::UnknownChain { chain_id: 999_999 })
    );
}
