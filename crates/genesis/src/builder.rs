use op_params_chain_config::{ChainConfigError, resolve_chain_config};
use op_params_primitives::Bytes;
use op_params_registry::Registry;

use crate::{Genesis, GenesisError};

/// Extra data of a genesis block, unless the registry overrides it.
pub const DEFAULT_EXTRA_DATA: &[u8] = b"BEDROCK";

/// Gas limit of a genesis block.
pub const GENESIS_GAS_LIMIT: u64 = 30_000_000;

/// Maximum size of a block's extra data, in bytes.
pub const MAX_EXTRA_DATA_SIZE: usize = 32;

/// Builds the genesis block of the chain with the provided ID.
///
/// The genesis block has an empty allocation. Its hash is not checked; use
/// [`crate::verify_genesis`] for that.
#[cfg_attr(feature = "tracing", tracing::instrument(skip_all))]
pub fn build_genesis<RegistryT: Registry + ?Sized>(
    registry: &RegistryT,
    chain_id: u64,
) -> Result<Genesis, GenesisError> {
    let config = resolve_chain_config(registry, chain_id)?;

    let chain = registry
        .chain_metadata(chain_id)
        .ok_or(ChainConfigError::UnknownChain { chain_id })?;

    let extra_data = chain
        .genesis
        .extra_data
        .clone()
        .unwrap_or_else(|| Bytes::from_static(DEFAULT_EXTRA_DATA));

    ensure_extra_data_size(chain_id, &extra_data)?;

    log::debug!("Built genesis of chain {chain_id} at timestamp {}", chain.genesis.l2_time);

    Ok(Genesis {
        timestamp: chain.genesis.l2_time,
        extra_data,
        gas_limit: GENESIS_GAS_LIMIT,
        ..Genesis::new(config)
    })
}

pub(crate) fn ensure_extra_data_size(chain_id: u64, extra_data: &Bytes) -> Result<(), GenesisError> {
    if extra_data.len() > MAX_EXTRA_DATA_SIZE {
        return Err(GenesisError::ExtraDataTooLarge {
            chain_id,
            len: extra_data.len(),
        });
    }

    Ok(())
}
