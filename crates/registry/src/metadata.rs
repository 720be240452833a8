use op_params_primitives::{Address, B256, Bytes};

/// Metadata of a single OP Stack chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ChainMetadata {
    /// Human-readable chain name
    pub name: String,
    /// The L2 chain ID
    pub chain_id: u64,
    /// Name of the superchain the chain belongs to
    pub superchain: String,
    /// Genesis information
    pub genesis: GenesisMetadata,
    /// Addresses of the chain's L1 contracts
    pub addresses: AddressList,
}

impl ChainMetadata {
    /// The hash the chain's genesis block is expected to have.
    pub fn expected_genesis_hash(&self) -> B256 {
        self.genesis.l2.hash
    }
}

/// Genesis information of a chain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GenesisMetadata {
    /// Timestamp of the L2 genesis block
    pub l2_time: u64,
    /// Extra data of the L2 genesis block, if it deviates from the default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_data: Option<Bytes>,
    /// The L1 block the chain was derived from at genesis
    pub l1: BlockRef,
    /// The L2 genesis block
    pub l2: BlockRef,
}

/// Reference to a block by number and hash.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct BlockRef {
    /// The block's number
    pub number: u64,
    /// The block's hash
    pub hash: B256,
}

/// Addresses of a chain's L1 contracts.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct AddressList {
    /// The `SystemConfig` proxy contract
    #[serde(rename = "SystemConfigProxy")]
    pub system_config_proxy: Address,
}

/// Metadata of a superchain, i.e. a group of chains that share an L1 and
/// configuration ancestry.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct SuperchainMetadata {
    /// Name of the superchain; chains refer to it by this key
    pub name: String,
    /// The L1 the superchain settles on
    pub l1: L1Metadata,
    /// The `ProtocolVersions` contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol_versions_addr: Option<Address>,
    /// The `SuperchainConfig` contract
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superchain_config_addr: Option<Address>,
}

/// L1 information of a superchain.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct L1Metadata {
    /// The L1 chain ID
    pub chain_id: u64,
    /// A public JSON-RPC endpoint of the L1
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_rpc: Option<String>,
}
