use alloy_eips::{eip1559::INITIAL_BASE_FEE, eip7685::EMPTY_REQUESTS_HASH};
use op_params_primitives::{
    Address, B64, B256, Bloom, Bytes, KECCAK_EMPTY_LIST_RLP, KECCAK_NULL_RLP, U256, keccak256,
};

use crate::{Genesis, alloc::state_root};

/// Ethereum block header, as committed to by the block hash.
#[derive(Clone, Debug, Default, PartialEq, Eq, alloy_rlp::RlpEncodable)]
#[rlp(trailing)]
pub struct BlockHeader {
    /// The parent block's hash
    pub parent_hash: B256,
    /// The ommers' root hash
    pub ommers_hash: B256,
    /// The block's beneficiary address
    pub beneficiary: Address,
    /// The state's root hash
    pub state_root: B256,
    /// The transactions' root hash
    pub transactions_root: B256,
    /// The receipts' root hash
    pub receipts_root: B256,
    /// The logs' bloom
    pub logs_bloom: Bloom,
    /// The block's difficulty
    pub difficulty: U256,
    /// The block's number
    pub number: u64,
    /// The block's gas limit
    pub gas_limit: u64,
    /// The amount of gas used by the block
    pub gas_used: u64,
    /// The block's timestamp
    pub timestamp: u64,
    /// The block's extra data
    pub extra_data: Bytes,
    /// The block's mix hash
    pub mix_hash: B256,
    /// The block's nonce
    pub nonce: B64,
    /// `BaseFee` was added by EIP-1559 and is ignored in legacy headers.
    pub base_fee_per_gas: Option<u128>,
    /// `WithdrawalsHash` was added by EIP-4895 and is ignored in legacy
    /// headers.
    pub withdrawals_root: Option<B256>,
    /// Blob gas used was added by EIP-4844 and is ignored in older headers.
    pub blob_gas_used: Option<u64>,
    /// Excess blob gas was added by EIP-4844 and is ignored in older headers.
    pub excess_blob_gas: Option<u64>,
    /// The hash tree root of the parent beacon block for the given execution
    /// block (EIP-4788).
    pub parent_beacon_block_root: Option<B256>,
    /// The commitment hash calculated for a list of [EIP-7685] data requests.
    ///
    /// [EIP-7685]: https://eips.ethereum.org/EIPS/eip-7685
    pub requests_hash: Option<B256>,
}

impl BlockHeader {
    /// Constructs the header of the provided genesis block.
    ///
    /// Optional fields are present iff the fork that introduced them is
    /// active at the genesis block number and timestamp.
    pub fn genesis(genesis: &Genesis) -> Self {
        let config = &genesis.config;

        let base_fee_per_gas = if config.is_london(genesis.number) {
            Some(genesis.base_fee.unwrap_or(u128::from(INITIAL_BASE_FEE)))
        } else {
            None
        };

        let withdrawals_root = config.is_shanghai(genesis.timestamp).then_some(KECCAK_NULL_RLP);

        let is_cancun = config.is_cancun(genesis.timestamp);

        Self {
            parent_hash: genesis.parent_hash,
            ommers_hash: KECCAK_EMPTY_LIST_RLP,
            beneficiary: genesis.coinbase,
            state_root: state_root(&genesis.alloc),
            transactions_root: KECCAK_NULL_RLP,
            receipts_root: KECCAK_NULL_RLP,
            logs_bloom: Bloom::ZERO,
            difficulty: genesis.difficulty,
            number: genesis.number,
            gas_limit: genesis.gas_limit,
            gas_used: genesis.gas_used,
            timestamp: genesis.timestamp,
            extra_data: genesis.extra_data.clone(),
            mix_hash: genesis.mix_hash,
            nonce: B64::from(genesis.nonce),
            base_fee_per_gas,
            withdrawals_root,
            blob_gas_used: is_cancun.then_some(0),
            excess_blob_gas: is_cancun.then_some(0),
            parent_beacon_block_root: is_cancun.then_some(B256::ZERO),
            requests_hash: config.is_prague(genesis.timestamp).then_some(EMPTY_REQUESTS_HASH),
        }
    }

    /// Calculates the block's hash.
    pub fn hash(&self) -> B256 {
        let encoded = alloy_rlp::encode(self);
        keccak256(encoded)
    }
}
