use std::collections::BTreeMap;

use op_params_primitives::{Address, B256, Bytes, KECCAK_EMPTY, KECCAK_NULL_RLP, U256, keccak256};
use op_params_trie::sec_trie_root;

/// State allocation of a genesis block, keyed by account address.
pub type GenesisAlloc = BTreeMap<Address, GenesisAccount>;

/// An account that exists at genesis.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct GenesisAccount {
    /// Nonce of the account.
    #[serde(default)]
    pub nonce: u64,
    /// Balance of the account.
    pub balance: U256,
    /// Code of the account.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Bytes>,
    /// Storage of the account, mapping slots to values.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub storage: BTreeMap<B256, B256>,
}

impl GenesisAccount {
    /// Calculates the root hash of the account's storage trie.
    ///
    /// Zero-valued slots are not part of the trie.
    pub fn storage_root(&self) -> B256 {
        sec_trie_root(
            self.storage
                .iter()
                .filter(|(_slot, value)| !value.is_zero())
                .map(|(slot, value)| {
                    let value = alloy_rlp::encode(U256::from_be_bytes(value.0));
                    (slot, value)
                }),
        )
    }

    /// Calculates the hash of the account's code.
    ///
    /// Accounts without code, or with empty code, have [`KECCAK_EMPTY`].
    pub fn code_hash(&self) -> B256 {
        self.code
            .as_ref()
            .filter(|code| !code.is_empty())
            .map_or(KECCAK_EMPTY, keccak256)
    }
}

/// The account as stored in the world state trie.
#[derive(alloy_rlp::RlpEncodable)]
struct TrieAccount {
    nonce: u64,
    balance: U256,
    storage_root: B256,
    code_hash: B256,
}

impl From<&GenesisAccount> for TrieAccount {
    fn from(account: &GenesisAccount) -> Self {
        Self {
            nonce: account.nonce,
            balance: account.balance,
            storage_root: account.storage_root(),
            code_hash: account.code_hash(),
        }
    }
}

/// Calculates the state root hash of the provided allocation.
///
/// An empty allocation has the root of an empty trie.
pub fn state_root(alloc: &GenesisAlloc) -> B256 {
    if alloc.is_empty() {
        return KECCAK_NULL_RLP;
    }

    sec_trie_root(alloc.iter().map(|(address, account)| {
        let account = alloy_rlp::encode(TrieAccount::from(account));
        (address, account)
    }))
}
