//! Test fixtures and helpers.
//!
//! Common setup code for integration tests: a shared in-memory backend with
//! one deployment of each contract variant.

use std::sync::Arc;

use tablekit::{ContractConfig, Int64Contract, Name, NameContract, SymbolContract};
use tablekit_store::MemoryStore;

/// Account names the fixture deploys on.
pub const INT64_ACCOUNT: &str = "intcontract";
pub const NAME_ACCOUNT: &str = "namecontract";
pub const SYMBOL_ACCOUNT: &str = "symcontract";

/// A shared memory backend with one contract per variant.
pub struct TestFixture {
    pub store: Arc<MemoryStore>,
    pub int64: Int64Contract<MemoryStore>,
    pub name: NameContract<MemoryStore>,
    pub symbol: SymbolContract<MemoryStore>,
}

impl TestFixture {
    /// Deploy all three variants on a fresh backend.
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Deploy all three variants on an existing backend.
    pub fn with_store(store: Arc<MemoryStore>) -> Self {
        Self {
            int64: Int64Contract::deploy(
                account(INT64_ACCOUNT),
                store.clone(),
                ContractConfig::default(),
            ),
            name: NameContract::deploy(
                account(NAME_ACCOUNT),
                store.clone(),
                ContractConfig::default(),
            ),
            symbol: SymbolContract::deploy(
                account(SYMBOL_ACCOUNT),
                store.clone(),
                ContractConfig::default(),
            ),
            store,
        }
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse a fixture account name.
///
/// Panics on an invalid name; fixture names are constants.
pub fn account(s: &str) -> Name {
    Name::new(s).unwrap_or_else(|e| panic!("invalid fixture account {s:?}: {e}"))
}

/// Deploy `count` int64 contracts on one backend, on accounts `party1`,
/// `party2`, ... (digits 1-5 only, so at most five).
pub fn multi_party_contracts(count: usize) -> Vec<Int64Contract<MemoryStore>> {
    assert!(count <= 5, "account names only allow digits 1-5");
    let store = Arc::new(MemoryStore::new());
    (1..=count)
        .map(|i| {
            Int64Contract::deploy(
                account(&format!("party{i}")),
                store.clone(),
                ContractConfig::default(),
            )
        })
        .collect()
}
