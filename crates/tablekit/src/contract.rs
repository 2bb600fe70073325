//! Contracts: the deployable units.
//!
//! A contract is an account that owns exactly one keyed table in its own
//! scope and exposes a single `save` action. The three variants differ only
//! in their key and value types.

use std::sync::Arc;

use tablekit_core::{Name, PrimaryKey, Scope, Symbol, TableValue};
use tablekit_store::Store;

use crate::config::ContractConfig;
use crate::error::Result;
use crate::keyed_store::KeyedStore;

/// `u64` keys, text values.
pub type Int64Contract<S> = Contract<u64, String, S>;

/// Name keys, text values.
pub type NameContract<S> = Contract<Name, String, S>;

/// `u64` keys, symbol values.
pub type SymbolContract<S> = Contract<u64, Symbol, S>;

/// A deployed contract owning one table in its own scope.
pub struct Contract<K, V, S> {
    account: Name,
    table: KeyedStore<K, V, S>,
}

impl<K, V, S> Contract<K, V, S>
where
    K: PrimaryKey,
    V: TableValue,
    S: Store,
{
    /// Deploy the contract on `account`, storing into `store`.
    pub fn deploy(account: Name, store: Arc<S>, config: ContractConfig) -> Self {
        let table = KeyedStore::new(store, Scope::own(account), config);
        tracing::info!(
            %account,
            table = %table.table(),
            key = K::ABI_TYPE,
            value = V::ABI_TYPE,
            "deployed contract"
        );
        Self { account, table }
    }

    /// The account this contract is deployed on.
    pub fn account(&self) -> Name {
        self.account
    }

    /// The contract's table, for inspection.
    pub fn table(&self) -> &KeyedStore<K, V, S> {
        &self.table
    }

    /// The `save` action: insert `value` under `id`.
    pub async fn save(&self, id: K, value: V) -> Result<()> {
        self.table.save(id, value).await
    }
}
