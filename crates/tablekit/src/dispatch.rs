//! Dispatch: the seam between a host and a contract.
//!
//! The host receives a request, decides who it is for, and hands it over as
//! an [`ActionRequest`]. The contract decodes the JSON arguments into its
//! typed key and value and runs the action. Authorization and commit or
//! rollback stay with the host.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tablekit_core::{Name, PrimaryKey, TableValue};
use tablekit_store::Store;

use crate::contract::Contract;
use crate::error::{Result, TablekitError};

/// `save`
pub const SAVE_ACTION: Name = Name::from_value(13958520016941875200);

/// A request addressed to one account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionRequest {
    /// The account the request is for.
    pub account: Name,
    /// The action to run.
    pub action: Name,
    /// Arguments as a JSON object keyed by field name.
    pub args: serde_json::Value,
}

impl ActionRequest {
    pub fn new(account: Name, action: Name, args: serde_json::Value) -> Self {
        Self {
            account,
            action,
            args,
        }
    }

    /// A `save` request.
    pub fn save(account: Name, args: serde_json::Value) -> Self {
        Self::new(account, SAVE_ACTION, args)
    }
}

/// Something that can run decoded requests.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn dispatch(&self, request: &ActionRequest) -> Result<()>;
}

/// Pull one named argument out of the request and decode it.
fn arg<T: serde::de::DeserializeOwned>(args: &serde_json::Value, field: &str) -> Result<T> {
    let value = args
        .get(field)
        .ok_or_else(|| TablekitError::Decode(format!("missing argument {field:?}")))?;
    serde_json::from_value(value.clone())
        .map_err(|e| TablekitError::Decode(format!("argument {field:?}: {e}")))
}

#[async_trait]
impl<K, V, S> Dispatcher for Contract<K, V, S>
where
    K: PrimaryKey,
    V: TableValue,
    S: Store,
{
    async fn dispatch(&self, request: &ActionRequest) -> Result<()> {
        if request.account != self.account() {
            return Err(TablekitError::WrongReceiver {
                requested: request.account,
                receiver: self.account(),
            });
        }
        if request.action != SAVE_ACTION {
            return Err(TablekitError::UnknownAction(request.action));
        }
        if !request.args.is_object() {
            return Err(TablekitError::Decode("arguments must be an object".into()));
        }

        let id: K = arg(&request.args, "id")?;
        let value = match request.args.get(V::FIELD) {
            Some(serde_json::Value::String(raw)) => V::parse(raw)?,
            Some(other) => {
                return Err(TablekitError::Decode(format!(
                    "argument {:?}: expected string, got {other}",
                    V::FIELD
                )))
            }
            None => {
                return Err(TablekitError::Decode(format!(
                    "missing argument {:?}",
                    V::FIELD
                )))
            }
        };

        self.save(id, value).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use serde_json::json;
    use tablekit_core::Symbol;
    use tablekit_store::MemoryStore;

    use crate::config::ContractConfig;
    use crate::contract::{Int64Contract, NameContract, SymbolContract};

    fn name(s: &str) -> Name {
        Name::new(s).unwrap()
    }

    #[test]
    fn test_save_action_name() {
        assert_eq!(SAVE_ACTION, name("save"));
    }

    #[tokio::test]
    async fn test_dispatch_int64_save() {
        let contract = Int64Contract::deploy(
            name("intcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request = ActionRequest::save(name("intcontract"), json!({"id": 42, "text": "hello"}));

        contract.dispatch(&request).await.unwrap();
        assert_eq!(contract.table().get(42).await.unwrap().unwrap().value, "hello");

        let err = contract.dispatch(&request).await.unwrap_err();
        assert!(err.is_duplicate_key());
    }

    #[tokio::test]
    async fn test_dispatch_name_save() {
        let contract = NameContract::deploy(
            name("namecontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request =
            ActionRequest::save(name("namecontract"), json!({"id": "alice", "text": "note"}));

        contract.dispatch(&request).await.unwrap();
        let record = contract.table().get(name("alice").value()).await.unwrap().unwrap();
        assert_eq!(record.value, "note");
    }

    #[tokio::test]
    async fn test_dispatch_symbol_save() {
        let contract = SymbolContract::deploy(
            name("symcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request = ActionRequest::save(name("symcontract"), json!({"id": 7, "sym": "4,EOS"}));

        contract.dispatch(&request).await.unwrap();
        let record = contract.table().get(7).await.unwrap().unwrap();
        assert_eq!(record.value, Symbol::new(4, "EOS").unwrap());
    }

    #[tokio::test]
    async fn test_dispatch_invalid_symbol_is_invalid_value() {
        let contract = SymbolContract::deploy(
            name("symcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request = ActionRequest::save(name("symcontract"), json!({"id": 7, "sym": "4,eos"}));

        let err = contract.dispatch(&request).await.unwrap_err();
        assert!(err.is_invalid_value());
        assert!(contract.table().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_dispatch_rejects_other_account() {
        let contract = Int64Contract::deploy(
            name("intcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request = ActionRequest::save(name("someoneelse"), json!({"id": 1, "text": "x"}));

        assert!(matches!(
            contract.dispatch(&request).await,
            Err(TablekitError::WrongReceiver { .. })
        ));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_unknown_action() {
        let contract = Int64Contract::deploy(
            name("intcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let request =
            ActionRequest::new(name("intcontract"), name("erase"), json!({"id": 1}));

        assert!(matches!(
            contract.dispatch(&request).await,
            Err(TablekitError::UnknownAction(a)) if a == name("erase")
        ));
    }

    #[tokio::test]
    async fn test_dispatch_rejects_bad_arguments() {
        let contract = Int64Contract::deploy(
            name("intcontract"),
            Arc::new(MemoryStore::new()),
            ContractConfig::default(),
        );
        let account = name("intcontract");

        for args in [
            json!([42, "hello"]),
            json!({"text": "hello"}),
            json!({"id": -1, "text": "hello"}),
            json!({"id": 42}),
            json!({"id": 42, "text": 5}),
        ] {
            let request = ActionRequest::save(account, args.clone());
            assert!(
                matches!(contract.dispatch(&request).await, Err(TablekitError::Decode(_))),
                "{args} should fail to decode"
            );
        }
        assert!(contract.table().is_empty().await.unwrap());
    }

    #[tokio::test]
    async fn test_dispatch_through_trait_object() {
        let backend = Arc::new(MemoryStore::new());
        let contracts: Vec<Box<dyn Dispatcher>> = vec![
            Box::new(Int64Contract::deploy(
                name("intcontract"),
                backend.clone(),
                ContractConfig::default(),
            )),
            Box::new(SymbolContract::deploy(
                name("symcontract"),
                backend,
                ContractConfig::default(),
            )),
        ];

        let request = ActionRequest::save(name("symcontract"), json!({"id": 1, "sym": "2,USD"}));
        let results: Vec<bool> = dispatch_all(&contracts, &request).await;
        assert_eq!(results, vec![false, true]);
    }

    async fn dispatch_all(
        contracts: &[Box<dyn Dispatcher>],
        request: &ActionRequest,
    ) -> Vec<bool> {
        let mut out = Vec::new();
        for contract in contracts {
            out.push(contract.dispatch(request).await.is_ok());
        }
        out
    }
}
