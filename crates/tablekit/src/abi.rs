//! ABI descriptions of deployed contracts.
//!
//! Tooling that reads a contract's table directly needs to know the row
//! layout and the action signature. The description is built from the key
//! and value types, so the three variants never drift apart.

use serde::{Deserialize, Serialize};
use tablekit_core::{PrimaryKey, TableValue};
use tablekit_store::Store;

use crate::contract::Contract;
use crate::dispatch::SAVE_ACTION;

/// ABI format version.
pub const ABI_VERSION: &str = "eosio::abi/1.2";

/// Header comment written into generated descriptions.
pub const ABI_COMMENT: &str = "This file was generated by tablekit.";

/// Name of the row struct.
pub const ROW_STRUCT: &str = "StoredData";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Abi {
    #[serde(rename = "____comment", default)]
    pub comment: String,
    pub version: String,
    pub types: Vec<AbiType>,
    pub structs: Vec<AbiStruct>,
    pub actions: Vec<AbiAction>,
    pub tables: Vec<AbiTable>,
    #[serde(default)]
    pub ricardian_clauses: Vec<AbiClause>,
    #[serde(default)]
    pub variants: Vec<AbiVariant>,
    #[serde(default)]
    pub action_results: Vec<AbiActionResult>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiType {
    pub new_type_name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiField {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiStruct {
    pub name: String,
    pub base: String,
    pub fields: Vec<AbiField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiAction {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub ricardian_contract: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiTable {
    pub name: String,
    pub index_type: String,
    pub key_names: Vec<String>,
    pub key_types: Vec<String>,
    #[serde(rename = "type")]
    pub ty: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiClause {
    pub id: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiVariant {
    pub name: String,
    pub types: Vec<String>,
}

/// Return type of an action. `save` returns nothing, so none are emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbiActionResult {
    pub name: String,
    pub result_type: String,
}

impl Abi {
    /// Look up a struct by name.
    pub fn find_struct(&self, name: &str) -> Option<&AbiStruct> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn fields<K: PrimaryKey, V: TableValue>() -> Vec<AbiField> {
    vec![
        AbiField {
            name: "id".into(),
            ty: K::ABI_TYPE.into(),
        },
        AbiField {
            name: V::FIELD.into(),
            ty: V::ABI_TYPE.into(),
        },
    ]
}

impl<K, V, S> Contract<K, V, S>
where
    K: PrimaryKey,
    V: TableValue,
    S: Store,
{
    /// Describe this contract's action and table.
    pub fn abi(&self) -> Abi {
        let action = SAVE_ACTION.to_string();

        Abi {
            comment: ABI_COMMENT.into(),
            version: ABI_VERSION.into(),
            types: Vec::new(),
            structs: vec![
                AbiStruct {
                    name: ROW_STRUCT.into(),
                    base: String::new(),
                    fields: fields::<K, V>(),
                },
                AbiStruct {
                    name: action.clone(),
                    base: String::new(),
                    fields: fields::<K, V>(),
                },
            ],
            actions: vec![AbiAction {
                name: action.clone(),
                ty: action,
                ricardian_contract: String::new(),
            }],
            tables: vec![AbiTable {
                name: self.table().table().table.to_string(),
                index_type: "i64".into(),
                key_names: Vec::new(),
                key_types: Vec::new(),
                ty: ROW_STRUCT.into(),
            }],
            ricardian_clauses: Vec::new(),
            variants: Vec::new(),
            action_results: Vec::new(),
        }
    }
}
