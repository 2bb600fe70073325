//! Scopes and table identifiers.
//!
//! Every deployment owns one scope. A table is addressed by the owning
//! account, the namespace within it, and the table name.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::name::Name;

/// An isolated storage namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    /// The account that owns the storage.
    pub owner: Name,
    /// Namespace within the owner's storage.
    pub namespace: u64,
}

impl Scope {
    pub const fn new(owner: Name, namespace: u64) -> Self {
        Self { owner, namespace }
    }

    /// The scope a deployment uses for itself: its own account, namespaced
    /// by its own name.
    pub const fn own(account: Name) -> Self {
        Self {
            owner: account,
            namespace: account.value(),
        }
    }

    /// Address a table within this scope.
    pub const fn table(&self, table: Name) -> TableId {
        TableId {
            owner: self.owner,
            namespace: self.namespace,
            table,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.owner, Name::from_value(self.namespace))
    }
}

/// One logical table within a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TableId {
    pub owner: Name,
    pub namespace: u64,
    pub table: Name,
}

impl TableId {
    pub const fn scope(&self) -> Scope {
        Scope {
            owner: self.owner,
            namespace: self.namespace,
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.scope(), self.table)
    }
}
