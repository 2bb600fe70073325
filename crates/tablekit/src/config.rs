//! Configuration for a deployed table.

use tablekit_core::Name;

/// Configuration for a contract and its keyed table.
#[derive(Debug, Clone)]
pub struct ContractConfig {
    /// Name of the table within the contract's scope.
    pub table: Name,
    /// Whether to re-validate values decoded on read.
    pub validate_on_read: bool,
}

impl ContractConfig {
    /// Use a different table name.
    pub fn with_table(mut self, table: Name) -> Self {
        self.table = table;
        self
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            table: DEFAULT_TABLE,
            validate_on_read: true,
        }
    }
}

/// `mytable`
pub const DEFAULT_TABLE: Name = Name::from_value(10930908944415064064);
