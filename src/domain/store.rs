//! Store record as persisted in the `store` table.

use serde::{Deserialize, Serialize};

/// A dealership branch offering vehicles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Caller-assigned unique identifier.
    pub code: i64,
    pub name: String,
    pub address: String,
}

impl std::fmt::Display for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}\nName: {}\nAddress: {}",
            self.code, self.name, self.address
        )
    }
}
