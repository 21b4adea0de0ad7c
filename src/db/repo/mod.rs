//! Repository layer for database operations.
//!
//! This module provides the `Repository` struct for all database operations.
//! Methods are organized across submodules by record type:
//! - `vehicles.rs` - vehicle operations, including the depreciation rule
//! - `stores.rs` - store operations

mod stores;
mod vehicles;

use crate::config::Config;
use crate::domain::InvalidCondition;
use sqlx::sqlite::SqlitePool;

/// Outcome of an update or delete keyed by a record code.
///
/// Touching zero rows is an informational outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOutcome {
    /// The statement changed a row.
    Applied,
    /// No row matched the given code.
    NotFound,
}

impl RowOutcome {
    fn from_rows_affected(rows: u64) -> Self {
        if rows > 0 {
            RowOutcome::Applied
        } else {
            RowOutcome::NotFound
        }
    }
}

/// Outcome of deleting a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreDeleteOutcome {
    Deleted,
    /// No store matched the given code.
    NotFound,
    /// The guard policy refused the delete; this many vehicles still
    /// reference the store.
    HasVehicles(i64),
}

/// Result of registering a vehicle.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleCreated {
    /// Price actually written, after depreciation.
    pub stored_price: f64,
    /// Set when the condition label was not recognized; the row is stored
    /// with its price untouched.
    pub invalid_condition: Option<InvalidCondition>,
}

/// Write policies that deviate from the default behavior.
///
/// The defaults match the lot's long-standing workflow: updates take the
/// caller's price verbatim, and store deletion is handed straight to the
/// storage engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct Policy {
    /// Re-run the depreciation rule on `update_vehicle`.
    pub depreciate_on_update: bool,
    /// Check for referencing vehicles before deleting a store.
    pub guard_store_delete: bool,
}

impl From<&Config> for Policy {
    fn from(config: &Config) -> Self {
        Policy {
            depreciate_on_update: config.depreciate_on_update,
            guard_store_delete: config.guard_store_delete,
        }
    }
}

/// Repository for database operations.
pub struct Repository {
    pool: SqlitePool,
    policy: Policy,
}

impl Repository {
    /// Create a repository with default write policies.
    pub fn new(pool: SqlitePool) -> Self {
        Repository {
            pool,
            policy: Policy::default(),
        }
    }

    /// Create a repository with explicit write policies.
    pub fn with_policy(pool: SqlitePool, policy: Policy) -> Self {
        Repository { pool, policy }
    }
}
