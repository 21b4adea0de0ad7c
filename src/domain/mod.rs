//! Domain types for the dealership inventory.
//!
//! This module provides:
//! - Vehicle and Store records as persisted in the database
//! - Condition categories and their depreciation factors
//! - The fixed-percentage depreciation rule

pub mod condition;
pub mod depreciation;
pub mod store;
pub mod vehicle;

pub use condition::{Condition, InvalidCondition};
pub use store::Store;
pub use vehicle::Vehicle;
