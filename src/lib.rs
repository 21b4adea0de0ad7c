pub mod cli;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;

pub use config::Config;
pub use db::{init_db, Repository};
pub use domain::{Condition, InvalidCondition, Store, Vehicle};
pub use error::StorageError;
