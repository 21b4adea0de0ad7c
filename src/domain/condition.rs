//! Vehicle condition categories and their depreciation factors.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error for a condition label outside the known categories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown vehicle condition: {0}")]
pub struct InvalidCondition(pub String);

/// Conservation grade of a vehicle, from factory-new down to crash-damaged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Condition {
    New,
    SemiNew,
    Used,
    Damaged,
}

impl Condition {
    /// Fraction of the asking price knocked off when a vehicle enters the lot.
    pub fn depreciation_factor(&self) -> f64 {
        match self {
            Condition::New => 0.0,
            Condition::SemiNew => 0.05,
            Condition::Used => 0.10,
            Condition::Damaged => 0.15,
        }
    }

    /// Canonical uppercase label, as entered at the prompt.
    pub fn as_str(&self) -> &'static str {
        match self {
            Condition::New => "NEW",
            Condition::SemiNew => "SEMI_NEW",
            Condition::Used => "USED",
            Condition::Damaged => "DAMAGED",
        }
    }
}

impl std::fmt::Display for Condition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Condition {
    type Err = InvalidCondition;

    /// Labels match case-insensitively. The Portuguese labels used by the
    /// system this one replaces are accepted as aliases, so records imported
    /// from it keep working.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NEW" | "NOVO" => Ok(Condition::New),
            "SEMI_NEW" | "SEMI_NOVO" => Ok(Condition::SemiNew),
            "USED" | "USADO" => Ok(Condition::Used),
            "DAMAGED" | "BATIDO" => Ok(Condition::Damaged),
            _ => Err(InvalidCondition(s.trim().to_string())),
        }
    }
}
