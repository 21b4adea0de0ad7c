//! Vehicle record as persisted in the `vehicle` table.

use serde::{Deserialize, Serialize};

/// A vehicle offered by a store.
///
/// Once the record has been through `Repository::create_vehicle`, `price`
/// holds the post-depreciation value; the rule is never reapplied on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Caller-assigned unique identifier.
    pub code: i64,
    pub brand: String,
    pub model: String,
    /// Year of manufacture.
    pub year: i64,
    /// Code of the store offering this vehicle.
    pub store_id: i64,
    pub price: f64,
    /// Raw condition label. Kept as text so rows whose label the depreciation
    /// rule does not recognize can still be stored.
    pub condition: String,
}

impl std::fmt::Display for Vehicle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Code: {}\nBrand: {}\nModel: {}\nYear: {}\nStore id: {}\nPrice: {:.2}\nCondition: {}",
            self.code, self.brand, self.model, self.year, self.store_id, self.price, self.condition
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lists_every_field() {
        let vehicle = Vehicle {
            code: 10,
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2010,
            store_id: 1,
            price: 950.0,
            condition: "SEMI_NEW".to_string(),
        };

        let rendered = vehicle.to_string();
        assert_eq!(
            rendered,
            "Code: 10\nBrand: Fiat\nModel: Uno\nYear: 2010\nStore id: 1\nPrice: 950.00\nCondition: SEMI_NEW"
        );
    }
}
