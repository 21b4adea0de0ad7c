//! Vehicle operations for the repository.

use crate::domain::{depreciation, Vehicle};
use crate::error::StorageError;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::warn;

use super::{Repository, RowOutcome, VehicleCreated};

impl Repository {
    /// Register a vehicle.
    ///
    /// The depreciation rule runs once, here: the row is written with the
    /// discounted price. A label the rule does not recognize is carried in
    /// the outcome and the price goes in untouched.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including when `code` is
    /// already taken.
    pub async fn create_vehicle(&self, vehicle: &Vehicle) -> Result<VehicleCreated, StorageError> {
        let (stored_price, invalid_condition) =
            match depreciation::adjusted_price(&vehicle.condition, vehicle.price) {
                Ok(price) => (price, None),
                Err(err) => (vehicle.price, Some(err)),
            };

        sqlx::query(
            r#"
            INSERT INTO vehicle (code, brand, model, year, store_id, price, condition)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(vehicle.code)
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.store_id)
        .bind(stored_price)
        .bind(&vehicle.condition)
        .execute(&self.pool)
        .await?;

        Ok(VehicleCreated {
            stored_price,
            invalid_condition,
        })
    }

    /// Fetch every vehicle row, in the storage engine's default order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn read_all_vehicles(&self) -> Result<Vec<Vehicle>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT code, brand, model, year, store_id, price, condition
            FROM vehicle
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(vehicle_from_row).collect())
    }

    /// Fetch the vehicles offered by one store.
    ///
    /// A store with no vehicles and a store that does not exist both come
    /// back as an empty list.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn read_vehicles_by_store(&self, store_id: i64) -> Result<Vec<Vehicle>, StorageError> {
        let rows = sqlx::query(
            r#"
            SELECT code, brand, model, year, store_id, price, condition
            FROM vehicle
            WHERE store_id = ?
            "#,
        )
        .bind(store_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(vehicle_from_row).collect())
    }

    /// Overwrite every mutable field of the row matching `vehicle.code`.
    ///
    /// The supplied price is taken verbatim unless the repository was built
    /// with the `depreciate_on_update` policy.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_vehicle(&self, vehicle: &Vehicle) -> Result<RowOutcome, StorageError> {
        let price = if self.policy.depreciate_on_update {
            match depreciation::adjusted_price(&vehicle.condition, vehicle.price) {
                Ok(price) => price,
                Err(err) => {
                    warn!(
                        code = vehicle.code,
                        condition = %vehicle.condition,
                        error = %err,
                        "condition not recognized, keeping supplied price"
                    );
                    vehicle.price
                }
            }
        } else {
            vehicle.price
        };

        let result = sqlx::query(
            r#"
            UPDATE vehicle
            SET brand = ?, model = ?, year = ?, store_id = ?, price = ?, condition = ?
            WHERE code = ?
            "#,
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.store_id)
        .bind(price)
        .bind(&vehicle.condition)
        .bind(vehicle.code)
        .execute(&self.pool)
        .await?;

        Ok(RowOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Delete the vehicle matching `code`.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_vehicle(&self, code: i64) -> Result<RowOutcome, StorageError> {
        let result = sqlx::query("DELETE FROM vehicle WHERE code = ?")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(RowOutcome::from_rows_affected(result.rows_affected()))
    }
}

fn vehicle_from_row(row: &SqliteRow) -> Vehicle {
    Vehicle {
        code: row.get("code"),
        brand: row.get("brand"),
        model: row.get("model"),
        year: row.get("year"),
        store_id: row.get("store_id"),
        price: row.get("price"),
        condition: row.get("condition"),
    }
}
