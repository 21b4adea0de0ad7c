//! Store operations for the repository.

use crate::domain::Store;
use crate::error::StorageError;
use sqlx::Row;

use super::{Repository, RowOutcome, StoreDeleteOutcome};

impl Repository {
    /// Register a store.
    ///
    /// # Errors
    /// Returns an error if the insert fails, including when `code` is
    /// already taken.
    pub async fn create_store(&self, store: &Store) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            INSERT INTO store (code, name, address)
            VALUES (?, ?, ?)
            "#,
        )
        .bind(store.code)
        .bind(&store.name)
        .bind(&store.address)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Fetch every store row, in the storage engine's default order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn read_all_stores(&self) -> Result<Vec<Store>, StorageError> {
        let rows = sqlx::query("SELECT code, name, address FROM store")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .iter()
            .map(|row| Store {
                code: row.get("code"),
                name: row.get("name"),
                address: row.get("address"),
            })
            .collect())
    }

    /// Overwrite `name` and `address` of the row matching `store.code`.
    ///
    /// # Errors
    /// Returns an error if the update fails.
    pub async fn update_store(&self, store: &Store) -> Result<RowOutcome, StorageError> {
        let result = sqlx::query("UPDATE store SET name = ?, address = ? WHERE code = ?")
            .bind(&store.name)
            .bind(&store.address)
            .bind(store.code)
            .execute(&self.pool)
            .await?;

        Ok(RowOutcome::from_rows_affected(result.rows_affected()))
    }

    /// Delete the store matching `code`.
    ///
    /// The schema declares no foreign key, so by default the delete goes
    /// straight to the storage engine and any vehicles still referencing the
    /// store are orphaned. With the `guard_store_delete` policy, referencing
    /// vehicles are counted first and block the delete.
    ///
    /// # Errors
    /// Returns an error if a statement fails.
    pub async fn delete_store(&self, code: i64) -> Result<StoreDeleteOutcome, StorageError> {
        if self.policy.guard_store_delete {
            let row = sqlx::query("SELECT COUNT(*) AS n FROM vehicle WHERE store_id = ?")
                .bind(code)
                .fetch_one(&self.pool)
                .await?;
            let referencing: i64 = row.get("n");
            if referencing > 0 {
                return Ok(StoreDeleteOutcome::HasVehicles(referencing));
            }
        }

        let result = sqlx::query("DELETE FROM store WHERE code = ?")
            .bind(code)
            .execute(&self.pool)
            .await?;

        Ok(if result.rows_affected() > 0 {
            StoreDeleteOutcome::Deleted
        } else {
            StoreDeleteOutcome::NotFound
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::Policy;
    use super::*;
    use crate::db::migrations::init_db;
    use crate::domain::Vehicle;
    use tempfile::TempDir;

    async fn setup_test_db() -> (Repository, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        (Repository::new(pool), temp_dir)
    }

    fn downtown(code: i64) -> Store {
        Store {
            code,
            name: "Downtown Motors".to_string(),
            address: "1 Main St".to_string(),
        }
    }

    fn parked_at(store_id: i64) -> Vehicle {
        Vehicle {
            code: 10,
            brand: "Fiat".to_string(),
            model: "Uno".to_string(),
            year: 2010,
            store_id,
            price: 1000.0,
            condition: "NEW".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_read_stores() {
        let (repo, _temp) = setup_test_db().await;

        repo.create_store(&downtown(1)).await.unwrap();
        repo.create_store(&downtown(2)).await.unwrap();

        let stores = repo.read_all_stores().await.unwrap();
        assert_eq!(stores.len(), 2);
        assert_eq!(stores[0].name, "Downtown Motors");
    }

    #[tokio::test]
    async fn test_create_duplicate_code_fails() {
        let (repo, _temp) = setup_test_db().await;

        repo.create_store(&downtown(1)).await.unwrap();
        assert!(repo.create_store(&downtown(1)).await.is_err());
    }

    #[tokio::test]
    async fn test_update_store() {
        let (repo, _temp) = setup_test_db().await;

        repo.create_store(&downtown(1)).await.unwrap();
        let updated = Store {
            code: 1,
            name: "Uptown Motors".to_string(),
            address: "9 High St".to_string(),
        };
        assert_eq!(
            repo.update_store(&updated).await.unwrap(),
            RowOutcome::Applied
        );

        let stores = repo.read_all_stores().await.unwrap();
        assert_eq!(stores[0].name, "Uptown Motors");
        assert_eq!(stores[0].address, "9 High St");
    }

    #[tokio::test]
    async fn test_update_unknown_code_reports_not_found() {
        let (repo, _temp) = setup_test_db().await;
        assert_eq!(
            repo.update_store(&downtown(99)).await.unwrap(),
            RowOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_delete_store() {
        let (repo, _temp) = setup_test_db().await;

        repo.create_store(&downtown(1)).await.unwrap();
        assert_eq!(
            repo.delete_store(1).await.unwrap(),
            StoreDeleteOutcome::Deleted
        );
        assert!(repo.read_all_stores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_code_reports_not_found() {
        let (repo, _temp) = setup_test_db().await;
        assert_eq!(
            repo.delete_store(99).await.unwrap(),
            StoreDeleteOutcome::NotFound
        );
    }

    #[tokio::test]
    async fn test_unguarded_delete_orphans_vehicles() {
        let (repo, _temp) = setup_test_db().await;

        repo.create_store(&downtown(1)).await.unwrap();
        repo.create_vehicle(&parked_at(1)).await.unwrap();

        assert_eq!(
            repo.delete_store(1).await.unwrap(),
            StoreDeleteOutcome::Deleted
        );
        // The vehicle row survives with a dangling store_id.
        assert_eq!(repo.read_vehicles_by_store(1).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_guarded_delete_refuses_while_vehicles_remain() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir
            .path()
            .join("test.db")
            .to_string_lossy()
            .to_string();
        let pool = init_db(&db_path).await.expect("init_db failed");
        let repo = Repository::with_policy(
            pool,
            Policy {
                depreciate_on_update: false,
                guard_store_delete: true,
            },
        );

        repo.create_store(&downtown(1)).await.unwrap();
        repo.create_vehicle(&parked_at(1)).await.unwrap();

        assert_eq!(
            repo.delete_store(1).await.unwrap(),
            StoreDeleteOutcome::HasVehicles(1)
        );
        assert_eq!(repo.read_all_stores().await.unwrap().len(), 1);

        // Once the lot is empty the delete goes through.
        repo.delete_vehicle(10).await.unwrap();
        assert_eq!(
            repo.delete_store(1).await.unwrap(),
            StoreDeleteOutcome::Deleted
        );
    }
}
