//! PostgreSQL implementation of the driver repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::json;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::{Driver, DriverPatch, DriverStatus, NewDriver};
use crate::domain::repositories::DriverRepository;
use crate::error::AppError;

const DRIVER_COLUMNS: &str =
    "id, name, phone, license_number, vehicle, status, created_at, updated_at";

#[derive(FromRow)]
struct DriverRow {
    id: i64,
    name: String,
    phone: String,
    license_number: String,
    vehicle: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<DriverRow> for Driver {
    type Error = AppError;

    fn try_from(row: DriverRow) -> Result<Self, Self::Error> {
        let status = row.status.parse::<DriverStatus>().map_err(|e| {
            AppError::internal("Corrupt driver row", json!({ "id": row.id, "reason": e }))
        })?;

        Ok(Driver {
            id: row.id,
            name: row.name,
            phone: row.phone,
            license_number: row.license_number,
            vehicle: row.vehicle,
            status,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// PostgreSQL repository for drivers.
///
/// `license_number` uniqueness is enforced by the `drivers_license_number_key`
/// constraint and surfaces as [`AppError::Conflict`].
pub struct PgDriverRepository {
    pool: Arc<PgPool>,
}

impl PgDriverRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DriverRepository for PgDriverRepository {
    async fn list(&self) -> Result<Vec<Driver>, AppError> {
        let rows = sqlx::query_as::<_, DriverRow>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers ORDER BY id"
        ))
        .fetch_all(self.pool.as_ref())
        .await?;

        rows.into_iter().map(Driver::try_from).collect()
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        let row = sqlx::query_as::<_, DriverRow>(&format!(
            "SELECT {DRIVER_COLUMNS} FROM drivers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Driver::try_from).transpose()
    }

    async fn create(&self, new_driver: NewDriver) -> Result<Driver, AppError> {
        let row = sqlx::query_as::<_, DriverRow>(&format!(
            r#"
            INSERT INTO drivers (name, phone, license_number, vehicle, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(new_driver.name)
        .bind(new_driver.phone)
        .bind(new_driver.license_number)
        .bind(new_driver.vehicle)
        .bind(new_driver.status.as_str())
        .fetch_one(self.pool.as_ref())
        .await?;

        Driver::try_from(row)
    }

    async fn update(&self, id: i64, patch: DriverPatch) -> Result<Option<Driver>, AppError> {
        // $5 selects whether $6 replaces vehicle, so that NULL can clear it.
        let (set_vehicle, vehicle) = match patch.vehicle {
            Some(vehicle) => (true, vehicle),
            None => (false, None),
        };

        let row = sqlx::query_as::<_, DriverRow>(&format!(
            r#"
            UPDATE drivers
            SET name = COALESCE($2, name),
                phone = COALESCE($3, phone),
                license_number = COALESCE($4, license_number),
                vehicle = CASE WHEN $5 THEN $6 ELSE vehicle END,
                status = COALESCE($7, status),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {DRIVER_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(patch.name)
        .bind(patch.phone)
        .bind(patch.license_number)
        .bind(set_vehicle)
        .bind(vehicle)
        .bind(patch.status.map(|s| s.as_str()))
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Driver::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM drivers WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
