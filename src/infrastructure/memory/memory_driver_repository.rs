//! In-memory driver repository.

use async_trait::async_trait;
use chrono::Utc;
use serde_json::json;
use std::collections::BTreeMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::entities::{Driver, DriverPatch, NewDriver};
use crate::domain::repositories::DriverRepository;
use crate::error::AppError;

#[derive(Default)]
struct Store {
    next_id: i64,
    drivers: BTreeMap<i64, Driver>,
}

impl Store {
    fn license_taken(&self, license_number: &str, except: Option<i64>) -> bool {
        self.drivers
            .values()
            .any(|d| d.license_number == license_number && Some(d.id) != except)
    }
}

/// Driver storage backed by a process-local map.
///
/// Mirrors the PostgreSQL repository: ids start at 1 and increase, and a
/// duplicate license number is a [`AppError::Conflict`].
pub struct MemoryDriverRepository {
    store: RwLock<Store>,
}

impl MemoryDriverRepository {
    pub fn new() -> Self {
        debug!("Using in-memory driver storage");
        Self {
            store: RwLock::new(Store::default()),
        }
    }
}

impl Default for MemoryDriverRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn license_conflict() -> AppError {
    AppError::conflict(
        "Unique constraint violation",
        json!({ "constraint": "drivers_license_number_key" }),
    )
}

#[async_trait]
impl DriverRepository for MemoryDriverRepository {
    async fn list(&self) -> Result<Vec<Driver>, AppError> {
        Ok(self.store.read().await.drivers.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError> {
        Ok(self.store.read().await.drivers.get(&id).cloned())
    }

    async fn create(&self, new_driver: NewDriver) -> Result<Driver, AppError> {
        let mut store = self.store.write().await;

        if store.license_taken(&new_driver.license_number, None) {
            return Err(license_conflict());
        }

        store.next_id += 1;
        let now = Utc::now();
        let driver = Driver {
            id: store.next_id,
            name: new_driver.name,
            phone: new_driver.phone,
            license_number: new_driver.license_number,
            vehicle: new_driver.vehicle,
            status: new_driver.status,
            created_at: now,
            updated_at: now,
        };
        store.drivers.insert(driver.id, driver.clone());

        Ok(driver)
    }

    async fn update(&self, id: i64, patch: DriverPatch) -> Result<Option<Driver>, AppError> {
        let mut store = self.store.write().await;

        if !store.drivers.contains_key(&id) {
            return Ok(None);
        }

        if let Some(license_number) = &patch.license_number
            && store.license_taken(license_number, Some(id))
        {
            return Err(license_conflict());
        }

        let Some(driver) = store.drivers.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply(driver, Utc::now());

        Ok(Some(driver.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.store.write().await.drivers.remove(&id).is_some())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
