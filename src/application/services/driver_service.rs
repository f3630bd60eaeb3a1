//! Driver management service.

use crate::domain::entities::{Driver, DriverPatch, NewDriver};
use crate::domain::repositories::DriverRepository;
use crate::error::AppError;
use crate::utils::ids::parse_id;
use serde_json::json;
use std::sync::Arc;

/// Service behind the driver routes.
///
/// Identifiers arrive as raw path segments and are parsed here, so the
/// router stays a pure dispatch table.
pub struct DriverService<R: DriverRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: DriverRepository + ?Sized> DriverService<R> {
    /// Creates a new driver service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists every registered driver.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_drivers(&self) -> Result<Vec<Driver>, AppError> {
        self.repository.list().await
    }

    /// Retrieves one driver by its raw path id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is malformed.
    /// Returns [`AppError::NotFound`] if no driver has that id.
    pub async fn get_driver(&self, raw_id: &str) -> Result<Driver, AppError> {
        let id = parse_id(raw_id, "driver")?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| driver_not_found(id))
    }

    /// Registers a new driver.
    ///
    /// Text fields are trimmed; blank required fields are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a required field is blank.
    /// Returns [`AppError::Conflict`] if the license number is taken.
    pub async fn create_driver(&self, new_driver: NewDriver) -> Result<Driver, AppError> {
        let new_driver = NewDriver {
            name: required("name", new_driver.name)?,
            phone: required("phone", new_driver.phone)?,
            license_number: required("license_number", new_driver.license_number)?,
            vehicle: optional(new_driver.vehicle),
            status: new_driver.status,
        };

        let driver = self.repository.create(new_driver).await?;
        tracing::info!(driver_id = driver.id, "Driver created");

        Ok(driver)
    }

    /// Updates a driver. An empty patch returns the stored driver unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is malformed or a field is blank.
    /// Returns [`AppError::NotFound`] if no driver has that id.
    /// Returns [`AppError::Conflict`] if the new license number is taken.
    pub async fn update_driver(&self, raw_id: &str, patch: DriverPatch) -> Result<Driver, AppError> {
        let id = parse_id(raw_id, "driver")?;

        if patch.is_empty() {
            return self
                .repository
                .find_by_id(id)
                .await?
                .ok_or_else(|| driver_not_found(id));
        }

        let patch = DriverPatch {
            name: patch.name.map(|v| required("name", v)).transpose()?,
            phone: patch.phone.map(|v| required("phone", v)).transpose()?,
            license_number: patch
                .license_number
                .map(|v| required("license_number", v))
                .transpose()?,
            vehicle: patch.vehicle.map(optional),
            status: patch.status,
        };

        let driver = self
            .repository
            .update(id, patch)
            .await?
            .ok_or_else(|| driver_not_found(id))?;
        tracing::info!(driver_id = id, "Driver updated");

        Ok(driver)
    }

    /// Removes a driver.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the id is malformed.
    /// Returns [`AppError::NotFound`] if no driver has that id.
    pub async fn delete_driver(&self, raw_id: &str) -> Result<(), AppError> {
        let id = parse_id(raw_id, "driver")?;

        if !self.repository.delete(id).await? {
            return Err(driver_not_found(id));
        }
        tracing::info!(driver_id = id, "Driver deleted");

        Ok(())
    }

    /// Reports whether driver storage is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}

fn driver_not_found(id: i64) -> AppError {
    AppError::not_found("Driver not found", json!({ "id": id }))
}

fn required(field: &'static str, value: String) -> Result<String, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::bad_request(
            format!("Field '{field}' must not be blank"),
            json!({ "field": field }),
        ));
    }
    Ok(trimmed.to_string())
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
