//! Repository trait for driver storage.

use crate::domain::entities::{Driver, DriverPatch, NewDriver};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for managing drivers.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDriverRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryDriverRepository`] - In-process fallback
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DriverRepository: Send + Sync {
    /// Lists all drivers ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self) -> Result<Vec<Driver>, AppError>;

    /// Finds a driver by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<Driver>, AppError>;

    /// Stores a new driver.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the license number is already registered.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, new_driver: NewDriver) -> Result<Driver, AppError>;

    /// Applies a partial update. Returns `None` if the driver does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the new license number is taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn update(&self, id: i64, patch: DriverPatch) -> Result<Option<Driver>, AppError>;

    /// Removes a driver. Returns `false` if nothing was deleted.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;

    /// Returns `true` when the backing store answers.
    async fn health_check(&self) -> bool;
}
