//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{DriverService, NotificationService};
use crate::domain::repositories::{DriverRepository, NotificationRepository};
use crate::infrastructure::memory::{MemoryDriverRepository, MemoryNotificationRepository};

/// Which backend the repositories talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl StorageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageKind::Postgres => "postgres",
            StorageKind::Memory => "memory",
        }
    }
}

/// State shared by every request.
///
/// Cloning is cheap; all members are reference counted.
#[derive(Clone)]
pub struct AppState {
    pub driver_service: Arc<DriverService<dyn DriverRepository>>,
    pub notification_service: Arc<NotificationService<dyn NotificationRepository>>,
    pub storage: StorageKind,
    /// Background image reference used by the auth page layout.
    pub auth_background_image: Arc<str>,
}

impl AppState {
    pub fn new(
        drivers: Arc<dyn DriverRepository>,
        notifications: Arc<dyn NotificationRepository>,
        storage: StorageKind,
        auth_background_image: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            driver_service: Arc::new(DriverService::new(drivers)),
            notification_service: Arc::new(NotificationService::new(notifications)),
            storage,
            auth_background_image: auth_background_image.into(),
        }
    }

    /// State backed by fresh in-memory repositories.
    pub fn in_memory(auth_background_image: impl Into<Arc<str>>) -> Self {
        Self::new(
            Arc::new(MemoryDriverRepository::new()),
            Arc::new(MemoryNotificationRepository::new()),
            StorageKind::Memory,
            auth_background_image,
        )
    }
}
