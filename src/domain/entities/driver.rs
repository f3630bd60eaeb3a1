//! Domain entity representing a dispatch driver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Availability of a driver for new assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DriverStatus {
    #[default]
    Available,
    OnTrip,
    OffDuty,
}

impl DriverStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriverStatus::Available => "available",
            DriverStatus::OnTrip => "on_trip",
            DriverStatus::OffDuty => "off_duty",
        }
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DriverStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(DriverStatus::Available),
            "on_trip" => Ok(DriverStatus::OnTrip),
            "off_duty" => Ok(DriverStatus::OffDuty),
            other => Err(format!("unknown driver status '{other}'")),
        }
    }
}

/// A driver managed by the dispatch service.
///
/// `license_number` is unique across all drivers.
#[derive(Debug, Clone, PartialEq)]
pub struct Driver {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub vehicle: Option<String>,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input data for registering a new driver.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDriver {
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub vehicle: Option<String>,
    pub status: DriverStatus,
}

/// Partial update for an existing driver.
///
/// `None` leaves a field unchanged. For `vehicle`, `Some(None)` clears it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub license_number: Option<String>,
    pub vehicle: Option<Option<String>>,
    pub status: Option<DriverStatus>,
}

impl DriverPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.phone.is_none()
            && self.license_number.is_none()
            && self.vehicle.is_none()
            && self.status.is_none()
    }

    /// Applies the patch to a driver in place, bumping `updated_at`.
    pub fn apply(self, driver: &mut Driver, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            driver.name = name;
        }
        if let Some(phone) = self.phone {
            driver.phone = phone;
        }
        if let Some(license_number) = self.license_number {
            driver.license_number = license_number;
        }
        if let Some(vehicle) = self.vehicle {
            driver.vehicle = vehicle;
        }
        if let Some(status) = self.status {
            driver.status = status;
        }
        driver.updated_at = now;
    }
}
