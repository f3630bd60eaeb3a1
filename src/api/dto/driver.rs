//! DTOs for driver management.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{Driver, DriverPatch, DriverStatus, NewDriver};

/// Digits with optional leading `+` and common separators.
static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9][0-9 ()\-.]{3,30}$").expect("valid phone regex"));

/// Request body for `POST /drivers`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,

    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(length(min = 1, max = 64, message = "License number must be 1-64 characters"))]
    pub license_number: String,

    #[validate(length(max = 100))]
    pub vehicle: Option<String>,

    /// Defaults to `available`.
    pub status: Option<DriverStatus>,
}

impl From<CreateDriverRequest> for NewDriver {
    fn from(req: CreateDriverRequest) -> Self {
        NewDriver {
            name: req.name,
            phone: req.phone,
            license_number: req.license_number,
            vehicle: req.vehicle,
            status: req.status.unwrap_or_default(),
        }
    }
}

/// Request body for `PUT /drivers/{id}`.
///
/// Accepts a full or partial representation; absent fields are kept.
/// `vehicle: null` clears the vehicle.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateDriverRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(regex(path = *PHONE_RE, message = "Invalid phone number"))]
    pub phone: Option<String>,

    #[validate(length(min = 1, max = 64, message = "License number must be 1-64 characters"))]
    pub license_number: Option<String>,

    #[validate(length(max = 100))]
    #[serde(default, with = "::serde_with::rust::double_option")]
    pub vehicle: Option<Option<String>>,

    pub status: Option<DriverStatus>,
}

impl From<UpdateDriverRequest> for DriverPatch {
    fn from(req: UpdateDriverRequest) -> Self {
        DriverPatch {
            name: req.name,
            phone: req.phone,
            license_number: req.license_number,
            vehicle: req.vehicle,
            status: req.status,
        }
    }
}

/// Individual driver information.
#[derive(Debug, Serialize)]
pub struct DriverItem {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub license_number: String,
    pub vehicle: Option<String>,
    pub status: DriverStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Driver> for DriverItem {
    fn from(d: Driver) -> Self {
        DriverItem {
            id: d.id,
            name: d.name,
            phone: d.phone,
            license_number: d.license_number,
            vehicle: d.vehicle,
            status: d.status,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

/// Response containing the list of drivers.
#[derive(Debug, Serialize)]
pub struct DriverListResponse {
    pub items: Vec<DriverItem>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_update_request_vehicle_absent_vs_null() {
        let absent: UpdateDriverRequest = serde_json::from_value(json!({ "name": "X" })).unwrap();
        let null: UpdateDriverRequest = serde_json::from_value(json!({ "vehicle": null })).unwrap();
        let set: UpdateDriverRequest =
            serde_json::from_value(json!({ "vehicle": "Truck 4" })).unwrap();

        assert_eq!(absent.vehicle, None);
        assert_eq!(null.vehicle, Some(None));
        assert_eq!(set.vehicle, Some(Some("Truck 4".to_string())));
    }

    #[test]
    fn test_create_request_validation() {
        let valid: CreateDriverRequest = serde_json::from_value(json!({
            "name": "Ada",
            "phone": "+1 555-0100",
            "license_number": "LIC-1"
        }))
        .unwrap();
        assert!(valid.validate().is_ok());

        let bad_phone: CreateDriverRequest = serde_json::from_value(json!({
            "name": "Ada",
            "phone": "call me",
            "license_number": "LIC-1"
        }))
        .unwrap();
        assert!(bad_phone.validate().is_err());
    }

    #[test]
    fn test_create_request_defaults_status() {
        let req: CreateDriverRequest = serde_json::from_value(json!({
            "name": "Ada",
            "phone": "5550100",
            "license_number": "LIC-1"
        }))
        .unwrap();

        let new_driver = NewDriver::from(req);
        assert_eq!(new_driver.status, DriverStatus::Available);
    }

    #[test]
    fn test_unknown_status_is_rejected() {
        let result = serde_json::from_value::<CreateDriverRequest>(json!({
            "name": "Ada",
            "phone": "5550100",
            "license_number": "LIC-1",
            "status": "parked"
        }));

        assert!(result.is_err());
    }

    #[test]
    fn test_update_request_vehicle_length() {
        let long: UpdateDriverRequest =
            serde_json::from_value(json!({ "vehicle": "v".repeat(101) })).unwrap();
        let cleared: UpdateDriverRequest =
            serde_json::from_value(json!({ "vehicle": null })).unwrap();

        assert!(long.validate().is_err());
        assert!(cleared.validate().is_ok());
    }
}
