//! Handlers for driver management endpoints.
//!
//! Identifiers are taken from the path as opaque strings and parsed by
//! [`crate::application::services::DriverService`].

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::driver::{
    CreateDriverRequest, DriverItem, DriverListResponse, UpdateDriverRequest,
};
use crate::error::AppError;
use crate::state::AppState;

/// Lists all drivers.
///
/// # Endpoint
///
/// `GET /drivers`
pub async fn list_drivers_handler(
    State(state): State<AppState>,
) -> Result<Json<DriverListResponse>, AppError> {
    let drivers = state.driver_service.list_drivers().await?;

    Ok(Json(DriverListResponse {
        items: drivers.into_iter().map(DriverItem::from).collect(),
    }))
}

/// Returns a single driver.
///
/// # Endpoint
///
/// `GET /drivers/{id}`
///
/// # Errors
///
/// Returns 400 if `id` is not a positive integer.
/// Returns 404 if the driver does not exist.
pub async fn get_driver_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<DriverItem>, AppError> {
    let Path(id) = id?;
    let driver = state.driver_service.get_driver(&id).await?;

    Ok(Json(driver.into()))
}

/// Registers a new driver.
///
/// # Endpoint
///
/// `POST /drivers`
///
/// # Request Body
///
/// ```json
/// {
///   "name": "Ada Byron",
///   "phone": "+1 555-0100",
///   "license_number": "LIC-001",
///   "vehicle": "Van 12",      // optional
///   "status": "available"     // optional: available | on_trip | off_duty
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is malformed or fails validation.
/// Returns 409 if the license number is already registered.
pub async fn create_driver_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateDriverRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<DriverItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let driver = state.driver_service.create_driver(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(driver.into())))
}

/// Updates a driver with a full or partial representation.
///
/// # Endpoint
///
/// `PUT /drivers/{id}`
///
/// Absent fields are left unchanged; `"vehicle": null` clears the vehicle.
///
/// # Errors
///
/// Returns 400 if the body or `id` is invalid.
/// Returns 404 if the driver does not exist.
/// Returns 409 if the new license number is taken.
pub async fn update_driver_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateDriverRequest>, JsonRejection>,
) -> Result<Json<DriverItem>, AppError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    payload.validate()?;

    let driver = state
        .driver_service
        .update_driver(&id, payload.into())
        .await?;

    Ok(Json(driver.into()))
}

/// Removes a driver.
///
/// # Endpoint
///
/// `DELETE /drivers/{id}`
///
/// # Errors
///
/// Returns 404 if the driver does not exist.
pub async fn delete_driver_handler(
    id: Result<Path<String>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let Path(id) = id?;
    state.driver_service.delete_driver(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
