//! Handlers for vendor registration and lookup.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rfp_core::error::CoreError;
use rfp_core::types::DbId;
use rfp_core::vendor::{validate_vendor_email, validate_vendor_name};
use rfp_db::models::vendor::CreateVendor;
use rfp_db::repositories::VendorRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::VendorCreatedResponse;
use crate::state::AppState;

/// Request body for `POST /vendors`. Fields are optional so a missing field
/// yields the API's own 400 response.
#[derive(Debug, Deserialize)]
pub struct CreateVendorRequest {
    pub name: Option<String>,
    pub email: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /vendors
// ---------------------------------------------------------------------------

/// Register a vendor. Name and email are trimmed before storing.
pub async fn create_vendor(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateVendorRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(name), Some(email)) = (body.name, body.email) else {
        return Err(AppError::BadRequest(
            "Vendor name and email required".into(),
        ));
    };

    validate_vendor_name(&name)?;
    validate_vendor_email(&email)?;

    let vendor = VendorRepo::create(
        &state.pool,
        CreateVendor {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
        },
    )
    .await;

    tracing::info!(vendor_id = vendor.id, name = %vendor.name, "Vendor added");

    Ok((
        StatusCode::CREATED,
        Json(VendorCreatedResponse {
            message: "Vendor added successfully",
            vendor,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /vendors
// ---------------------------------------------------------------------------

/// List all vendors in registration order.
pub async fn list_vendors(State(state): State<AppState>) -> impl IntoResponse {
    Json(VendorRepo::list(&state.pool).await)
}

// ---------------------------------------------------------------------------
// GET /vendors/{id}
// ---------------------------------------------------------------------------

pub async fn get_vendor(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let vendor = VendorRepo::find_by_id(&state.pool, id)
        .await
        .ok_or(CoreError::NotFound {
            entity: "Vendor",
            id,
        })?;
    Ok(Json(vendor))
}
