//! Vendor model and DTOs.

use rfp_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A registered vendor. Immutable once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Vendor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

/// DTO for registering a vendor.
#[derive(Debug, Clone)]
pub struct CreateVendor {
    pub name: String,
    pub email: String,
}
