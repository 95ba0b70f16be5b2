//! Repository for registered vendors.

use rfp_core::types::DbId;

use crate::models::vendor::{CreateVendor, Vendor};
use crate::Store;

/// Provides create and read operations for vendors.
pub struct VendorRepo;

impl VendorRepo {
    /// Register a vendor, assigning the next sequential id.
    pub async fn create(store: &Store, input: CreateVendor) -> Vendor {
        let mut table = store.vendors.write().await;
        let vendor = Vendor {
            id: table.next_id(),
            name: input.name,
            email: input.email,
            created_at: chrono::Utc::now(),
        };
        table.rows.push(vendor.clone());
        vendor
    }

    /// All vendors in registration order.
    pub async fn list(store: &Store) -> Vec<Vendor> {
        store.vendors.read().await.rows.clone()
    }

    /// Find a vendor by its ID.
    pub async fn find_by_id(store: &Store, id: DbId) -> Option<Vendor> {
        store
            .vendors
            .read()
            .await
            .rows
            .iter()
            .find(|v| v.id == id)
            .cloned()
    }

    pub async fn count(store: &Store) -> usize {
        store.vendors.read().await.rows.len()
    }
}
