//! In-memory storage for vendors and proposals.
//!
//! A [`Store`] is created once at startup and injected into the HTTP layer
//! as `Arc<Store>`. Repositories are zero-sized structs whose methods take
//! `&Store` as the first argument.

pub mod models;
pub mod repositories;
mod store;

use serde::Serialize;

use crate::repositories::{ProposalRepo, VendorRepo};

pub use store::Store;

/// Shared handle to the store, cloned into every request.
pub type DbPool = std::sync::Arc<Store>;

/// Create an empty, shareable store.
pub fn create_pool() -> DbPool {
    std::sync::Arc::new(Store::new())
}

/// Row counts reported by the health endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub vendors: usize,
    pub proposals: usize,
}

/// Report the size of both collections.
pub async fn stats(store: &Store) -> StoreStats {
    StoreStats {
        vendors: VendorRepo::count(store).await,
        proposals: ProposalRepo::count(store).await,
    }
}

#[cfg(test)]
mod tests {
    use rfp_core::extraction::ProposalTerms;

    use super::*;
    use crate::models::proposal::CreateProposal;
    use crate::models::vendor::CreateVendor;

    #[tokio::test]
    async fn stats_counts_each_collection() {
        let store = Store::new();
        assert_eq!(
            stats(&store).await,
            StoreStats {
                vendors: 0,
                proposals: 0,
            }
        );

        VendorRepo::create(
            &store,
            CreateVendor {
                name: "Acme".to_string(),
                email: "a@acme.test".to_string(),
            },
        )
        .await;
        for text in ["first", "second"] {
            ProposalRepo::create(
                &store,
                CreateProposal {
                    vendor_id: 1,
                    proposal_text: text.to_string(),
                    terms: ProposalTerms::default(),
                },
            )
            .await;
        }

        assert_eq!(
            stats(&store).await,
            StoreStats {
                vendors: 1,
                proposals: 2,
            }
        );
    }
}
