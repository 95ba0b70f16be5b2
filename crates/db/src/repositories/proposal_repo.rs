//! Repository for parsed vendor proposals.

use crate::models::proposal::{CreateProposal, Proposal};
use crate::Store;

/// Provides create and read operations for proposals.
pub struct ProposalRepo;

impl ProposalRepo {
    /// Store a parsed proposal, assigning the next sequential id.
    ///
    /// `vendor_id` is recorded as given; it is not checked against the
    /// vendor table.
    pub async fn create(store: &Store, input: CreateProposal) -> Proposal {
        let mut table = store.proposals.write().await;
        let proposal = Proposal {
            id: table.next_id(),
            vendor_id: input.vendor_id,
            proposal_text: input.proposal_text,
            terms: input.terms,
            created_at: chrono::Utc::now(),
        };
        table.rows.push(proposal.clone());
        proposal
    }

    /// All proposals in submission order.
    pub async fn list(store: &Store) -> Vec<Proposal> {
        store.proposals.read().await.rows.clone()
    }

    pub async fn count(store: &Store) -> usize {
        store.proposals.read().await.rows.len()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use rfp_core::extraction::ProposalTerms;

    use super::*;

    fn input(vendor_id: i64, text: &str) -> CreateProposal {
        CreateProposal {
            vendor_id,
            proposal_text: text.to_string(),
            terms: ProposalTerms::default(),
        }
    }

    #[tokio::test]
    async fn stores_unknown_vendor_ids_as_given() {
        let store = Store::new();
        let proposal = ProposalRepo::create(&store, input(42, "anything")).await;
        assert_eq!(proposal.id, 1);
        assert_eq!(proposal.vendor_id, 42);
    }

    #[tokio::test]
    async fn list_preserves_submission_order() {
        let store = Store::new();
        ProposalRepo::create(&store, input(1, "first")).await;
        ProposalRepo::create(&store, input(2, "second")).await;

        let texts: Vec<_> = ProposalRepo::list(&store)
            .await
            .into_iter()
            .map(|p| p.proposal_text)
            .collect();
        assert_eq!(texts, vec!["first", "second"]);
    }

    #[tokio::test]
    async fn concurrent_creates_get_unique_sequential_ids() {
        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..32)
            .map(|i| {
                let store = Arc::clone(&store);
                tokio::spawn(async move {
                    ProposalRepo::create(&store, input(1, &format!("p{i}"))).await.id
                })
            })
            .collect();

        let mut ids = Vec::new();
        for handle in handles {
            ids.push(handle.await.unwrap());
        }
        ids.sort_unstable();
        assert_eq!(ids, (1..=32).collect::<Vec<_>>());
        assert_eq!(ProposalRepo::count(&store).await, 32);
    }

    #[tokio::test]
    async fn terms_serialize_flat() {
        let store = Store::new();
        let proposal = ProposalRepo::create(
            &store,
            CreateProposal {
                vendor_id: 3,
                proposal_text: "Price $12345".to_string(),
                terms: ProposalTerms {
                    price: Some(12345),
                    ..Default::default()
                },
            },
        )
        .await;

        let json = serde_json::to_value(&proposal).unwrap();
        assert_eq!(json["price"], 12345);
        assert!(json["warranty"].is_null());
        assert_eq!(json["vendor_id"], 3);
    }
}
