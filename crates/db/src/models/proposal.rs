//! Proposal model and DTOs.

use rfp_core::extraction::ProposalTerms;
use rfp_core::types::{DbId, Timestamp};
use serde::Serialize;

/// A parsed vendor proposal. Immutable once created.
///
/// The extracted terms serialize flat next to the raw text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Proposal {
    pub id: DbId,
    pub vendor_id: DbId,
    /// Original text, kept for audit.
    pub proposal_text: String,
    #[serde(flatten)]
    pub terms: ProposalTerms,
    pub created_at: Timestamp,
}

impl AsRef<ProposalTerms> for Proposal {
    fn as_ref(&self) -> &ProposalTerms {
        &self.terms
    }
}

/// DTO for storing a proposal after extraction.
#[derive(Debug, Clone)]
pub struct CreateProposal {
    pub vendor_id: DbId,
    pub proposal_text: String,
    pub terms: ProposalTerms,
}
