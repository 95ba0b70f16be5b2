//! Response bodies shared by the API handlers.
//!
//! Every JSON payload carries a human-readable `message` next to its data.
//! Optional parts are omitted entirely when absent, so an empty comparison
//! never looks like an empty ranking.

use serde::Serialize;

use rfp_core::dispatch::DispatchReceipt;
use rfp_core::rfp::StructuredRfp;
use rfp_core::scoring::ScoredProposal;
use rfp_db::models::proposal::Proposal;
use rfp_db::models::vendor::Vendor;

/// `POST /api/rfp/create`
#[derive(Debug, Serialize)]
pub struct RfpResponse {
    pub source_text: String,
    pub structured_rfp: StructuredRfp,
    pub note: String,
}

/// `POST /api/vendors`
#[derive(Debug, Serialize)]
pub struct VendorCreatedResponse {
    pub message: &'static str,
    pub vendor: Vendor,
}

/// `POST /api/send-rfp`
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sent_to: Option<Vec<DispatchReceipt>>,
}

/// `POST /api/proposals/parse`
#[derive(Debug, Serialize)]
pub struct ProposalParsedResponse {
    pub message: String,
    pub proposal: Proposal,
}

/// `GET /api/rfp/compare`
#[derive(Debug, Serialize)]
pub struct ComparisonResponse {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_vendor: Option<ScoredProposal<Proposal>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comparison_table: Option<Vec<ScoredProposal<Proposal>>>,
}
