use std::sync::Arc;

use rfp_core::extraction::{PatternExtractor, ProposalExtractor};
use rfp_core::rfp::{PatternRfpGenerator, RfpGenerator};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Vendor and proposal store.
    pub pool: rfp_db::DbPool,
    /// Backend that turns proposal text into terms.
    pub extractor: Arc<dyn ProposalExtractor>,
    /// Backend that structures procurement requests.
    pub rfp_generator: Arc<dyn RfpGenerator>,
}

impl AppState {
    /// State with the pattern-based extractor and RFP generator.
    pub fn new(pool: rfp_db::DbPool) -> Self {
        Self {
            pool,
            extractor: Arc::new(PatternExtractor),
            rfp_generator: Arc::new(PatternRfpGenerator),
        }
    }
}
