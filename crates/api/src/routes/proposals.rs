//! Route definitions for vendor proposals.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::proposals;
use crate::state::AppState;

/// Proposal routes mounted at `/proposals`.
///
/// ```text
/// GET  /         -> list_proposals
/// POST /parse    -> parse_proposal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(proposals::list_proposals))
        .route("/parse", post(proposals::parse_proposal))
}
