//! Route definitions for RFP structuring and proposal comparison.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rfp;
use crate::state::AppState;

/// RFP routes mounted at `/rfp`.
///
/// ```text
/// POST /create     -> create_rfp
/// GET  /compare    -> compare_proposals
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create", post(rfp::create_rfp))
        .route("/compare", get(rfp::compare_proposals))
}
