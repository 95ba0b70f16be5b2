pub mod health;
pub mod proposals;
pub mod rfp;
pub mod vendors;

use axum::routing::post;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /rfp/create            POST  structure a procurement request
/// /rfp/compare           GET   rank all proposals
/// /send-rfp              POST  simulated dispatch to every vendor
///
/// /vendors               GET   list, POST register
/// /vendors/{id}          GET   single vendor
///
/// /proposals             GET   list
/// /proposals/parse       POST  extract terms and store
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/rfp", rfp::router())
        .route("/send-rfp", post(handlers::rfp::send_rfp))
        .nest("/vendors", vendors::router())
        .nest("/proposals", proposals::router())
}
