use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Plain-text banner served at `/`.
pub const BANNER: &str = "AI RFP System Backend Running";

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    vendors: usize,
    proposals: usize,
}

async fn banner() -> &'static str {
    BANNER
}

async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let stats = rfp_db::stats(&state.pool).await;
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        vendors: stats.vendors,
        proposals: stats.proposals,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banner))
        .route("/health", get(health_check))
}
