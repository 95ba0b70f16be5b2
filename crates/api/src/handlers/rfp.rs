//! Handlers for RFP structuring, simulated dispatch and proposal comparison.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use rfp_core::dispatch::{simulate_dispatch, DispatchOutcome, Recipient};
use rfp_core::scoring::{rank, RankOutcome};
use rfp_db::repositories::{ProposalRepo, VendorRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::{ComparisonResponse, DispatchResponse, RfpResponse};
use crate::state::AppState;

/// Request body for `POST /rfp/create`.
#[derive(Debug, Deserialize)]
pub struct CreateRfpRequest {
    pub text: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /rfp/create
// ---------------------------------------------------------------------------

/// Structure a free-text procurement request with the configured generator.
pub async fn create_rfp(
    State(state): State<AppState>,
    AppJson(body): AppJson<CreateRfpRequest>,
) -> AppResult<impl IntoResponse> {
    // Blank text is rejected by the generator itself.
    let text = body
        .text
        .ok_or_else(|| AppError::BadRequest("Missing input text".into()))?;

    let structured_rfp = state.rfp_generator.generate(&text)?;

    tracing::info!(
        items = structured_rfp.items.len(),
        budget = ?structured_rfp.budget,
        generator = state.rfp_generator.name(),
        "RFP structured",
    );

    Ok(Json(RfpResponse {
        source_text: text,
        structured_rfp,
        note: format!("Structured by the {} RFP generator", state.rfp_generator.name()),
    }))
}

// ---------------------------------------------------------------------------
// POST /send-rfp
// ---------------------------------------------------------------------------

/// Simulate sending the RFP to every registered vendor.
pub async fn send_rfp(State(state): State<AppState>) -> impl IntoResponse {
    let vendors = VendorRepo::list(&state.pool).await;
    let recipients = vendors.iter().map(|v| Recipient {
        vendor_id: v.id,
        name: &v.name,
        email: &v.email,
    });

    let response = match simulate_dispatch(recipients) {
        DispatchOutcome::NoRecipients => DispatchResponse {
            message: "No vendors available to receive the RFP",
            sent_to: None,
        },
        DispatchOutcome::Sent(receipts) => {
            tracing::info!(recipients = receipts.len(), "RFP dispatched (simulated)");
            DispatchResponse {
                message: "RFP successfully sent to all vendors (simulation)",
                sent_to: Some(receipts),
            }
        }
    };

    Json(response)
}

// ---------------------------------------------------------------------------
// GET /rfp/compare
// ---------------------------------------------------------------------------

/// Score every stored proposal and recommend the best one.
pub async fn compare_proposals(State(state): State<AppState>) -> impl IntoResponse {
    let proposals = ProposalRepo::list(&state.pool).await;

    let response = match rank(&proposals) {
        RankOutcome::Empty => ComparisonResponse {
            message: "No vendor proposals available for comparison",
            recommended_vendor: None,
            comparison_table: None,
        },
        RankOutcome::Ranked(ranking) => {
            tracing::info!(
                proposals = ranking.ordered.len(),
                winner_proposal_id = ranking.winner.proposal.id,
                winner_vendor_id = ranking.winner.proposal.vendor_id,
                winner_score = ranking.winner.score,
                "Vendor comparison completed",
            );
            ComparisonResponse {
                message: "Vendor comparison completed",
                recommended_vendor: Some(ranking.winner),
                comparison_table: Some(ranking.ordered),
            }
        }
    };

    Json(response)
}
