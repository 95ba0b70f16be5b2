//! Handlers for vendor proposal submission and listing.
//!
//! Submitted text goes through the configured [`ProposalExtractor`] and the
//! result is stored; ranking happens later in `GET /rfp/compare`.
//!
//! [`ProposalExtractor`]: rfp_core::extraction::ProposalExtractor

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use rfp_core::types::DbId;
use rfp_core::vendor::validate_vendor_id;
use rfp_db::models::proposal::CreateProposal;
use rfp_db::repositories::ProposalRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::response::ProposalParsedResponse;
use crate::state::AppState;

/// A vendor reference as sent by clients: a JSON number or a numeric string.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum VendorIdInput {
    Number(DbId),
    Text(String),
}

impl VendorIdInput {
    /// The numeric id, or `None` when the text is not an integer.
    pub fn to_id(&self) -> Option<DbId> {
        match self {
            Self::Number(id) => Some(*id),
            Self::Text(text) => text.trim().parse().ok(),
        }
    }
}

/// Request body for `POST /proposals/parse`.
#[derive(Debug, Deserialize)]
pub struct ParseProposalRequest {
    pub vendor_id: Option<VendorIdInput>,
    pub proposal_text: Option<String>,
}

// ---------------------------------------------------------------------------
// POST /proposals/parse
// ---------------------------------------------------------------------------

/// Extract terms from a vendor's proposal text and store the result.
pub async fn parse_proposal(
    State(state): State<AppState>,
    AppJson(body): AppJson<ParseProposalRequest>,
) -> AppResult<impl IntoResponse> {
    let (Some(vendor_id), Some(proposal_text)) = (body.vendor_id, body.proposal_text) else {
        return Err(AppError::BadRequest(
            "vendor_id and proposal_text are required".into(),
        ));
    };

    let vendor_id = vendor_id.to_id().ok_or_else(|| {
        AppError::BadRequest("vendor_id must be an integer".into())
    })?;
    validate_vendor_id(vendor_id)?;

    let terms = state.extractor.extract(&proposal_text)?;

    let proposal = ProposalRepo::create(
        &state.pool,
        CreateProposal {
            vendor_id,
            proposal_text,
            terms,
        },
    )
    .await;

    tracing::info!(
        proposal_id = proposal.id,
        vendor_id = proposal.vendor_id,
        price = ?proposal.terms.price,
        delivery_days = ?proposal.terms.delivery_days,
        warranty = ?proposal.terms.warranty,
        extractor = state.extractor.name(),
        "Proposal parsed",
    );

    Ok((
        StatusCode::CREATED,
        Json(ProposalParsedResponse {
            message: format!(
                "Proposal parsed successfully ({} extractor)",
                state.extractor.name()
            ),
            proposal,
        }),
    ))
}

// ---------------------------------------------------------------------------
// GET /proposals
// ---------------------------------------------------------------------------

/// List all stored proposals in submission order.
pub async fn list_proposals(State(state): State<AppState>) -> impl IntoResponse {
    Json(ProposalRepo::list(&state.pool).await)
}
