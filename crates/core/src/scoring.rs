//! Proposal scoring and ranking.
//!
//! Each proposal earns points from the terms it actually states:
//!
//! ```text
//! price_term    = 100000 / price          (price > 0)
//! delivery_term = 100 / delivery_days     (delivery_days > 0)
//! warranty_term = years * 10              (years re-parsed from "<N> years")
//! score         = round_to_cents(sum of present terms)
//! ```
//!
//! Absent or zero fields contribute nothing. Ranking is a stable descending
//! sort, so equal scores keep insertion order.

use serde::Serialize;

use crate::extraction::ProposalTerms;

// ---------------------------------------------------------------------------
// Weights
// ---------------------------------------------------------------------------

/// Numerator of the price term. Lower prices earn more.
pub const PRICE_WEIGHT: f64 = 100_000.0;
/// Numerator of the delivery term. Faster delivery earns more.
pub const DELIVERY_WEIGHT: f64 = 100.0;
/// Points per warranty year.
pub const WARRANTY_POINTS_PER_YEAR: f64 = 10.0;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A proposal extended with its derived score. Serializes flat, with
/// `score` alongside the proposal's own fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredProposal<P> {
    #[serde(flatten)]
    pub proposal: P,
    pub score: f64,
}

/// A non-empty ranking: every proposal best-first plus the winner.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking<P> {
    pub winner: ScoredProposal<P>,
    pub ordered: Vec<ScoredProposal<P>>,
}

/// Result of [`rank`]. `Empty` is a valid outcome, distinct from a ranking.
#[derive(Debug, Clone, PartialEq)]
pub enum RankOutcome<P> {
    Empty,
    Ranked(Ranking<P>),
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Leading integer of a warranty string such as `"2 years"`.
///
/// Leading whitespace is skipped; no sign is accepted. Returns `None` when
/// the string does not start with ASCII digits. Values beyond `u64`
/// saturate, so any stored warranty with leading digits is counted.
pub fn warranty_years(warranty: &str) -> Option<u64> {
    let trimmed = warranty.trim_start();
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return None;
    }
    Some(digits.parse().unwrap_or(u64::MAX))
}

/// Round to two decimal places, halves away from zero.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Score a single set of terms.
pub fn score_terms(terms: &ProposalTerms) -> f64 {
    let mut score = 0.0;

    if let Some(price) = terms.price.filter(|&p| p > 0) {
        score += PRICE_WEIGHT / price as f64;
    }
    if let Some(days) = terms.delivery_days.filter(|&d| d > 0) {
        score += DELIVERY_WEIGHT / f64::from(days);
    }
    if let Some(years) = terms.warranty.as_deref().and_then(warranty_years) {
        score += years as f64 * WARRANTY_POINTS_PER_YEAR;
    }

    round_to_cents(score)
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Rank proposals best-first.
///
/// The input is only read; each proposal is cloned into its
/// [`ScoredProposal`]. Ties keep their input order.
pub fn rank<P>(proposals: &[P]) -> RankOutcome<P>
where
    P: AsRef<ProposalTerms> + Clone,
{
    let mut ordered: Vec<ScoredProposal<P>> = proposals
        .iter()
        .map(|p| ScoredProposal {
            score: score_terms(p.as_ref()),
            proposal: p.clone(),
        })
        .collect();

    // `sort_by` is stable.
    ordered.sort_by(|a, b| b.score.total_cmp(&a.score));

    match ordered.first() {
        None => RankOutcome::Empty,
        Some(head) => RankOutcome::Ranked(Ranking {
            winner: head.clone(),
            ordered,
        }),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
