//! Proposal term extraction from free text.
//!
//! Turns an unstructured vendor proposal into [`ProposalTerms`]: price,
//! delivery time and warranty, each independently optional. Extraction never
//! fails on odd text; a field that cannot be found is simply absent. Only an
//! empty input is rejected.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Patterns
// ---------------------------------------------------------------------------

/// Price: 4 to 6 ASCII digits, optionally preceded by `$`. No word
/// boundaries, so a longer run yields its first six digits.
pub const PRICE_PATTERN: &str = r"\$?([0-9]{4,6})";

/// Delivery time: a digit run followed (whitespace allowed) by `days`.
pub const DELIVERY_PATTERN: &str = r"(?i)([0-9]+)\s*days";

/// Warranty: a digit run followed (whitespace allowed) by `year` or `years`.
pub const WARRANTY_PATTERN: &str = r"(?i)([0-9]+)\s*year";

static PRICE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PRICE_PATTERN).expect("valid regex"));
static DELIVERY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DELIVERY_PATTERN).expect("valid regex"));
static WARRANTY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(WARRANTY_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Structured terms pulled out of a proposal.
///
/// Absent fields serialize as `null`; they are never replaced by zero or an
/// empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProposalTerms {
    pub price: Option<u64>,
    pub delivery_days: Option<u32>,
    /// Formatted as `"<N> years"`.
    pub warranty: Option<String>,
}

impl AsRef<ProposalTerms> for ProposalTerms {
    fn as_ref(&self) -> &ProposalTerms {
        self
    }
}

/// A backend capable of turning proposal text into [`ProposalTerms`].
///
/// [`PatternExtractor`] is the default. A text-understanding backend can be
/// swapped in without touching ranking.
pub trait ProposalExtractor: Send + Sync {
    /// Short label identifying the backend in responses and logs.
    fn name(&self) -> &'static str;

    /// Extract terms from `text`. Fails only when `text` is empty.
    fn extract(&self, text: &str) -> Result<ProposalTerms, CoreError>;
}

/// Regex-based extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternExtractor;

impl ProposalExtractor for PatternExtractor {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn extract(&self, text: &str) -> Result<ProposalTerms, CoreError> {
        validate_proposal_text(text)?;
        Ok(ProposalTerms {
            price: extract_price(text),
            delivery_days: extract_delivery_days(text),
            warranty: extract_warranty(text),
        })
    }
}

/// Extract terms with the default [`PatternExtractor`].
pub fn extract_terms(text: &str) -> Result<ProposalTerms, CoreError> {
    PatternExtractor.extract(text)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Reject empty or whitespace-only proposal text.
pub fn validate_proposal_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Proposal text must not be empty".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field extractors
// ---------------------------------------------------------------------------

/// First 4-6 digit run, as an integer amount.
pub fn extract_price(text: &str) -> Option<u64> {
    first_capture(&PRICE_RE, text)?.parse().ok()
}

/// First `<N> days` phrase. A count that overflows `u32` is absent.
pub fn extract_delivery_days(text: &str) -> Option<u32> {
    first_capture(&DELIVERY_RE, text)?.parse().ok()
}

/// First `<N> year(s)` phrase, formatted as `"<N> years"`.
pub fn extract_warranty(text: &str) -> Option<String> {
    first_capture(&WARRANTY_RE, text).map(|years| format!("{years} years"))
}

fn first_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
