//! Structured RFP generation from a free-text procurement request.
//!
//! [`RfpGenerator`] is the pluggable capability. [`PatternRfpGenerator`]
//! is a heuristic default: it reuses the proposal extraction patterns for
//! budget, delivery and warranty, and picks out quantity/item pairs, a
//! hardware spec phrase and `Net N` payment terms.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::extraction::{extract_delivery_days, extract_price, extract_warranty};

/// `<quantity> <noun>` pairs, e.g. `10 laptops`.
const ITEM_PATTERN: &str = r"(?i)\b([0-9]{1,5})\s+([a-z][a-z-]*)";

/// Hardware spec phrase, e.g. `16GB RAM` or `1 TB SSD`.
const SPECS_PATTERN: &str = r"(?i)\b([0-9]+)\s*(GB|TB)(?:\s+(RAM|SSD|storage))?";

/// Payment terms such as `net 30`.
const PAYMENT_TERMS_PATTERN: &str = r"(?i)\bnet\s*([0-9]{1,3})\b";

/// Nouns that follow a number but are durations or units, not items.
const NON_ITEM_NOUNS: &[&str] = &[
    "day", "days", "week", "weeks", "month", "months", "year", "years", "gb", "tb",
];

static ITEM_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ITEM_PATTERN).expect("valid regex"));
static SPECS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SPECS_PATTERN).expect("valid regex"));
static PAYMENT_TERMS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PAYMENT_TERMS_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One line item requested in an RFP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RfpItem {
    #[serde(rename = "type")]
    pub item_type: String,
    pub quantity: u32,
    pub specs: Option<String>,
}

/// A structured procurement request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredRfp {
    pub items: Vec<RfpItem>,
    pub budget: Option<u64>,
    pub delivery_days: Option<u32>,
    pub warranty: Option<String>,
    pub payment_terms: Option<String>,
}

/// A backend that structures free-text procurement requests.
pub trait RfpGenerator: Send + Sync {
    /// Short label identifying the backend in responses and logs.
    fn name(&self) -> &'static str;

    /// Structure `text` into an RFP. Fails only when `text` is empty.
    fn generate(&self, text: &str) -> Result<StructuredRfp, CoreError>;
}

/// Heuristic, regex-based generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternRfpGenerator;

impl RfpGenerator for PatternRfpGenerator {
    fn name(&self) -> &'static str {
        "pattern"
    }

    fn generate(&self, text: &str) -> Result<StructuredRfp, CoreError> {
        validate_request_text(text)?;

        let specs = extract_specs(text);
        let items = extract_items(text)
            .into_iter()
            .map(|(item_type, quantity)| RfpItem {
                item_type,
                quantity,
                specs: specs.clone(),
            })
            .collect();

        Ok(StructuredRfp {
            items,
            budget: extract_price(text),
            delivery_days: extract_delivery_days(text),
            warranty: extract_warranty(text),
            payment_terms: extract_payment_terms(text),
        })
    }
}

/// Reject empty or whitespace-only request text.
pub fn validate_request_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Request text must not be empty".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Field extractors
// ---------------------------------------------------------------------------

/// Quantity/item pairs in document order, item names capitalized.
fn extract_items(text: &str) -> Vec<(String, u32)> {
    ITEM_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let noun = caps.get(2)?.as_str();
            if NON_ITEM_NOUNS.contains(&noun.to_ascii_lowercase().as_str()) {
                return None;
            }
            let quantity: u32 = caps.get(1)?.as_str().parse().ok()?;
            (quantity > 0).then(|| (capitalize(noun), quantity))
        })
        .collect()
}

fn extract_specs(text: &str) -> Option<String> {
    let caps = SPECS_RE.captures(text)?;
    let size = format!("{}{}", &caps[1], caps[2].to_ascii_uppercase());
    Some(match caps.get(3) {
        Some(kind) => format!("{size} {}", kind.as_str().to_ascii_uppercase()),
        None => size,
    })
}

fn extract_payment_terms(text: &str) -> Option<String> {
    let caps = PAYMENT_TERMS_RE.captures(text)?;
    Some(format!("Net {}", &caps[1]))
}

fn capitalize(word: &str) -> String {
    let lower = word.to_ascii_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
