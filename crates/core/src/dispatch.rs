//! Simulated RFP dispatch to registered vendors.
//!
//! No message leaves the process. Each recipient gets a receipt so the
//! caller can show who would have been contacted.

use serde::Serialize;

use crate::types::DbId;

/// Status recorded on every simulated delivery.
pub const SIMULATED_STATUS: &str = "RFP sent (simulated)";

/// Who an RFP is addressed to.
#[derive(Debug, Clone, Copy)]
pub struct Recipient<'a> {
    pub vendor_id: DbId,
    pub name: &'a str,
    pub email: &'a str,
}

/// Record of one simulated delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReceipt {
    pub vendor_id: DbId,
    pub vendor_name: String,
    pub email: String,
    pub status: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No vendors are registered.
    NoRecipients,
    /// One receipt per recipient, in the order given.
    Sent(Vec<DispatchReceipt>),
}

/// "Send" an RFP to every recipient.
pub fn simulate_dispatch<'a, I>(recipients: I) -> DispatchOutcome
where
    I: IntoIterator<Item = Recipient<'a>>,
{
    let receipts: Vec<DispatchReceipt> = recipients
        .into_iter()
        .map(|r| DispatchReceipt {
            vendor_id: r.vendor_id,
            vendor_name: r.name.to_string(),
            email: r.email.to_string(),
            status: SIMULATED_STATUS,
        })
        .collect();

    if receipts.is_empty() {
        DispatchOutcome::NoRecipients
    } else {
        DispatchOutcome::Sent(receipts)
    }
}
