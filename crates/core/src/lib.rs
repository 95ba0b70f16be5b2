//! Pure domain logic for the RFP workflow.
//!
//! Nothing in this crate performs I/O or holds shared state. The HTTP layer
//! owns storage and calls into these modules per request.

pub mod dispatch;
pub mod error;
pub mod extraction;
pub mod rfp;
pub mod scoring;
pub mod types;
pub mod vendor;
