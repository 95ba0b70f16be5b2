//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&Store` as the first argument. Lists return cloned snapshots in
//! insertion order, so callers never hold a lock across their own work.

pub mod proposal_repo;
pub mod vendor_repo;

pub use proposal_repo::ProposalRepo;
pub use vendor_repo::VendorRepo;
