pub mod proposals;
pub mod rfp;
pub mod vendors;
