//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct as held by the store
//! - A `Deserialize` create DTO for inserts

pub mod proposal;
pub mod vendor;
