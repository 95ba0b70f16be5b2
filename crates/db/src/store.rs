use tokio::sync::RwLock;

use rfp_core::types::DbId;

use crate::models::proposal::Proposal;
use crate::models::vendor::Vendor;

/// Rows of one collection plus its id counter.
#[derive(Debug)]
pub(crate) struct Table<T> {
    pub(crate) rows: Vec<T>,
    last_id: DbId,
}

impl<T> Table<T> {
    fn new() -> Self {
        Self {
            rows: Vec::new(),
            last_id: 0,
        }
    }

    /// Reserve the next sequential id, starting at 1.
    pub(crate) fn next_id(&mut self) -> DbId {
        self.last_id += 1;
        self.last_id
    }
}

/// Owns every vendor and proposal for the life of the process.
///
/// Each collection sits behind its own `RwLock`; ids are assigned while the
/// write lock is held, so they stay sequential under concurrent requests.
#[derive(Debug)]
pub struct Store {
    pub(crate) vendors: RwLock<Table<Vendor>>,
    pub(crate) proposals: RwLock<Table<Proposal>>,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            vendors: RwLock::new(Table::new()),
            proposals: RwLock::new(Table::new()),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
