use crate::models::RevenueTable;
use std::sync::Arc;

/// The table is built once at startup and never mutated, so handlers share
/// it without a lock.
#[derive(Clone)]
pub struct AppState {
    pub table: Arc<RevenueTable>,
}

impl AppState {
    pub fn new(table: RevenueTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }
}
