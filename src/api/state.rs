//! Shared application state for the HTTP API.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::config::ChartConfig;
use crate::store::FinanceStore;

/// Shared application state.
///
/// The record store sits behind an async `RwLock`: read handlers take a
/// consistent snapshot, and the write lock serializes mutations so two
/// near-simultaneous entry submissions cannot lose an update. The chart
/// configuration is immutable after startup.
#[derive(Clone)]
pub struct AppState {
    store: Arc<RwLock<FinanceStore>>,
    chart: Arc<ChartConfig>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: FinanceStore, chart: ChartConfig) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            chart: Arc::new(chart),
        }
    }

    /// Returns the shared record store.
    pub fn store(&self) -> &RwLock<FinanceStore> {
        &self.store
    }

    /// Returns the chart configuration.
    pub fn chart(&self) -> &ChartConfig {
        &self.chart
    }
}
