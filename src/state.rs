use std::time::Instant;

use crate::services::aggregator::HealthAggregator;

// App state
pub struct AppState {
    pub aggregator: HealthAggregator,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(aggregator: HealthAggregator) -> Self {
        Self {
            aggregator,
            started_at: Instant::now(),
        }
    }
}
