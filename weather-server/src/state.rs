use std::sync::Arc;

use weather_core::{HistoryStore, WeatherProvider};

/// Shared handler state: the history store and the upstream provider.
///
/// There is no other cross-request state; each request is handled
/// independently.
#[derive(Clone)]
pub struct AppState {
    pub history: Arc<HistoryStore>,
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(history: HistoryStore, provider: Arc<dyn WeatherProvider>) -> Self {
        Self { history: Arc::new(history), provider }
    }
}
