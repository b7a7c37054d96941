use std::fmt::Debug;

use async_trait::async_trait;

use crate::error::Result;
use crate::model::{Coordinates, ForecastSeries};

pub mod openweather;

/// Upstream weather lookups: city name to coordinates, coordinates to a raw
/// multi-day forecast series.
///
/// The two calls are made sequentially per request; there is no retry or
/// backoff, a single failed call aborts the whole request.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Resolve a city name to coordinates. Only the first matching location
    /// of the upstream response is used.
    async fn geocode(&self, city: &str) -> Result<Coordinates>;

    /// Fetch the raw forecast series for the given coordinates.
    async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastSeries>;
}
