//! Core library for the weather history backend.
//!
//! This crate defines:
//! - Configuration read from the environment
//! - The file-backed search history store
//! - Abstraction over the upstream weather provider (geocode + forecast)
//! - The forecast shaping algorithm and shared domain models
//!
//! It is used by `weather-server`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod history;
pub mod model;
pub mod provider;
pub mod shaper;

pub use config::Config;
pub use error::{Error, Result};
pub use history::{HistoryBackend, HistoryStore, JsonFileBackend};
pub use model::{City, Coordinates, ForecastEntry, ForecastSample, ForecastSeries};
pub use provider::{WeatherProvider, openweather::OpenWeatherProvider};
pub use shaper::shape_forecast;
