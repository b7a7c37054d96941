use async_trait::async_trait;
use chrono::NaiveDateTime;
use reqwest::Client;
use serde::Deserialize;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::{Coordinates, ForecastEntry, ForecastSeries};

use super::WeatherProvider;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Client for the OpenWeather geocoding and 5-day/3-hour forecast APIs.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    base_url: String,
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn geocode(&self, city: &str) -> Result<Coordinates> {
        let url = format!("{}/geo/1.0/direct", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("q", city), ("limit", "1"), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Lookup(format!(
                "geocode request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let locations: Vec<OwLocation> = serde_json::from_str(&body)?;

        let location = locations
            .first()
            .ok_or_else(|| Error::Lookup(format!("no location found for '{city}'")))?;

        Ok(Coordinates { lat: location.lat, lon: location.lon })
    }

    async fn forecast(&self, coordinates: Coordinates) -> Result<ForecastSeries> {
        let url = format!("{}/data/2.5/forecast", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("lat", coordinates.lat.to_string()),
                ("lon", coordinates.lon.to_string()),
                ("units", "imperial".to_string()),
                ("appid", self.api_key.clone()),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(Error::Lookup(format!(
                "forecast request failed with status {}: {}",
                status,
                truncate_body(&body),
            )));
        }

        let parsed: OwForecastResponse = serde_json::from_str(&body)?;

        if parsed.list.is_empty() {
            return Err(Error::Lookup("forecast response contained no data".to_string()));
        }

        let entries = parsed
            .list
            .into_iter()
            .map(forecast_entry)
            .collect::<Result<Vec<_>>>()?;

        Ok(ForecastSeries { city: parsed.city.name, entries })
    }
}

fn forecast_entry(item: OwForecastItem) -> Result<ForecastEntry> {
    let timestamp = NaiveDateTime::parse_from_str(&item.dt_txt, TIMESTAMP_FORMAT)
        .map_err(|e| Error::Lookup(format!("invalid forecast timestamp '{}': {e}", item.dt_txt)))?;

    let condition = item.weather.into_iter().next().unwrap_or_else(|| OwWeather {
        icon: String::new(),
        description: "Unknown".to_string(),
    });

    Ok(ForecastEntry {
        timestamp,
        icon: condition.icon,
        description: condition.description,
        temperature: item.main.temp,
        wind_speed: item.wind.speed,
        humidity: item.main.humidity,
    })
}

#[derive(Debug, Deserialize)]
struct OwLocation {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    icon: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct OwWind {
    speed: f64,
}

#[derive(Debug, Deserialize)]
struct OwForecastItem {
    dt_txt: String,
    main: OwMain,
    weather: Vec<OwWeather>,
    wind: OwWind,
}

#[derive(Debug, Deserialize)]
struct OwCity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct OwForecastResponse {
    city: OwCity,
    list: Vec<OwForecastItem>,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
