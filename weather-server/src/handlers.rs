use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::error;
use weather_core::{City, ForecastSample, shape_forecast};

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherRequest {
    pub city_name: Option<String>,
}

/// `POST /`: record the city in the search history, then geocode it and
/// return the shaped forecast.
pub async fn submit_city(
    State(state): State<AppState>,
    Json(request): Json<WeatherRequest>,
) -> ApiResult<Json<Vec<ForecastSample>>> {
    let Some(city_name) = request.city_name.filter(|name| !name.is_empty()) else {
        return Err(ApiError::Validation("City name is required"));
    };

    // The history write is not rolled back if the lookup below fails.
    state.history.add(&city_name).map_err(|e| {
        error!(city = %city_name, error = %e, "failed to record search history");
        ApiError::Internal("Failed to fetch weather data")
    })?;

    let coordinates = state.provider.geocode(&city_name).await.map_err(|e| {
        error!(city = %city_name, error = %e, "geocode lookup failed");
        ApiError::Internal("Failed to fetch weather data")
    })?;

    let series = state.provider.forecast(coordinates).await.map_err(|e| {
        error!(city = %city_name, error = %e, "forecast lookup failed");
        ApiError::Internal("Failed to fetch weather data")
    })?;

    Ok(Json(shape_forecast(&series)))
}

/// `GET /history`: all recorded cities in storage order.
pub async fn search_history(State(state): State<AppState>) -> ApiResult<Json<Vec<City>>> {
    let cities = state.history.list().map_err(|e| {
        error!(error = %e, "failed to read search history");
        ApiError::Internal("Failed to fetch search history")
    })?;

    Ok(Json(cities))
}

/// `DELETE /history/{id}`: drop one history entry.
pub async fn delete_history_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<StatusCode> {
    if id.is_empty() {
        return Err(ApiError::Validation("City ID is required"));
    }

    state.history.remove(&id).map_err(|e| {
        error!(id = %id, error = %e, "failed to delete history entry");
        ApiError::Internal("Failed to delete city from search history")
    })?;

    Ok(StatusCode::NO_CONTENT)
}
