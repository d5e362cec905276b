//! Handlers for the weather lookup endpoints.

use axum::Json;
use axum::extract::{Path, State};
use common::{SearchQuery, WeatherReport};
use log::info;

use crate::app::AppState;
use crate::error::ApiError;

/// `POST /search`. Current conditions and forecast for the city in
/// the JSON body.
pub async fn search(
    State(state): State<AppState>,
    Json(query): Json<SearchQuery>,
) -> Result<Json<WeatherReport>, ApiError> {
    lookup(&state, &query.city).await
}

/// `GET /api/weather/{city}`. Same lookup with the city in the path.
pub async fn weather_for_city(
    State(state): State<AppState>,
    Path(city): Path<String>,
) -> Result<Json<WeatherReport>, ApiError> {
    lookup(&state, &city).await
}

async fn lookup(state: &AppState, raw_city: &str) -> Result<Json<WeatherReport>, ApiError> {
    let Some(query) = SearchQuery::new(raw_city) else {
        return Err(ApiError::EmptyCity);
    };

    info!("looking up weather for '{}'", query.city);
    let report = state.weather.report_for(&query.city).await?;
    Ok(Json(report))
}
