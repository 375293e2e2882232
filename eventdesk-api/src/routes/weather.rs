/// Weather proxy endpoint
///
/// Forwards a city query to the upstream weather API and reshapes the
/// response to `{city, temperature, condition}`. Upstream failures are
/// forwarded with their own status code and message.
///
/// # Endpoint
///
/// - `GET /api/weather/weather?city=CityName`

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
    weather::WeatherReport,
};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

/// Weather query parameters
#[derive(Debug, Deserialize)]
pub struct WeatherQuery {
    /// City name to look up
    pub city: Option<String>,
}

/// Proxy the current weather for a city
///
/// # Errors
///
/// - `400 Bad Request`: Missing or empty city parameter
/// - upstream status: Forwarded upstream failure (e.g., 404 unknown city)
/// - `500 Internal Server Error`: Network or decode failure
pub async fn get_weather(
    State(state): State<AppState>,
    Query(query): Query<WeatherQuery>,
) -> ApiResult<Json<WeatherReport>> {
    let city = match query.city.as_deref() {
        Some(city) if !city.is_empty() => city,
        _ => return Err(ApiError::BadRequest("City is required".to_string())),
    };

    let report = state.weather.current(city).await?;
    Ok(Json(report))
}
