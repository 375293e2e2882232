/// Weather upstream client
///
/// Thin wrapper around the OpenWeatherMap current-weather endpoint. The
/// upstream reports failures in the body (`cod` + `message`), sometimes with
/// `cod` as a number and sometimes as a string, so responses are decoded
/// into JSON first and inspected before mapping to [`WeatherReport`].

use crate::config::WeatherConfig;
use crate::error::ApiError;
use serde::Serialize;
use serde_json::Value;

/// Reshaped weather response returned to API clients
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    /// Resolved city name (as reported by the upstream)
    pub city: String,

    /// Current temperature in degrees Celsius
    pub temperature: f64,

    /// Short condition description (e.g., "light rain")
    pub condition: String,
}

/// Client for the upstream weather API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Creates a client from configuration
    pub fn new(config: &WeatherConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Fetches the current weather for a city
    ///
    /// # Errors
    ///
    /// - `ApiError::Upstream` when the upstream reports a failure; its
    ///   status code and message are forwarded to the caller
    /// - `ApiError::InternalError` on network or decode failure
    pub async fn current(&self, city: &str) -> Result<WeatherReport, ApiError> {
        let response = self
            .http
            .get(&self.base_url)
            .query(&[("q", city), ("appid", &self.api_key), ("units", "metric")])
            .send()
            .await
            .map_err(|e| ApiError::InternalError(format!("Weather request failed: {}", e)))?;

        let body: Value = response
            .json()
            .await
            .map_err(|e| ApiError::InternalError(format!("Weather response decode failed: {}", e)))?;

        map_upstream_response(body)
    }
}

/// Maps the raw upstream body to a report or a forwarded upstream error
fn map_upstream_response(body: Value) -> Result<WeatherReport, ApiError> {
    let cod = match &body["cod"] {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse::<u64>().ok(),
        _ => None,
    };

    match cod {
        Some(200) => {}
        Some(status) => {
            let message = body["message"]
                .as_str()
                .unwrap_or("Upstream weather error")
                .to_string();
            return Err(ApiError::Upstream {
                status: status.min(u16::MAX as u64) as u16,
                message,
            });
        }
        None => {
            return Err(ApiError::InternalError(
                "Weather response missing status code".to_string(),
            ))
        }
    }

    let city = body["name"]
        .as_str()
        .ok_or_else(|| ApiError::InternalError("Weather response missing city name".to_string()))?
        .to_string();

    let temperature = body["main"]["temp"].as_f64().ok_or_else(|| {
        ApiError::InternalError("Weather response missing temperature".to_string())
    })?;

    let condition = body["weather"][0]["description"]
        .as_str()
        .ok_or_else(|| ApiError::InternalError("Weather response missing condition".to_string()))?
        .to_string();

    Ok(WeatherReport {
        city,
        temperature,
        condition,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_maps_successful_response() {
        let body = json!({
            "cod": 200,
            "name": "Montreal",
            "main": { "temp": 21.4, "humidity": 60 },
            "weather": [{ "id": 500, "description": "light rain" }]
        });

        let report = map_upstream_response(body).unwrap();
        assert_eq!(report.city, "Montreal");
        assert_eq!(report.temperature, 21.4);
        assert_eq!(report.condition, "light rain");
    }

    #[test]
    fn test_forwards_upstream_error_with_string_cod() {
        // OpenWeatherMap returns `cod` as a string on errors
        let body = json!({ "cod": "404", "message": "city not found" });

        let err = map_upstream_response(body).unwrap_err();
        match err {
            ApiError::Upstream { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "city not found");
            }
            other => panic!("expected upstream error, got {}", other),
        }
    }

    #[test]
    fn test_missing_fields_are_internal_errors() {
        let body = json!({ "cod": 200, "name": "Montreal" });
        assert!(matches!(
            map_upstream_response(body),
            Err(ApiError::InternalError(_))
        ));
    }
}
