/// Shared test helpers
///
/// Builds the full router around a lazily-connected pool. No statement is
/// ever executed against it, so these tests exercise routing, extraction,
/// validation, and authorization without a live database.

use axum::Router;
use eventdesk_api::{
    app::{build_router, AppState},
    config::{ApiConfig, Config, DatabaseConfig, WeatherConfig},
};
use sqlx::postgres::PgPoolOptions;

pub fn test_config() -> Config {
    Config {
        api: ApiConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: "postgresql://localhost/eventdesk_test".to_string(),
            max_connections: 2,
        },
        weather: WeatherConfig {
            base_url: "http://127.0.0.1:1/weather".to_string(),
            api_key: "test-key".to_string(),
        },
    }
}

pub fn test_app() -> Router {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");

    build_router(AppState::new(pool, config))
}
