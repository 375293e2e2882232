/// Application state and router builder
///
/// This module defines the shared application state and provides a function
/// to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use eventdesk_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = eventdesk_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{config::Config, weather::WeatherClient};
use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. Uses Arc
/// internally for cheap cloning; the pool is itself reference-counted.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: PgPool,

    /// Application configuration
    pub config: Arc<Config>,

    /// Upstream weather client
    pub weather: WeatherClient,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: PgPool, config: Config) -> Self {
        let weather = WeatherClient::new(&config.weather);
        Self {
            db,
            config: Arc::new(config),
            weather,
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                       # Health check (public)
/// └── /api/
///     ├── /events/                  # Event CRUD
///     │   ├── GET    /              # List events
///     │   ├── POST   /              # Create (organizer/admin)
///     │   ├── GET    /:id           # Fetch one
///     │   ├── PUT    /:id           # Update (admin or owning organizer)
///     │   └── DELETE /:id           # Delete (admin or owning organizer)
///     ├── /users/
///     │   ├── POST /                # Register
///     │   └── POST /login           # Credential check
///     ├── /tickets/
///     │   ├── POST /claim           # Claim a ticket
///     │   └── GET  /:user_id        # List a user's tickets
///     └── /weather/
///         └── GET /weather?city=    # Upstream weather proxy
/// ```
///
/// Unmatched paths fall through to a JSON 404 (`{"message": "Route not
/// found"}`). CORS is permissive, matching the original deployment.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    // Health check (public, no auth)
    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let event_routes = Router::new()
        .route(
            "/",
            get(routes::events::list_events).post(routes::events::create_event),
        )
        .route(
            "/:id",
            get(routes::events::get_event)
                .put(routes::events::update_event)
                .delete(routes::events::delete_event),
        );

    let user_routes = Router::new()
        .route("/", post(routes::users::register))
        .route("/login", post(routes::users::login));

    let ticket_routes = Router::new()
        .route("/claim", post(routes::tickets::claim_ticket))
        .route("/:user_id", get(routes::tickets::list_user_tickets));

    // The original API exposed the proxy at /api/weather/weather; the
    // doubled segment is part of the external contract.
    let weather_routes = Router::new().route("/weather", get(routes::weather::get_weather));

    let api_routes = Router::new()
        .nest("/events", event_routes)
        .nest("/users", user_routes)
        .nest("/tickets", ticket_routes)
        .nest("/weather", weather_routes);

    Router::new()
        .merge(health_routes)
        .nest("/api", api_routes)
        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Catch-all for unrecognized routes
async fn route_not_found() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "message": "Route not found" })),
    )
}
