/// Database layer
///
/// - `pool`: PostgreSQL connection pool creation and health checks
/// - `migrations`: sqlx migration runner (embeds `migrations/`)

pub mod migrations;
pub mod pool;
