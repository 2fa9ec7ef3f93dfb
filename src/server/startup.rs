use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config,
    error::{config::ConfigError, Error},
};

/// Initialize the tracing subscriber, `RUST_LOG` overrides the configured log level
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build the CORS layer allowing browser requests from the configured origins
///
/// Credentials are allowed, so the `*` wildcard is rejected.
pub fn build_cors_layer(config: &Config) -> Result<CorsLayer, Error> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidEnvValue {
                    var: "CORS_ORIGINS".to_string(),
                    reason: "wildcard origin cannot be combined with credentials".to_string(),
                });
            }

            HeaderValue::from_str(origin).map_err(|err| ConfigError::InvalidEnvValue {
                var: "CORS_ORIGINS".to_string(),
                reason: format!("{origin:?} is not a valid origin: {err}"),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .allow_credentials(true))
}
