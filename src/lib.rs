//! User Registration API
//!
//! Accepts a candidate account (username, email, password), validates and
//! normalizes the input, enforces email uniqueness, hashes credentials
//! with Argon2, issues an activation token, and dispatches an activation
//! notification. Error messages are localized per request via the
//! `Accept-Language` header.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use api::state::{AppState, RegistrationServiceTrait};
use infrastructure::notification::LoggingNotificationSink;
use infrastructure::user::{
    ActivationTokenGenerator, Argon2Hasher, InMemoryUserRepository, PostgresUserRepository,
    RegistrationService,
};

/// Create the application state with all services initialized
pub async fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    let hasher = Arc::new(Argon2Hasher::with_cost(
        config.hashing.memory_kib,
        config.hashing.iterations,
        config.hashing.parallelism,
    )?);
    let tokens = ActivationTokenGenerator::new();
    let sink = Arc::new(LoggingNotificationSink::new());
    let notification_timeout = Duration::from_secs(config.notification.timeout_secs);

    let registration_service: Arc<dyn RegistrationServiceTrait> = match &config.database.url {
        Some(url) => {
            let pool = PgPoolOptions::new().connect(url).await?;
            sqlx::migrate!("./migrations").run(&pool).await?;
            info!("Using PostgreSQL user repository");

            Arc::new(RegistrationService::new(
                Arc::new(PostgresUserRepository::new(pool)),
                hasher,
                tokens,
                sink,
                notification_timeout,
            ))
        }
        None => {
            info!("No database configured; using in-memory user repository");

            Arc::new(RegistrationService::new(
                Arc::new(InMemoryUserRepository::new()),
                hasher,
                tokens,
                sink,
                notification_timeout,
            ))
        }
    };

    Ok(AppState {
        registration_service,
    })
}
