mod app_config;

pub use app_config::{
    AppConfig, DatabaseConfig, HashingConfig, LogFormat, LoggingConfig, NotificationConfig,
    ServerConfig,
};
