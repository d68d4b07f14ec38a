//! Property service configuration.

use std::env;

use common::{DatabaseConfig, Locale, PagingConfig};

/// Property service configuration.
#[derive(Debug, Clone, Default)]
pub struct PropertyServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Page size limits for listing queries
    pub paging: PagingConfig,
    /// Language of result messages
    pub locale: Locale,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|v| v.parse().ok())
}

impl PropertyServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let db_defaults = DatabaseConfig::default();
        let paging_defaults = PagingConfig::default();

        let locale = match env::var("PROPERTY_SERVICE_LOCALE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to default locale", e);
                Locale::default()
            }),
            Err(_) => Locale::default(),
        };

        Self {
            database: DatabaseConfig {
                url: env::var("PROPERTY_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(db_defaults.url),
                max_connections: env_parse("PROPERTY_SERVICE_MAX_CONNECTIONS")
                    .unwrap_or(db_defaults.max_connections),
                min_connections: env_parse("PROPERTY_SERVICE_MIN_CONNECTIONS")
                    .unwrap_or(db_defaults.min_connections),
            },
            paging: PagingConfig {
                default_page_size: env_parse("PROPERTY_SERVICE_PAGE_SIZE")
                    .unwrap_or(paging_defaults.default_page_size),
                max_page_size: env_parse("PROPERTY_SERVICE_MAX_PAGE_SIZE")
                    .unwrap_or(paging_defaults.max_page_size),
            },
            locale,
        }
    }
}
