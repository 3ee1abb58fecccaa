//! Application configuration loaded from environment variables.

use std::env;

#[cfg(feature = "postgres")]
use inkpost_infra::DatabaseConfig;
#[cfg(feature = "smtp")]
use inkpost_infra::SmtpConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    #[cfg(feature = "postgres")]
    pub database: Option<DatabaseConfig>,
    /// Public origin of this API, used to build certification links.
    pub public_base_url: String,
    /// Where a successful certification redirects the browser.
    pub frontend_url: String,
    #[cfg(feature = "smtp")]
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: parse_var("PORT").unwrap_or(8080),
            #[cfg(feature = "postgres")]
            database: Self::database_from_env(),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            #[cfg(feature = "smtp")]
            smtp: Self::smtp_from_env(),
        }
    }

    /// Postgres is enabled by setting `DATABASE_URL`.
    #[cfg(feature = "postgres")]
    fn database_from_env() -> Option<DatabaseConfig> {
        let url = env::var("DATABASE_URL").ok()?;

        Some(DatabaseConfig {
            url,
            max_connections: parse_var("DB_MAX_CONNECTIONS").unwrap_or(100),
            min_connections: parse_var("DB_MIN_CONNECTIONS").unwrap_or(10),
        })
    }

    /// SMTP is enabled by setting `SMTP_HOST`.
    #[cfg(feature = "smtp")]
    fn smtp_from_env() -> Option<SmtpConfig> {
        let host = env::var("SMTP_HOST").ok()?;

        Some(SmtpConfig {
            host,
            port: parse_var("SMTP_PORT").unwrap_or(1025),
            from: env::var("SMTP_FROM")
                .unwrap_or_else(|_| "Inkpost <noreply@localhost>".to_string()),
            username: env::var("SMTP_USERNAME").ok(),
            password: env::var("SMTP_PASSWORD").ok(),
            use_tls: env::var("SMTP_USE_TLS")
                .map(|v| v == "true" || v == "1")
                .unwrap_or(false),
        })
    }
}

fn parse_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}
