//! Server configuration module

use clap::Parser;

use crate::config::{
    db::DatabaseConfig,
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
};

pub(crate) mod db;
pub(crate) mod observability;
pub(crate) mod server;

/// Pricetag JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "pricetag-json", about = "Pricetag JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network and routing settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Metrics and slow request settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_apply_when_only_database_url_is_given() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "pricetag-json",
            "--database-url",
            "postgres://localhost/pricetag",
        ])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert_eq!(config.server.price_route, "api/get-price");
        assert_eq!(config.observability.slow_request_threshold_ms, 1_000);
        assert!(config.observability.metrics_enabled);
        assert_eq!(config.database.database_max_connections, 10);

        Ok(())
    }

    #[test]
    fn price_route_can_be_overridden() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "pricetag-json",
            "--database-url",
            "postgres://localhost/pricetag",
            "--price-route",
            "v2/price",
        ])?;

        assert_eq!(config.server.price_route, "v2/price");

        Ok(())
    }

    #[test]
    fn empty_connection_pool_is_rejected() {
        let result = ServerConfig::try_parse_from([
            "pricetag-json",
            "--database-url",
            "postgres://localhost/pricetag",
            "--database-max-connections",
            "0",
        ]);

        assert!(result.is_err(), "a pool without connections cannot serve lookups");
    }
}
