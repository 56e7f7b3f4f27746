use crate::error::ConfigError;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_PORT: u16 = 3001;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_REGION: &str = "us-east-1";
const DEFAULT_HEALTH_CHECK_TIMEOUT_MS: u64 = 5000;
const DEFAULT_CORS_ORIGIN: &str = "https://your-domain.com";

/// Deployment mode. Drives log verbosity and the CORS policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

/// # Application Configuration
///
/// Built once at start-up from environment variables (after `.env` has been
/// loaded) and handed to the server by value.
///
/// ## Variables
/// - `PORT` (default `3001`), `HOST` (default `0.0.0.0`)
/// - `ENVIRONMENT`: `production` or anything else for development
/// - `AWS_REGION` (default `us-east-1`)
/// - `DYNAMODB_TABLE`: table probed by the status route; unset or empty
///   means "not configured"
/// - `VERSION_FILE`: explicit path of the version manifest
/// - `HEALTH_CHECK_TIMEOUT_MS` (default `5000`)
/// - `CORS_ALLOWED_ORIGINS`: comma separated, honoured in production only
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub aws_region: String,
    pub table_name: Option<String>,
    pub version_file: Option<PathBuf>,
    pub health_check_timeout: Duration,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue { key: "PORT", value: raw })?,
            None => DEFAULT_PORT,
        };

        let health_check_timeout = match non_empty("HEALTH_CHECK_TIMEOUT_MS") {
            Some(raw) => raw.trim().parse().map(Duration::from_millis).map_err(|_| {
                ConfigError::InvalidValue {
                    key: "HEALTH_CHECK_TIMEOUT_MS",
                    value: raw,
                }
            })?,
            None => Duration::from_millis(DEFAULT_HEALTH_CHECK_TIMEOUT_MS),
        };

        let environment = match non_empty("ENVIRONMENT").as_deref().map(str::trim) {
            Some("production") => Environment::Production,
            _ => Environment::Development,
        };

        let cors_allowed_origins = non_empty("CORS_ALLOWED_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(str::trim)
                    .filter(|origin| !origin.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_else(|| vec![DEFAULT_CORS_ORIGIN.to_string()]);

        Ok(Self {
            host: non_empty("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port,
            environment,
            aws_region: non_empty("AWS_REGION").unwrap_or_else(|| DEFAULT_REGION.to_string()),
            table_name: non_empty("DYNAMODB_TABLE"),
            version_file: non_empty("VERSION_FILE").map(PathBuf::from),
            health_check_timeout,
            cors_allowed_origins,
        })
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Default tracing filter when `RUST_LOG` is absent.
    pub fn log_level(&self) -> &'static str {
        match self.environment {
            Environment::Production => "info",
            Environment::Development => "debug",
        }
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
