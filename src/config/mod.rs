use crate::core::{AppError, Result};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

pub mod server;

pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub log_format: LogFormat,
    /// YAML file with per-company invoice defaults
    pub company_defaults_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(AppError::Configuration(format!("Invalid LOG_FORMAT: {}", s))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                log_format: env::var("LOG_FORMAT")
                    .unwrap_or_else(|_| "pretty".to_string())
                    .parse()?,
                company_defaults_path: env::var("COMPANY_DEFAULTS_PATH")
                    .ok()
                    .filter(|path| !path.trim().is_empty())
                    .map(PathBuf::from),
            },
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        self.app.env.eq_ignore_ascii_case("production")
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.workers == 0 {
            return Err(AppError::Configuration(
                "Server workers must be greater than 0".to_string(),
            ));
        }

        if self.is_production() && self.server.cors_allowed_origin.is_none() {
            return Err(AppError::Configuration(
                "CORS_ALLOWED_ORIGIN must be set in production".to_string(),
            ));
        }

        Ok(())
    }
}
