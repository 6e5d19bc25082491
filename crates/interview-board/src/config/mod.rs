use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::board::ClashPolicy;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub board: BoardConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_file = env::var("BOARD_DATA_FILE").unwrap_or_else(|_| "data/board.json".to_string());
        if data_file.trim().is_empty() {
            return Err(ConfigError::EmptyDataFile);
        }

        let clash_policy = match env::var("BOARD_CLASH_POLICY") {
            Ok(value) => ClashPolicy::parse(&value).ok_or(ConfigError::InvalidClashPolicy { value })?,
            Err(_) => ClashPolicy::default(),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig {
                data_file: PathBuf::from(data_file.trim()),
            },
            board: BoardConfig { clash_policy },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where the board and registry are persisted.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

#[derive(Debug, Clone)]
pub struct BoardConfig {
    pub clash_policy: ClashPolicy,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDataFile,
    InvalidClashPolicy { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataFile => write!(f, "BOARD_DATA_FILE must not be empty"),
            ConfigError::InvalidClashPolicy { value } => write!(
                f,
                "BOARD_CLASH_POLICY must be 'self_exclusion' or 'legacy', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
