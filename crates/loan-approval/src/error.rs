use crate::approval::{AmountError, ChainError};
use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Chain(ChainError),
    Amount(AmountError),
    Io(std::io::Error),
    Serialization(serde_json::Error),
}

impl AppError {
    /// Process status for the console: 1 for rejected input, 2 for a broken setup.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Amount(_) | AppError::Io(_) | AppError::Serialization(_) => 1,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Chain(_) => 2,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Chain(err) => write!(f, "approval chain error: {}", err),
            AppError::Amount(err) => write!(f, "{}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Serialization(err) => write!(f, "serialization error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Chain(err) => Some(err),
            AppError::Amount(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Serialization(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<ChainError> for AppError {
    fn from(value: ChainError) -> Self {
        Self::Chain(value)
    }
}

impl From<AmountError> for AppError {
    fn from(value: AmountError) -> Self {
        Self::Amount(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value)
    }
}
