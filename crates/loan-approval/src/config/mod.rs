use std::env;
use std::fmt;

use crate::approval::{
    standard_levels, ApprovalChain, ApprovalLevel, ChainError, LoanRange, DEFAULT_LOAN_MAX,
    DEFAULT_LOAN_MIN,
};

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
    pub telemetry: TelemetryConfig,
    pub chain: ChainConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        let levels = match env::var("LOAN_APPROVAL_LEVELS") {
            Ok(raw) if !raw.trim().is_empty() => parse_levels(&raw)?,
            _ => standard_levels().into_iter().map(LevelDefinition::from).collect(),
        };

        let min = limit_from_env("LOAN_MIN", DEFAULT_LOAN_MIN)?;
        let max = limit_from_env("LOAN_MAX", DEFAULT_LOAN_MAX)?;
        let loan_range = LoanRange::new(min, max)?;

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            chain: ChainConfig { levels, loan_range },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Ordered level definitions plus the bounds the console enforces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainConfig {
    pub levels: Vec<LevelDefinition>,
    pub loan_range: LoanRange,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            levels: standard_levels().into_iter().map(LevelDefinition::from).collect(),
            loan_range: LoanRange::default(),
        }
    }
}

impl ChainConfig {
    pub fn build_chain(&self) -> Result<ApprovalChain, ChainError> {
        let levels = self
            .levels
            .iter()
            .map(|definition| ApprovalLevel::new(definition.label.clone(), definition.limit))
            .collect();
        ApprovalChain::new(levels)
    }
}

/// A `(label, limit)` pair as written in configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelDefinition {
    pub label: String,
    pub limit: u32,
}

impl From<ApprovalLevel> for LevelDefinition {
    fn from(level: ApprovalLevel) -> Self {
        Self {
            label: level.label,
            limit: level.limit,
        }
    }
}

/// Parses `Label:limit` entries separated by commas, e.g. `Teller:1000,Manager:5000`.
pub fn parse_levels(raw: &str) -> Result<Vec<LevelDefinition>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| -> Result<LevelDefinition, ConfigError> {
            let invalid = || ConfigError::InvalidLevel {
                entry: entry.to_string(),
            };
            let (label, limit) = entry.split_once(':').ok_or_else(invalid)?;
            let limit = limit.trim().parse::<u32>().map_err(|_| invalid())?;
            Ok(LevelDefinition {
                label: label.trim().to_string(),
                limit,
            })
        })
        .collect()
}

fn limit_from_env(name: &'static str, default: u32) -> Result<u32, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidLimit { name }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidLevel { entry: String },
    InvalidLimit { name: &'static str },
    InvalidRange { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidLevel { entry } => write!(
                f,
                "LOAN_APPROVAL_LEVELS entry '{}' must look like Label:limit",
                entry
            ),
            ConfigError::InvalidLimit { name } => write!(f, "{name} must be a valid u32"),
            ConfigError::InvalidRange { min, max } => {
                write!(f, "LOAN_MIN ({min}) must not exceed LOAN_MAX ({max})")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("APP_ENV");
        env::remove_var("APP_LOG_LEVEL");
        env::remove_var("LOAN_APPROVAL_LEVELS");
        env::remove_var("LOAN_MIN");
        env::remove_var("LOAN_MAX");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load().expect("config loads with defaults");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.telemetry.log_level, "warn");
        assert_eq!(config.chain, ChainConfig::default());
        assert_eq!(
            config.chain.build_chain().expect("standard chain builds"),
            ApprovalChain::standard()
        );
    }

    #[test]
    fn load_reads_levels_and_range_from_env() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("APP_ENV", "prod");
        env::set_var("LOAN_APPROVAL_LEVELS", "Teller:1000, Manager:8000");
        env::set_var("LOAN_MIN", "500");
        env::set_var("LOAN_MAX", "8000");

        let config = AppConfig::load().expect("config loads");
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Production);
        assert_eq!(
            config.chain.levels,
            vec![
                LevelDefinition {
                    label: "Teller".to_string(),
                    limit: 1_000,
                },
                LevelDefinition {
                    label: "Manager".to_string(),
                    limit: 8_000,
                },
            ]
        );
        assert_eq!(config.chain.loan_range.min(), 500);
        assert_eq!(config.chain.loan_range.max(), 8_000);
    }

    #[test]
    fn load_rejects_non_numeric_bounds() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("LOAN_MAX", "lots");

        let error = AppConfig::load().expect_err("bad LOAN_MAX rejected");
        reset_env();

        assert!(matches!(error, ConfigError::InvalidLimit { name: "LOAN_MAX" }));
    }

    #[test]
    fn parse_levels_rejects_malformed_entries() {
        let missing_colon = parse_levels("Employee10000").expect_err("missing colon");
        assert!(matches!(missing_colon, ConfigError::InvalidLevel { .. }));

        let bad_limit = parse_levels("Employee:ten").expect_err("bad limit");
        assert_eq!(
            bad_limit.to_string(),
            "LOAN_APPROVAL_LEVELS entry 'Employee:ten' must look like Label:limit"
        );
    }

    #[test]
    fn configured_levels_are_validated_when_the_chain_is_built() {
        let config = ChainConfig {
            levels: parse_levels("Manager:5000,Teller:1000").expect("entries parse"),
            loan_range: LoanRange::default(),
        };

        assert!(matches!(
            config.build_chain(),
            Err(ChainError::NonIncreasingLimit { .. })
        ));
    }
}
