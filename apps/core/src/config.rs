//! Runtime configuration.
//!
//! Read from `TEXTLENS_*` environment variables, with an optional `.env`
//! file loaded first. Every value has a default.

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;

pub const ENV_LOG: &str = "TEXTLENS_LOG";
pub const ENV_LOG_FORMAT: &str = "TEXTLENS_LOG_FORMAT";
pub const ENV_SIMPLE_MAX_GRADE: &str = "TEXTLENS_SIMPLE_MAX_GRADE";
pub const ENV_SUPPORT_MAX_GRADE: &str = "TEXTLENS_SUPPORT_MAX_GRADE";
pub const ENV_COMPLEX_MIN_GRADE: &str = "TEXTLENS_COMPLEX_MIN_GRADE";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Pretty,
    /// Bunyan-style JSON lines
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'pretty' or 'json', got '{}'",
                ENV_LOG_FORMAT, other
            ))),
        }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogConfig {
    /// `EnvFilter` directive, e.g. `info` or `textlens_core=debug`
    pub filter: String,
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Grade-level targets used by the diagnostics runner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Thresholds {
    /// Simple text must score strictly below this grade.
    #[validate(range(min = 0.0, max = 30.0))]
    pub simple_max_grade: f64,
    /// Support text must score at or below this grade.
    #[validate(range(min = 0.0, max = 30.0))]
    pub support_max_grade: f64,
    /// Complex text must average strictly above this grade.
    #[validate(range(min = 0.0, max = 30.0))]
    pub complex_min_grade: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            simple_max_grade: 6.0,
            support_max_grade: 10.0,
            complex_min_grade: 10.0,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub log: LogConfig,
    pub thresholds: Thresholds,
}

impl AppConfig {
    /// Load configuration from the environment (and `.env`, if present)
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_current_env()
    }

    /// Load configuration from the process environment only
    pub fn from_current_env() -> Result<Self, AppError> {
        let defaults = AppConfig::default();

        let filter = env::var(ENV_LOG).unwrap_or(defaults.log.filter);
        let format = match env::var(ENV_LOG_FORMAT) {
            Ok(value) => value.parse()?,
            Err(_) => defaults.log.format,
        };

        let thresholds = Thresholds {
            simple_max_grade: grade_var(ENV_SIMPLE_MAX_GRADE, defaults.thresholds.simple_max_grade)?,
            support_max_grade: grade_var(
                ENV_SUPPORT_MAX_GRADE,
                defaults.thresholds.support_max_grade,
            )?,
            complex_min_grade: grade_var(
                ENV_COMPLEX_MIN_GRADE,
                defaults.thresholds.complex_min_grade,
            )?,
        };
        thresholds.validate()?;

        Ok(Self {
            log: LogConfig { filter, format },
            thresholds,
        })
    }
}

fn grade_var(name: &str, default: f64) -> Result<f64, AppError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<f64>()
            .map_err(|e| AppError::Config(format!("{} is not a number ('{}'): {}", name, raw, e))),
        Err(_) => Ok(default),
    }
}
