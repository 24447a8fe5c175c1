//! Tracing setup.
//!
//! Logs go to stderr so command output on stdout stays machine-readable.

use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::{LogConfig, LogFormat, ENV_LOG};
use crate::error::AppError;

const APP_NAME: &str = "textlens";

/// Build the filter from a directive such as `info` or `textlens_core=debug`
fn build_filter(directive: &str) -> Result<EnvFilter, AppError> {
    EnvFilter::try_new(directive).map_err(|e| {
        AppError::Config(format!(
            "{} is not a valid filter ('{}'): {}",
            ENV_LOG, directive, e
        ))
    })
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<(), AppError> {
    let filter = build_filter(&config.filter)?;

    match config.format {
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init()?,
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                APP_NAME.to_string(),
                std::io::stderr,
            ))
            .try_init()?,
    }

    Ok(())
}
