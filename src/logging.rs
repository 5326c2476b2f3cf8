use std::str::FromStr;

use color_eyre::eyre::{Result, eyre};
use tracing::level_filters::LevelFilter;

use crate::config::LoggingConfig;

/// Install a stderr subscriber so stdout carries only the status line.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_max_level(parse_level(&config.level))
        .with_writer(std::io::stderr);

    let installed = if config.format.eq_ignore_ascii_case("json") {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };
    installed.map_err(|e| eyre!("failed to set tracing subscriber: {e}"))
}

/// Unknown level names fall back to `warn`.
pub fn parse_level(raw: &str) -> LevelFilter {
    LevelFilter::from_str(raw.trim()).unwrap_or(LevelFilter::WARN)
}
