use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{Result, StatsError};
use crate::format::{CpuMode, MemoryMode};
use crate::system::load::AveragesCount;
use crate::units::{DEFAULT_UNIT_FACTOR, UnitConverter};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub logging: LoggingConfig,
}

/// Raw values as written in the file or on the command line. Signed so that
/// out-of-range input reaches validation instead of failing deserialization.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub interval: i64,
    pub mem_mode: i64,
    pub cpu_mode: i64,
    pub averages_count: i64,
    pub sample_offset_us: u64,
    pub unit_factor: f64,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            interval: 1,
            mem_mode: 1,
            cpu_mode: 0,
            averages_count: 3,
            sample_offset_us: 10_000,
            unit_factor: DEFAULT_UNIT_FACTOR,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "warn".to_string(),
            format: "text".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tmux-host-stats").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}

/// Validated, read-only settings for one sample-and-render cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settings {
    pub cpu_delay: Duration,
    pub memory_mode: MemoryMode,
    pub cpu_mode: CpuMode,
    pub averages_count: AveragesCount,
    pub units: UnitConverter,
}

impl Settings {
    pub fn from_config(general: &GeneralConfig) -> Result<Self> {
        let interval = u64::try_from(general.interval)
            .ok()
            .filter(|&secs| secs >= 1)
            .ok_or_else(|| {
                StatsError::InvalidArgument(
                    "Status interval argument must be one or greater.".to_string(),
                )
            })?;

        if !general.unit_factor.is_finite() || general.unit_factor <= 0.0 {
            return Err(StatsError::InvalidArgument(
                "Unit factor must be a positive number.".to_string(),
            ));
        }

        Ok(Settings {
            cpu_delay: sampling_delay(interval, general.sample_offset_us),
            memory_mode: MemoryMode::from_index(general.mem_mode)?,
            cpu_mode: CpuMode::from_index(general.cpu_mode)?,
            averages_count: AveragesCount::new(general.averages_count)?,
            units: UnitConverter::new(general.unit_factor),
        })
    }
}

/// The refresh interval less a fixed allowance for work outside the sample.
pub fn sampling_delay(interval_secs: u64, offset_us: u64) -> Duration {
    let interval_us = interval_secs.saturating_mul(1_000_000);
    Duration::from_micros(interval_us.saturating_sub(offset_us))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.interval, 1);
        assert_eq!(config.general.mem_mode, 1);
        assert_eq!(config.general.cpu_mode, 0);
        assert_eq!(config.general.averages_count, 3);
        assert_eq!(config.general.sample_offset_us, 10_000);
        assert_eq!(config.logging.level, "warn");
        assert_eq!(config.logging.format, "text");
    }

    #[test]
    fn default_settings() {
        let settings = Settings::from_config(&GeneralConfig::default()).unwrap();
        assert_eq!(settings.cpu_delay, Duration::from_micros(990_000));
        assert_eq!(settings.memory_mode, MemoryMode::FreeMemory);
        assert_eq!(settings.cpu_mode, CpuMode::Total);
        assert_eq!(settings.averages_count.get(), 3);
        assert_eq!(settings.units.factor(), 1024.0);
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
interval = 5
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.interval, 5);
        // Other fields should be defaults
        assert_eq!(config.general.mem_mode, 1);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
interval = 2
mem_mode = 2
cpu_mode = 1
averages_count = 1
sample_offset_us = 0
unit_factor = 1000.0

[logging]
level = "debug"
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        let settings = Settings::from_config(&config.general).unwrap();
        assert_eq!(settings.cpu_delay, Duration::from_secs(2));
        assert_eq!(settings.memory_mode, MemoryMode::UsagePercentage);
        assert_eq!(settings.cpu_mode, CpuMode::PerCore);
        assert_eq!(settings.averages_count.get(), 1);
        assert!((settings.units.factor() - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn zero_interval_is_rejected() {
        let general = GeneralConfig {
            interval: 0,
            ..GeneralConfig::default()
        };
        let err = Settings::from_config(&general).unwrap_err();
        assert!(matches!(err, StatsError::InvalidArgument(_)));
        assert_eq!(
            err.to_string(),
            "Status interval argument must be one or greater."
        );
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for general in [
            GeneralConfig {
                mem_mode: -1,
                ..GeneralConfig::default()
            },
            GeneralConfig {
                averages_count: 4,
                ..GeneralConfig::default()
            },
            GeneralConfig {
                cpu_mode: 7,
                ..GeneralConfig::default()
            },
            GeneralConfig {
                unit_factor: 0.0,
                ..GeneralConfig::default()
            },
        ] {
            assert!(Settings::from_config(&general).is_err());
        }
    }

    #[test]
    fn sampling_delay_saturates() {
        assert_eq!(sampling_delay(1, 10_000), Duration::from_micros(990_000));
        assert_eq!(sampling_delay(3, 0), Duration::from_secs(3));
        assert_eq!(sampling_delay(1, 2_000_000), Duration::ZERO);
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.interval, 1);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("tmux_host_stats_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.interval, 1);
        let _ = std::fs::remove_file(&temp);
    }
}
