use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use flores_solis::UtcOffset;

use crate::cli::ClockArgs;

const DEFAULT_CONFIG_PATH: &str = "flores.toml";

/// Top-level configuration file.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct FloresConfig {
    /// Clock and UTC offset settings.
    #[serde(default)]
    pub clock: ClockToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClockToml {
    #[serde(default)]
    pub base_hours: f64,
    #[serde(default)]
    pub extra_seconds: i64,
    #[serde(default)]
    pub dst: bool,
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl Default for ClockToml {
    fn default() -> Self {
        Self {
            base_hours: 0.0,
            extra_seconds: 0,
            dst: false,
            tick_millis: default_tick_millis(),
        }
    }
}

fn default_tick_millis() -> u64 {
    1_000
}

impl FloresConfig {
    /// Loads `path`, or `./flores.toml` if it exists, or the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => {
                let fallback = PathBuf::from(DEFAULT_CONFIG_PATH);
                if !fallback.exists() {
                    debug!("no config file, using defaults");
                    return Ok(Self::default());
                }
                fallback
            }
        };

        let text = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

impl ClockToml {
    /// Builds the UTC offset, letting command-line flags win over the file.
    pub fn utc_offset(&self, overrides: &ClockArgs) -> Result<UtcOffset> {
        let hours = overrides.utc_offset.unwrap_or(self.base_hours);
        let offset = UtcOffset::from_hours(hours)
            .context("utc offset must be a quarter-hour value between -12 and 14")?;
        Ok(offset
            .with_extra_seconds(overrides.extra_seconds.unwrap_or(self.extra_seconds))
            .with_dst(overrides.dst || self.dst))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config: FloresConfig = toml::from_str(
            r"
            [clock]
            base_hours = 5.5
            extra_seconds = 12
            dst = true
            tick_millis = 250
            ",
        )
        .unwrap();
        assert!((config.clock.base_hours - 5.5).abs() < f64::EPSILON);
        assert_eq!(config.clock.tick_millis, 250);

        let offset = config.clock.utc_offset(&ClockArgs::default()).unwrap();
        assert_eq!(offset.total_seconds(), 19_800 + 12 + 3_600);
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FloresConfig = toml::from_str("").unwrap();
        assert_eq!(config.clock.tick_millis, 1_000);
        let offset = config.clock.utc_offset(&ClockArgs::default()).unwrap();
        assert_eq!(offset, UtcOffset::UTC);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(toml::from_str::<FloresConfig>("[clock]\ntimezone = \"UTC\"").is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let clock = ClockToml {
            base_hours: 2.0,
            ..ClockToml::default()
        };
        let args = ClockArgs {
            utc_offset: Some(-3.5),
            extra_seconds: Some(-5),
            dst: false,
        };
        let offset = clock.utc_offset(&args).unwrap();
        assert_eq!(offset.total_seconds(), -12_600 - 5);
    }

    #[test]
    fn test_invalid_offset_reported() {
        let args = ClockArgs {
            utc_offset: Some(3.3),
            ..ClockArgs::default()
        };
        assert!(ClockToml::default().utc_offset(&args).is_err());
    }
}
