//! TOML configuration for the `zero` binary.
//!
//! ```toml
//! [defaults]
//! distance = 100
//! unit = "IMPERIAL"
//! adjustment = "MOA_1_4"
//! rounding = "half-to-even"
//!
//! [tips]
//! model = "gemini-3-flash-preview"
//! timeout_secs = 10
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use zero_core::{AdjustmentType, Rounding, UnitSystem};
use zero_tips::TipConfig;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub defaults: Defaults,
    pub tips: TipConfig,
}

/// Values used when the matching flag is not given.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub distance: f64,
    pub unit: UnitSystem,
    pub adjustment: AdjustmentType,
    pub rounding: Rounding,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            distance: 25.0,
            unit: UnitSystem::Metric,
            adjustment: AdjustmentType::MOA_1_4,
            rounding: Rounding::HalfAwayFromZero,
        }
    }
}

pub fn load_config(path: &Path) -> Result<CliConfig, ConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_all_defaults() {
        let cfg: CliConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.defaults.distance, 25.0);
        assert_eq!(cfg.defaults.unit, UnitSystem::Metric);
        assert_eq!(cfg.tips, TipConfig::default());
    }

    #[test]
    fn reads_sections() {
        let cfg: CliConfig = toml::from_str(
            r#"
            [defaults]
            distance = 100.0
            unit = "IMPERIAL"
            adjustment = "MIL_0_05"
            rounding = "half-to-even"

            [tips]
            timeout_secs = 4
            "#,
        )
        .unwrap();
        assert_eq!(cfg.defaults.unit, UnitSystem::Imperial);
        assert_eq!(cfg.defaults.adjustment, AdjustmentType::MIL_0_05);
        assert_eq!(cfg.defaults.rounding, Rounding::HalfToEven);
        assert_eq!(cfg.tips.timeout_secs, 4);
    }

    #[test]
    fn rounding_accepts_flag_spellings() {
        let cfg: CliConfig = toml::from_str("[defaults]\nrounding = \"half-even\"").unwrap();
        assert_eq!(cfg.defaults.rounding, Rounding::HalfToEven);
        let cfg: CliConfig = toml::from_str("[defaults]\nrounding = \"half-away\"").unwrap();
        assert_eq!(cfg.defaults.rounding, Rounding::HalfAwayFromZero);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_config(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.toml"));
    }
}
