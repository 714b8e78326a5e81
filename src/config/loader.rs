//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payroll policy
//! from YAML files.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CustomHoliday;

use super::types::SystemConfig;

/// Holiday calendar file structure.
#[derive(Debug, Clone, Deserialize)]
struct HolidaysFile {
    #[serde(default)]
    holidays: Vec<CustomHoliday>,
}

/// Loads and provides access to payroll policy.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── system.yaml    # Multipliers, weekly holidays, late policy, standard hours
/// └── holidays.yaml  # Optional custom holiday calendar
/// ```
///
/// Holidays listed in `holidays.yaml` are appended after any
/// `custom_holidays` already present in `system.yaml`, so on a duplicate date
/// the entry from `system.yaml` wins.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Normal OT multiplier: {}", loader.config().ot_multiplier);
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: SystemConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `system.yaml` is missing
    /// - either file contains invalid YAML
    /// - a value fails [`SystemConfig::validate`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let mut config = Self::load_yaml::<SystemConfig>(&path.join("system.yaml"))?;

        let holidays_path = path.join("holidays.yaml");
        if holidays_path.exists() {
            let calendar = Self::load_yaml::<HolidaysFile>(&holidays_path)?;
            debug!(
                path = %holidays_path.display(),
                count = calendar.holidays.len(),
                "Loaded holiday calendar"
            );
            config.custom_holidays.extend(calendar.holidays);
        }

        config.validate()?;

        Ok(Self { config })
    }

    /// Wraps an already-resolved configuration after validating it.
    pub fn from_config(config: SystemConfig) -> EngineResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> SystemConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LateDeductionType;
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use std::path::PathBuf;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn temp_config_dir(name: &str, system: &str, holidays: Option<&str>) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "payroll_engine_{}_{}",
            name,
            std::process::id()
        ));
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("system.yaml"), system).unwrap();
        if let Some(holidays) = holidays {
            fs::write(dir.join("holidays.yaml"), holidays).unwrap();
        }
        dir
    }

    #[test]
    fn test_load_default_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let config = result.unwrap().into_config();
        assert_eq!(config.ot_multiplier, Decimal::new(15, 1));
        assert_eq!(config.ot_multiplier_holiday, Decimal::new(3, 0));
        assert_eq!(config.weekly_holidays, vec![0, 6]);
        assert_eq!(config.late_deduction_type, LateDeductionType::ProRated);
        assert_eq!(
            config.standard_check_in,
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_default_holiday_calendar_is_loaded() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();

        assert!(
            loader
                .config()
                .custom_holidays
                .iter()
                .any(|h| h.date == new_year)
        );
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("system.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_missing_holidays_file_is_optional() {
        let dir = temp_config_dir("no_holidays", "ot_multiplier: 2.0\n", None);
        let config = ConfigLoader::load(&dir).unwrap().into_config();

        assert_eq!(config.ot_multiplier, Decimal::new(2, 0));
        assert!(config.custom_holidays.is_empty());
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_holidays_appended_after_system_list() {
        let system = r#"
custom_holidays:
  - date: "2026-05-01"
    name: "Labour Day (system)"
"#;
        let holidays = r#"
holidays:
  - date: "2026-05-01"
    name: "Labour Day (calendar)"
  - date: "2026-12-10"
    name: "Constitution Day"
    ot_multiplier: 4.0
"#;
        let dir = temp_config_dir("append", system, Some(holidays));
        let config = ConfigLoader::load(&dir).unwrap().into_config();

        assert_eq!(config.custom_holidays.len(), 3);
        assert_eq!(config.custom_holidays[0].name, "Labour Day (system)");
        assert_eq!(config.custom_holidays[2].ot_multiplier, Decimal::new(4, 0));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let dir = temp_config_dir("bad_yaml", "ot_multiplier: [not, a, number\n", None);
        let result = ConfigLoader::load(&dir);

        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_out_of_range_value_fails_validation() {
        let dir = temp_config_dir("bad_weekday", "weekly_holidays: [0, 9]\n", None);
        let result = ConfigLoader::load(&dir);

        assert!(matches!(result, Err(EngineError::InvalidConfig { .. })));
        fs::remove_dir_all(dir).ok();
    }

    #[test]
    fn test_from_config_validates() {
        let config = SystemConfig {
            weekly_holidays: vec![8],
            ..Default::default()
        };
        assert!(ConfigLoader::from_config(config).is_err());
        assert!(ConfigLoader::from_config(SystemConfig::default()).is_ok());
    }
}
