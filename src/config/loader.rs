//! Settings file loading.
//!
//! This module provides the [`SettingsLoader`] type for loading the
//! engine settings from a YAML file. A missing optional field takes its
//! default, so a minimal file configuring only what differs from the
//! defaults is valid.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::Settings;

/// Loads and provides access to the engine settings.
///
/// # File shape
///
/// The file is the YAML form of [`Settings`] (camelCase keys), for
/// example:
///
/// ```yaml
/// baseSalary: "12000"
/// workingDaysPerMonth: "30"
/// standardHoursPerDay: "8"
/// cycleMonthAnchor: end
/// salaryCycleStartDay: 21
/// salaryCycleEndDay: 20
/// ```
///
/// # Example
///
/// ```no_run
/// use ot_engine::config::SettingsLoader;
///
/// let loader = SettingsLoader::load("./config/settings.yaml").unwrap();
/// let settings = loader.settings();
/// ```
#[derive(Debug, Clone)]
pub struct SettingsLoader {
    settings: Settings,
}

impl SettingsLoader {
    /// Loads settings from the specified YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the settings file
    ///
    /// # Returns
    ///
    /// Returns a `SettingsLoader` on success, or an error if the file is
    /// missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::SettingsNotFound {
            path: path_str.clone(),
        })?;

        let settings =
            serde_yaml::from_str(&content).map_err(|e| EngineError::SettingsParseError {
                path: path_str,
                message: e.to_string(),
            })?;

        Ok(Self { settings })
    }

    /// Wraps an already-constructed settings value.
    pub fn from_settings(settings: Settings) -> Self {
        Self { settings }
    }

    /// Returns the loaded settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::from_settings(Settings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::io::Write;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let mut path = std::env::temp_dir();
        path.push(format!("ot-engine-test-{}-{}", std::process::id(), name));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_load_minimal_file_uses_defaults() {
        let path = write_temp("minimal.yaml", "baseSalary: \"15000\"\n");
        let loader = SettingsLoader::load(&path).unwrap();

        assert_eq!(loader.settings().base_salary, Decimal::from(15000));
        assert_eq!(loader.settings().working_days_per_month, Decimal::from(30));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_load_cycle_configuration() {
        let path = write_temp(
            "cycle.yaml",
            concat!(
                "salaryCycleStartDay: 21\n",
                "salaryCycleEndDay: 20\n",
                "cycleMonthAnchor: end\n",
                "salaryPayType: eom\n",
            ),
        );
        let loader = SettingsLoader::load(&path).unwrap();

        let settings = loader.settings();
        assert_eq!(settings.salary_cycle_start_day, 21);
        assert_eq!(settings.salary_cycle_end_day, Some(20));
        assert_eq!(settings.salary_pay_type, crate::config::PayDatePolicy::Eom);

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_missing_file_returns_not_found() {
        let result = SettingsLoader::load("/nonexistent/settings.yaml");
        match result {
            Err(EngineError::SettingsNotFound { path }) => {
                assert!(path.contains("settings.yaml"));
            }
            other => panic!("Expected SettingsNotFound, got {:?}", other.err()),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let path = write_temp("bad.yaml", "baseSalary: [not, a, salary\n");
        let result = SettingsLoader::load(&path);

        assert!(matches!(
            result,
            Err(EngineError::SettingsParseError { .. })
        ));

        fs::remove_file(path).ok();
    }

    #[test]
    fn test_default_loader_wraps_default_settings() {
        let loader = SettingsLoader::default();
        assert_eq!(loader.settings(), &Settings::default());
    }
}
