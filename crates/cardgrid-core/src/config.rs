use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::GridError;
use crate::result::GridResult;
use crate::version::{StackingPolicy, Version};

const DEFAULT_COLUMNS: usize = 3;
const DEFAULT_STACKING_BASELINE: &str = "1.0.0";
const DEFAULT_STACKING_MODERN: i32 = 1;
const DEFAULT_STACKING_LEGACY: i32 = 0;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub default_columns: Option<usize>,
    #[serde(default)]
    pub stacking_baseline: Option<String>,
    #[serde(default)]
    pub stacking_modern: Option<i32>,
    #[serde(default)]
    pub stacking_legacy: Option<i32>,
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::home_dir().map(|home| home.join(".config/cardgrid/config.toml"))
        }
        #[cfg(target_os = "linux")]
        {
            dirs::config_dir().map(|config| config.join("cardgrid/config.toml"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|config| config.join("cardgrid\\config.toml"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "linux", target_os = "windows")))]
        {
            None
        }
    }

    /// Loads the user config, falling back to defaults when it is missing or unreadable.
    pub fn load() -> Self {
        if let Some(config_path) = Self::config_path() {
            if config_path.exists() {
                match Self::load_from(&config_path) {
                    Ok(config) => return config,
                    Err(e) => {
                        tracing::warn!("Ignoring config at {}: {}", config_path.display(), e);
                    }
                }
            }
        }
        Self::default()
    }

    pub fn load_from(path: &Path) -> GridResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| GridError::Serialization(e.to_string()))
    }

    pub fn effective_default_columns(&self) -> usize {
        match self.default_columns {
            Some(columns) if columns > 0 => columns,
            _ => DEFAULT_COLUMNS,
        }
    }

    /// Builds the stacking policy, rejecting a baseline that does not parse.
    pub fn stacking_policy(&self) -> GridResult<StackingPolicy> {
        let baseline = self
            .stacking_baseline
            .as_deref()
            .unwrap_or(DEFAULT_STACKING_BASELINE);
        Ok(StackingPolicy {
            baseline: baseline.parse::<Version>()?,
            modern: self.stacking_modern.unwrap_or(DEFAULT_STACKING_MODERN),
            legacy: self.stacking_legacy.unwrap_or(DEFAULT_STACKING_LEGACY),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.effective_default_columns(), 3);

        let policy = config.stacking_policy().unwrap();
        assert_eq!(policy.baseline, "1.0.0".parse::<Version>().unwrap());
        assert_eq!(policy.modern, 1);
        assert_eq!(policy.legacy, 0);
    }

    #[test]
    fn test_zero_columns_falls_back_to_default() {
        let config = AppConfig {
            default_columns: Some(0),
            ..Default::default()
        };
        assert_eq!(config.effective_default_columns(), 3);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "default_columns = 4\nstacking_baseline = \"2.3\"\nstacking_modern = 20"
        )
        .unwrap();

        let config = AppConfig::load_from(file.path()).unwrap();
        assert_eq!(config.effective_default_columns(), 4);

        let policy = config.stacking_policy().unwrap();
        assert_eq!(policy.baseline, "2.3.0".parse::<Version>().unwrap());
        assert_eq!(policy.modern, 20);
        assert_eq!(policy.legacy, 0);
    }

    #[test]
    fn test_load_from_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "default_columns = \"many\"").unwrap();

        let result = AppConfig::load_from(file.path());
        assert!(matches!(result, Err(GridError::Serialization(_))));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(GridError::Io(_))));
    }

    #[test]
    fn test_invalid_baseline_is_reported() {
        let config = AppConfig {
            stacking_baseline: Some("one.two".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            config.stacking_policy(),
            Err(GridError::InvalidVersion(_))
        ));
    }
}
