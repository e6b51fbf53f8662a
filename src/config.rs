//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nearmiss/nearmiss.toml`
//! 3. Environment variables: `NEARMISS_*` prefix
//! 4. Command-line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, Map};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::{ApplicationError, ReportFormat};
use crate::domain::RootMethod;

/// Smallest accepted number of fractional digits.
pub const MIN_PRECISION: usize = 1;
/// Largest accepted number of fractional digits.
pub const MAX_PRECISION: usize = 20;

/// Unified configuration for nearmiss.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// How the integer root estimate is computed (default: float)
    pub root_method: RootMethod,
    /// Fractional digits of the relative miss (default: 10)
    pub precision: usize,
    /// Append the relative miss as a percentage (default: true)
    pub show_percentage: bool,
    /// Wait for ENTER after the final report (default: true)
    pub pause_on_exit: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            root_method: RootMethod::Float,
            precision: 10,
            show_percentage: true,
            pause_on_exit: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub root_method: Option<RootMethod>,
    pub precision: Option<usize>,
    pub show_percentage: Option<bool>,
    pub pause_on_exit: Option<bool>,
}

/// Get the XDG config directory for nearmiss.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nearmiss").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nearmiss.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            root_method: overlay.root_method.unwrap_or(self.root_method),
            precision: overlay.precision.unwrap_or(self.precision),
            show_percentage: overlay.show_percentage.unwrap_or(self.show_percentage),
            pause_on_exit: overlay.pause_on_exit.unwrap_or(self.pause_on_exit),
        }
    }

    /// Load settings from defaults, the global config file and `NEARMISS_*` variables.
    pub fn load() -> Result<Self, ApplicationError> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file location.
    ///
    /// A missing file is not an error; an unreadable or malformed one is.
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(config_path, None)
    }

    /// Load settings reading `NEARMISS_*` variables from `env` instead of the process
    /// environment when given.
    pub fn load_with_env(
        config_path: Option<&Path>,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                debug!("loading config: {}", path.display());
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current, env)?;
        current.precision = current.precision.clamp(MIN_PRECISION, MAX_PRECISION);
        Ok(current)
    }

    /// Apply NEARMISS_* environment variables as explicit overrides.
    ///
    /// Unset variables keep the current value; malformed ones are a config error.
    fn apply_env_overrides(
        mut settings: Self,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NEARMISS")
                    .prefix_separator("_")
                    .source(env),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("root_method"))? {
            settings.root_method = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Some(val) = env_value(config.get_int("precision"))? {
            settings.precision = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("precision must not be negative: {val}"),
            })?;
        }
        if let Some(val) = env_value(config.get_bool("show_percentage"))? {
            settings.show_percentage = val;
        }
        if let Some(val) = env_value(config.get_bool("pause_on_exit"))? {
            settings.pause_on_exit = val;
        }

        Ok(settings)
    }

    /// Report format for these settings.
    pub fn report_format(&self, color: bool) -> ReportFormat {
        ReportFormat {
            precision: self.precision,
            show_percentage: self.show_percentage,
            color,
        }
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nearmiss configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nearmiss/nearmiss.toml
#   Env:    NEARMISS_* environment variables (e.g. NEARMISS_ROOT_METHOD=exact)
#   Flags:  command-line options

# Root estimate: "float" (classic floating-point floor) or "exact" (integer n-th root)
# root_method = "float"

# Fractional digits of the relative miss (1-20)
# precision = 10

# Also print the relative miss as a percentage
# show_percentage = true

# Wait for ENTER after the final report
# pause_on_exit = true
"#
        .to_string()
    }
}

/// `NotFound` means the variable is unset; anything else is a malformed value.
fn env_value<T>(result: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None).expect("load defaults");
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn given_partial_overlay_when_merging_then_keeps_unspecified_fields() {
        let overlay = RawSettings {
            root_method: Some(RootMethod::Exact),
            precision: None,
            show_percentage: Some(false),
            pause_on_exit: None,
        };

        let result = Settings::default().merge_with(&overlay);

        assert_eq!(result.root_method, RootMethod::Exact);
        assert_eq!(result.precision, 10);
        assert!(!result.show_percentage);
        assert!(result.pause_on_exit);
    }

    #[test]
    fn given_default_settings_when_to_toml_then_lists_keys() {
        let toml = Settings::default().to_toml().unwrap();
        assert!(toml.contains("root_method = \"float\""));
        assert!(toml.contains("precision = 10"));
    }

    #[test]
    fn given_template_when_parsing_then_all_keys_commented_out() {
        let raw: RawSettings = toml::from_str(&Settings::template()).unwrap();
        assert!(raw.root_method.is_none());
        assert!(raw.precision.is_none());
    }
}
