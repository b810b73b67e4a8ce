//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by reference. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables: `ADDRBOOK__<SECTION>__<KEY>`,
//!    e.g. `ADDRBOOK__BIRTHDAYS__WINDOW_DAYS=14`
//! 3. Config file (`--config FILE`, or the platform config dir)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use addrbook_core::domain::DEFAULT_WINDOW_DAYS;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Prefix for environment overrides.
const ENV_PREFIX: &str = "ADDRBOOK";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// What the assistant says.
    pub assistant: AssistantConfig,
    /// Birthday query settings.
    pub birthdays: BirthdayConfig,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AssistantConfig {
    pub greeting: String,
    pub prompt: String,
    pub farewell: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BirthdayConfig {
    /// Look-ahead used by `birthdays` when no argument is given.
    pub window_days: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            greeting: "Welcome to the assistant bot!".into(),
            prompt: "Enter a command: ".into(),
            farewell: "Good bye!".into(),
        }
    }
}

impl Default for BirthdayConfig {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// `config_file` is the path passed via `--config`; `None` falls back to
    /// [`Self::config_path`]. A missing file is not an error.
    pub fn load(config_file: Option<&PathBuf>) -> CliResult<Self> {
        let path = config_file.cloned().unwrap_or_else(Self::config_path);
        debug!(path = %path.display(), "Loading configuration");
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> CliResult<Self> {
        config::Config::builder()
            .add_source(
                config::File::from(path)
                    .format(config::FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|settings| settings.try_deserialize::<Self>())
            .map_err(|e| CliError::ConfigError {
                message: format!("Failed to load {}", path.display()),
                source: Some(Box::new(e)),
            })
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.addrbook.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "addrbook", "addrbook")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".addrbook.toml"))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn default_window_is_a_week() {
        assert_eq!(AppConfig::default().birthdays.window_days, 7);
    }

    #[test]
    fn default_messages() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.assistant.greeting, "Welcome to the assistant bot!");
        assert_eq!(cfg.assistant.prompt, "Enter a command: ");
        assert!(!cfg.output.no_color);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = AppConfig::load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(cfg.birthdays.window_days, 7);
        assert_eq!(cfg.assistant.farewell, "Good bye!");
    }

    #[test]
    fn file_overrides_defaults_partially() {
        let file = toml_file("[birthdays]\nwindow_days = 14\n\n[assistant]\nfarewell = \"Bye\"\n");
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.birthdays.window_days, 14);
        assert_eq!(cfg.assistant.farewell, "Bye");
        assert_eq!(cfg.assistant.prompt, "Enter a command: ");
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let file = toml_file("[birthdays]\nwindow_days = \"soon\"\n");
        let err = AppConfig::load(Some(&file.path().to_path_buf())).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn file_is_toml_whatever_its_extension() {
        let mut file = tempfile::Builder::new()
            .suffix(".conf")
            .tempfile()
            .unwrap();
        file.write_all(b"[birthdays]\nwindow_days = 3\n").unwrap();
        let cfg = AppConfig::load(Some(&file.path().to_path_buf())).unwrap();
        assert_eq!(cfg.birthdays.window_days, 3);
    }

    #[test]
    fn config_path_is_non_empty() {
        let p = AppConfig::config_path();
        assert!(!p.as_os_str().is_empty());
    }
}
