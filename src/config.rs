//! Launch configuration.
//!
//! Values come from an optional TOML file, then `HOSPITAL_ASSISTANT_*`
//! environment variables, then command-line flags.

use crate::session::{DEFAULT_PATIENT, DEFAULT_REPLY};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub window: WindowConfig,

    #[serde(default)]
    pub assistant: AssistantConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WindowConfig {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default = "default_min_width")]
    pub min_width: f32,

    #[serde(default = "default_min_height")]
    pub min_height: f32,
}

fn default_width() -> f32 {
    1280.0
}

fn default_height() -> f32 {
    800.0
}

fn default_min_width() -> f32 {
    1024.0
}

fn default_min_height() -> f32 {
    640.0
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            min_width: default_min_width(),
            min_height: default_min_height(),
        }
    }
}

/// Simulated assistant behaviour
#[derive(Debug, Clone, Deserialize)]
pub struct AssistantConfig {
    #[serde(default = "default_reply_delay")]
    pub reply_delay_ms: u64,

    #[serde(default = "default_reply_text")]
    pub reply_text: String,
}

fn default_reply_delay() -> u64 {
    1000
}

fn default_reply_text() -> String {
    DEFAULT_REPLY.to_string()
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay(),
            reply_text: default_reply_text(),
        }
    }
}

impl AssistantConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }
}

/// Initial controller state
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_patient")]
    pub initial_patient: String,

    #[serde(default = "default_local_mode")]
    pub local_mode: bool,
}

fn default_patient() -> String {
    DEFAULT_PATIENT.to_string()
}

fn default_local_mode() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_patient: default_patient(),
            local_mode: default_local_mode(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Resolve the configuration used at startup. An explicit path must load;
    /// default locations are best effort and report problems as warnings so
    /// they can be logged once tracing is up.
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Vec<String>), ConfigError> {
        let (mut config, mut warnings) = match explicit {
            Some(path) => (Self::load(path)?, Vec::new()),
            None => Self::load_default(),
        };
        config.apply_env_overrides(&mut warnings);
        config.validate()?;
        Ok((config, warnings))
    }

    fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("hospital-assistant").join("config.toml"));
        }
        paths.push(PathBuf::from("./config.toml"));
        paths
    }

    fn load_default() -> (Self, Vec<String>) {
        Self::load_first(&Self::default_paths())
    }

    fn load_first(paths: &[PathBuf]) -> (Self, Vec<String>) {
        let mut warnings = Vec::new();
        for path in paths {
            if !path.exists() {
                continue;
            }
            match Self::load(path) {
                Ok(config) => return (config, warnings),
                Err(e) => warnings.push(e.to_string()),
            }
        }
        (Self::default(), warnings)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self, warnings: &mut Vec<String>) {
        self.apply_overrides_from(|key| std::env::var(key).ok(), warnings);
    }

    fn apply_overrides_from(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
        warnings: &mut Vec<String>,
    ) {
        if let Some(delay) = lookup("HOSPITAL_ASSISTANT_REPLY_DELAY_MS") {
            match delay.parse() {
                Ok(ms) => self.assistant.reply_delay_ms = ms,
                Err(_) => warnings.push(format!("Ignoring invalid reply delay {delay:?}")),
            }
        }
        if let Some(patient) = lookup("HOSPITAL_ASSISTANT_PATIENT") {
            self.session.initial_patient = patient;
        }
        if let Some(level) = lookup("HOSPITAL_ASSISTANT_LOG_LEVEL") {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let window = &self.window;
        for (name, value) in [
            ("width", window.width),
            ("height", window.height),
            ("min_width", window.min_width),
            ("min_height", window.min_height),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "window.{name} must be positive, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid config: {0}")]
    Invalid(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp config should create");
        file.write_all(contents.as_bytes())
            .expect("temp config should write");
        file
    }

    #[test]
    fn defaults_match_mockup() {
        let config = AppConfig::default();
        assert_eq!(config.assistant.reply_delay(), Duration::from_millis(1000));
        assert_eq!(config.assistant.reply_text, DEFAULT_REPLY);
        assert_eq!(config.session.initial_patient, "Emma Johnson (Pediatric)");
        assert!(config.session.local_mode);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let file = write_config(
            r#"
[assistant]
reply_delay_ms = 250

[session]
local_mode = false
"#,
        );

        let config = AppConfig::load(file.path()).expect("partial config should load");
        assert_eq!(config.assistant.reply_delay_ms, 250);
        assert_eq!(config.assistant.reply_text, DEFAULT_REPLY);
        assert!(!config.session.local_mode);
        assert_eq!(config.window.width, 1280.0);
    }

    #[test]
    fn malformed_file_is_parse_error() {
        let file = write_config("[assistant\nreply_delay_ms = ");
        let error = AppConfig::load(file.path()).expect_err("malformed config should fail");
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let dir = tempfile::tempdir().expect("temp dir should create");
        let path = dir.path().join("absent.toml");
        let error = AppConfig::resolve(Some(&path)).expect_err("missing file should fail");
        assert!(matches!(error, ConfigError::Io { .. }));
    }

    #[test]
    fn broken_default_file_falls_through_with_warning() {
        let dir = tempfile::tempdir().expect("temp dir should create");
        let broken = dir.path().join("broken.toml");
        let good = dir.path().join("good.toml");
        std::fs::write(&broken, "not = [valid").expect("broken config should write");
        std::fs::write(&good, "[assistant]\nreply_delay_ms = 10\n").expect("config should write");

        let (config, warnings) =
            AppConfig::load_first(&[dir.path().join("absent.toml"), broken, good]);
        assert_eq!(config.assistant.reply_delay_ms, 10);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("broken.toml"));
    }

    #[test]
    fn zero_window_size_is_rejected() {
        let file = write_config("[window]\nwidth = 0.0\n");
        let error = AppConfig::load(file.path()).expect_err("zero width should fail");
        assert!(error.to_string().contains("window.width"));
    }

    #[test]
    fn env_overrides_replace_file_values() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("HOSPITAL_ASSISTANT_REPLY_DELAY_MS", "50"),
            ("HOSPITAL_ASSISTANT_PATIENT", "James Brown (General)"),
        ]);
        let mut config = AppConfig::default();
        let mut warnings = Vec::new();
        config.apply_overrides_from(|key| vars.get(key).map(|v| v.to_string()), &mut warnings);
        assert!(warnings.is_empty());

        assert_eq!(config.assistant.reply_delay_ms, 50);
        assert_eq!(config.session.initial_patient, "James Brown (General)");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn invalid_env_delay_is_ignored() {
        let mut config = AppConfig::default();
        let mut warnings = Vec::new();
        config.apply_overrides_from(
            |key| (key == "HOSPITAL_ASSISTANT_REPLY_DELAY_MS").then(|| "soon".to_string()),
            &mut warnings,
        );
        assert_eq!(config.assistant.reply_delay_ms, 1000);
        assert_eq!(warnings.len(), 1);
    }
}
