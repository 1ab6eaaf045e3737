//! Configuration
//!
//! Configuration is loaded in order of precedence:
//! 1. Environment variables (highest priority)
//! 2. Config file (~/.config/promptpad/config.toml)
//! 3. Built-in defaults (lowest priority)

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::engine::DEFAULT_DELAY_MS;

/// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default filename for saved results
pub const DEFAULT_OUTPUT_FILE: &str = "prompt-results.txt";

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Theme name: "dark", "light", "monokai", "nord"
    pub theme: String,

    /// Use theme's background color (true) or terminal's default (false)
    pub use_theme_background: bool,

    /// Simulated processing delay in milliseconds
    pub processing_delay_ms: u64,

    /// File results are saved to (relative paths resolve against the cwd)
    pub output_file: PathBuf,

    /// Logging configuration
    pub logging: LoggingConfig,
}

impl Config {
    pub fn processing_delay(&self) -> Duration {
        Duration::from_millis(self.processing_delay_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "dark".to_string(),
            use_theme_background: false,
            processing_delay_ms: DEFAULT_DELAY_MS,
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            logging: LoggingConfig::default(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Log level filter for promptpad targets ("error".."trace")
    pub level: String,

    /// Also write logs to rotating files
    pub file_enabled: bool,

    /// Directory for log files when file logging is enabled
    pub file_dir: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file_enabled: false,
            file_dir: PathBuf::from("./logs"),
        }
    }
}

/// Config file structure (everything optional, missing keys fall back)
#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileConfig {
    pub theme: Option<String>,
    pub use_theme_background: Option<bool>,
    pub processing_delay_ms: Option<u64>,
    pub output_file: Option<String>,

    /// Optional [logging] section
    pub logging: Option<FileLogging>,
}

#[derive(Debug, Deserialize, Default)]
pub(crate) struct FileLogging {
    pub level: Option<String>,
    pub file_enabled: Option<bool>,
    pub file_dir: Option<String>,
}

impl Config {
    /// Config file path: ~/.config/promptpad/config.toml
    /// Uses Unix-style ~/.config on all platforms for consistency
    pub fn config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|p| p.join(".config").join("promptpad").join("config.toml"))
    }

    /// Create the config file with defaults if it doesn't exist.
    /// Called during startup so users can discover the options.
    pub fn ensure_config_exists() {
        let Some(path) = Self::config_path() else {
            return;
        };

        if path.exists() {
            return;
        }

        if let Some(parent) = path.parent() {
            if std::fs::create_dir_all(parent).is_err() {
                return; // Config is optional
            }
        }

        let _ = std::fs::write(&path, Self::default().to_toml());
    }

    /// Load the file config if present.
    ///
    /// A config file that exists but cannot be parsed is a fatal error -
    /// failing fast beats silently running with defaults while the user
    /// debugs the wrong thing.
    fn load_file_config() -> FileConfig {
        let Some(path) = Self::config_path() else {
            return FileConfig::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => config,
                Err(e) => {
                    eprintln!("Failed to parse config file {}:\n  {}", path.display(), e);
                    eprintln!("To reset, run: promptpad config --reset");
                    std::process::exit(1);
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FileConfig::default(),
            Err(e) => {
                eprintln!("Cannot read config file {}: {}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    /// Load configuration: env vars > file > defaults
    pub fn from_env() -> Self {
        Self::resolve(Self::load_file_config())
    }

    /// Resolve a file config against env vars and defaults.
    /// Split from `from_env` so tests can inject the file layer.
    pub(crate) fn resolve(file: FileConfig) -> Self {
        let defaults = Config::default();

        let theme = std::env::var("PROMPTPAD_THEME")
            .ok()
            .or(file.theme)
            .unwrap_or(defaults.theme);

        let use_theme_background = std::env::var("PROMPTPAD_THEME_BG")
            .ok()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .or(file.use_theme_background)
            .unwrap_or(defaults.use_theme_background);

        let processing_delay_ms = std::env::var("PROMPTPAD_DELAY_MS")
            .ok()
            .and_then(|v| v.parse().ok())
            .or(file.processing_delay_ms)
            .unwrap_or(defaults.processing_delay_ms);

        let output_file = std::env::var("PROMPTPAD_OUTPUT")
            .ok()
            .or(file.output_file)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_file);

        let file_logging = file.logging.unwrap_or_default();
        let logging = LoggingConfig {
            level: std::env::var("PROMPTPAD_LOG_LEVEL")
                .ok()
                .or(file_logging.level)
                .unwrap_or(defaults.logging.level),
            file_enabled: file_logging.file_enabled.unwrap_or(false),
            file_dir: file_logging
                .file_dir
                .map(PathBuf::from)
                .unwrap_or(defaults.logging.file_dir),
        };

        Self {
            theme,
            use_theme_background,
            processing_delay_ms,
            output_file,
            logging,
        }
    }

    /// Serialize to the TOML template written by `ensure_config_exists`
    /// and `config --reset`. Single source of truth for the file format.
    pub fn to_toml(&self) -> String {
        format!(
            r#"# promptpad configuration
# Values here are overridden by PROMPTPAD_* environment variables.

# Theme: "dark", "light", "monokai", "nord"
theme = "{theme}"

# Use the theme's background color instead of the terminal's default
use_theme_background = {theme_bg}

# Simulated processing delay in milliseconds
processing_delay_ms = {delay}

# File that results are saved to with the save action
output_file = "{output}"

[logging]
# Level for promptpad targets: "error", "warn", "info", "debug", "trace"
level = "{level}"
# Also write logs to rotating files in file_dir
file_enabled = {file_enabled}
file_dir = "{file_dir}"
"#,
            theme = self.theme,
            theme_bg = self.use_theme_background,
            delay = self.processing_delay_ms,
            output = self.output_file.display(),
            level = self.logging.level,
            file_enabled = self.logging.file_enabled,
            file_dir = self.logging.file_dir.display(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The generated template must parse back as a FileConfig.
    #[test]
    fn default_config_roundtrips_through_toml() {
        let toml_str = Config::default().to_toml();
        let parsed: Result<FileConfig, _> = toml::from_str(&toml_str);
        assert!(
            parsed.is_ok(),
            "Default config should round-trip.\nTOML:\n{}\nError: {:?}",
            toml_str,
            parsed.err()
        );
    }

    #[test]
    fn template_preserves_values() {
        let mut config = Config::default();
        config.theme = "nord".to_string();
        config.processing_delay_ms = 250;
        config.logging.level = "debug".to_string();

        let parsed: FileConfig = toml::from_str(&config.to_toml()).unwrap();
        assert_eq!(parsed.theme.as_deref(), Some("nord"));
        assert_eq!(parsed.processing_delay_ms, Some(250));
        assert_eq!(parsed.logging.unwrap().level.as_deref(), Some("debug"));
    }

    #[test]
    fn file_values_override_defaults() {
        let file = FileConfig {
            theme: Some("light".to_string()),
            processing_delay_ms: Some(42),
            ..FileConfig::default()
        };

        let config = Config::resolve(file);
        assert_eq!(config.theme, "light");
        assert_eq!(config.processing_delay_ms, 42);
        // Untouched keys keep their defaults
        assert_eq!(config.output_file, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn env_overrides_file_value() {
        // Only this test touches PROMPTPAD_THEME_BG, so parallel tests
        // calling resolve() are unaffected
        std::env::set_var("PROMPTPAD_THEME_BG", "1");
        let file = FileConfig {
            use_theme_background: Some(false),
            ..FileConfig::default()
        };
        let config = Config::resolve(file);
        std::env::remove_var("PROMPTPAD_THEME_BG");

        assert!(config.use_theme_background);
    }

    #[test]
    fn missing_file_sections_fall_back_to_defaults() {
        let config = Config::resolve(FileConfig::default());
        assert_eq!(config.processing_delay_ms, DEFAULT_DELAY_MS);
        assert!(!config.logging.file_enabled);
    }

    #[test]
    fn processing_delay_converts_to_duration() {
        let mut config = Config::default();
        config.processing_delay_ms = 1500;
        assert_eq!(config.processing_delay(), Duration::from_millis(1500));
    }
}
