//! Configuration system for the UGC scripter
//!
//! Supports multiple configuration sources with the following precedence (highest to lowest):
//! 1. CLI arguments
//! 2. Environment variables (UGC_* prefix)
//! 3. Configuration file (TOML)
//! 4. Default values

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::persona::PersonaKey;
use crate::script::{MAX_DURATION_SECS, MIN_DURATION_SECS};

/// Main scripter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScripterConfig {
    /// Script generation defaults
    pub generation: GenerationSettings,

    /// Output formatting
    pub output: OutputSettings,

    /// Logging configuration
    pub logging: LoggingSettings,
}

/// Script generation defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationSettings {
    /// Persona used when `--persona` is not given
    pub default_persona: String,

    /// Runtime used when `--duration` is not given
    pub default_duration_secs: u32,

    /// Shortest accepted runtime
    pub min_duration_secs: u32,

    /// Longest accepted runtime
    pub max_duration_secs: u32,
}

/// Output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// Output format: text or json
    pub format: String,

    /// Pretty-print JSON output
    pub pretty_json: bool,
}

/// Logging settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    pub level: String,

    /// Log file path (empty = no file logging)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Maximum log file size in MB before rotation
    pub max_file_size_mb: u64,

    /// Number of rotated log files to keep
    pub max_files: u32,

    /// Enable JSON formatted logging
    pub json_format: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            default_persona: PersonaKey::Lifestyle.slug().to_string(),
            default_duration_secs: 45,
            min_duration_secs: MIN_DURATION_SECS,
            max_duration_secs: MAX_DURATION_SECS,
        }
    }
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
            max_file_size_mb: 10,
            max_files: 3,
            json_format: false,
        }
    }
}

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const VALID_OUTPUT_FORMATS: [&str; 2] = ["text", "json"];

impl ScripterConfig {
    /// Load configuration from file with environment variable overrides
    pub fn load(config_path: Option<&str>) -> Result<Self> {
        let mut config = match Self::find_config_file(config_path)? {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.expand_paths();
        config.validate()?;

        Ok(config)
    }

    /// Parse a configuration file without overrides or validation
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "Loading configuration file");
        let content = fs::read_to_string(path).map_err(|source| Error::IoRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|e| Error::ConfigParse {
            message: format!("{}: {}", path.display(), e.message()),
            source: Some(e),
        })?;
        info!(path = %path.display(), "Configuration loaded from file");
        Ok(config)
    }

    /// Find the configuration file to use
    pub fn find_config_file(explicit_path: Option<&str>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit_path {
            let path = PathBuf::from(expand_path(path));
            if path.exists() {
                return Ok(Some(path));
            }
            return Err(Error::config_not_found(path));
        }

        for path in search_paths() {
            if path.exists() {
                debug!(path = %path.display(), "Found configuration file");
                return Ok(Some(path));
            }
        }

        debug!("No configuration file found, using defaults");
        Ok(None)
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(&mut self) {
        // Generation settings
        if let Ok(val) = std::env::var("UGC_DEFAULT_PERSONA") {
            self.generation.default_persona = val;
        }
        if let Ok(val) = std::env::var("UGC_DEFAULT_DURATION_SECS") {
            if let Ok(n) = val.parse() {
                self.generation.default_duration_secs = n;
            }
        }
        if let Ok(val) = std::env::var("UGC_MIN_DURATION_SECS") {
            if let Ok(n) = val.parse() {
                self.generation.min_duration_secs = n;
            }
        }
        if let Ok(val) = std::env::var("UGC_MAX_DURATION_SECS") {
            if let Ok(n) = val.parse() {
                self.generation.max_duration_secs = n;
            }
        }

        // Output settings
        if let Ok(val) = std::env::var("UGC_OUTPUT_FORMAT") {
            self.output.format = val;
        }
        if let Ok(val) = std::env::var("UGC_PRETTY_JSON") {
            self.output.pretty_json = val.to_lowercase() == "true" || val == "1";
        }

        // Logging settings
        if let Ok(val) = std::env::var("UGC_LOG_LEVEL") {
            self.logging.level = val;
        }
        if let Ok(val) = std::env::var("UGC_LOG_FILE") {
            self.logging.file = Some(val);
        }
        if let Ok(val) = std::env::var("UGC_LOG_JSON") {
            self.logging.json_format = val.to_lowercase() == "true" || val == "1";
        }
    }

    /// Expand ~ and other path variables
    fn expand_paths(&mut self) {
        if let Some(ref file) = self.logging.file {
            self.logging.file = Some(expand_path(file));
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let generation = &self.generation;

        if generation.default_persona.parse::<PersonaKey>().is_err() {
            let valid: Vec<&str> = PersonaKey::all().iter().map(|k| k.slug()).collect();
            return Err(Error::config_field_invalid(
                "generation.default_persona",
                format!(
                    "Unknown persona '{}'. Must be one of: {}",
                    generation.default_persona,
                    valid.join(", ")
                ),
            ));
        }

        let bounds = MIN_DURATION_SECS..=MAX_DURATION_SECS;
        if !bounds.contains(&generation.min_duration_secs)
            || !bounds.contains(&generation.max_duration_secs)
        {
            return Err(Error::config_field_invalid(
                "generation",
                format!(
                    "Duration bounds must lie within {}-{} seconds",
                    MIN_DURATION_SECS, MAX_DURATION_SECS
                ),
            ));
        }
        if generation.min_duration_secs > generation.max_duration_secs {
            return Err(Error::config_field_invalid(
                "generation.min_duration_secs",
                "min_duration_secs must not exceed max_duration_secs",
            ));
        }
        if !(generation.min_duration_secs..=generation.max_duration_secs)
            .contains(&generation.default_duration_secs)
        {
            return Err(Error::config_field_invalid(
                "generation.default_duration_secs",
                format!(
                    "default_duration_secs must be between {} and {}",
                    generation.min_duration_secs, generation.max_duration_secs
                ),
            ));
        }

        if !VALID_OUTPUT_FORMATS.contains(&self.output.format.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "output.format",
                format!(
                    "Invalid output format '{}'. Must be one of: {}",
                    self.output.format,
                    VALID_OUTPUT_FORMATS.join(", ")
                ),
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.logging.level.to_lowercase().as_str()) {
            return Err(Error::config_field_invalid(
                "logging.level",
                format!(
                    "Invalid log level '{}'. Must be one of: {}",
                    self.logging.level,
                    VALID_LOG_LEVELS.join(", ")
                ),
            ));
        }

        Ok(())
    }

    /// The configured default persona
    pub fn default_persona(&self) -> PersonaKey {
        self.generation
            .default_persona
            .parse()
            .unwrap_or(PersonaKey::Default)
    }
}

/// Standard config locations, in search order
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("ugc-scripter.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("ugc-scripter").join("config.toml"));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".ugc-scripter").join("config.toml"));
    }
    paths
}

/// Expand ~ and environment variables in paths
fn expand_path(path: &str) -> String {
    shellexpand::full(path)
        .unwrap_or_else(|_| std::borrow::Cow::Borrowed(path))
        .into_owned()
}

/// Initialize a new configuration file, returning where it was written
pub fn init_config(path: Option<&str>, force: bool) -> Result<PathBuf> {
    let config_path = path
        .map(|p| PathBuf::from(expand_path(p)))
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".ugc-scripter")
                .join("config.toml")
        });

    if config_path.exists() && !force {
        return Err(Error::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            config_path.display()
        )));
    }

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| Error::IoWrite {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    fs::write(&config_path, generate_default_config()).map_err(|source| Error::IoWrite {
        path: config_path.clone(),
        source,
    })?;

    info!(path = %config_path.display(), "Configuration file created");
    Ok(config_path)
}

/// Generate default configuration content with comments
pub fn generate_default_config() -> String {
    r#"# UGC Scripter Configuration

[generation]
# Persona used when --persona is omitted: fitness, beauty, tech, lifestyle, default
default_persona = "lifestyle"

# Runtime in seconds used when --duration is omitted
default_duration_secs = 45

# Accepted runtime window in seconds (must stay within 15-90)
min_duration_secs = 15
max_duration_secs = 90

[output]
# Output format: text or json
format = "text"

# Pretty-print JSON output
pretty_json = true

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log file path (comment out to disable file logging)
# file = "~/.ugc-scripter/logs/ugc-scripter.log"

# Maximum log file size in MB before rotation
max_file_size_mb = 10

# Number of rotated log files to keep
max_files = 3

# Enable JSON formatted logging
json_format = false
"#
    .to_string()
}
