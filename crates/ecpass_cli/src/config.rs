//! CLI configuration management
//!
//! Handles loading configuration from environment variables, TOML files, and CLI arguments.

use ecpass_core::NumericPolicy;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;

const ENV_LOG_LEVEL: &str = "ECPASS_LOG_LEVEL";
const ENV_MIN_LENGTH: &str = "ECPASS_MIN_LENGTH";
const ENV_MAX_LENGTH: &str = "ECPASS_MAX_LENGTH";
const ENV_OUTPUT_FILE: &str = "ECPASS_OUTPUT_FILE";
const ENV_NUMERIC_POLICY: &str = "ECPASS_NUMERIC_POLICY";

/// Default noise CSV consumed by the symbolic-regression tool.
pub const DEFAULT_NOISE_PATH: &str = "turingbot_noise.csv";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid numeric policy: {0}. Must be one of: strict, propagate")]
    InvalidNumericPolicy(String),

    #[error("Invalid length bounds: min {min}, max {max}. Need 0 < min <= max")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("Invalid noise count: must be at least 1")]
    InvalidNoiseCount,

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Environment variable error: {0}")]
    EnvError(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Shortest strong password the CLI will produce
    pub min_length: usize,
    /// Longest strong password the CLI will produce
    pub max_length: usize,
    /// File the generate command writes its record to
    pub output_file: Option<PathBuf>,
    /// How non-finite recurrence values are handled
    #[serde(deserialize_with = "deserialize_numeric_policy")]
    pub numeric_policy: NumericPolicy,
    /// Rows in the noise CSV
    pub noise_count: usize,
    /// Noise CSV path
    pub noise_path: PathBuf,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_numeric_policy<'de, D>(deserializer: D) -> Result<NumericPolicy, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    NumericPolicy::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Warn,
            min_length: 8,
            max_length: 128,
            output_file: None,
            numeric_policy: NumericPolicy::Strict,
            noise_count: 50,
            noise_path: PathBuf::from(DEFAULT_NOISE_PATH),
        }
    }
}

impl CliConfig {
    /// Create a new CliConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("Failed to read config file: {}", e)))?;

        let config: CliConfig = toml::from_str(&content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Override fields from whichever `ECPASS_*` variables `lookup` returns.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        if let Some(min) = lookup(ENV_MIN_LENGTH) {
            self.min_length = parse_env_usize(ENV_MIN_LENGTH, &min)?;
        }

        if let Some(max) = lookup(ENV_MAX_LENGTH) {
            self.max_length = parse_env_usize(ENV_MAX_LENGTH, &max)?;
        }

        if let Some(path) = lookup(ENV_OUTPUT_FILE) {
            self.output_file = Some(PathBuf::from(path));
        }

        if let Some(policy) = lookup(ENV_NUMERIC_POLICY) {
            self.numeric_policy = NumericPolicy::from_str(&policy)
                .map_err(|_| ConfigError::InvalidNumericPolicy(policy.clone()))?;
        }

        Ok(())
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 || self.min_length > self.max_length {
            return Err(ConfigError::InvalidLengthBounds {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.noise_count == 0 {
            return Err(ConfigError::InvalidNoiseCount);
        }

        Ok(())
    }

    /// Whether `length` lies within the configured bounds
    pub fn length_in_bounds(&self, length: usize) -> bool {
        (self.min_length..=self.max_length).contains(&length)
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<(), ConfigError> {
        if cli.verbose {
            self.log_level = LogLevel::Debug;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = LogLevel::from_str(level)?;
        }
        if let Some(path) = &cli.output_file {
            self.output_file = Some(path.clone());
        }
        if let Some(policy) = &cli.numeric_policy {
            self.numeric_policy = NumericPolicy::from_str(policy)
                .map_err(|_| ConfigError::InvalidNumericPolicy(policy.clone()))?;
        }
        Ok(())
    }
}

fn parse_env_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse().map_err(|_| {
        ConfigError::EnvError(format!("{} must be a positive integer, got {:?}", key, value))
    })
}

/// CLI arguments structure
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Debug logging requested
    pub verbose: bool,
    /// Log level override
    pub log_level: Option<String>,
    /// Output file override
    pub output_file: Option<PathBuf>,
    /// Numeric policy override
    pub numeric_policy: Option<String>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_config(cli: &CliArgs) -> Result<CliConfig, ConfigError> {
    build_config_with_env(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup.
pub fn build_config_with_env<F>(cli: &CliArgs, lookup: F) -> Result<CliConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = if let Some(config_path) = &cli.config_file {
        CliConfig::from_file(config_path)?
    } else {
        CliConfig::default()
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli)?;

    // Final validation
    config.validate()?;

    Ok(config)
}
