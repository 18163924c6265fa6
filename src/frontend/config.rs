use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::Level;

use crate::error::{Error, Result};
use crate::infrastructure::logging::{LogConfig, LogFormat, LogOutput};

/// File looked up in the working directory when no explicit path is given
pub const CONFIG_FILE_NAME: &str = "compy.toml";
/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "COMPY_CONFIG";
/// Environment variable overriding `logging.level`
pub const LOG_LEVEL_ENV: &str = "COMPY_LOG_LEVEL";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logging: LoggingConfig,

    #[serde(default)]
    pub programs: ProgramConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_level")]
    pub level: String,

    #[serde(default)]
    pub format: FormatSetting,

    #[serde(default)]
    pub output: OutputSetting,

    /// Directory for `output = "file"`
    #[serde(default = "default_log_dir")]
    pub directory: PathBuf,

    #[serde(default = "default_prefix")]
    pub prefix: String,

    #[serde(default)]
    pub span_events: bool,

    /// Extra filter directives, e.g. "compy_runtime=trace"
    #[serde(default)]
    pub filter: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatSetting {
    Pretty,
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputSetting {
    #[default]
    Stderr,
    Stdout,
    File,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgramConfig {
    /// Index computed by the fibonacci program
    #[serde(default = "default_fib_index")]
    pub fib_index: i64,

    /// Exclusive bound of the counting loop
    #[serde(default = "default_count_to")]
    pub count_to: i64,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: FormatSetting::default(),
            output: OutputSetting::default(),
            directory: default_log_dir(),
            prefix: default_prefix(),
            span_events: false,
            filter: None,
        }
    }
}

impl Default for ProgramConfig {
    fn default() -> Self {
        Self {
            fib_index: default_fib_index(),
            count_to: default_count_to(),
        }
    }
}

fn default_level() -> String { "warn".to_string() }
fn default_log_dir() -> PathBuf { PathBuf::from("logs") }
fn default_prefix() -> String { "compy".to_string() }
fn default_fib_index() -> i64 { 35 }
fn default_count_to() -> i64 { 10 }

impl LoggingConfig {
    /// Translate into the logging layer's settings
    pub fn to_log_config(&self) -> Result<LogConfig> {
        let level = Level::from_str(self.level.trim())
            .map_err(|_| Error::InvalidLogLevel(self.level.clone()))?;

        let format = match self.format {
            FormatSetting::Pretty => LogFormat::Pretty,
            FormatSetting::Compact => LogFormat::Compact,
            FormatSetting::Json => LogFormat::Json,
        };

        let output = match self.output {
            OutputSetting::Stderr => LogOutput::Stderr,
            OutputSetting::Stdout => LogOutput::Stdout,
            OutputSetting::File => LogOutput::File {
                directory: self.directory.clone(),
                prefix: self.prefix.clone(),
            },
        };

        let mut config = LogConfig::new()
            .with_level(level)
            .with_format(format)
            .with_output(output)
            .with_span_events(self.span_events);
        if let Some(filter) = &self.filter {
            config = config.with_filter(filter.clone());
        }
        Ok(config)
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(&content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse configuration from TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Resolve configuration from the environment and working directory
    pub fn load() -> Result<Self> {
        let explicit = env::var_os(CONFIG_ENV).map(PathBuf::from);
        let dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let mut config = Self::load_from(explicit.as_deref(), &dir)?;

        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            config.logging.level = level;
        }
        Ok(config)
    }

    /// An explicit path must exist; the default file in `dir` is optional
    pub fn load_from(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let default_path = dir.join(CONFIG_FILE_NAME);
        if default_path.is_file() {
            Self::from_file(&default_path)
        } else {
            Ok(Self::default())
        }
    }
}
