use serde::Deserialize;
use std::fs;

/// Default configuration file, read from the working directory
pub const CONFIG_FILE: &str = "mazecost.toml";
/// Environment variable overriding the configuration file path
pub const CONFIG_ENV: &str = "MAZECOST_CONFIG";

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Print each generated maze before its result
    #[serde(default = "default_show_maze")]
    pub show_maze: bool,
    /// Print the averages line after the last case
    #[serde(default = "default_show_summary")]
    pub show_summary: bool,
    /// Print the chosen path under each result
    #[serde(default)]
    pub show_route: bool,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    /// One of `off`, `error`, `warn`, `info`, `debug`, `trace`
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default values
fn default_show_maze() -> bool { true }
fn default_show_summary() -> bool { true }
fn default_log_level() -> String { "warn".to_string() }

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            show_maze: default_show_maze(),
            show_summary: default_show_summary(),
            show_route: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl LoggingConfig {
    /// Parsed log level, `Warn` if the configured name is unknown
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Warn)
    }
}

impl Config {
    /// Load configuration from `$MAZECOST_CONFIG` or `mazecost.toml`,
    /// or use defaults if the file doesn't exist or can't be parsed
    pub fn load() -> Self {
        let path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::load_from(&path)
    }

    pub fn load_from(path: &str) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match Self::parse(&contents) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path);
                    config
                }
                Err(e) => {
                    log::warn!("failed to parse {}: {}; using default configuration", path, e);
                    Config::default()
                }
            },
            Err(_) => {
                log::debug!("no {} found, using default configuration", path);
                Config::default()
            }
        }
    }

    pub fn parse(contents: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(contents)
    }
}
