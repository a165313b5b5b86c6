use serde::{Deserialize, Serialize};

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::output::{OutputConfig, OutputFormat};
use super::resolver::ResolverConfig;

const LOCAL_CONFIG: &str = "forsale.toml";
const SYSTEM_CONFIG: &str = "/etc/forsale/config.toml";

/// Main configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// How and where TXT queries are sent
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Report rendering
    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. forsale.toml in current directory
    /// 3. /etc/forsale/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(found) = Self::get_config_path() {
            Self::from_file(&found)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if !overrides.servers.is_empty() {
            self.resolver.servers = overrides.servers;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if overrides.json {
            self.output.format = OutputFormat::Json;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Resolver timeout cannot be 0".to_string(),
            ));
        }

        if self.resolver.udp_payload_size < 512 {
            return Err(ConfigError::Validation(format!(
                "UDP payload size {} is below the 512-byte DNS minimum",
                self.resolver.udp_payload_size
            )));
        }

        for server in &self.resolver.servers {
            if self.resolver.parse_server(server).is_none() {
                return Err(ConfigError::Validation(format!(
                    "Invalid DNS server address '{server}'"
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG, SYSTEM_CONFIG]
            .into_iter()
            .find(|p| std::path::Path::new(p).exists())
            .map(str::to_string)
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub servers: Vec<String>,
    pub timeout_secs: Option<u64>,
    pub log_level: Option<String>,
    pub json: bool,
}
