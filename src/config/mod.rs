// Configuration module entry point
// Manages application configuration and runtime state

mod state;
mod types;

use std::net::SocketAddr;

use crate::logger::{AgentFormat, LogLevel};
use crate::ua::DEFAULT_MAX_UA_LENGTH;

// Re-export public types
pub use state::{AppState, IndexInspector};
pub use types::{Config, InspectorConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// Default config file is "config.toml" when no path specified
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(
                config::Environment::with_prefix("INSPECTOR")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("logging.agent_format", "json")?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("inspector.enabled", true)?
            .set_default("inspector.max_user_agent_length", DEFAULT_MAX_UA_LENGTH as u64)?
            .build()?;

        let cfg: Self = settings.try_deserialize()?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that only make sense as one of a fixed set
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        self.logging
            .level
            .parse::<LogLevel>()
            .map_err(|e| config::ConfigError::Message(format!("logging.level: {e}")))?;
        self.logging
            .agent_format
            .parse::<AgentFormat>()
            .map_err(|e| config::ConfigError::Message(format!("logging.agent_format: {e}")))?;
        if self.inspector.max_user_agent_length == 0 {
            return Err(config::ConfigError::Message(
                "inspector.max_user_agent_length must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_defaults() -> Config {
        Config::load_from("this-config-file-does-not-exist").unwrap()
    }

    #[test]
    fn test_defaults() {
        let cfg = load_defaults();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.logging.log_level(), LogLevel::Info);
        assert_eq!(cfg.logging.agent_format(), AgentFormat::Json);
        assert!(cfg.logging.inspect_log_file.is_none());
        assert_eq!(cfg.performance.read_timeout, 30);
        assert!(cfg.inspector.enabled);
        assert_eq!(cfg.inspector.max_user_agent_length, DEFAULT_MAX_UA_LENGTH);
    }

    #[test]
    fn test_socket_addr() {
        let mut cfg = load_defaults();
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "127.0.0.1:8080".parse::<SocketAddr>().unwrap()
        );
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }

    #[test]
    fn test_validate_rejects_unknown_values() {
        let mut cfg = load_defaults();
        cfg.logging.agent_format = "yaml".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = load_defaults();
        cfg.logging.level = "loud".to_string();
        assert!(cfg.validate().is_err());

        let mut cfg = load_defaults();
        cfg.inspector.max_user_agent_length = 0;
        assert!(cfg.validate().is_err());
    }
}
