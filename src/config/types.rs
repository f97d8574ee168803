// Configuration types module
// Defines all configuration-related data structures

use serde::Deserialize;

use crate::logger::{AgentFormat, LogLevel};

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub inspector: InspectorConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub access_log: bool,
    /// Rendering of the parsed user agent (json, pretty or debug)
    pub agent_format: String,
    /// Inspection log file path (optional, stdout if not set)
    #[serde(default)]
    pub inspect_log_file: Option<String>,
    /// Error log file path (optional, stderr if not set)
    #[serde(default)]
    pub error_log_file: Option<String>,
}

impl LoggingConfig {
    /// Parsed log level, `info` when the configured value is unknown
    pub fn log_level(&self) -> LogLevel {
        self.level.parse().unwrap_or(LogLevel::Info)
    }

    /// Parsed agent format, `json` when the configured value is unknown
    pub fn agent_format(&self) -> AgentFormat {
        self.agent_format.parse().unwrap_or_default()
    }
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

/// User-agent inspection configuration
#[derive(Debug, Deserialize, Clone)]
pub struct InspectorConfig {
    pub enabled: bool,
    /// Headers longer than this are refused by the parser
    pub max_user_agent_length: usize,
}
