//! Log format module
//!
//! Log levels and the renderings available for a parsed user agent:
//! - `json` (compact single line)
//! - `pretty` (indented JSON)
//! - `debug` (Rust debug formatting)

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Severity threshold for tagged log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
}

impl LogLevel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warn),
            "info" => Ok(Self::Info),
            "debug" | "trace" => Ok(Self::Debug),
            other => Err(format!("unknown log level '{other}'")),
        }
    }
}

/// How the parsed user agent is rendered inside the inspection block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AgentFormat {
    #[default]
    Json,
    Pretty,
    Debug,
}

impl AgentFormat {
    /// Render a parsed agent.
    ///
    /// Falls back to debug formatting when the value cannot be serialized.
    pub fn render<T: Serialize + fmt::Debug>(self, agent: &T) -> String {
        let rendered = match self {
            Self::Json => serde_json::to_string(agent),
            Self::Pretty => serde_json::to_string_pretty(agent),
            Self::Debug => return format!("{agent:?}"),
        };
        rendered.unwrap_or_else(|_| format!("{agent:?}"))
    }
}

impl FromStr for AgentFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pretty" => Ok(Self::Pretty),
            "debug" => Ok(Self::Debug),
            other => Err(format!("unknown agent format '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::ser::Error as _;
    use std::collections::BTreeMap;

    #[derive(Debug)]
    struct Unserializable;

    impl Serialize for Unserializable {
        fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
            Err(S::Error::custom("nope"))
        }
    }

    fn sample() -> BTreeMap<&'static str, &'static str> {
        BTreeMap::from([("browser", "Chrome"), ("os", "Linux")])
    }

    #[test]
    fn test_render_json() {
        assert_eq!(
            AgentFormat::Json.render(&sample()),
            r#"{"browser":"Chrome","os":"Linux"}"#
        );
    }

    #[test]
    fn test_render_pretty() {
        let out = AgentFormat::Pretty.render(&sample());
        assert!(out.starts_with("{\n"));
        assert!(out.contains(r#"  "browser": "Chrome""#));
    }

    #[test]
    fn test_render_debug_and_fallback() {
        assert_eq!(
            AgentFormat::Debug.render(&sample()),
            r#"{"browser": "Chrome", "os": "Linux"}"#
        );
        assert_eq!(AgentFormat::Json.render(&Unserializable), "Unserializable");
    }

    #[test]
    fn test_parse_formats() {
        assert_eq!("JSON".parse::<AgentFormat>(), Ok(AgentFormat::Json));
        assert_eq!(" pretty ".parse::<AgentFormat>(), Ok(AgentFormat::Pretty));
        assert!("yaml".parse::<AgentFormat>().is_err());
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("info".parse::<LogLevel>(), Ok(LogLevel::Info));
        assert_eq!("WARNING".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert!("loud".parse::<LogLevel>().is_err());
        assert!(LogLevel::Error < LogLevel::Debug);
    }
}
