//! Index request inspector
//!
//! HTTP middleware that logs the parsed `User-Agent` of requests targeting
//! `/index.html`, plus a small hyper host to run it in.

pub mod config;
pub mod handler;
pub mod http;
pub mod inspector;
pub mod logger;
pub mod server;
pub mod ua;

pub use inspector::{should_process, InspectError, InspectedRequest, Inspector, TargetClass};
pub use ua::{Agent, UaParser, UserAgentParser};
