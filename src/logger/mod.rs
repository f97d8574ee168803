//! Logger module
//!
//! Provides logging utilities for the inspector host including:
//! - Server lifecycle logging
//! - Request logging with local timestamps
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::{AgentFormat, LogLevel};

use crate::config::Config;
use chrono::Local;
use hyper::{Method, Uri, Version};
use std::io::Write;
use std::net::SocketAddr;

/// Destination for multi-line log blocks.
///
/// Implementations must write all lines of one call contiguously.
pub trait LineSink {
    fn write_lines(&self, lines: &[&str]);
}

/// Sink backed by the global info log (stdout unless a file is configured)
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoLog;

impl LineSink for InfoLog {
    fn write_lines(&self, lines: &[&str]) {
        if let Some(writer) = writer::get() {
            writer.write_info_block(lines);
        } else {
            let mut out = std::io::stdout().lock();
            for line in lines {
                if writeln!(out, "{line}").is_err() {
                    return;
                }
            }
        }
    }
}

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.log_level(),
        config.logging.inspect_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(LogLevel::Info, writer::LogWriter::level) >= level
}

/// Write to info log
fn write_info(message: &str) {
    if let Some(writer) = writer::get() {
        writer.write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if let Some(writer) = writer::get() {
        writer.write_error(message);
    } else {
        eprintln!("{message}");
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config) {
    write_info("======================================");
    write_info("Index inspector started successfully");
    write_info(&format!("Listening on: http://{addr}"));
    write_info(&format!("Log level: {}", config.logging.level));
    write_info(&format!("Agent format: {}", config.logging.agent_format));
    if let Some(workers) = config.server.workers {
        write_info(&format!("Worker threads: {workers}"));
    }
    if let Some(ref path) = config.logging.inspect_log_file {
        write_info(&format!("Inspect log: {path}"));
    }
    if let Some(ref path) = config.logging.error_log_file {
        write_info(&format!("Error log: {path}"));
    }
    if !config.inspector.enabled {
        write_info("User-agent inspection is disabled");
    }
    write_info("======================================\n");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[Connection] Accepted from: {peer_addr}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_request(method: &Method, uri: &Uri, version: Version) {
    if enabled(LogLevel::Info) {
        write_info(&format!(
            "[Request] {} {method} {uri} {version:?}",
            Local::now().format("%d/%b/%Y:%H:%M:%S %z")
        ));
    }
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

pub fn log_shutdown(reason: &str) {
    write_info(&format!("\n[Shutdown] {reason}, no longer accepting connections"));
}
