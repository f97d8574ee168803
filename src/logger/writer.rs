//! Log writer module
//!
//! Provides thread-safe log writing to files or stdout/stderr.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use super::format::LogLevel;

/// Global log writer instance
static LOG_WRITER: OnceLock<LogWriter> = OnceLock::new();

/// Log output target
enum LogTarget {
    /// Write to stdout
    Stdout,
    /// Write to stderr
    Stderr,
    /// Append to file
    File(File),
}

/// Thread-safe log writer
pub struct LogWriter {
    /// Inspection and info log target
    info: Mutex<LogTarget>,
    /// Error log target
    error: Mutex<LogTarget>,
    level: LogLevel,
}

impl LogWriter {
    fn new(
        level: LogLevel,
        inspect_log_file: Option<&str>,
        error_log_file: Option<&str>,
    ) -> io::Result<Self> {
        let info = match inspect_log_file {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stdout,
        };

        let error = match error_log_file {
            Some(path) => LogTarget::File(open_log_file(path)?),
            None => LogTarget::Stderr,
        };

        Ok(Self {
            info: Mutex::new(info),
            error: Mutex::new(error),
            level,
        })
    }

    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Write info message
    pub fn write_info(&self, message: &str) {
        write_lines(&mut lock(&self.info), &[message]);
    }

    /// Write several lines to the info target without interleaving
    pub fn write_info_block(&self, lines: &[&str]) {
        write_lines(&mut lock(&self.info), lines);
    }

    /// Write to error log
    pub fn write_error(&self, message: &str) {
        write_lines(&mut lock(&self.error), &[message]);
    }
}

fn lock(target: &Mutex<LogTarget>) -> MutexGuard<'_, LogTarget> {
    target.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Open or create a log file for appending
fn open_log_file(path: &str) -> io::Result<File> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Write lines to a target; write failures are dropped, there is nowhere left to report them
fn write_lines(target: &mut LogTarget, lines: &[&str]) {
    match target {
        LogTarget::Stdout => write_all(&mut io::stdout().lock(), lines),
        LogTarget::Stderr => write_all(&mut io::stderr().lock(), lines),
        LogTarget::File(file) => write_all(file, lines),
    }
}

fn write_all(out: &mut impl Write, lines: &[&str]) {
    for line in lines {
        if writeln!(out, "{line}").is_err() {
            return;
        }
    }
    let _ = out.flush();
}

/// Initialize the global log writer
///
/// This should be called once at application startup.
/// Returns error if log files cannot be opened.
pub fn init(
    level: LogLevel,
    inspect_log_file: Option<&str>,
    error_log_file: Option<&str>,
) -> io::Result<()> {
    let writer = LogWriter::new(level, inspect_log_file, error_log_file)?;
    LOG_WRITER.set(writer).map_err(|_| {
        io::Error::new(
            io::ErrorKind::AlreadyExists,
            "Log writer already initialized",
        )
    })
}

/// Get the global log writer, if `init()` has been called
pub fn get() -> Option<&'static LogWriter> {
    LOG_WRITER.get()
}
