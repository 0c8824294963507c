//! Logger module
//!
//! Provides logging utilities for the server:
//! - Startup banner
//! - Access logging with multiple formats
//! - Error and warning logging
//! - File-based logging support

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::Config;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config) -> std::io::Result<()> {
    writer::init(
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

/// Write to info/access log
fn write_info(message: &str) {
    if writer::is_initialized() {
        writer::get().write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    if writer::is_initialized() {
        writer::get().write_error(message);
    } else {
        eprintln!("{message}");
    }
}

/// Write to access log specifically
fn write_access(message: &str) {
    if writer::is_initialized() {
        writer::get().write_access(message);
    } else {
        println!("{message}");
    }
}

/// The two startup banner lines for a given listen port
pub fn startup_banner(port: u16) -> [String; 2] {
    [
        format!("Server running at http://localhost:{port}/"),
        "Press Ctrl+C to stop".to_string(),
    ]
}

pub fn log_server_start(port: u16) {
    for line in startup_banner(port) {
        write_info(&line);
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    write_access(&entry.format(format));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_startup_banner_reports_port() {
        let [url_line, stop_line] = startup_banner(9000);
        assert_eq!(url_line, "Server running at http://localhost:9000/");
        assert_eq!(stop_line, "Press Ctrl+C to stop");

        let [url_line, _] = startup_banner(8123);
        assert_eq!(url_line, "Server running at http://localhost:8123/");
    }
}
