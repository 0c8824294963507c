// Application state module
// Read-only state shared across connections

use std::io;
use std::path::Path;

use super::types::Config;
use crate::handler::StaticResponder;

/// Application state
///
/// Built once at startup and shared behind an `Arc`; nothing here mutates
/// during request handling.
pub struct AppState {
    pub config: Config,
    pub responder: StaticResponder,
}

impl AppState {
    /// Create `AppState` from loaded configuration
    ///
    /// Resolves the configured root directory to an absolute path; a missing
    /// or unreadable root is a startup error.
    pub fn new(config: &Config) -> io::Result<Self> {
        let root = Path::new(&config.files.root).canonicalize()?;
        let responder =
            StaticResponder::new(root).with_index_files(config.files.index_files.clone());

        Ok(Self {
            config: config.clone(),
            responder,
        })
    }
}
