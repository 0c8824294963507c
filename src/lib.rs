//! webroot - a minimal static file server
//!
//! Serves files from a local directory tree over HTTP/1.x, annotates every
//! response with permissive CORS headers, and overrides MIME type detection
//! for a fixed extension set.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
