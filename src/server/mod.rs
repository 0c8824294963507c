//! Server module entry
//!
//! Listener construction, the accept loop, and per-connection serving.

pub mod listener;
pub mod signal;

// Re-export commonly used items
pub use listener::create_reusable_listener;

use crate::config::AppState;
use crate::handler;
use crate::logger;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::{TcpListener, TcpStream};

/// Accept connections until the shutdown signal resolves
///
/// Accept errors are logged and the loop continues; each accepted connection
/// is served on its own task.
pub async fn run(listener: TcpListener, state: Arc<AppState>) {
    let shutdown = signal::shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        handle_connection(stream, peer_addr, Arc::clone(&state));
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            () = &mut shutdown => {
                break;
            }
        }
    }
}

/// Serve a single connection on a spawned task
///
/// Wraps the stream in `TokioIo`, drives it with hyper's HTTP/1.1 connection
/// (keep-alive on), and logs connection-level errors without affecting the
/// accept loop.
fn handle_connection(stream: TcpStream, peer_addr: SocketAddr, state: Arc<AppState>) {
    tokio::spawn(async move {
        let io = TokioIo::new(stream);

        let service = service_fn(move |req| {
            let state = Arc::clone(&state);
            handler::handle_request(req, state, peer_addr)
        });

        let conn = http1::Builder::new()
            .keep_alive(true)
            .serve_connection(io, service);

        if let Err(err) = conn.await {
            logger::log_connection_error(&err);
        }
    });
}
