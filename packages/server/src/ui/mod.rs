//! UI layer: WebSocket endpoint, HTTP API, and server bootstrap.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
