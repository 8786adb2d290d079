//! CLI client for the Tamariba room relay.
//!
//! The interesting part lives in [`domain`]: the client keeps a local view
//! of the current room and reconciles it against the server's history
//! replays and broadcasts. Everything else is terminal plumbing.

pub mod cache;
pub mod domain;
pub mod error;
pub mod formatter;
pub mod identity;
mod runner;
mod session;
mod ui;

pub use runner::run_client;
