//! Shared pieces of the Tamariba room relay.
//!
//! Holds the wire protocol spoken between relay server and clients, plus
//! the logger and time helpers both binaries use.

pub mod logger;
pub mod protocol;
pub mod time;
