//! Tamariba relay server library.
//!
//! A room-scoped message relay: clients join named rooms over WebSocket,
//! exchange short text messages, and receive a replay of a room's prior
//! messages upon joining. The relay itself is a thin router over two data
//! structures (room store and connection registry); echo suppression for a
//! sender's own messages is a client-side concern.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
