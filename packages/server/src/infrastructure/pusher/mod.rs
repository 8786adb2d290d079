//! MessagePusher 実装
//!
//! - `websocket`: WebSocket を使った実装
//! - 将来的に: `redis`, `kafka` など

pub mod websocket;

pub use websocket::WebSocketMessagePusher;
