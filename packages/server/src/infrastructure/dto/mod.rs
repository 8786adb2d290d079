//! Wire DTO handling.
//!
//! The DTO types themselves live in `tamariba_shared::protocol` because
//! both server and client serialize them; this module holds the
//! conversions between those DTOs and the server's domain entities.

pub mod conversion;
