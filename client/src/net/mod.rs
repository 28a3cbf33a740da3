//! Networking for the game server's HTTP endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` makes the `POST /move` and `POST /reset` calls and `types` defines
//! their wire schema.

pub mod api;
pub mod types;
