//! # client
//!
//! Browser client for the Connect Four board.
//!
//! The `board` crate holds the grid and game state machine; this crate
//! connects it to the outside world. [`controller::BoardController`] turns
//! canvas clicks into `POST /move` requests and applies the server's answer,
//! [`net`] speaks the HTTP API, and under the `hydrate` feature `dom` and
//! `app` mount everything on the page as a WebAssembly module.

pub mod controller;
pub mod net;

#[cfg(feature = "hydrate")]
pub mod app;
#[cfg(feature = "hydrate")]
pub mod dom;
