//! Board state and canvas painting for the Connect Four browser client.
//!
//! This crate is compiled to WebAssembly and runs in the browser, but none of
//! its game logic depends on the browser. It owns the client's mirror of the
//! board: the grid, the gravity drop, the pointer-to-column mapping and the
//! small state machine that decides which moves and resets are accepted. The
//! `client` crate drives it from network responses and DOM events.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Game status, in-flight latches and the [`engine::Action`]s the host performs |
//! | [`grid`] | The 6×7 cell grid and the gravity drop rule |
//! | [`input`] | Pointer offset to column mapping and canvas dimensions |
//! | [`render`] | Paints the grid to a 2D context |
//! | [`consts`] | Board dimensions, cell size and colors |

pub mod consts;
pub mod engine;
pub mod grid;
pub mod input;
pub mod render;
