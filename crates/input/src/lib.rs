//! Terminal input module (viewer-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events onto [`crate::types::ViewKey`]s and tracks which of them are held,
//! including on terminals that never report key releases.

pub mod handler;
pub mod map;

pub use fdf_types as types;

pub use handler::HeldKeys;
pub use map::{map_key, should_quit};
