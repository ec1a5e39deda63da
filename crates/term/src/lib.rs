//! Terminal presentation layer for the wireframe viewer.
//!
//! The projection core emits renderer-agnostic [`DrawPrimitive`]s in pixel
//! space. This crate turns them into terminal output: a braille canvas gives
//! 2×4 dots per cell, the HUD is written on top, and the resulting framebuffer
//! is flushed with per-run diffing.
//!
//! Goals:
//! - Keep `core` pure; everything terminal-specific lives here
//! - Reuse buffers across frames (canvas, framebuffer, previous frame)
//! - Skip idle redraws when nothing on screen can have changed
//!
//! [`DrawPrimitive`]: crate::core::DrawPrimitive

pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod throttle;
pub mod view;

pub use fdf_core as core;
pub use fdf_types as types;

pub use canvas::{BrailleCanvas, Stroke};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::{scene_fingerprint, RenderThrottle};
pub use view::{HudInfo, WireframeView};
