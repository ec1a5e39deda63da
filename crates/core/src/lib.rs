//! Core projection module - pure, deterministic, and testable
//!
//! This module contains the whole height-grid pipeline: parsing, color
//! mapping, the isometric projection, the camera model and the wireframe mesh
//! builder. It has **zero dependencies** on terminals, windows or clocks, making it:
//!
//! - **Deterministic**: the same grid and camera always yield the same primitives
//! - **Testable**: every stage is a plain function of its inputs
//! - **Portable**: the terminal viewer and the headless JSON dump share it
//!
//! # Module Structure
//!
//! - [`grid`]: height grid storage, the tolerant text parser and the file loader
//! - [`color`]: three-band height-to-color gradient
//! - [`projection`]: rotating isometric projection into screen pixels
//! - [`camera`]: camera state with clamped per-frame updates from held keys
//! - [`mesh`]: per-frame wireframe builder emitting [`DrawPrimitive`]s
//! - [`generate`]: sample grid patterns (mountain, wave, random, pyramid)
//! - [`rng`]: small seeded LCG used by the random pattern
//!
//! # Example
//!
//! ```
//! use fdf_core::{grid, mesh, CameraState};
//! use fdf_core::types::Viewport;
//!
//! let grid = grid::parse("0 10\n20 30\n");
//! let camera = CameraState::for_grid(&grid);
//!
//! let primitives = mesh::render(&grid, &camera, Viewport::new(1200, 800));
//! assert_eq!(primitives.iter().filter(|p| p.is_line()).count(), 4);
//! // The two high cells of the back row project above the viewport.
//! assert_eq!(primitives.iter().filter(|p| p.is_point()).count(), 2);
//! ```
//!
//! # Frame Model
//!
//! Nothing is cached between frames: the boundary calls
//! [`CameraState::apply`](camera::CameraState::apply) with the held keys and
//! then [`mesh::render_into`] once per tick. Both are `O(rows × cols)` at most.

pub mod camera;
pub mod color;
pub mod generate;
pub mod grid;
pub mod mesh;
pub mod projection;
pub mod rng;

pub use fdf_types as types;

pub use fdf_types::DrawPrimitive;

// Re-export commonly used items for convenience
pub use camera::{apply_input, CameraState};
pub use color::{color_for, color_for_normalized};
pub use generate::Pattern;
pub use grid::{load, parse, HeightGrid, ParseFailure};
pub use mesh::{render, render_into};
pub use projection::project;
pub use rng::SimpleRng;
