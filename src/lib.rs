//! FDF wireframe viewer (workspace facade crate).
//!
//! The pure pipeline lives in dedicated crates under `crates/`; this package
//! re-exports them under stable names and adds the pieces shared by the two
//! binaries: environment configuration, argument parsing, logging setup and
//! the headless JSON dump.

pub use fdf_core as core;
pub use fdf_input as input;
pub use fdf_term as term;
pub use fdf_types as types;

pub mod cli;
pub mod config;
pub mod dump;
pub mod logging;
