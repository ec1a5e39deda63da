//! Runtime configuration from `FDF_*` environment variables.
//!
//! Every value has a default; unparsable or out-of-range values are reported
//! and ignored.

use tracing::warn;

use crate::term::Stroke;
use crate::types::TICK_MS;

/// Default idle redraw interval (ms).
pub const DEFAULT_STATIC_REDRAW_MS: u64 = 250;

/// Default auto-release for held keys (ms).
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub tick_ms: u32,
    pub key_release_timeout_ms: u32,
    pub stroke: Stroke,
    pub static_redraw_ms: u64,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            tick_ms: TICK_MS,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            stroke: Stroke::default(),
            static_redraw_ms: DEFAULT_STATIC_REDRAW_MS,
        }
    }
}

impl ViewerConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Create from an arbitrary variable lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick_ms = parse_var(&lookup, "FDF_TICK_MS", defaults.tick_ms, |v| *v > 0);
        let key_release_timeout_ms = parse_var(
            &lookup,
            "FDF_KEY_RELEASE_TIMEOUT_MS",
            defaults.key_release_timeout_ms,
            |_| true,
        );
        let line_width = parse_var(
            &lookup,
            "FDF_LINE_WIDTH",
            defaults.stroke.line_width,
            |v| *v >= 1,
        );
        let point_radius = parse_var(
            &lookup,
            "FDF_POINT_RADIUS",
            defaults.stroke.point_radius,
            |v| *v <= 64,
        );
        let static_redraw_ms = parse_var(
            &lookup,
            "FDF_STATIC_REDRAW_MS",
            defaults.static_redraw_ms,
            |_| true,
        );

        Self {
            tick_ms,
            key_release_timeout_ms,
            stroke: Stroke {
                line_width,
                point_radius,
            },
            static_redraw_ms,
        }
    }
}

fn parse_var<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: T,
    valid: impl Fn(&T) -> bool,
) -> T
where
    T: std::str::FromStr + std::fmt::Display + Copy,
{
    let Some(raw) = lookup(name) else {
        return default;
    };
    let raw = raw.trim();
    if raw.is_empty() {
        return default;
    }
    match raw.parse::<T>() {
        Ok(v) if valid(&v) => v,
        _ => {
            warn!("ignoring {}={:?}, using {}", name, raw, default);
            default
        }
    }
}
