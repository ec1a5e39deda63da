//! Camera state and the per-frame input update.
//!
//! The camera is owned by the frame loop and changed only through
//! [`apply_input`], once per tick, by fixed additive steps for every held key.
//! Scale and both angles are clamped; pan offsets are unbounded.

use crate::grid::HeightGrid;
use crate::types::{
    KeySet, ViewKey, ANGLE_MAX, ANGLE_MIN, ANGLE_STEP, PAN_STEP, SCALE_MAX, SCALE_MIN, SCALE_STEP,
};

/// Scale used when there is no grid to fit.
pub const DEFAULT_SCALE: f64 = 15.0;

/// Initial tilt around the horizontal axis (radians).
pub const DEFAULT_ANGLE_X: f64 = 0.5;

/// Initial rotation around the vertical axis (radians, roughly 45°).
pub const DEFAULT_ANGLE_Y: f64 = 0.785;

/// Pixel extent the initial scale tries to fit the grid into.
pub const FIT_EXTENT: usize = 600;

/// Bounds for the fitted initial scale.
pub const FIT_SCALE_MIN: usize = 10;
pub const FIT_SCALE_MAX: usize = 25;

/// View parameters driving the projection.
///
/// `angle_x` is adjustable and clamped like `angle_y`, and shown to the user,
/// but the projection does not read it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub angle_x: f64,
    pub angle_y: f64,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            offset_x: 0.0,
            offset_y: 0.0,
            angle_x: DEFAULT_ANGLE_X,
            angle_y: DEFAULT_ANGLE_Y,
        }
    }
}

impl CameraState {
    /// Initial camera for a freshly loaded grid.
    ///
    /// Picks `FIT_EXTENT / max(rows, widest row)` clamped to
    /// `[FIT_SCALE_MIN, FIT_SCALE_MAX]`, or [`DEFAULT_SCALE`] for an empty grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use fdf_core::{grid, CameraState};
    ///
    /// let small = grid::parse("1 2\n3 4\n");
    /// assert_eq!(CameraState::for_grid(&small).scale, 25.0);
    ///
    /// let empty = grid::parse("");
    /// assert_eq!(CameraState::for_grid(&empty).scale, 15.0);
    /// ```
    pub fn for_grid(grid: &HeightGrid) -> Self {
        let rows = grid.row_count();
        let cols = grid.max_columns();
        let scale = if rows > 0 && cols > 0 {
            (FIT_EXTENT / rows.max(cols)).clamp(FIT_SCALE_MIN, FIT_SCALE_MAX) as f64
        } else {
            DEFAULT_SCALE
        };
        Self {
            scale,
            ..Self::default()
        }
    }

    /// Apply one frame of held keys in place.
    pub fn apply(&mut self, held: KeySet) {
        *self = apply_input(held, *self);
    }

    /// Stable fingerprint of the view parameters, used to skip redundant redraws.
    pub fn fingerprint(&self) -> u64 {
        let mut h: u64 = 0xcbf2_9ce4_8422_2325;
        for v in [self.scale, self.offset_x, self.offset_y, self.angle_x, self.angle_y] {
            h ^= v.to_bits();
            h = h.wrapping_mul(0x0000_0100_0000_01b3);
        }
        h
    }
}

/// One frame of camera update from the set of held keys.
///
/// Every held key applies its step; opposing keys both apply, in the order of
/// [`ViewKey::ALL`]. Clamping is the only guard, so this never fails.
pub fn apply_input(held: KeySet, state: CameraState) -> CameraState {
    let mut next = state;
    for key in held.iter() {
        match key {
            ViewKey::PanUp => next.offset_y -= PAN_STEP,
            ViewKey::PanDown => next.offset_y += PAN_STEP,
            ViewKey::PanLeft => next.offset_x -= PAN_STEP,
            ViewKey::PanRight => next.offset_x += PAN_STEP,
            ViewKey::ZoomOut => next.scale = SCALE_MIN.max(next.scale - SCALE_STEP),
            ViewKey::ZoomIn => next.scale = SCALE_MAX.min(next.scale + SCALE_STEP),
            ViewKey::RotateXUp => next.angle_x = ANGLE_MAX.min(next.angle_x + ANGLE_STEP),
            ViewKey::RotateXDown => next.angle_x = ANGLE_MIN.max(next.angle_x - ANGLE_STEP),
            ViewKey::RotateYUp => next.angle_y = ANGLE_MAX.min(next.angle_y + ANGLE_STEP),
            ViewKey::RotateYDown => next.angle_y = ANGLE_MIN.max(next.angle_y - ANGLE_STEP),
        }
    }
    next
}
