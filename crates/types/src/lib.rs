//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the viewer.
//! All types are plain data with no external dependencies, so they can be
//! used by the pure projection core, the terminal boundary and the headless
//! JSON dump alike.
//!
//! # Camera Bounds
//!
//! Camera parameters are clamped after every per-frame update:
//!
//! | Parameter | Range | Step per frame |
//! |-----------|-------|----------------|
//! | `scale` | `[5, 100]` | `0.5` |
//! | `angle_x` | `[0.1, 1.5]` | `0.02` rad |
//! | `angle_y` | `[0.1, 1.5]` | `0.02` rad |
//! | `offset_x` / `offset_y` | unbounded | `2` |
//!
//! # Color Channels
//!
//! Every channel of a height color lies in `[CHANNEL_MIN, CHANNEL_MAX]`
//! (`[50, 255]`).
//!
//! # Examples
//!
//! ```
//! use fdf_types::{KeySet, ViewKey, SCALE_MAX, SCALE_MIN};
//!
//! // Parse a key name (case-insensitive)
//! let key = ViewKey::from_str("zoomIn").unwrap();
//! assert_eq!(key, ViewKey::ZoomIn);
//!
//! // Track held keys
//! let mut held = KeySet::empty();
//! held.insert(key);
//! held.insert(ViewKey::PanLeft);
//! assert!(held.contains(ViewKey::ZoomIn));
//! assert_eq!(held.len(), 2);
//!
//! assert!(SCALE_MIN < SCALE_MAX);
//! ```

/// Fixed frame tick in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Minimum zoom factor (pixels per grid unit)
pub const SCALE_MIN: f64 = 5.0;

/// Maximum zoom factor (pixels per grid unit)
pub const SCALE_MAX: f64 = 100.0;

/// Zoom change per frame while a zoom key is held
pub const SCALE_STEP: f64 = 0.5;

/// Lower bound for both rotation angles (radians)
pub const ANGLE_MIN: f64 = 0.1;

/// Upper bound for both rotation angles (radians)
pub const ANGLE_MAX: f64 = 1.5;

/// Rotation change per frame while a rotate key is held (radians)
pub const ANGLE_STEP: f64 = 0.02;

/// Pan change per frame while a pan key is held (pixels)
pub const PAN_STEP: f64 = 2.0;

/// Lowest value any color channel can take
pub const CHANNEL_MIN: i32 = 50;

/// Highest value any color channel can take
pub const CHANNEL_MAX: i32 = 255;


/// 24-bit RGB color.
///
/// Height colors produced by the color mapper always keep every channel in
/// `[CHANNEL_MIN, CHANNEL_MAX]`; other colors (HUD text, background) may use
/// the full range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A grid-space coordinate.
///
/// `x`/`y` are the column/row offsets from the grid center and `z` is the raw
/// (not normalized) height value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3D {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// An integer pixel coordinate on the render surface.
///
/// May lie outside the viewport; clipping is the presentation layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Pixel dimensions of the render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Check whether a point lies inside `[0,width) x [0,height)`.
    pub fn contains(&self, p: ScreenPoint) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as i64) < self.width as i64 && (p.y as i64) < self.height as i64
    }
}

/// A renderer-agnostic draw instruction.
///
/// - **Line**: a stroke between two projected grid points
/// - **Point**: a marker at a projected grid point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawPrimitive {
    Line {
        from: ScreenPoint,
        to: ScreenPoint,
        color: Rgb,
    },
    Point {
        at: ScreenPoint,
        color: Rgb,
    },
}

impl DrawPrimitive {
    /// Color the primitive is drawn with.
    pub fn color(&self) -> Rgb {
        match self {
            DrawPrimitive::Line { color, .. } | DrawPrimitive::Point { color, .. } => *color,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawPrimitive::Line { .. })
    }

    pub fn is_point(&self) -> bool {
        matches!(self, DrawPrimitive::Point { .. })
    }
}

/// Logical view controls that can be held down.
///
/// Each key applies its camera step once per frame while held. Several keys
/// may be held at once and all of them apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    /// Move the image up (offset_y decreases)
    PanUp,
    /// Move the image down (offset_y increases)
    PanDown,
    /// Move the image left (offset_x decreases)
    PanLeft,
    /// Move the image right (offset_x increases)
    PanRight,
    /// Decrease scale
    ZoomOut,
    /// Increase scale
    ZoomIn,
    /// Increase angle_x
    RotateXUp,
    /// Decrease angle_x
    RotateXDown,
    /// Increase angle_y
    RotateYUp,
    /// Decrease angle_y
    RotateYDown,
}

impl ViewKey {
    /// Number of distinct keys.
    pub const COUNT: usize = 10;

    /// Every key, in the order the camera update applies them.
    pub const ALL: [ViewKey; ViewKey::COUNT] = [
        ViewKey::PanUp,
        ViewKey::PanDown,
        ViewKey::PanLeft,
        ViewKey::PanRight,
        ViewKey::ZoomOut,
        ViewKey::ZoomIn,
        ViewKey::RotateXUp,
        ViewKey::RotateXDown,
        ViewKey::RotateYUp,
        ViewKey::RotateYDown,
    ];

    /// Stable index into [`ViewKey::ALL`].
    pub const fn index(self) -> usize {
        match self {
            ViewKey::PanUp => 0,
            ViewKey::PanDown => 1,
            ViewKey::PanLeft => 2,
            ViewKey::PanRight => 3,
            ViewKey::ZoomOut => 4,
            ViewKey::ZoomIn => 5,
            ViewKey::RotateXUp => 6,
            ViewKey::RotateXDown => 7,
            ViewKey::RotateYUp => 8,
            ViewKey::RotateYDown => 9,
        }
    }

    /// Parse key from its camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use fdf_types::ViewKey;
    ///
    /// assert_eq!(ViewKey::from_str("panUp"), Some(ViewKey::PanUp));
    /// assert_eq!(ViewKey::from_str("ROTATEYDOWN"), Some(ViewKey::RotateYDown));
    /// assert_eq!(ViewKey::from_str("jump"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "panup" => Some(ViewKey::PanUp),
            "pandown" => Some(ViewKey::PanDown),
            "panleft" => Some(ViewKey::PanLeft),
            "panright" => Some(ViewKey::PanRight),
            "zoomout" => Some(ViewKey::ZoomOut),
            "zoomin" => Some(ViewKey::ZoomIn),
            "rotatexup" => Some(ViewKey::RotateXUp),
            "rotatexdown" => Some(ViewKey::RotateXDown),
            "rotateyup" => Some(ViewKey::RotateYUp),
            "rotateydown" => Some(ViewKey::RotateYDown),
            _ => None,
        }
    }

    /// Convert to camelCase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewKey::PanUp => "panUp",
            ViewKey::PanDown => "panDown",
            ViewKey::PanLeft => "panLeft",
            ViewKey::PanRight => "panRight",
            ViewKey::ZoomOut => "zoomOut",
            ViewKey::ZoomIn => "zoomIn",
            ViewKey::RotateXUp => "rotateXUp",
            ViewKey::RotateXDown => "rotateXDown",
            ViewKey::RotateYUp => "rotateYUp",
            ViewKey::RotateYDown => "rotateYDown",
        }
    }
}

/// Set of currently held [`ViewKey`]s, stored as a bitmask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct KeySet {
    bits: u16,
}

impl KeySet {
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn insert(&mut self, key: ViewKey) {
        self.bits |= 1 << key.index();
    }

    pub fn remove(&mut self, key: ViewKey) {
        self.bits &= !(1 << key.index());
    }

    pub fn contains(&self, key: ViewKey) -> bool {
        self.bits & (1 << key.index()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate held keys in [`ViewKey::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = ViewKey> + '_ {
        ViewKey::ALL.iter().copied().filter(|k| self.contains(*k))
    }
}

impl FromIterator<ViewKey> for KeySet {
    fn from_iter<I: IntoIterator<Item = ViewKey>>(iter: I) -> Self {
        let mut set = KeySet::empty();
        for key in iter {
            set.insert(key);
        }
        set
    }
}
