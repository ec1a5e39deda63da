//! Headless frame dump and load summary.
//!
//! Renders a single frame without a terminal and serializes everything a
//! presentation layer would receive: grid summary, camera, viewport and the
//! ordered primitive list. [`GridSummary`] is the human-readable report printed
//! after a successful load.

use serde::Serialize;

use crate::core::{mesh, project, CameraState, DrawPrimitive, HeightGrid};
use crate::types::{Point3D, Rgb, ScreenPoint, Viewport};

/// What the viewer reports about a freshly loaded grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSummary {
    pub rows: usize,
    pub columns: usize,
    pub height_range: Option<(i32, i32)>,
    pub scale: f64,
    /// Projection of the grid center `(0, 0, 0)`.
    pub center: ScreenPoint,
}

impl GridSummary {
    pub fn new(grid: &HeightGrid, camera: &CameraState, viewport: Viewport) -> Self {
        Self {
            rows: grid.row_count(),
            columns: grid.max_columns(),
            height_range: grid.height_range(),
            scale: camera.scale,
            center: project(Point3D::new(0.0, 0.0, 0.0), camera, viewport),
        }
    }

    /// One diagnostic line per fact, in print order.
    pub fn lines(&self) -> Vec<String> {
        let mut lines = vec![format!("loaded {} rows, {} columns", self.rows, self.columns)];
        match self.height_range {
            Some((lo, hi)) => lines.push(format!("min height: {}, max height: {}", lo, hi)),
            None => lines.push("grid has no cells".to_string()),
        }
        lines.push(format!("initial scale: {}", self.scale));
        lines.push(format!(
            "center (0,0,0) projects to ({}, {})",
            self.center.x, self.center.y
        ));
        lines
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameDump {
    pub file: String,
    pub rows: usize,
    pub columns: usize,
    pub min_height: Option<i32>,
    pub max_height: Option<i32>,
    pub viewport: ViewportDump,
    pub camera: CameraDump,
    pub primitives: Vec<PrimitiveDump>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ViewportDump {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraDump {
    pub scale: f64,
    pub offset_x: f64,
    pub offset_y: f64,
    pub angle_x: f64,
    pub angle_y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PrimitiveDump {
    Line {
        from: [i32; 2],
        to: [i32; 2],
        color: [u8; 3],
    },
    Point {
        at: [i32; 2],
        color: [u8; 3],
    },
}

impl From<&DrawPrimitive> for PrimitiveDump {
    fn from(p: &DrawPrimitive) -> Self {
        match *p {
            DrawPrimitive::Line { from, to, color } => PrimitiveDump::Line {
                from: xy(from),
                to: xy(to),
                color: rgb(color),
            },
            DrawPrimitive::Point { at, color } => PrimitiveDump::Point {
                at: xy(at),
                color: rgb(color),
            },
        }
    }
}

impl From<&CameraState> for CameraDump {
    fn from(c: &CameraState) -> Self {
        Self {
            scale: c.scale,
            offset_x: c.offset_x,
            offset_y: c.offset_y,
            angle_x: c.angle_x,
            angle_y: c.angle_y,
        }
    }
}

fn xy(p: ScreenPoint) -> [i32; 2] {
    [p.x, p.y]
}

fn rgb(c: Rgb) -> [u8; 3] {
    [c.r, c.g, c.b]
}

/// Render one frame of `grid` with `camera` into a serializable dump.
pub fn dump_frame(
    file: &str,
    grid: &HeightGrid,
    camera: &CameraState,
    viewport: Viewport,
) -> FrameDump {
    let range = grid.height_range();
    FrameDump {
        file: file.to_string(),
        rows: grid.row_count(),
        columns: grid.max_columns(),
        min_height: range.map(|(lo, _)| lo),
        max_height: range.map(|(_, hi)| hi),
        viewport: ViewportDump {
            width: viewport.width,
            height: viewport.height,
        },
        camera: camera.into(),
        primitives: mesh::render(grid, camera, viewport)
            .iter()
            .map(PrimitiveDump::from)
            .collect(),
    }
}
