//! Wireframe mesh builder.
//!
//! Walks the grid in row-major order and emits, per cell:
//!
//! 1. a `Line` to the right neighbor in the same row (if any),
//! 2. a `Line` to the cell at the same column in the next row (if that row is
//!    long enough),
//! 3. a `Point` at the cell itself, only when it lands inside the viewport.
//!
//! Lines are never culled; clipping them is the presentation layer's job.
//! Both lines take the color of the cell they start from.
//!
//! Cells are centered per row: `x = col - len(row) / 2`, `y = row - rows / 2`
//! (integer halves). The vertical neighbor keeps the current row's `x`.

use crate::camera::CameraState;
use crate::color::color_for;
use crate::grid::HeightGrid;
use crate::projection::project_with;
use crate::types::{DrawPrimitive, Point3D, Viewport};

/// Build the primitive list for one frame.
pub fn render(grid: &HeightGrid, camera: &CameraState, viewport: Viewport) -> Vec<DrawPrimitive> {
    let mut out = Vec::with_capacity(grid.cell_count() * 3);
    render_into(grid, camera, viewport, &mut out);
    out
}

/// Build the primitive list for one frame into an existing buffer.
///
/// `out` is cleared first. This is the allocation-free hot path once the buffer
/// has grown to the grid's size.
pub fn render_into(
    grid: &HeightGrid,
    camera: &CameraState,
    viewport: Viewport,
    out: &mut Vec<DrawPrimitive>,
) {
    out.clear();

    let Some((min_height, max_height)) = grid.height_range() else {
        return;
    };

    let rows = grid.rows();
    let row_count = rows.len();
    let half_rows = (row_count / 2) as f64;
    let (sin_y, cos_y) = camera.angle_y.sin_cos();
    let proj = |x: f64, y: f64, z: i32| {
        project_with(Point3D::new(x, y, z as f64), camera, viewport, sin_y, cos_y)
    };

    for (row, heights) in rows.iter().enumerate() {
        let half_cols = (heights.len() / 2) as f64;
        let y = row as f64 - half_rows;
        let below = rows.get(row + 1);

        for (col, &z) in heights.iter().enumerate() {
            let x = col as f64 - half_cols;
            let color = color_for(z, min_height, max_height);
            let here = proj(x, y, z);

            if let Some(&next_z) = heights.get(col + 1) {
                out.push(DrawPrimitive::Line {
                    from: here,
                    to: proj(x + 1.0, y, next_z),
                    color,
                });
            }

            if let Some(&next_z) = below.and_then(|r| r.get(col)) {
                out.push(DrawPrimitive::Line {
                    from: here,
                    to: proj(x, y + 1.0, next_z),
                    color,
                });
            }

            if viewport.contains(here) {
                out.push(DrawPrimitive::Point { at: here, color });
            }
        }
    }
}
