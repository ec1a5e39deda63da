//! Rotating isometric projection.
//!
//! Grid points are rotated in the horizontal plane by `angle_y`, pushed through
//! a fixed 2:1 isometric transform with the height subtracted on the vertical
//! axis, then centered in the viewport and shifted by the pan offsets.
//!
//! `angle_x` is part of the camera state but does not enter this transform.

use crate::camera::CameraState;
use crate::types::{Point3D, ScreenPoint, Viewport};

/// Project a grid point into screen pixels.
///
/// Pure and total: any finite input yields a point, which may lie off-screen.
/// Fractional pixel positions truncate toward zero.
///
/// # Examples
///
/// ```
/// use fdf_core::{project, CameraState};
/// use fdf_core::types::{Point3D, ScreenPoint, Viewport};
///
/// let camera = CameraState::default();
/// let center = project(Point3D::new(0.0, 0.0, 0.0), &camera, Viewport::new(1200, 800));
/// assert_eq!(center, ScreenPoint::new(600, 400));
/// ```
pub fn project(point: Point3D, camera: &CameraState, viewport: Viewport) -> ScreenPoint {
    let (sin_y, cos_y) = camera.angle_y.sin_cos();
    project_with(point, camera, viewport, sin_y, cos_y)
}

/// Same as [`project`] with the rotation's sine/cosine precomputed.
///
/// The mesh builder projects every cell with one camera, so it evaluates the
/// trigonometry once per frame.
#[inline]
pub(crate) fn project_with(
    point: Point3D,
    camera: &CameraState,
    viewport: Viewport,
    sin_y: f64,
    cos_y: f64,
) -> ScreenPoint {
    let rx = point.x * cos_y - point.y * sin_y;
    let ry = point.x * sin_y + point.y * cos_y;

    let iso_x = (rx - ry) * camera.scale;
    let iso_y = (rx + ry) * camera.scale * 0.5 - point.z * camera.scale;

    let screen_x = iso_x + (viewport.width / 2) as f64 + camera.offset_x;
    let screen_y = iso_y + (viewport.height / 2) as f64 + camera.offset_y;

    ScreenPoint::new(screen_x as i32, screen_y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(scale: f64, angle_y: f64) -> CameraState {
        CameraState {
            scale,
            offset_x: 0.0,
            offset_y: 0.0,
            angle_x: 0.5,
            angle_y,
        }
    }

    #[test]
    fn unrotated_unit_x_moves_right_and_down() {
        // rx=1, ry=0 -> iso_x = 10, iso_y = 5.
        let p = project(Point3D::new(1.0, 0.0, 0.0), &camera(10.0, 0.0), Viewport::new(100, 100));
        assert_eq!(p, ScreenPoint::new(60, 55));
    }

    #[test]
    fn height_lifts_point_by_scale() {
        let p = project(Point3D::new(0.0, 0.0, 3.0), &camera(10.0, 0.0), Viewport::new(100, 100));
        assert_eq!(p, ScreenPoint::new(50, 20));
    }

    #[test]
    fn odd_viewport_centers_with_integer_halves() {
        let p = project(Point3D::new(0.0, 0.0, 0.0), &camera(10.0, 0.3), Viewport::new(101, 51));
        assert_eq!(p, ScreenPoint::new(50, 25));
    }

    #[test]
    fn offsets_shift_result() {
        let mut cam = camera(10.0, 0.0);
        cam.offset_x = -14.0;
        cam.offset_y = 6.0;
        let p = project(Point3D::new(0.0, 0.0, 0.0), &cam, Viewport::new(100, 100));
        assert_eq!(p, ScreenPoint::new(36, 56));
    }

    #[test]
    fn fractional_positions_truncate_toward_zero() {
        // iso_x = -0.5 * 1 => -0.5 + 0 -> 0, not -1.
        let p = project(Point3D::new(-0.5, 0.0, 0.0), &camera(1.0, 0.0), Viewport::new(0, 0));
        assert_eq!(p.x, 0);
    }

    #[test]
    fn quarter_turn_swaps_axes() {
        // angle_y = pi/2: (1,0) -> (rx, ry) = (0, 1) -> iso_x = -10, iso_y = 5.
        let p = project(
            Point3D::new(1.0, 0.0, 0.0),
            &camera(10.0, std::f64::consts::FRAC_PI_2),
            Viewport::new(100, 100),
        );
        assert_eq!(p, ScreenPoint::new(40, 55));
    }
}
