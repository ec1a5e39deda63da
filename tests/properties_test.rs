//! Property tests for the pure pipeline.

use std::f64::consts::TAU;

use proptest::prelude::*;

use fdf_viewer::core::{apply_input, color_for, color_for_normalized, grid, mesh, project};
use fdf_viewer::core::{CameraState, HeightGrid};
use fdf_viewer::types::{
    KeySet, Point3D, ScreenPoint, ViewKey, Viewport, ANGLE_MAX, ANGLE_MIN, SCALE_MAX, SCALE_MIN,
};

fn key_set(mask: u16) -> KeySet {
    ViewKey::ALL
        .iter()
        .copied()
        .filter(|k| mask & (1 << k.index()) != 0)
        .collect()
}

fn camera(scale: f64, angle_x: f64, angle_y: f64) -> CameraState {
    CameraState {
        scale,
        offset_x: 0.0,
        offset_y: 0.0,
        angle_x,
        angle_y,
    }
}

proptest! {
    #[test]
    fn channels_stay_in_range(n in 0.0f64..=1.0) {
        let c = color_for_normalized(n);
        prop_assert!(c.r >= 50 && c.g >= 50 && c.b >= 50);
    }

    #[test]
    fn bands_pin_one_channel(n in 0.0f64..=1.0) {
        let c = color_for_normalized(n);
        if n < 0.33 {
            prop_assert_eq!(c.b, 255);
        } else if n < 0.66 {
            prop_assert_eq!(c.g, 255);
        } else {
            prop_assert_eq!(c.r, 255);
        }
    }

    #[test]
    fn grid_extremes_hit_outer_bands(lo in -1000i32..1000, span in 1i32..1000) {
        let hi = lo + span;
        prop_assert_eq!(color_for(lo, lo, hi).b, 255);
        prop_assert_eq!(color_for(hi, lo, hi).r, 255);
    }

    #[test]
    fn camera_stays_clamped(masks in prop::collection::vec(any::<u16>(), 0..400)) {
        let mut cam = CameraState::default();
        for mask in masks {
            cam = apply_input(key_set(mask), cam);
            prop_assert!(cam.scale >= SCALE_MIN && cam.scale <= SCALE_MAX);
            prop_assert!(cam.angle_x >= ANGLE_MIN && cam.angle_x <= ANGLE_MAX);
            prop_assert!(cam.angle_y >= ANGLE_MIN && cam.angle_y <= ANGLE_MAX);
        }
    }

    #[test]
    fn origin_projects_to_viewport_center(
        scale in 5.0f64..100.0,
        angle_y in -10.0f64..10.0,
        w in 1u32..4000,
        h in 1u32..4000,
    ) {
        let p = project(Point3D::new(0.0, 0.0, 0.0), &camera(scale, 0.5, angle_y), Viewport::new(w, h));
        prop_assert_eq!(p, ScreenPoint::new((w / 2) as i32, (h / 2) as i32));
    }

    #[test]
    fn angle_x_does_not_move_points(
        x in -50.0f64..50.0,
        y in -50.0f64..50.0,
        z in -100.0f64..100.0,
        ax in 0.1f64..1.5,
        ay in 0.1f64..1.5,
    ) {
        let viewport = Viewport::new(1200, 800);
        let p = Point3D::new(x, y, z);
        prop_assert_eq!(
            project(p, &camera(15.0, 0.5, ay), viewport),
            project(p, &camera(15.0, ax, ay), viewport)
        );
    }

    #[test]
    fn rotation_is_periodic(
        x in -50i32..50,
        y in -50i32..50,
        z in -100i32..100,
        ay in 0.1f64..1.5,
    ) {
        let viewport = Viewport::new(1200, 800);
        let p = Point3D::new(x as f64, y as f64, z as f64);
        let a = project(p, &camera(15.0, 0.5, ay), viewport);
        let b = project(p, &camera(15.0, 0.5, ay + TAU), viewport);
        // Rounding at a pixel boundary may differ by one.
        prop_assert!((a.x - b.x).abs() <= 1);
        prop_assert!((a.y - b.y).abs() <= 1);
    }

    #[test]
    fn parser_never_yields_empty_rows(text in "[ 0-9a-z,\\-\n]{0,200}") {
        let g = grid::parse(&text);
        prop_assert!(g.rows().iter().all(|r| !r.is_empty()));
    }

    #[test]
    fn rectangular_mesh_counts(rows in 1usize..12, cols in 1usize..12, seed in any::<i32>()) {
        let heights: Vec<Vec<i32>> = (0..rows)
            .map(|r| (0..cols).map(|c| seed.wrapping_add((r * cols + c) as i32) % 50).collect())
            .collect();
        let g = HeightGrid::from_rows(heights);
        let camera = CameraState::for_grid(&g);
        let viewport = Viewport::new(1200, 800);
        let prims = mesh::render(&g, &camera, viewport);

        let lines = prims.iter().filter(|p| p.is_line()).count();
        prop_assert_eq!(lines, rows * (cols - 1) + (rows - 1) * cols);

        let points = prims.iter().filter(|p| p.is_point()).count();
        prop_assert!(points <= rows * cols);
        for p in &prims {
            if let fdf_viewer::core::DrawPrimitive::Point { at, .. } = p {
                prop_assert!(viewport.contains(*at));
            }
        }
    }
}
