//! End-to-end tests for the pure pipeline: parse, camera fit, mesh.

use fdf_viewer::core::{color_for, grid, mesh, project, CameraState, DrawPrimitive, ParseFailure};
use fdf_viewer::types::{Point3D, ScreenPoint, Viewport};

fn straight_camera(scale: f64) -> CameraState {
    CameraState {
        scale,
        offset_x: 0.0,
        offset_y: 0.0,
        angle_x: 0.5,
        angle_y: 0.0,
    }
}

#[test]
fn parses_mixed_separators_and_garbage() {
    let g = grid::parse("0 1, 2\n\n  3 x 4  \nfoo bar\n5\n");
    assert_eq!(g.rows(), &[vec![0, 1, 2], vec![3, 4], vec![5]]);
    assert_eq!(g.row_count(), 3);
    assert_eq!(g.max_columns(), 3);
    assert_eq!(g.height_range(), Some((0, 5)));
}

#[test]
fn missing_file_reports_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.fdf");
    assert_eq!(grid::load(&path), Err(ParseFailure::NotFound(path.clone())));
}

#[test]
fn loads_file_written_to_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hill.fdf");
    std::fs::write(&path, "0 0 0\n0 9 0\n0 0 0\n").unwrap();

    let g = grid::load(&path).unwrap();
    assert_eq!(g.cell_count(), 9);
    assert_eq!(g.get(1, 1), Some(9));
    assert_eq!(CameraState::for_grid(&g).scale, 25.0);
}

#[test]
fn two_by_two_grid_exact_primitives() {
    let g = grid::parse("0 10\n20 30\n");
    let camera = straight_camera(10.0);
    let prims = mesh::render(&g, &camera, Viewport::new(1200, 800));

    let a = ScreenPoint::new(600, 390);
    let b = ScreenPoint::new(610, 295);
    let c = ScreenPoint::new(590, 195);
    let d = ScreenPoint::new(600, 100);
    let col = |h| color_for(h, 0, 30);

    assert_eq!(
        prims,
        vec![
            DrawPrimitive::Line { from: a, to: b, color: col(0) },
            DrawPrimitive::Line { from: a, to: c, color: col(0) },
            DrawPrimitive::Point { at: a, color: col(0) },
            DrawPrimitive::Line { from: b, to: d, color: col(10) },
            DrawPrimitive::Point { at: b, color: col(10) },
            DrawPrimitive::Line { from: c, to: d, color: col(20) },
            DrawPrimitive::Point { at: c, color: col(20) },
            DrawPrimitive::Point { at: d, color: col(30) },
        ]
    );
}

#[test]
fn fitted_camera_culls_points_above_viewport() {
    let g = grid::parse("0 10\n20 30\n");
    let camera = CameraState::for_grid(&g);
    assert_eq!(camera.scale, 25.0);

    let viewport = Viewport::new(1200, 800);
    let prims = mesh::render(&g, &camera, viewport);
    assert_eq!(prims.iter().filter(|p| p.is_line()).count(), 4);

    let points: Vec<ScreenPoint> = prims
        .iter()
        .filter_map(|p| match p {
            DrawPrimitive::Point { at, .. } => Some(*at),
            _ => None,
        })
        .collect();
    assert_eq!(points, vec![ScreenPoint::new(635, 382), ScreenPoint::new(635, 149)]);

    // The back row lands above the top edge; its lines are still emitted.
    assert!(project(Point3D::new(-1.0, 0.0, 20.0), &camera, viewport).y < 0);
    assert!(project(Point3D::new(0.0, 0.0, 30.0), &camera, viewport).y < 0);
}

#[test]
fn short_row_below_drops_vertical_lines() {
    let g = grid::parse("1 2 3\n4\n");
    let prims = mesh::render(&g, &CameraState::for_grid(&g), Viewport::new(1200, 800));
    let lines = prims.iter().filter(|p| p.is_line()).count();
    // Two horizontal lines in the first row, one vertical line from column 0.
    assert_eq!(lines, 3);
    assert_eq!(prims.iter().filter(|p| p.is_point()).count(), 4);
}

#[test]
fn offscreen_points_are_culled_but_lines_kept() {
    let g = grid::parse("0 0\n0 0\n");
    let mut camera = straight_camera(10.0);
    camera.offset_x = 5000.0;
    let prims = mesh::render(&g, &camera, Viewport::new(1200, 800));
    assert_eq!(prims.iter().filter(|p| p.is_point()).count(), 0);
    assert_eq!(prims.iter().filter(|p| p.is_line()).count(), 4);
}

#[test]
fn flat_grid_uses_mid_gradient() {
    let g = grid::parse("7 7\n7 7\n");
    let prims = mesh::render(&g, &CameraState::default(), Viewport::new(1200, 800));
    let expected = fdf_viewer::core::color_for_normalized(0.5);
    assert!(prims.iter().all(|p| p.color() == expected));
}

#[test]
fn panning_shifts_projection_exactly() {
    let viewport = Viewport::new(1200, 800);
    let mut camera = CameraState::default();
    let p = Point3D::new(3.0, -2.0, 4.0);
    let before = project(p, &camera, viewport);

    camera.offset_x += 2.0;
    camera.offset_y -= 2.0;
    let after = project(p, &camera, viewport);

    assert!((after.x - before.x - 2).abs() <= 1);
    assert!((after.y - before.y + 2).abs() <= 1);
}
