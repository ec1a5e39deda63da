//! WireframeView: composes the braille wireframe and the HUD into a framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::{BrailleCanvas, Stroke};
use crate::core::{CameraState, DrawPrimitive};
use crate::fb::{CellStyle, FrameBuffer, Rgb, BACKGROUND};
use crate::types::Viewport;

/// Controls legend shown under the file name.
pub const CONTROLS: [&str; 6] = [
    "Controls:",
    "WASD/arrows - pan",
    "Q/E - zoom",
    "R/F - rotate X",
    "T/G - rotate Y",
    "Esc - quit",
];

/// Values shown in the HUD overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudInfo<'a> {
    pub file_name: &'a str,
    pub scale: f64,
    pub angle_x: f64,
    pub angle_y: f64,
}

impl<'a> HudInfo<'a> {
    pub fn new(file_name: &'a str, camera: &CameraState) -> Self {
        Self {
            file_name,
            scale: camera.scale,
            angle_x: camera.angle_x,
            angle_y: camera.angle_y,
        }
    }
}

/// Terminal presentation of one wireframe frame.
#[derive(Debug, Clone, Default)]
pub struct WireframeView {
    stroke: Stroke,
    show_hud: bool,
}

impl WireframeView {
    pub fn new(stroke: Stroke) -> Self {
        Self {
            stroke,
            show_hud: true,
        }
    }

    pub fn with_hud(mut self, show_hud: bool) -> Self {
        self.show_hud = show_hud;
        self
    }

    /// Pixel viewport the core should render for a `cols × rows` terminal.
    pub fn viewport(cols: u16, rows: u16) -> Viewport {
        BrailleCanvas::viewport_for(cols, rows)
    }

    /// Rasterize `primitives` and draw the HUD into `fb`.
    ///
    /// `canvas` and `fb` are scratch buffers owned by the caller and reused
    /// across frames; both are resized to `cols × rows`.
    pub fn render_into(
        &self,
        primitives: &[DrawPrimitive],
        hud: &HudInfo<'_>,
        cols: u16,
        rows: u16,
        canvas: &mut BrailleCanvas,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(cols, rows);
        fb.clear(CellStyle::default().cell(' '));

        canvas.reset(cols, rows);
        canvas.draw_all(primitives, self.stroke);
        canvas.blit(fb);

        if self.show_hud {
            self.draw_hud(fb, hud);
        }
    }

    /// Convenience helper that allocates fresh buffers.
    pub fn render(
        &self,
        primitives: &[DrawPrimitive],
        hud: &HudInfo<'_>,
        cols: u16,
        rows: u16,
    ) -> FrameBuffer {
        let mut canvas = BrailleCanvas::new(cols, rows);
        let mut fb = FrameBuffer::new(cols, rows);
        self.render_into(primitives, hud, cols, rows, &mut canvas, &mut fb);
        fb
    }

    fn draw_hud(&self, fb: &mut FrameBuffer, hud: &HudInfo<'_>) {
        let title = CellStyle::new(Rgb::new(255, 255, 255), BACKGROUND).bold();
        let text = CellStyle::new(Rgb::new(200, 200, 200), BACKGROUND);

        let (x, mut y) = (1, 0);
        fb.put_str(x, y, &format!("File: {}", hud.file_name), title);
        y += 2;

        for line in CONTROLS {
            fb.put_str(x, y, line, text);
            y += 1;
        }

        for line in [
            format!("Scale: {:.1}", hud.scale),
            format!("Angle X: {:.2}", hud.angle_x),
            format!("Angle Y: {:.2}", hud.angle_y),
        ] {
            fb.put_str(x, y, &line, text);
            y += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ScreenPoint, Viewport};

    #[test]
    fn viewport_matches_canvas_resolution() {
        assert_eq!(WireframeView::viewport(80, 24), Viewport::new(160, 96));
    }

    #[test]
    fn hud_lists_camera_values() {
        let camera = CameraState::default();
        let view = WireframeView::new(Stroke::default());
        let fb = view.render(&[], &HudInfo::new("hills.fdf", &camera), 40, 16);

        assert!(fb.row_text(0).contains("File: hills.fdf"));
        let all: String = (0..fb.height()).map(|y| fb.row_text(y)).collect();
        assert!(all.contains("Scale: 15.0"));
        assert!(all.contains("Angle X: 0.50"));
        assert!(all.contains("Angle Y: 0.79"));
    }

    #[test]
    fn hud_can_be_hidden() {
        let camera = CameraState::default();
        let view = WireframeView::new(Stroke::default()).with_hud(false);
        let fb = view.render(&[], &HudInfo::new("x", &camera), 20, 4);
        assert!((0..4).all(|y| fb.row_text(y).trim().is_empty()));
    }

    #[test]
    fn point_primitive_becomes_braille_glyph() {
        let camera = CameraState::default();
        let view = WireframeView::new(Stroke {
            line_width: 1,
            point_radius: 0,
        })
        .with_hud(false);
        let color = Rgb::new(50, 100, 255);
        let point = DrawPrimitive::Point {
            at: ScreenPoint::new(4, 4),
            color,
        };
        let fb = view.render(&[point], &HudInfo::new("x", &camera), 4, 4);

        let cell = fb.get(2, 1).unwrap();
        assert_eq!(cell.ch, '\u{2801}');
        assert_eq!(cell.style.fg, color);
    }
}
