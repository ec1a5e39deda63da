//! Braille dot canvas.
//!
//! Each terminal cell holds a 2×4 block of dots rendered with the Unicode
//! braille patterns (U+2800..U+28FF), so a `cols × rows` terminal gives a
//! `2·cols × 4·rows` pixel surface. This is the surface the projection core
//! draws on: one core pixel is one dot.
//!
//! A cell has a single foreground color; the last primitive that lights any
//! of its dots decides it.

use crate::core::DrawPrimitive;
use crate::fb::{CellStyle, FrameBuffer, BACKGROUND};
use crate::types::{Rgb, ScreenPoint, Viewport};

/// Dots per cell horizontally.
pub const DOTS_X: u32 = 2;

/// Dots per cell vertically.
pub const DOTS_Y: u32 = 4;

const BRAILLE_BASE: u32 = 0x2800;

// Bit for dot (dx, dy) inside a cell, indexed [dy][dx].
const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// How primitives are rasterized, in dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
    /// Width of line strokes (at least 1).
    pub line_width: u32,
    /// Radius of the filled disc drawn for points.
    pub point_radius: u32,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            line_width: 2,
            point_radius: 4,
        }
    }
}

/// Dot surface backing the wireframe.
#[derive(Debug, Clone)]
pub struct BrailleCanvas {
    cols: u16,
    rows: u16,
    masks: Vec<u8>,
    colors: Vec<Rgb>,
}

impl BrailleCanvas {
    pub fn new(cols: u16, rows: u16) -> Self {
        let len = cols as usize * rows as usize;
        Self {
            cols,
            rows,
            masks: vec![0; len],
            colors: vec![Rgb::default(); len],
        }
    }

    /// Pixel viewport covered by a `cols × rows` cell area.
    pub fn viewport_for(cols: u16, rows: u16) -> Viewport {
        Viewport::new(cols as u32 * DOTS_X, rows as u32 * DOTS_Y)
    }

    pub fn viewport(&self) -> Viewport {
        Self::viewport_for(self.cols, self.rows)
    }

    /// Resize and clear.
    pub fn reset(&mut self, cols: u16, rows: u16) {
        let len = cols as usize * rows as usize;
        self.cols = cols;
        self.rows = rows;
        self.masks.clear();
        self.masks.resize(len, 0);
        self.colors.clear();
        self.colors.resize(len, Rgb::default());
    }

    /// Light the dot at `(x, y)`; dots off the canvas are dropped.
    pub fn set_dot(&mut self, x: i64, y: i64, color: Rgb) {
        let vp = self.viewport();
        if x < 0 || y < 0 || x >= vp.width as i64 || y >= vp.height as i64 {
            return;
        }
        let (x, y) = (x as u32, y as u32);
        let i = (y / DOTS_Y) as usize * self.cols as usize + (x / DOTS_X) as usize;
        self.masks[i] |= DOT_BITS[(y % DOTS_Y) as usize][(x % DOTS_X) as usize];
        self.colors[i] = color;
    }

    pub fn is_lit(&self, x: u32, y: u32) -> bool {
        let vp = self.viewport();
        if x >= vp.width || y >= vp.height {
            return false;
        }
        let i = (y / DOTS_Y) as usize * self.cols as usize + (x / DOTS_X) as usize;
        self.masks[i] & DOT_BITS[(y % DOTS_Y) as usize][(x % DOTS_X) as usize] != 0
    }

    /// Number of lit dots, mostly useful in tests.
    pub fn lit_count(&self) -> usize {
        self.masks.iter().map(|m| m.count_ones() as usize).sum()
    }

    pub fn draw(&mut self, primitive: &DrawPrimitive, stroke: Stroke) {
        match *primitive {
            DrawPrimitive::Line { from, to, color } => {
                self.draw_line(from, to, stroke.line_width, color)
            }
            DrawPrimitive::Point { at, color } => self.fill_disc(at, stroke.point_radius, color),
        }
    }

    pub fn draw_all(&mut self, primitives: &[DrawPrimitive], stroke: Stroke) {
        for p in primitives {
            self.draw(p, stroke);
        }
    }

    /// Bresenham line, `width` dots thick, clipped to the canvas first so that
    /// far off-screen segments cost nothing.
    pub fn draw_line(&mut self, from: ScreenPoint, to: ScreenPoint, width: u32, color: Rgb) {
        let width = width.max(1) as i64;
        let lo = -((width - 1) / 2);
        let hi = width / 2;

        let vp = self.viewport();
        let Some(((x0, y0), (x1, y1))) = clip_segment(from, to, vp, width) else {
            return;
        };

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let (mut x, mut y) = (x0, y0);
        let mut err = dx + dy;

        loop {
            for oy in lo..=hi {
                for ox in lo..=hi {
                    self.set_dot(x + ox, y + oy, color);
                }
            }
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    /// Filled disc of `radius` dots around `center`.
    pub fn fill_disc(&mut self, center: ScreenPoint, radius: u32, color: Rgb) {
        let r = radius as i64;
        let (cx, cy) = (center.x as i64, center.y as i64);
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    self.set_dot(cx + dx, cy + dy, color);
                }
            }
        }
    }

    /// Copy lit cells into `fb` as braille glyphs over the background.
    /// Unlit cells are left untouched.
    pub fn blit(&self, fb: &mut FrameBuffer) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let i = row as usize * self.cols as usize + col as usize;
                let mask = self.masks[i];
                if mask == 0 {
                    continue;
                }
                let ch = char::from_u32(BRAILLE_BASE + mask as u32).unwrap_or('⣿');
                fb.set(col, row, CellStyle::new(self.colors[i], BACKGROUND).cell(ch));
            }
        }
    }
}

/// Liang–Barsky clip of a segment against the viewport grown by `margin`.
///
/// Returns integer endpoints, or `None` when the segment misses the area.
fn clip_segment(
    from: ScreenPoint,
    to: ScreenPoint,
    vp: Viewport,
    margin: i64,
) -> Option<((i64, i64), (i64, i64))> {
    let (x0, y0) = (from.x as f64, from.y as f64);
    let (x1, y1) = (to.x as f64, to.y as f64);
    let (dx, dy) = (x1 - x0, y1 - y0);

    let m = margin as f64;
    let (xmin, ymin) = (-m, -m);
    let (xmax, ymax) = (vp.width as f64 + m, vp.height as f64 + m);

    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;
    for (p, q) in [
        (-dx, x0 - xmin),
        (dx, xmax - x0),
        (-dy, y0 - ymin),
        (dy, ymax - y0),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let a = ((x0 + t0 * dx).round() as i64, (y0 + t0 * dy).round() as i64);
    let b = ((x0 + t1 * dx).round() as i64, (y0 + t1 * dy).round() as i64);
    Some((a, b))
}
