//! Height-to-color gradient.
//!
//! Heights are normalized against the grid-wide range and mapped through three
//! bands:
//!
//! | Band | Normalized | Look |
//! |------|------------|------|
//! | low | `< 0.33` | blue, `b = 255` |
//! | mid | `< 0.66` | green, `g = 255` |
//! | high | otherwise | red/yellow, `r = 255` |
//!
//! The mid and high bands use their offset from the band threshold, so the
//! gradient jumps at 0.33 and 0.66. Channels are truncated to integers and then
//! clamped to `[50, 255]`.

use crate::types::{Rgb, CHANNEL_MAX, CHANNEL_MIN};

/// Upper edge (exclusive) of the low band.
pub const LOW_BAND_END: f64 = 0.33;

/// Upper edge (exclusive) of the mid band.
pub const MID_BAND_END: f64 = 0.66;

/// Normalized height used when the whole grid is flat.
pub const FLAT_NORMALIZED: f64 = 0.5;

/// Color for `height` given the grid's minimum and maximum heights.
///
/// # Examples
///
/// ```
/// use fdf_core::color::color_for;
///
/// let low = color_for(0, 0, 100);
/// assert_eq!(low.b, 255);
///
/// let high = color_for(100, 0, 100);
/// assert_eq!(high.r, 255);
/// ```
pub fn color_for(height: i32, min_height: i32, max_height: i32) -> Rgb {
    let range = max_height as f64 - min_height as f64;
    let normalized = if range == 0.0 {
        FLAT_NORMALIZED
    } else {
        (height as f64 - min_height as f64) / range
    };
    color_for_normalized(normalized)
}

/// Color for an already normalized height in `[0, 1]`.
pub fn color_for_normalized(normalized: f64) -> Rgb {
    let (r, g, b) = if normalized < LOW_BAND_END {
        (
            50.0 + normalized * 100.0,
            100.0 + normalized * 100.0,
            255.0,
        )
    } else if normalized < MID_BAND_END {
        let t = normalized - LOW_BAND_END;
        (100.0 + t * 200.0, 255.0, 255.0 - t * 200.0)
    } else {
        let t = normalized - MID_BAND_END;
        (255.0, 255.0 - t * 200.0, 50.0 - t * 50.0)
    };
    Rgb::new(channel(r), channel(g), channel(b))
}

#[inline]
fn channel(v: f64) -> u8 {
    // `as` truncates toward zero and saturates, so NaN lands on 0 before the clamp.
    (v as i32).clamp(CHANNEL_MIN, CHANNEL_MAX) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_band_starts_at_floor_blue() {
        assert_eq!(color_for_normalized(0.0), Rgb::new(50, 100, 255));
    }

    #[test]
    fn top_of_range_is_red_with_clamped_blue() {
        // g = 255 - 0.34 * 200 = 187 (truncated), b = 50 - 17 -> clamped to 50.
        let c = color_for_normalized(1.0);
        assert_eq!(c.r, 255);
        assert_eq!(c.b, 50);
        assert!((186..=187).contains(&c.g));
    }

    #[test]
    fn bands_jump_at_thresholds() {
        let below = color_for_normalized(0.3299);
        let at = color_for_normalized(0.33);
        assert_eq!(below.b, 255);
        assert_eq!(at.g, 255);
        // Mid band restarts its red ramp at 100 instead of continuing from ~83.
        assert_eq!(at.r, 100);
        assert!(below.r < at.r);

        let mid_top = color_for_normalized(0.6599);
        let high = color_for_normalized(0.66);
        assert_eq!(mid_top.g, 255);
        assert_eq!(high, Rgb::new(255, 255, 50));
    }

    #[test]
    fn flat_grid_uses_mid_gradient_everywhere() {
        let expected = color_for_normalized(FLAT_NORMALIZED);
        assert_eq!(color_for(7, 7, 7), expected);
        assert_eq!(color_for(-40, -40, -40), expected);
        assert_eq!(expected.g, 255);
    }

    #[test]
    fn extreme_ranges_do_not_overflow() {
        let c = color_for(i32::MAX, i32::MIN, i32::MAX);
        assert_eq!(c.r, 255);
        let c = color_for(i32::MIN, i32::MIN, i32::MAX);
        assert_eq!(c.b, 255);
    }
}
