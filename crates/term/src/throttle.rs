//! Redraw throttling for idle frames.
//!
//! The frame loop ticks at a fixed rate, but while no key is held the camera
//! does not move and every frame would be identical. [`RenderThrottle`] lets
//! such frames through only when the scene fingerprint changes or a minimum
//! interval has passed.

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    idle_interval_ms: u64,
    last: Option<(u64, u64)>,
    skipped: u64,
}

impl RenderThrottle {
    pub fn new(idle_interval_ms: u64) -> Self {
        Self {
            idle_interval_ms,
            last: None,
            skipped: 0,
        }
    }

    /// Decide whether to draw at `now_ms`.
    ///
    /// - First call: always draw.
    /// - `active` (a key is held): always draw.
    /// - Idle: draw when `fingerprint` differs from the last drawn frame, or at
    ///   most once per `idle_interval_ms` otherwise.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64, active: bool) -> bool {
        let draw = match self.last {
            None => true,
            Some(_) if active => true,
            Some((_, last_fp)) if last_fp != fingerprint => true,
            Some((last_ms, _)) => now_ms.saturating_sub(last_ms) >= self.idle_interval_ms,
        };
        if draw {
            self.last = Some((now_ms, fingerprint));
        } else {
            self.skipped += 1;
        }
        draw
    }

    /// Frames skipped since the last call; resets the count.
    pub fn take_skipped(&mut self) -> u64 {
        std::mem::take(&mut self.skipped)
    }

    /// Forget the last frame so the next call draws (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }
}

/// Fingerprint of everything that changes the picture: camera and terminal size.
pub fn scene_fingerprint(camera_fingerprint: u64, cols: u16, rows: u16) -> u64 {
    camera_fingerprint ^ (((cols as u64) << 48) | ((rows as u64) << 32)).rotate_left(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalidate_forces_next_frame() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert!(!t.should_render(5, 1, false));
        t.invalidate();
        assert!(t.should_render(6, 1, false));
    }

    #[test]
    fn skipped_frames_are_counted_until_taken() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 1, false));
        assert_eq!(t.take_skipped(), 0);

        assert!(!t.should_render(16, 1, false));
        assert!(!t.should_render(32, 1, false));
        assert!(!t.should_render(48, 1, false));
        assert!(t.should_render(64, 2, false));
        assert_eq!(t.take_skipped(), 3);
        assert_eq!(t.take_skipped(), 0);
    }

    #[test]
    fn fingerprint_changes_with_terminal_size() {
        assert_ne!(scene_fingerprint(9, 80, 24), scene_fingerprint(9, 81, 24));
        assert_ne!(scene_fingerprint(9, 80, 24), scene_fingerprint(9, 80, 25));
    }
}
