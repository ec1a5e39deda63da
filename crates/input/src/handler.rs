//! Held-key tracker for terminal environments.
//!
//! Camera controls act on keys that are *held*, but most terminals only send
//! press events (repeated by the OS while the key stays down) and never a
//! release. A key therefore counts as held from its last press until either a
//! release event arrives or `key_release_timeout_ms` passes without a new press.

use std::time::{Duration, Instant};

use crossterm::event::KeyCode;

use crate::map::map_key;
use crate::types::{KeySet, ViewKey};

// Long enough to bridge the gap between OS auto-repeat events, short enough
// that a single tap does not keep panning for a visible while.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks which view keys are currently held.
#[derive(Debug, Clone)]
pub struct HeldKeys {
    last_press: [Option<Instant>; ViewKey::COUNT],
    key_release_timeout_ms: u32,
}

impl HeldKeys {
    pub fn new() -> Self {
        Self {
            last_press: [None; ViewKey::COUNT],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Record a press (or auto-repeat) of `code` at `now`.
    ///
    /// Returns the view key it maps to, if any.
    pub fn handle_key_press(&mut self, code: KeyCode, now: Instant) -> Option<ViewKey> {
        let key = map_key(code)?;
        self.last_press[key.index()] = Some(now);
        Some(key)
    }

    /// Record an explicit release of `code`.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        if let Some(key) = map_key(code) {
            self.last_press[key.index()] = None;
        }
    }

    /// Keys held at `now`, auto-releasing any whose last press has timed out.
    pub fn held(&mut self, now: Instant) -> KeySet {
        let timeout = Duration::from_millis(self.key_release_timeout_ms as u64);
        let mut set = KeySet::empty();
        for key in ViewKey::ALL {
            let slot = &mut self.last_press[key.index()];
            match *slot {
                Some(at) if now.saturating_duration_since(at) <= timeout => set.insert(key),
                Some(_) => *slot = None,
                None => {}
            }
        }
        set
    }

    pub fn reset(&mut self) {
        self.last_press = [None; ViewKey::COUNT];
    }
}

impl Default for HeldKeys {
    fn default() -> Self {
        Self::new()
    }
}
