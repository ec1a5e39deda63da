//! Key mapping from terminal events to view keys.

use crate::types::ViewKey;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key code to the view control it drives.
///
/// Letter bindings follow the classic layout: `WASD` pan, `Q/E` zoom,
/// `R/F` tilt, `T/G` rotate. Arrow keys and `+`/`-` are aliases.
pub fn map_key(code: KeyCode) -> Option<ViewKey> {
    match code {
        // Pan
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(ViewKey::PanUp),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(ViewKey::PanDown),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(ViewKey::PanLeft),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(ViewKey::PanRight),

        // Zoom
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Char('-') => Some(ViewKey::ZoomOut),
        KeyCode::Char('e')
        | KeyCode::Char('E')
        | KeyCode::Char('+')
        | KeyCode::Char('=') => Some(ViewKey::ZoomIn),

        // Rotation
        KeyCode::Char('r') | KeyCode::Char('R') => Some(ViewKey::RotateXUp),
        KeyCode::Char('f') | KeyCode::Char('F') => Some(ViewKey::RotateXDown),
        KeyCode::Char('t') | KeyCode::Char('T') => Some(ViewKey::RotateYUp),
        KeyCode::Char('g') | KeyCode::Char('G') => Some(ViewKey::RotateYDown),

        _ => None,
    }
}

/// Check if key should quit the viewer.
///
/// `q` is taken by zoom, so only `Esc` and `Ctrl-C` quit.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
            && key.modifiers.contains(KeyModifiers::CONTROL))
}
