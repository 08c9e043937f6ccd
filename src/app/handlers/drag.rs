//! Handler für die Drag-Session im Viewport.

use crate::app::use_cases;
use crate::app::AppState;
use glam::Vec2;

/// Greift einen Kontrollpunkt.
pub fn begin_point(state: &mut AppState, index: usize, screen_pos: Vec2) {
    use_cases::drag::begin_point_drag(state, index, screen_pos);
}

/// Startet eine Kamera-Rotation.
pub fn begin_camera(state: &mut AppState, screen_pos: Vec2) {
    use_cases::drag::begin_camera_drag(state, screen_pos);
}

/// Verschiebt den gegriffenen Punkt.
pub fn move_point(state: &mut AppState, screen_pos: Vec2) {
    use_cases::drag::drag_point_to(state, screen_pos);
}

/// Aktualisiert die laufende Kamera-Rotation.
pub fn rotate_camera(state: &mut AppState, screen_pos: Vec2) {
    use_cases::drag::rotate_camera(state, screen_pos);
}

/// Beendet den laufenden Drag.
pub fn end(state: &mut AppState) {
    use_cases::drag::end_drag(state);
}
