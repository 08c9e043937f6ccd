//! Handler für Kamera und Viewport.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt die Kamera auf den Standardzustand zurück.
pub fn reset_camera(state: &mut AppState) {
    use_cases::camera::reset_camera(state);
}

/// Aktualisiert die Viewport-Größe im State.
pub fn set_viewport_size(state: &mut AppState, size: [f32; 2]) {
    use_cases::viewport::resize(state, size);
}
