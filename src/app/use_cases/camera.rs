//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::state::DragSession;
use crate::app::AppState;
use crate::core::OrbitCamera;

/// Setzt die Kamera auf Default zurück. Ein laufender Kamera-Drag wird verworfen.
pub fn reset_camera(state: &mut AppState) {
    state.view.camera = OrbitCamera::default();
    if matches!(state.drag, DragSession::DraggingCamera { .. }) {
        state.drag = DragSession::Idle;
    }
    log::info!("Kamera zurückgesetzt");
}
