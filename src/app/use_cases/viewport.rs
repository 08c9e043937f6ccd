//! Use-Case-Funktionen für Viewport-Zustand.

use crate::app::AppState;

/// Aktualisiert die gespeicherte Viewport-Größe.
pub fn resize(state: &mut AppState, size: [f32; 2]) {
    if state.view.viewport_size != size {
        log::debug!("Viewport: {}x{}", size[0], size[1]);
    }
    state.view.viewport_size = size;
}
