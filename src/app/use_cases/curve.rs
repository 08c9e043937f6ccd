//! Use-Case-Funktionen für Kurve und Kurvendarstellung.

use crate::app::state::DragSession;
use crate::app::AppState;
use crate::core::{CurvePreset, TravelerMode, MIN_RESOLUTION};
use crate::shared::options::CURVE_RESOLUTION_MAX;

/// Lädt die Startkurve einer Variante samt ihrer Darstellungs-Defaults.
pub fn load_preset(state: &mut AppState, preset: CurvePreset) {
    drop_point_drag(state);
    state.preset = preset;
    state.curve = preset.build();
    state.options.preset = preset;
    state.options.show_midpoint_mesh = preset.shows_midpoint_mesh();
    state.options.traveler = preset.traveler_mode();
    log::info!(
        "Variante geladen: {} ({} Kontrollpunkte)",
        preset.label(),
        state.curve.point_count()
    );
}

/// Setzt die Kurve auf die Startpunkte der aktuellen Variante zurück.
pub fn reset_curve(state: &mut AppState) {
    drop_point_drag(state);
    state.curve = state.preset.build();
    log::info!("Kurve zurückgesetzt: {}", state.preset.label());
}

/// Setzt die Stützstellen pro Segment, begrenzt auf den gültigen Bereich.
pub fn set_resolution(state: &mut AppState, resolution: usize) {
    state.options.curve_resolution = resolution.clamp(MIN_RESOLUTION, CURVE_RESOLUTION_MAX);
}

/// Blendet das Mittelpunktnetz ein oder aus.
pub fn set_midpoint_mesh_visible(state: &mut AppState, visible: bool) {
    state.options.show_midpoint_mesh = visible;
}

/// Setzt das Bewegungsmuster des wandernden Punkts.
pub fn set_traveler_mode(state: &mut AppState, mode: TravelerMode) {
    state.options.traveler = mode;
}

/// Der gegriffene Punkt kann nach dem Austausch der Kurve nicht mehr existieren.
fn drop_point_drag(state: &mut AppState) {
    if matches!(state.drag, DragSession::DraggingPoint(_)) {
        state.drag = DragSession::Idle;
    }
}
