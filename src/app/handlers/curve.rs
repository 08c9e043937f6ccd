//! Handler für Kurvenvariante und Kurvendarstellung.

use crate::app::use_cases;
use crate::app::AppState;
use crate::core::{CurvePreset, TravelerMode};

/// Lädt eine Kurvenvariante.
pub fn load_preset(state: &mut AppState, preset: CurvePreset) {
    use_cases::curve::load_preset(state, preset);
}

/// Setzt die Kurve zurück.
pub fn reset(state: &mut AppState) {
    use_cases::curve::reset_curve(state);
}

/// Setzt die Auflösung.
pub fn set_resolution(state: &mut AppState, resolution: usize) {
    use_cases::curve::set_resolution(state, resolution);
}

/// Blendet das Mittelpunktnetz ein oder aus.
pub fn set_midpoint_mesh_visible(state: &mut AppState, visible: bool) {
    use_cases::curve::set_midpoint_mesh_visible(state, visible);
}

/// Setzt das Bewegungsmuster des wandernden Punkts.
pub fn set_traveler_mode(state: &mut AppState, mode: TravelerMode) {
    use_cases::curve::set_traveler_mode(state, mode);
}
