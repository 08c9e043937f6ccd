//! Handler für Optionen und Anwendungs-Lebenszyklus.

use crate::app::use_cases;
use crate::app::AppState;

/// Setzt den Pick-Radius.
pub fn set_pick_radius(state: &mut AppState, radius_px: f32) {
    use_cases::options::set_pick_radius(state, radius_px);
}

/// Setzt die Rotationsempfindlichkeit.
pub fn set_rotation_sensitivity(state: &mut AppState, degrees_per_px: f32) {
    use_cases::options::set_rotation_sensitivity(state, degrees_per_px);
}

/// Persistiert die Optionen.
pub fn save(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::save_options(state)
}

/// Setzt Optionen zurück und persistiert sie.
pub fn reset(state: &mut AppState) -> anyhow::Result<()> {
    use_cases::options::reset_options(state)
}

/// Signalisiert dem Host, die Anwendung zu beenden.
pub fn request_exit(state: &mut AppState) {
    state.should_exit = true;
}
