//! Use-Case-Funktionen für Laufzeit-Optionen und deren Persistenz.

use crate::app::AppState;
use crate::shared::EditorOptions;
use std::path::Path;

/// Setzt den Pick-Radius. Nicht-positive Werte werden ignoriert.
pub fn set_pick_radius(state: &mut AppState, radius_px: f32) {
    if radius_px.is_finite() && radius_px > 0.0 {
        state.options.pick_radius_px = radius_px;
    } else {
        log::warn!("Ungültiger Pick-Radius ignoriert: {}", radius_px);
    }
}

/// Setzt die Rotationsempfindlichkeit (Grad pro Pixel).
pub fn set_rotation_sensitivity(state: &mut AppState, degrees_per_px: f32) {
    if degrees_per_px.is_finite() {
        state.options.rotation_sensitivity = degrees_per_px;
    } else {
        log::warn!("Ungültige Rotationsempfindlichkeit ignoriert");
    }
}

/// Speichert die aktuellen Optionen nach `path`.
pub fn save_options_to(state: &mut AppState, path: &Path) -> anyhow::Result<()> {
    state.options.save_to_file(path)?;
    state.status_message = Some(format!("Optionen gespeichert: {}", path.display()));
    Ok(())
}

/// Speichert die aktuellen Optionen neben der Binary.
pub fn save_options(state: &mut AppState) -> anyhow::Result<()> {
    save_options_to(state, &EditorOptions::config_path())
}

/// Setzt Optionen auf Standardwerte zurück und persistiert sie.
///
/// Die geladene Kurve bleibt erhalten; nur ihre Variante wird übernommen.
pub fn reset_options(state: &mut AppState) -> anyhow::Result<()> {
    let mut options = EditorOptions::default();
    options.preset = state.preset;
    options.show_midpoint_mesh = state.preset.shows_midpoint_mesh();
    options.traveler = state.preset.traveler_mode();
    state.options = options;
    save_options(state)
}
