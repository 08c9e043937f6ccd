//! Zentrale Konfiguration für den Bézier-Kurven-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{CurvePreset, TravelerMode, MIN_RESOLUTION};
use serde::{Deserialize, Serialize};

// ── Kurve ───────────────────────────────────────────────────────────

/// Anzahl der Stützstellen pro Segment beim Zeichnen.
pub const CURVE_RESOLUTION: usize = 50;
/// Maximale Auflösung im Properties-Panel.
pub const CURVE_RESOLUTION_MAX: usize = 200;

// ── Picking & Kamera ────────────────────────────────────────────────

/// Pick-Radius in Screen-Pixeln (10 px → Schwelle 100 px²).
pub const PICK_RADIUS_PX: f32 = 10.0;
/// Kamera-Rotation in Grad pro Pixel Zeigerverschiebung.
pub const ROTATION_SENSITIVITY: f32 = 0.3;

// ── Darstellung ─────────────────────────────────────────────────────

/// Hintergrundfarbe (RGBA: Grau).
pub const BACKGROUND_COLOR: [f32; 4] = [0.6, 0.6, 0.6, 1.0];
/// Farbe der Kurve (RGBA: Violett).
pub const CURVE_COLOR: [f32; 4] = [0.7, 0.2, 0.5, 1.0];
/// Linienstärke der Kurve in Pixeln.
pub const CURVE_WIDTH_PX: f32 = 2.0;
/// Farbe des Kontrollpolygons und Mittelpunktnetzes (RGBA: Gelb).
pub const MESH_COLOR: [f32; 4] = [1.0, 1.0, 0.0, 1.0];
/// Linienstärke des Kontrollpolygons in Pixeln.
pub const MESH_WIDTH_PX: f32 = 1.5;
/// Farbe der Kontrollpunkte (RGBA: Dunkelgrün).
pub const POINT_COLOR: [f32; 4] = [0.0, 0.4, 0.0, 1.0];
/// Farbe des gegriffenen Kontrollpunkts (RGBA: Hellgrün).
pub const POINT_COLOR_SELECTED: [f32; 4] = [0.3, 1.0, 0.3, 1.0];
/// Radius der Kontrollpunkte in Pixeln.
pub const POINT_RADIUS_PX: f32 = 5.0;
/// Farbe des wandernden Punkts (RGBA: Rot).
pub const TRAVELER_COLOR: [f32; 4] = [1.0, 0.0, 0.0, 1.0];
/// Radius des wandernden Punkts in Pixeln.
pub const TRAVELER_RADIUS_PX: f32 = 6.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `bezier_curve_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kurve ───────────────────────────────────────────────────
    /// Variante beim Start
    pub preset: CurvePreset,
    /// Stützstellen pro Segment
    pub curve_resolution: usize,
    /// Mittelpunktnetz (De Casteljau) anzeigen
    pub show_midpoint_mesh: bool,
    /// Bewegungsmuster des wandernden Punkts
    pub traveler: TravelerMode,

    // ── Interaktion ─────────────────────────────────────────────
    /// Pick-Radius für Kontrollpunkte in Screen-Pixeln
    pub pick_radius_px: f32,
    /// Kamera-Rotation in Grad pro Pixel
    pub rotation_sensitivity: f32,

    // ── Farben & Größen ─────────────────────────────────────────
    /// Hintergrundfarbe
    pub background_color: [f32; 4],
    /// Farbe der Kurve
    pub curve_color: [f32; 4],
    /// Linienstärke der Kurve in Pixeln
    pub curve_width_px: f32,
    /// Farbe von Kontrollpolygon und Netz
    pub mesh_color: [f32; 4],
    /// Linienstärke von Kontrollpolygon und Netz in Pixeln
    pub mesh_width_px: f32,
    /// Farbe der Kontrollpunkte
    pub point_color: [f32; 4],
    /// Farbe des gegriffenen Kontrollpunkts
    pub point_color_selected: [f32; 4],
    /// Radius der Kontrollpunkte in Pixeln
    pub point_radius_px: f32,
    /// Farbe des wandernden Punkts
    pub traveler_color: [f32; 4],
    /// Radius des wandernden Punkts in Pixeln
    pub traveler_radius_px: f32,
}

impl Default for EditorOptions {
    fn default() -> Self {
        let preset = CurvePreset::default();
        Self {
            preset,
            curve_resolution: CURVE_RESOLUTION,
            show_midpoint_mesh: preset.shows_midpoint_mesh(),
            traveler: preset.traveler_mode(),

            pick_radius_px: PICK_RADIUS_PX,
            rotation_sensitivity: ROTATION_SENSITIVITY,

            background_color: BACKGROUND_COLOR,
            curve_color: CURVE_COLOR,
            curve_width_px: CURVE_WIDTH_PX,
            mesh_color: MESH_COLOR,
            mesh_width_px: MESH_WIDTH_PX,
            point_color: POINT_COLOR,
            point_color_selected: POINT_COLOR_SELECTED,
            point_radius_px: POINT_RADIUS_PX,
            traveler_color: TRAVELER_COLOR,
            traveler_radius_px: TRAVELER_RADIUS_PX,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text; fehlende Felder erhalten Standardwerte,
    /// ungültige Werte werden über [`Self::sanitized`] korrigiert.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let parsed: Self = toml::from_str(content)?;
        Ok(parsed.sanitized())
    }

    /// Bringt alle Werte in ihren gültigen Bereich.
    ///
    /// Auflösung wird auf `MIN_RESOLUTION..=CURVE_RESOLUTION_MAX` begrenzt.
    /// Nicht-endliche oder nicht-positive Größen und nicht-endliche Farben
    /// fallen auf ihren Standardwert zurück. Jede Korrektur wird geloggt.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        let resolution = self
            .curve_resolution
            .clamp(MIN_RESOLUTION, CURVE_RESOLUTION_MAX);
        if resolution != self.curve_resolution {
            log::warn!(
                "curve_resolution {} außerhalb von {}..={}, verwende {}",
                self.curve_resolution,
                MIN_RESOLUTION,
                CURVE_RESOLUTION_MAX,
                resolution
            );
            self.curve_resolution = resolution;
        }

        if !self.rotation_sensitivity.is_finite() {
            log::warn!(
                "rotation_sensitivity {} ungültig, verwende {}",
                self.rotation_sensitivity,
                defaults.rotation_sensitivity
            );
            self.rotation_sensitivity = defaults.rotation_sensitivity;
        }

        let sizes = [
            ("pick_radius_px", &mut self.pick_radius_px, defaults.pick_radius_px),
            ("curve_width_px", &mut self.curve_width_px, defaults.curve_width_px),
            ("mesh_width_px", &mut self.mesh_width_px, defaults.mesh_width_px),
            ("point_radius_px", &mut self.point_radius_px, defaults.point_radius_px),
            (
                "traveler_radius_px",
                &mut self.traveler_radius_px,
                defaults.traveler_radius_px,
            ),
        ];
        for (name, value, default) in sizes {
            if !(value.is_finite() && *value > 0.0) {
                log::warn!("{} {} ungültig, verwende {}", name, value, default);
                *value = default;
            }
        }

        let colors = [
            ("background_color", &mut self.background_color, defaults.background_color),
            ("curve_color", &mut self.curve_color, defaults.curve_color),
            ("mesh_color", &mut self.mesh_color, defaults.mesh_color),
            ("point_color", &mut self.point_color, defaults.point_color),
            (
                "point_color_selected",
                &mut self.point_color_selected,
                defaults.point_color_selected,
            ),
            ("traveler_color", &mut self.traveler_color, defaults.traveler_color),
        ];
        for (name, value, default) in colors {
            if !value.iter().all(|c| c.is_finite()) {
                log::warn!("{} {:?} ungültig, verwende Standardfarbe", name, value);
                *value = default;
            }
        }

        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("bezier_curve_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("bezier_curve_editor.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toml_roundtrip_keeps_values() {
        let mut options = EditorOptions::default();
        options.preset = CurvePreset::TwoSegment;
        options.curve_resolution = 120;
        options.traveler = TravelerMode::Sweep;

        let text = toml::to_string_pretty(&options).expect("Serialisierung");
        let parsed = EditorOptions::from_toml(&text).expect("Parsen");
        assert_eq!(parsed, options);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed = EditorOptions::from_toml("curve_resolution = 12\n").expect("Parsen");
        assert_eq!(parsed.curve_resolution, 12);
        assert_eq!(parsed.pick_radius_px, PICK_RADIUS_PX);
        assert_eq!(parsed.preset, CurvePreset::Classic);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        let parsed = EditorOptions::from_toml(
            "curve_resolution = 4000000000000000000\n\
             pick_radius_px = nan\n\
             rotation_sensitivity = inf\n\
             point_radius_px = -4.0\n\
             curve_color = [0.1, nan, 0.3, 1.0]\n",
        )
        .expect("Parsen");

        assert_eq!(parsed.curve_resolution, CURVE_RESOLUTION_MAX);
        assert_eq!(parsed.pick_radius_px, PICK_RADIUS_PX);
        assert_eq!(parsed.rotation_sensitivity, ROTATION_SENSITIVITY);
        assert_eq!(parsed.point_radius_px, POINT_RADIUS_PX);
        assert_eq!(parsed.curve_color, CURVE_COLOR);
    }

    #[test]
    fn test_resolution_below_minimum_is_raised() {
        let parsed = EditorOptions::from_toml("curve_resolution = 0\n").expect("Parsen");
        assert_eq!(parsed.curve_resolution, MIN_RESOLUTION);
    }

    #[test]
    fn test_sanitized_keeps_valid_values() {
        let mut options = EditorOptions::default();
        options.curve_resolution = 120;
        options.pick_radius_px = 14.0;
        options.rotation_sensitivity = -0.5;
        assert_eq!(options.clone().sanitized(), options);
    }

    #[test]
    fn test_load_from_file_sanitizes_values() {
        let path = std::env::temp_dir().join(format!(
            "bezier_curve_editor_clamped_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "curve_resolution = 4000000000000000000\npick_radius_px = nan\n")
            .expect("Schreiben");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options.curve_resolution, CURVE_RESOLUTION_MAX);
        assert_eq!(options.pick_radius_px, PICK_RADIUS_PX);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_broken_file_uses_defaults() {
        let path = std::env::temp_dir().join(format!(
            "bezier_curve_editor_broken_{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "curve_resolution = \"viele\"").expect("Schreiben");

        let options = EditorOptions::load_from_file(&path);
        assert_eq!(options, EditorOptions::default());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_save_then_load() {
        let path = std::env::temp_dir().join(format!(
            "bezier_curve_editor_roundtrip_{}.toml",
            std::process::id()
        ));
        let mut options = EditorOptions::default();
        options.pick_radius_px = 14.0;
        options.save_to_file(&path).expect("Speichern");

        let loaded = EditorOptions::load_from_file(&path);
        assert_eq!(loaded.pick_radius_px, 14.0);

        let _ = std::fs::remove_file(&path);
    }
}
