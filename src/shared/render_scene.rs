//! Render-Szene als expliziter Übergabevertrag zwischen App und Renderer.
//!
//! Lebt im shared-Modul, da `app` sie baut und `render` sie konsumiert.

use super::options::EditorOptions;
use crate::core::{CubicBezier, ViewTransform};
use glam::Vec3;

/// Read-only Daten für einen Render-Frame.
#[derive(Debug, Clone)]
pub struct RenderScene {
    /// Kubische Segmente der Kurve
    pub segments: Vec<CubicBezier>,
    /// Alle Kontrollpunkte in Reihenfolge (Kontrollpolygon)
    pub control_points: Vec<Vec3>,
    /// Index des aktuell gegriffenen Kontrollpunkts
    pub selected_point: Option<usize>,
    /// Welt → Viewport-Pixel für diesen Frame
    pub view: ViewTransform,
    /// Position des wandernden Punkts (falls aktiv)
    pub traveler: Option<Vec3>,
    /// Laufzeit-Optionen für Farben, Größen, Auflösung
    pub options: EditorOptions,
}

impl RenderScene {
    /// Gibt zurück, ob der Viewport gezeichnet werden kann.
    pub fn is_drawable(&self) -> bool {
        self.view.is_valid() && !self.control_points.is_empty()
    }
}
