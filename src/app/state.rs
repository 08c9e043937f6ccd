//! Application State: zentrale Datenhaltung.

use super::CommandLog;
use crate::core::{CurveModel, CurvePreset, OrbitCamera, PointMover, ViewTransform};
use crate::shared::EditorOptions;
use glam::Vec2;

/// Was der Zeiger zwischen Pointer-Down und Pointer-Up gegriffen hat.
///
/// Wird aus der `DragSession` abgeleitet und nie separat gespeichert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Nichts gegriffen
    #[default]
    None,
    /// Kontrollpunkt mit diesem Index
    ControlPoint(usize),
    /// Kamera-Rotation
    Camera,
}

/// Laufende Zeiger-Interaktion im Viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragSession {
    /// Keine Taste gedrückt
    #[default]
    Idle,
    /// Kontrollpunkt wird verschoben
    DraggingPoint(PointMover),
    /// Kamera wird gedreht; `reference` ist die Pointer-Down-Position
    DraggingCamera {
        /// Zeigerposition beim Drag-Beginn (Pixel, Y nach oben)
        reference: Vec2,
    },
}

impl DragSession {
    /// Gibt `true` zurück, solange eine Taste gedrückt ist.
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    /// Die aktuelle Auswahl.
    pub fn selection(&self) -> Selection {
        match self {
            Self::Idle => Selection::None,
            Self::DraggingPoint(mover) => Selection::ControlPoint(mover.index),
            Self::DraggingCamera { .. } => Selection::Camera,
        }
    }
}

/// View-bezogener Anwendungszustand
#[derive(Debug, Clone, Default)]
pub struct ViewState {
    /// Orbit-Kamera
    pub camera: OrbitCamera,
    /// Aktuelle Viewport-Größe in Pixel
    pub viewport_size: [f32; 2],
}

impl ViewState {
    /// Erstellt den Standard-View-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Welt → Pixel für den aktuellen Kamerazustand.
    pub fn transform(&self) -> ViewTransform {
        self.camera.view_transform(self.viewport_size)
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Editierbare Kurve
    pub curve: CurveModel,
    /// Variante, aus der `curve` erzeugt wurde
    pub preset: CurvePreset,
    /// View-State
    pub view: ViewState,
    /// Laufende Zeiger-Interaktion
    pub drag: DragSession,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Farben, Größen, Auflösung)
    pub options: EditorOptions,
    /// Temporäre Statusnachricht (z.B. Optionen gespeichert)
    pub status_message: Option<String>,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
}

impl AppState {
    /// Erstellt einen App-State mit Standard-Optionen.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen App-State; die Startkurve kommt aus `options.preset`.
    pub fn with_options(options: EditorOptions) -> Self {
        let preset = options.preset;
        Self {
            curve: preset.build(),
            preset,
            view: ViewState::new(),
            drag: DragSession::Idle,
            command_log: CommandLog::new(),
            options,
            status_message: None,
            should_exit: false,
        }
    }

    /// Aktuelle Auswahl (nur zwischen Pointer-Down und Pointer-Up gesetzt).
    pub fn selection(&self) -> Selection {
        self.drag.selection()
    }

    /// Anzahl der Kontrollpunkte (für UI-Anzeige)
    pub fn point_count(&self) -> usize {
        self.curve.point_count()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_uses_preset_curve() {
        let mut options = EditorOptions::default();
        options.preset = CurvePreset::TwoSegment;
        let state = AppState::with_options(options);
        assert_eq!(state.point_count(), 7);
        assert_eq!(state.selection(), Selection::None);
    }

    #[test]
    fn test_selection_follows_drag_session() {
        let mut state = AppState::new();
        state.drag = DragSession::DraggingCamera {
            reference: Vec2::new(10.0, 10.0),
        };
        assert!(state.drag.is_active());
        assert_eq!(state.selection(), Selection::Camera);
    }
}
