use crate::core::{CurvePreset, TravelerMode};
use glam::Vec2;

/// Maustaste eines Pointer-Events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Linke Taste
    Primary,
    /// Rechte Taste
    Secondary,
    /// Mittlere Taste
    Middle,
}

/// App-Intent Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
///
/// Zeigerpositionen sind Viewport-Pixel mit Ursprung unten links.
#[derive(Debug, Clone, PartialEq)]
pub enum AppIntent {
    /// Viewport-Größe hat sich geändert
    ViewportResized { size: [f32; 2] },
    /// Maustaste im Viewport gedrückt
    PointerPressed {
        screen_pos: Vec2,
        button: PointerButton,
    },
    /// Zeiger bewegt (nur relevant während eines Drags)
    PointerMoved { screen_pos: Vec2 },
    /// Maustaste losgelassen
    PointerReleased { screen_pos: Vec2 },
    /// Andere Kurven-Variante gewählt
    PresetSelected { preset: CurvePreset },
    /// Auflösung im Properties-Panel geändert
    ResolutionChanged { resolution: usize },
    /// Pick-Radius im Properties-Panel geändert
    PickRadiusChanged { radius_px: f32 },
    /// Rotationsempfindlichkeit im Properties-Panel geändert
    RotationSensitivityChanged { degrees_per_px: f32 },
    /// Mittelpunktnetz ein-/ausgeblendet
    MidpointMeshToggled { visible: bool },
    /// Bewegungsmuster des wandernden Punkts geändert
    TravelerModeChanged { mode: TravelerMode },
    /// Kamera auf Standard zurücksetzen
    ResetCameraRequested,
    /// Kurve auf die Startpunkte der Variante zurücksetzen
    ResetCurveRequested,
    /// Optionen als TOML speichern
    SaveOptionsRequested,
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
    /// Anwendung beenden
    ExitRequested,
}
