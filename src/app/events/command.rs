use crate::core::{CurvePreset, TravelerMode};
use glam::Vec2;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCommand {
    /// Viewport-Größe setzen
    SetViewportSize { size: [f32; 2] },
    /// Kontrollpunkt greifen
    BeginPointDrag { index: usize, screen_pos: Vec2 },
    /// Kamera-Drag starten; `screen_pos` wird Referenzposition
    BeginCameraDrag { screen_pos: Vec2 },
    /// Gegriffenen Kontrollpunkt zum Zeiger verschieben
    DragPointTo { screen_pos: Vec2 },
    /// Laufende Kamera-Rotation aktualisieren
    RotateCamera { screen_pos: Vec2 },
    /// Laufenden Drag beenden (Kamera-Rotation bestätigen)
    EndDrag,
    /// Kurve einer Variante laden
    LoadPreset { preset: CurvePreset },
    /// Stützstellen pro Segment setzen
    SetCurveResolution { resolution: usize },
    /// Pick-Radius setzen
    SetPickRadius { radius_px: f32 },
    /// Rotationsempfindlichkeit setzen
    SetRotationSensitivity { degrees_per_px: f32 },
    /// Mittelpunktnetz ein-/ausblenden
    SetMidpointMeshVisible { visible: bool },
    /// Bewegungsmuster des wandernden Punkts setzen
    SetTravelerMode { mode: TravelerMode },
    /// Kamera zurücksetzen
    ResetCamera,
    /// Kurve auf Startpunkte zurücksetzen
    ResetCurve,
    /// Optionen persistieren
    SaveOptions,
    /// Optionen auf Standardwerte zurücksetzen und persistieren
    ResetOptions,
    /// Anwendung beenden
    RequestExit,
}
