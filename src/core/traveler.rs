//! Animierter Punkt, der entlang der Kurve wandert.

use serde::{Deserialize, Serialize};

/// Bewegungsmuster des wandernden Punkts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TravelerMode {
    /// Kein wandernder Punkt
    #[default]
    Off,
    /// Pendelt mit `t = (sin(time) + 1) / 2` zwischen den Enden
    Oscillate,
    /// Läuft mit 15 °/s: `t = |sin(time · 15°)|`
    Sweep,
}

impl TravelerMode {
    /// Winkelgeschwindigkeit für `Sweep` in Grad pro Sekunde.
    pub const SWEEP_DEG_PER_SEC: f64 = 15.0;

    /// Kurvenparameter zur verstrichenen Zeit, `None` wenn ausgeschaltet.
    pub fn parameter(self, elapsed_secs: f64) -> Option<f32> {
        match self {
            Self::Off => None,
            Self::Oscillate => Some(((elapsed_secs.sin() + 1.0) / 2.0) as f32),
            Self::Sweep => {
                let angle = (Self::SWEEP_DEG_PER_SEC * elapsed_secs).to_radians();
                Some(angle.sin().abs() as f32)
            }
        }
    }

    /// Ob der Punkt sich bewegt (Frame-Neuzeichnung nötig).
    pub fn is_animated(self) -> bool {
        self != Self::Off
    }

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Off => "Aus",
            Self::Oscillate => "Pendeln",
            Self::Sweep => "Durchlaufen",
        }
    }
}
