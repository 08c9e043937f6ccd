//! Kurvenmodell: ein Segment oder zwei gekoppelte Segmente.

use super::bezier::CubicBezier;
use super::jointed::{JointedCurve, Segment};
use glam::Vec3;

/// Das editierbare Kurvenmodell.
///
/// Die Anzahl der Kontrollpunkte ist durch die Variante festgelegt und
/// ändert sich nach der Konstruktion nie.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CurveModel {
    /// Ein kubisches Segment (4 Punkte)
    Single(CubicBezier),
    /// Zwei Segmente mit gemeinsamem Gelenk (7 Punkte)
    Jointed(JointedCurve),
}

impl CurveModel {
    /// Alle Kontrollpunkte in Reihenfolge.
    pub fn control_points(&self) -> &[Vec3] {
        match self {
            Self::Single(curve) => &curve.points,
            Self::Jointed(curve) => &curve.points,
        }
    }

    /// Anzahl der Kontrollpunkte.
    pub fn point_count(&self) -> usize {
        self.control_points().len()
    }

    /// Setzt einen Kontrollpunkt. Ungültige Indizes werden ignoriert.
    pub fn set_point(&mut self, index: usize, position: Vec3) {
        let points: &mut [Vec3] = match self {
            Self::Single(curve) => &mut curve.points,
            Self::Jointed(curve) => &mut curve.points,
        };
        if let Some(point) = points.get_mut(index) {
            *point = position;
        } else {
            log::warn!("Kontrollpunkt {} existiert nicht ({} Punkte)", index, points.len());
        }
    }

    /// Alle kubischen Segmente der Kurve.
    pub fn segments(&self) -> Vec<CubicBezier> {
        match self {
            Self::Single(curve) => vec![*curve],
            Self::Jointed(curve) => vec![curve.segment(Segment::First), curve.segment(Segment::Second)],
        }
    }

    /// Meldet einen gegriffenen Punkt (nur für die Zwei-Segment-Variante relevant).
    pub fn record_pick(&mut self, index: usize) {
        if let Self::Jointed(curve) = self {
            curve.record_pick(index);
        }
    }

    /// Stellt variantenabhängige Invarianten wieder her (einmal pro Frame).
    pub fn reconcile(&mut self) {
        if let Self::Jointed(curve) = self {
            curve.reconcile();
        }
    }

    /// Kurvenpunkt über die gesamte Kurve, `t` in [0, 1].
    ///
    /// Bei zwei Segmenten deckt jedes Segment die Hälfte des Parameterbereichs ab.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        match self {
            Self::Single(curve) => curve.evaluate(t),
            Self::Jointed(curve) => {
                if t <= 0.5 {
                    curve.evaluate(Segment::First, t * 2.0)
                } else {
                    curve.evaluate(Segment::Second, t * 2.0 - 1.0)
                }
            }
        }
    }
}
