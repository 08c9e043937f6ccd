//! Vordefinierte Startkurven der drei Editor-Varianten.

use super::bezier::CubicBezier;
use super::curve::CurveModel;
use super::jointed::JointedCurve;
use super::traveler::TravelerMode;
use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Variante des Kurven-Editors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CurvePreset {
    /// Ein Segment mit pendelndem Punkt
    #[default]
    Classic,
    /// Ein Segment mit De-Casteljau-Mittelpunktnetz
    MidpointMesh,
    /// Zwei Segmente mit gemeinsamem Gelenk
    TwoSegment,
}

impl CurvePreset {
    /// Alle Varianten in UI-Reihenfolge.
    pub const ALL: [CurvePreset; 3] = [Self::Classic, Self::MidpointMesh, Self::TwoSegment];

    /// Startkurve der Variante.
    pub fn build(self) -> CurveModel {
        match self {
            Self::Classic => CurveModel::Single(CubicBezier::new(
                Vec3::new(0.5, -0.25, 0.0),
                Vec3::new(0.5, 0.25, 0.0),
                Vec3::new(-0.5, -0.25, 0.0),
                Vec3::new(-0.5, 0.25, 0.0),
            )),
            Self::MidpointMesh => CurveModel::Single(CubicBezier::new(
                Vec3::new(0.15, 0.15, 0.0),
                Vec3::new(0.25, 0.75, 0.0),
                Vec3::new(0.75, 0.75, 0.0),
                Vec3::new(0.85, 0.15, 0.0),
            )),
            Self::TwoSegment => CurveModel::Jointed(JointedCurve::new(
                Vec3::new(0.10, 0.50, 0.0),
                Vec3::new(0.25, 0.80, 0.0),
                Vec3::new(0.50, 0.80, 0.0),
                Vec3::new(0.65, 0.50, 0.0),
                Vec3::new(0.90, 0.30, 0.0),
                Vec3::new(0.95, 0.65, 0.0),
            )),
        }
    }

    /// Ob die Variante das Mittelpunktnetz standardmäßig zeigt.
    pub fn shows_midpoint_mesh(self) -> bool {
        !matches!(self, Self::Classic)
    }

    /// Standard-Bewegungsmuster des wandernden Punkts.
    pub fn traveler_mode(self) -> TravelerMode {
        match self {
            Self::Classic => TravelerMode::Oscillate,
            Self::MidpointMesh => TravelerMode::Sweep,
            Self::TwoSegment => TravelerMode::Off,
        }
    }

    /// Anzeigename für die UI.
    pub fn label(self) -> &'static str {
        match self {
            Self::Classic => "Bézier-Kurve",
            Self::MidpointMesh => "Mittelpunktnetz",
            Self::TwoSegment => "Zwei Segmente",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets_have_expected_point_counts() {
        assert_eq!(CurvePreset::Classic.build().point_count(), 4);
        assert_eq!(CurvePreset::MidpointMesh.build().point_count(), 4);
        assert_eq!(CurvePreset::TwoSegment.build().point_count(), 7);
    }

    #[test]
    fn test_two_segment_joint_starts_as_midpoint() {
        let model = CurvePreset::TwoSegment.build();
        let joint = model.control_points()[JointedCurve::JOINT_INDEX];
        assert!((joint - Vec3::new(0.575, 0.65, 0.0)).length() < 1e-5);
    }
}
