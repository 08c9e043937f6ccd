//! Zwei kubische Segmente mit gemeinsamem Gelenkpunkt.
//!
//! Punkte P1..P7 (Index 0..6), Segment 1 = P1..P4, Segment 2 = P4..P7.
//! Invariante: P4 ist der Mittelpunkt von P3 und P5. Nach jedem Drag stellt
//! [`JointedCurve::reconcile`] sie wieder her.

use super::bezier::{cubic_bezier, midpoint, CubicBezier};
use glam::Vec3;

/// Auswahl eines der beiden Segmente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment {
    /// P1..P4
    First,
    /// P4..P7
    Second,
}

/// Zwei-Segment-Kurve mit 7 Kontrollpunkten.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JointedCurve {
    /// Kontrollpunkte P1..P7
    pub points: [Vec3; 7],
    /// True, wenn zuletzt der Gelenkpunkt gegriffen wurde
    joint_last_moved: bool,
}

impl JointedCurve {
    /// Index des gemeinsamen Gelenkpunkts P4.
    pub const JOINT_INDEX: usize = 3;
    /// Anzahl der Kontrollpunkte.
    pub const POINT_COUNT: usize = 7;

    /// Erstellt die Kurve; P4 wird als Mittelpunkt von P3 und P5 berechnet.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, p5: Vec3, p6: Vec3, p7: Vec3) -> Self {
        Self {
            points: [p1, p2, p3, midpoint(p3, p5), p5, p6, p7],
            joint_last_moved: false,
        }
    }

    /// Gemeinsamer Gelenkpunkt P4.
    pub fn joint(&self) -> Vec3 {
        self.points[Self::JOINT_INDEX]
    }

    /// Ob zuletzt der Gelenkpunkt gegriffen wurde.
    pub fn joint_last_moved(&self) -> bool {
        self.joint_last_moved
    }

    /// Merkt sich, welcher Punkt gegriffen wurde (steuert `reconcile`).
    pub fn record_pick(&mut self, index: usize) {
        self.joint_last_moved = index == Self::JOINT_INDEX;
    }

    /// Kontrollpunkte eines Segments.
    pub fn segment(&self, segment: Segment) -> CubicBezier {
        let p = &self.points;
        match segment {
            Segment::First => CubicBezier::new(p[0], p[1], p[2], p[3]),
            Segment::Second => CubicBezier::new(p[3], p[4], p[5], p[6]),
        }
    }

    /// Kurvenpunkt im gewählten Segment.
    pub fn evaluate(&self, segment: Segment, t: f32) -> Vec3 {
        let p = &self.points;
        match segment {
            Segment::First => cubic_bezier(p[0], p[1], p[2], p[3], t),
            Segment::Second => cubic_bezier(p[3], p[4], p[5], p[6], t),
        }
    }

    /// Stellt die Gelenk-Invariante wieder her.
    ///
    /// Wurde P4 zuletzt bewegt, werden P3 und P5 mitverschoben, sonst wird
    /// P4 auf den Mittelpunkt seiner Nachbarn gesetzt.
    pub fn reconcile(&mut self) {
        let j = Self::JOINT_INDEX;
        let shared = midpoint(self.points[j - 1], self.points[j + 1]);
        if shared == self.points[j] {
            return;
        }
        if self.joint_last_moved {
            let adjust = shared - self.points[j];
            self.points[j - 1] -= adjust;
            self.points[j + 1] -= adjust;
        } else {
            self.points[j] = shared;
        }
    }
}
