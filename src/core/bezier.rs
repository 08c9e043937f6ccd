//! Kubisches Bézier-Segment mit vier Kontrollpunkten.

use glam::Vec3;

/// Bernstein-Basis 3. Grades an der Stelle `t`.
///
/// Auf [0, 1] sind alle Gewichte nicht-negativ und summieren sich zu 1,
/// jeder Kurvenpunkt ist damit eine Konvexkombination der Kontrollpunkte.
pub fn bernstein_weights(t: f32) -> [f32; 4] {
    let inv = 1.0 - t;
    let inv2 = inv * inv;
    let t2 = t * t;
    [inv2 * inv, 3.0 * inv2 * t, 3.0 * inv * t2, t2 * t]
}

/// B(t) = (1-t)³·P1 + 3t(1-t)²·P2 + 3t²(1-t)·P3 + t³·P4
pub fn cubic_bezier(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3, t: f32) -> Vec3 {
    let [w1, w2, w3, w4] = bernstein_weights(t);
    w1 * p1 + w2 * p2 + w3 * p3 + w4 * p4
}

/// Mittelpunkt zweier Punkte.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    (a + b) * 0.5
}

/// De-Casteljau-Mittelpunktkette für die Netz-Visualisierung.
///
/// Ebene 0 ist das Kontrollpolygon selbst, jede weitere Ebene enthält die
/// Mittelpunkte der vorherigen, bis nur noch ein Segment (2 Punkte) übrig ist.
pub fn midpoint_chain(points: &[Vec3; 4]) -> Vec<Vec<Vec3>> {
    let mut levels = vec![points.to_vec()];
    while let Some(last) = levels.last() {
        if last.len() <= 2 {
            break;
        }
        let next: Vec<Vec3> = last.windows(2).map(|w| midpoint(w[0], w[1])).collect();
        levels.push(next);
    }
    levels
}

/// Ein kubisches Bézier-Segment P1..P4.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Kontrollpunkte in Weltkoordinaten
    pub points: [Vec3; 4],
}

impl CubicBezier {
    /// Erstellt ein Segment aus vier Kontrollpunkten.
    pub fn new(p1: Vec3, p2: Vec3, p3: Vec3, p4: Vec3) -> Self {
        Self {
            points: [p1, p2, p3, p4],
        }
    }

    /// Kurvenpunkt für Parameter `t`.
    ///
    /// `t` außerhalb von [0, 1] setzt das Polynom einfach fort.
    pub fn evaluate(&self, t: f32) -> Vec3 {
        let [p1, p2, p3, p4] = self.points;
        cubic_bezier(p1, p2, p3, p4, t)
    }

    /// Mittelpunktkette dieses Segments, siehe [`midpoint_chain`].
    pub fn midpoint_chain(&self) -> Vec<Vec<Vec3>> {
        midpoint_chain(&self.points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample_curve() -> CubicBezier {
        CubicBezier::new(
            Vec3::new(0.5, -0.25, 0.0),
            Vec3::new(0.5, 0.25, 0.0),
            Vec3::new(-0.5, -0.25, 0.0),
            Vec3::new(-0.5, 0.25, 0.0),
        )
    }

    #[test]
    fn test_evaluate_hits_endpoints() {
        let curve = sample_curve();
        assert!((curve.evaluate(0.0) - curve.points[0]).length() < 1e-6);
        assert!((curve.evaluate(1.0) - curve.points[3]).length() < 1e-6);
    }

    #[test]
    fn test_evaluate_midpoint_matches_closed_form() {
        // B(0.5) = (P1 + 3·P2 + 3·P3 + P4) / 8
        let curve = sample_curve();
        let [p1, p2, p3, p4] = curve.points;
        let expected = (p1 + 3.0 * p2 + 3.0 * p3 + p4) / 8.0;
        assert!((curve.evaluate(0.5) - expected).length() < 1e-6);
    }

    #[test]
    fn test_bernstein_weights_form_convex_combination() {
        for i in 0..=100 {
            let t = i as f32 / 100.0;
            let weights = bernstein_weights(t);
            assert!(weights.iter().all(|w| *w >= 0.0), "t = {t}");
            assert_relative_eq!(weights.iter().sum::<f32>(), 1.0, epsilon = 1e-5);
        }
    }

    #[test]
    fn test_curve_point_is_convex_combination_of_controls() {
        let curve = CubicBezier::new(
            Vec3::new(0.1, 0.5, -0.2),
            Vec3::new(0.25, 0.8, 0.3),
            Vec3::new(0.5, 0.8, 0.0),
            Vec3::new(0.65, 0.5, 0.1),
        );
        for i in 0..=64 {
            let t = i as f32 / 64.0;
            let weights = bernstein_weights(t);
            assert!(weights.iter().all(|w| *w >= 0.0), "t = {t}");
            assert_relative_eq!(weights.iter().sum::<f32>(), 1.0, epsilon = 1e-5);

            // gleiche Gewichte → Punkt liegt in der konvexen Hülle
            let combination: Vec3 = weights
                .iter()
                .zip(curve.points.iter())
                .map(|(w, p)| *w * *p)
                .sum();
            let p = curve.evaluate(t);
            assert!((p - combination).length() < 1e-5, "{p} != {combination}");
        }
    }

    #[test]
    fn test_curve_stays_inside_control_bounding_box() {
        let curve = sample_curve();
        let min = curve.points.iter().fold(Vec3::splat(f32::MAX), |a, p| a.min(*p));
        let max = curve.points.iter().fold(Vec3::splat(f32::MIN), |a, p| a.max(*p));
        for i in 0..=64 {
            let p = curve.evaluate(i as f32 / 64.0);
            assert!(p.cmpge(min - Vec3::splat(1e-6)).all(), "{p} unter {min}");
            assert!(p.cmple(max + Vec3::splat(1e-6)).all(), "{p} über {max}");
        }
    }

    #[test]
    fn test_evaluate_outside_unit_interval_is_finite() {
        let curve = sample_curve();
        assert!(curve.evaluate(-3.0).is_finite());
        assert!(curve.evaluate(7.5).is_finite());
    }

    #[test]
    fn test_midpoint_chain_levels() {
        let curve = sample_curve();
        let levels = curve.midpoint_chain();
        let sizes: Vec<usize> = levels.iter().map(Vec::len).collect();
        assert_eq!(sizes, vec![4, 3, 2]);

        // Mittelpunkt des innersten Segments liegt auf der Kurve bei t = 0.5
        let inner = &levels[2];
        let on_curve = midpoint(inner[0], inner[1]);
        assert!((on_curve - curve.evaluate(0.5)).length() < 1e-6);
    }
}
