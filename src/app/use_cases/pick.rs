//! Use-Case: Kontrollpunkt unter dem Zeiger finden.

use crate::app::AppState;
use crate::core::ViewTransform;
use glam::{Vec2, Vec3};

/// Sucht den Kontrollpunkt, dessen Projektion dem Cursor am nächsten liegt.
///
/// Treffer nur, wenn der quadratische Pixelabstand `≤ radius_px²` ist.
/// Bei gleichem Abstand gewinnt der kleinere Index.
pub fn pick_control_point(
    points: &[Vec3],
    cursor: Vec2,
    view: &ViewTransform,
    radius_px: f32,
) -> Option<usize> {
    if !view.is_valid() {
        return None;
    }

    let threshold = radius_px * radius_px;
    let mut best: Option<(usize, f32)> = None;

    for (index, &point) in points.iter().enumerate() {
        let distance_sq = view.screen_distance_sq(cursor, point);
        if !distance_sq.is_finite() {
            continue;
        }
        match best {
            Some((_, best_sq)) if distance_sq >= best_sq => {}
            _ => best = Some((index, distance_sq)),
        }
    }

    best.filter(|&(_, distance_sq)| distance_sq <= threshold)
        .map(|(index, _)| index)
}

/// Pick mit Kurve, Kamera und Pick-Radius aus dem AppState.
pub fn pick_at(state: &AppState, cursor: Vec2) -> Option<usize> {
    pick_control_point(
        state.curve.control_points(),
        cursor,
        &state.view.transform(),
        state.options.pick_radius_px,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::OrbitCamera;

    fn view() -> ViewTransform {
        OrbitCamera::new().view_transform([600.0, 600.0])
    }

    #[test]
    fn test_pick_at_projection_hits() {
        let view = view();
        let points = [Vec3::new(-0.5, 0.0, 0.0), Vec3::new(0.5, 0.0, 0.0)];
        let cursor = view.project(points[1]);
        assert_eq!(pick_control_point(&points, cursor, &view, 10.0), Some(1));
    }

    #[test]
    fn test_pick_outside_radius_misses() {
        let view = view();
        let points = [Vec3::ZERO];
        let cursor = view.project(points[0]) + Vec2::new(11.0, 0.0);
        assert_eq!(pick_control_point(&points, cursor, &view, 10.0), None);
    }

    #[test]
    fn test_pick_on_radius_boundary_hits() {
        let view = view();
        let points = [Vec3::ZERO];
        let cursor = view.project(points[0]) + Vec2::new(10.0, 0.0);
        assert_eq!(pick_control_point(&points, cursor, &view, 10.0), Some(0));
    }

    #[test]
    fn test_pick_prefers_nearest_then_first_index() {
        let view = view();
        let points = [Vec3::ZERO, Vec3::new(0.01, 0.0, 0.0), Vec3::ZERO];
        let near_second = view.project(points[1]);
        assert_eq!(pick_control_point(&points, near_second, &view, 10.0), Some(1));

        let on_first = view.project(points[0]);
        assert_eq!(pick_control_point(&points, on_first, &view, 10.0), Some(0));
    }

    #[test]
    fn test_pick_with_empty_viewport_misses() {
        let view = OrbitCamera::new().view_transform([0.0, 0.0]);
        assert_eq!(pick_control_point(&[Vec3::ZERO], Vec2::ZERO, &view, 10.0), None);
    }
}
