//! Use-Case: Drag-Session (Kontrollpunkt verschieben, Kamera drehen).

use crate::app::state::DragSession;
use crate::app::AppState;
use crate::core::PointMover;
use glam::Vec2;

/// Greift den Kontrollpunkt `index`. Ein laufender Drag wird vorher beendet.
pub fn begin_point_drag(state: &mut AppState, index: usize, screen_pos: Vec2) {
    end_drag(state);

    let Some(&world) = state.curve.control_points().get(index) else {
        log::warn!("Kontrollpunkt {} existiert nicht, Drag ignoriert", index);
        return;
    };
    let view = state.view.transform();
    if !view.is_valid() {
        return;
    }

    state.curve.record_pick(index);
    state.drag = DragSession::DraggingPoint(PointMover::down(index, world, screen_pos, &view));
    log::debug!("Punkt-Drag gestartet: Index {}", index);
}

/// Startet eine Kamera-Rotation mit `screen_pos` als Referenz.
pub fn begin_camera_drag(state: &mut AppState, screen_pos: Vec2) {
    end_drag(state);
    state.drag = DragSession::DraggingCamera {
        reference: screen_pos,
    };
    log::debug!("Kamera-Drag gestartet bei {:?}", screen_pos);
}

/// Verschiebt den gegriffenen Punkt in seiner Greif-Tiefe zum Zeiger.
pub fn drag_point_to(state: &mut AppState, screen_pos: Vec2) {
    let DragSession::DraggingPoint(mover) = state.drag else {
        return;
    };
    let view = state.view.transform();
    if !view.is_valid() {
        return;
    }

    let position = mover.drag(screen_pos, &view);
    if position.is_finite() {
        state.curve.set_point(mover.index, position);
    }
}

/// Aktualisiert die laufende Kamera-Rotation aus der Zeigerverschiebung.
pub fn rotate_camera(state: &mut AppState, screen_pos: Vec2) {
    if let DragSession::DraggingCamera { reference } = state.drag {
        let sensitivity = state.options.rotation_sensitivity;
        state.view.camera.drag_to(screen_pos, reference, sensitivity);
    }
}

/// Beendet den laufenden Drag. Kamera-Rotation wird bestätigt,
/// ein verschobener Punkt bleibt wo er ist.
pub fn end_drag(state: &mut AppState) {
    match std::mem::take(&mut state.drag) {
        DragSession::Idle => {}
        DragSession::DraggingPoint(mover) => {
            state.curve.reconcile();
            log::debug!("Punkt-Drag beendet: Index {}", mover.index);
        }
        DragSession::DraggingCamera { .. } => {
            state.view.camera.commit();
            log::debug!("Kamera-Rotation bestätigt: {:?}", state.view.camera.rotation_old);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::Selection;
    use crate::core::CurvePreset;
    use crate::shared::EditorOptions;

    fn state_with(preset: CurvePreset) -> AppState {
        let mut options = EditorOptions::default();
        options.preset = preset;
        let mut state = AppState::with_options(options);
        state.view.viewport_size = [600.0, 600.0];
        state
    }

    #[test]
    fn test_point_drag_moves_point_and_ends_idle() {
        let mut state = state_with(CurvePreset::Classic);
        let start = state.view.transform().project(state.curve.control_points()[0]);

        begin_point_drag(&mut state, 0, start);
        assert_eq!(state.selection(), Selection::ControlPoint(0));

        drag_point_to(&mut state, start + Vec2::new(30.0, 0.0));
        end_drag(&mut state);

        let moved = state.curve.control_points()[0];
        assert!((moved.x - 0.6).abs() < 1e-4, "{moved}");
        assert_eq!(state.drag, DragSession::Idle);
    }

    #[test]
    fn test_camera_drag_commits_on_end() {
        let mut state = state_with(CurvePreset::Classic);
        begin_camera_drag(&mut state, Vec2::new(100.0, 100.0));
        rotate_camera(&mut state, Vec2::new(110.0, 100.0));

        assert!((state.view.camera.rotation_new.x - 3.0).abs() < 1e-5);
        assert_eq!(state.view.camera.rotation_old, Vec2::ZERO);

        end_drag(&mut state);
        assert_eq!(state.view.camera.rotation_old, state.view.camera.rotation_new);
    }

    #[test]
    fn test_begin_drag_ends_previous_session() {
        let mut state = state_with(CurvePreset::Classic);
        begin_camera_drag(&mut state, Vec2::ZERO);
        rotate_camera(&mut state, Vec2::new(10.0, 0.0));

        let start = state.view.transform().project(state.curve.control_points()[1]);
        begin_point_drag(&mut state, 1, start);

        assert_eq!(state.view.camera.rotation_old, state.view.camera.rotation_new);
        assert_eq!(state.selection(), Selection::ControlPoint(1));
    }

    #[test]
    fn test_invalid_index_stays_idle() {
        let mut state = state_with(CurvePreset::Classic);
        begin_point_drag(&mut state, 9, Vec2::ZERO);
        assert_eq!(state.drag, DragSession::Idle);
    }

    #[test]
    fn test_moves_without_session_are_ignored() {
        let mut state = state_with(CurvePreset::Classic);
        let before = state.curve;
        drag_point_to(&mut state, Vec2::new(5.0, 5.0));
        rotate_camera(&mut state, Vec2::new(5.0, 5.0));
        assert_eq!(state.curve, before);
        assert_eq!(state.view.camera.rotation_new, Vec2::ZERO);
    }
}
