//! Builder für Render-Szenen aus dem AppState.

use crate::app::state::Selection;
use crate::app::AppState;
use crate::shared::RenderScene;

/// Baut eine RenderScene aus dem aktuellen AppState.
///
/// `elapsed_secs` ist die Laufzeit seit Programmstart und bestimmt die
/// Position des wandernden Punkts.
pub fn build(state: &AppState, viewport_size: [f32; 2], elapsed_secs: f64) -> RenderScene {
    let selected_point = match state.selection() {
        Selection::ControlPoint(index) => Some(index),
        Selection::None | Selection::Camera => None,
    };

    let traveler = state
        .options
        .traveler
        .parameter(elapsed_secs)
        .map(|t| state.curve.evaluate(t));

    RenderScene {
        segments: state.curve.segments(),
        control_points: state.curve.control_points().to_vec(),
        selected_point,
        view: state.view.camera.view_transform(viewport_size),
        traveler,
        options: state.options.clone(),
    }
}
