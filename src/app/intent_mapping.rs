//! Mapping von UI-Intents auf mutierende App-Commands.

use super::events::PointerButton;
use super::state::DragSession;
use super::use_cases::pick::pick_at;
use super::{AppCommand, AppIntent, AppState};
use glam::Vec2;

/// Übersetzt einen `AppIntent` in eine Sequenz ausführbarer `AppCommand`s.
pub fn map_intent_to_commands(state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
    match intent {
        AppIntent::ViewportResized { size } => vec![AppCommand::SetViewportSize { size }],
        AppIntent::PointerPressed { screen_pos, button } => {
            map_pointer_pressed(state, screen_pos, button)
        }
        AppIntent::PointerMoved { screen_pos } => match state.drag {
            DragSession::Idle => vec![],
            DragSession::DraggingPoint(_) => vec![AppCommand::DragPointTo { screen_pos }],
            DragSession::DraggingCamera { .. } => vec![AppCommand::RotateCamera { screen_pos }],
        },
        AppIntent::PointerReleased { .. } => {
            if state.drag.is_active() {
                vec![AppCommand::EndDrag]
            } else {
                vec![]
            }
        }
        AppIntent::PresetSelected { preset } => vec![AppCommand::LoadPreset { preset }],
        AppIntent::ResolutionChanged { resolution } => {
            vec![AppCommand::SetCurveResolution { resolution }]
        }
        AppIntent::PickRadiusChanged { radius_px } => vec![AppCommand::SetPickRadius { radius_px }],
        AppIntent::RotationSensitivityChanged { degrees_per_px } => {
            vec![AppCommand::SetRotationSensitivity { degrees_per_px }]
        }
        AppIntent::MidpointMeshToggled { visible } => {
            vec![AppCommand::SetMidpointMeshVisible { visible }]
        }
        AppIntent::TravelerModeChanged { mode } => vec![AppCommand::SetTravelerMode { mode }],
        AppIntent::ResetCameraRequested => vec![AppCommand::ResetCamera],
        AppIntent::ResetCurveRequested => vec![AppCommand::ResetCurve],
        AppIntent::SaveOptionsRequested => vec![AppCommand::SaveOptions],
        AppIntent::ResetOptionsRequested => vec![AppCommand::ResetOptions],
        AppIntent::ExitRequested => vec![AppCommand::RequestExit],
    }
}

/// Pointer-Down: laufenden Drag beenden, dann Punkt greifen oder Kamera drehen.
///
/// Ein Treffer mit einer anderen als der linken Taste startet nichts.
fn map_pointer_pressed(state: &AppState, screen_pos: Vec2, button: PointerButton) -> Vec<AppCommand> {
    let mut commands = Vec::with_capacity(2);
    if state.drag.is_active() {
        commands.push(AppCommand::EndDrag);
    }

    match (pick_at(state, screen_pos), button) {
        (Some(index), PointerButton::Primary) => {
            log::debug!("Pick: Kontrollpunkt {}", index);
            commands.push(AppCommand::BeginPointDrag { index, screen_pos });
        }
        (Some(index), _) => {
            log::debug!("Pick: Kontrollpunkt {} mit {:?} ignoriert", index, button);
        }
        (None, _) => commands.push(AppCommand::BeginCameraDrag { screen_pos }),
    }

    commands
}
