//! Application Controller für zentrale Event-Verarbeitung.

use super::render_scene;
use super::{AppCommand, AppIntent, AppState};
use crate::shared::RenderScene;

/// Orchestriert UI-Events und Use-Cases auf den AppState.
#[derive(Default)]
pub struct AppController;

impl AppController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(&mut self, state: &mut AppState, intent: AppIntent) -> anyhow::Result<()> {
        let commands = self.map_intent_to_commands(state, intent);
        for command in commands {
            self.handle_command(state, command)?;
        }

        Ok(())
    }

    fn map_intent_to_commands(&self, state: &AppState, intent: AppIntent) -> Vec<AppCommand> {
        super::intent_mapping::map_intent_to_commands(state, intent)
    }

    /// Führt mutierende Commands auf dem AppState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AppState,
        command: AppCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(command.clone());
        use super::handlers;

        match command {
            // === Kamera & Viewport ===
            AppCommand::SetViewportSize { size } => handlers::view::set_viewport_size(state, size),
            AppCommand::ResetCamera => handlers::view::reset_camera(state),

            // === Drag-Session ===
            AppCommand::BeginPointDrag { index, screen_pos } => {
                handlers::drag::begin_point(state, index, screen_pos)
            }
            AppCommand::BeginCameraDrag { screen_pos } => {
                handlers::drag::begin_camera(state, screen_pos)
            }
            AppCommand::DragPointTo { screen_pos } => handlers::drag::move_point(state, screen_pos),
            AppCommand::RotateCamera { screen_pos } => {
                handlers::drag::rotate_camera(state, screen_pos)
            }
            AppCommand::EndDrag => handlers::drag::end(state),

            // === Kurve ===
            AppCommand::LoadPreset { preset } => handlers::curve::load_preset(state, preset),
            AppCommand::ResetCurve => handlers::curve::reset(state),
            AppCommand::SetCurveResolution { resolution } => {
                handlers::curve::set_resolution(state, resolution)
            }
            AppCommand::SetMidpointMeshVisible { visible } => {
                handlers::curve::set_midpoint_mesh_visible(state, visible)
            }
            AppCommand::SetTravelerMode { mode } => handlers::curve::set_traveler_mode(state, mode),

            // === Optionen ===
            AppCommand::SetPickRadius { radius_px } => {
                handlers::options::set_pick_radius(state, radius_px)
            }
            AppCommand::SetRotationSensitivity { degrees_per_px } => {
                handlers::options::set_rotation_sensitivity(state, degrees_per_px)
            }
            AppCommand::SaveOptions => handlers::options::save(state)?,
            AppCommand::ResetOptions => handlers::options::reset(state)?,
            AppCommand::RequestExit => handlers::options::request_exit(state),
        }

        Ok(())
    }

    /// Stellt vor dem Rendern die Kurven-Invarianten wieder her (einmal pro Frame).
    pub fn prepare_frame(&mut self, state: &mut AppState) {
        state.curve.reconcile();
    }

    /// Baut die Render-Szene aus dem aktuellen AppState.
    pub fn build_render_scene(
        &self,
        state: &AppState,
        viewport_size: [f32; 2],
        elapsed_secs: f64,
    ) -> RenderScene {
        render_scene::build(state, viewport_size, elapsed_secs)
    }
}
