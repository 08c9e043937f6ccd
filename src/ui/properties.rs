//! Properties-Panel (rechte Seitenleiste) für Kurve, Darstellung und Interaktion.

use crate::app::{AppIntent, AppState, Selection};
use crate::core::{TravelerMode, MIN_RESOLUTION};
use crate::shared::options::CURVE_RESOLUTION_MAX;

/// Rendert das Properties-Panel und gibt erzeugte Events zurück.
pub fn render_properties_panel(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::SidePanel::right("properties_panel")
        .default_width(200.0)
        .min_width(160.0)
        .resizable(true)
        .show(ctx, |ui| {
            ui.heading("Eigenschaften");
            ui.separator();

            render_selection_info(ui, state);

            ui.separator();
            render_curve_settings(ui, state, &mut events);

            ui.separator();
            render_interaction_settings(ui, state, &mut events);

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button("Speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                }
                if ui.button("Standardwerte").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                }
            });
        });

    events
}

fn render_selection_info(ui: &mut egui::Ui, state: &AppState) {
    match state.selection() {
        Selection::None => {
            ui.label("Keine Selektion");
        }
        Selection::Camera => {
            let rotation = state.view.camera.rotation_new;
            ui.label(format!("Kamera: Y {:.1}°, X {:.1}°", rotation.x, rotation.y));
        }
        Selection::ControlPoint(index) => {
            if let Some(point) = state.curve.control_points().get(index) {
                ui.label(format!("Punkt P{}", index + 1));
                ui.label(format!(
                    "Position: ({:.3}, {:.3}, {:.3})",
                    point.x, point.y, point.z
                ));
            }
        }
    }

    ui.collapsing("Kontrollpunkte", |ui| {
        egui::Grid::new("control_points_grid")
            .striped(true)
            .show(ui, |ui| {
                for (index, point) in state.curve.control_points().iter().enumerate() {
                    ui.label(format!("P{}", index + 1));
                    ui.label(format!("{:.3}", point.x));
                    ui.label(format!("{:.3}", point.y));
                    ui.label(format!("{:.3}", point.z));
                    ui.end_row();
                }
            });
    });
}

fn render_curve_settings(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Kurve");

    let mut resolution = state.options.curve_resolution;
    if ui
        .add(
            egui::Slider::new(&mut resolution, MIN_RESOLUTION..=CURVE_RESOLUTION_MAX)
                .text("Auflösung"),
        )
        .changed()
    {
        events.push(AppIntent::ResolutionChanged { resolution });
    }

    let mut show_mesh = state.options.show_midpoint_mesh;
    if ui.checkbox(&mut show_mesh, "Mittelpunktnetz").changed() {
        events.push(AppIntent::MidpointMeshToggled { visible: show_mesh });
    }

    let current = state.options.traveler;
    egui::ComboBox::from_label("Wandernder Punkt")
        .selected_text(current.label())
        .show_ui(ui, |ui| {
            for mode in [TravelerMode::Off, TravelerMode::Oscillate, TravelerMode::Sweep] {
                if ui.selectable_label(current == mode, mode.label()).clicked() && current != mode
                {
                    events.push(AppIntent::TravelerModeChanged { mode });
                }
            }
        });
}

fn render_interaction_settings(ui: &mut egui::Ui, state: &AppState, events: &mut Vec<AppIntent>) {
    ui.label("Interaktion");

    let mut radius_px = state.options.pick_radius_px;
    if ui
        .add(egui::Slider::new(&mut radius_px, 2.0..=40.0).text("Pick-Radius (px)"))
        .changed()
    {
        events.push(AppIntent::PickRadiusChanged { radius_px });
    }

    let mut degrees_per_px = state.options.rotation_sensitivity;
    if ui
        .add(egui::Slider::new(&mut degrees_per_px, 0.05..=2.0).text("Rotation (°/px)"))
        .changed()
    {
        events.push(AppIntent::RotationSensitivityChanged { degrees_per_px });
    }
}
