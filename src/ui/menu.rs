//! Top-Menü (Datei, Ansicht).

use crate::app::{AppIntent, AppState};
use crate::core::CurvePreset;

/// Rendert die Menü-Leiste
pub fn render_menu(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
        egui::MenuBar::new().ui(ui, |ui| {
            ui.menu_button("Datei", |ui| {
                if ui.button("Optionen speichern").clicked() {
                    events.push(AppIntent::SaveOptionsRequested);
                    ui.close();
                }

                if ui.button("Optionen zurücksetzen").clicked() {
                    events.push(AppIntent::ResetOptionsRequested);
                    ui.close();
                }

                ui.separator();

                if ui.button("Beenden").clicked() {
                    events.push(AppIntent::ExitRequested);
                    ui.close();
                }
            });

            ui.menu_button("Kurve", |ui| {
                for (number, preset) in CurvePreset::ALL.into_iter().enumerate() {
                    let label = format!("{} ({})", preset.label(), number + 1);
                    if ui
                        .add(egui::Button::new(label).selected(state.preset == preset))
                        .clicked()
                    {
                        events.push(AppIntent::PresetSelected { preset });
                        ui.close();
                    }
                }

                ui.separator();

                if ui.button("Kurve zurücksetzen (C)").clicked() {
                    events.push(AppIntent::ResetCurveRequested);
                    ui.close();
                }
            });

            ui.menu_button("Ansicht", |ui| {
                if ui.button("Kamera zurücksetzen (R)").clicked() {
                    events.push(AppIntent::ResetCameraRequested);
                    ui.close();
                }

                let mut show_mesh = state.options.show_midpoint_mesh;
                if ui.checkbox(&mut show_mesh, "Mittelpunktnetz").changed() {
                    events.push(AppIntent::MidpointMeshToggled { visible: show_mesh });
                }
            });
        });
    });

    events
}
