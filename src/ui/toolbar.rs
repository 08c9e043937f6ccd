//! Toolbar für die Variantenauswahl.

use crate::app::{AppIntent, AppState};
use crate::core::CurvePreset;

/// Rendert die Toolbar und gibt erzeugte Events zurück.
pub fn render_toolbar(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    let mut events = Vec::new();

    egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Variante:");
            ui.separator();

            for (number, preset) in CurvePreset::ALL.into_iter().enumerate() {
                let button = egui::Button::new(format!("{} ({})", preset.label(), number + 1));
                if ui.add(button.selected(state.preset == preset)).clicked() {
                    events.push(AppIntent::PresetSelected { preset });
                }
            }

            ui.separator();

            if ui.button("⟲ Kamera").clicked() {
                events.push(AppIntent::ResetCameraRequested);
            }

            if ui.button("⟲ Kurve").clicked() {
                events.push(AppIntent::ResetCurveRequested);
            }
        });
    });

    events
}
