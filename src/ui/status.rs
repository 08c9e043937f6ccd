//! Status-Bar am unteren Bildschirmrand.

use crate::app::{AppState, Selection};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!(
                "{} | Kontrollpunkte: {}",
                state.preset.label(),
                state.point_count()
            ));

            ui.separator();

            let rotation = state.view.camera.rotation_new;
            ui.label(format!("Rotation: ({:.1}°, {:.1}°)", rotation.x, rotation.y));

            ui.separator();

            let selection = match state.selection() {
                Selection::None => "–".to_string(),
                Selection::ControlPoint(index) => format!("P{}", index + 1),
                Selection::Camera => "Kamera".to_string(),
            };
            ui.label(format!("Gegriffen: {}", selection));

            if let Some(ref msg) = state.status_message {
                ui.separator();
                ui.label(msg);
            }

            // FPS-Anzeige (rechts)
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(format!("FPS: {:.0}", ctx.input(|i| 1.0 / i.stable_dt)));
            });
        });
    });
}
