//! Keyboard-Shortcuts für den Viewport.
//!
//! Verarbeitet globale Tasten und mappt sie auf `AppIntent`s.

use crate::app::AppIntent;
use crate::core::CurvePreset;

/// Verarbeitet Keyboard-Shortcuts und gibt AppIntents zurück.
///
/// `1`/`2`/`3` wählen die Variante, `R` setzt die Kamera zurück,
/// `C` die Kurve, `Cmd+S` speichert die Optionen.
pub(super) fn collect_keyboard_intents(ui: &egui::Ui) -> Vec<AppIntent> {
    let mut events = Vec::new();

    let (modifiers, keys) = ui.input(|i| {
        (
            i.modifiers,
            [
                i.key_pressed(egui::Key::Num1),
                i.key_pressed(egui::Key::Num2),
                i.key_pressed(egui::Key::Num3),
                i.key_pressed(egui::Key::R),
                i.key_pressed(egui::Key::C),
                i.key_pressed(egui::Key::S),
            ],
        )
    });
    let [one, two, three, key_r, key_c, key_s] = keys;

    if modifiers.command {
        if key_s {
            events.push(AppIntent::SaveOptionsRequested);
        }
        return events;
    }

    for (pressed, preset) in [one, two, three].into_iter().zip(CurvePreset::ALL) {
        if pressed {
            events.push(AppIntent::PresetSelected { preset });
        }
    }

    if key_r {
        events.push(AppIntent::ResetCameraRequested);
    }

    if key_c {
        events.push(AppIntent::ResetCurveRequested);
    }

    events
}
