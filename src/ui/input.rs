//! Viewport-Input-Handling: Maus-Events → AppIntent.
//!
//! Positionen werden in Viewport-Pixel mit Ursprung unten links umgerechnet.

use super::keyboard;
use crate::app::{AppIntent, PointerButton};
use glam::Vec2;

/// Verwaltet den Input-Zustand für das Viewport.
#[derive(Debug, Default)]
pub struct InputState {
    /// Eine Taste wurde im Viewport gedrückt und noch nicht losgelassen
    captured: bool,
}

impl InputState {
    /// Erstellt einen neuen, leeren Input-Zustand.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sammelt Viewport-Events aus egui-Input und gibt AppIntents zurück.
    ///
    /// Press-Events zählen nur innerhalb des Viewports; Bewegungen und
    /// Release werden weitergereicht, solange eine Taste gehalten wird,
    /// auch wenn der Zeiger den Viewport verlässt.
    pub fn collect_viewport_events(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        viewport_size: [f32; 2],
    ) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.push(AppIntent::ViewportResized {
            size: viewport_size,
        });

        events.extend(keyboard::collect_keyboard_intents(ui));

        let rect = response.rect;
        let accepts_press = response.contains_pointer();
        let raw_events = ui.input(|i| i.events.clone());

        for event in raw_events {
            match event {
                egui::Event::PointerButton {
                    pos,
                    button,
                    pressed: true,
                    ..
                } => {
                    let Some(button) = map_button(button) else {
                        continue;
                    };
                    if accepts_press && rect.contains(pos) {
                        self.captured = true;
                        events.push(AppIntent::PointerPressed {
                            screen_pos: to_viewport_pos(pos, rect),
                            button,
                        });
                    }
                }
                egui::Event::PointerButton {
                    pos,
                    pressed: false,
                    ..
                } => {
                    if self.captured {
                        self.captured = false;
                        events.push(AppIntent::PointerReleased {
                            screen_pos: to_viewport_pos(pos, rect),
                        });
                    }
                }
                egui::Event::PointerMoved(pos) if self.captured => {
                    events.push(AppIntent::PointerMoved {
                        screen_pos: to_viewport_pos(pos, rect),
                    });
                }
                _ => {}
            }
        }

        events
    }
}

/// egui-Bildschirmposition → Viewport-Pixel (Ursprung unten links, Y nach oben).
pub fn to_viewport_pos(pos: egui::Pos2, rect: egui::Rect) -> Vec2 {
    let local = pos - rect.min;
    Vec2::new(local.x, rect.height() - local.y)
}

/// Zusatztasten (Vor/Zurück) werden nicht ausgewertet.
fn map_button(button: egui::PointerButton) -> Option<PointerButton> {
    match button {
        egui::PointerButton::Primary => Some(PointerButton::Primary),
        egui::PointerButton::Secondary => Some(PointerButton::Secondary),
        egui::PointerButton::Middle => Some(PointerButton::Middle),
        egui::PointerButton::Extra1 | egui::PointerButton::Extra2 => None,
    }
}
