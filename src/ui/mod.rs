//! UI-Komponenten: Menü, Toolbar, Properties, Input-Handling.

pub mod input;
mod keyboard;
/// UI-Layer mit egui
///
/// Panels erzeugen nur `AppIntent`s, der Zustand wird nie direkt verändert.
pub mod menu;
pub mod properties;
pub mod status;
pub mod toolbar;

pub use input::InputState;
pub use menu::render_menu;
pub use properties::render_properties_panel;
pub use status::render_status_bar;
pub use toolbar::render_toolbar;
