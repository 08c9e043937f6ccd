//! Bézier-Kurven-Editor.
//!
//! Interaktiver Editor für kubische Bézier-Kurven mit egui + wgpu:
//! Kontrollpunkte ziehen, Ansicht drehen, drei Kurvenvarianten.

use bezier_curve_editor::{render, ui, AppController, AppIntent, AppState, EditorOptions};
use eframe::egui;
use eframe::egui_wgpu;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "Bezier-Curve-Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([630.0, 500.0])
                .with_title("Bezier-Curve-Editor"),
            renderer: eframe::Renderer::Wgpu,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Bezier-Curve-Editor",
            options,
            Box::new(|cc| {
                let render_state = cc.wgpu_render_state.as_ref().ok_or_else(|| {
                    anyhow::anyhow!(
                        "wgpu nicht verfügbar: Renderer konnte nicht initialisiert werden"
                    )
                })?;
                Ok(Box::new(EditorApp::new(render_state)))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AppState,
    controller: AppController,
    renderer: std::sync::Arc<std::sync::Mutex<render::Renderer>>,
    input: ui::InputState,
}

impl EditorApp {
    fn new(render_state: &egui_wgpu::RenderState) -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let editor_options = EditorOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(editor_options),
            controller: AppController::new(),
            renderer: std::sync::Arc::new(std::sync::Mutex::new(render::Renderer::new(
                render_state,
            ))),
            input: ui::InputState::new(),
        }
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let mut events = Vec::new();
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        events.extend(ui::render_properties_panel(ctx, &self.state));

        let has_meaningful_events = self.show_viewport(ctx, events);

        self.maybe_request_repaint(ctx, has_meaningful_events);
    }
}

impl EditorApp {
    /// Sammelt Viewport-Input, verarbeitet alle Events und zeichnet den Frame.
    ///
    /// Reihenfolge: Events → Invarianten → Render-Szene → Paint-Callback.
    fn show_viewport(&mut self, ctx: &egui::Context, mut events: Vec<AppIntent>) -> bool {
        let background = self.state.options.background_color;
        let fill: egui::Color32 = egui::Rgba::from_rgba_unmultiplied(
            background[0],
            background[1],
            background[2],
            background[3],
        )
        .into();

        let mut has_meaningful_events = false;

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(fill))
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                let viewport_size = [rect.width(), rect.height()];

                events.extend(
                    self.input
                        .collect_viewport_events(ui, &response, viewport_size),
                );

                has_meaningful_events = events
                    .iter()
                    .any(|e| !matches!(e, AppIntent::ViewportResized { .. }));

                self.process_events(events);
                self.controller.prepare_frame(&mut self.state);

                let elapsed_secs = ui.input(|i| i.time);
                let render_data = render::WgpuRenderData {
                    scene: self.controller.build_render_scene(
                        &self.state,
                        viewport_size,
                        elapsed_secs,
                    ),
                };

                let callback = egui_wgpu::Callback::new_paint_callback(
                    rect,
                    render::WgpuRenderCallback {
                        renderer: self.renderer.clone(),
                        render_data,
                    },
                );

                ui.painter().add(callback);
            });

        has_meaningful_events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
                self.state.status_message = Some(format!("Fehler: {}", e));
            }
        }
    }

    fn maybe_request_repaint(&self, ctx: &egui::Context, has_meaningful_events: bool) {
        if has_meaningful_events
            || self.state.drag.is_active()
            || self.state.options.traveler.is_animated()
        {
            ctx.request_repaint();
        }
    }
}
