//! GPU-Rendering mit wgpu.

mod callback;
mod curve_renderer;
pub mod draw_list;
pub mod painter;
mod types;

pub use crate::shared::RenderScene;
pub use callback::{WgpuRenderCallback, WgpuRenderData};
pub(crate) use curve_renderer::CurveRenderer;
pub use draw_list::{DrawList, Primitive};
pub use painter::paint_scene;
pub use types::ColorVertex;
use types::RenderContext;

use eframe::egui_wgpu;

/// Umfang eines vorbereiteten Frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameStats {
    /// Linien und Scheiben in der Zeichenliste
    pub primitives: usize,
    /// Dreiecks-Vertices nach der Triangulierung
    pub vertices: usize,
}

/// Haupt-Renderer für den Kurven-Editor.
///
/// Hält Pipeline, GPU-Buffer und die wiederverwendeten Zeichen-Puffer:
/// `new()`, dann pro Frame `prepare()` + `paint()`.
pub struct Renderer {
    curve_renderer: CurveRenderer,
    draw_list: DrawList,
    /// Wiederverwendbarer Scratch-Buffer für Vertex-Daten
    vertex_scratch: Vec<ColorVertex>,
}

impl Renderer {
    /// Erstellt einen neuen Renderer
    pub fn new(render_state: &egui_wgpu::RenderState) -> Self {
        let device = &render_state.device;

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Bezier Curve Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders.wgsl").into()),
        });

        Self {
            curve_renderer: CurveRenderer::new(render_state, &shader),
            draw_list: DrawList::new(),
            vertex_scratch: Vec::new(),
        }
    }

    /// Baut die Zeichenliste der Szene und lädt sie auf die GPU.
    ///
    /// Läuft in `CallbackTrait::prepare`, also vor dem Render-Pass.
    pub fn prepare(
        &mut self,
        device: &eframe::wgpu::Device,
        queue: &eframe::wgpu::Queue,
        scene: &RenderScene,
    ) -> FrameStats {
        let stats = build_frame(scene, &mut self.draw_list, &mut self.vertex_scratch);

        let ctx = RenderContext {
            device,
            queue,
            viewport_size: scene.view.viewport.to_array(),
        };
        self.curve_renderer.upload(&ctx, &self.vertex_scratch);
        stats
    }

    /// Zeichnet den zuletzt vorbereiteten Frame.
    pub fn paint(&self, render_pass: &mut eframe::wgpu::RenderPass<'static>) {
        self.curve_renderer.draw(render_pass);
    }
}

/// Füllt Zeichenliste und Vertex-Puffer für eine Szene (ohne GPU).
fn build_frame(
    scene: &RenderScene,
    draw_list: &mut DrawList,
    vertices: &mut Vec<ColorVertex>,
) -> FrameStats {
    draw_list.clear();
    vertices.clear();

    if scene.is_drawable() {
        paint_scene(scene, draw_list);
        draw_list.triangulate(vertices);
    }

    FrameStats {
        primitives: draw_list.len(),
        vertices: vertices.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{build_render_scene, AppState};

    #[test]
    fn test_build_frame_counts_match_buffers() {
        let state = AppState::new();
        let scene = build_render_scene(&state, [640.0, 480.0], 0.0);
        let mut draw_list = DrawList::new();
        let mut vertices = Vec::new();

        let stats = build_frame(&scene, &mut draw_list, &mut vertices);

        assert!(stats.primitives > 0);
        assert_eq!(stats.primitives, draw_list.len());
        assert_eq!(stats.vertices, vertices.len());
        assert_eq!(stats.vertices % 3, 0);
    }

    #[test]
    fn test_build_frame_clears_previous_frame_for_empty_viewport() {
        let state = AppState::new();
        let mut draw_list = DrawList::new();
        let mut vertices = Vec::new();
        build_frame(
            &build_render_scene(&state, [640.0, 480.0], 0.0),
            &mut draw_list,
            &mut vertices,
        );

        let stats = build_frame(
            &build_render_scene(&state, [0.0, 0.0], 0.0),
            &mut draw_list,
            &mut vertices,
        );

        assert_eq!(stats, FrameStats::default());
        assert!(vertices.is_empty());
    }
}
