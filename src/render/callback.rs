//! Paint-Callback: bindet den Kurven-Renderer in den egui-Frame ein.
//!
//! `prepare` baut die Zeichenliste und lädt sie hoch, `paint` zeichnet nur noch.

use super::Renderer;
use crate::shared::RenderScene;
use eframe::egui_wgpu::{CallbackResources, CallbackTrait, ScreenDescriptor};
use eframe::wgpu;
use std::sync::{Arc, Mutex};

/// Render-Daten für den wgpu Callback
pub struct WgpuRenderData {
    /// Die Render-Szene für diesen Frame
    pub scene: RenderScene,
}

/// Paint-Callback für den Viewport; ein Exemplar pro Frame.
pub struct WgpuRenderCallback {
    /// Geteilter Renderer (egui verlangt Send + Sync)
    pub renderer: Arc<Mutex<Renderer>>,
    /// Render-Daten für diesen Frame
    pub render_data: WgpuRenderData,
}

impl CallbackTrait for WgpuRenderCallback {
    fn prepare(
        &self,
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        _screen_descriptor: &ScreenDescriptor,
        _egui_encoder: &mut wgpu::CommandEncoder,
        _callback_resources: &mut CallbackResources,
    ) -> Vec<wgpu::CommandBuffer> {
        let Ok(mut renderer) = self.renderer.lock() else {
            log::error!("Renderer-Lock vergiftet, Frame wird übersprungen");
            return Vec::new();
        };

        let stats = renderer.prepare(device, queue, &self.render_data.scene);
        log::debug!(
            "Frame vorbereitet: {} Primitive, {} Vertices, Auswahl {:?}",
            stats.primitives,
            stats.vertices,
            self.render_data.scene.selected_point
        );
        Vec::new()
    }

    fn paint(
        &self,
        _info: egui::PaintCallbackInfo,
        render_pass: &mut wgpu::RenderPass<'static>,
        _callback_resources: &CallbackResources,
    ) {
        match self.renderer.lock() {
            Ok(renderer) => renderer.paint(render_pass),
            Err(_) => log::error!("Renderer-Lock vergiftet, Frame wird nicht gezeichnet"),
        }
    }
}
