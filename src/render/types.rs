//! Rendering-Typen für die GPU-Pipeline.

use bytemuck::{Pod, Zeroable};

/// Gemeinsamer Kontext für die Sub-Renderer.
///
/// Bündelt die GPU-Ressourcen und View-Parameter eines Frames.
pub(crate) struct RenderContext<'a> {
    /// wgpu Device für Buffer-Allokation
    pub device: &'a eframe::wgpu::Device,
    /// wgpu Queue für Buffer-Uploads
    pub queue: &'a eframe::wgpu::Queue,
    /// Viewport-Größe in Pixeln [width, height]
    pub viewport_size: [f32; 2],
}

/// Vertex mit Pixelposition (Y nach oben) und Farbe.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    /// Position in Viewport-Pixeln
    pub position: [f32; 2],
    /// RGBA-Farbe
    pub color: [f32; 4],
}

impl ColorVertex {
    /// Erstellt einen neuen ColorVertex.
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }

    /// Beschreibt das Vertex-Layout für wgpu.
    pub const fn desc() -> eframe::wgpu::VertexBufferLayout<'static> {
        eframe::wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ColorVertex>() as eframe::wgpu::BufferAddress,
            step_mode: eframe::wgpu::VertexStepMode::Vertex,
            attributes: &[
                eframe::wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: eframe::wgpu::VertexFormat::Float32x2,
                },
                eframe::wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as eframe::wgpu::BufferAddress,
                    shader_location: 1,
                    format: eframe::wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Uniform-Daten für den Shader
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Uniforms {
    /// Viewport-Größe in Pixeln (xy), zw ungenutzt
    pub viewport: [f32; 4],
}

impl Uniforms {
    /// Uniforms für eine Viewport-Größe.
    pub fn for_viewport(viewport_size: [f32; 2]) -> Self {
        Self {
            viewport: [viewport_size[0], viewport_size[1], 0.0, 0.0],
        }
    }
}
