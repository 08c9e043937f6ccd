//! Abbildung zwischen Weltkoordinaten und Viewport-Pixeln.
//!
//! Pixelkoordinaten haben den Ursprung unten links, Y zeigt nach oben.

use glam::{Mat4, Vec2, Vec3};

/// View-Matrix plus Viewport-Größe für einen Frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    /// Welt → Clip-Space
    pub matrix: Mat4,
    /// Viewport-Größe in Pixeln
    pub viewport: Vec2,
}

impl ViewTransform {
    /// Erstellt eine View-Transformation.
    pub fn new(matrix: Mat4, viewport_size: [f32; 2]) -> Self {
        Self {
            matrix,
            viewport: Vec2::from(viewport_size),
        }
    }

    /// True wenn der Viewport eine positive, endliche Fläche hat.
    pub fn is_valid(&self) -> bool {
        self.viewport.is_finite() && self.viewport.x > 0.0 && self.viewport.y > 0.0
    }

    /// Projiziert einen Weltpunkt auf Pixel und liefert zusätzlich die NDC-Tiefe.
    pub fn project_with_depth(&self, world: Vec3) -> (Vec2, f32) {
        let ndc = self.matrix.project_point3(world);
        let screen = (Vec2::new(ndc.x, ndc.y) + Vec2::ONE) * 0.5 * self.viewport;
        (screen, ndc.z)
    }

    /// Projiziert einen Weltpunkt auf Pixel.
    pub fn project(&self, world: Vec3) -> Vec2 {
        self.project_with_depth(world).0
    }

    /// Rückprojektion eines Pixels bei gegebener NDC-Tiefe in Weltkoordinaten.
    pub fn unproject(&self, screen: Vec2, depth: f32) -> Vec3 {
        let viewport = self.viewport.max(Vec2::ONE);
        let ndc = screen / viewport * 2.0 - Vec2::ONE;
        self.matrix
            .inverse()
            .project_point3(Vec3::new(ndc.x, ndc.y, depth))
    }

    /// Quadratischer Bildschirmabstand zwischen Cursor und projiziertem Weltpunkt.
    pub fn screen_distance_sq(&self, cursor: Vec2, world: Vec3) -> f32 {
        self.project(world).distance_squared(cursor)
    }
}
