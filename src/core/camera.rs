//! Orbit-Kamera: akkumulierte Rotation um Y- und X-Achse.

use super::view::ViewTransform;
use glam::{Mat4, Vec2, Vec3};

/// Kamera mit bestätigter (`rotation_old`) und laufender (`rotation_new`) Rotation.
///
/// `x` dreht um die Y-Achse, `y` um die X-Achse, beides in Grad.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct OrbitCamera {
    /// Rotation nach dem letzten abgeschlossenen Drag
    pub rotation_old: Vec2,
    /// Rotation inklusive des laufenden Drags
    pub rotation_new: Vec2,
}

impl OrbitCamera {
    /// Rotationsempfindlichkeit in Grad pro Pixel.
    pub const DEFAULT_SENSITIVITY: f32 = 0.3;
    /// Nahe Clipping-Ebene der Orthoprojektion.
    pub const NEAR: f32 = -0.01;
    /// Ferne Clipping-Ebene der Orthoprojektion.
    pub const FAR: f32 = -10.0;

    /// Erstellt eine Kamera ohne Rotation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Aktualisiert die laufende Rotation aus der Zeigerverschiebung seit Drag-Beginn.
    pub fn drag_to(&mut self, cursor: Vec2, reference: Vec2, sensitivity: f32) {
        self.rotation_new = self.rotation_old + sensitivity * (cursor - reference);
    }

    /// Übernimmt die laufende Rotation (Zeiger losgelassen).
    pub fn commit(&mut self) {
        self.rotation_old = self.rotation_new;
    }

    /// Ortho(-1,1,-1,1) · Translate(0,0,1) · RotateY(x) · RotateX(y)
    pub fn view_matrix(&self) -> Mat4 {
        let ortho = Mat4::orthographic_rh_gl(-1.0, 1.0, -1.0, 1.0, Self::NEAR, Self::FAR);
        ortho
            * Mat4::from_translation(Vec3::Z)
            * Mat4::from_rotation_y(self.rotation_new.x.to_radians())
            * Mat4::from_rotation_x(self.rotation_new.y.to_radians())
    }

    /// View-Transformation für einen Viewport in Pixeln.
    pub fn view_transform(&self, viewport_size: [f32; 2]) -> ViewTransform {
        ViewTransform::new(self.view_matrix(), viewport_size)
    }
}
