//! Verschieben eines Kontrollpunkts in der Bildebene.

use super::view::ViewTransform;
use glam::{Vec2, Vec3};

/// Drag-Zustand für einen gegriffenen Kontrollpunkt.
///
/// Hält die NDC-Tiefe des Punkts beim Greifen fest; Zeigerbewegungen werden
/// in dieser Tiefe in Weltkoordinaten zurückprojiziert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointMover {
    /// Index des gegriffenen Kontrollpunkts
    pub index: usize,
    depth: f32,
    /// Abstand projizierter Punkt − Cursor beim Greifen (Pixel)
    grab_offset: Vec2,
}

impl PointMover {
    /// Greift den Punkt `index` an Position `world` mit dem Cursor bei `cursor`.
    pub fn down(index: usize, world: Vec3, cursor: Vec2, view: &ViewTransform) -> Self {
        let (screen, depth) = view.project_with_depth(world);
        Self {
            index,
            depth,
            grab_offset: screen - cursor,
        }
    }

    /// Neue Weltposition des Punkts für die aktuelle Cursorposition.
    pub fn drag(&self, cursor: Vec2, view: &ViewTransform) -> Vec3 {
        view.unproject(cursor + self.grab_offset, self.depth)
    }
}
