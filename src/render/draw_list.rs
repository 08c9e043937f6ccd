//! Zeichenliste aus Linien und Scheiben in Viewport-Pixeln.
//!
//! Der Painter füllt die Liste, `triangulate` erzeugt daraus die
//! Dreiecksliste für die GPU.

use super::types::ColorVertex;
use glam::Vec2;
use std::f32::consts::TAU;

/// Ein Zeichenbefehl in Viewport-Pixeln (Y nach oben).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// Liniensegment mit Breite in Pixeln
    Line {
        start: Vec2,
        end: Vec2,
        color: [f32; 4],
        width_px: f32,
    },
    /// Gefüllte Kreisscheibe
    Disk {
        center: Vec2,
        radius_px: f32,
        color: [f32; 4],
    },
}

/// Geordnete Liste von Zeichenbefehlen; spätere Einträge liegen oben.
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    primitives: Vec<Primitive>,
}

impl DrawList {
    /// Anzahl der Dreieckssegmente einer Scheibe.
    pub const DISK_SEGMENTS: usize = 24;

    /// Erstellt eine leere Zeichenliste.
    pub fn new() -> Self {
        Self::default()
    }

    /// Leert die Liste, behält die Allokation.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// Fügt ein Liniensegment hinzu.
    pub fn line(&mut self, start: Vec2, end: Vec2, color: [f32; 4], width_px: f32) {
        self.primitives.push(Primitive::Line {
            start,
            end,
            color,
            width_px,
        });
    }

    /// Fügt einen Linienzug als Folge von Segmenten hinzu.
    pub fn polyline(&mut self, points: &[Vec2], color: [f32; 4], width_px: f32) {
        for pair in points.windows(2) {
            self.line(pair[0], pair[1], color, width_px);
        }
    }

    /// Fügt eine gefüllte Scheibe hinzu.
    pub fn disk(&mut self, center: Vec2, radius_px: f32, color: [f32; 4]) {
        self.primitives.push(Primitive::Disk {
            center,
            radius_px,
            color,
        });
    }

    /// Alle Zeichenbefehle in Reihenfolge.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Anzahl der Zeichenbefehle.
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Gibt `true` zurück, wenn nichts zu zeichnen ist.
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Hängt die Dreiecke aller Zeichenbefehle an `vertices` an.
    ///
    /// Entartete Befehle (Länge/Radius 0, nicht-endliche Koordinaten) entfallen.
    pub fn triangulate(&self, vertices: &mut Vec<ColorVertex>) {
        for primitive in &self.primitives {
            match *primitive {
                Primitive::Line {
                    start,
                    end,
                    color,
                    width_px,
                } => push_line_quad(vertices, start, end, width_px, color),
                Primitive::Disk {
                    center,
                    radius_px,
                    color,
                } => push_disk(vertices, center, radius_px, color),
            }
        }
    }
}

/// Erzeugt ein Quad (2 Dreiecke) für ein Liniensegment mit gegebener Breite.
fn push_line_quad(
    vertices: &mut Vec<ColorVertex>,
    start: Vec2,
    end: Vec2,
    thickness: f32,
    color: [f32; 4],
) {
    let delta = end - start;
    let length = delta.length();
    if !length.is_finite() || length < f32::EPSILON || thickness <= 0.0 {
        return;
    }

    let dir = delta / length;
    let perp = Vec2::new(-dir.y, dir.x) * (thickness * 0.5);

    let v0 = start + perp;
    let v1 = start - perp;
    let v2 = end + perp;
    let v3 = end - perp;

    vertices.push(ColorVertex::new(v0.to_array(), color));
    vertices.push(ColorVertex::new(v1.to_array(), color));
    vertices.push(ColorVertex::new(v2.to_array(), color));

    vertices.push(ColorVertex::new(v2.to_array(), color));
    vertices.push(ColorVertex::new(v1.to_array(), color));
    vertices.push(ColorVertex::new(v3.to_array(), color));
}

/// Erzeugt einen Dreiecksfächer um `center`.
fn push_disk(vertices: &mut Vec<ColorVertex>, center: Vec2, radius: f32, color: [f32; 4]) {
    if !center.is_finite() || !radius.is_finite() || radius <= 0.0 {
        return;
    }

    let rim = |i: usize| {
        let angle = TAU * i as f32 / DrawList::DISK_SEGMENTS as f32;
        center + Vec2::new(angle.cos(), angle.sin()) * radius
    };

    for i in 0..DrawList::DISK_SEGMENTS {
        vertices.push(ColorVertex::new(center.to_array(), color));
        vertices.push(ColorVertex::new(rim(i).to_array(), color));
        vertices.push(ColorVertex::new(rim(i + 1).to_array(), color));
    }
}
