//! Übersetzt eine RenderScene in Zeichenbefehle.
//!
//! Reihenfolge (unten nach oben): Kontrollpolygon, Mittelpunktnetz, Kurve,
//! Kontrollpunkte, wandernder Punkt.

use super::draw_list::DrawList;
use crate::core::tessellate;
use crate::shared::RenderScene;
use glam::Vec2;

/// Zeichnet die komplette Szene in `draw_list`.
pub fn paint_scene(scene: &RenderScene, draw_list: &mut DrawList) {
    if !scene.is_drawable() {
        return;
    }

    let view = &scene.view;
    let options = &scene.options;

    let polygon: Vec<Vec2> = scene.control_points.iter().map(|&p| view.project(p)).collect();
    draw_list.polyline(&polygon, options.mesh_color, options.mesh_width_px);

    if options.show_midpoint_mesh {
        for segment in &scene.segments {
            // Ebene 0 ist das Kontrollpolygon selbst
            for level in segment.midpoint_chain().iter().skip(1) {
                let projected: Vec<Vec2> = level.iter().map(|&p| view.project(p)).collect();
                draw_list.polyline(&projected, options.mesh_color, options.mesh_width_px);
            }
        }
    }

    for segment in &scene.segments {
        let samples = tessellate(|t| segment.evaluate(t), options.curve_resolution);
        let projected: Vec<Vec2> = samples.iter().map(|&p| view.project(p)).collect();
        draw_list.polyline(&projected, options.curve_color, options.curve_width_px);
    }

    for (index, &screen) in polygon.iter().enumerate() {
        let color = if scene.selected_point == Some(index) {
            options.point_color_selected
        } else {
            options.point_color
        };
        draw_list.disk(screen, options.point_radius_px, color);
    }

    if let Some(traveler) = scene.traveler {
        draw_list.disk(
            view.project(traveler),
            options.traveler_radius_px,
            options.traveler_color,
        );
    }
}
