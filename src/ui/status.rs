//! Status-Bar am unteren Bildschirmrand.

use crate::core::{Camera2D, Canvas};

/// Rendert die Status-Bar
pub fn render_status_bar(ctx: &egui::Context, canvas: &Canvas, camera: &Camera2D) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label(format!("Strokes: {}", canvas.strokes().len()));

            ui.separator();

            let turtle = canvas.turtle();
            ui.label(format!(
                "Turtle: ({:.1}, {:.1}) | Heading: {:.0}°",
                turtle.position.x,
                turtle.position.y,
                turtle.heading()
            ));

            ui.separator();

            ui.label(format!("Zoom: {:.2}x", camera.zoom));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label("Doppelklick: Ansicht zurücksetzen");
            });
        });
    });
}
