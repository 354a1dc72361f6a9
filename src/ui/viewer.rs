//! Fenster-Ansicht: zeichnet die geteilte Zeichenfläche mit egui.

use eframe::egui;
use glam::Vec2;
use std::time::Duration;

use super::status::render_status_bar;
use crate::core::{Camera2D, Canvas, SharedCanvas, Stroke};
use crate::shared::SnakeOptions;

/// Rand um den Begrenzungsbereich (Anteil der Halbbreite).
const VIEW_MARGIN: f32 = 0.1;
/// Abfrage-Intervall, solange der Worker noch zeichnen kann.
const POLL_INTERVAL: Duration = Duration::from_millis(30);
/// Zoom-Schritt pro Mausrad-Raste.
const SCROLL_ZOOM_STEP: f32 = 1.1;

/// eframe-Anwendung, die den aktuellen Canvas-Zustand darstellt.
pub struct SnakeViewerApp {
    canvas: SharedCanvas,
    camera: Camera2D,
    background: egui::Color32,
    last_revision: u64,
}

impl SnakeViewerApp {
    /// Erstellt die Ansicht für `canvas`.
    pub fn new(canvas: SharedCanvas, options: &SnakeOptions) -> Self {
        Self {
            canvas,
            camera: Camera2D::new(options.bounding_box * (1.0 + VIEW_MARGIN)),
            background: to_color32(options.background_color),
            last_revision: 0,
        }
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, viewport_size: Vec2) {
        if response.double_clicked() {
            self.camera.reset_view();
            return;
        }

        if response.dragged() {
            let delta = response.drag_delta();
            let wpp = self.camera.world_per_pixel(viewport_size);
            // Screen-Y nach unten, Welt-Y nach oben
            self.camera.pan(Vec2::new(-delta.x * wpp, delta.y * wpp));
        }

        if response.hovered() {
            let scroll = ui.input(|i| i.smooth_scroll_delta.y);
            let factor = if scroll > 0.0 {
                SCROLL_ZOOM_STEP
            } else if scroll < 0.0 {
                1.0 / SCROLL_ZOOM_STEP
            } else {
                return;
            };
            match response.hover_pos() {
                Some(pointer) => {
                    let local = pointer - response.rect.min;
                    self.camera
                        .zoom_towards(factor, Vec2::new(local.x, local.y), viewport_size);
                }
                None => self.camera.zoom_by(factor),
            }
        }
    }
}

impl eframe::App for SnakeViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let Some(snapshot) = self.canvas.snapshot() else {
            return;
        };

        render_status_bar(ctx, &snapshot, &self.camera);

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());
                let viewport_size = Vec2::new(rect.width(), rect.height());

                self.handle_input(ui, &response, viewport_size);

                ui.painter()
                    .extend(canvas_shapes(&snapshot, &self.camera, rect, self.background));
            });

        if snapshot.revision() != self.last_revision {
            self.last_revision = snapshot.revision();
            ctx.request_repaint();
        } else {
            ctx.request_repaint_after(POLL_INTERVAL);
        }
    }
}

/// Baut die egui-Shapes für Hintergrund und alle Striche.
pub fn canvas_shapes(
    canvas: &Canvas,
    camera: &Camera2D,
    rect: egui::Rect,
    background: egui::Color32,
) -> Vec<egui::Shape> {
    let viewport_size = Vec2::new(rect.width(), rect.height());
    let scale = camera.pixels_per_world(viewport_size);

    let mut shapes = Vec::with_capacity(canvas.strokes().len() * 2 + 1);
    shapes.push(egui::Shape::rect_filled(rect, 0.0, background));

    for stroke in canvas.strokes() {
        let from = to_screen(camera, stroke.from, rect, viewport_size);
        let to = to_screen(camera, stroke.to, rect, viewport_size);
        let width = (stroke.width * scale).max(0.5);
        let color = to_color32(stroke.color);

        shapes.push(egui::Shape::line_segment(
            [from, to],
            egui::Stroke::new(width, color),
        ));
        // Runde Gelenke, sonst zerfasern dicke Knicke
        if needs_joint(stroke, scale) {
            shapes.push(egui::Shape::circle_filled(to, width * 0.5, color));
        }
    }

    shapes
}

fn needs_joint(stroke: &Stroke, scale: f32) -> bool {
    stroke.width * scale > 2.0
}

fn to_screen(camera: &Camera2D, world: Vec2, rect: egui::Rect, viewport_size: Vec2) -> egui::Pos2 {
    let screen = camera.world_to_screen(world, viewport_size);
    egui::pos2(rect.min.x + screen.x, rect.min.y + screen.y)
}

/// Konvertiert eine RGB-Farbe (0.0..=1.0) nach `Color32`.
pub fn to_color32(rgb: [f32; 3]) -> egui::Color32 {
    let [r, g, b] = rgb.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    egui::Color32::from_rgb(r, g, b)
}

/// Startet das Fenster und blockiert, bis es geschlossen wird.
pub fn run_viewer(canvas: SharedCanvas, options: &SnakeOptions) -> Result<(), eframe::Error> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(options.window_size)
            .with_title("Turtle Snake"),
        renderer: eframe::Renderer::Glow,
        multisampling: 4,
        ..Default::default()
    };

    let app = SnakeViewerApp::new(canvas, options);
    eframe::run_native(
        "Turtle Snake",
        native_options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
}
