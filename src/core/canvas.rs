//! Aufzeichnende Zeichenfläche und ihr thread-geteilter Handle.

use super::surface::DrawingSurface;
use super::turtle::Turtle;
use glam::Vec2;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

/// Ein aufgezeichneter Strich mit abgesenktem Stift
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Startpunkt in Welt-Koordinaten
    pub from: Vec2,
    /// Endpunkt in Welt-Koordinaten
    pub to: Vec2,
    /// Stiftfarbe (RGB)
    pub color: [f32; 3],
    /// Stiftbreite in Welteinheiten
    pub width: f32,
}

impl Stroke {
    /// Länge des Strichs.
    pub fn length(&self) -> f32 {
        self.from.distance(self.to)
    }
}

/// Zeichenfläche, die alle Striche in Zeichenreihenfolge aufzeichnet.
#[derive(Debug, Clone)]
pub struct Canvas {
    turtle: Turtle,
    strokes: Vec<Stroke>,
    /// Logische Größe [Breite, Höhe] in Welteinheiten
    size: Vec2,
    /// Änderungszähler (steigt bei jeder sichtbaren Änderung)
    revision: u64,
}

impl Canvas {
    /// Erstellt eine leere Zeichenfläche.
    pub fn new() -> Self {
        Self {
            turtle: Turtle::new(),
            strokes: Vec::new(),
            size: Vec2::ZERO,
            revision: 0,
        }
    }

    /// Alle Striche seit dem letzten `reset`.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Read-only Sicht auf die Turtle.
    pub fn turtle(&self) -> &Turtle {
        &self.turtle
    }

    /// Logische Größe der Zeichenfläche.
    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Änderungszähler für Repaint-Entscheidungen.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn touch(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface for Canvas {
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.size = Vec2::new(width, height);
        self.touch();
    }

    fn hide_turtle(&mut self) {
        self.turtle.visible = false;
        self.touch();
    }

    fn pen_up(&mut self) {
        self.turtle.pen.down = false;
    }

    fn pen_down(&mut self) {
        self.turtle.pen.down = true;
    }

    fn forward(&mut self, distance: f32) {
        let (from, to) = self.turtle.advance(distance);
        if self.turtle.pen.down {
            self.strokes.push(Stroke {
                from,
                to,
                color: self.turtle.pen.color,
                width: self.turtle.pen.size,
            });
        }
        self.touch();
    }

    fn left(&mut self, degrees: f32) {
        self.turtle.turn_left(degrees);
    }

    fn set_heading(&mut self, degrees: f32) {
        self.turtle.set_heading(degrees);
    }

    fn heading(&self) -> f32 {
        self.turtle.heading()
    }

    fn set_pen_color(&mut self, color: [f32; 3]) {
        self.turtle.pen.color = color;
    }

    fn set_pen_size(&mut self, size: f32) {
        self.turtle.pen.size = size;
    }

    fn position(&self) -> Vec2 {
        self.turtle.position
    }

    fn reset(&mut self) {
        self.strokes.clear();
        self.turtle = Turtle::new();
        self.touch();
    }
}

/// Thread-geteilter Handle auf eine `Canvas`.
///
/// Der Worker zeichnet, der Viewer liest Snapshots. Nach jedem Strich
/// kann optional gewartet werden, damit das Zeichnen sichtbar bleibt.
#[derive(Debug, Clone, Default)]
pub struct SharedCanvas {
    inner: Arc<Mutex<Canvas>>,
    stroke_delay: Duration,
}

impl SharedCanvas {
    /// Erstellt einen neuen Handle auf eine leere Zeichenfläche.
    pub fn new(stroke_delay: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Canvas::new())),
            stroke_delay,
        }
    }

    /// Führt `f` mit gesperrter Zeichenfläche aus.
    ///
    /// Gibt `None` zurück, wenn der Mutex vergiftet ist.
    pub fn with_canvas<T>(&self, f: impl FnOnce(&mut Canvas) -> T) -> Option<T> {
        self.lock().map(|mut canvas| f(&mut canvas))
    }

    /// Kopie des aktuellen Zustands (für Tests und Export).
    pub fn snapshot(&self) -> Option<Canvas> {
        self.with_canvas(|canvas| canvas.clone())
    }

    fn lock(&self) -> Option<MutexGuard<'_, Canvas>> {
        match self.inner.lock() {
            Ok(guard) => Some(guard),
            Err(_) => {
                log::error!("Canvas-Lock fehlgeschlagen (Mutex vergiftet)");
                None
            }
        }
    }
}

impl DrawingSurface for SharedCanvas {
    fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.with_canvas(|c| c.set_canvas_size(width, height));
    }

    fn hide_turtle(&mut self) {
        self.with_canvas(|c| c.hide_turtle());
    }

    fn pen_up(&mut self) {
        self.with_canvas(|c| c.pen_up());
    }

    fn pen_down(&mut self) {
        self.with_canvas(|c| c.pen_down());
    }

    fn forward(&mut self, distance: f32) {
        let drew = self
            .with_canvas(|c| {
                c.forward(distance);
                c.turtle().pen.down
            })
            .unwrap_or(false);
        // Warten ausserhalb des Locks, sonst blockiert der Viewer
        if drew && !self.stroke_delay.is_zero() {
            std::thread::sleep(self.stroke_delay);
        }
    }

    fn left(&mut self, degrees: f32) {
        self.with_canvas(|c| c.left(degrees));
    }

    fn set_heading(&mut self, degrees: f32) {
        self.with_canvas(|c| c.set_heading(degrees));
    }

    fn heading(&self) -> f32 {
        self.with_canvas(|c| c.heading()).unwrap_or_default()
    }

    fn set_pen_color(&mut self, color: [f32; 3]) {
        self.with_canvas(|c| c.set_pen_color(color));
    }

    fn set_pen_size(&mut self, size: f32) {
        self.with_canvas(|c| c.set_pen_size(size));
    }

    fn position(&self) -> Vec2 {
        self.with_canvas(|c| c.position()).unwrap_or(Vec2::ZERO)
    }

    fn reset(&mut self) {
        self.with_canvas(|c| c.reset());
    }
}
