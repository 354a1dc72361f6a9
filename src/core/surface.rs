//! Abstraktion der Zeichenfläche (Turtle-Primitive).

use glam::Vec2;

/// Zeichenfläche mit Turtle-Primitiven.
///
/// Die Generatoren sprechen ausschließlich über diesen Trait mit der
/// Grafik. `Canvas` zeichnet auf, `SharedCanvas` teilt den Zustand mit
/// dem Viewer.
pub trait DrawingSurface {
    /// Setzt die logische Größe der Zeichenfläche in Welteinheiten.
    fn set_canvas_size(&mut self, width: f32, height: f32);

    /// Blendet das Turtle-Symbol aus.
    fn hide_turtle(&mut self);

    /// Hebt den Stift an (Bewegungen zeichnen nicht mehr).
    fn pen_up(&mut self);

    /// Senkt den Stift ab.
    fn pen_down(&mut self);

    /// Bewegt die Turtle entlang der Blickrichtung.
    fn forward(&mut self, distance: f32);

    /// Bewegt die Turtle rückwärts.
    fn back(&mut self, distance: f32) {
        self.forward(-distance);
    }

    /// Dreht relativ nach links (Grad).
    fn left(&mut self, degrees: f32);

    /// Dreht relativ nach rechts (Grad).
    fn right(&mut self, degrees: f32) {
        self.left(-degrees);
    }

    /// Setzt die absolute Blickrichtung (Grad).
    fn set_heading(&mut self, degrees: f32);

    /// Aktuelle Blickrichtung (Grad, 0..360).
    fn heading(&self) -> f32;

    /// Setzt die Stiftfarbe (RGB, je 0.0..=1.0).
    fn set_pen_color(&mut self, color: [f32; 3]);

    /// Setzt die Stiftbreite.
    fn set_pen_size(&mut self, size: f32);

    /// Aktuelle Position.
    fn position(&self) -> Vec2;

    /// Löscht alle Striche und setzt die Turtle zurück.
    fn reset(&mut self);
}
