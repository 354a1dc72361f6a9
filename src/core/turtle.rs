//! Turtle-Zustand: Position, Blickrichtung und Stift.

use glam::Vec2;

/// Zustand des Zeichenstifts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stift abgesenkt (zeichnet beim Bewegen)
    pub down: bool,
    /// Stiftfarbe (RGB, je 0.0..=1.0)
    pub color: [f32; 3],
    /// Stiftbreite in Welteinheiten
    pub size: f32,
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            down: true,
            color: [0.0, 0.0, 0.0],
            size: 1.0,
        }
    }
}

/// Position und Blickrichtung der Turtle.
///
/// Heading in Grad, 0° = Osten, gegen den Uhrzeigersinn steigend.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turtle {
    /// Position in Welt-Koordinaten
    pub position: Vec2,
    /// Blickrichtung in Grad, normalisiert auf 0..360
    heading: f32,
    /// Aktueller Stift
    pub pen: Pen,
    /// Turtle-Symbol sichtbar
    pub visible: bool,
}

impl Turtle {
    /// Erstellt eine Turtle im Ursprung mit Blick nach Osten.
    pub fn new() -> Self {
        Self {
            position: Vec2::ZERO,
            heading: 0.0,
            pen: Pen::default(),
            visible: true,
        }
    }

    /// Aktuelle Blickrichtung in Grad.
    pub fn heading(&self) -> f32 {
        self.heading
    }

    /// Setzt die absolute Blickrichtung.
    pub fn set_heading(&mut self, degrees: f32) {
        self.heading = normalize_degrees(degrees);
    }

    /// Dreht relativ nach links (positiv = gegen den Uhrzeigersinn).
    pub fn turn_left(&mut self, degrees: f32) {
        self.set_heading(self.heading + degrees);
    }

    /// Einheitsvektor der aktuellen Blickrichtung.
    pub fn direction(&self) -> Vec2 {
        let rad = self.heading.to_radians();
        Vec2::new(rad.cos(), rad.sin())
    }

    /// Bewegt die Turtle entlang der Blickrichtung und gibt `(von, nach)` zurück.
    pub fn advance(&mut self, distance: f32) -> (Vec2, Vec2) {
        let from = self.position;
        self.position = from + self.direction() * distance;
        (from, self.position)
    }
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalisiert einen Winkel auf `0.0..360.0`.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid kann bei -0.0 bzw. Rundung exakt 360.0 liefern
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}
