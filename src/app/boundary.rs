//! Zeichnet den Begrenzungsrahmen.

use crate::core::{BoundingRegion, DrawingSurface};

const RIGHT_ANGLE: f32 = 90.0;

/// Zeichnet den quadratischen Rahmen (Kantenlänge `2B`) um den Ursprung.
///
/// Vorbedingung: Turtle im Ursprung, Blick nach Osten.
/// Nachbedingung: Turtle im Ursprung, Blick nach Osten, Stift unten.
pub fn draw_bounding_box<S: DrawingSurface + ?Sized>(surface: &mut S, region: &BoundingRegion) {
    let b = region.half_width;

    // Von der Mitte der rechten Kante aus im Uhrzeigersinn
    surface.pen_up();
    surface.forward(b);
    surface.right(RIGHT_ANGLE);
    surface.pen_down();
    surface.forward(b);
    for _ in 0..3 {
        surface.right(RIGHT_ANGLE);
        surface.forward(b * 2.0);
    }
    surface.right(RIGHT_ANGLE);
    surface.forward(b);

    surface.left(RIGHT_ANGLE);
    surface.pen_up();
    surface.back(b);
    surface.pen_down();
}
