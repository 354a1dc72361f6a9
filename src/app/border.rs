//! Randkorrektur: lenkt die Turtle nahe der Begrenzung zurück ins Innere.

use crate::core::{BoundingRegion, DrawingSurface, Edge};

/// Setzt die Blickrichtung senkrecht von der Kante weg, wenn die Turtle
/// näher als `max_length` an einer Kante steht.
///
/// Geprüft wird rechts, links, oben, unten; nur der erste Treffer zählt.
/// Gibt die auslösende Kante zurück.
pub fn border_correct<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    region: &BoundingRegion,
    max_length: f32,
) -> Option<Edge> {
    let position = surface.position();
    let edge = region.edge_within(position, max_length)?;
    log::trace!(
        "Randkorrektur an {:?} bei ({:.1}, {:.1})",
        edge,
        position.x,
        position.y
    );
    surface.set_heading(edge.inward_heading());
    Some(edge)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Canvas;
    use approx::assert_relative_eq;

    fn canvas_at(x: f32, y: f32, heading: f32) -> Canvas {
        let mut canvas = Canvas::new();
        canvas.pen_up();
        canvas.set_heading(0.0);
        canvas.forward(x);
        canvas.set_heading(90.0);
        canvas.forward(y);
        canvas.set_heading(heading);
        canvas
    }

    #[test]
    fn test_each_edge_points_inward() {
        let region = BoundingRegion::new(200.0);
        let cases = [
            ((185.0, 0.0), Edge::Right, 180.0),
            ((-185.0, 0.0), Edge::Left, 0.0),
            ((0.0, 185.0), Edge::Top, 270.0),
            ((0.0, -185.0), Edge::Bottom, 90.0),
        ];
        for ((x, y), edge, heading) in cases {
            let mut canvas = canvas_at(x, y, 45.0);
            assert_eq!(border_correct(&mut canvas, &region, 20.0), Some(edge));
            assert_relative_eq!(canvas.heading(), heading);
        }
    }

    #[test]
    fn test_corner_prefers_right_over_top() {
        let region = BoundingRegion::new(200.0);
        let mut canvas = canvas_at(195.0, 195.0, 45.0);
        assert_eq!(border_correct(&mut canvas, &region, 20.0), Some(Edge::Right));
        assert_relative_eq!(canvas.heading(), 180.0);
    }

    #[test]
    fn test_interior_keeps_heading() {
        let region = BoundingRegion::new(200.0);
        let mut canvas = canvas_at(100.0, -50.0, 123.0);
        assert_eq!(border_correct(&mut canvas, &region, 20.0), None);
        assert_relative_eq!(canvas.heading(), 123.0, epsilon = 1e-4);
    }
}
