//! Quadratischer Begrenzungsbereich um den Ursprung.

use glam::Vec2;

/// Kante des Begrenzungsbereichs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Rechte Kante (+x)
    Right,
    /// Linke Kante (-x)
    Left,
    /// Obere Kante (+y)
    Top,
    /// Untere Kante (-y)
    Bottom,
}

impl Edge {
    /// Prüfreihenfolge: bei mehreren Treffern gewinnt die erste Kante.
    pub const PRIORITY: [Edge; 4] = [Edge::Right, Edge::Left, Edge::Top, Edge::Bottom];

    /// Blickrichtung in Grad, die senkrecht von der Kante weg ins Innere zeigt.
    pub fn inward_heading(self) -> f32 {
        match self {
            Edge::Right => 180.0,
            Edge::Left => 0.0,
            Edge::Top => 270.0,
            Edge::Bottom => 90.0,
        }
    }
}

/// Quadrat mit Mittelpunkt im Ursprung und Halbbreite `half_width`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    /// Halbe Kantenlänge
    pub half_width: f32,
}

impl BoundingRegion {
    /// Standard-Halbbreite (400 × 400 Einheiten).
    pub const DEFAULT_HALF_WIDTH: f32 = 200.0;

    /// Erstellt einen Bereich mit der gegebenen Halbbreite.
    pub fn new(half_width: f32) -> Self {
        Self { half_width }
    }

    /// Volle Kantenlänge.
    pub fn side(&self) -> f32 {
        self.half_width * 2.0
    }

    /// Liegt `pos` innerhalb des um `tolerance` erweiterten Bereichs?
    pub fn contains(&self, pos: Vec2, tolerance: f32) -> bool {
        let limit = self.half_width + tolerance;
        pos.x.abs() <= limit && pos.y.abs() <= limit
    }

    /// Erste Kante (in `Edge::PRIORITY`-Reihenfolge), der `pos` näher als `margin` ist.
    pub fn edge_within(&self, pos: Vec2, margin: f32) -> Option<Edge> {
        let b = self.half_width;
        Edge::PRIORITY.into_iter().find(|edge| match edge {
            Edge::Right => pos.x >= b - margin,
            Edge::Left => pos.x <= -b + margin,
            Edge::Top => pos.y >= b - margin,
            Edge::Bottom => pos.y <= -b + margin,
        })
    }
}

impl Default for BoundingRegion {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HALF_WIDTH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_within_uses_priority_order() {
        let region = BoundingRegion::new(200.0);
        // Rechts oben: rechte Kante hat Vorrang
        assert_eq!(
            region.edge_within(Vec2::new(190.0, 190.0), 20.0),
            Some(Edge::Right)
        );
        // Links unten: linke Kante hat Vorrang
        assert_eq!(
            region.edge_within(Vec2::new(-190.0, -190.0), 20.0),
            Some(Edge::Left)
        );
        assert_eq!(
            region.edge_within(Vec2::new(0.0, -185.0), 20.0),
            Some(Edge::Bottom)
        );
    }

    #[test]
    fn test_edge_within_is_inclusive() {
        let region = BoundingRegion::new(200.0);
        assert_eq!(region.edge_within(Vec2::new(180.0, 0.0), 20.0), Some(Edge::Right));
        assert_eq!(region.edge_within(Vec2::new(179.9, 0.0), 20.0), None);
    }

    #[test]
    fn test_contains_with_tolerance() {
        let region = BoundingRegion::default();
        assert!(region.contains(Vec2::new(200.0, -200.0), 0.0));
        assert!(!region.contains(Vec2::new(205.0, 0.0), 0.0));
        assert!(region.contains(Vec2::new(205.0, 0.0), 20.0));
    }
}
