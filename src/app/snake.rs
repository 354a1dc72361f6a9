//! Schlangen-Generator: rekursive und iterative Variante mit identischem Einzelschritt.

use super::border::border_correct;
use crate::core::{BoundingRegion, DrawingSurface, Segment, SegmentLimits, SegmentSource};

/// Parameter eines Zeichenlaufs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnakeConfig {
    /// Begrenzungsbereich
    pub region: BoundingRegion,
    /// Grenzen der zufälligen Segmente
    pub limits: SegmentLimits,
}

impl SnakeConfig {
    /// Randabstand, ab dem korrigiert wird (= maximale Segmentlänge).
    pub fn border_margin(&self) -> f32 {
        self.limits.max_length as f32
    }
}

impl Default for SnakeConfig {
    fn default() -> Self {
        Self {
            region: BoundingRegion::default(),
            limits: SegmentLimits::default(),
        }
    }
}

/// Zeichnet ein einzelnes Segment: Randkorrektur, Strich, Drehung.
///
/// Gibt das gezogene Segment zurück; seine Länge fließt in die Gesamtlänge ein.
pub fn draw_segment<S, G>(surface: &mut S, source: &mut G, config: &SnakeConfig) -> Segment
where
    S: DrawingSurface + ?Sized,
    G: SegmentSource + ?Sized,
{
    border_correct(surface, &config.region, config.border_margin());
    let segment = source.next_segment(&config.limits);
    surface.set_pen_color(segment.color);
    surface.set_pen_size(segment.thickness as f32);
    surface.forward(segment.length as f32);
    surface.left(segment.turn as f32);
    segment
}

/// Zeichnet `segments` Segmente rekursiv und gibt `total` plus die Summe
/// aller Segmentlängen zurück.
///
/// Endrekursiv, Tiefe = Segmentanzahl.
pub fn draw_snake_recursive<S, G>(
    surface: &mut S,
    source: &mut G,
    segments: u32,
    total: u32,
    config: &SnakeConfig,
) -> u32
where
    S: DrawingSurface + ?Sized,
    G: SegmentSource + ?Sized,
{
    if segments == 0 {
        return total;
    }
    let segment = draw_segment(surface, source, config);
    draw_snake_recursive(surface, source, segments - 1, total + segment.length, config)
}

/// Zeichnet `segments` Segmente in einer Schleife und gibt die Gesamtlänge zurück.
pub fn draw_snake_iterative<S, G>(
    surface: &mut S,
    source: &mut G,
    segments: u32,
    config: &SnakeConfig,
) -> u32
where
    S: DrawingSurface + ?Sized,
    G: SegmentSource + ?Sized,
{
    let mut total = 0;
    for _ in 0..segments {
        total += draw_segment(surface, source, config).length;
    }
    total
}
