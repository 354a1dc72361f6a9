//! Zufällige Segment-Parameter und ihre injizierbare Quelle.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Grenzen für zufällig gezogene Segmente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentLimits {
    /// Maximale Segmentlänge (Minimum ist 0)
    pub max_length: u32,
    /// Minimale Stiftbreite
    pub min_thickness: u32,
    /// Maximale Stiftbreite
    pub max_thickness: u32,
    /// Maximaler Drehwinkel in Grad, gezogen aus `-max_turn..=max_turn`
    pub max_turn: i32,
}

impl SegmentLimits {
    /// Standard-Maximallänge eines Segments.
    pub const MAX_LENGTH: u32 = 20;
    /// Standard-Mindestbreite.
    pub const MIN_THICKNESS: u32 = 1;
    /// Standard-Maximalbreite.
    pub const MAX_THICKNESS: u32 = 10;
    /// Standard-Maximalwinkel.
    pub const MAX_TURN: i32 = 30;

    /// Prüft, ob ein Segment innerhalb der Grenzen liegt.
    #[cfg(test)]
    pub fn contains(&self, segment: &Segment) -> bool {
        segment.length <= self.max_length
            && (self.min_thickness..=self.max_thickness).contains(&segment.thickness)
            && segment.color.iter().all(|c| (0.0..=1.0).contains(c))
            && (-self.max_turn..=self.max_turn).contains(&segment.turn)
    }
}

impl Default for SegmentLimits {
    fn default() -> Self {
        Self {
            max_length: Self::MAX_LENGTH,
            min_thickness: Self::MIN_THICKNESS,
            max_thickness: Self::MAX_THICKNESS,
            max_turn: Self::MAX_TURN,
        }
    }
}

/// Ein Schritt der Schlange: Strich plus anschließende Drehung
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Länge in Welteinheiten
    pub length: u32,
    /// Stiftbreite
    pub thickness: u32,
    /// Stiftfarbe (RGB)
    pub color: [f32; 3],
    /// Drehung nach links in Grad (negativ = rechts)
    pub turn: i32,
}

/// Quelle für Segmente.
///
/// Produktiv über `RandomSegments`, in Tests über feste Sequenzen.
pub trait SegmentSource {
    /// Liefert das nächste Segment innerhalb von `limits`.
    fn next_segment(&mut self, limits: &SegmentLimits) -> Segment;
}

/// Zufallsquelle auf Basis eines `rand::Rng`.
///
/// Zieht pro Segment in fester Reihenfolge: Länge, Farbe (r, g, b),
/// Breite, Drehung.
#[derive(Debug, Clone)]
pub struct RandomSegments<R: Rng> {
    rng: R,
}

impl<R: Rng> RandomSegments<R> {
    /// Verwendet einen beliebigen Generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSegments<StdRng> {
    /// Seedbarer Standard-Generator; ohne Seed wird einer zufällig gewählt.
    pub fn from_seed(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        log::info!("Zufalls-Seed: {}", seed);
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SegmentSource for RandomSegments<R> {
    fn next_segment(&mut self, limits: &SegmentLimits) -> Segment {
        let length = self.rng.random_range(0..=limits.max_length);
        let color = [
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
            self.rng.random::<f32>(),
        ];
        let thickness = self
            .rng
            .random_range(limits.min_thickness..=limits.max_thickness);
        let turn = self.rng.random_range(-limits.max_turn..=limits.max_turn);
        Segment {
            length,
            thickness,
            color,
            turn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_segments_stay_within_limits() {
        let limits = SegmentLimits::default();
        let mut source = RandomSegments::from_seed(Some(42));
        for _ in 0..2000 {
            let segment = source.next_segment(&limits);
            assert!(limits.contains(&segment), "Segment außerhalb: {segment:?}");
        }
    }

    #[test]
    fn test_same_seed_gives_same_sequence() {
        let limits = SegmentLimits::default();
        let mut a = RandomSegments::from_seed(Some(7));
        let mut b = RandomSegments::from_seed(Some(7));
        for _ in 0..50 {
            assert_eq!(a.next_segment(&limits), b.next_segment(&limits));
        }
    }

    #[test]
    fn test_degenerate_limits_are_respected() {
        let limits = SegmentLimits {
            max_length: 0,
            min_thickness: 3,
            max_thickness: 3,
            max_turn: 0,
        };
        let mut source = RandomSegments::from_seed(Some(1));
        let segment = source.next_segment(&limits);
        assert_eq!(segment.length, 0);
        assert_eq!(segment.thickness, 3);
        assert_eq!(segment.turn, 0);
    }
}
