//! Fehlertypen der Anwendung.

use thiserror::Error;

/// Fachliche Fehler der Schlangen-Anwendung
#[derive(Debug, Error)]
pub enum SnakeError {
    /// Segmentanzahl außerhalb von `0..=max` oder keine Ganzzahl
    #[error("Segments must be between 0 and {max} inclusive.")]
    InvalidSegmentCount {
        /// Obere Grenze (inklusiv)
        max: u32,
    },
    /// Konsole konnte nicht gelesen/geschrieben werden
    #[error("Konsolen-I/O fehlgeschlagen: {0}")]
    Console(#[from] std::io::Error),
}

/// Validierte Segmentanzahl in `0..=max_segments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentCount(u32);

impl SegmentCount {
    /// Standard-Obergrenze, zugleich Höchstwert für `max_segments`.
    ///
    /// Die rekursive Variante braucht einen Stack-Frame pro Segment.
    pub const DEFAULT_MAX: u32 = 500;

    /// Prüft einen bereits geparsten Wert.
    pub fn new(value: i64, max: u32) -> Result<Self, SnakeError> {
        u32::try_from(value)
            .ok()
            .filter(|v| *v <= max)
            .map(Self)
            .ok_or(SnakeError::InvalidSegmentCount { max })
    }

    /// Parst eine Benutzereingabe (Leerraum wird ignoriert).
    pub fn parse(input: &str, max: u32) -> Result<Self, SnakeError> {
        let value: i64 = input
            .trim()
            .parse()
            .map_err(|_| SnakeError::InvalidSegmentCount { max })?;
        Self::new(value, max)
    }

    /// Anzahl als `u32`.
    pub fn get(self) -> u32 {
        self.0
    }
}
