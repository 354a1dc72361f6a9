//! Zentrale Konfiguration für Turtle-Snake.
//!
//! `SnakeOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::app::{SegmentCount, SnakeConfig};
use crate::core::{BoundingRegion, SegmentLimits};
use serde::{Deserialize, Serialize};

// ── Fenster ─────────────────────────────────────────────────────────

/// Standard-Fenstergröße [Breite, Höhe] in Pixeln.
pub const WINDOW_SIZE: [f32; 2] = [480.0, 520.0];
/// Hintergrundfarbe der Zeichenfläche (RGB: Weiß).
pub const BACKGROUND_COLOR: [f32; 3] = [1.0, 1.0, 1.0];
/// Wartezeit nach jedem Strich im Fenster-Modus (Millisekunden).
pub const STROKE_DELAY_MS: u64 = 4;

// ── Rahmen ──────────────────────────────────────────────────────────

/// Rahmenfarbe (RGB: Schwarz).
pub const BOUNDARY_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
/// Stiftbreite des Rahmens.
pub const BOUNDARY_PEN_SIZE: f32 = 1.0;

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Optionen.
/// Wird als `turtle_snake.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SnakeOptions {
    // ── Schlange ────────────────────────────────────────────────
    /// Halbbreite des Begrenzungsbereichs
    pub bounding_box: f32,
    /// Maximale Segmentlänge (gleichzeitig Randabstand der Korrektur)
    pub max_segment_length: u32,
    /// Minimale Stiftbreite eines Segments
    pub min_thickness: u32,
    /// Maximale Stiftbreite eines Segments
    pub max_thickness: u32,
    /// Maximaler Drehwinkel pro Segment in Grad
    pub max_turn_angle: i32,
    /// Obergrenze der abgefragten Segmentanzahl
    pub max_segments: u32,
    /// Fester Zufalls-Seed (None = zufällig)
    pub seed: Option<u64>,

    // ── Rahmen ──────────────────────────────────────────────────
    /// Rahmenfarbe (RGB)
    pub boundary_color: [f32; 3],
    /// Stiftbreite des Rahmens
    pub boundary_pen_size: f32,

    // ── Fenster ─────────────────────────────────────────────────
    /// Hintergrundfarbe (RGB)
    pub background_color: [f32; 3],
    /// Fenstergröße [Breite, Höhe]
    pub window_size: [f32; 2],
    /// Wartezeit nach jedem Strich in Millisekunden (0 = sofort)
    pub stroke_delay_ms: u64,
}

impl Default for SnakeOptions {
    fn default() -> Self {
        Self {
            bounding_box: BoundingRegion::DEFAULT_HALF_WIDTH,
            max_segment_length: SegmentLimits::MAX_LENGTH,
            min_thickness: SegmentLimits::MIN_THICKNESS,
            max_thickness: SegmentLimits::MAX_THICKNESS,
            max_turn_angle: SegmentLimits::MAX_TURN,
            max_segments: SegmentCount::DEFAULT_MAX,
            seed: None,

            boundary_color: BOUNDARY_COLOR,
            boundary_pen_size: BOUNDARY_PEN_SIZE,

            background_color: BACKGROUND_COLOR,
            window_size: WINDOW_SIZE,
            stroke_delay_ms: STROKE_DELAY_MS,
        }
    }
}

impl SnakeOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => match opts.validate() {
                    Ok(()) => {
                        log::info!("Optionen geladen aus: {}", path.display());
                        opts
                    }
                    Err(e) => {
                        log::warn!("Optionen ungültig, verwende Standardwerte: {:#}", e);
                        Self::default()
                    }
                },
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("turtle_snake"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("turtle_snake.toml")
    }

    /// Prüft die Wertebereiche auf Konsistenz.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(self.bounding_box.is_finite() && self.bounding_box > 0.0) {
            anyhow::bail!("bounding_box muss positiv sein: {}", self.bounding_box);
        }
        if self.min_thickness == 0 || self.min_thickness > self.max_thickness {
            anyhow::bail!(
                "Stiftbreiten inkonsistent: min {} / max {}",
                self.min_thickness,
                self.max_thickness
            );
        }
        if self.max_turn_angle < 0 {
            anyhow::bail!("max_turn_angle darf nicht negativ sein: {}", self.max_turn_angle);
        }
        if self.max_segments > SegmentCount::DEFAULT_MAX {
            anyhow::bail!(
                "max_segments ({}) darf höchstens {} sein",
                self.max_segments,
                SegmentCount::DEFAULT_MAX
            );
        }
        // Gesamtlänge wird als u32 aufsummiert
        if u64::from(self.max_segments) * u64::from(self.max_segment_length)
            > u64::from(u32::MAX)
        {
            anyhow::bail!(
                "max_segments * max_segment_length überschreitet {}: {} * {}",
                u32::MAX,
                self.max_segments,
                self.max_segment_length
            );
        }
        if self.max_segment_length as f32 >= self.bounding_box {
            anyhow::bail!(
                "max_segment_length ({}) muss kleiner als bounding_box ({}) sein",
                self.max_segment_length,
                self.bounding_box
            );
        }
        Ok(())
    }

    /// Grenzen der zufälligen Segmente.
    pub fn segment_limits(&self) -> SegmentLimits {
        SegmentLimits {
            max_length: self.max_segment_length,
            min_thickness: self.min_thickness,
            max_thickness: self.max_thickness,
            max_turn: self.max_turn_angle,
        }
    }

    /// Generator-Parameter (Begrenzung + Segment-Grenzen).
    pub fn snake_config(&self) -> SnakeConfig {
        SnakeConfig {
            region: BoundingRegion::new(self.bounding_box),
            limits: self.segment_limits(),
        }
    }

    /// Wartezeit nach jedem Strich.
    pub fn stroke_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.stroke_delay_ms)
    }
}
