//! Programmablauf: Rahmen, rekursive Schlange, Pause, iterative Schlange.

use super::boundary::draw_bounding_box;
use super::error::{SegmentCount, SnakeError};
use super::snake::{draw_snake_iterative, draw_snake_recursive, SnakeConfig};
use crate::core::{DrawingSurface, SegmentSource};
use crate::shared::SnakeOptions;
use crate::ui::Console;
use std::io::{BufRead, Write};

/// Zeichendurchgang
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Rekursive Variante
    Recursive,
    /// Iterative Variante
    Iterative,
}

impl Phase {
    /// Bezeichnung in der Ergebniszeile.
    pub fn label(self) -> &'static str {
        match self {
            Phase::Recursive => "recursive",
            Phase::Iterative => "iterative",
        }
    }
}

/// Gesamtlängen beider Durchgänge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    /// Länge der rekursiv gezeichneten Schlange
    pub recursive_total: u32,
    /// Länge der iterativ gezeichneten Schlange
    pub iterative_total: u32,
}

/// Führt beide Zeichendurchgänge nacheinander aus.
#[derive(Debug, Clone)]
pub struct SnakeSession {
    /// Generator-Parameter
    pub config: SnakeConfig,
    /// Stiftfarbe des Rahmens
    pub boundary_color: [f32; 3],
    /// Stiftbreite des Rahmens
    pub boundary_pen_size: f32,
    /// Am Ende auf das Schließen des Fensters hinweisen
    pub window_attached: bool,
}

impl SnakeSession {
    /// Baut eine Session aus den Laufzeit-Optionen.
    pub fn from_options(options: &SnakeOptions, window_attached: bool) -> Self {
        Self {
            config: options.snake_config(),
            boundary_color: options.boundary_color,
            boundary_pen_size: options.boundary_pen_size,
            window_attached,
        }
    }

    /// Richtet die Zeichenfläche ein und zeichnet den Rahmen.
    pub fn prepare_canvas<S: DrawingSurface + ?Sized>(&self, surface: &mut S) {
        let side = self.config.region.side();
        surface.set_canvas_size(side, side);
        surface.hide_turtle();
        surface.set_pen_color(self.boundary_color);
        surface.set_pen_size(self.boundary_pen_size);
        draw_bounding_box(surface, &self.config.region);
    }

    /// Zeichnet eine Phase und gibt ihre Gesamtlänge zurück.
    pub fn draw_phase<S, G>(
        &self,
        phase: Phase,
        surface: &mut S,
        source: &mut G,
        count: SegmentCount,
    ) -> u32
    where
        S: DrawingSurface + ?Sized,
        G: SegmentSource + ?Sized,
    {
        log::info!(
            "Zeichne {} Schlange mit {} Segmenten",
            phase.label(),
            count.get()
        );
        let segments = count.get();
        let total = match phase {
            Phase::Recursive => draw_snake_recursive(surface, source, segments, 0, &self.config),
            Phase::Iterative => draw_snake_iterative(surface, source, segments, &self.config),
        };
        log::info!("{} Schlange fertig: {} Einheiten", phase.label(), total);
        total
    }

    /// Kompletter Ablauf mit Konsolen-Ausgabe und Pause zwischen den Phasen.
    pub fn run<S, G, R, W>(
        &self,
        surface: &mut S,
        source: &mut G,
        console: &mut Console<R, W>,
        count: SegmentCount,
    ) -> Result<SessionReport, SnakeError>
    where
        S: DrawingSurface + ?Sized,
        G: SegmentSource + ?Sized,
        R: BufRead,
        W: Write,
    {
        self.prepare_canvas(surface);
        let recursive_total = self.draw_phase(Phase::Recursive, surface, source, count);
        report_total(console, Phase::Recursive, recursive_total)?;

        console.wait_for_enter()?;

        surface.reset();
        self.prepare_canvas(surface);
        let iterative_total = self.draw_phase(Phase::Iterative, surface, source, count);
        report_total(console, Phase::Iterative, iterative_total)?;

        if self.window_attached {
            console.say("Close the Turtle window to exit the program.")?;
        }

        Ok(SessionReport {
            recursive_total,
            iterative_total,
        })
    }
}

fn report_total<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    phase: Phase,
    total: u32,
) -> Result<(), SnakeError> {
    console.say(&format!("The {} snake is {} units long.", phase.label(), total))
}
