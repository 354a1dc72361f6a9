//! Konsolen-Ein-/Ausgabe: Segment-Abfrage, Pause und Ergebniszeilen.

use crate::app::{SegmentCount, SnakeError};
use std::io::{self, BufRead, Write};

/// Zeilenbasierte Konsole über beliebige Reader/Writer.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Konsole auf stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Erstellt eine Konsole über `input` und `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Fragt die Segmentanzahl ab und validiert sie gegen `0..=max`.
    pub fn prompt_segment_count(&mut self, max: u32) -> Result<SegmentCount, SnakeError> {
        let line = self.prompt(&format!("How many segments? (0-{max})"))?;
        SegmentCount::parse(&line, max)
    }

    /// Wartet auf Enter. Ende der Eingabe zählt ebenfalls als Bestätigung.
    pub fn wait_for_enter(&mut self) -> Result<(), SnakeError> {
        self.prompt("Press Enter to continue.")?;
        Ok(())
    }

    /// Schreibt eine Zeile.
    pub fn say(&mut self, line: &str) -> Result<(), SnakeError> {
        writeln!(self.output, "{line}")?;
        self.output.flush()?;
        Ok(())
    }

    /// Read-only Zugriff auf die Ausgabe (z.B. Puffer in Tests).
    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt(&mut self, text: &str) -> Result<String, SnakeError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // EOF: Zeilenumbruch nachholen, damit folgende Ausgaben sauber beginnen
            writeln!(self.output)?;
        }
        Ok(line)
    }
}
