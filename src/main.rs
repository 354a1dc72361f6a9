//! Turtle-Snake.
//!
//! Zeichnet eine zufällige Schlange innerhalb eines Rahmens,
//! zuerst rekursiv, nach einer Pause iterativ.

use clap::Parser;
use std::path::PathBuf;
use std::thread;
use turtle_snake::{
    ui, Canvas, Console, RandomSegments, SegmentCount, SharedCanvas, SnakeError, SnakeOptions,
    SnakeSession,
};

#[derive(Parser, Debug)]
#[command(name = "Turtle-Snake", version, about = "Zeichnet eine zufällige Turtle-Schlange")]
struct Cli {
    /// Segmentanzahl (überspringt die Abfrage)
    #[arg(long, allow_negative_numbers = true)]
    segments: Option<i64>,
    /// Fester Zufalls-Seed
    #[arg(long)]
    seed: Option<u64>,
    /// Pfad zur Optionen-Datei (Standard: neben der Binary)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Ohne Fenster zeichnen
    #[arg(long)]
    headless: bool,
    /// Wirksame Optionen in die Optionen-Datei schreiben
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Turtle-Snake v{} startet...", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(SnakeOptions::config_path);
    let mut options = SnakeOptions::load_from_file(&config_path);
    if cli.seed.is_some() {
        options.seed = cli.seed;
    }
    if cli.save_config {
        options.save_to_file(&config_path)?;
    }

    let Some(count) = read_segment_count(&cli, &options)? else {
        return Ok(());
    };

    if cli.headless {
        run_headless(&options, count)
    } else {
        run_windowed(options, count)
    }
}

/// Liest und validiert die Segmentanzahl. `None` bei ungültiger Eingabe.
fn read_segment_count(cli: &Cli, options: &SnakeOptions) -> anyhow::Result<Option<SegmentCount>> {
    let mut console = Console::stdio();
    let count = match cli.segments {
        Some(value) => SegmentCount::new(value, options.max_segments),
        None => console.prompt_segment_count(options.max_segments),
    };

    match count {
        Ok(count) => Ok(Some(count)),
        Err(e @ SnakeError::InvalidSegmentCount { .. }) => {
            console.say(&e.to_string())?;
            Ok(None)
        }
        Err(e) => Err(e.into()),
    }
}

fn run_headless(options: &SnakeOptions, count: SegmentCount) -> anyhow::Result<()> {
    let session = SnakeSession::from_options(options, false);
    let mut canvas = Canvas::new();
    let mut source = RandomSegments::from_seed(options.seed);
    let mut console = Console::stdio();

    session.run(&mut canvas, &mut source, &mut console, count)?;
    log::debug!("Striche auf der Zeichenfläche: {}", canvas.strokes().len());
    Ok(())
}

fn run_windowed(options: SnakeOptions, count: SegmentCount) -> anyhow::Result<()> {
    let canvas = SharedCanvas::new(options.stroke_delay());
    let session = SnakeSession::from_options(&options, true);

    // Das Fenster braucht den Haupt-Thread, die Sitzung läuft daneben
    let mut surface = canvas.clone();
    let seed = options.seed;
    let worker = thread::Builder::new()
        .name("snake-session".into())
        .spawn(move || {
            let mut source = RandomSegments::from_seed(seed);
            let mut console = Console::stdio();
            session.run(&mut surface, &mut source, &mut console, count)
        })?;

    ui::run_viewer(canvas.clone(), &options)
        .map_err(|e| anyhow::anyhow!("Fenster konnte nicht gestartet werden: {e}"))?;

    if !worker.is_finished() {
        log::info!("Fenster geschlossen, Sitzung wird beendet");
        return Ok(());
    }

    match worker.join() {
        Ok(Ok(report)) => {
            log::debug!(
                "Sitzung beendet: rekursiv {} / iterativ {} ({} Striche)",
                report.recursive_total,
                report.iterative_total,
                canvas.with_canvas(|c| c.strokes().len()).unwrap_or_default()
            );
            Ok(())
        }
        Ok(Err(e)) => Err(e.into()),
        Err(_) => anyhow::bail!("Sitzungs-Thread ist abgestürzt"),
    }
}
