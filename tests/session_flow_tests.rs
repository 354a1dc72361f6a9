//! Integrationstests für den Programmablauf:
//! Rahmen, rekursive Phase, Pause, Reset, iterative Phase.

use approx::assert_relative_eq;
use std::io::Cursor;
use std::time::Duration;
use turtle_snake::{
    Canvas, Console, DrawingSurface, RandomSegments, Segment, SegmentCount, SegmentLimits,
    SegmentSource, SharedCanvas, SnakeError, SnakeOptions, SnakeSession,
};

type BufferConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> BufferConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: &BufferConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}

/// Liefert nacheinander die gegebenen Längen, danach 0.
struct Lengths(Vec<u32>);

impl SegmentSource for Lengths {
    fn next_segment(&mut self, _limits: &SegmentLimits) -> Segment {
        let length = if self.0.is_empty() { 0 } else { self.0.remove(0) };
        Segment {
            length,
            thickness: 3,
            color: [1.0, 0.0, 0.0],
            turn: 5,
        }
    }
}

fn count(value: i64) -> SegmentCount {
    SegmentCount::new(value, 500).expect("gültige Segmentanzahl")
}

#[test]
fn test_session_prints_both_totals_in_order() {
    let session = SnakeSession::from_options(&SnakeOptions::default(), true);
    let mut canvas = Canvas::new();
    let mut source = Lengths(vec![5, 12, 0, 1, 2, 3]);
    let mut console = console("\n");

    let report = session
        .run(&mut canvas, &mut source, &mut console, count(3))
        .expect("Sitzung darf nicht fehlschlagen");

    assert_eq!(report.recursive_total, 17);
    assert_eq!(report.iterative_total, 6);

    let text = output(&console);
    let recursive = text
        .find("The recursive snake is 17 units long.\n")
        .expect("Rekursive Zeile fehlt");
    let pause = text.find("Press Enter to continue.").expect("Pause fehlt");
    let iterative = text
        .find("The iterative snake is 6 units long.\n")
        .expect("Iterative Zeile fehlt");
    let close = text
        .find("Close the Turtle window to exit the program.\n")
        .expect("Hinweis zum Schließen fehlt");
    assert!(recursive < pause && pause < iterative && iterative < close);
}

#[test]
fn test_headless_session_omits_close_hint() {
    let session = SnakeSession::from_options(&SnakeOptions::default(), false);
    let mut canvas = Canvas::new();
    let mut source = RandomSegments::from_seed(Some(5));
    let mut console = console("\n");

    session
        .run(&mut canvas, &mut source, &mut console, count(10))
        .expect("Sitzung darf nicht fehlschlagen");

    assert!(!output(&console).contains("Close the Turtle window"));
}

#[test]
fn test_canvas_is_reset_between_phases() {
    let session = SnakeSession::from_options(&SnakeOptions::default(), false);
    let mut canvas = Canvas::new();
    let mut source = Lengths(vec![]);
    let mut console = console("");

    session
        .run(&mut canvas, &mut source, &mut console, count(4))
        .expect("Sitzung darf nicht fehlschlagen");

    // Nur der Rahmen (5 Striche) plus die 4 Segmente der iterativen Phase
    assert_eq!(canvas.strokes().len(), 5 + 4);
    assert!(!canvas.turtle().visible);
}

#[test]
fn test_zero_segments_draw_only_the_boundary() {
    let session = SnakeSession::from_options(&SnakeOptions::default(), false);
    let mut canvas = Canvas::new();
    let mut source = RandomSegments::from_seed(Some(1));
    let mut console = console("\n");

    let report = session
        .run(&mut canvas, &mut source, &mut console, count(0))
        .expect("Sitzung darf nicht fehlschlagen");

    assert_eq!(report.recursive_total, 0);
    assert_eq!(report.iterative_total, 0);
    assert_eq!(canvas.strokes().len(), 5);
    assert!(output(&console).contains("The recursive snake is 0 units long."));
}

#[test]
fn test_boundary_uses_configured_pen() {
    let options = SnakeOptions {
        boundary_color: [0.2, 0.4, 0.6],
        boundary_pen_size: 3.0,
        ..SnakeOptions::default()
    };
    let session = SnakeSession::from_options(&options, false);
    let mut canvas = Canvas::new();

    session.prepare_canvas(&mut canvas);

    assert_eq!(canvas.size().x, 400.0);
    assert!(canvas
        .strokes()
        .iter()
        .all(|s| s.color == [0.2, 0.4, 0.6] && s.width == 3.0));
    assert_relative_eq!(canvas.position().x, 0.0, epsilon = 1e-3);
    assert_relative_eq!(canvas.position().y, 0.0, epsilon = 1e-3);
}

#[test]
fn test_session_on_shared_canvas_is_visible_to_reader() {
    let session = SnakeSession::from_options(&SnakeOptions::default(), true);
    let mut writer = SharedCanvas::new(Duration::ZERO);
    let reader = writer.clone();
    let mut source = RandomSegments::from_seed(Some(99));
    let mut console = console("\n");

    session
        .run(&mut writer, &mut source, &mut console, count(25))
        .expect("Sitzung darf nicht fehlschlagen");

    let snapshot = reader.snapshot().expect("Snapshot erwartet");
    assert_eq!(snapshot.strokes().len(), 5 + 25);
}

#[test]
fn test_invalid_counts_are_rejected_before_drawing() {
    for value in [501, -1] {
        let err = SegmentCount::new(value, 500).expect_err("Fehler erwartet");
        assert!(matches!(err, SnakeError::InvalidSegmentCount { .. }));
        assert_eq!(
            err.to_string(),
            "Segments must be between 0 and 500 inclusive."
        );
    }
    assert!(SegmentCount::new(0, 500).is_ok());
    assert!(SegmentCount::new(500, 500).is_ok());
}

#[test]
fn test_prompt_then_session_from_single_input_stream() {
    let mut console = console("3\n\n");
    let count = console
        .prompt_segment_count(500)
        .expect("Eingabe gültig");

    let session = SnakeSession::from_options(&SnakeOptions::default(), false);
    let mut canvas = Canvas::new();
    let report = session
        .run(&mut canvas, &mut Lengths(vec![5, 12, 0, 5, 12, 0]), &mut console, count)
        .expect("Sitzung darf nicht fehlschlagen");

    assert_eq!(report.recursive_total, 17);
    assert_eq!(report.iterative_total, 17);
}
