//! UI-Komponenten: Konsole, Fenster-Ansicht und Status-Bar.

pub mod console;
pub mod status;
/// Fenster-Ansicht mit egui
///
/// Liest Snapshots der geteilten Zeichenfläche und zeichnet sie
/// über die `Camera2D` in den Viewport.
pub mod viewer;

pub use console::Console;
pub use status::render_status_bar;
pub use viewer::{run_viewer, SnakeViewerApp};
