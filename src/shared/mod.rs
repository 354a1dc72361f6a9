//! Geteilte Typen für layer-übergreifende Verträge.
//!
//! Enthält die Laufzeit-Optionen, die `app`, `ui` und die Binary teilen.

pub mod options;

pub use options::SnakeOptions;
pub use options::{BACKGROUND_COLOR, WINDOW_SIZE};
