//! Application-Layer: Rahmen, Randkorrektur, Schlangen-Generatoren und Ablauf.

pub mod border;
pub mod boundary;
pub mod error;
pub mod session;
/// Rekursiver und iterativer Schlangen-Generator
///
/// Beide Varianten teilen sich den Einzelschritt `draw_segment`.
pub mod snake;

pub use border::border_correct;
pub use boundary::draw_bounding_box;
pub use error::{SegmentCount, SnakeError};
pub use session::{Phase, SessionReport, SnakeSession};
pub use snake::{draw_segment, draw_snake_iterative, draw_snake_recursive, SnakeConfig};
