//! Turtle-Snake Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{
    border_correct, draw_bounding_box, draw_segment, draw_snake_iterative, draw_snake_recursive,
    Phase, SegmentCount, SessionReport, SnakeConfig, SnakeError, SnakeSession,
};
pub use crate::core::{
    BoundingRegion, Camera2D, Canvas, DrawingSurface, Edge, RandomSegments, Segment,
    SegmentLimits, SegmentSource, SharedCanvas, Stroke, Turtle,
};
pub use shared::SnakeOptions;
pub use ui::Console;
