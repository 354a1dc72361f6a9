//! Core-Domänentypen: Turtle, Zeichenfläche, Segmente, Begrenzung, Kamera.

pub mod camera;
pub mod canvas;
pub mod region;
pub mod segment;
pub mod surface;
pub mod turtle;

pub use camera::Camera2D;
pub use canvas::{Canvas, SharedCanvas, Stroke};
pub use region::{BoundingRegion, Edge};
pub use segment::{RandomSegments, Segment, SegmentLimits, SegmentSource};
pub use surface::DrawingSurface;
pub use turtle::{Pen, Turtle};
