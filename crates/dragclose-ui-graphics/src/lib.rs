//! Pure geometry for dragclose
//!
//! Points, sizes, rectangles and insets in logical pixels. Every other
//! crate in the workspace talks about panel positions through these types.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
