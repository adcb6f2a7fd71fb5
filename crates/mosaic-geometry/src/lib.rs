//! Pure math/data for geometry & units in Mosaic
//!
//! This crate contains the geometry primitives shared across the Mosaic
//! layout engine and its hosts: points, sizes, rectangles, and edge insets.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{EdgeInsets, Point, Rect, Size};
}
