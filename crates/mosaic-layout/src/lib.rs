//! Masonry grid measurement & placement for Mosaic
//!
//! A two-column "masonry" (waterfall) layout engine: a single full-width
//! item in the first section, a second section of variable-aspect-ratio
//! items balanced across columns, and a section header that sticks within
//! the bounds of its section while the host scrolls.
//!
//! The engine owns all layout state. Hosts push viewport changes via
//! [`MasonryLayout::set_viewport`], trigger a measurement pass with
//! [`MasonryLayout::recompute`], and query frames on every scroll tick with
//! [`MasonryLayout::attributes_in_rect`] and
//! [`MasonryLayout::header_attributes`], both cheap once the cache is warm.

mod attributes;
mod config;
mod engine;
mod placement;
mod size_provider;
mod state;
mod sticky;

pub use attributes::*;
pub use config::*;
pub use engine::*;
pub use size_provider::*;

pub mod prelude {
    pub use crate::attributes::{AttributeKind, ItemId, LayoutAttributes};
    pub use crate::config::MasonryConfig;
    pub use crate::engine::{MasonryLayout, SectionCounts};
    pub use crate::size_provider::MasonryItemSizeProvider;
}
