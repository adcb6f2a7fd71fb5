//! Configuration for masonry measurement.

use mosaic_geometry::{EdgeInsets, Size};

/// Number of balanced columns in the body section.
pub const DEFAULT_COLUMN_COUNT: usize = 2;

/// Padding applied on every side of a placed frame, in layout units.
pub const DEFAULT_CELL_PADDING: f32 = 5.0;

/// Height reserved for a section header before padding is applied.
pub const DEFAULT_HEADER_HEIGHT: f32 = 50.0;

/// Fallback intrinsic size used when the size provider declines to answer
/// or returns a size that cannot be used as an aspect-ratio source.
pub const FALLBACK_ITEM_SIZE: Size = Size::new(180.0, 180.0);

/// Configuration for a [`MasonryLayout`](crate::MasonryLayout).
///
/// Plain value struct; hosts construct one per layout instance and the
/// engine treats it as immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MasonryConfig {
    /// Number of columns the body section is balanced across.
    pub column_count: usize,
    /// Padding on every side of a placed frame (applied via inset-by).
    pub cell_padding: f32,
    /// Height of the section header slot.
    pub header_height: f32,
    /// Extra inset around a section's body, fed into the sticky boundaries.
    pub section_inset: EdgeInsets,
    /// When false the header scrolls with its section instead of sticking;
    /// same engine, clamping disabled.
    pub sticky_headers: bool,
}

impl Default for MasonryConfig {
    fn default() -> Self {
        Self {
            column_count: DEFAULT_COLUMN_COUNT,
            cell_padding: DEFAULT_CELL_PADDING,
            header_height: DEFAULT_HEADER_HEIGHT,
            section_inset: EdgeInsets::ZERO,
            sticky_headers: true,
        }
    }
}

impl MasonryConfig {
    /// Padding above and below a header or cell frame combined.
    #[inline]
    pub(crate) fn padding_sum(&self) -> f32 {
        self.cell_padding * 2.0
    }
}
