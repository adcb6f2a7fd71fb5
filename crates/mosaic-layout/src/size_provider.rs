//! Size provider trait for masonry measurement.
//!
//! This module defines the [`MasonryItemSizeProvider`] trait through which
//! the engine obtains per-item intrinsic sizes during a measurement pass.

use mosaic_geometry::Size;

use crate::attributes::ItemId;

/// Supplies the intrinsic (natural, unscaled) size of each item.
///
/// The engine calls this synchronously while measuring and treats answers as
/// pure for the lifetime of one pass: an item is queried at most once per
/// pass, and the populated cache is never re-validated against the provider.
/// Implementations should be immutable; changes to the data source should
/// invalidate the layout rather than mutate the provider.
pub trait MasonryItemSizeProvider {
    /// Returns the intrinsic size for the item, or `None` to request the
    /// engine's fallback size.
    fn item_size(&self, id: ItemId) -> Option<Size>;
}

/// Closures can serve as providers directly, which keeps hosts and tests
/// free of one-off wrapper types.
impl<F> MasonryItemSizeProvider for F
where
    F: Fn(ItemId) -> Option<Size>,
{
    fn item_size(&self, id: ItemId) -> Option<Size> {
        self(id)
    }
}
