//! The masonry layout engine.
//!
//! [`MasonryLayout`] owns the layout state and exposes the invalidation,
//! recompute, and query surfaces. It is single-threaded by design: the host
//! sequences `set_viewport`/`invalidate`, then `recompute`, then queries on
//! its render loop; queries are read-only and cheap once the cache is warm.

use mosaic_geometry::{EdgeInsets, Rect, Size};

use crate::attributes::LayoutAttributes;
use crate::config::MasonryConfig;
use crate::placement::PlacementPass;
use crate::size_provider::MasonryItemSizeProvider;
use crate::state::LayoutState;
use crate::sticky;

/// Section index of the single full-width featured item.
pub const SECTION_FEATURED: usize = 0;

/// Section index of the column-balanced body items.
pub const SECTION_BODY: usize = 1;

/// The layout always carries exactly these two sections.
pub(crate) const SECTION_COUNT: usize = 2;

/// Item counts supplied to each recompute.
///
/// The featured section structurally holds exactly one item, so only the
/// body count varies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SectionCounts {
    /// Number of items in the body section.
    pub body_items: usize,
}

impl SectionCounts {
    pub const fn new(body_items: usize) -> Self {
        Self { body_items }
    }
}

/// Host viewport: outer bounds width and content insets.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
struct Viewport {
    width: f32,
    insets: EdgeInsets,
}

/// Two-column masonry layout with a sticky body-section header.
///
/// State machine: **Empty** (initial; entered by [`invalidate`]) and
/// **Populated** (entered by [`recompute`]). Queries are defined in
/// Populated and degrade to empty results in Empty; they never recompute
/// implicitly.
///
/// [`invalidate`]: MasonryLayout::invalidate
/// [`recompute`]: MasonryLayout::recompute
#[derive(Debug, Default)]
pub struct MasonryLayout {
    config: MasonryConfig,
    viewport: Viewport,
    state: LayoutState,
}

impl MasonryLayout {
    pub fn new(config: MasonryConfig) -> Self {
        Self {
            config,
            viewport: Viewport::default(),
            state: LayoutState::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &MasonryConfig {
        &self.config
    }

    /// Width available for content: viewport width minus horizontal insets.
    #[inline]
    pub fn content_width(&self) -> f32 {
        self.viewport.width - self.viewport.insets.horizontal_sum()
    }

    /// Returns true when a placement pass has populated the cache.
    #[inline]
    pub fn is_populated(&self) -> bool {
        self.state.is_populated()
    }

    /// Updates the host viewport. A width change invalidates the whole
    /// cache before any attribute is served; inset-only changes do not.
    ///
    /// Returns true if the cache was invalidated.
    pub fn set_viewport(&mut self, width: f32, insets: EdgeInsets) -> bool {
        let width_changed = width != self.viewport.width;
        self.viewport = Viewport { width, insets };
        if width_changed {
            self.invalidate();
        }
        width_changed
    }

    /// Unconditionally clears the cell and header caches. Idempotent.
    pub fn invalidate(&mut self) {
        self.state.clear();
    }

    /// Runs the placement pass if the cache is empty; a no-op otherwise.
    ///
    /// Deterministic: identical counts and provider answers at the same
    /// viewport produce bit-identical frames. The provider is consulted at
    /// most once per item.
    pub fn recompute<P>(&mut self, counts: SectionCounts, provider: &P)
    where
        P: MasonryItemSizeProvider + ?Sized,
    {
        if self.state.is_populated() {
            return;
        }

        PlacementPass::new(provider, &self.config, self.content_width())
            .run(counts, &mut self.state);
    }

    /// Returns every cached cell whose frame intersects `rect`
    /// (edge-touching inclusive), plus the body section's sticky header,
    /// appended unconditionally so the header stays visible while its
    /// section is displayed, even when its own frame misses `rect`.
    ///
    /// The rect's top edge doubles as the scroll offset for the sticky
    /// resolution: the host queries with its visible bounds, whose origin
    /// is the content offset.
    ///
    /// Returns an empty list while the cache is Empty.
    pub fn attributes_in_rect(&self, rect: Rect) -> Vec<LayoutAttributes> {
        if !self.state.is_populated() {
            return Vec::new();
        }

        let mut attributes: Vec<LayoutAttributes> = self
            .state
            .cells
            .iter()
            .filter(|cell| cell.frame.intersects(&rect))
            .copied()
            .collect();

        if let Some(header) = self.header_attributes(SECTION_BODY, rect.min_y()) {
            attributes.push(header);
        }

        attributes
    }

    /// Returns the header for `section` at its sticky position for the
    /// given scroll offset.
    ///
    /// With fewer than two cached cells there is no body to stick within
    /// and the unclamped base frame is served. With sticking disabled in
    /// the config, the base frame is always served. Returns `None` for an
    /// unknown section or while the cache is Empty.
    pub fn header_attributes(
        &self,
        section: usize,
        scroll_offset_y: f32,
    ) -> Option<LayoutAttributes> {
        let base = self.state.headers.get(section)?;
        if !self.config.sticky_headers {
            return Some(*base);
        }

        match sticky::section_boundaries(&self.state.cells, &self.config) {
            Some(boundaries) => {
                let frame = sticky::resolve_header_frame(base.frame, boundaries, scroll_offset_y);
                Some(LayoutAttributes::header(section, frame))
            }
            None => Some(*base),
        }
    }

    /// The scrollable content size. The height is only meaningful in the
    /// Populated state.
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width(), self.state.content_height)
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;
