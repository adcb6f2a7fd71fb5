//! The masonry placement pass.
//!
//! One synchronous walk over all items: the full-width featured cell first,
//! then one header slot per section, then the body items balanced across
//! columns round-robin. Results land wholesale in the engine's
//! [`LayoutState`](crate::state::LayoutState).

use mosaic_geometry::{Rect, Size};

use crate::attributes::{ItemId, LayoutAttributes};
use crate::config::{MasonryConfig, FALLBACK_ITEM_SIZE};
use crate::engine::{SectionCounts, SECTION_BODY, SECTION_COUNT, SECTION_FEATURED};
use crate::size_provider::MasonryItemSizeProvider;
use crate::state::LayoutState;

/// Places every frame for one viewport width.
///
/// Borrows the config and provider for the duration of the pass. The pass is
/// deterministic: identical counts, provider answers, and content width
/// produce bit-identical frames.
pub(crate) struct PlacementPass<'a, P: ?Sized> {
    provider: &'a P,
    config: &'a MasonryConfig,
    content_width: f32,
}

impl<'a, P> PlacementPass<'a, P>
where
    P: MasonryItemSizeProvider + ?Sized,
{
    pub fn new(provider: &'a P, config: &'a MasonryConfig, content_width: f32) -> Self {
        Self {
            provider,
            config,
            content_width,
        }
    }

    /// Runs the full pass, filling `state` from its Empty condition.
    pub fn run(&self, counts: SectionCounts, state: &mut LayoutState) {
        let column_width = self.content_width / self.config.column_count as f32;

        state
            .column_cursors
            .resize(self.config.column_count, 0.0);

        self.place_featured_cell(state);
        self.place_headers(state);
        self.place_body_cells(counts.body_items, column_width, state);
    }

    /// Section 0: the single item spanning both columns, scaled to the full
    /// content width. Its height is recorded so the body pass can reserve
    /// the space above the first row.
    fn place_featured_cell(&self, state: &mut LayoutState) {
        let id = ItemId::new(SECTION_FEATURED, 0);
        let height = self.scaled_height(id, self.content_width);
        state.first_cell_height = height;

        let frame = Rect::new(0.0, 0.0, self.content_width, height);
        self.push_cell(id, frame, state);
    }

    /// One header slot per section, directly beneath the featured cell,
    /// spanning the full content width. Section 0's slot is computed but
    /// never surfaced by the query side.
    fn place_headers(&self, state: &mut LayoutState) {
        let padding = self.config.cell_padding;
        for section in 0..SECTION_COUNT {
            let frame = Rect::new(
                0.0,
                state.first_cell_height,
                self.content_width,
                self.config.header_height,
            );
            state
                .headers
                .push(LayoutAttributes::header(section, frame.inset_by(padding, padding)));
            state.content_height = state.content_height.max(frame.max_y());
        }
    }

    /// Section 1: N items assigned round-robin to columns. The first row
    /// advances its cursors past the featured cell and the header before
    /// placing, which pins that reserved space above the body.
    fn place_body_cells(&self, body_items: usize, column_width: f32, state: &mut LayoutState) {
        for item in 0..body_items {
            let column = item % self.config.column_count;
            let id = ItemId::new(SECTION_BODY, item);
            let height = self.scaled_height(id, column_width);

            if item < self.config.column_count {
                state.column_cursors[column] +=
                    state.first_cell_height + self.config.header_height;
            }

            let frame = Rect::new(
                column as f32 * column_width,
                state.column_cursors[column],
                column_width,
                height,
            );
            self.push_cell(id, frame, state);
            state.column_cursors[column] += height;
        }
    }

    fn push_cell(&self, id: ItemId, frame: Rect, state: &mut LayoutState) {
        let padding = self.config.cell_padding;
        state
            .cells
            .push(LayoutAttributes::cell(id, frame.inset_by(padding, padding)));
        state.content_height = state.content_height.max(frame.max_y());
    }

    /// Scales the item's intrinsic aspect ratio to `width_basis`, padding
    /// included: `padding*2 + (basis - padding*2) / w * h`.
    fn scaled_height(&self, id: ItemId, width_basis: f32) -> f32 {
        let size = self.resolve_size(id);
        self.config.padding_sum()
            + (width_basis - self.config.padding_sum()) / size.width * size.height
    }

    /// Resolves the intrinsic size, substituting the fallback for absent or
    /// degenerate answers so the scaling divide stays finite.
    fn resolve_size(&self, id: ItemId) -> Size {
        match self.provider.item_size(id) {
            Some(size) if size.is_valid_aspect_source() => size,
            Some(size) => {
                log::warn!(
                    "masonry: degenerate intrinsic size {:?} for item {:?}, using fallback",
                    size,
                    id
                );
                FALLBACK_ITEM_SIZE
            }
            None => FALLBACK_ITEM_SIZE,
        }
    }
}
