//! Engine-owned layout state.
//!
//! All mutable measurement results live in one [`LayoutState`] value owned
//! exclusively by the engine. The state is either Empty (no cached frames)
//! or Populated (cache complete for the current viewport width); no partial
//! state is ever observable.

use smallvec::SmallVec;

use crate::attributes::LayoutAttributes;

/// Inline capacity for per-column cursors. Two columns is the standard
/// configuration, so four avoids heap allocation with headroom.
pub(crate) type ColumnCursors = SmallVec<[f32; 4]>;

/// Measurement results for the current viewport width.
///
/// Born empty, filled wholesale by one placement pass, dropped wholesale on
/// invalidation. Individual entries are never mutated after creation.
#[derive(Clone, Debug, Default)]
pub(crate) struct LayoutState {
    /// Running Y cursor per column, advanced as frames are placed.
    pub column_cursors: ColumnCursors,
    /// Height of the full-width section-0 item, padding included.
    pub first_cell_height: f32,
    /// Running maximum over all placed frame bottoms.
    pub content_height: f32,
    /// Placed cell attributes in placement order: the section-0 item first,
    /// then the body items of section 1.
    pub cells: Vec<LayoutAttributes>,
    /// One header slot per section, indexed by section.
    pub headers: Vec<LayoutAttributes>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when a placement pass has filled the caches.
    pub fn is_populated(&self) -> bool {
        !self.cells.is_empty() && !self.headers.is_empty()
    }

    /// Drops every cached frame and cursor, returning to the Empty state.
    /// Retains allocated capacity for the next pass.
    pub fn clear(&mut self) {
        self.column_cursors.clear();
        self.first_cell_height = 0.0;
        self.content_height = 0.0;
        self.cells.clear();
        self.headers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{ItemId, LayoutAttributes};
    use mosaic_geometry::Rect;

    #[test]
    fn starts_empty() {
        let state = LayoutState::new();
        assert!(!state.is_populated());
        assert_eq!(state.content_height, 0.0);
    }

    #[test]
    fn populated_requires_cells_and_headers() {
        let mut state = LayoutState::new();
        state
            .cells
            .push(LayoutAttributes::cell(ItemId::new(0, 0), Rect::ZERO));
        assert!(!state.is_populated());

        state.headers.push(LayoutAttributes::header(0, Rect::ZERO));
        assert!(state.is_populated());
    }

    #[test]
    fn clear_returns_to_empty() {
        let mut state = LayoutState::new();
        state.column_cursors.push(12.0);
        state.first_cell_height = 100.0;
        state.content_height = 400.0;
        state
            .cells
            .push(LayoutAttributes::cell(ItemId::new(0, 0), Rect::ZERO));
        state.headers.push(LayoutAttributes::header(0, Rect::ZERO));

        state.clear();

        assert!(!state.is_populated());
        assert!(state.column_cursors.is_empty());
        assert_eq!(state.first_cell_height, 0.0);
        assert_eq!(state.content_height, 0.0);
    }
}
