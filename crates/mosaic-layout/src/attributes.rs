//! Layout attributes produced by measurement.
//!
//! A [`LayoutAttributes`] is the engine's answer for one element: who it is,
//! where it goes, and how it stacks against overlapping elements.

use mosaic_geometry::Rect;

/// Draw order for cells; headers render above them.
pub const Z_ORDER_CELL: i32 = 0;

/// Elevated draw order assigned to sticky headers so they render above any
/// cell frames they float over.
pub const Z_ORDER_HEADER: i32 = 10;

/// Identity of one item: (section, item) pair, stable for the lifetime of a
/// measurement pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemId {
    /// Section the item belongs to.
    pub section: usize,
    /// Index of the item within its section.
    pub item: usize,
}

impl ItemId {
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

/// What kind of element an attribute describes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttributeKind {
    /// A content cell.
    Cell,
    /// A section header.
    Header,
}

/// A placed element: identity, frame in layout coordinates, and draw order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutAttributes {
    /// Identity of the element. For headers, `item` is always 0.
    pub id: ItemId,
    /// Frame in the layout coordinate space, already inset by cell padding.
    pub frame: Rect,
    /// Cell or header.
    pub kind: AttributeKind,
    /// Draw order; higher values render on top.
    pub z_order: i32,
}

impl LayoutAttributes {
    /// Creates attributes for a content cell.
    pub fn cell(id: ItemId, frame: Rect) -> Self {
        Self {
            id,
            frame,
            kind: AttributeKind::Cell,
            z_order: Z_ORDER_CELL,
        }
    }

    /// Creates attributes for a section header.
    pub fn header(section: usize, frame: Rect) -> Self {
        Self {
            id: ItemId::new(section, 0),
            frame,
            kind: AttributeKind::Header,
            z_order: Z_ORDER_HEADER,
        }
    }

    /// Returns true if this attribute describes a header.
    #[inline]
    pub fn is_header(&self) -> bool {
        self.kind == AttributeKind::Header
    }
}
