//! Sticky-header resolution.
//!
//! Pure functions of the cached boundary frames, the scroll offset, and the
//! layout constants, kept apart from the placement pass so the clamp math
//! is testable without running the O(n) recompute.
//!
//! The header scrolls normally with content until it reaches the top of the
//! viewport, floats there while its section's body is visible, then resumes
//! scrolling once the body is fully scrolled past.

use mosaic_geometry::Rect;

use crate::attributes::LayoutAttributes;
use crate::config::MasonryConfig;

/// Vertical range a section's header may float within, in layout
/// coordinates, before the header's own height is subtracted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct HeaderBoundaries {
    /// Top edge of the floating range.
    pub minimum: f32,
    /// Bottom edge of the floating range.
    pub maximum: f32,
}

/// Computes the floating range for the body section from the cached cell
/// frames.
///
/// The first body item is the second cached cell (index 0 is the full-width
/// featured item). Returns `None` when fewer than two cells are cached:
/// with no body items there is no range to stick within, and the caller
/// serves the unclamped base frame instead.
pub(crate) fn section_boundaries(
    cells: &[LayoutAttributes],
    config: &MasonryConfig,
) -> Option<HeaderBoundaries> {
    let first_body = cells.get(1)?;
    let last_body = cells.last()?;

    let header_extent = config.header_height + config.padding_sum();
    let mut minimum = first_body.frame.min_y() - header_extent;
    let mut maximum = last_body.frame.max_y() - header_extent;

    minimum -= config.section_inset.top;
    maximum += config.section_inset.vertical_sum();

    Some(HeaderBoundaries { minimum, maximum })
}

/// Clamps the header's Y position against the floating range.
///
/// Below `minimum - height` the header rides at the top of its range, above
/// `maximum - height` it parks at the bottom, and in between it tracks the
/// scroll offset exactly, pinned to the viewport top.
pub(crate) fn resolve_header_frame(
    base: Rect,
    boundaries: HeaderBoundaries,
    scroll_offset_y: f32,
) -> Rect {
    let minimum = boundaries.minimum - base.height;
    let maximum = boundaries.maximum - base.height;

    let y = if scroll_offset_y < minimum {
        minimum
    } else if scroll_offset_y > maximum {
        maximum
    } else {
        scroll_offset_y
    };

    Rect { y, ..base }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::{ItemId, LayoutAttributes};
    use mosaic_geometry::EdgeInsets;

    fn cell(y: f32, height: f32) -> LayoutAttributes {
        LayoutAttributes::cell(ItemId::new(1, 0), Rect::new(5.0, y, 165.0, height))
    }

    #[test]
    fn boundaries_follow_first_and_last_body_frames() {
        let config = MasonryConfig::default();
        let cells = vec![cell(5.0, 113.3), cell(178.3, 165.0), cell(353.3, 165.0)];

        let boundaries = section_boundaries(&cells, &config).unwrap();
        // header_extent = 50 + 10 = 60
        assert_eq!(boundaries.minimum, 178.3 - 60.0);
        assert_eq!(boundaries.maximum, 353.3 + 165.0 - 60.0);
    }

    #[test]
    fn section_insets_widen_the_range() {
        let config = MasonryConfig {
            section_inset: EdgeInsets::from_components(0.0, 8.0, 0.0, 12.0),
            ..MasonryConfig::default()
        };
        let cells = vec![cell(0.0, 100.0), cell(200.0, 150.0)];

        let plain = section_boundaries(&cells, &MasonryConfig::default()).unwrap();
        let inset = section_boundaries(&cells, &config).unwrap();
        assert_eq!(inset.minimum, plain.minimum - 8.0);
        assert_eq!(inset.maximum, plain.maximum + 20.0);
    }

    #[test]
    fn fewer_than_two_cells_yields_no_boundaries() {
        let config = MasonryConfig::default();
        assert!(section_boundaries(&[], &config).is_none());
        assert!(section_boundaries(&[cell(0.0, 100.0)], &config).is_none());
    }

    #[test]
    fn header_scrolls_with_content_below_minimum() {
        let base = Rect::new(5.0, 100.0, 340.0, 40.0);
        let bounds = HeaderBoundaries {
            minimum: 150.0,
            maximum: 800.0,
        };

        // minimum - height = 110; any offset below that parks the header.
        let resolved = resolve_header_frame(base, bounds, -50.0);
        assert_eq!(resolved.y, 110.0);
        let resolved = resolve_header_frame(base, bounds, 109.0);
        assert_eq!(resolved.y, 110.0);
    }

    #[test]
    fn header_tracks_scroll_offset_inside_range() {
        let base = Rect::new(5.0, 100.0, 340.0, 40.0);
        let bounds = HeaderBoundaries {
            minimum: 150.0,
            maximum: 800.0,
        };

        for offset in [110.0, 300.0, 759.9] {
            let resolved = resolve_header_frame(base, bounds, offset);
            assert_eq!(resolved.y, offset);
        }
    }

    #[test]
    fn header_parks_at_maximum_past_section_end() {
        let base = Rect::new(5.0, 100.0, 340.0, 40.0);
        let bounds = HeaderBoundaries {
            minimum: 150.0,
            maximum: 800.0,
        };

        let resolved = resolve_header_frame(base, bounds, 5000.0);
        assert_eq!(resolved.y, 760.0);
    }

    #[test]
    fn resolution_only_moves_the_y_origin() {
        let base = Rect::new(5.0, 100.0, 340.0, 40.0);
        let bounds = HeaderBoundaries {
            minimum: 150.0,
            maximum: 800.0,
        };

        let resolved = resolve_header_frame(base, bounds, 300.0);
        assert_eq!(resolved.x, base.x);
        assert_eq!(resolved.width, base.width);
        assert_eq!(resolved.height, base.height);
    }
}
