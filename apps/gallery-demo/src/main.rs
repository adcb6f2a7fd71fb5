//! Gallery demo: a text-mode stand-in for a photo-feed host.
//!
//! Feeds a canned library of intrinsic photo sizes through the masonry
//! engine, then simulates a scroll session: on each tick it queries the
//! visible attributes the way a rendering host would and logs what the
//! viewport shows, sticky header included.

use anyhow::{ensure, Result};
use mosaic_geometry::{EdgeInsets, Rect, Size};
use mosaic_layout::{
    AttributeKind, ItemId, MasonryConfig, MasonryItemSizeProvider, MasonryLayout, SectionCounts,
    SECTION_FEATURED,
};

const VIEWPORT_WIDTH: f32 = 350.0;
const VIEWPORT_HEIGHT: f32 = 700.0;
const SCROLL_STEP: f32 = 120.0;

/// Canned photo library: the profile banner plus a body feed of mixed
/// portrait/landscape/square shots.
struct PhotoLibrary {
    banner: Size,
    photos: Vec<Size>,
}

impl PhotoLibrary {
    fn sample() -> Self {
        Self {
            banner: Size::new(360.0, 120.0),
            photos: vec![
                Size::new(1080.0, 1350.0),
                Size::new(1920.0, 1080.0),
                Size::new(1080.0, 1080.0),
                Size::new(750.0, 1334.0),
                Size::new(4032.0, 3024.0),
                Size::new(1080.0, 1920.0),
                Size::new(3024.0, 4032.0),
                Size::new(1280.0, 720.0),
                Size::new(2048.0, 2048.0),
                Size::new(640.0, 960.0),
            ],
        }
    }

    fn body_count(&self) -> usize {
        self.photos.len()
    }
}

impl MasonryItemSizeProvider for PhotoLibrary {
    fn item_size(&self, id: ItemId) -> Option<Size> {
        if id.section == SECTION_FEATURED {
            Some(self.banner)
        } else {
            self.photos.get(id.item).copied()
        }
    }
}

fn describe(kind: AttributeKind) -> &'static str {
    match kind {
        AttributeKind::Cell => "cell",
        AttributeKind::Header => "header",
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let library = PhotoLibrary::sample();
    let mut layout = MasonryLayout::new(MasonryConfig::default());
    layout.set_viewport(VIEWPORT_WIDTH, EdgeInsets::ZERO);
    layout.recompute(SectionCounts::new(library.body_count()), &library);
    ensure!(layout.is_populated(), "layout cache did not populate");

    let content = layout.content_size();
    log::info!(
        "content size {:.1} x {:.1} for {} photos",
        content.width,
        content.height,
        library.body_count()
    );

    let max_offset = (content.height - VIEWPORT_HEIGHT).max(0.0);
    let mut offset = 0.0;
    while offset <= max_offset {
        let viewport = Rect::new(0.0, offset, VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
        let visible = layout.attributes_in_rect(viewport);

        log::info!("-- scroll offset {offset:.0}: {} visible --", visible.len());
        for attrs in &visible {
            log::info!(
                "  {} ({},{}) at ({:.1}, {:.1}) {:.1}x{:.1} z={}",
                describe(attrs.kind),
                attrs.id.section,
                attrs.id.item,
                attrs.frame.x,
                attrs.frame.y,
                attrs.frame.width,
                attrs.frame.height,
                attrs.z_order,
            );
        }

        offset += SCROLL_STEP;
    }

    Ok(())
}
