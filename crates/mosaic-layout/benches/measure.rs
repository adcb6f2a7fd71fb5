use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mosaic_geometry::{EdgeInsets, Rect, Size};
use mosaic_layout::{ItemId, MasonryConfig, MasonryLayout, SectionCounts};

const BODY_ITEM_SAMPLES: &[usize] = &[64, 512, 4096];
const VIEWPORT_WIDTH: f32 = 350.0;
const VIEWPORT_HEIGHT: f32 = 700.0;

fn sizes(id: ItemId) -> Option<Size> {
    let seed = (id.section * 31 + id.item * 17) % 7;
    Some(Size::new(
        120.0 + seed as f32 * 30.0,
        90.0 + seed as f32 * 45.0,
    ))
}

fn populated(body_items: usize) -> MasonryLayout {
    let mut layout = MasonryLayout::new(MasonryConfig::default());
    layout.set_viewport(VIEWPORT_WIDTH, EdgeInsets::ZERO);
    layout.recompute(SectionCounts::new(body_items), &sizes);
    layout
}

fn bench_recompute(c: &mut Criterion) {
    let mut group = c.benchmark_group("recompute");
    for &body_items in BODY_ITEM_SAMPLES {
        group.bench_with_input(
            BenchmarkId::from_parameter(body_items),
            &body_items,
            |b, &body_items| {
                let mut layout = MasonryLayout::new(MasonryConfig::default());
                layout.set_viewport(VIEWPORT_WIDTH, EdgeInsets::ZERO);
                b.iter(|| {
                    layout.invalidate();
                    layout.recompute(SectionCounts::new(black_box(body_items)), &sizes);
                });
            },
        );
    }
    group.finish();
}

fn bench_attributes_in_rect(c: &mut Criterion) {
    let mut group = c.benchmark_group("attributes_in_rect");
    for &body_items in BODY_ITEM_SAMPLES {
        let layout = populated(body_items);
        let mid = layout.content_size().height / 2.0;
        group.bench_with_input(
            BenchmarkId::from_parameter(body_items),
            &layout,
            |b, layout| {
                b.iter(|| {
                    layout.attributes_in_rect(black_box(Rect::new(
                        0.0,
                        mid,
                        VIEWPORT_WIDTH,
                        VIEWPORT_HEIGHT,
                    )))
                });
            },
        );
    }
    group.finish();
}

fn bench_header_attributes(c: &mut Criterion) {
    let layout = populated(512);
    c.bench_function("header_attributes", |b| {
        b.iter(|| layout.header_attributes(1, black_box(420.0)));
    });
}

criterion_group!(
    benches,
    bench_recompute,
    bench_attributes_in_rect,
    bench_header_attributes
);
criterion_main!(benches);
