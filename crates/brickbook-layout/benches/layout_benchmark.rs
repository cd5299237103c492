//! Layout engine benchmarks.

use brickbook_layout::{
    pack_all, GridLayout, LayoutConfig, PageTree, PartColor, PartEntry, PartListPage, Rect, Size,
};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn step_sizes(count: usize) -> Vec<Size> {
    (0..count)
        .map(|i| Size::saturating(80.0 + (i % 7) as f64 * 10.0, 60.0 + (i % 5) as f64 * 15.0))
        .collect()
}

fn parts(count: usize) -> Vec<PartEntry<usize>> {
    (0..count)
        .map(|i| {
            let color = PartColor::from_rgb8((i * 37 % 256) as u8, (i * 91 % 256) as u8, 0);
            PartEntry::new(i, Size::saturating(40.0 + (i % 9) as f64 * 12.0, 70.0))
                .with_color(color)
        })
        .collect()
}

fn grid_compute(c: &mut Criterion) {
    let bounds = Rect::from_size(Size::saturating(770.0, 570.0));
    let sizes = step_sizes(24);
    let grid = GridLayout::default();
    c.bench_function("grid_compute_24", |b| {
        b.iter(|| grid.compute(black_box(bounds), black_box(&sizes)))
    });
}

fn pack_parts_list(c: &mut Criterion) {
    let config = LayoutConfig::default();
    c.bench_function("pack_all_500", |b| {
        b.iter(|| {
            let mut number = 1;
            pack_all(
                &config,
                PartListPage::new(number, config.page_size),
                black_box(parts(500)),
                || {
                    number += 1;
                    PartListPage::new(number, config.page_size)
                },
            )
        })
    });
}

fn nested_page_layout(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let mut tree = PageTree::new(config.page_size);
    let page = tree.add_page(1);
    for size in step_sizes(6) {
        if let Ok(step) = tree.add_step(page, size) {
            if let Ok(callout) = tree.add_callout(step, Size::saturating(40.0, 40.0)) {
                let _ = tree.add_step(callout, Size::saturating(10.0, 10.0));
            }
        }
    }
    c.bench_function("init_layout_nested", |b| {
        b.iter(|| tree.init_layout(black_box(page), &config))
    });
}

criterion_group!(benches, grid_compute, pack_parts_list, nested_page_layout);
criterion_main!(benches);
