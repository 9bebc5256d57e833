// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use understory_viewport_tracker::{ListConfig, ScrollHost, Signal, WindowedList};
use understory_virtual_list::{ItemGeometry, Viewport, compute_range, render_window};

const ROW: f64 = 24.0;
const CONTAINER: f64 = 720.0;

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u32(&mut self) -> u32 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 32) as u32
    }

    /// Scroll offsets spread over the whole content.
    fn offsets(&mut self, len: usize, count: usize) -> Vec<f64> {
        let content = len as f64 * ROW;
        (0..count)
            .map(|_| f64::from(self.next_u32()) / f64::from(u32::MAX) * content)
            .collect()
    }
}

struct Element;

impl ScrollHost for Element {
    type Subscription = Signal;

    fn subscribe(&mut self, signal: Signal) -> Signal {
        signal
    }

    fn unsubscribe(&mut self, _: Signal) {}

    fn scroll_offset(&self) -> f64 {
        0.0
    }

    fn content_box(&self) -> Size {
        Size::new(480.0, CONTAINER)
    }
}

fn bench_virtual_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("understory_virtual_list");
    group.sample_size(50);

    for &len in &[1_000_usize, 100_000, 10_000_000] {
        let offsets = Lcg::new(0x5C20_11ED_0000_0001).offsets(len, 1_024);

        group.bench_function(format!("compute_range(len={len})"), |b| {
            b.iter(|| {
                let mut acc = 0_usize;
                for &offset in &offsets {
                    let range = compute_range(offset, CONTAINER, ROW, 3, black_box(len));
                    acc = acc.wrapping_add(range.start ^ range.end);
                }
                black_box(acc);
            });
        });

        let items: Vec<u32> = (0..u32::try_from(len).unwrap_or(u32::MAX)).collect();
        let geometry = ItemGeometry::new(ROW, 3);

        group.bench_function(format!("render_window(len={len})"), |b| {
            b.iter(|| {
                let mut acc = 0_u64;
                for &offset in &offsets {
                    let range = Viewport::new(offset, CONTAINER).visible_range(&geometry, len);
                    for row in render_window(&items, range, geometry.item_extent) {
                        acc = acc.wrapping_add(u64::from(*row.item));
                    }
                }
                black_box(acc);
            });
        });

        group.bench_function(format!("scroll_and_render(len={len})"), |b| {
            b.iter_batched(
                || {
                    let mut list = WindowedList::new(ListConfig::new(ROW, CONTAINER));
                    list.attach(Element);
                    list
                },
                |mut list| {
                    let mut mounted = 0_usize;
                    for &offset in &offsets {
                        list.handle_scroll(offset);
                        let layout = list
                            .render(&items, |item, _| *item)
                            .expect("list is attached");
                        mounted += layout.rows.len();
                    }
                    black_box(mounted);
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_virtual_list);
criterion_main!(benches);
