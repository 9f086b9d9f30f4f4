// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_placement::{Placement, resolve};

const VIEWPORT: Size = Size::new(1280.0, 800.0);
const OVERLAY: Size = Size::new(160.0, 48.0);

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

/// Anchors scattered over the viewport, so every position in the fallback chain gets exercised.
fn gen_anchors(count: usize) -> Vec<Rect> {
    let mut rng = Rng::new(0x9E37_79B9_7F4A_7C15);
    (0..count)
        .map(|_| {
            let x = rng.next_f64() * VIEWPORT.width;
            let y = rng.next_f64() * VIEWPORT.height;
            Rect::from_origin_size(Point::new(x, y), Size::new(48.0, 24.0))
        })
        .collect()
}

fn bench_resolve(c: &mut Criterion) {
    let anchors = gen_anchors(1024);
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(anchors.len() as u64));
    for (name, preferred) in [
        ("auto", Placement::Auto),
        ("top", Placement::Top),
        ("left", Placement::Left),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &anchor in &anchors {
                    black_box(resolve(
                        black_box(preferred),
                        anchor,
                        OVERLAY,
                        8.0,
                        Vec2::new(0.0, 120.0),
                        VIEWPORT,
                    ));
                }
            });
        });
    }
    group.finish();
}

fn bench_oversized(c: &mut Criterion) {
    // Nothing fits: all four candidates are tested every call.
    let anchors = gen_anchors(1024);
    let big = Size::new(2000.0, 1500.0);
    c.bench_function("resolve/none_fit", |b| {
        b.iter(|| {
            for &anchor in &anchors {
                black_box(resolve(Placement::Auto, anchor, big, 8.0, Vec2::ZERO, VIEWPORT));
            }
        });
    });
}

criterion_group!(benches, bench_resolve, bench_oversized);
criterion_main!(benches);
