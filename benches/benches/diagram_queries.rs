// Copyright 2025 the Trellis Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use trellis_diagram::Diagram;
use trellis_query::Envelope;

/// `n` by `n` grid of alternating circles and rects, composed flat with `atop`.
fn gen_wide(n: usize, cell: f64) -> Diagram {
    let mut out = Diagram::empty();
    for y in 0..n {
        for x in 0..n {
            let shape = if (x + y) % 2 == 0 {
                Diagram::circle(cell * 0.4)
            } else {
                Diagram::rect(cell * 0.8, cell * 0.6)
            };
            out = out.atop(&shape.translate(x as f64 * cell, y as f64 * cell));
        }
    }
    out
}

/// A single shape under `depth` nested transform and name nodes.
fn gen_deep(depth: usize) -> Diagram {
    let mut out = Diagram::rect(2.0, 1.0);
    for i in 0..depth {
        out = out
            .named(format!("n{i}"))
            .rotate_degrees(7.0)
            .translate(1.0, 0.5);
    }
    out
}

fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("envelope");
    for &n in &[8usize, 16, 32] {
        let d = gen_wide(n, 10.0);
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("build_wide_n{}", n), |b| {
            b.iter(|| black_box(d.envelope()));
        });
        let env = d.envelope();
        group.bench_function(format!("eval_wide_n{}", n), |b| {
            b.iter(|| black_box(env.eval(Vec2::new(0.6, 0.8))));
        });
    }
    for &depth in &[16usize, 64, 256] {
        let d = gen_deep(depth);
        group.bench_function(format!("width_deep_{}", depth), |b| {
            b.iter(|| black_box(d.envelope().width()));
        });
    }
    group.finish();
}

fn bench_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("trace");
    for &n in &[8usize, 16, 32] {
        let d = gen_wide(n, 10.0);
        let t = d.trace();
        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_function(format!("trace_p_wide_n{}", n), |b| {
            b.iter(|| black_box(t.trace_p(Point::new(-5.0, 3.0), Vec2::new(1.0, 0.05))));
        });
    }
    for &depth in &[16usize, 64, 256] {
        let d = gen_deep(depth);
        group.bench_function(format!("trace_v_deep_{}", depth), |b| {
            b.iter(|| black_box(d.trace().trace_v(Point::ORIGIN, Vec2::new(1.0, 0.0))));
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout");
    for &n in &[16usize, 64] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("beside_row_n{}", n), |b| {
            b.iter_batched(
                || Diagram::circle(1.0),
                |unit| {
                    let mut row = unit.clone();
                    for _ in 1..n {
                        row = row
                            .beside(&unit, Vec2::new(1.0, 0.0))
                            .expect("nonzero direction");
                    }
                    black_box(row.envelope().width())
                },
                BatchSize::SmallInput,
            )
        });
    }
    let deep = gen_deep(64);
    group.bench_function("subdiagram_lookup_deep_64", |b| {
        b.iter(|| black_box(deep.get_subdiagram_envelope("n0").map(|e: Envelope| e.center())));
    });
    group.finish();
}

criterion_group!(benches, bench_envelope, bench_trace, bench_layout);
criterion_main!(benches);
