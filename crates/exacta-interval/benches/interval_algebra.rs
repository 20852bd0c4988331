// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use exacta_interval::{Interval, Range};
use std::hint::black_box;

/// `count` disjoint unit ranges spaced `stride` apart, starting at `offset`.
fn comb(count: i64, stride: i64, offset: i64) -> Interval<i64> {
    (0..count)
        .map(|i| Range::closed(offset + i * stride, offset + i * stride + 1))
        .collect()
}

/// Same shape over `f64`, with open upper bounds so that levels are kept.
fn float_comb(count: i64, stride: f64, offset: f64) -> Interval<f64> {
    (0..count)
        .map(|i| {
            let start = offset + i as f64 * stride;
            Range::closed_open(start, start + 1.0)
        })
        .collect()
}

fn bench_set_algebra(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_algebra");

    for &count in &[4_i64, 32, 256] {
        let a = comb(count, 4, 0);
        let b = comb(count, 4, 2);
        let fa = float_comb(count, 3.0, 0.0);
        let fb = float_comb(count, 3.0, 1.5);

        group.throughput(Throughput::Elements(count as u64));

        group.bench_with_input(BenchmarkId::new("union", count), &count, |bench, _| {
            bench.iter(|| black_box(&a) | black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("intersection", count), &count, |bench, _| {
            bench.iter(|| black_box(&a) & black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("complement", count), &count, |bench, _| {
            bench.iter(|| !black_box(&a))
        });
        group.bench_with_input(BenchmarkId::new("union_f64", count), &count, |bench, _| {
            bench.iter(|| black_box(&fa) | black_box(&fb))
        });
        group.bench_with_input(
            BenchmarkId::new("symmetric_difference_f64", count),
            &count,
            |bench, _| bench.iter(|| black_box(&fa) ^ black_box(&fb)),
        );
    }
    group.finish();
}

fn bench_enumeration(c: &mut Criterion) {
    let set = comb(64, 4, 0);
    c.bench_function("numbers", |bench| {
        bench.iter(|| black_box(&set).numbers(0, 1_000).sum::<i64>())
    });
}

criterion_group!(benches, bench_set_algebra, bench_enumeration);
criterion_main!(benches);
