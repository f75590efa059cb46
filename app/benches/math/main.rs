/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use criterion::{Criterion, criterion_group, criterion_main};
use fastmath::{atan2, cbrt, cos, exp, log, pow, sin, tan};
use std::hint::black_box;

pub fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("libm::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("system::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(f64::sin(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("fastmath::sin", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("libm::sin huge", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::sin(i as f64 * 1e17));
            }
        })
    });

    c.bench_function("fastmath::sin huge", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(sin(i as f64 * 1e17));
            }
        })
    });

    c.bench_function("libm::cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cos(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("fastmath::cos", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cos(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("libm::tan", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::tan(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("fastmath::tan", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(tan(i as f64 * 0.37));
            }
        })
    });

    c.bench_function("libm::exp", |b| {
        b.iter(|| {
            for i in 1..10000 {
                black_box(libm::exp(i as f64 / 10000.0 - 1.));
            }
        })
    });

    c.bench_function("system::exp", |b| {
        b.iter(|| {
            for i in 1..10000 {
                black_box(f64::exp(i as f64 / 10000.0 - 1.));
            }
        })
    });

    c.bench_function("fastmath::exp", |b| {
        b.iter(|| {
            for i in 1..10000 {
                black_box(exp(i as f64 / 10000.0 - 1.));
            }
        })
    });

    c.bench_function("libm::log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::log(i as f64));
            }
        })
    });

    c.bench_function("fastmath::log", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(log(i as f64));
            }
        })
    });

    c.bench_function("libm::pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::pow(i as f64, 0.5321));
            }
        })
    });

    c.bench_function("fastmath::pow", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(pow(i as f64, 0.5321));
            }
        })
    });

    c.bench_function("libm::cbrt", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::cbrt(i as f64));
            }
        })
    });

    c.bench_function("fastmath::cbrt", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(cbrt(i as f64));
            }
        })
    });

    c.bench_function("libm::atan2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(libm::atan2(i as f64, 500.0));
            }
        })
    });

    c.bench_function("fastmath::atan2", |b| {
        b.iter(|| {
            for i in 1..1000 {
                black_box(atan2(i as f64, 500.0));
            }
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
