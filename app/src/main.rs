/*
 * // Copyright 2024 (c) the Radzivon Bartoshyk. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
use rand::Rng;

fn ulp_distance(a: f64, b: f64) -> u64 {
    if a.is_nan() && b.is_nan() {
        return 0;
    }
    (a.to_bits() as i64).abs_diff(b.to_bits() as i64)
}

fn report(name: &str, samples: &[f64], ours: impl Fn(f64) -> f64, reference: impl Fn(f64) -> f64) {
    let mut max_ulp = 0u64;
    let mut worst = 0f64;
    let mut mismatches = 0usize;
    for &x in samples {
        let distance = ulp_distance(ours(x), reference(x));
        if distance != 0 {
            mismatches += 1;
        }
        if distance > max_ulp {
            max_ulp = distance;
            worst = x;
        }
    }
    println!(
        "{:<8} max ULP {:>3} at {:<24e} differs on {:>6} of {}",
        name,
        max_ulp,
        worst,
        mismatches,
        samples.len()
    );
}

fn main() {
    let mut rng = rand::rng();
    let count = 100_000;

    let moderate: Vec<f64> = (0..count).map(|_| rng.random_range(-100.0..100.0)).collect();
    let huge: Vec<f64> = (0..count).map(|_| rng.random_range(-1e300..1e300)).collect();
    let positive: Vec<f64> = (0..count)
        .map(|_| f64::from_bits(rng.random_range(1u64..0x7fef_ffff_ffff_ffff)))
        .collect();
    let unit: Vec<f64> = (0..count).map(|_| rng.random_range(-1.0..1.0)).collect();
    let exponent: Vec<f64> = (0..count).map(|_| rng.random_range(-745.0..709.0)).collect();

    report("sin", &moderate, fastmath::sin, libm::sin);
    report("sin", &huge, fastmath::sin, libm::sin);
    report("cos", &moderate, fastmath::cos, libm::cos);
    report("cos", &huge, fastmath::cos, libm::cos);
    report("tan", &moderate, fastmath::tan, libm::tan);
    report("exp", &exponent, fastmath::exp, libm::exp);
    report("expm1", &unit, fastmath::expm1, libm::expm1);
    report("log", &positive, fastmath::log, libm::log);
    report("log10", &positive, fastmath::log10, libm::log10);
    report("log1p", &unit, fastmath::log1p, libm::log1p);
    report("cbrt", &positive, fastmath::cbrt, libm::cbrt);
    report("atan", &moderate, fastmath::atan, libm::atan);
    report("asin", &unit, fastmath::asin, libm::asin);
    report("acos", &unit, fastmath::acos, libm::acos);
    report("sinh", &moderate, fastmath::sinh, libm::sinh);
    report("cosh", &moderate, fastmath::cosh, libm::cosh);
    report("tanh", &unit, fastmath::tanh, libm::tanh);
    report("asinh", &moderate, fastmath::asinh, libm::asinh);
    report("atanh", &unit, fastmath::atanh, libm::atanh);
    report("pow", &unit, |y| fastmath::pow(3.7, y * 200.0), |y| libm::pow(3.7, y * 200.0));
    report(
        "atan2",
        &moderate,
        |y| fastmath::atan2(y, -3.0),
        |y| libm::atan2(y, -3.0),
    );
    report(
        "hypot",
        &huge,
        |x| fastmath::hypot(x, 1e299),
        |x| libm::hypot(x, 1e299),
    );
}
