/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use fastmath::{
    Split, acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, ceil, cos, cosh, exp, expm1, floor,
    hypot, log, log1p, log10, next_after, next_afterf, pow, rint, round, roundf, scalb, sin,
    sin_cos, sinh, tan, tanh, to_degrees, to_radians, ulp, ulpf,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (u64, u64, i32)| {
    let (a, b, n) = data;
    let x = f64::from_bits(a);
    let y = f64::from_bits(b);
    let x_f32 = f32::from_bits(a as u32);
    let y_f32 = f32::from_bits(b as u32);

    let split = Split::new(x);
    if x.is_finite() {
        assert_eq!(split.high() + split.low(), x);
    }
    _ = split.multiply(&Split::new(y));
    _ = split.reciprocal();
    _ = split.pow(b & 0xffff);

    let s = sin(x);
    let c = cos(x);
    if x.is_finite() {
        assert!((-1.0..=1.0).contains(&s));
        assert!((-1.0..=1.0).contains(&c));
        assert_eq!(sin_cos(x), (s, c));
    } else {
        assert!(s.is_nan() && c.is_nan());
    }
    _ = tan(x);
    _ = asin(x);
    _ = acos(x);
    _ = atan(x);
    _ = atan2(x, y);

    let e = exp(x);
    assert!(e >= 0.0 || e.is_nan());
    _ = expm1(x);
    _ = log(x);
    _ = log10(x);
    _ = log1p(x);
    _ = pow(x, y);
    assert_eq!(pow(x, 0.0), 1.0);
    _ = cbrt(x);
    _ = hypot(x, y);

    _ = sinh(x);
    _ = cosh(x);
    _ = tanh(x);
    _ = asinh(x);
    _ = acosh(x);
    _ = atanh(x);

    _ = floor(x);
    _ = ceil(x);
    _ = rint(x);
    _ = round(x);
    _ = roundf(x_f32);
    _ = scalb(x, n);
    _ = ulp(x);
    _ = ulpf(x_f32);
    _ = next_after(x, y);
    _ = next_afterf(x_f32, y_f32);
    _ = to_radians(x);
    _ = to_degrees(x);
});
