/*
 * // Copyright (c) Radzivon Bartoshyk 4/2025. All rights reserved.
 * //
 * // Use of this source code is governed by a BSD-style
 * // license that can be found in the LICENSE file.
 */
#![no_main]

use fastmath::{ExactInteger, to_int_exact};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (i64, i64)| {
    let (a, b) = data;
    assert_eq!(a.add_exact(b).ok(), a.checked_add(b));
    assert_eq!(a.subtract_exact(b).ok(), a.checked_sub(b));
    assert_eq!(a.multiply_exact(b).ok(), a.checked_mul(b));
    assert_eq!(to_int_exact(a).ok(), i32::try_from(a).ok());

    if let (Ok(d), Ok(m)) = (a.floor_div(b), a.floor_mod(b)) {
        assert_eq!(d.wrapping_mul(b).wrapping_add(m), a);
    }
    if let Ok(g) = a.gcd(b) {
        assert!(g >= 0);
        if g != 0 {
            assert_eq!(a % g, 0);
            assert_eq!(b % g, 0);
        }
    }
    _ = a.lcm(b);

    let (a, b) = (a as i32, b as i32);
    assert_eq!(a.add_exact(b).ok(), a.checked_add(b));
    assert_eq!(a.multiply_exact(b).ok(), a.checked_mul(b));
    _ = a.floor_div(b);
    _ = a.floor_mod(b);
    _ = a.gcd(b);
    _ = a.lcm(b);
});
