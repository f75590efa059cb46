/*
 * // Copyright (c) Radzivon Bartoshyk 10/2026. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
/// 2^30, the Dekker split factor.
pub(crate) const SPLIT_SCALE: f64 = 1073741824.0;

/// 2^52
pub(crate) const TWO_POWER_52: f64 = 4503599627370496.0;

/// π/2 as double-double.
pub(crate) const PI_2_A: f64 = 1.5707963267948966;
pub(crate) const PI_2_B: f64 = 6.123233995736766E-17;

/// ln(2) split so that `LN_2_A * n` is exact for any double exponent.
pub(crate) const LN_2_A: f64 = 0.693147063255310059;
pub(crate) const LN_2_B: f64 = 1.17304635250823482e-7;

/// Largest argument for which `exp` is finite.
pub(crate) const LOG_MAX_VALUE: f64 = 709.782712893384;

pub(crate) const F_1_3: f64 = 1.0 / 3.0;

/// ln(2)
pub(crate) const LN_2: f64 = std::f64::consts::LN_2;

/// Upper half of `x` after the 2^30 Dekker split, `x - split_hi(x)` is exact.
///
/// Only valid while `x * 2^30` does not overflow.
#[inline(always)]
pub(crate) fn split_hi(x: f64) -> f64 {
    let t = x * SPLIT_SCALE;
    (x + t) - t
}

/// `x` with the 30 lowest mantissa bits cleared, subnormals are returned as is.
#[inline]
pub(crate) const fn double_high_part(d: f64) -> f64 {
    if d > -f64::MIN_POSITIVE && d < f64::MIN_POSITIVE {
        return d;
    }
    f64::from_bits(d.to_bits() & 0xffff_ffff_c000_0000)
}

/// Copies sign from `y` to `x`
#[inline]
pub const fn copysign(x: f64, y: f64) -> f64 {
    f64::from_bits((x.to_bits() & !(1 << 63)) ^ (y.to_bits() & (1 << 63)))
}

/// Copies sign from `y` to `x`
#[inline]
pub const fn copysignf(x: f32, y: f32) -> f32 {
    f32::from_bits((x.to_bits() & !(1 << 31)) ^ (y.to_bits() & (1 << 31)))
}

/// Unbiased binary exponent, `-1023` for zero and subnormals, `1024` for NaN and infinities
#[inline]
pub const fn get_exponent(d: f64) -> i32 {
    ((d.to_bits() >> 52) & 0x7ff) as i32 - 1023
}

/// Unbiased binary exponent, `-127` for zero and subnormals, `128` for NaN and infinities
#[inline]
pub const fn get_exponentf(f: f32) -> i32 {
    ((f.to_bits() >> 23) & 0xff) as i32 - 127
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_hi_is_exact() {
        for &x in &[1.0, 0.1, -3.7e-5, 1e298, 123456789.123, 5e-324, -0.0] {
            let hi = split_hi(x);
            let lo = x - hi;
            assert_eq!(hi + lo, x, "Invalid split for {}", x);
        }
        for &x in &[0.1, -3.7e-5, 123456789.123, std::f64::consts::E] {
            let hi = split_hi(x);
            assert!(
                hi.to_bits().trailing_zeros() >= 28,
                "High part of {} keeps too many bits",
                x
            );
        }
    }

    #[test]
    fn high_part_clears_low_bits() {
        let h = double_high_part(std::f64::consts::PI);
        assert_eq!(h.to_bits() & 0x3fff_ffff, 0);
        assert!((std::f64::consts::PI - h) < 1e-8);
        assert_eq!(double_high_part(1e-310), 1e-310);
    }

    #[test]
    fn exponent_and_sign() {
        assert_eq!(get_exponent(1.0), 0);
        assert_eq!(get_exponent(0.75), -1);
        assert_eq!(get_exponent(0.0), -1023);
        assert_eq!(get_exponent(f64::INFINITY), 1024);
        assert_eq!(get_exponentf(8.0f32), 3);
        assert_eq!(get_exponentf(1e-40f32), -127);
        assert_eq!(copysign(2.0, -0.0), -2.0);
        assert_eq!(copysignf(-2.0, 1.0), 2.0);
        assert!(copysign(0.0, -1.0).is_sign_negative());
    }
}
