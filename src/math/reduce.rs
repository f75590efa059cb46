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
use crate::math::common::PI_2_A;

/// Bits of 1/(2π) as a fixed-point fraction, most significant word first.
static RECIP_2PI: [u64; 20] = [
    0x28be60db9391054a,
    0x7f09d5f47d4d3770,
    0x36d8a5664f10e410,
    0x7f9458eaf7aef158,
    0x6dc91b8e909374b8,
    0x01924bba82746487,
    0x3f877ac72c4a69cf,
    0xba208d7d4baed121,
    0x3a671c09ad17df90,
    0x4e64758e60d4ce7d,
    0x272117e2ef7e4a0e,
    0xc7fe25fff7816603,
    0xfbcbc462d6829b47,
    0xdb4d9fb3c9f2c26d,
    0xd3d18fd9a797fa8b,
    0x5d49eeb1faf97c5e,
    0xcf41ce7de294a4ba,
    0x9afed7ec47e35742,
    0x1580cc11bf1edaea,
    0xfc33ef0826bd0d87,
];

/// π/4 as a 128-bit fixed-point fraction.
const PI_O_4: u128 = 0xc90fdaa22168c234_c4c6628b80dc1cd1;

/// Arguments above this go through Payne-Hanek.
pub(crate) const REDUCE_LARGE_THRESHOLD: f64 = 3294198.0;

// π/2 in three pieces, first two have short mantissas so `k * c` is exact.
const CODY_WAITE_A: f64 = 1.570796251296997;
const CODY_WAITE_B: f64 = 7.549789948768648E-8;
const CODY_WAITE_C: f64 = 6.123233995736766E-17;

const TWO_OVER_PI: f64 = 0.6366197723675814;

/// `x = k * π/2 + (hi + lo)` with `0 <= hi + lo < π/2`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) struct Reduced {
    /// `k mod 4`
    pub(crate) quadrant: u32,
    pub(crate) hi: f64,
    pub(crate) lo: f64,
}

#[inline]
fn word(idx: i32) -> u64 {
    if idx < 0 {
        0
    } else {
        RECIP_2PI.get(idx as usize).copied().unwrap_or(0)
    }
}

/// Payne-Hanek reduction of a finite `x > 0`.
pub(crate) fn payne_hanek(x: f64) -> Reduced {
    let bits = x.to_bits();
    let exponent = ((bits >> 52) & 0x7ff) as i32 - 1023 + 1;
    let in_bits = ((bits & 0x000f_ffff_ffff_ffff) | 0x0010_0000_0000_0000) << 11;

    let idx = exponent >> 6;
    let shift = (exponent - (idx << 6)) as u32;

    // 192 bits of 1/(2π) starting at the binary point of x
    let (shpi0, shpi_a, shpi_b) = if shift != 0 {
        (
            (word(idx - 1) << shift) | (word(idx) >> (64 - shift)),
            (word(idx) << shift) | (word(idx + 1) >> (64 - shift)),
            (word(idx + 1) << shift) | (word(idx + 2) >> (64 - shift)),
        )
    } else {
        (word(idx - 1), word(idx), word(idx + 1))
    };

    let in_bits = in_bits as u128;
    let mut prod = in_bits.wrapping_mul(shpi_a as u128);
    prod = prod.wrapping_add((in_bits * shpi_b as u128) >> 64);
    prod = prod.wrapping_add(((in_bits * shpi0 as u128) as u64 as u128) << 64);

    let quadrant = (prod >> 126) as u32;
    let frac = prod << 2;

    // upper 128 bits of frac * π/4
    let (rh, rl) = (frac >> 64, frac & u64::MAX as u128);
    let (ph, pl) = (PI_O_4 >> 64, PI_O_4 & u64::MAX as u128);
    let hl = rh * pl;
    let lh = rl * ph;
    let carry = ((hl & u64::MAX as u128) + (lh & u64::MAX as u128) + ((rl * pl) >> 64)) >> 64;
    let hi = (rh * ph)
        .wrapping_add(hl >> 64)
        .wrapping_add(lh >> 64)
        .wrapping_add(carry);

    if hi == 0 {
        return Reduced {
            quadrant,
            hi: 0.0,
            lo: 0.0,
        };
    }

    let lz = hi.leading_zeros() as i32;
    let hi = hi << lz;
    let a = (hi >> 75) as u64 as f64;
    let b = ((hi >> 22) & ((1u128 << 53) - 1)) as u64 as f64;
    let scale = f64::from_bits(((1023 - 53 - lz) as u64) << 52);
    let ta = a * scale;
    let tb = b * scale * f64::from_bits((1023 - 53) << 52);

    let sa = ta + tb;
    let sb = -(sa - ta - tb);

    Reduced {
        quadrant,
        hi: sa * 2.0,
        lo: sb * 2.0,
    }
}

/// Cody-Waite reduction for `π/2 < x <= 3294198`.
pub(crate) fn cody_waite(x: f64) -> Reduced {
    let mut k = (x * TWO_OVER_PI) as i32;

    loop {
        let mut a = -(k as f64) * CODY_WAITE_A;
        let mut rem_a = x + a;
        let mut rem_b = -(rem_a - x - a);

        a = -(k as f64) * CODY_WAITE_B;
        let mut b = rem_a;
        rem_a = a + b;
        rem_b += -(rem_a - b - a);

        a = -(k as f64) * CODY_WAITE_C;
        b = rem_a;
        rem_a = a + b;
        rem_b += -(rem_a - b - a);

        if rem_a > 0.0 {
            return Reduced {
                quadrant: (k & 3) as u32,
                hi: rem_a,
                lo: rem_b,
            };
        }
        k -= 1;
    }
}

/// Reduces a finite `x >= 0` modulo π/2.
#[inline]
pub(crate) fn reduce(x: f64) -> Reduced {
    if x > REDUCE_LARGE_THRESHOLD {
        let mut r = payne_hanek(x);
        r.quadrant &= 3;
        r
    } else if x > PI_2_A {
        cody_waite(x)
    } else {
        Reduced {
            quadrant: 0,
            hi: x,
            lo: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_arguments_pass_through() {
        assert_eq!(
            reduce(1.0),
            Reduced {
                quadrant: 0,
                hi: 1.0,
                lo: 0.0
            }
        );
    }

    #[test]
    fn cody_waite_quadrants() {
        let r = cody_waite(2.0);
        assert_eq!(r.quadrant, 1);
        // 2 - π/2 = 0.42920367320510338077...
        assert!((r.hi + r.lo - 0.4292036732051034).abs() < 1e-16);
        let r = cody_waite(10.0);
        assert_eq!(r.quadrant, 2);
        assert_eq!(reduce(10.0), r);
        // 10 - 3π = 0.57522203923062028...
        assert!((r.hi - 0.5752220392306203).abs() < 2e-16);
        let r = cody_waite(3000000.0);
        assert!(r.hi > 0.0 && r.hi < PI_2_A);
    }

    #[test]
    fn methods_agree_at_the_switch() {
        for &x in &[3.0e6, 3.2e6, 3294197.5, 1234567.891] {
            let a = cody_waite(x);
            let b = payne_hanek(x);
            assert_eq!(a.quadrant, b.quadrant & 3, "Invalid quadrant for {}", x);
            assert!(
                (a.hi - b.hi).abs() < 1e-9,
                "Invalid result {:?} vs {:?}",
                a,
                b
            );
        }
    }

    #[test]
    fn payne_hanek_huge() {
        // 1e22 mod π/2 = 0.55061893423580964591...
        let r = payne_hanek(1e22);
        assert_eq!(r.quadrant, 3);
        assert!(
            (r.hi + r.lo - 0.5506189342358097).abs() < 1e-16,
            "Invalid result {:?}",
            r
        );
        let r = payne_hanek(f64::MAX);
        assert!(r.hi >= 0.0 && r.hi < PI_2_A);
    }
}
