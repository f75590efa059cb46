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
use crate::math::common::SPLIT_SCALE;

/// 2^(k/3) for k in -2..=2
static CBRT_TWO: [f64; 5] = [
    0.6299605249474366,
    0.7937005259840998,
    1.0,
    1.2599210498948732,
    1.5874010519681994,
];

/// Computes cube root
///
/// Max found ULP 0.5
pub fn cbrt(x: f64) -> f64 {
    let mut x = x;
    let mut in_bits = x.to_bits();
    let mut exponent = ((in_bits >> 52) & 0x7ff) as i32 - 1023;
    let mut subnormal = false;

    if exponent == -1023 {
        if x == 0.0 {
            return x;
        }

        // 2^54 brings every subnormal into the normal range
        subnormal = true;
        x *= 1.8014398509481984E16;
        in_bits = x.to_bits();
        exponent = ((in_bits >> 52) & 0x7ff) as i32 - 1023;
    }

    if exponent == 1024 {
        // NaN or infinity
        return x;
    }

    // 2^(exponent / 3) with the sign of x
    let exp3 = exponent / 3;
    let p2 = f64::from_bits(
        (in_bits & 0x8000_0000_0000_0000) | ((((exp3 + 1023) & 0x7ff) as u64) << 52),
    );

    // mantissa in [1, 2)
    let mant = f64::from_bits((in_bits & 0x000f_ffff_ffff_ffff) | 0x3ff0_0000_0000_0000);

    let mut est = -0.010714690733195933;
    est = est * mant + 0.0875862700108075;
    est = est * mant + -0.3058015757857271;
    est = est * mant + 0.7249995199969751;
    est = est * mant + 0.5039018405998233;

    est *= CBRT_TWO[(exponent % 3 + 2) as usize];

    // est approximates cbrt(xs) with xs in [0.25, 8)
    let xs = x / (p2 * p2 * p2);
    est += (xs - est * est * est) / (3.0 * est * est);
    est += (xs - est * est * est) / (3.0 * est * est);

    // last Newton step with est^3 in double-double
    let temp = est * SPLIT_SCALE;
    let ya = est + temp - temp;
    let yb = est - ya;

    let mut za = ya * ya;
    let mut zb = ya * yb * 2.0 + yb * yb;
    let temp = za * SPLIT_SCALE;
    let temp2 = za + temp - temp;
    zb += za - temp2;
    za = temp2;

    zb = za * yb + ya * zb + zb * yb;
    za *= ya;

    let na = xs - za;
    let mut nb = -(na - xs + za);
    nb -= zb;

    est += (na + nb) / (3.0 * est * est);

    est *= p2;

    if subnormal {
        // 2^-18
        est *= 3.814697265625E-6;
    }

    est
}
