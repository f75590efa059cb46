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
use crate::math::common::split_hi;
use crate::math::dekker::Dekker;
use crate::math::exp::exp_core;
use crate::math::log::log_core;

/// Computes x^e for an integral exponent
pub fn pow_i64(x: f64, e: i64) -> f64 {
    if e == 0 {
        return 1.0;
    }
    let r = if e > 0 {
        Dekker::new(0.0, x).powi(e as u64)
    } else {
        Dekker::exact_recip(x).powi(e.unsigned_abs())
    };
    if r.hi == 0.0 { r.hi } else { r.hi + r.lo }
}

/// Computes x^e for an integral exponent
pub fn pow_i32(x: f64, e: i32) -> f64 {
    pow_i64(x, e as i64)
}

/// Computes x^y
///
/// Integral exponents take the exact repeated squaring path, the rest
/// evaluates exp(y * ln(x)) in double-double. Max found ULP 0.5
pub fn pow(x: f64, y: f64) -> f64 {
    if y == 0.0 {
        // x^0 is 1 even for NaN
        return 1.0;
    }

    let y_bits = y.to_bits();
    let y_raw_exp = ((y_bits >> 52) & 0x7ff) as i32;
    let y_raw_mantissa = y_bits & 0x000f_ffff_ffff_ffff;
    let x_bits = x.to_bits();
    let x_raw_exp = ((x_bits >> 52) & 0x7ff) as i32;
    let x_raw_mantissa = x_bits & 0x000f_ffff_ffff_ffff;

    if y_raw_exp > 1085 {
        // |y| >= 2^63 (infinite or NaN included), y is an even integer when finite

        if (y_raw_exp == 2047 && y_raw_mantissa != 0) || (x_raw_exp == 2047 && x_raw_mantissa != 0)
        {
            return f64::NAN;
        }

        if x_raw_exp == 1023 && x_raw_mantissa == 0 {
            // |x| == 1
            return if y_raw_exp == 2047 { f64::NAN } else { 1.0 };
        }

        // |x| > 1 with y > 0, or |x| < 1 with y < 0, grows without bound
        return if (y > 0.0) ^ (x_raw_exp < 1023) {
            f64::INFINITY
        } else {
            0.0
        };
    }

    // |y| < 2^63, try the integral fast path
    if y_raw_exp >= 1023 {
        let y_full_mantissa = 0x0010_0000_0000_0000 | y_raw_mantissa;
        if y_raw_exp < 1075 {
            let integral_mask = u64::MAX << (1075 - y_raw_exp);
            if (y_full_mantissa & integral_mask) == y_full_mantissa {
                let l = (y_full_mantissa >> (1075 - y_raw_exp)) as i64;
                return pow_i64(x, if y < 0.0 { -l } else { l });
            }
        } else {
            let l = (y_full_mantissa << (y_raw_exp - 1075)) as i64;
            return pow_i64(x, if y < 0.0 { -l } else { l });
        }
    }

    // y is not an integer

    if x == 0.0 {
        return if y < 0.0 { f64::INFINITY } else { 0.0 };
    }

    if x_raw_exp == 2047 {
        if x_raw_mantissa == 0 {
            return if y < 0.0 { 0.0 } else { f64::INFINITY };
        }
        return f64::NAN;
    }

    if x < 0.0 {
        return f64::NAN;
    }

    // |y| < 2^63 here, the split cannot overflow
    let ya = split_hi(y);
    let yb = y - ya;

    let (lores, hp) = log_core(x, true);
    if lores.is_infinite() {
        return lores;
    }

    let mut lna = hp.hi;
    let mut lnb = hp.lo;

    // resplit lna
    let tmp = split_hi(lna);
    lnb += lna - tmp;
    lna = tmp;

    // y * ln(x)
    let aa = lna * ya;
    let ab = lna * yb + lnb * ya + lnb * yb;

    lna = aa + ab;
    lnb = -(lna - aa - ab);

    // expm1 of the low part, passed to exp as a correction
    let mut z = 1.0 / 120.0;
    z = z * lnb + (1.0 / 24.0);
    z = z * lnb + (1.0 / 6.0);
    z = z * lnb + 0.5;
    z = z * lnb + 1.0;
    z *= lnb;

    exp_core(lna, z).0
}
