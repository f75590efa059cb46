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
use crate::math::dekker::Dekker;
use crate::math::tables::{EXP_INT_OFFSET, exp_tables};

/// e^x multiplied by `1 + extra`, together with the result as a double-double.
///
/// `extra` carries the low part of the exponent for `pow`. The double-double
/// keeps the integer-by-fraction table product apart from the polynomial terms.
pub(crate) fn exp_core(x: f64, extra: f64) -> (f64, Dekker) {
    let mut int_val = x as i32;

    if x < 0.0 {
        if x < -746.0 {
            return (0.0, Dekker::default());
        }

        if int_val < -709 {
            // shift into range and divide by e^40.19140625 afterwards
            const SCALE: f64 = 285040095144011776.0;
            let (r, hp) = exp_core(x + 40.19140625, extra);
            return (r / SCALE, Dekker::new(hp.lo / SCALE, hp.hi / SCALE));
        }

        if int_val == -709 {
            // e^1.494140625
            const SCALE: f64 = 4.455505956692756620;
            let (r, hp) = exp_core(x + 1.494140625, extra);
            return (r / SCALE, Dekker::new(hp.lo / SCALE, hp.hi / SCALE));
        }

        int_val -= 1;
    } else if int_val > 709 {
        return (f64::INFINITY, Dekker::new(0.0, f64::INFINITY));
    }

    let tables = exp_tables();
    let int_part = tables.int[(EXP_INT_OFFSET as i32 + int_val) as usize];

    // x - int_val lies in [0, 1], index the 1/1024 table
    let int_frac = ((x - int_val as f64) * 1024.0) as usize;
    let frac_part = tables.frac[int_frac];

    let epsilon = x - (int_val as f64 + int_frac as f64 / 1024.0);

    // expm1 on [0, 2^-10), constant term absorbs the error of the tables
    let mut z = 0.04168701738764507;
    z = z * epsilon + 0.1666666505023083;
    z = z * epsilon + 0.5000000000042687;
    z = z * epsilon + 1.0;
    z = z * epsilon + -3.940510424527919E-20;

    let temp_a = int_part.hi * frac_part.hi;
    let temp_b = int_part.hi * frac_part.lo + int_part.lo * frac_part.hi + int_part.lo * frac_part.lo;

    let temp_c = temp_b + temp_a;
    if temp_c == f64::INFINITY {
        return (f64::INFINITY, Dekker::new(0.0, f64::INFINITY));
    }

    let result = if extra != 0.0 {
        temp_c * extra * z + temp_c * extra + temp_c * z + temp_b + temp_a
    } else {
        temp_c * z + temp_b + temp_a
    };

    let hp = Dekker::new(
        temp_c * extra * z + temp_c * extra + temp_c * z + temp_b,
        temp_a,
    );

    (result, hp)
}

/// Computes exponent
///
/// Max found ULP 0.94, 1.9 when the result is subnormal.
pub fn exp(x: f64) -> f64 {
    exp_core(x, 0.0).0
}

/// e^x - 1 for `|x| < 1` as a double-double.
pub(crate) fn expm1_small(x: f64) -> Dekker {
    let negative = x < 0.0;
    let x = x.abs();

    let int_frac = (x * 1024.0) as usize;
    let frac = exp_tables().frac[int_frac];

    let mut temp_a = frac.hi - 1.0;
    let mut temp_b = frac.lo;

    let temp = temp_a + temp_b;
    temp_b = -(temp - temp_a - temp_b);
    temp_a = temp;

    let temp = temp_a * SPLIT_SCALE;
    let base_a = temp_a + temp - temp;
    let base_b = temp_b + (temp_a - base_a);

    let epsilon = x - int_frac as f64 / 1024.0;

    let mut zb = 0.008336750013465571;
    zb = zb * epsilon + 0.041666663879186654;
    zb = zb * epsilon + 0.16666666666745392;
    zb = zb * epsilon + 0.49999999999999994;
    zb *= epsilon;
    zb *= epsilon;

    let mut za = epsilon;
    let temp = za + zb;
    zb = -(temp - za - zb);
    za = temp;

    let temp = za * SPLIT_SCALE;
    let temp = za + temp - temp;
    zb += za - temp;
    za = temp;

    // (table - 1) * expm1(eps) + (table - 1) + expm1(eps)
    let mut ya = za * base_a;
    let temp = ya + za * base_b;
    let mut yb = -(temp - ya - za * base_b);
    ya = temp;

    let temp = ya + zb * base_a;
    yb += -(temp - ya - zb * base_a);
    ya = temp;

    let temp = ya + zb * base_b;
    yb += -(temp - ya - zb * base_b);
    ya = temp;

    let temp = ya + base_a;
    yb += -(temp - base_a - ya);
    ya = temp;

    let temp = ya + za;
    yb += -(temp - ya - za);
    ya = temp;

    let temp = ya + base_b;
    yb += -(temp - ya - base_b);
    ya = temp;

    let temp = ya + zb;
    yb += -(temp - ya - zb);
    ya = temp;

    if negative {
        // expm1(-x) = -expm1(x) / (1 + expm1(x))
        let denom = 1.0 + ya;
        let denomr = 1.0 / denom;
        let denomb = -(denom - 1.0 - ya) + yb;
        let ratio = ya * denomr;
        let temp = ratio * SPLIT_SCALE;
        let ra = ratio + temp - temp;
        let mut rb = ratio - ra;

        let temp = denom * SPLIT_SCALE;
        let za = denom + temp - temp;
        let zb = denom - za;

        rb += (ya - za * ra - za * rb - zb * ra - zb * rb) * denomr;
        rb += yb * denomr;
        rb += -ya * denomb * denomr * denomr;

        ya = -ra;
        yb = -rb;
    }

    Dekker::new(yb, ya)
}

/// Computes e^x - 1 without cancellation near zero
///
/// Max found ULP 0.5
pub fn expm1(x: f64) -> f64 {
    if x.is_nan() || x == 0.0 {
        return x;
    }

    if x <= -1.0 || x >= 1.0 {
        let (_, hp) = exp_core(x, 0.0);
        return if x > 0.0 {
            -1.0 + hp.hi + hp.lo
        } else {
            let ra = -1.0 + hp.hi;
            let mut rb = -(ra + 1.0 - hp.hi);
            rb += hp.lo;
            ra + rb
        };
    }

    let r = expm1_small(x);
    r.hi + r.lo
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn exp_test() {
        assert_eq!(exp(0.0), 1.0);
        assert_eq!(exp(-0.0), 1.0);
        assert_eq!(exp(1.0), std::f64::consts::E);
        assert_eq!(exp(0.5), 1.6487212707001282);
        assert_eq!(exp(709.78), 1.7928227943945155e+308);
        assert_eq!(exp(709.79), f64::INFINITY);
        assert_eq!(exp(-745.1), 5e-324);
        assert_eq!(exp(-750.0), 0.0);
        assert_eq!(exp(f64::INFINITY), f64::INFINITY);
        assert_eq!(exp(f64::NEG_INFINITY), 0.0);
        assert!(exp(f64::NAN).is_nan());
    }

    #[test]
    fn exp_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..5000 {
            let x = rng.random_range(-700.0..700.0);
            let v = exp(x);
            let reference = pxfm::f_exp(x);
            assert!(
                (v.to_bits() as i64).abs_diff(reference.to_bits() as i64) <= 1,
                "Invalid result exp({}) = {}, expected {}",
                x,
                v,
                reference
            );
        }
    }

    #[test]
    fn expm1_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(53);
        for _ in 0..5000 {
            for x in [rng.random_range(-1.0..1.0), rng.random_range(-40.0..700.0)] {
                let v = expm1(x);
                let reference = pxfm::f_expm1(x);
                assert!(
                    (v.to_bits() as i64).abs_diff(reference.to_bits() as i64) <= 1,
                    "Invalid result expm1({}) = {}, expected {}",
                    x,
                    v,
                    reference
                );
            }
        }
    }

    #[test]
    fn expm1_test() {
        assert_eq!(expm1(1e-5), 1.0000050000166668e-05);
        assert_eq!(expm1(0.0), 0.0);
        assert!(expm1(-0.0).is_sign_negative());
        assert_eq!(expm1(f64::NEG_INFINITY), -1.0);
        assert_eq!(expm1(f64::INFINITY), f64::INFINITY);
        assert_eq!(expm1(709.79), f64::INFINITY);
        assert_eq!(expm1(-40.0), -1.0);
        let mut rng = StdRng::seed_from_u64(5);
        for _ in 0..2000 {
            let x = rng.random_range(-0.9..0.9);
            let r = expm1(x);
            let reference = exp(x) - 1.0;
            assert!(
                (r - reference).abs() <= 4.0 * f64::EPSILON,
                "Invalid result expm1({}) = {}",
                x,
                r
            );
        }
    }
}
