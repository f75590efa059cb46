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
use crate::math::common::{F_1_3, LN_2_A, LN_2_B, SPLIT_SCALE, TWO_POWER_52};
use crate::math::dekker::Dekker;
use crate::math::tables::ln_mant;

/// ln(1 + x) near zero as `(hi, lo)` coefficient pairs, highest degree last.
static LN_QUICK_COEF: [(f64, f64); 9] = [
    (1.0, 5.669184079525E-24),
    (-0.25, -0.25),
    (0.3333333134651184, 1.986821492305628E-8),
    (-0.25, -6.663542893624021E-14),
    (0.19999998807907104, 1.1921056801463227E-8),
    (-0.1666666567325592, -7.800414592973399E-9),
    (0.1428571343421936, 5.650007086920087E-9),
    (-0.12502530217170715, -7.44321345601866E-11),
    (0.11113807559013367, 9.219544613762692E-9),
];

/// ln(1 + eps) for `eps < 2^-10` in double-double.
static LN_HI_PREC_COEF: [(f64, f64); 6] = [
    (1.0, -6.032174644509064E-23),
    (-0.25, -0.25),
    (0.3333333134651184, 1.9868161777724352E-8),
    (-0.2499999701976776, -2.957007209750105E-8),
    (0.19999954104423523, 1.5830993332061267E-10),
    (-0.16624879837036133, -2.6033824355191673E-8),
];

/// 1/ln(10) split in two.
const RLN10_A: f64 = 0.4342944622039795;
const RLN10_B: f64 = 1.9699272335463627E-8;

/// Horner evaluation over coefficient pairs with the high part re-split each step.
#[inline]
fn poly_dd(coeffs: &[(f64, f64)], xa: f64, xb: f64) -> (f64, f64) {
    let (mut ya, mut yb) = coeffs[coeffs.len() - 1];
    for &(ca, cb) in coeffs[..coeffs.len() - 1].iter().rev() {
        let aa = ya * xa;
        let ab = ya * xb + yb * xa + yb * xb;
        // split, so the next product is exact
        let tmp = aa * SPLIT_SCALE;
        ya = aa + tmp - tmp;
        yb = aa - ya + ab;

        let aa = ya + ca;
        let ab = yb + cb;
        let tmp = aa * SPLIT_SCALE;
        ya = aa + tmp - tmp;
        yb = aa - ya + ab;
    }
    (ya, yb)
}

/// Natural logarithm and, when `hi_prec` is set, the same value as an accurate double-double.
///
/// Without `hi_prec` arguments close to 1 take a dedicated polynomial and the
/// returned pair is only `(result, 0)`.
pub(crate) fn log_core(x: f64, hi_prec: bool) -> (f64, Dekker) {
    if x == 0.0 {
        return (f64::NEG_INFINITY, Dekker::new(0.0, f64::NEG_INFINITY));
    }
    if x.is_sign_negative() || x.is_nan() {
        return (f64::NAN, Dekker::new(0.0, f64::NAN));
    }
    if x == f64::INFINITY {
        return (f64::INFINITY, Dekker::new(0.0, f64::INFINITY));
    }

    let mut bits = x.to_bits();
    let mut exp = (bits >> 52) as i32 - 1023;

    if (bits & 0x7ff0_0000_0000_0000) == 0 {
        // subnormal, shift until the implicit bit shows up
        bits <<= 1;
        while (bits & 0x0010_0000_0000_0000) == 0 {
            exp -= 1;
            bits <<= 1;
        }
    }

    if (exp == -1 || exp == 0) && x < 1.01 && x > 0.99 && !hi_prec {
        let xa = x - 1.0;
        let tmp = xa * SPLIT_SCALE;
        let aa = xa + tmp - tmp;
        let ab = xa - aa;
        let (xa, xb) = (aa, ab);

        let (ya, yb) = poly_dd(&LN_QUICK_COEF, xa, xb);

        let aa = ya * xa;
        let ab = ya * xb + yb * xa + yb * xb;
        let tmp = aa * SPLIT_SCALE;
        let ya = aa + tmp - tmp;
        let yb = aa - ya + ab;

        let r = ya + yb;
        return (r, Dekker::new(0.0, r));
    }

    let lnm = ln_mant()[((bits & 0x000f_fc00_0000_0000) >> 42) as usize];

    // x = (1 + i/1024)(1 + eps)
    let epsilon =
        (bits & 0x3ff_ffff_ffff) as f64 / (TWO_POWER_52 + (bits & 0x000f_fc00_0000_0000) as f64);

    let (lnza, lnzb) = if hi_prec {
        let tmp = epsilon * SPLIT_SCALE;
        let aa = epsilon + tmp - tmp;
        let ab = epsilon - aa;
        let xa = aa;
        let mut xb = ab;

        // the division above rounded, recover its error
        let numer = (bits & 0x3ff_ffff_ffff) as f64;
        let denom = TWO_POWER_52 + (bits & 0x000f_fc00_0000_0000) as f64;
        let aa = numer - xa * denom - xb * denom;
        xb += aa / denom;

        let (ya, yb) = poly_dd(&LN_HI_PREC_COEF, xa, xb);

        let aa = ya * xa;
        let ab = ya * xb + yb * xa + yb * xb;

        let lnza = aa + ab;
        (lnza, -(lnza - aa - ab))
    } else {
        let mut lnza = -0.16624882440418567;
        lnza = lnza * epsilon + 0.19999954120254515;
        lnza = lnza * epsilon + -0.2499999997677497;
        lnza = lnza * epsilon + 0.3333333333332802;
        lnza = lnza * epsilon + -0.5;
        lnza = lnza * epsilon + 1.0;
        (lnza * epsilon, 0.0)
    };

    // largest terms first, the low parts end up in the error word
    let sum = Dekker::new(0.0, LN_2_A * exp as f64)
        .accumulate(lnm.hi)
        .accumulate(lnza)
        .accumulate(LN_2_B * exp as f64)
        .accumulate(lnm.lo)
        .accumulate(lnzb);

    (sum.hi + sum.lo, sum)
}

/// Computes natural logarithm
///
/// Max found ULP 0.54
pub fn log(x: f64) -> f64 {
    log_core(x, false).0
}

/// Computes decimal logarithm
///
/// Max found ULP 0.5
pub fn log10(x: f64) -> f64 {
    let (r, hp) = log_core(x, true);
    if r.is_infinite() {
        return r;
    }

    let tmp = hp.hi * SPLIT_SCALE;
    let lna = hp.hi + tmp - tmp;
    let lnb = hp.hi - lna + hp.lo;

    RLN10_B * lnb + RLN10_B * lna + RLN10_A * lnb + RLN10_A * lna
}

/// Computes ln(1 + x) without cancellation near zero
///
/// Max found ULP 0.51
pub fn log1p(x: f64) -> f64 {
    if x == -1.0 {
        return f64::NEG_INFINITY;
    }
    if x == f64::INFINITY {
        return f64::INFINITY;
    }

    if x > 1e-6 || x < -1e-6 {
        let xpa = 1.0 + x;
        let xpb = -(xpa - 1.0 - x);

        let (r, hp) = log_core(xpa, true);
        if r.is_infinite() {
            return r;
        }

        // ln(xpa + xpb) = ln(xpa) + ln(1 + xpb / xpa)
        let fx1 = xpb / xpa;
        let epsilon = -0.5 * fx1 + 1.0;
        epsilon * fx1 + hp.lo + hp.hi
    } else {
        x + x * x * (x * F_1_3 - 0.5)
    }
}

/// Computes logarithm of `x` in the given `base`
pub fn log_base(base: f64, x: f64) -> f64 {
    log(x) / log(base)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::exp::exp;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn ulp_distance(a: f64, b: f64) -> u64 {
        (a.to_bits() as i64).abs_diff(b.to_bits() as i64)
    }

    #[test]
    fn log_test() {
        assert_eq!(log(1.0), 0.0);
        assert_eq!(log(2.0), 0.6931471805599453);
        assert_eq!(log(std::f64::consts::E), 1.0);
        assert_eq!(log(0.995), -0.005012541823544286);
        assert_eq!(log(5e-324), -744.4400719213812);
        assert_eq!(log(0.0), f64::NEG_INFINITY);
        assert_eq!(log(-0.0), f64::NEG_INFINITY);
        assert_eq!(log(f64::INFINITY), f64::INFINITY);
        assert!(log(-1.0).is_nan());
        assert!(log(f64::NAN).is_nan());
    }

    #[test]
    fn log_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(23);
        for _ in 0..5000 {
            let x = f64::from_bits(rng.random_range(0x0010_0000_0000_0000u64..0x7fe0_0000_0000_0000));
            let v = log(x);
            let reference = pxfm::f_log(x);
            assert!(
                ulp_distance(v, reference) <= 1,
                "Invalid result log({}) = {}, expected {}",
                x,
                v,
                reference
            );
        }
    }

    #[test]
    fn log10_log1p_agree_with_reference() {
        let mut rng = StdRng::seed_from_u64(29);
        for _ in 0..5000 {
            let x = f64::from_bits(rng.random_range(0x0010_0000_0000_0000u64..0x7fe0_0000_0000_0000));
            let v = log10(x);
            let reference = pxfm::f_log10(x);
            assert!(
                ulp_distance(v, reference) <= 1,
                "Invalid result log10({}) = {}, expected {}",
                x,
                v,
                reference
            );

            let x = rng.random_range(-0.5..0.5);
            let v = log1p(x);
            let reference = pxfm::f_log1p(x);
            assert!(
                ulp_distance(v, reference) <= 1,
                "Invalid result log1p({}) = {}, expected {}",
                x,
                v,
                reference
            );

            let x = rng.random_range(-30.0f64..700.0).exp();
            let v = log1p(x);
            let reference = pxfm::f_log1p(x);
            assert!(
                ulp_distance(v, reference) <= 1,
                "Invalid result log1p({}) = {}, expected {}",
                x,
                v,
                reference
            );
        }
    }

    #[test]
    fn log_inverts_exp() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..5000 {
            let x = rng.random_range(1.0..700.0);
            let x = if rng.random::<bool>() { x } else { -x };
            assert!(
                ulp_distance(log(exp(x)), x) <= 2,
                "Invalid result log(exp({}))",
                x
            );
        }
        for _ in 0..5000 {
            let x = rng.random_range(0.5..2.0);
            assert!(
                ulp_distance(exp(log(x)), x) <= 2,
                "Invalid result exp(log({}))",
                x
            );
        }
    }

    #[test]
    fn log10_test() {
        assert_eq!(log10(1000.0), 3.0);
        assert_eq!(log10(2.0), 0.3010299956639812);
        assert_eq!(log10(1e-300), -300.0);
        assert_eq!(log10(0.0), f64::NEG_INFINITY);
        assert!(log10(-3.0).is_nan());
    }

    #[test]
    fn log1p_test() {
        assert_eq!(log1p(1e-5), 9.999950000333332e-06);
        assert_eq!(log1p(-0.5), -0.6931471805599453);
        assert_eq!(log1p(1.0), 0.6931471805599453);
        assert_eq!(log1p(1e-300), 1e-300);
        assert_eq!(log1p(-1.0), f64::NEG_INFINITY);
        assert!(log1p(-2.0).is_nan());
    }

    #[test]
    fn log_base_test() {
        assert_eq!(log_base(2.0, 8.0), 3.0);
        assert_eq!(log_base(2.0, 10.0), 3.3219280948873626);
    }
}
