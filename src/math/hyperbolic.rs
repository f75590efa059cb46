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
use crate::math::common::{LN_2, LOG_MAX_VALUE, SPLIT_SCALE};
use crate::math::dekker::Dekker;
use crate::math::exp::{exp, exp_core, expm1_small};
use crate::math::log::log_core;

/// Past this magnitude e^-|x| vanishes next to e^|x|.
const HYPERBOLIC_CUTOFF: f64 = 20.0;

/// 2^28, above it `x * x + 1` rounds to `x * x`.
const SQUARE_CUTOFF: f64 = 268435456.0;

/// e^|x| / 2 for `|x| > 20`, squaring a half-size exponent when e^|x| itself overflows.
#[inline]
fn half_exp_large(x: f64) -> f64 {
    if x >= LOG_MAX_VALUE {
        let t = exp(0.5 * x);
        (0.5 * t) * t
    } else {
        0.5 * exp(x)
    }
}

/// `y + 1/y` for `y` given as a double-double, with the sign of the reciprocal flipped on demand.
fn add_reciprocal(y: Dekker, negate: bool) -> Dekker {
    let ya = y.hi + y.lo;
    let yb = -(ya - y.hi - y.lo);

    let temp = ya * SPLIT_SCALE;
    let yaa = ya + temp - temp;
    let yab = ya - yaa;

    let recip = 1.0 / ya;
    let temp = recip * SPLIT_SCALE;
    let mut ra = recip + temp - temp;
    let mut rb = recip - ra;

    rb += (1.0 - yaa * ra - yaa * rb - yab * ra - yab * rb) * recip;
    rb += -yb * recip * recip;

    if negate {
        ra = -ra;
        rb = -rb;
    }

    Dekker::new(yb, ya).accumulate(ra).accumulate(rb)
}

/// Computes hyperbolic cosine
///
/// Max found ULP 0.51
pub fn cosh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > HYPERBOLIC_CUTOFF || x < -HYPERBOLIC_CUTOFF {
        return half_exp_large(x.abs());
    }

    let (_, hp) = exp_core(x.abs(), 0.0);
    let r = add_reciprocal(hp, false);
    (r.hi + r.lo) * 0.5
}

/// Computes hyperbolic sine
///
/// Max found ULP 0.52
pub fn sinh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > HYPERBOLIC_CUTOFF {
        return half_exp_large(x);
    }
    if x < -HYPERBOLIC_CUTOFF {
        return -half_exp_large(-x);
    }
    if x == 0.0 {
        return x;
    }

    let negative = x < 0.0;
    let x = x.abs();

    let r = if x > 0.25 {
        let (_, hp) = exp_core(x, 0.0);
        add_reciprocal(hp, true)
    } else {
        // sinh(x) = (y + y / (y + 1)) / 2 with y = expm1(x)
        let hp = expm1_small(x);
        let ya = hp.hi + hp.lo;
        let yb = -(ya - hp.hi - hp.lo);

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

        Dekker::new(yb, ya).accumulate(ra).accumulate(rb)
    };

    let result = (r.hi + r.lo) * 0.5;
    if negative { -result } else { result }
}

/// Computes hyperbolic tangent
///
/// Max found ULP 0.5
pub fn tanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x > HYPERBOLIC_CUTOFF {
        return 1.0;
    }
    if x < -HYPERBOLIC_CUTOFF {
        return -1.0;
    }
    if x == 0.0 {
        return x;
    }

    let negative = x < 0.0;
    let x = x.abs();

    // numerator and denominator of (e^2x - 1) / (e^2x + 1)
    let (na, nb, da, db) = if x >= 0.5 {
        let (_, hp) = exp_core(x * 2.0, 0.0);
        let ya = hp.hi + hp.lo;
        let yb = -(ya - hp.hi - hp.lo);

        let n = Dekker::from_exact_add(-1.0, ya).accumulate(yb);
        let d = Dekker::from_exact_add(1.0, ya).accumulate(yb);
        (n.hi, n.lo, d.hi, d.lo)
    } else {
        let hp = expm1_small(x * 2.0);
        let ya = hp.hi + hp.lo;
        let yb = -(ya - hp.hi - hp.lo);

        let d = Dekker::from_exact_add(2.0, ya).accumulate(yb);
        (ya, yb, d.hi, d.lo)
    };

    let temp = da * SPLIT_SCALE;
    let daa = da + temp - temp;
    let dab = da - daa;

    let ratio = na / da;
    let temp = ratio * SPLIT_SCALE;
    let ra = ratio + temp - temp;
    let mut rb = ratio - ra;

    rb += (na - daa * ra - daa * rb - dab * ra - dab * rb) / da;
    rb += nb / da;
    rb += -db * na / da / da;

    let result = ra + rb;
    if negative { -result } else { result }
}

/// Low part of ln(2) in double-double.
const LN_2_LO: f64 = 2.3190468138462996e-17;

/// 2^-28, below it the inverse hyperbolics round to `x`.
const TINY_CUTOFF: f64 = 3.725290298461914e-9;

/// ln(v) for a positive double-double `v`, the tail enters as `lo / hi`.
#[inline]
fn log_dd(v: Dekker) -> f64 {
    let (r, hp) = log_core(v.hi, true);
    if r.is_nan() || r.is_infinite() {
        return r;
    }
    hp.hi + (hp.lo + v.lo / v.hi)
}

/// ln(a) + ln(2) for `a > 2^28`, where asinh and acosh stop depending on the `1`.
#[inline]
fn log_twice(a: f64) -> f64 {
    let (r, hp) = log_core(a, true);
    if r.is_infinite() {
        return r;
    }
    let s = Dekker::from_full_exact_add(hp.hi, LN_2);
    s.hi + (s.lo + hp.lo + LN_2_LO)
}

/// Computes inverse hyperbolic sine
///
/// ln(a + sqrt(a^2 + 1)) with the square, the root and the sum kept in double-double.
pub fn asinh(x: f64) -> f64 {
    if !x.is_finite() || x == 0.0 {
        return x;
    }
    let a = x.abs();
    if a < TINY_CUTOFF {
        return x;
    }

    let r = if a > SQUARE_CUTOFF {
        log_twice(a)
    } else {
        let sq = Dekker::from_exact_mult(a, a);
        let mut w = Dekker::from_full_exact_add(1.0, sq.hi);
        w.lo += sq.lo;
        let root = w.sqrt();
        let mut v = Dekker::from_full_exact_add(a, root.hi);
        v.lo += root.lo;
        log_dd(v)
    };

    r.copysign(x)
}

/// Computes inverse hyperbolic cosine, NaN below 1
pub fn acosh(x: f64) -> f64 {
    if x.is_nan() || x < 1.0 {
        return f64::NAN;
    }
    if x > SQUARE_CUTOFF {
        return log_twice(x);
    }
    // x^2 - 1 is exact in double-double, so nothing cancels near 1
    let sq = Dekker::from_exact_mult(x, x);
    let mut w = Dekker::from_full_exact_add(sq.hi, -1.0);
    w.lo += sq.lo;
    if w.hi == 0.0 {
        return 0.0;
    }
    let root = w.sqrt();
    let mut v = Dekker::from_full_exact_add(x, root.hi);
    v.lo += root.lo;
    log_dd(v)
}

/// Computes inverse hyperbolic tangent
pub fn atanh(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    let a = x.abs();
    if a > 1.0 {
        return f64::NAN;
    }
    if a == 1.0 {
        return f64::INFINITY.copysign(x);
    }
    if a < TINY_CUTOFF {
        return x;
    }

    let n = Dekker::from_full_exact_add(1.0, a);
    let d = Dekker::from_full_exact_add(1.0, -a);
    let q = n.hi / d.hi;
    let p = Dekker::from_exact_mult(q, d.hi);
    let r = ((n.hi - p.hi) - p.lo + n.lo - q * d.lo) / d.hi;

    (0.5 * log_dd(Dekker::from_exact_add(q, r))).copysign(x)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn sinh_test() {
        assert_eq!(sinh(1.0), 1.1752011936438014);
        assert_eq!(sinh(-1.0), -1.1752011936438014);
        assert_eq!(sinh(0.1), 0.10016675001984403);
        assert_eq!(sinh(710.0), 1.1169973830808557e308);
        assert_eq!(sinh(-710.0), -1.1169973830808557e308);
        assert_eq!(sinh(1000.0), f64::INFINITY);
        assert!(sinh(-0.0).is_sign_negative());
        assert!(sinh(f64::NAN).is_nan());
    }

    #[test]
    fn cosh_test() {
        assert_eq!(cosh(0.0), 1.0);
        assert_eq!(cosh(1.0), 1.5430806348152437);
        assert_eq!(cosh(2.0), 3.7621956910836314);
        assert_eq!(cosh(-710.0), 1.1169973830808557e308);
        assert_eq!(cosh(f64::NEG_INFINITY), f64::INFINITY);
        assert!(cosh(f64::NAN).is_nan());
    }

    #[test]
    fn tanh_test() {
        assert_eq!(tanh(1.0), 0.7615941559557649);
        assert_eq!(tanh(0.25), 0.24491866240370913);
        assert_eq!(tanh(0.3), 0.2913126124515909);
        assert_eq!(tanh(25.0), 1.0);
        assert_eq!(tanh(f64::NEG_INFINITY), -1.0);
        assert!(tanh(-0.0).is_sign_negative());
        assert!(tanh(f64::NAN).is_nan());
    }

    #[test]
    fn hyperbolic_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..2000 {
            let x = rng.random_range(-15.0..15.0);
            let (s, c) = (sinh(x), cosh(x));
            assert!(
                ((s / c) - tanh(x)).abs() <= 4.0 * f64::EPSILON,
                "Invalid result tanh({})",
                x
            );
            assert!(
                (c * c - s * s - 1.0).abs() <= 2e-15 * c * c,
                "Invalid result cosh^2 - sinh^2 at {}",
                x
            );
        }
    }

    #[test]
    fn inverse_hyperbolic_test() {
        assert_eq!(asinh(1.0), 0.881373587019543);
        assert_eq!(asinh(0.1), 0.09983407889920756);
        assert_eq!(asinh(0.05), 0.049979190069348665);
        assert_eq!(asinh(0.01), 0.009999833340832888);
        assert_eq!(asinh(0.001), 0.0009999998333334083);
        assert_eq!(asinh(1e300), 691.4686750787737);
        assert!((asinh(-0.1708632515222296) - -0.1700426167091494).abs() <= 3e-17);
        assert!(asinh(-0.0).is_sign_negative());
        assert_eq!(acosh(1.0), 0.0);
        assert_eq!(acosh(2.0), 1.3169578969248168);
        assert!(
            (acosh(1.0000001).to_bits() as i64).abs_diff(0x3f3d4effc065cae4) <= 1,
            "Invalid result acosh(1.0000001) = {}",
            acosh(1.0000001)
        );
        assert_eq!(acosh(1e300), 691.4686750787737);
        assert_eq!(acosh(f64::INFINITY), f64::INFINITY);
        assert!(acosh(0.5).is_nan());
        assert_eq!(atanh(0.5), 0.5493061443340549);
        assert_eq!(atanh(0.1), 0.10033534773107558);
        assert_eq!(atanh(1.0), f64::INFINITY);
        assert!(atanh(1.5).is_nan());
        assert_eq!(atanh(-1.0), f64::NEG_INFINITY);
        assert_eq!(asinh(f64::NEG_INFINITY), f64::NEG_INFINITY);
        assert_eq!(atanh(1e-10), 1e-10);
    }

    #[test]
    fn inverse_hyperbolic_round_trip() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..2000 {
            let x = rng.random_range(-0.9..0.9);
            assert!((sinh(asinh(x)) - x).abs() <= 1e-15, "asinh({})", x);
            assert!((tanh(atanh(x)) - x).abs() <= 1e-15, "atanh({})", x);
            let y = 1.0 + x.abs() * 10.0;
            assert!((cosh(acosh(y)) - y).abs() <= 1e-14 * y, "acosh({})", y);
        }
    }

    fn ulp_distance(a: f64, b: f64) -> u64 {
        (a.to_bits() as i64).abs_diff(b.to_bits() as i64)
    }

    fn assert_agrees(name: &str, f: fn(f64) -> f64, reference: fn(f64) -> f64, x: f64) {
        let v = f(x);
        let r = reference(x);
        assert!(
            ulp_distance(v, r) <= 1,
            "Invalid result {}({}) = {}, expected {}",
            name,
            x,
            v,
            r
        );
    }

    #[test]
    fn inverse_hyperbolic_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..5000 {
            let x = rng.random_range(-0.2..0.2);
            assert_agrees("asinh", asinh, pxfm::f_asinh, x);
            let x = rng.random_range(-30.0f64..22.0).exp();
            assert_agrees("asinh", asinh, pxfm::f_asinh, x);
            let x = 1.0 + rng.random_range(0.0..0.001);
            assert_agrees("acosh", acosh, pxfm::f_acosh, x);
            let x = rng.random_range(1.0..3.0);
            assert_agrees("acosh", acosh, pxfm::f_acosh, x);
            let x = rng.random_range(1.0f64..25.0).exp();
            assert_agrees("acosh", acosh, pxfm::f_acosh, x);
            let x = rng.random_range(-1.0..1.0);
            assert_agrees("atanh", atanh, pxfm::f_atanh, x);
            let x = rng.random_range(-25.0f64..-1.0).exp();
            assert_agrees("atanh", atanh, pxfm::f_atanh, x);
        }
    }

    #[test]
    fn hyperbolic_agrees_with_reference() {
        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..5000 {
            let x = rng.random_range(-700.0..700.0);
            assert_agrees("sinh", sinh, pxfm::f_sinh, x);
            assert_agrees("cosh", cosh, pxfm::f_cosh, x);
            let x = rng.random_range(-2.0..2.0);
            assert_agrees("sinh", sinh, pxfm::f_sinh, x);
            assert_agrees("cosh", cosh, pxfm::f_cosh, x);
            assert_agrees("tanh", tanh, pxfm::f_tanh, x);
            let x = rng.random_range(-25.0..25.0);
            assert_agrees("tanh", tanh, pxfm::f_tanh, x);
        }
    }
}
