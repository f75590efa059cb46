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

/// Double-double value `hi + lo`.
///
/// Arithmetic here keeps `hi` normalised by the 2^30 split, so products of two high parts
/// are exact in a single double. This is the working type of the table bootstrap
/// and of the compensated sums in the evaluators.
#[derive(Copy, Clone, Default, Debug, PartialEq)]
pub(crate) struct Dekker {
    pub(crate) lo: f64,
    pub(crate) hi: f64,
}

/// Beyond this magnitude `x * 2^30` overflows.
const SPLIT_LIMIT: f64 = 8e298;

/// 2^-30
const SPLIT_SCALE_INV: f64 = 9.31322574615478515625E-10;

/// Clears the low 27 mantissa bits, the remainder `x - mask27(x)` is exact.
#[inline(always)]
fn mask27(x: f64) -> f64 {
    f64::from_bits(x.to_bits() & (u64::MAX << 27))
}

impl Dekker {
    #[inline]
    pub(crate) const fn new(lo: f64, hi: f64) -> Self {
        Dekker { lo, hi }
    }

    /// Splits `a` so that `hi` keeps the upper ~23 significant bits.
    #[inline]
    pub(crate) fn split(a: f64) -> Dekker {
        if a < SPLIT_LIMIT && a > -SPLIT_LIMIT {
            let t = a * SPLIT_SCALE;
            let hi = (a + t) - t;
            Dekker::new(a - hi, hi)
        } else {
            let t = a * SPLIT_SCALE_INV;
            let hi = (a + t - a) * SPLIT_SCALE;
            Dekker::new(a - hi, hi)
        }
    }

    /// Renormalises after an operation that left `hi` with too many bits.
    #[inline]
    pub(crate) fn resplit(self) -> Dekker {
        let c = self.hi + self.lo;
        let d = -(c - self.hi - self.lo);
        if c < SPLIT_LIMIT && c > -SPLIT_LIMIT {
            let z = c * SPLIT_SCALE;
            let hi = (c + z) - z;
            Dekker::new(c - hi + d, hi)
        } else {
            let z = c * SPLIT_SCALE_INV;
            let hi = (c + z - c) * SPLIT_SCALE;
            Dekker::new(c - hi + d, hi)
        }
    }

    #[inline]
    pub(crate) const fn from_exact_add(a: f64, b: f64) -> Dekker {
        let r_hi = a + b;
        let t = r_hi - a;
        let r_lo = b - t;
        Dekker::new(r_lo, r_hi)
    }

    /// Adds `t` into the running compensated sum, the rounding error goes to `lo`.
    #[inline(always)]
    pub(crate) const fn accumulate(self, t: f64) -> Dekker {
        let r = Dekker::from_exact_add(self.hi, t);
        Dekker::new(self.lo + r.lo, r.hi)
    }

    #[inline]
    pub(crate) fn mult(a: Dekker, b: Dekker) -> Dekker {
        Dekker::new(a.hi * b.lo + a.lo * b.hi + a.lo * b.lo, a.hi * b.hi).resplit()
    }

    #[inline]
    pub(crate) fn add(a: Dekker, b: Dekker) -> Dekker {
        Dekker::new(a.lo + b.lo, a.hi + b.hi).resplit()
    }

    /// Reciprocal refined by two correction steps.
    pub(crate) fn recip(self) -> Dekker {
        const B: f64 = 1.0 / 4194304.0;
        const A: f64 = 1.0 - B;

        let v = if self.hi == 0.0 {
            Dekker::new(0.0, self.lo)
        } else {
            self
        };

        let mut lo = (B * v.hi - A * v.lo) / (v.hi * v.hi + v.hi * v.lo);
        if lo.is_nan() {
            lo = 0.0;
        }
        let mut r = Dekker::new(lo, A / v.hi).resplit();

        for _ in 0..2 {
            let mut err = 1.0 - r.hi * v.hi - r.hi * v.lo - r.lo * v.hi - r.lo * v.lo;
            err *= r.hi + r.lo;
            r.lo += err;
        }
        r
    }

    /// Product with the cross terms collected by compensated summation.
    pub(crate) fn quad_mult(a: Dekker, b: Dekker) -> Dekker {
        let xs = Dekker::split(a.hi);
        let ys = Dekker::split(b.hi);

        let head = xs.hi * ys.hi;
        let tail = xs.hi * ys.lo + xs.lo * ys.hi + xs.lo * ys.lo;

        Dekker::from_exact_add(head, tail)
            .accumulate(a.hi * b.lo)
            .accumulate(a.lo * b.hi)
            .accumulate(a.lo * b.lo)
    }

    /// Exact `a * b`, with `hi` the rounded product.
    #[inline]
    pub(crate) fn from_exact_mult(a: f64, b: f64) -> Dekker {
        let p = a * b;
        let ah = mask27(a);
        let al = a - ah;
        let bh = mask27(b);
        let bl = b - bh;
        let e = al * bl - (((p - ah * bh) - al * bh) - ah * bl);
        Dekker::new(e, p)
    }

    /// Exact `a + b` without ordering requirements on the operands.
    #[inline]
    pub(crate) const fn from_full_exact_add(a: f64, b: f64) -> Dekker {
        let r_hi = a + b;
        let t1 = r_hi - a;
        let t2 = r_hi - t1;
        let t3 = b - t1;
        let t4 = a - t2;
        Dekker::new(t3 + t4, r_hi)
    }

    /// Normalised product, `0` and infinities are passed through with a zero tail.
    #[inline]
    pub(crate) fn full_mult(a: Dekker, b: Dekker) -> Dekker {
        let p = a.hi * b.hi;
        if p == 0.0 || p.is_infinite() {
            return Dekker::new(0.0, p);
        }
        let r = Dekker::from_exact_mult(a.hi, b.hi);
        Dekker::from_exact_add(r.hi, r.lo + a.hi * b.lo + a.lo * b.hi)
    }

    /// `1 / x` with the rounding error of the quotient in `lo`.
    #[inline]
    pub(crate) fn exact_recip(x: f64) -> Dekker {
        let q = 1.0 / x;
        if q == 0.0 || !q.is_finite() {
            return Dekker::new(0.0, q);
        }
        let p = Dekker::from_exact_mult(q, x);
        Dekker::new(((1.0 - p.hi) - p.lo) / x, q)
    }

    /// Square root of a non-negative double-double with one correction step.
    #[inline]
    pub(crate) fn sqrt(self) -> Dekker {
        let s = self.hi.sqrt();
        if s == 0.0 || !s.is_finite() {
            return Dekker::new(0.0, s);
        }
        let p = Dekker::from_exact_mult(s, s);
        let c = ((self.hi - p.hi) - p.lo + self.lo) / (2.0 * s);
        Dekker::from_exact_add(s, c)
    }

    /// `self^e` by repeated squaring in normalised double-double.
    ///
    /// Once an intermediate leaves the finite range the result is decided from the sign
    /// and magnitude of `self`.
    pub(crate) fn powi(self, mut e: u64) -> Dekker {
        let odd = e & 1 == 1;
        let mut result = Dekker::new(0.0, 1.0);
        let mut base = self;
        while e != 0 {
            if e & 1 == 1 {
                result = Dekker::full_mult(result, base);
            }
            e >>= 1;
            if e != 0 {
                base = Dekker::full_mult(base, base);
            }
        }
        if result.hi.is_nan() || result.lo.is_nan() {
            let h = self.hi;
            let v = if h.is_nan() {
                f64::NAN
            } else if h.abs() < 1.0 {
                if h < 0.0 && odd { -0.0 } else { 0.0 }
            } else if h < 0.0 && odd {
                f64::NEG_INFINITY
            } else {
                f64::INFINITY
            };
            return Dekker::new(0.0, v);
        }
        result
    }

    #[inline]
    pub(crate) const fn neg(self) -> Dekker {
        Dekker::new(-self.lo, -self.hi)
    }

    #[cfg(test)]
    pub(crate) const fn to_f64(self) -> f64 {
        self.lo + self.hi
    }
}
