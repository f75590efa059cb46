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
use crate::math::dekker::Dekker;
use std::ops::Mul;

/// Double-double value `high + low`.
///
/// `high` keeps at most 26 significant bits so `high * high` is exact in a single
/// double, `low` is the exact remainder and `full` is their rounded sum.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Split {
    full: f64,
    high: f64,
    low: f64,
}

impl Split {
    pub const NAN: Split = Split::from_parts(f64::NAN, 0.0);
    pub const POSITIVE_INFINITY: Split = Split::from_parts(f64::INFINITY, 0.0);
    pub const NEGATIVE_INFINITY: Split = Split::from_parts(f64::NEG_INFINITY, 0.0);

    /// Splits `x` by clearing its 27 lowest mantissa bits.
    #[inline]
    pub const fn new(x: f64) -> Split {
        let high = f64::from_bits(x.to_bits() & (u64::MAX << 27));
        Split {
            full: x,
            high,
            low: x - high,
        }
    }

    /// Builds a value from already separated parts.
    #[inline]
    pub const fn from_parts(high: f64, low: f64) -> Split {
        let full = if high == 0.0 {
            if low == 0.0 && high.to_bits() == 1 << 63 {
                -0.0
            } else {
                low
            }
        } else {
            high + low
        };
        Split { full, high, low }
    }

    #[inline]
    pub const fn full(&self) -> f64 {
        self.full
    }

    #[inline]
    pub const fn high(&self) -> f64 {
        self.high
    }

    #[inline]
    pub const fn low(&self) -> f64 {
        self.low
    }

    /// Product in double-double precision.
    #[inline]
    pub fn multiply(&self, b: &Split) -> Split {
        let basic = Split::new(self.full * b.full);
        let error = self.low * b.low
            - (((basic.full - self.high * b.high) - self.low * b.high) - self.high * b.low);
        Split::from_parts(basic.high, basic.low + error)
    }

    /// Reciprocal corrected by one residual step.
    pub fn reciprocal(&self) -> Split {
        let approximate = 1.0 / self.full;
        let inv = Split::new(approximate);
        let product = self.multiply(&inv);
        let error = product.high - 1.0 + product.low;
        if error.is_nan() {
            // non-finite operand, nothing to correct
            inv
        } else {
            Split::from_parts(inv.high, inv.low - error / self.full)
        }
    }

    /// Integral power by repeated squaring.
    ///
    /// Squares are carried in normalised double-double, so the error stays around
    /// 1 ULP even for exponents in the billions.
    pub fn pow(&self, e: u64) -> Split {
        let base = if self.full.is_finite() {
            Dekker::new((self.high - self.full) + self.low, self.full)
        } else {
            Dekker::new(0.0, self.full)
        };
        let r = base.powi(e);
        if !r.hi.is_finite() {
            return Split::from_parts(r.hi, 0.0);
        }
        let high = Split::new(r.hi).high;
        Split::from_parts(high, (r.hi - high) + r.lo)
    }
}

impl Mul for Split {
    type Output = Split;

    #[inline]
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_round_trip() {
        let mut samples = vec![
            0.0,
            -0.0,
            1.0,
            -1.0,
            f64::MIN_POSITIVE,
            5e-324,
            1e-310,
            -2.5e-315,
            4503599627370496.0,
            4503599627370497.0,
            4503599627370495.0,
            9007199254740991.0,
            f64::MAX,
            -f64::MAX,
        ];
        let mut x = 1e-300;
        while x < 1e300 {
            samples.push(x * 1.2345678901234567);
            samples.push(-x * 7.654321);
            x *= 1e7;
        }
        for &x in &samples {
            let s = Split::new(x);
            assert_eq!(s.high() + s.low(), x, "Invalid split of {}", x);
            assert_eq!(s.high().to_bits() & ((1 << 27) - 1), 0);
        }
    }

    #[test]
    fn negative_zero_parts() {
        let s = Split::from_parts(-0.0, 0.0);
        assert!(s.full().is_sign_negative());
        let s = Split::from_parts(0.0, -0.0);
        assert!(s.full().is_sign_negative());
        assert_eq!(Split::from_parts(0.0, 1e-20).full(), 1e-20);
    }

    #[test]
    fn multiply_keeps_low_bits() {
        let s = Split::new(0.1).multiply(&Split::new(0.1));
        assert_eq!(s.full(), 0.010000000000000002);
        // 0.1 * 0.1 in double is 0.01000000000000000111022302462515654042...
        assert!((s.high() + s.low() - 0.010000000000000002).abs() < 1e-18);
        let r = Split::new(3.0).reciprocal();
        assert_eq!(r.full(), 0.3333333333333333);
        assert_eq!((r * Split::new(3.0)).full(), 1.0);
    }

    #[test]
    fn pow_test() {
        assert_eq!(Split::new(2.0).pow(10).full(), 1024.0);
        assert_eq!(Split::new(1.1).pow(100).full(), 13780.61233982238);
        assert_eq!(Split::new(2.0).reciprocal().pow(3).full(), 0.125);
        assert_eq!(Split::new(7.0).pow(0).full(), 1.0);
    }

    #[test]
    fn pow_non_finite() {
        assert_eq!(Split::new(10.0).pow(400).full(), f64::INFINITY);
        assert_eq!(Split::new(-10.0).pow(401).full(), f64::NEG_INFINITY);
        assert_eq!(Split::new(0.1).pow(400).full(), 0.0);
        assert!(Split::NAN.pow(2).full().is_nan());
        assert_eq!(
            Split::POSITIVE_INFINITY.pow(3).full(),
            f64::INFINITY,
            "Invalid result {:?}",
            Split::POSITIVE_INFINITY.pow(3)
        );
        assert!(Split::new(-0.1).pow(401).full().is_sign_negative());
        assert_eq!(Split::new(-0.1).pow(401).full(), 0.0);
    }

    #[test]
    fn pow_large_exponent() {
        let r = Split::new(1.0000001).pow(6945330230).full();
        assert!(
            (r.to_bits() as i64).abs_diff(0x7e8ffc048629d821) <= 1,
            "Invalid result {:#x}",
            r.to_bits()
        );
    }
}
