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
use crate::err::{MathError, Result};

/// Checked integer arithmetic that reports overflow instead of wrapping.
///
/// Implemented for `i32` and `i64`. Every operation either returns the exact
/// mathematical result or [`MathError::Overflow`] carrying the operands.
pub trait ExactInteger: Sized + Copy {
    fn add_exact(self, rhs: Self) -> Result<Self>;
    fn subtract_exact(self, rhs: Self) -> Result<Self>;
    fn multiply_exact(self, rhs: Self) -> Result<Self>;
    fn increment_exact(self) -> Result<Self>;
    fn decrement_exact(self) -> Result<Self>;
    fn negate_exact(self) -> Result<Self>;
    fn abs_exact(self) -> Result<Self>;
    /// Largest integer not greater than `self / rhs`.
    fn floor_div(self, rhs: Self) -> Result<Self>;
    /// `self - floor_div(self, rhs) * rhs`, with the sign of `rhs`.
    fn floor_mod(self, rhs: Self) -> Result<Self>;
    /// Greatest common divisor, always non-negative.
    fn gcd(self, rhs: Self) -> Result<Self>;
    /// Least common multiple, always non-negative.
    fn lcm(self, rhs: Self) -> Result<Self>;
}

macro_rules! generated_exact_definition {
    ($T: ty) => {
        impl ExactInteger for $T {
            #[inline]
            fn add_exact(self, rhs: $T) -> Result<$T> {
                let sum = self.wrapping_add(rhs);
                // both operands share a sign the sum lost
                if ((self ^ sum) & (rhs ^ sum)) < 0 {
                    return Err(MathError::overflow("add_exact", self, rhs));
                }
                Ok(sum)
            }

            #[inline]
            fn subtract_exact(self, rhs: $T) -> Result<$T> {
                let diff = self.wrapping_sub(rhs);
                if ((self ^ rhs) & (self ^ diff)) < 0 {
                    return Err(MathError::overflow("subtract_exact", self, rhs));
                }
                Ok(diff)
            }

            #[inline]
            fn multiply_exact(self, rhs: $T) -> Result<$T> {
                let product = self.wrapping_mul(rhs);
                if (self == <$T>::MIN && rhs == -1)
                    || (rhs == <$T>::MIN && self == -1)
                    || (self != 0 && product / self != rhs)
                {
                    return Err(MathError::overflow("multiply_exact", self, rhs));
                }
                Ok(product)
            }

            #[inline]
            fn increment_exact(self) -> Result<$T> {
                if self == <$T>::MAX {
                    return Err(MathError::overflow("increment_exact", self, 1));
                }
                Ok(self + 1)
            }

            #[inline]
            fn decrement_exact(self) -> Result<$T> {
                if self == <$T>::MIN {
                    return Err(MathError::overflow("decrement_exact", self, 1));
                }
                Ok(self - 1)
            }

            #[inline]
            fn negate_exact(self) -> Result<$T> {
                if self == <$T>::MIN {
                    return Err(MathError::overflow("negate_exact", self, -1));
                }
                Ok(-self)
            }

            #[inline]
            fn abs_exact(self) -> Result<$T> {
                if self == <$T>::MIN {
                    return Err(MathError::overflow("abs_exact", self, -1));
                }
                Ok(self.abs())
            }

            fn floor_div(self, rhs: $T) -> Result<$T> {
                if rhs == 0 {
                    return Err(MathError::zero_denominator("floor_div", self));
                }
                if self == <$T>::MIN && rhs == -1 {
                    return Err(MathError::overflow("floor_div", self, rhs));
                }
                let q = self / rhs;
                if (self ^ rhs) < 0 && q * rhs != self {
                    // signs differ and the division truncated towards zero
                    return Ok(q - 1);
                }
                Ok(q)
            }

            fn floor_mod(self, rhs: $T) -> Result<$T> {
                if rhs == 0 {
                    return Err(MathError::zero_denominator("floor_mod", self));
                }
                // MIN % -1 is zero, only the hardware instruction traps
                let m = self.wrapping_rem(rhs);
                if (self ^ rhs) < 0 && m != 0 {
                    return Ok(m + rhs);
                }
                Ok(m)
            }

            fn gcd(self, rhs: $T) -> Result<$T> {
                let mut u = self;
                let mut v = rhs;
                if u == 0 || v == 0 {
                    if u == <$T>::MIN || v == <$T>::MIN {
                        return Err(MathError::overflow("gcd", self, rhs));
                    }
                    return Ok(u.abs() + v.abs());
                }

                // negatives reach one further than positives, keep both operands negative
                if u > 0 {
                    u = -u;
                }
                if v > 0 {
                    v = -v;
                }

                // common factors of two
                let mut k = 0;
                while (u & 1) == 0 && (v & 1) == 0 && k < <$T>::BITS - 1 {
                    u /= 2;
                    v /= 2;
                    k += 1;
                }
                if k == <$T>::BITS - 1 {
                    return Err(MathError::overflow("gcd", self, rhs));
                }

                // at least one of u, v is odd, t is the halved difference
                let mut t = if (u & 1) == 1 { v } else { -(u / 2) };
                loop {
                    while (t & 1) == 0 {
                        t /= 2;
                    }
                    if t > 0 {
                        u = -t;
                    } else {
                        v = t;
                    }
                    t = (v - u) / 2;
                    if t == 0 {
                        break;
                    }
                }
                Ok(-u * (1 << k))
            }

            fn lcm(self, rhs: $T) -> Result<$T> {
                if self == 0 || rhs == 0 {
                    return Ok(0);
                }
                let lcm = (self / self.gcd(rhs)?).multiply_exact(rhs)?;
                if lcm == <$T>::MIN {
                    return Err(MathError::overflow("lcm", self, rhs));
                }
                Ok(lcm.abs())
            }
        }
    };
}

generated_exact_definition!(i32);
generated_exact_definition!(i64);

/// Narrows `value` to `i32`, failing when it does not fit.
#[inline]
pub fn to_int_exact(value: i64) -> Result<i32> {
    i32::try_from(value).map_err(|_| MathError::overflow("to_int_exact", value, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn is_overflow<T>(r: Result<T>) -> bool {
        matches!(r, Err(MathError::Overflow { .. }))
    }

    fn is_zero_denominator<T>(r: Result<T>) -> bool {
        matches!(r, Err(MathError::ZeroDenominator { .. }))
    }

    #[test]
    fn add_subtract_exact() {
        assert_eq!(5i32.add_exact(7), Ok(12));
        assert_eq!(i32::MAX.add_exact(0), Ok(i32::MAX));
        assert_eq!(i64::MIN.add_exact(0), Ok(i64::MIN));
        assert_eq!(i32::MIN.add_exact(i32::MAX), Ok(-1));
        assert!(is_overflow(i32::MAX.add_exact(1)));
        assert!(is_overflow(i64::MIN.add_exact(-1)));
        assert_eq!(
            i64::MAX.add_exact(1),
            Err(MathError::Overflow {
                operation: "add_exact",
                lhs: i64::MAX,
                rhs: 1
            })
        );

        assert_eq!(3i64.subtract_exact(10), Ok(-7));
        assert_eq!((-1i32).subtract_exact(i32::MAX), Ok(i32::MIN));
        assert!(is_overflow(0i32.subtract_exact(i32::MIN)));
        assert!(is_overflow(i64::MAX.subtract_exact(-1)));
    }

    #[test]
    fn multiply_exact() {
        assert_eq!(46341i32.multiply_exact(-46340), Ok(-2147441940));
        assert_eq!((-1i64).multiply_exact(i64::MAX), Ok(-i64::MAX));
        assert_eq!(0i32.multiply_exact(i32::MIN), Ok(0));
        assert!(is_overflow(i32::MAX.multiply_exact(2)));
        assert!(is_overflow(i64::MAX.multiply_exact(2)));
        assert!(is_overflow(i32::MIN.multiply_exact(-1)));
        assert!(is_overflow((-1i64).multiply_exact(i64::MIN)));
        assert!(is_overflow(46341i32.multiply_exact(46341)));
    }

    #[test]
    fn exact_matches_checked() {
        let mut rng = StdRng::seed_from_u64(41);
        for _ in 0..10000 {
            let a = rng.random::<i32>() >> rng.random_range(0..31);
            let b = rng.random::<i32>() >> rng.random_range(0..31);
            assert_eq!(a.add_exact(b).ok(), a.checked_add(b));
            assert_eq!(a.subtract_exact(b).ok(), a.checked_sub(b));
            assert_eq!(a.multiply_exact(b).ok(), a.checked_mul(b));

            let a = rng.random::<i64>() >> rng.random_range(0..63);
            let b = rng.random::<i64>() >> rng.random_range(0..63);
            assert_eq!(a.add_exact(b).ok(), a.checked_add(b));
            assert_eq!(a.subtract_exact(b).ok(), a.checked_sub(b));
            assert_eq!(a.multiply_exact(b).ok(), a.checked_mul(b));
        }
    }

    #[test]
    fn unary_exact() {
        assert_eq!(41i32.increment_exact(), Ok(42));
        assert!(is_overflow(i32::MAX.increment_exact()));
        assert_eq!(i64::MAX.decrement_exact(), Ok(i64::MAX - 1));
        assert!(is_overflow(i64::MIN.decrement_exact()));
        assert_eq!(i32::MAX.negate_exact(), Ok(-i32::MAX));
        assert!(is_overflow(i32::MIN.negate_exact()));
        assert_eq!((-9i64).abs_exact(), Ok(9));
        assert!(is_overflow(i64::MIN.abs_exact()));
    }

    #[test]
    fn to_int_exact_test() {
        assert_eq!(to_int_exact(-5), Ok(-5));
        assert_eq!(to_int_exact(i32::MIN as i64), Ok(i32::MIN));
        assert!(is_overflow(to_int_exact(i32::MAX as i64 + 1)));
        assert!(is_overflow(to_int_exact(i64::MIN)));
    }

    #[test]
    fn floor_div_mod() {
        assert_eq!(7i32.floor_div(2), Ok(3));
        assert_eq!((-7i32).floor_div(2), Ok(-4));
        assert_eq!(7i32.floor_div(-2), Ok(-4));
        assert_eq!((-7i32).floor_div(-2), Ok(3));
        assert_eq!((-8i64).floor_div(2), Ok(-4));
        assert_eq!(7i32.floor_mod(2), Ok(1));
        assert_eq!((-7i32).floor_mod(2), Ok(1));
        assert_eq!(7i32.floor_mod(-2), Ok(-1));
        assert_eq!((-7i64).floor_mod(-2), Ok(-1));
        assert_eq!((-8i64).floor_mod(2), Ok(0));
        assert_eq!(i64::MIN.floor_mod(-1), Ok(0));
        assert!(is_overflow(i32::MIN.floor_div(-1)));
        assert!(is_zero_denominator(5i32.floor_div(0)));
        assert!(is_zero_denominator(5i64.floor_mod(0)));

        let mut rng = StdRng::seed_from_u64(43);
        for _ in 0..10000 {
            let a = rng.random::<i64>() >> rng.random_range(0..63);
            let b = rng.random::<i64>() >> rng.random_range(0..63);
            if b == 0 {
                continue;
            }
            if a == i64::MIN && b == -1 {
                continue;
            }
            let d = a.floor_div(b).unwrap();
            let m = a.floor_mod(b).unwrap();
            let expected = if b < 0 && a.rem_euclid(b) != 0 {
                a.div_euclid(b) - 1
            } else {
                a.div_euclid(b)
            };
            assert_eq!(d, expected, "Invalid result floor_div({}, {})", a, b);
            assert!(m == 0 || (m < 0) == (b < 0), "Invalid result floor_mod({}, {})", a, b);
            assert_eq!(d.wrapping_mul(b).wrapping_add(m), a);
        }
    }

    #[test]
    fn gcd_test() {
        assert_eq!(12i32.gcd(18), Ok(6));
        assert_eq!((-12i32).gcd(18), Ok(6));
        assert_eq!(17i64.gcd(-5), Ok(1));
        assert_eq!(0i32.gcd(0), Ok(0));
        assert_eq!((-7i32).gcd(0), Ok(7));
        assert_eq!(0i64.gcd(i64::MAX), Ok(i64::MAX));
        assert_eq!(i32::MIN.gcd(1 << 30), Ok(1 << 30));
        assert_eq!(i64::MIN.gcd(6), Ok(2));
        assert!(is_overflow(i32::MIN.gcd(0)));
        assert!(is_overflow(0i64.gcd(i64::MIN)));
        assert!(is_overflow(i32::MIN.gcd(i32::MIN)));
        assert!(is_overflow(i64::MIN.gcd(i64::MIN)));

        fn euclid(a: i64, b: i64) -> i64 {
            let (mut a, mut b) = (a.unsigned_abs(), b.unsigned_abs());
            while b != 0 {
                (a, b) = (b, a % b);
            }
            a as i64
        }
        let mut rng = StdRng::seed_from_u64(47);
        for _ in 0..10000 {
            let a = (rng.random::<i64>() >> rng.random_range(8..63)) * rng.random_range(1..64);
            let b = (rng.random::<i64>() >> rng.random_range(8..63)) * rng.random_range(1..64);
            assert_eq!(a.gcd(b), Ok(euclid(a, b)), "Invalid result gcd({}, {})", a, b);
        }
    }

    #[test]
    fn lcm_test() {
        assert_eq!(4i32.lcm(6), Ok(12));
        assert_eq!((-4i64).lcm(6), Ok(12));
        assert_eq!(4i32.lcm(0), Ok(0));
        assert_eq!(0i64.lcm(i64::MIN), Ok(0));
        assert_eq!(i32::MAX.lcm(1), Ok(i32::MAX));
        assert!(is_overflow(i32::MIN.lcm(1)));
        assert!(is_overflow(i32::MAX.lcm(2)));
        assert!(is_overflow((1i64 << 62).lcm(3)));
    }
}
