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
//! Series-based transcendental functions over [`BigDecimal`].
//!
//! Everything here is slower than the `f64` functions and trades tables for
//! plain Taylor summation: a series is summed until two consecutive partial
//! sums, rounded to the working precision, compare equal.
mod exp;
mod hyperbolic;
mod trigo;

use crate::err::{MathError, Result};
use crate::math::log10;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use num_traits::{FromPrimitive, One, ToPrimitive, Zero};

/// Significant digits of the default context.
pub const DEFAULT_PRECISION: u64 = 34;

/// Extra digits carried through intermediate results.
const GUARD_DIGITS: u64 = 6;

/// Division in `bigdecimal` keeps 100 digits, working precision must stay below it.
const MAX_PRECISION: u64 = 90;

/// Upper bound on series terms and Newton steps.
const MAX_ITERATIONS: u64 = 10_000;

/// Largest decimal exponent of a power, scales of two such factors still add up in `i64`.
const MAX_DECIMAL_EXPONENT: f64 = 1e18;

/// Precision and convergence settings of the decimal functions.
///
/// Holds π and e computed once at the working precision, so building a
/// context is not free; keep one around instead of creating one per call.
#[derive(Debug, Clone, PartialEq)]
pub struct DecimalContext {
    precision: u64,
    epsilon: BigDecimal,
    pi: BigDecimal,
    e: BigDecimal,
    /// π at the widest working precision, used to take out multiples of 2π.
    reduction_pi: BigDecimal,
}

impl Default for DecimalContext {
    /// 34 significant digits, epsilon 1e-30
    fn default() -> Self {
        DecimalContext::new(DEFAULT_PRECISION)
    }
}

impl DecimalContext {
    /// Context rounding results to `precision` significant digits, clamped to `1..=90`.
    ///
    /// Epsilon defaults to `10^-(precision - 4)`.
    pub fn new(precision: u64) -> DecimalContext {
        let precision = precision.clamp(1, MAX_PRECISION);
        let epsilon_digits = precision.saturating_sub(4).max(1);
        let mut context = DecimalContext {
            precision,
            epsilon: BigDecimal::new(BigInt::one(), epsilon_digits as i64),
            pi: BigDecimal::zero(),
            e: BigDecimal::zero(),
            reduction_pi: BigDecimal::zero(),
        };
        context.pi = context.machin_pi();
        context.reduction_pi = if precision == MAX_PRECISION {
            context.pi.clone()
        } else {
            DecimalContext {
                precision: MAX_PRECISION,
                ..context.clone()
            }
            .machin_pi()
        };
        context.e = context.euler();
        tracing::debug!(precision, "Decimal context constants computed");
        context
    }

    /// Replaces the convergence threshold of [`DecimalContext::sqrt`].
    pub fn with_epsilon(mut self, epsilon: BigDecimal) -> DecimalContext {
        self.epsilon = epsilon.abs();
        self
    }

    #[inline]
    pub fn precision(&self) -> u64 {
        self.precision
    }

    #[inline]
    pub fn epsilon(&self) -> &BigDecimal {
        &self.epsilon
    }

    /// π rounded to the context precision
    pub fn pi(&self) -> BigDecimal {
        self.pi.with_prec(self.precision)
    }

    /// e rounded to the context precision
    pub fn e(&self) -> BigDecimal {
        self.e.with_prec(self.precision)
    }

    /// Computes square root with the context epsilon
    pub fn sqrt(&self, x: &BigDecimal) -> Result<BigDecimal> {
        self.sqrt_with_epsilon(x, &self.epsilon)
    }

    /// Computes square root by Newton-Raphson, stopping once a step moves less than
    /// `epsilon` relative to the current estimate
    pub fn sqrt_with_epsilon(&self, x: &BigDecimal, epsilon: &BigDecimal) -> Result<BigDecimal> {
        if *x < BigDecimal::zero() {
            let error = MathError::NegativeSquareRoot(x.clone());
            tracing::debug!(%error, "decimal sqrt rejected");
            return Err(error);
        }
        let (root, converged) = self.newton_sqrt(x, epsilon);
        if !converged {
            let error = MathError::NoConvergence {
                operation: "sqrt",
                value: x.clone(),
            };
            tracing::debug!(%error, "decimal sqrt gave up");
            return Err(error);
        }
        Ok(self.finish(root))
    }

    #[inline]
    fn working_precision(&self) -> u64 {
        self.precision + GUARD_DIGITS
    }

    /// Rounds an intermediate to the working precision.
    #[inline]
    fn round(&self, x: BigDecimal) -> BigDecimal {
        x.with_prec(self.working_precision())
    }

    /// Rounds a result to the context precision.
    #[inline]
    fn finish(&self, x: BigDecimal) -> BigDecimal {
        x.with_prec(self.precision)
    }

    /// One unit in the last working digit of a number around 1.
    fn working_epsilon(&self) -> BigDecimal {
        BigDecimal::new(BigInt::one(), self.working_precision() as i64)
    }

    fn half_pi(&self) -> BigDecimal {
        self.round(&self.pi / BigDecimal::from(2))
    }

    /// Sums `first + t1 + t2 + ...` with `t_k = next_term(t_(k-1), k)` until the sum stops changing.
    fn converge(
        &self,
        series: &'static str,
        first: BigDecimal,
        mut next_term: impl FnMut(&BigDecimal, u64) -> BigDecimal,
    ) -> BigDecimal {
        let mut sum = self.round(first.clone());
        let mut term = first;
        for k in 1..MAX_ITERATIONS {
            term = self.round(next_term(&term, k));
            let next = self.round(&sum + &term);
            if next == sum {
                tracing::trace!(series, iterations = k, "series converged");
                return next;
            }
            sum = next;
        }
        tracing::trace!(series, iterations = MAX_ITERATIONS, "series stopped at the limit");
        sum
    }

    /// `(m, t)` with `|x| = m * 10^t`, `m` in `[0.1, 1)` rounded to `f64`.
    fn scientific(x: &BigDecimal) -> (f64, i64) {
        let exponent = (x.digits() as i64).saturating_sub(x.fractional_digit_count());
        let (digits, scale) = x.abs().into_bigint_and_exponent();
        let mantissa = BigDecimal::new(digits, scale.saturating_add(exponent))
            .to_f64()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0);
        (mantissa, exponent)
    }

    /// Rough `log10|x|` for non-zero `x`, enough to bound the size of a power.
    fn log10_magnitude(x: &BigDecimal) -> f64 {
        let (mantissa, exponent) = DecimalContext::scientific(x);
        exponent as f64 + log10(mantissa)
    }

    /// Fails when `|log10 x| * n` would push the decimal exponent past what the scale holds.
    fn check_power_size(
        operation: &'static str,
        value: &BigDecimal,
        log10_x: f64,
        n: u64,
    ) -> Result<()> {
        if log10_x.abs() * n as f64 > MAX_DECIMAL_EXPONENT {
            let error = MathError::OutOfDomain {
                operation,
                value: value.clone(),
            };
            tracing::debug!(%error, "decimal power too large");
            return Err(error);
        }
        Ok(())
    }

    /// Newton-Raphson for non-negative `x`, the flag is false when the step limit was hit.
    ///
    /// Writing `x = m * 10^(2k)` with `m` in `[0.1, 10)`, the seed is `sqrt(m) * 10^k`
    /// with `sqrt(m)` taken in `f64`, so any exponent starts at double accuracy.
    fn newton_sqrt(&self, x: &BigDecimal, epsilon: &BigDecimal) -> (BigDecimal, bool) {
        if x.is_zero() {
            return (BigDecimal::zero(), true);
        }

        let (mantissa, exponent) = DecimalContext::scientific(x);
        let (mantissa, exponent) = if exponent % 2 != 0 {
            (mantissa * 10.0, exponent - 1)
        } else {
            (mantissa, exponent)
        };
        let seed = BigDecimal::from_f64(mantissa.sqrt())
            .filter(|v| *v > BigDecimal::zero())
            .unwrap_or_else(BigDecimal::one);
        let mut y = self.round(seed * BigDecimal::new(BigInt::one(), -(exponent / 2)));

        let two = BigDecimal::from(2);
        let mut last_delta: Option<BigDecimal> = None;
        for iteration in 0..MAX_ITERATIONS {
            let next = self.round((&y + x / &y) / &two);
            let delta = (&next - &y).abs();
            // rounding may leave the iteration bouncing between neighbours
            let stalled = last_delta.as_ref().is_some_and(|last| delta >= *last);
            if next == y || delta <= epsilon * next.abs() || stalled {
                tracing::trace!(iterations = iteration + 1, "sqrt converged");
                return (next, true);
            }
            y = next;
            last_delta = Some(delta);
        }
        tracing::trace!(iterations = MAX_ITERATIONS, "sqrt stopped at the limit");
        (y, false)
    }

    /// `x^n` by repeated squaring at the working precision.
    fn pow_u64(&self, x: &BigDecimal, mut n: u64) -> BigDecimal {
        let mut result = BigDecimal::one();
        let mut base = x.clone();
        while n != 0 {
            if n & 1 == 1 {
                result = self.round(&result * &base);
            }
            n >>= 1;
            if n != 0 {
                base = self.round(&base * &base);
            }
        }
        result
    }

    /// atan(1/n) from its Taylor series.
    fn atan_inverse(&self, n: u64) -> BigDecimal {
        let n = BigDecimal::from(n);
        let n2 = &n * &n;
        let mut power = self.round(BigDecimal::one() / &n);
        self.converge("atan_inverse", power.clone(), |_, k| {
            power = self.round(-(&power / &n2));
            &power / BigDecimal::from(2 * k + 1)
        })
    }

    /// π = 16 atan(1/5) - 4 atan(1/239)
    fn machin_pi(&self) -> BigDecimal {
        let a = self.atan_inverse(5) * BigDecimal::from(16);
        let b = self.atan_inverse(239) * BigDecimal::from(4);
        self.round(a - b)
    }

    /// e = sum of 1/k!
    fn euler(&self) -> BigDecimal {
        self.converge("e", BigDecimal::one(), |term, k| term / BigDecimal::from(k))
    }

    /// `x` rounded towards negative infinity.
    fn floor(x: &BigDecimal) -> BigDecimal {
        let truncated = x.with_scale(0);
        if truncated > *x {
            truncated - BigDecimal::one()
        } else {
            truncated
        }
    }

    #[inline]
    fn is_integral(x: &BigDecimal) -> bool {
        x.with_scale(0) == *x
    }
}
