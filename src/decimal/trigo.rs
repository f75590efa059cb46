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
use crate::decimal::{DecimalContext, GUARD_DIGITS, MAX_PRECISION};
use crate::err::{MathError, Result};
use bigdecimal::BigDecimal;
use num_traits::{One, Zero};

impl DecimalContext {
    /// Reduces `x` into `[-π, π]` with a single division by 2π.
    ///
    /// 2π is carried at the widest working precision, so the remainder keeps the
    /// context precision while the multiple has up to `90 - precision` digits.
    fn reduce_two_pi(&self, x: &BigDecimal) -> BigDecimal {
        let two_pi = &self.reduction_pi * BigDecimal::from(2);
        let n = (x / &two_pi).round(0);
        if n.is_zero() {
            return x.clone();
        }
        let multiple_digits = n.digits();
        if multiple_digits + self.working_precision() > MAX_PRECISION + GUARD_DIGITS {
            tracing::debug!(
                multiple_digits,
                precision = self.precision,
                "periodic reduction drops digits"
            );
        }
        self.round(x - n * two_pi)
    }

    fn sin_working(&self, x: &BigDecimal) -> BigDecimal {
        let r = self.reduce_two_pi(x);
        let r2 = self.round(&r * &r);
        self.converge("sin", r, |term, k| {
            -(term * &r2) / BigDecimal::from((2 * k) * (2 * k + 1))
        })
    }

    fn cos_working(&self, x: &BigDecimal) -> BigDecimal {
        let r = self.reduce_two_pi(x);
        let r2 = self.round(&r * &r);
        self.converge("cos", BigDecimal::one(), |term, k| {
            -(term * &r2) / BigDecimal::from((2 * k - 1) * (2 * k))
        })
    }

    /// Computes sine
    pub fn sin(&self, x: &BigDecimal) -> BigDecimal {
        self.finish(self.sin_working(x))
    }

    /// Computes cosine
    pub fn cos(&self, x: &BigDecimal) -> BigDecimal {
        self.finish(self.cos_working(x))
    }

    /// Computes tangent, failing where the cosine rounds to zero
    pub fn tan(&self, x: &BigDecimal) -> Result<BigDecimal> {
        let c = self.cos_working(x);
        if c.is_zero() {
            return Err(MathError::zero_denominator("tan", x));
        }
        Ok(self.finish(self.sin_working(x) / c))
    }

    fn atan_working(&self, x: &BigDecimal) -> BigDecimal {
        if x.is_zero() {
            return BigDecimal::zero();
        }

        if x.abs() > BigDecimal::one() {
            // atan(x) = ±π/2 - atan(1/x)
            let inverse = self.atan_working(&self.round(BigDecimal::one() / x));
            let half_pi = self.half_pi();
            return if *x > BigDecimal::zero() {
                self.round(half_pi - inverse)
            } else {
                self.round(-half_pi - inverse)
            };
        }

        // atan(x) = 2 atan(x / (1 + sqrt(1 + x^2))), until the series converges quickly
        let eighth = BigDecimal::one() / BigDecimal::from(8);
        let epsilon = self.working_epsilon();
        let mut y = x.clone();
        let mut halvings = 0u64;
        while y.abs() >= eighth {
            // 1 + y^2 lies in [1, 2], where the f64 seed always converges
            let (root, _) =
                self.newton_sqrt(&self.round(BigDecimal::one() + &y * &y), &epsilon);
            y = self.round(&y / (BigDecimal::one() + root));
            halvings += 1;
        }

        let y2 = self.round(&y * &y);
        let mut power = y.clone();
        let sum = self.converge("atan", y, |_, k| {
            power = self.round(-(&power * &y2));
            &power / BigDecimal::from(2 * k + 1)
        });
        self.round(sum * self.pow_u64(&BigDecimal::from(2), halvings))
    }

    /// Computes arctangent
    pub fn atan(&self, x: &BigDecimal) -> BigDecimal {
        self.finish(self.atan_working(x))
    }

    /// Computes the angle of the point `(x, y)`, zero at the origin
    pub fn atan2(&self, y: &BigDecimal, x: &BigDecimal) -> BigDecimal {
        let zero = BigDecimal::zero();
        if x.is_zero() {
            return if *y > zero {
                self.finish(self.half_pi())
            } else if *y < zero {
                self.finish(-self.half_pi())
            } else {
                zero
            };
        }

        let angle = self.atan_working(&self.round(y / x));
        if *x > zero {
            self.finish(angle)
        } else if *y >= zero {
            self.finish(angle + &self.pi)
        } else {
            self.finish(angle - &self.pi)
        }
    }

    fn asin_working(&self, operation: &'static str, x: &BigDecimal) -> Result<BigDecimal> {
        let one = BigDecimal::one();
        if x.abs() > one {
            let error = MathError::OutOfDomain {
                operation,
                value: x.clone(),
            };
            tracing::debug!(%error, "decimal inverse sine rejected");
            return Err(error);
        }
        if x.abs() == one {
            let half_pi = self.half_pi();
            return Ok(if *x > BigDecimal::zero() {
                half_pi
            } else {
                -half_pi
            });
        }

        // asin(x) = atan(x / sqrt(1 - x^2))
        let (root, converged) =
            self.newton_sqrt(&self.round(one - x * x), &self.working_epsilon());
        if !converged {
            let error = MathError::NoConvergence {
                operation,
                value: x.clone(),
            };
            tracing::debug!(%error, "decimal inverse sine gave up");
            return Err(error);
        }
        if root.is_zero() {
            return Err(MathError::zero_denominator(operation, x));
        }
        Ok(self.atan_working(&self.round(x / root)))
    }

    /// Computes arcsine, failing outside of `[-1, 1]`
    pub fn asin(&self, x: &BigDecimal) -> Result<BigDecimal> {
        Ok(self.finish(self.asin_working("asin", x)?))
    }

    /// Computes arccosine, failing outside of `[-1, 1]`
    pub fn acos(&self, x: &BigDecimal) -> Result<BigDecimal> {
        let asin = self.asin_working("acos", x)?;
        Ok(self.finish(self.half_pi() - asin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::tests::{assert_close, decimal};

    #[test]
    fn sin_cos_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_eq!(ctx.sin(&BigDecimal::zero()), BigDecimal::zero());
        assert_eq!(ctx.cos(&BigDecimal::zero()), BigDecimal::one());
        let half_pi = ctx.pi() / BigDecimal::from(2);
        assert_close(&ctx.sin(&half_pi), &BigDecimal::one(), &eps);
        assert_close(&ctx.cos(&ctx.pi()), &BigDecimal::from(-1), &eps);
        assert_close(
            &ctx.sin(&BigDecimal::one()),
            &decimal("0.841470984807896506652502321630299"),
            &eps,
        );
        assert_close(
            &ctx.sin(&BigDecimal::from(100)),
            &decimal("-0.5063656411097587936565576104597854"),
            &eps,
        );
        assert_close(
            &ctx.cos(&BigDecimal::from(-7)),
            &decimal("0.753902254343304638141197521719182"),
            &eps,
        );
        assert_close(
            &ctx.sin(&BigDecimal::from(1_000_000)),
            &decimal("-0.3499935021712929521176524867807715"),
            &eps,
        );
    }

    #[test]
    fn sin_cos_of_large_multiples() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_close(
            &ctx.sin(&decimal("1e20")),
            &decimal("-0.6452512852657808442058117113125230"),
            &eps,
        );
        assert_close(
            &ctx.cos(&decimal("1e20")),
            &decimal("0.7639704044417283004001468027378811"),
            &eps,
        );
        assert_close(
            &ctx.sin(&decimal("1e40")),
            &decimal("-0.5696334009536363273080341815735687"),
            &eps,
        );
        assert_close(
            &ctx.sin(&decimal("-1e20")),
            &decimal("0.6452512852657808442058117113125230"),
            &eps,
        );
    }

    #[test]
    fn tan_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_close(
            &ctx.tan(&BigDecimal::one()).unwrap(),
            &decimal("1.55740772465490223050697480745836"),
            &eps,
        );
        let quarter_pi = ctx.pi() / BigDecimal::from(4);
        assert_close(&ctx.tan(&quarter_pi).unwrap(), &BigDecimal::one(), &eps);
        assert_eq!(ctx.tan(&BigDecimal::zero()).unwrap(), BigDecimal::zero());
    }

    #[test]
    fn atan_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_eq!(ctx.atan(&BigDecimal::zero()), BigDecimal::zero());
        assert_close(
            &ctx.atan(&BigDecimal::one()),
            &decimal("0.7853981633974483096156608458198757"),
            &eps,
        );
        assert_close(
            &ctx.atan(&BigDecimal::from(-3)),
            &decimal("-1.24904577239825442582991707728109"),
            &eps,
        );
        assert_close(
            &ctx.atan(&decimal("0.1")),
            &decimal("0.09966865249116202737844611987802059"),
            &eps,
        );
    }

    #[test]
    fn atan2_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        let one = BigDecimal::one();
        let minus_one = BigDecimal::from(-1);
        let zero = BigDecimal::zero();
        assert_eq!(ctx.atan2(&zero, &zero), zero);
        assert_close(
            &ctx.atan2(&one, &minus_one),
            &decimal("2.356194490192344928846982537459627"),
            &eps,
        );
        assert_close(
            &ctx.atan2(&minus_one, &minus_one),
            &decimal("-2.356194490192344928846982537459627"),
            &eps,
        );
        assert_close(
            &ctx.atan2(&BigDecimal::from(-2), &BigDecimal::from(3)),
            &decimal("-0.5880026035475675512456110806250854"),
            &eps,
        );
        assert_close(&ctx.atan2(&zero, &minus_one), &ctx.pi(), &eps);
        assert_close(
            &ctx.atan2(&minus_one, &zero),
            &(-ctx.pi() / BigDecimal::from(2)),
            &eps,
        );
    }

    #[test]
    fn asin_acos_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_close(
            &ctx.asin(&decimal("0.5")).unwrap(),
            &decimal("0.5235987755982988730771072305465838"),
            &eps,
        );
        assert_close(
            &ctx.asin(&decimal("-0.9")).unwrap(),
            &decimal("-1.1197695149986341866866770558454"),
            &eps,
        );
        assert_close(
            &ctx.acos(&decimal("0.3")).unwrap(),
            &decimal("1.266103672779499111259318730412222"),
            &eps,
        );
        assert_close(&ctx.acos(&BigDecimal::from(-1)).unwrap(), &ctx.pi(), &eps);
        assert_eq!(
            ctx.asin(&BigDecimal::from(2)),
            Err(MathError::OutOfDomain {
                operation: "asin",
                value: BigDecimal::from(2)
            })
        );
        assert!(matches!(
            ctx.acos(&decimal("-1.5")),
            Err(MathError::OutOfDomain {
                operation: "acos",
                ..
            })
        ));
    }
}
