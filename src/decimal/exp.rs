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
use crate::decimal::DecimalContext;
use crate::err::{MathError, Result};
use bigdecimal::BigDecimal;
use num_traits::{One, ToPrimitive, Zero};

impl DecimalContext {
    /// e^x at the working precision.
    pub(super) fn exp_working(&self, x: &BigDecimal) -> Result<BigDecimal> {
        // x = n + f with f in [0, 1)
        let n = DecimalContext::floor(x);
        let f = self.round(x - &n);

        let Some(n) = n.to_i64() else {
            let error = MathError::OutOfDomain {
                operation: "exp",
                value: x.clone(),
            };
            tracing::debug!(%error, "decimal exp rejected");
            return Err(error);
        };
        DecimalContext::check_power_size("exp", x, std::f64::consts::LOG10_E, n.unsigned_abs())?;

        let integral = if n >= 0 {
            self.pow_u64(&self.e, n as u64)
        } else {
            // e^n is never zero
            self.round(BigDecimal::one() / self.pow_u64(&self.e, n.unsigned_abs()))
        };

        let fractional = self.converge("exp", BigDecimal::one(), |term, k| {
            term * &f / BigDecimal::from(k)
        });

        Ok(self.round(integral * fractional))
    }

    /// Computes exponent
    pub fn exp(&self, x: &BigDecimal) -> Result<BigDecimal> {
        Ok(self.finish(self.exp_working(x)?))
    }

    fn log_working(&self, x: &BigDecimal) -> Result<BigDecimal> {
        if *x <= BigDecimal::zero() {
            let error = MathError::NonPositiveLogarithm(x.clone());
            tracing::debug!(%error, "decimal log rejected");
            return Err(error);
        }

        // bring the argument into (1/e, 1], counting steps
        let one = BigDecimal::one();
        let inverse_e = self.round(BigDecimal::one() / &self.e);
        let mut y = x.clone();
        let mut steps = 0i64;
        while y > one {
            y = self.round(y / &self.e);
            steps += 1;
        }
        while y <= inverse_e {
            y = self.round(y * &self.e);
            steps -= 1;
        }

        // ln(1 + u) = u - u^2/2 + u^3/3 - ...
        let u = self.round(y - &one);
        let mut power = u.clone();
        let series = self.converge("log", u.clone(), |_, k| {
            power = self.round(-(&power * &u));
            &power / BigDecimal::from(k + 1)
        });

        Ok(self.round(series + BigDecimal::from(steps)))
    }

    /// Computes natural logarithm, failing for non-positive arguments
    pub fn log(&self, x: &BigDecimal) -> Result<BigDecimal> {
        Ok(self.finish(self.log_working(x)?))
    }

    /// Computes x^y
    ///
    /// Integral exponents that fit into `i64` use repeated squaring, the rest go
    /// through `exp(y * log|x|)`.
    pub fn pow(&self, x: &BigDecimal, y: &BigDecimal) -> Result<BigDecimal> {
        let zero = BigDecimal::zero();
        if y.is_zero() {
            return Ok(BigDecimal::one());
        }

        if x.is_zero() {
            if *y > zero {
                return Ok(zero);
            }
            // 1 / 0^|y|
            return Err(MathError::zero_denominator("pow", 1));
        }

        let integral = DecimalContext::is_integral(y);
        if integral {
            if let Some(e) = y.to_i64() {
                let log10_x = DecimalContext::log10_magnitude(x);
                DecimalContext::check_power_size("pow", y, log10_x, e.unsigned_abs())?;
                let magnitude = self.pow_u64(x, e.unsigned_abs());
                return Ok(if e >= 0 {
                    self.finish(magnitude)
                } else {
                    // x is non-zero, so is any of its powers
                    self.finish(BigDecimal::one() / magnitude)
                });
            }
        }

        if *x < zero && !integral {
            let error = MathError::NegativeBaseFractionalExponent {
                base: x.clone(),
                exponent: y.clone(),
            };
            tracing::debug!(%error, "decimal pow rejected");
            return Err(error);
        }

        let log = self.log_working(&x.abs())?;
        let magnitude = self.exp_working(&self.round(y * log))?;
        let odd = !(y % BigDecimal::from(2)).is_zero();
        if *x < zero && odd {
            Ok(self.finish(-magnitude))
        } else {
            Ok(self.finish(magnitude))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::tests::{assert_close, decimal};

    #[test]
    fn exp_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_eq!(ctx.exp(&BigDecimal::zero()).unwrap(), BigDecimal::one());
        assert_close(&ctx.exp(&BigDecimal::one()).unwrap(), &ctx.e(), &eps);
        assert_close(
            &ctx.exp(&decimal("-2.5")).unwrap(),
            &decimal("0.08208499862389879516952867446715981"),
            &eps,
        );
        assert_close(
            &ctx.exp(&decimal("10.3")).unwrap(),
            &decimal("29732.618852891413820768427501632"),
            &decimal("1e-26"),
        );
        assert!(matches!(
            ctx.exp(&decimal("1e30")),
            Err(MathError::OutOfDomain {
                operation: "exp",
                ..
            })
        ));
    }

    #[test]
    fn log_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_eq!(ctx.log(&BigDecimal::one()).unwrap(), BigDecimal::zero());
        assert_close(&ctx.log(&ctx.e()).unwrap(), &BigDecimal::one(), &eps);
        assert_close(
            &ctx.log(&BigDecimal::from(10)).unwrap(),
            &decimal("2.302585092994045684017991454684364"),
            &eps,
        );
        assert_close(
            &ctx.log(&decimal("0.001")).unwrap(),
            &decimal("-6.907755278982137052053974364053093"),
            &eps,
        );
        assert_eq!(
            ctx.log(&BigDecimal::zero()),
            Err(MathError::NonPositiveLogarithm(BigDecimal::zero()))
        );
        assert!(ctx.log(&BigDecimal::from(-3)).is_err());
    }

    #[test]
    fn pow_test() {
        let ctx = DecimalContext::default();
        let eps = ctx.epsilon().clone();
        assert_eq!(
            ctx.pow(&BigDecimal::from(-2), &BigDecimal::from(3)).unwrap(),
            BigDecimal::from(-8)
        );
        assert_eq!(
            ctx.pow(&BigDecimal::from(5), &BigDecimal::zero()).unwrap(),
            BigDecimal::one()
        );
        assert_eq!(
            ctx.pow(&BigDecimal::zero(), &decimal("2.5")).unwrap(),
            BigDecimal::zero()
        );
        assert_close(
            &ctx.pow(&decimal("1.5"), &BigDecimal::from(-3)).unwrap(),
            &decimal("0.2962962962962962962962962962962963"),
            &eps,
        );
        assert_close(
            &ctx.pow(&BigDecimal::from(2), &decimal("0.5")).unwrap(),
            &decimal("1.414213562373095048801688724209698"),
            &eps,
        );
        assert_close(
            &ctx.pow(&BigDecimal::from(7), &decimal("0.25")).unwrap(),
            &decimal("1.62657656169778574321123234549376"),
            &eps,
        );
        assert!(matches!(
            ctx.pow(&BigDecimal::zero(), &BigDecimal::from(-2)),
            Err(MathError::ZeroDenominator {
                operation: "pow",
                ..
            })
        ));
        assert_eq!(
            ctx.pow(&BigDecimal::from(-2), &decimal("0.5")),
            Err(MathError::NegativeBaseFractionalExponent {
                base: BigDecimal::from(-2),
                exponent: decimal("0.5"),
            })
        );
    }

    #[test]
    fn pow_huge_integral_exponent() {
        let ctx = DecimalContext::default();
        let y = decimal("1e20");
        let odd = decimal("100000000000000000001");
        let one = BigDecimal::one();
        assert_eq!(ctx.pow(&one, &y).unwrap(), one);
        assert_eq!(ctx.pow(&-one.clone(), &y).unwrap(), one);
        assert_eq!(ctx.pow(&-one.clone(), &odd).unwrap(), -one);
    }

    #[test]
    fn pow_result_exponent_bounded() {
        let ctx = DecimalContext::default();
        let hundred = BigDecimal::from(100);
        for y in ["4700000000000000000", "-4700000000000000000"] {
            assert!(
                matches!(
                    ctx.pow(&hundred, &decimal(y)),
                    Err(MathError::OutOfDomain {
                        operation: "pow",
                        ..
                    })
                ),
                "Invalid result for 100^{}",
                y
            );
        }
        assert!(matches!(
            ctx.pow(&decimal("0.001"), &decimal("400000000000000000")),
            Err(MathError::OutOfDomain {
                operation: "pow",
                ..
            })
        ));
        assert!(matches!(
            ctx.exp(&decimal("4000000000000000000")),
            Err(MathError::OutOfDomain {
                operation: "exp",
                ..
            })
        ));
        assert_eq!(
            ctx.pow(&BigDecimal::from(10), &BigDecimal::from(1000)).unwrap(),
            decimal("1e1000")
        );
        assert_close(
            &ctx.pow(&decimal("1e-300"), &BigDecimal::from(-70)).unwrap(),
            &decimal("1e21000"),
            &decimal("1e20970"),
        );
    }
}
