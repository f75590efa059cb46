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
use crate::err::Result;
use bigdecimal::BigDecimal;
use num_traits::One;

impl DecimalContext {
    /// `(e^x, e^-x)` at the working precision.
    fn exp_pair(&self, x: &BigDecimal) -> Result<(BigDecimal, BigDecimal)> {
        let ex = self.exp_working(x)?;
        // e^x is never zero
        let inverse = self.round(BigDecimal::one() / &ex);
        Ok((ex, inverse))
    }

    fn sinh_working(&self, x: &BigDecimal) -> Result<BigDecimal> {
        if x.abs() < BigDecimal::one() {
            // e^x - e^-x cancels near zero, sum the odd series directly
            let x2 = self.round(x * x);
            return Ok(self.converge("sinh", x.clone(), |term, k| {
                term * &x2 / BigDecimal::from((2 * k) * (2 * k + 1))
            }));
        }
        let (ex, inverse) = self.exp_pair(x)?;
        Ok(self.round((ex - inverse) / BigDecimal::from(2)))
    }

    fn cosh_working(&self, x: &BigDecimal) -> Result<BigDecimal> {
        let (ex, inverse) = self.exp_pair(x)?;
        Ok(self.round((ex + inverse) / BigDecimal::from(2)))
    }

    /// Computes hyperbolic sine
    pub fn sinh(&self, x: &BigDecimal) -> Result<BigDecimal> {
        Ok(self.finish(self.sinh_working(x)?))
    }

    /// Computes hyperbolic cosine
    pub fn cosh(&self, x: &BigDecimal) -> Result<BigDecimal> {
        Ok(self.finish(self.cosh_working(x)?))
    }

    /// Computes hyperbolic tangent
    pub fn tanh(&self, x: &BigDecimal) -> Result<BigDecimal> {
        let sinh = self.sinh_working(x)?;
        // cosh >= 1
        let cosh = self.cosh_working(x)?;
        Ok(self.finish(sinh / cosh))
    }
}
