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
#[cfg(feature = "decimal")]
use bigdecimal::BigDecimal;
use thiserror::Error;

/// Failures raised by the checked parts of the crate.
///
/// Floating point functions never return this: arguments outside of a function domain
/// produce NaN the same way IEEE-754 arithmetic does.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Result of an exact integer operation does not fit into its type.
    #[error("overflow in {operation}({lhs}, {rhs})")]
    Overflow {
        operation: &'static str,
        lhs: i64,
        rhs: i64,
    },
    /// Division-like operation with a zero divisor.
    #[error("zero denominator in {operation} of {numerator}")]
    ZeroDenominator {
        operation: &'static str,
        numerator: String,
    },
    /// Value expected to be finite is NaN or infinite.
    #[error("value {value} is not finite")]
    NotFinite { value: f64 },
    /// Slice element expected to be finite is NaN or infinite.
    #[error("element {index} with value {value} is not finite")]
    NotFiniteElement { index: usize, value: f64 },
    #[cfg(feature = "decimal")]
    #[error("square root of negative value {0}")]
    NegativeSquareRoot(BigDecimal),
    #[cfg(feature = "decimal")]
    #[error("logarithm of non-positive value {0}")]
    NonPositiveLogarithm(BigDecimal),
    #[cfg(feature = "decimal")]
    #[error("negative base {base} raised to non-integral exponent {exponent}")]
    NegativeBaseFractionalExponent {
        base: BigDecimal,
        exponent: BigDecimal,
    },
    #[cfg(feature = "decimal")]
    #[error("{operation} argument {value} is outside of its domain")]
    OutOfDomain {
        operation: &'static str,
        value: BigDecimal,
    },
    /// Iteration hit its step limit before settling.
    #[cfg(feature = "decimal")]
    #[error("{operation} of {value} did not converge")]
    NoConvergence {
        operation: &'static str,
        value: BigDecimal,
    },
}

pub type Result<T> = std::result::Result<T, MathError>;

impl MathError {
    #[inline]
    pub(crate) fn overflow(operation: &'static str, lhs: impl Into<i64>, rhs: impl Into<i64>) -> Self {
        let error = MathError::Overflow {
            operation,
            lhs: lhs.into(),
            rhs: rhs.into(),
        };
        tracing::debug!(%error, "exact arithmetic failed");
        error
    }

    #[inline]
    pub(crate) fn zero_denominator(operation: &'static str, numerator: impl ToString) -> Self {
        let error = MathError::ZeroDenominator {
            operation,
            numerator: numerator.to_string(),
        };
        tracing::debug!(%error, "division rejected");
        error
    }
}
