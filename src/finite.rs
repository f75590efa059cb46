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

/// Fails with [`MathError::NotFinite`] when `x` is NaN or infinite.
#[inline]
pub fn check_finite(x: f64) -> Result<()> {
    if x.is_finite() {
        Ok(())
    } else {
        Err(MathError::NotFinite { value: x })
    }
}

/// Fails on the first element that is NaN or infinite, reporting its index.
pub fn check_finite_slice(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(index) => Err(MathError::NotFiniteElement {
            index,
            value: values[index],
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finite_values_pass() {
        assert_eq!(check_finite(1.0), Ok(()));
        assert_eq!(check_finite(-f64::MAX), Ok(()));
        assert_eq!(check_finite_slice(&[]), Ok(()));
        assert_eq!(check_finite_slice(&[0.0, 5e-324, -3.0]), Ok(()));
    }

    #[test]
    fn non_finite_values_fail() {
        assert_eq!(
            check_finite(f64::INFINITY),
            Err(MathError::NotFinite {
                value: f64::INFINITY
            })
        );
        assert!(matches!(
            check_finite(f64::NAN),
            Err(MathError::NotFinite { value }) if value.is_nan()
        ));
        assert_eq!(
            check_finite_slice(&[1.0, 2.0, f64::NEG_INFINITY, f64::NAN]),
            Err(MathError::NotFiniteElement {
                index: 2,
                value: f64::NEG_INFINITY
            })
        );
    }
}
