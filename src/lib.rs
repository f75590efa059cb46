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
//! Portable elementary functions with results that do not depend on the platform libm.
//!
//! Every `f64` function is built from plain IEEE-754 double arithmetic without fused
//! multiply-add: split (double-double) kernels, lazily bootstrapped constant tables,
//! Cody-Waite and Payne-Hanek argument reduction. Results are within ~1 ULP and
//! bit-identical on every target.
//!
//! Checked integer helpers live in [`ExactInteger`], and with the `decimal` feature
//! [`DecimalContext`] evaluates the same function family over `BigDecimal`.
#![allow(clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#[cfg(feature = "decimal")]
mod decimal;
mod err;
mod exact;
mod finite;
mod math;

#[cfg(feature = "decimal")]
pub use decimal::{DEFAULT_PRECISION, DecimalContext};
pub use err::{MathError, Result};
pub use exact::{ExactInteger, to_int_exact};
pub use finite::{check_finite, check_finite_slice};
pub use math::{
    Split, acos, acosh, asin, asinh, atan, atan2, atanh, cbrt, ceil, copysign, copysignf, cos,
    cosh, exp, expm1, floor, get_exponent, get_exponentf, hypot, log, log_base, log1p, log10,
    next_after, next_afterf, next_down, next_downf, next_up, next_upf, pow, pow_i32, pow_i64,
    random, rint, round, roundf, scalb, scalbf, sin, sin_cos, sinh, sqrt, tan, tanh, to_degrees,
    to_radians, ulp, ulpf,
};
