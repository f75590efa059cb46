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
mod angle;
mod atan;
mod bootstrap;
mod cbrt;
mod common;
mod dekker;
mod exp;
mod floor;
mod hyperbolic;
mod hypot;
mod log;
mod pow;
mod random;
mod reduce;
mod split;
mod tables;
mod trigo;
mod ulp;

pub use angle::{to_degrees, to_radians};
pub use atan::{acos, asin, atan, atan2};
pub use cbrt::cbrt;
pub use common::{copysign, copysignf, get_exponent, get_exponentf};
pub use exp::{exp, expm1};
pub use floor::{ceil, floor, rint, round, roundf};
pub use hyperbolic::{acosh, asinh, atanh, cosh, sinh, tanh};
pub use hypot::{hypot, sqrt};
pub use log::{log, log_base, log10, log1p};
pub use pow::{pow, pow_i32, pow_i64};
pub use random::random;
pub use split::Split;
pub use trigo::{cos, sin, sin_cos, tan};
pub use ulp::{
    next_after, next_afterf, next_down, next_downf, next_up, next_upf, scalb, scalbf, ulp, ulpf,
};
