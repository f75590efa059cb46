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
use crate::math::common::TWO_POWER_52;

/// Round to integer towards minus infinity
#[inline]
pub const fn floor(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }
    if x >= TWO_POWER_52 || x <= -TWO_POWER_52 {
        // already integral, infinities included
        return x;
    }

    let mut y = x as i64;
    if x < 0.0 && y as f64 != x {
        y -= 1;
    }

    if y == 0 {
        // keeps the sign of zero
        return x * y as f64;
    }
    y as f64
}

/// Round to integer towards plus infinity
#[inline]
pub const fn ceil(x: f64) -> f64 {
    if x.is_nan() {
        return x;
    }

    let y = floor(x);
    if y == x {
        return y;
    }

    let y = y + 1.0;
    if y == 0.0 {
        return x * y;
    }
    y
}

/// Round to the nearest integer, ties to even
#[inline]
pub const fn rint(x: f64) -> f64 {
    let y = floor(x);
    let d = x - y;

    if d > 0.5 {
        if y == -1.0 {
            return -0.0;
        }
        return y + 1.0;
    }
    if d < 0.5 {
        return y;
    }

    // half way
    if (y as i64 & 1) == 0 {
        y
    } else if y == -1.0 {
        -0.0
    } else {
        y + 1.0
    }
}

/// Round to the nearest integer, ties towards plus infinity
///
/// NaN maps to 0, out of range values saturate.
#[inline]
pub const fn round(x: f64) -> i64 {
    let y = floor(x);
    if x - y >= 0.5 {
        (y + 1.0) as i64
    } else {
        y as i64
    }
}

/// Round to the nearest integer, ties towards plus infinity
///
/// NaN maps to 0, out of range values saturate.
#[inline]
pub const fn roundf(x: f32) -> i32 {
    let x = x as f64;
    let y = floor(x);
    if x - y >= 0.5 {
        (y + 1.0) as i32
    } else {
        y as i32
    }
}
