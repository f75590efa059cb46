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
use crate::math::common::{PI_2_B, SPLIT_SCALE, double_high_part};
use crate::math::tables::trig_tables;
use std::f64::consts::PI;

/// Above this `atan` is π/2 to double precision.
const ATAN_SATURATION: f64 = 1.633123935319537E16;

/// atan(xa + xb), or `π - atan` when `left_plane` is set.
pub(crate) fn atan_core(xa: f64, xb: f64, left_plane: bool) -> f64 {
    if xa == 0.0 {
        return if left_plane { PI.copysign(xa) } else { xa };
    }

    let (mut xa, mut xb, negative) = if xa < 0.0 {
        (-xa, -xb, true)
    } else {
        (xa, xb, false)
    };

    if xa > ATAN_SATURATION {
        return if negative ^ left_plane {
            -PI * 0.5
        } else {
            PI * 0.5
        };
    }

    // nearest tangent sample, the abscissas of tan(i / 8) are not uniform
    let idx = if xa < 1.0 {
        (((-1.7168146928204136 * xa * xa + 8.0) * xa) + 0.5) as usize
    } else {
        let one_over_xa = 1.0 / xa;
        (-((-1.7168146928204136 * one_over_xa * one_over_xa + 8.0) * one_over_xa) + 13.07)
            as usize
    };

    let tt = trig_tables().tan[idx];
    let mut eps_a = xa - tt.hi;
    let mut eps_b = -(eps_a - xa + tt.hi);
    eps_b += xb - tt.lo;

    let temp = eps_a + eps_b;
    eps_b = -(temp - eps_a - eps_b);
    eps_a = temp;

    let temp = xa * SPLIT_SCALE;
    let ya = xa + temp - temp;
    let yb = xb + xa - ya;
    xa = ya;
    xb += yb;

    // eps = (x - t) / (1 + x * t)
    let (ya, yb) = if idx == 0 {
        let denom = 1.0 / (1.0 + (xa + xb) * (tt.hi + tt.lo));
        (eps_a * denom, eps_b * denom)
    } else {
        let mut temp2 = xa * tt.hi;
        let mut za = 1.0 + temp2;
        let mut zb = -(za - 1.0 - temp2);
        temp2 = xb * tt.hi + xa * tt.lo;
        let temp = za + temp2;
        zb += -(temp - za - temp2);
        za = temp;
        zb += xb * tt.lo;

        let ya = eps_a / za;

        let temp = ya * SPLIT_SCALE;
        let yaa = (ya + temp) - temp;
        let yab = ya - yaa;

        let temp = za * SPLIT_SCALE;
        let zaa = (za + temp) - temp;
        let zab = za - zaa;

        let mut yb = (eps_a - yaa * zaa - yaa * zab - yab * zaa - yab * zab) / za;
        yb += -eps_a * zb / za / za;
        yb += eps_b / za;
        (ya, yb)
    };

    let eps_a = ya;
    let eps_b = yb;

    let eps_a2 = eps_a * eps_a;
    let mut yb = 0.07490822288864472;
    yb = yb * eps_a2 - 0.09088450866185192;
    yb = yb * eps_a2 + 0.11111095942313305;
    yb = yb * eps_a2 - 0.1428571423679182;
    yb = yb * eps_a2 + 0.19999999999923582;
    yb = yb * eps_a2 - 0.33333333333333287;
    yb = yb * eps_a2 * eps_a;

    let mut ya = eps_a;
    let temp = ya + yb;
    yb = -(temp - ya - yb);
    ya = temp;

    // derivative of atan applied to the low part
    yb += eps_b / (1.0 + eps_a * eps_a);

    let eighths = idx as f64 * 0.125;
    let mut za = eighths + ya;
    let mut zb = -(za - eighths - ya);
    let temp = za + yb;
    zb += -(temp - za - yb);
    za = temp;

    let mut result = za + zb;

    if left_plane {
        let result_b = -(result - za - zb);
        let pia = PI;
        let pib = PI_2_B * 2.0;

        let za = pia - result;
        let mut zb = -(za - pia + result);
        zb += pib - result_b;

        result = za + zb;
    }

    if negative ^ left_plane {
        result = -result;
    }

    result
}

/// Computes arctangent
///
/// Max found ULP 0.5
pub fn atan(x: f64) -> f64 {
    atan_core(x, 0.0, false)
}

/// Computes atan(y / x) in the quadrant of the point `(x, y)`
///
/// Max found ULP 0.5
pub fn atan2(y: f64, x: f64) -> f64 {
    if x.is_nan() || y.is_nan() {
        return f64::NAN;
    }

    if y == 0.0 {
        let result = x * y;
        let inv_x = 1.0 / x;

        if inv_x == 0.0 {
            // x is infinite
            return if x > 0.0 { y } else { PI.copysign(y) };
        }

        if x < 0.0 || inv_x < 0.0 {
            let inv_y = 1.0 / y;
            return if inv_y < 0.0 { -PI } else { PI };
        }
        return result;
    }

    if y == f64::INFINITY {
        return if x == f64::INFINITY {
            PI * 0.25
        } else if x == f64::NEG_INFINITY {
            PI * 0.75
        } else {
            PI * 0.5
        };
    }

    if y == f64::NEG_INFINITY {
        return if x == f64::INFINITY {
            -PI * 0.25
        } else if x == f64::NEG_INFINITY {
            -PI * 0.75
        } else {
            -PI * 0.5
        };
    }

    if x == f64::INFINITY {
        return if y > 0.0 { 0.0 } else { -0.0 };
    }

    if x == f64::NEG_INFINITY {
        return if y > 0.0 { PI } else { -PI };
    }

    if x == 0.0 {
        return if y > 0.0 { PI * 0.5 } else { -PI * 0.5 };
    }

    let r = y / x;
    if r.is_infinite() {
        return atan_core(r, 0.0, x < 0.0);
    }

    let mut ra = double_high_part(r);
    let mut rb = r - ra;

    // split x
    let xa = double_high_part(x);
    let xb = x - xa;

    rb += (y - ra * xa - ra * xb - rb * xa - rb * xb) / x;

    let temp = ra + rb;
    rb = -(temp - ra - rb);
    ra = temp;

    if ra == 0.0 {
        ra = 0f64.copysign(y);
    }

    atan_core(ra, rb, x < 0.0)
}

/// sqrt(1 - x^2) for `|x| < 1`.
///
/// Returns the rounded root, the root as a double-double and the low part of `1 - x^2`.
#[inline]
fn one_minus_square_root(x: f64) -> (f64, f64, f64, f64) {
    let temp = x * SPLIT_SCALE;
    let xa = x + temp - temp;
    let xb = x - xa;

    let ya = -(xa * xa);
    let yb = -(xa * xb * 2.0 + xb * xb);

    let mut za = 1.0 + ya;
    let mut zb = -(za - 1.0 - ya);
    let temp = za + yb;
    zb += -(temp - za - yb);
    za = temp;

    let y = za.sqrt();
    let temp = y * SPLIT_SCALE;
    let ya = y + temp - temp;
    let mut yb = y - ya;

    // one Newton step on the low part
    yb += (za - ya * ya - 2.0 * ya * yb - yb * yb) / (2.0 * y);

    (y, ya, yb, zb)
}

/// Computes arcsine, NaN outside of [-1, 1]
///
/// Max found ULP 0.5
pub fn asin(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == 1.0 {
        return PI / 2.0;
    }
    if x == -1.0 {
        return -PI / 2.0;
    }
    if x == 0.0 {
        return x;
    }

    let (y, ya, yb, zb) = one_minus_square_root(x);
    let dx = zb / (2.0 * y);

    // ratio x / sqrt(1 - x^2)
    let r = x / y;
    let temp = r * SPLIT_SCALE;
    let mut ra = r + temp - temp;
    let mut rb = r - ra;

    rb += (x - ra * ya - ra * yb - rb * ya - rb * yb) / y;
    rb += -x * dx / y / y;

    let temp = ra + rb;
    rb = -(temp - ra - rb);
    ra = temp;

    atan_core(ra, rb, false)
}

/// Computes arccosine, NaN outside of [-1, 1]
///
/// Max found ULP 0.5
pub fn acos(x: f64) -> f64 {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return f64::NAN;
    }
    if x == -1.0 {
        return PI;
    }
    if x == 1.0 {
        return 0.0;
    }
    if x == 0.0 {
        return PI / 2.0;
    }

    let temp = x * SPLIT_SCALE;
    let xa = x + temp - temp;
    let xb = x - xa;

    let (y, ya, mut yb, zb) = one_minus_square_root(x);
    yb += zb / (2.0 * y);
    let y = ya + yb;
    let yb = -(y - ya - yb);

    // ratio sqrt(1 - x^2) / x
    let r = y / x;
    if r.is_infinite() {
        // x is tiny
        return PI / 2.0;
    }

    let mut ra = double_high_part(r);
    let mut rb = r - ra;

    rb += (y - ra * xa - ra * xb - rb * xa - rb * xb) / x;
    rb += yb / x;

    let temp = ra + rb;
    rb = -(temp - ra - rb);
    ra = temp;

    atan_core(ra, rb, x < 0.0)
}
