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
use crate::math::common::{PI_2_A, PI_2_B, SPLIT_SCALE};
use crate::math::dekker::Dekker;
use crate::math::reduce::reduce;
use crate::math::tables::trig_tables;

/// sin(x) - x on [-1/16, 1/16]
#[inline]
pub(crate) fn poly_sine(x: f64) -> f64 {
    let x2 = x * x;
    let mut p = 2.7553817452272217E-6;
    p = p * x2 + -1.9841269659586505E-4;
    p = p * x2 + 0.008333333333329196;
    p = p * x2 + -0.16666666666666666;
    p * x2 * x
}

/// cos(x) - 1 on [-1/16, 1/16]
#[inline]
pub(crate) fn poly_cosine(x: f64) -> f64 {
    let x2 = x * x;
    let mut p = 2.479773539153719E-5;
    p = p * x2 + -0.0013888888689039883;
    p = p * x2 + 0.041666666666621166;
    p = p * x2 + -0.49999999999999994;
    p * x2
}

/// Table sample nearest to `xa` and the polynomial terms of the offset.
struct Expansion {
    sin_t: Dekker,
    cos_t: Dekker,
    sin_eps: Dekker,
    cos_eps: Dekker,
}

#[inline]
fn expand(xa: f64) -> Expansion {
    let tables = trig_tables();
    let idx = (xa * 8.0 + 0.5) as usize;
    let eps = xa - idx as f64 * 0.125;

    let mut sin_eps_a = eps;
    let mut sin_eps_b = poly_sine(eps);
    let cos_eps_a = 1.0;
    let cos_eps_b = poly_cosine(eps);

    // keep the products with the table values exact
    let temp = sin_eps_a * SPLIT_SCALE;
    let temp2 = (sin_eps_a + temp) - temp;
    sin_eps_b += sin_eps_a - temp2;
    sin_eps_a = temp2;

    Expansion {
        sin_t: tables.sin[idx],
        cos_t: tables.cos[idx],
        sin_eps: Dekker::new(sin_eps_b, sin_eps_a),
        cos_eps: Dekker::new(cos_eps_b, cos_eps_a),
    }
}

/// sin(xa + xb) for `0 <= xa < π/2`.
pub(crate) fn sin_q(xa: f64, xb: f64) -> f64 {
    let Expansion {
        sin_t,
        cos_t,
        sin_eps,
        cos_eps,
    } = expand(xa);

    // sin(t + eps) = sin(t)cos(eps) + cos(t)sin(eps)
    let mut r = Dekker::default()
        .accumulate(sin_t.hi)
        .accumulate(cos_t.hi * sin_eps.hi);
    r.lo = r.lo + sin_t.hi * cos_eps.lo + cos_t.hi * sin_eps.lo;
    r.lo = r.lo
        + sin_t.lo
        + cos_t.lo * sin_eps.hi
        + sin_t.lo * cos_eps.lo
        + cos_t.lo * sin_eps.lo;

    if xb != 0.0 {
        // first order correction, sin'(x) = cos(x)
        let t = ((cos_t.hi + cos_t.lo) * (cos_eps.hi + cos_eps.lo)
            - (sin_t.hi + sin_t.lo) * (sin_eps.hi + sin_eps.lo))
            * xb;
        r = r.accumulate(t);
    }

    r.hi + r.lo
}

/// cos(xa + xb) for `0 <= xa < π/2`, evaluated as sin(π/2 - x).
pub(crate) fn cos_q(xa: f64, xb: f64) -> f64 {
    let a = PI_2_A - xa;
    let mut b = -(a - PI_2_A + xa);
    b += PI_2_B - xb;
    sin_q(a, b)
}

/// tan(xa + xb), or the cotangent when `cotan` is set, for `0 <= xa < 1.5`.
pub(crate) fn tan_q(xa: f64, xb: f64, cotan: bool) -> f64 {
    let Expansion {
        sin_t,
        cos_t,
        sin_eps,
        cos_eps,
    } = expand(xa);

    let mut r = Dekker::default()
        .accumulate(sin_t.hi)
        .accumulate(cos_t.hi * sin_eps.hi);
    r.lo += sin_t.hi * cos_eps.lo + cos_t.hi * sin_eps.lo;
    r.lo += sin_t.lo + cos_t.lo * sin_eps.hi + sin_t.lo * cos_eps.lo + cos_t.lo * sin_eps.lo;
    let sina = r.hi + r.lo;
    let sinb = -(sina - r.hi - r.lo);

    // cos(t + eps) = cos(t)cos(eps) - sin(t)sin(eps)
    let mut r = Dekker::default()
        .accumulate(cos_t.hi * cos_eps.hi)
        .accumulate(-sin_t.hi * sin_eps.hi);
    r.lo += cos_t.lo * cos_eps.hi + cos_t.hi * cos_eps.lo + cos_t.lo * cos_eps.lo;
    r.lo -= sin_t.lo * sin_eps.hi + sin_t.hi * sin_eps.lo + sin_t.lo * sin_eps.lo;
    let cosa = r.hi + r.lo;
    let cosb = -(cosa - r.hi - r.lo);

    let (sina, sinb, cosa, cosb) = if cotan {
        (cosa, cosb, sina, sinb)
    } else {
        (sina, sinb, cosa, cosb)
    };

    let est = sina / cosa;

    let temp = est * SPLIT_SCALE;
    let esta = (est + temp) - temp;
    let estb = est - esta;

    let temp = cosa * SPLIT_SCALE;
    let cosaa = (cosa + temp) - temp;
    let cosab = cosa - cosaa;

    let mut err = (sina - esta * cosaa - esta * cosab - estb * cosaa - estb * cosab) / cosa;
    err += sinb / cosa;
    err += -sina * cosb / cosa / cosa;

    if xb != 0.0 {
        // tan'(x) = 1 + tan(x)^2
        let mut xbadj = xb + est * est * xb;
        if cotan {
            xbadj = -xbadj;
        }
        err += xbadj;
    }

    est + err
}

/// Computes sine
///
/// Max found ULP 0.5 over the whole double range.
pub fn sin(x: f64) -> f64 {
    let negative = x < 0.0;
    let xa = x.abs();
    if xa == 0.0 {
        // keep the sign of zero
        return x;
    }
    if !xa.is_finite() {
        return f64::NAN;
    }

    let reduced = reduce(xa);
    let mut quadrant = reduced.quadrant;
    if negative {
        quadrant ^= 2;
    }

    match quadrant {
        0 => sin_q(reduced.hi, reduced.lo),
        1 => cos_q(reduced.hi, reduced.lo),
        2 => -sin_q(reduced.hi, reduced.lo),
        _ => -cos_q(reduced.hi, reduced.lo),
    }
}

/// Computes cosine
///
/// Max found ULP 0.51 over the whole double range.
pub fn cos(x: f64) -> f64 {
    let xa = x.abs();
    if !xa.is_finite() {
        return f64::NAN;
    }

    let reduced = reduce(xa);
    match reduced.quadrant {
        0 => cos_q(reduced.hi, reduced.lo),
        1 => -sin_q(reduced.hi, reduced.lo),
        2 => -cos_q(reduced.hi, reduced.lo),
        _ => sin_q(reduced.hi, reduced.lo),
    }
}

/// Computes sine and cosine sharing one argument reduction
pub fn sin_cos(x: f64) -> (f64, f64) {
    let xa = x.abs();
    if !xa.is_finite() {
        return (f64::NAN, f64::NAN);
    }
    if xa == 0.0 {
        return (x, 1.0);
    }

    let reduced = reduce(xa);
    let s = sin_q(reduced.hi, reduced.lo);
    let c = cos_q(reduced.hi, reduced.lo);
    let (sin, cos) = match reduced.quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };
    if x < 0.0 { (-sin, cos) } else { (sin, cos) }
}

/// Computes tangent
///
/// Max found ULP 0.5 over the whole double range.
pub fn tan(x: f64) -> f64 {
    let mut negative = x < 0.0;
    let xa = x.abs();
    if xa == 0.0 {
        return x;
    }
    if !xa.is_finite() {
        return f64::NAN;
    }

    let reduced = reduce(xa);
    let mut quadrant = reduced.quadrant;
    let mut xa = reduced.hi;
    let mut xb = reduced.lo;

    if xa > 1.5 {
        // reflect through π/2, the table only reaches 13/8
        let a = PI_2_A - xa;
        let mut b = -(a - PI_2_A + xa);
        b += PI_2_B - xb;
        xa = a + b;
        xb = -(xa - a - b);
        quadrant ^= 1;
        negative = !negative;
    }

    let result = if (quadrant & 1) == 0 {
        tan_q(xa, xb, false)
    } else {
        -tan_q(xa, xb, true)
    };

    if negative { -result } else { result }
}
