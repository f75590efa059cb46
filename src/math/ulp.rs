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
/// Multiplies `d` by 2^n, rounding half up when the result is subnormal
pub const fn scalb(d: f64, n: i32) -> f64 {
    // 2^n is a normal number
    if n > -1023 && n < 1024 {
        return d * f64::from_bits(((n + 1023) as u64) << 52);
    }

    if d.is_nan() || d.is_infinite() || d == 0.0 {
        return d;
    }
    if n < -2098 {
        return if d > 0.0 { 0.0 } else { -0.0 };
    }
    if n > 2097 {
        return if d > 0.0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        };
    }

    let bits = d.to_bits();
    let sign = bits & 0x8000_0000_0000_0000;
    let exponent = ((bits >> 52) & 0x7ff) as i32;
    let mut mantissa = bits & 0x000f_ffff_ffff_ffff;

    let mut scaled_exponent = exponent + n;

    if n < 0 {
        if scaled_exponent > 0 {
            f64::from_bits(sign | ((scaled_exponent as u64) << 52) | mantissa)
        } else if scaled_exponent > -53 {
            // subnormal result, restore the implicit bit and shift it in
            mantissa |= 1 << 52;

            let most_significant_lost_bit = mantissa & (1 << (-scaled_exponent));
            mantissa >>= 1 - scaled_exponent;
            if most_significant_lost_bit != 0 {
                mantissa += 1;
            }
            f64::from_bits(sign | mantissa)
        } else if sign == 0 {
            0.0
        } else {
            -0.0
        }
    } else {
        if exponent == 0 {
            // normalize the subnormal input
            while (mantissa >> 52) != 1 {
                mantissa <<= 1;
                scaled_exponent -= 1;
            }
            scaled_exponent += 1;
            mantissa &= 0x000f_ffff_ffff_ffff;
        }

        if scaled_exponent < 2047 {
            f64::from_bits(sign | ((scaled_exponent as u64) << 52) | mantissa)
        } else if sign == 0 {
            f64::INFINITY
        } else {
            f64::NEG_INFINITY
        }
    }
}

/// Multiplies `f` by 2^n, rounding half up when the result is subnormal
pub const fn scalbf(f: f32, n: i32) -> f32 {
    if n > -127 && n < 128 {
        return f * f32::from_bits(((n + 127) as u32) << 23);
    }

    if f.is_nan() || f.is_infinite() || f == 0.0 {
        return f;
    }
    if n < -277 {
        return if f > 0.0 { 0.0 } else { -0.0 };
    }
    if n > 276 {
        return if f > 0.0 {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        };
    }

    let bits = f.to_bits();
    let sign = bits & 0x8000_0000;
    let exponent = ((bits >> 23) & 0xff) as i32;
    let mut mantissa = bits & 0x007f_ffff;

    let mut scaled_exponent = exponent + n;

    if n < 0 {
        if scaled_exponent > 0 {
            f32::from_bits(sign | ((scaled_exponent as u32) << 23) | mantissa)
        } else if scaled_exponent > -24 {
            mantissa |= 1 << 23;

            let most_significant_lost_bit = mantissa & (1 << (-scaled_exponent));
            mantissa >>= 1 - scaled_exponent;
            if most_significant_lost_bit != 0 {
                mantissa += 1;
            }
            f32::from_bits(sign | mantissa)
        } else if sign == 0 {
            0.0
        } else {
            -0.0
        }
    } else {
        if exponent == 0 {
            while (mantissa >> 23) != 1 {
                mantissa <<= 1;
                scaled_exponent -= 1;
            }
            scaled_exponent += 1;
            mantissa &= 0x007f_ffff;
        }

        if scaled_exponent < 255 {
            f32::from_bits(sign | ((scaled_exponent as u32) << 23) | mantissa)
        } else if sign == 0 {
            f32::INFINITY
        } else {
            f32::NEG_INFINITY
        }
    }
}

/// Distance from `x` to the adjacent double of the same exponent
#[inline]
pub const fn ulp(x: f64) -> f64 {
    if x.is_infinite() {
        return f64::INFINITY;
    }
    (x - f64::from_bits(x.to_bits() ^ 1)).abs()
}

/// Distance from `x` to the adjacent float of the same exponent
#[inline]
pub const fn ulpf(x: f32) -> f32 {
    if x.is_infinite() {
        return f32::INFINITY;
    }
    (x - f32::from_bits(x.to_bits() ^ 1)).abs()
}

/// Next double after `d` in the direction of `direction`
pub const fn next_after(d: f64, direction: f64) -> f64 {
    if d.is_nan() || direction.is_nan() {
        return f64::NAN;
    }
    if d == direction {
        return direction;
    }
    if d.is_infinite() {
        return if d < 0.0 { -f64::MAX } else { f64::MAX };
    }
    if d == 0.0 {
        // smallest subnormal
        return if direction < 0.0 { -5e-324 } else { 5e-324 };
    }

    let bits = d.to_bits();
    let sign = bits & 0x8000_0000_0000_0000;
    let magnitude = bits & 0x7fff_ffff_ffff_ffff;
    if (direction < d) ^ (sign == 0) {
        f64::from_bits(sign | (magnitude + 1))
    } else {
        f64::from_bits(sign | (magnitude - 1))
    }
}

/// Next float after `f` in the direction of `direction`
pub const fn next_afterf(f: f32, direction: f32) -> f32 {
    if f.is_nan() || direction.is_nan() {
        return f32::NAN;
    }
    if f == direction {
        return direction;
    }
    if f.is_infinite() {
        return if f < 0.0 { -f32::MAX } else { f32::MAX };
    }
    if f == 0.0 {
        return if direction < 0.0 {
            -f32::from_bits(1)
        } else {
            f32::from_bits(1)
        };
    }

    let bits = f.to_bits();
    let sign = bits & 0x8000_0000;
    let magnitude = bits & 0x7fff_ffff;
    if (direction < f) ^ (sign == 0) {
        f32::from_bits(sign | (magnitude + 1))
    } else {
        f32::from_bits(sign | (magnitude - 1))
    }
}

#[inline]
pub const fn next_up(d: f64) -> f64 {
    next_after(d, f64::INFINITY)
}

#[inline]
pub const fn next_down(d: f64) -> f64 {
    next_after(d, f64::NEG_INFINITY)
}

#[inline]
pub const fn next_upf(f: f32) -> f32 {
    next_afterf(f, f32::INFINITY)
}

#[inline]
pub const fn next_downf(f: f32) -> f32 {
    next_afterf(f, f32::NEG_INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalb_test() {
        assert_eq!(scalb(1.5, 3), 12.0);
        assert_eq!(scalb(1.0, -1074), 5e-324);
        assert_eq!(scalb(1.0, -1075), 5e-324);
        assert_eq!(scalb(1.0, -1076), 0.0);
        assert_eq!(scalb(f64::MAX, -2046), f64::MIN_POSITIVE);
        assert_eq!(scalb(5e-324, 1074), 1.0);
        assert_eq!(scalb(5e-324, 2098), f64::INFINITY);
        assert_eq!(scalb(-3.0, 5000), f64::NEG_INFINITY);
        assert!(scalb(-3.0, -5000).is_sign_negative());
        assert!(scalb(f64::NAN, 2000).is_nan());
    }

    #[test]
    fn scalbf_test() {
        assert_eq!(scalbf(1.5, 3), 12.0);
        assert_eq!(scalbf(1.0, -149), f32::from_bits(1));
        assert_eq!(scalbf(f32::from_bits(1), 149), 1.0);
        assert_eq!(scalbf(1.0, 300), f32::INFINITY);
        assert_eq!(scalbf(1.0, -300), 0.0);
    }

    #[test]
    fn ulp_test() {
        assert_eq!(ulp(1.0), f64::EPSILON);
        assert_eq!(ulp(-1.0), f64::EPSILON);
        assert_eq!(ulp(0.0), 5e-324);
        assert_eq!(ulp(f64::NEG_INFINITY), f64::INFINITY);
        assert!(ulp(f64::NAN).is_nan());
        assert_eq!(ulpf(1.0), f32::EPSILON);
    }

    #[test]
    fn next_after_test() {
        assert_eq!(next_after(1.0, 2.0), 1.0000000000000002);
        assert_eq!(next_after(1.0, 0.0), 0.9999999999999999);
        assert_eq!(next_after(-1.0, 0.0), -0.9999999999999999);
        assert_eq!(next_after(0.0, -1.0), -5e-324);
        assert_eq!(next_after(f64::INFINITY, 0.0), f64::MAX);
        assert_eq!(next_after(3.0, 3.0), 3.0);
        assert!(next_after(f64::NAN, 3.0).is_nan());
        assert_eq!(next_up(f64::MAX), f64::INFINITY);
        assert_eq!(next_down(5e-324), 0.0);
        assert_eq!(next_upf(1.0), 1.0000001);
        assert_eq!(next_downf(-f32::MAX), f32::NEG_INFINITY);
    }
}
