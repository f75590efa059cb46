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
use crate::math::common::double_high_part;

/// Converts degrees to radians using a two part π/180
pub fn to_radians(x: f64) -> f64 {
    if x.is_infinite() || x == 0.0 {
        return x;
    }

    const FACT_A: f64 = 0.01745329052209854;
    const FACT_B: f64 = 1.997844754509471E-9;

    let xa = double_high_part(x);
    let xb = x - xa;

    let result = xb * FACT_B + xb * FACT_A + xa * FACT_B + xa * FACT_A;
    if result == 0.0 {
        // underflow keeps the sign of x
        return result * x;
    }
    result
}

/// Converts radians to degrees using a two part 180/π
pub fn to_degrees(x: f64) -> f64 {
    if x.is_infinite() || x == 0.0 {
        return x;
    }

    const FACT_A: f64 = 57.2957763671875;
    const FACT_B: f64 = 3.145894820876798E-6;

    let xa = double_high_part(x);
    let xb = x - xa;

    xb * FACT_B + xb * FACT_A + xa * FACT_B + xa * FACT_A
}
