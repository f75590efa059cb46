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
use crate::math::dekker::Dekker;

/// 0! ..= 24!, every entry is exact in a double.
pub(crate) static FACT: [f64; 25] = [
    1.0,
    1.0,
    2.0,
    6.0,
    24.0,
    120.0,
    720.0,
    5040.0,
    40320.0,
    362880.0,
    3628800.0,
    39916800.0,
    479001600.0,
    6227020800.0,
    87178291200.0,
    1307674368000.0,
    20922789888000.0,
    355687428096000.0,
    6402373705728000.0,
    1.21645100408832e+17,
    2.43290200817664e+18,
    5.109094217170944e+19,
    1.1240007277776077e+21,
    2.585201673888498e+22,
    6.204484017332394e+23,
];

/// e as a double-double.
const E: Dekker = Dekker::new(1.4456468917292502E-16, 2.718281828459045);

#[derive(Copy, Clone, PartialEq)]
enum Series {
    Exp,
    Sin,
    Cos,
}

/// Taylor series summed by Horner's rule from the highest factorial down.
fn taylor(x: f64, series: Series) -> Dekker {
    let xs = Dekker::split(x);
    let mut ys = Dekker::default();

    for i in (0..FACT.len()).rev() {
        ys = Dekker::mult(xs, ys);

        let odd = (i & 1) != 0;
        match series {
            Series::Sin if !odd => continue,
            Series::Cos if odd => continue,
            _ => {}
        }

        let mut f = Dekker::split(FACT[i]).recip();
        if series != Series::Exp && (i & 2) != 0 {
            f = f.neg();
        }
        ys = Dekker::add(ys, f);
    }
    ys
}

/// exp(x) in double-double, for the small arguments of the fractional table.
pub(crate) fn slow_exp(x: f64) -> Dekker {
    taylor(x, Series::Exp)
}

/// sin(x) in double-double, valid for `|x| < 1`.
pub(crate) fn slow_sin(x: f64) -> Dekker {
    taylor(x, Series::Sin)
}

/// cos(x) in double-double, valid for `|x| < 1`.
pub(crate) fn slow_cos(x: f64) -> Dekker {
    taylor(x, Series::Cos)
}

/// e^p by repeated squaring of `e`.
pub(crate) fn exp_int(p: u32) -> Dekker {
    let mut xs = E;
    let mut ys = Dekker::new(0.0, 1.0);
    let mut p = p;
    while p > 0 {
        if (p & 1) != 0 {
            ys = Dekker::quad_mult(ys, xs);
        }
        xs = Dekker::quad_mult(xs, xs);
        p >>= 1;
    }
    ys.resplit()
}

/// Number of terms of the slow logarithm series.
const LN_TERMS: usize = 24;

/// `2 / (2k + 1)`, the slow logarithm coefficients.
fn ln_coefficients() -> [Dekker; LN_TERMS] {
    let mut coeffs = [Dekker::default(); LN_TERMS];
    for (k, c) in coeffs.iter_mut().enumerate() {
        *c = Dekker::mult(
            Dekker::new(0.0, 2.0),
            Dekker::split(2.0 * k as f64 + 1.0).recip(),
        );
    }
    coeffs
}

/// Computes ln(x) for x in [1, 2) as `2 * atanh((x - 1) / (x + 1))`.
pub(crate) struct SlowLog {
    coeffs: [Dekker; LN_TERMS],
}

impl SlowLog {
    pub(crate) fn new() -> Self {
        SlowLog {
            coeffs: ln_coefficients(),
        }
    }

    pub(crate) fn eval(&self, x: f64) -> Dekker {
        let mut xs = Dekker::split(x);
        xs.hi += 1.0;
        xs = xs.resplit();
        let a = xs.recip();
        xs.hi -= 2.0;
        xs = xs.resplit();
        // X = (x - 1) / (x + 1)
        let xs = Dekker::mult(xs, a);
        let x2 = Dekker::mult(xs, xs);

        let mut y = self.coeffs[LN_TERMS - 1];
        for c in self.coeffs[..LN_TERMS - 1].iter().rev() {
            y = Dekker::mult(y, x2);
            y = Dekker::add(y, *c);
        }
        Dekker::mult(y, xs)
    }
}
