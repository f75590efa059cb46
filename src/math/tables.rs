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
use crate::math::bootstrap::{SlowLog, exp_int, slow_cos, slow_exp, slow_sin};
use crate::math::dekker::Dekker;
use std::sync::OnceLock;

/// Samples of sin, cos and tan at `i / 8` for `i` in `0..14`.
pub(crate) struct TrigTables {
    pub(crate) sin: [Dekker; 14],
    pub(crate) cos: [Dekker; 14],
    pub(crate) tan: [Dekker; 14],
}

/// Offset of `e^0` in [ExpTables::int].
pub(crate) const EXP_INT_OFFSET: usize = 750;

pub(crate) struct ExpTables {
    /// `e^(i - 750)`; index 0 is never read and holds zero.
    pub(crate) int: Box<[Dekker]>,
    /// `e^(i / 1024)` for `i` in `0..=1024`.
    pub(crate) frac: Box<[Dekker]>,
}

static TRIG: OnceLock<TrigTables> = OnceLock::new();
static EXP: OnceLock<ExpTables> = OnceLock::new();
static LN_MANT: OnceLock<Box<[Dekker]>> = OnceLock::new();

fn build_trig() -> TrigTables {
    let mut sin = [Dekker::default(); 14];
    let mut cos = [Dekker::default(); 14];
    let mut tan = [Dekker::default(); 14];

    for i in 0..7 {
        let x = i as f64 / 8.0;
        sin[i] = slow_sin(x);
        cos[i] = slow_cos(x);
    }

    // the series lose accuracy near 1, continue by angle doubling and addition
    for i in 7..14 {
        let xs = sin[i / 2];
        let ys = cos[i / 2];
        if i % 2 == 0 {
            let r = Dekker::mult(xs, ys);
            sin[i] = Dekker::new(r.lo * 2.0, r.hi * 2.0);
            cos[i] = Dekker::add(Dekker::mult(ys, ys), Dekker::mult(xs, xs).neg());
        } else {
            let as_ = sin[i / 2 + 1];
            let bs = cos[i / 2 + 1];
            sin[i] = Dekker::add(Dekker::mult(ys, as_), Dekker::mult(xs, bs));
            cos[i] = Dekker::add(Dekker::mult(ys, bs), Dekker::mult(xs, as_).neg());
        }
    }

    for i in 0..14 {
        tan[i] = Dekker::mult(sin[i], cos[i].recip());
    }

    tracing::debug!(table = "trigonometric", entries = 14, "constant table built");
    TrigTables { sin, cos, tan }
}

fn build_exp() -> ExpTables {
    let mut int = vec![Dekker::default(); 2 * EXP_INT_OFFSET].into_boxed_slice();
    for i in 0..EXP_INT_OFFSET {
        let e = exp_int(i as u32);
        int[EXP_INT_OFFSET + i] = e;
        if i != 0 {
            int[EXP_INT_OFFSET - i] = e.recip();
        }
    }

    let frac = (0..=1024)
        .map(|i| slow_exp(i as f64 / 1024.0))
        .collect::<Vec<_>>()
        .into_boxed_slice();

    tracing::debug!(
        table = "exponential",
        entries = int.len() + frac.len(),
        "constant table built"
    );
    ExpTables { int, frac }
}

fn build_ln_mant() -> Box<[Dekker]> {
    let ln = SlowLog::new();
    let table = (0..1024u64)
        .map(|i| ln.eval(f64::from_bits((i << 42) | 0x3ff0_0000_0000_0000)))
        .collect::<Vec<_>>()
        .into_boxed_slice();
    tracing::debug!(table = "log mantissa", entries = 1024, "constant table built");
    table
}

#[inline]
pub(crate) fn trig_tables() -> &'static TrigTables {
    TRIG.get_or_init(build_trig)
}

#[inline]
pub(crate) fn exp_tables() -> &'static ExpTables {
    EXP.get_or_init(build_exp)
}

/// `ln(1 + i / 1024)` for `i` in `0..1024`.
#[inline]
pub(crate) fn ln_mant() -> &'static [Dekker] {
    LN_MANT.get_or_init(build_ln_mant)
}
