//! Fully pipelined shift-accumulate multiplier.

use tracing::trace;

use super::{MulRequest, Product, Sign};
use crate::common::bits::{extend, is_negative, mask, negate, sign_extend, wide_mask};
use crate::config::{ConfigError, MulConfig};

/// One in-flight multiply travelling down the pipeline.
#[derive(Debug, Clone, Copy)]
struct Stage {
    /// Widened multiplicand, `width + 1` bits signed; may itself be
    /// negative, shifted copies of it accumulate the same way either way.
    a: i128,
    /// Multiplier bit pattern; bit `i` gates the add in stage `i`.
    b: u64,
    sign: Sign,
    /// Partial product through the stage's own term, two's-complement in
    /// the low `2 * width` bits.
    acc: u128,
}

/// Multiplier soft-core that pipelines its inputs.
///
/// `width` pipeline registers hold up to `width` independent multiplies at
/// once: a request entered on one tick produces its product exactly
/// `width` ticks later, and one product is finished per tick at full
/// occupancy. Results leave in issue order.
///
/// Unlike [`MulticycleMul`](super::MulticycleMul) there is no stall
/// control flow: the input is always ready, and a product not claimed on
/// the tick it appears is overwritten on the next. This engine is
/// explicitly pipelined and therefore exempt from the one-in-flight rule.
///
/// The first stage does all the sign handling: when the multiply is fully
/// signed and the multiplier is negative, both operands are
/// two's-complemented (subtracting shifted multiplicands is the same as
/// adding shifted copies of the negated one). Every later stage is then a
/// sign-oblivious gated shift-add.
#[derive(Debug)]
pub struct PipelinedMul {
    width: u32,
    stages: Vec<Option<Stage>>,
}

impl PipelinedMul {
    /// Creates a pipelined multiplier for the configured operand width.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when the width is not in `1..=64`.
    pub fn new(config: &MulConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            stages: vec![None; config.width as usize],
        })
    }

    /// Operand width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Ticks from a request entering to its product appearing.
    pub fn latency(&self) -> u64 {
        u64::from(self.width)
    }

    /// Forms the stage-0 entry for a new request.
    fn admit(&self, request: &MulRequest) -> Stage {
        let w = self.width;
        let a = request.a & mask(w);
        let b = request.b & mask(w);
        let (a0, b0) = if request.sign == Sign::Signed && is_negative(b, w) {
            // Negative multiplier: two's-complement both operands. The
            // widened `a` gains a guard bit, so even the most negative
            // multiplicand negates cleanly.
            (-sign_extend(a, w), negate(b, w))
        } else {
            (extend(a, w, request.sign != Sign::Unsigned), b)
        };
        let acc = (a0 * i128::from(b0 & 1)) as u128;
        Stage {
            a: a0,
            b: b0,
            sign: request.sign,
            acc,
        }
    }

    /// Advances the pipeline by one clock tick.
    ///
    /// # Arguments
    ///
    /// * `request` - A new multiply entering the pipeline this tick, if any.
    ///
    /// # Returns
    ///
    /// The product of the multiply that completed this tick, if any.
    pub fn tick(&mut self, request: Option<&MulRequest>) -> Option<Product> {
        let last = self.width as usize - 1;
        let done = self.stages[last].take();

        // Shift every entry one stage forward, folding in that stage's
        // partial-product term as it arrives.
        for i in (1..=last).rev() {
            self.stages[i] = self.stages[i - 1].take().map(|mut s| {
                let bit = i128::from((s.b >> i) & 1);
                s.acc = s.acc.wrapping_add(((s.a * bit) << i) as u128);
                s
            });
        }
        let entering = request.map(|req| {
            trace!(a = req.a, b = req.b, sign = ?req.sign, "multiply entered pipeline");
            self.admit(req)
        });
        self.stages[0] = entering;

        done.map(|s| Product {
            o: s.acc & wide_mask(2 * self.width),
            sign: s.sign,
        })
    }

    /// Drains the pipeline, discarding every multiply in flight.
    pub fn reset(&mut self) {
        for stage in &mut self.stages {
            *stage = None;
        }
    }
}
