//! Multi-cycle shift-accumulate multiplier.

use tracing::trace;

use super::{MulRequest, Product, Sign};
use crate::common::bits::{is_negative, magnitude, mask, wide_mask};
use crate::common::stream::SoftCore;
use crate::config::{ConfigError, MulConfig};

/// Control state of the multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Setup,
    Iterate,
    Finalize,
}

/// Iterative shift-accumulate multiplier soft-core.
///
/// Accepts `{a, b, sign}` and, a fixed `width + 2` ticks later, offers the
/// exact `2 * width`-bit product of the operands under the selected sign
/// interpretation. One partial-product accumulation happens per tick; the
/// sign correction is applied in the final tick.
///
/// * One multiply is in flight at a time; the request stream's `ready` is
///   deasserted for the whole busy interval.
/// * Every bit-pattern pair is a valid input; there is no failure path.
///
/// Internally the engine multiplies the operands' magnitudes and negates
/// the result when exactly one operand was negative. Magnitudes are formed
/// with a guard bit of headroom, so the most negative input needs no
/// special case.
#[derive(Debug)]
pub struct MulticycleMul {
    width: u32,
    state: State,
    /// Latched request.
    a: u64,
    b: u64,
    sign: Sign,
    /// Operand magnitudes, valid from SETUP.
    a_mag: u64,
    b_mag: u64,
    /// Product must be negated in FINALIZE.
    negate_out: bool,
    /// Running partial product of the magnitudes.
    acc: u128,
    /// Next multiplier bit to examine.
    step: u32,
    response: Option<Product>,
}

impl MulticycleMul {
    /// Creates a multiplier for the configured operand width.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when the width is not in `1..=64`.
    pub fn new(config: &MulConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            state: State::Idle,
            a: 0,
            b: 0,
            sign: Sign::Unsigned,
            a_mag: 0,
            b_mag: 0,
            negate_out: false,
            acc: 0,
            step: 0,
            response: None,
        })
    }

    /// Operand width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    fn setup(&mut self) {
        let w = self.width;
        // `a` carries a sign in every mode but UNSIGNED; `b` only when the
        // multiply is fully signed.
        let a_signed = self.sign != Sign::Unsigned;
        let b_signed = self.sign == Sign::Signed;
        let a_neg = a_signed && is_negative(self.a, w);
        let b_neg = b_signed && is_negative(self.b, w);
        self.a_mag = magnitude(self.a, w, a_signed);
        self.b_mag = magnitude(self.b, w, b_signed);
        self.negate_out = a_neg != b_neg;
        self.acc = 0;
        self.step = 0;
        self.state = State::Iterate;
    }

    fn iterate(&mut self) {
        if (self.b_mag >> self.step) & 1 == 1 {
            self.acc += u128::from(self.a_mag) << self.step;
        }
        self.step += 1;
        if self.step == self.width {
            self.state = State::Finalize;
        }
    }

    fn finalize(&mut self) {
        let m = wide_mask(2 * self.width);
        let o = if self.negate_out {
            self.acc.wrapping_neg() & m
        } else {
            self.acc & m
        };
        trace!(o, "product emitted");
        self.response = Some(Product { o, sign: self.sign });
        self.state = State::Idle;
    }
}

impl SoftCore for MulticycleMul {
    type Request = MulRequest;
    type Response = Product;

    fn ready(&self) -> bool {
        self.state == State::Idle && self.response.is_none()
    }

    fn valid(&self) -> bool {
        self.response.is_some()
    }

    fn response(&self) -> Option<&Product> {
        self.response.as_ref()
    }

    fn tick(&mut self, request: Option<&MulRequest>, response_ready: bool) -> Option<Product> {
        let accept = self.ready() && request.is_some();
        let claimed = if response_ready {
            self.response.take()
        } else {
            None
        };

        if accept {
            if let Some(req) = request {
                let m = mask(self.width);
                self.a = req.a & m;
                self.b = req.b & m;
                self.sign = req.sign;
                self.state = State::Setup;
                trace!(a = self.a, b = self.b, sign = ?self.sign, "multiply accepted");
            }
        } else {
            match self.state {
                State::Idle => {}
                State::Setup => self.setup(),
                State::Iterate => self.iterate(),
                State::Finalize => self.finalize(),
            }
        }

        claimed
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.response = None;
    }

    fn latency(&self) -> u64 {
        // SETUP + width ITERATE ticks + FINALIZE.
        u64::from(self.width) + 2
    }
}
