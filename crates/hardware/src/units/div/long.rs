//! Digit-serial long-division reference divider.

use std::cmp::Ordering;

use tracing::trace;

use super::{DivRequest, Quotient, Sign};
use crate::common::bits::{extend, is_negative, mask};
use crate::common::magnitude::compare_magnitude;
use crate::common::stream::SoftCore;
use crate::config::{ConfigError, DivConfig};

/// Long-division soft-core, used as a reference.
///
/// Classic pen-and-paper division in base 2: each tick considers one
/// quotient digit, from weight `2^(width-1)` down to `2^0`, and takes the
/// digit whenever a copy of the divisor scaled by that weight still fits
/// inside the running remainder by magnitude.
///
/// Unlike [`MulticycleDiv`](super::MulticycleDiv) the iteration is
/// sign-aware, dispatching on the four dividend/divisor sign quadrants:
/// digits are `+2^j` when the operand signs agree and `-2^j` when they
/// differ, and the scaled divisor is added or subtracted so the remainder
/// always moves toward zero while keeping the dividend's sign.
///
/// * Latency: `width` ticks for every input, edge cases included — the
///   magnitude test fails on every step of a trivial `|n| < |d|` divide
///   (yielding `q = 0`, `r = n`) and succeeds on every step of a divide
///   by zero (yielding the all-ones quotient) without changing the cycle
///   count.
/// * Throughput: one divide per `width` ticks.
///
/// Results are identical to [`MulticycleDiv`](super::MulticycleDiv) for
/// every input, at higher per-cycle resource cost in gateware terms; the
/// engine is kept for equivalence testing.
#[derive(Debug)]
pub struct LongDivider {
    width: u32,
    sign: Sign,
    /// Recorded operand signs; the dividend's is suppressed for a divide
    /// by zero so the quotient accumulates toward all-ones.
    n_sign: bool,
    d_sign: bool,
    /// Divisor widened per the request's interpretation.
    d_ext: i128,
    quotient: i128,
    remainder: i128,
    /// Digits still to consider; zero means idle.
    iters_left: u32,
    response: Option<Quotient>,
}

impl LongDivider {
    /// Creates a long divider for the configured operand width.
    ///
    /// The algorithm field of the configuration is ignored; long division
    /// has a single strategy.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when the width is not in `1..=64`.
    pub fn new(config: &DivConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            sign: Sign::Unsigned,
            n_sign: false,
            d_sign: false,
            d_ext: 0,
            quotient: 0,
            remainder: 0,
            iters_left: 0,
            response: None,
        })
    }

    /// Operand width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    fn accept(&mut self, request: &DivRequest) {
        let w = self.width;
        let n = request.n & mask(w);
        let d = request.d & mask(w);
        let signed = request.sign == Sign::Signed;
        self.sign = request.sign;
        // Dividing a negative value by zero must still drive the quotient
        // to all-ones; forcing the positive quadrant does exactly that
        // while leaving the remainder (the untouched dividend) alone.
        self.n_sign = signed && is_negative(n, w) && d != 0;
        self.d_sign = signed && is_negative(d, w);
        self.d_ext = extend(d, w, signed);
        self.remainder = extend(n, w, signed);
        self.quotient = 0;
        self.iters_left = w;
        trace!(n, d, sign = ?request.sign, "divide accepted");
    }

    /// Considers the quotient digit of weight `2^j`, `j = iters_left - 1`.
    fn step(&mut self) {
        let j = self.iters_left - 1;
        let scaled = self.d_ext << j;
        if compare_magnitude(scaled, self.remainder) != Ordering::Greater {
            if self.n_sign == self.d_sign {
                self.quotient += 1i128 << j;
                self.remainder -= scaled;
            } else {
                self.quotient -= 1i128 << j;
                self.remainder += scaled;
            }
        }

        self.iters_left -= 1;
        if self.iters_left == 0 {
            let m = mask(self.width);
            let q = (self.quotient as u64) & m;
            let r = (self.remainder as u64) & m;
            trace!(q, r, "quotient emitted");
            self.response = Some(Quotient {
                q,
                r,
                sign: self.sign,
            });
        }
    }
}

impl SoftCore for LongDivider {
    type Request = DivRequest;
    type Response = Quotient;

    fn ready(&self) -> bool {
        self.iters_left == 0 && self.response.is_none()
    }

    fn valid(&self) -> bool {
        self.response.is_some()
    }

    fn response(&self) -> Option<&Quotient> {
        self.response.as_ref()
    }

    fn tick(&mut self, request: Option<&DivRequest>, response_ready: bool) -> Option<Quotient> {
        let accept = self.ready() && request.is_some();
        let claimed = if response_ready {
            self.response.take()
        } else {
            None
        };

        if accept {
            if let Some(req) = request {
                self.accept(req);
            }
        } else if self.iters_left > 0 {
            self.step();
        }

        claimed
    }

    fn reset(&mut self) {
        self.iters_left = 0;
        self.response = None;
    }

    fn latency(&self) -> u64 {
        u64::from(self.width)
    }
}
