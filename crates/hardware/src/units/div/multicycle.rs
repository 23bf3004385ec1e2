//! Multi-cycle restoring/non-restoring divider.

use std::cmp::Ordering;

use tracing::trace;

use super::{DivRequest, Quotient, Sign};
use crate::common::bits::{is_negative, magnitude, mask, min_signed, negate};
use crate::common::magnitude::compare_magnitude;
use crate::common::stream::SoftCore;
use crate::config::{Algorithm, ConfigError, DivConfig};

/// Control state: `IDLE → SETUP → ITERATE(×width) → [RESTORE] → FINALIZE`.
///
/// `RESTORE` runs exactly once and only for the non-restoring algorithm.
/// The two hard-wired edge cases jump from `SETUP` straight to `FINALIZE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Setup,
    Iterate,
    Restore,
    Finalize,
}

/// Restoring/non-restoring divider soft-core.
///
/// Accepts `{n, d, sign}` and, a fixed number of ticks later, offers
/// `{q, r}` under truncating-division semantics (see the
/// [module docs](super) for the contract and edge cases).
///
/// * Latency: `width + 2` ticks for the restoring configuration,
///   `width + 3` for non-restoring. The two hard-wired edge cases bypass
///   the iteration entirely and complete in
///   [`EDGE_CASE_LATENCY`](Self::EDGE_CASE_LATENCY) ticks.
/// * Throughput: one divide per latency interval; the request stream's
///   `ready` is deasserted for the whole busy interval.
///
/// Internally the engine converts signed operands to magnitudes in SETUP,
/// iterates on unsigned values, and applies the truncating sign correction
/// in FINALIZE: the quotient is negated when the operand signs differ, the
/// remainder when the dividend was negative. The partial remainder
/// register carries a guard bit beyond the operand width so the trial
/// subtraction can go negative without wrapping.
#[derive(Debug)]
pub struct MulticycleDiv {
    width: u32,
    algorithm: Algorithm,
    state: State,
    /// Latched request.
    n: u64,
    d: u64,
    sign: Sign,
    /// Recorded operand signs, valid from SETUP.
    neg_n: bool,
    neg_d: bool,
    /// Operand magnitudes, valid from SETUP.
    n_mag: u64,
    d_mag: u64,
    /// Partial remainder; `width + 1` bits live, signed for the
    /// non-restoring recurrence.
    rem: i128,
    /// Quotient accumulator. Restoring: plain bits. Non-restoring: raw
    /// ±1 digits (1 encodes +1, 0 encodes −1), decoded in RESTORE.
    quo: u64,
    /// Dividend bits not yet shifted into the partial remainder.
    bits_left: u32,
    /// Result forced by an edge case, bypassing ITERATE.
    forced: Option<(u64, u64)>,
    response: Option<Quotient>,
}

impl MulticycleDiv {
    /// Ticks from acceptance to `valid` for the two short-circuited edge
    /// cases (division by zero, signed overflow): SETUP + FINALIZE only.
    pub const EDGE_CASE_LATENCY: u64 = 2;

    /// Creates a divider for the configured width and algorithm.
    ///
    /// # Errors
    ///
    /// [`ConfigError::UnsupportedWidth`] when the width is not in `1..=64`.
    pub fn new(config: &DivConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            width: config.width,
            algorithm: config.algorithm,
            state: State::Idle,
            n: 0,
            d: 0,
            sign: Sign::Unsigned,
            neg_n: false,
            neg_d: false,
            n_mag: 0,
            d_mag: 0,
            rem: 0,
            quo: 0,
            bits_left: 0,
            forced: None,
            response: None,
        })
    }

    /// Operand width in bits.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// The configured iteration strategy.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Converts the operands, records signs, and detects the edge cases.
    fn setup(&mut self) {
        let w = self.width;
        if self.d == 0 {
            // Division by zero: all bits set in the quotient, dividend
            // bit pattern unchanged as the remainder, in both sign modes.
            self.forced = Some((mask(w), self.n));
            self.state = State::Finalize;
            return;
        }
        if self.sign == Sign::Signed && self.n == min_signed(w) && self.d == mask(w) {
            // Signed overflow: -2^(width-1) / -1 does not fit; the
            // quotient wraps to the dividend and the remainder is zero.
            self.forced = Some((self.n, 0));
            self.state = State::Finalize;
            return;
        }

        let signed = self.sign == Sign::Signed;
        self.neg_n = signed && is_negative(self.n, w);
        self.neg_d = signed && is_negative(self.d, w);
        self.n_mag = magnitude(self.n, w, signed);
        self.d_mag = magnitude(self.d, w, signed);
        self.rem = 0;
        self.quo = 0;
        self.bits_left = w;
        self.forced = None;
        self.state = State::Iterate;
    }

    /// One iteration step on the magnitudes, most significant dividend
    /// bit first.
    fn iterate(&mut self) {
        let bit = i128::from((self.n_mag >> (self.bits_left - 1)) & 1);
        let d = i128::from(self.d_mag);
        match self.algorithm {
            Algorithm::Restoring => {
                let trial = ((self.rem << 1) | bit) - d;
                if trial < 0 {
                    // Tentative subtraction went negative: keep the
                    // shifted remainder (equivalent to adding d back)
                    // and record quotient bit 0.
                    self.rem = (self.rem << 1) | bit;
                    self.quo <<= 1;
                } else {
                    self.rem = trial;
                    self.quo = (self.quo << 1) | 1;
                }
            }
            Algorithm::NonRestoring => {
                if self.rem >= 0 {
                    // Digit +1: subtract.
                    self.rem = ((self.rem << 1) | bit) - d;
                    self.quo = (self.quo << 1) | 1;
                } else {
                    // Digit −1, encoded as 0: add.
                    self.rem = ((self.rem << 1) | bit) + d;
                    self.quo <<= 1;
                }
            }
        }

        self.bits_left -= 1;
        if self.bits_left == 0 {
            self.state = match self.algorithm {
                Algorithm::Restoring => State::Finalize,
                Algorithm::NonRestoring => State::Restore,
            };
        }
    }

    /// Terminal correction for the non-restoring recurrence.
    ///
    /// Decodes the ±1 digit string into a plain quotient (digit bits minus
    /// the ones complement of the digit bits), then corrects once if the
    /// final remainder ended negative. Guarantees `rem >= 0`.
    fn restore(&mut self) {
        let m = mask(self.width);
        self.quo = self.quo.wrapping_sub(!self.quo & m) & m;
        if self.rem < 0 {
            self.rem += i128::from(self.d_mag);
            self.quo = self.quo.wrapping_sub(1) & m;
        }
        self.state = State::Finalize;
    }

    /// Sign-corrects the magnitude result and emits the response.
    fn finalize(&mut self) {
        let w = self.width;
        let (q, r) = if let Some(forced) = self.forced.take() {
            forced
        } else {
            debug_assert!(self.rem >= 0);
            debug_assert_eq!(
                compare_magnitude(self.rem, i128::from(self.d_mag)),
                Ordering::Less
            );
            let mut q = self.quo & mask(w);
            let mut r = (self.rem as u64) & mask(w);
            if self.neg_n != self.neg_d {
                q = negate(q, w);
            }
            if self.neg_n {
                r = negate(r, w);
            }
            (q, r)
        };
        trace!(q, r, "quotient emitted");
        self.response = Some(Quotient {
            q,
            r,
            sign: self.sign,
        });
        self.state = State::Idle;
    }
}

impl SoftCore for MulticycleDiv {
    type Request = DivRequest;
    type Response = Quotient;

    fn ready(&self) -> bool {
        self.state == State::Idle && self.response.is_none()
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
                let m = mask(self.width);
                self.n = req.n & m;
                self.d = req.d & m;
                self.sign = req.sign;
                self.state = State::Setup;
                trace!(n = self.n, d = self.d, sign = ?self.sign, "divide accepted");
            }
        } else {
            match self.state {
                State::Idle => {}
                State::Setup => self.setup(),
                State::Iterate => self.iterate(),
                State::Restore => self.restore(),
                State::Finalize => self.finalize(),
            }
        }

        claimed
    }

    fn reset(&mut self) {
        self.state = State::Idle;
        self.forced = None;
        self.response = None;
    }

    fn latency(&self) -> u64 {
        // SETUP + width ITERATE ticks + FINALIZE, plus the RESTORE tick
        // for the non-restoring configuration.
        match self.algorithm {
            Algorithm::Restoring => u64::from(self.width) + 2,
            Algorithm::NonRestoring => u64::from(self.width) + 3,
        }
    }
}
