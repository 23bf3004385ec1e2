//! Soft-core divider engines.
//!
//! Two implementations of the same truncating-division contract:
//! 1. [`MulticycleDiv`]: restoring or non-restoring iteration over operand
//!    magnitudes, with sign correction on the way in and out. Preferred in
//!    practice for its lower per-iteration cost.
//! 2. [`LongDivider`]: sign-aware digit-serial long division, kept as a
//!    known-good reference for equivalence testing.
//!
//! Both satisfy, for every completed operation with `d != 0`:
//! `n = d * q + r`, `sign(r) = sign(n)` or `r = 0`, and `|r| < |d|`.
//! Division by zero and signed overflow are defined results, not errors:
//!
//! * `d = 0`: `q` = all bits set, `r = n`, in both sign modes.
//! * Signed `n = -2^(width-1)`, `d = -1`: `q = n`, `r = 0`.
//!
//! These match the RISC-V M-extension semantics at `width` 32 and 64.

mod long;
mod multicycle;

pub use long::LongDivider;
pub use multicycle::MulticycleDiv;

pub use crate::config::Algorithm;

/// Sign interpretation of the divider operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Dividend and divisor are unsigned magnitudes; so are `q` and `r`.
    Unsigned,
    /// Dividend and divisor are two's-complement. The quotient takes the
    /// algebraic sign of `n / d`; the remainder takes the dividend's sign.
    Signed,
}

/// One divide operation: dividend, divisor, and their interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DivRequest {
    /// Dividend bit pattern; the `n` in `n / d`.
    pub n: u64,
    /// Divisor bit pattern; the `d` in `n / d`.
    pub d: u64,
    /// How to interpret `n` and `d`.
    pub sign: Sign,
}

/// Quotient and remainder of one divide operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quotient {
    /// `width`-bit quotient of `n / d`.
    pub q: u64,
    /// `width`-bit remainder of `n / d`.
    pub r: u64,
    /// Sign mode of the request that produced this result.
    pub sign: Sign,
}
