//! Combinational magnitude comparison.
//!
//! The long divider decides every quotient digit by asking whether a shifted
//! copy of the divisor still fits inside the running remainder, regardless
//! of the signs involved. That question is a pure function of the two
//! absolute magnitudes; it has no state and no failure modes.

use std::cmp::Ordering;

use super::bits::extend;

/// Compares the absolute magnitudes of two values.
///
/// Callers widen `width`-bit operands into `i128` first (see
/// [`compare_operands`]); the guard headroom means the most negative
/// representable pattern can be negated without wrapping, so no
/// absolute-value corner case exists at the operand width.
///
/// # Returns
///
/// `Ordering::Less` when `|x| < |y|`, `Ordering::Equal` when `|x| = |y|`,
/// `Ordering::Greater` when `|x| > |y|`.
pub fn compare_magnitude(x: i128, y: i128) -> Ordering {
    x.unsigned_abs().cmp(&y.unsigned_abs())
}

/// Compares the magnitudes of two `width`-bit operands.
///
/// # Arguments
///
/// * `x`, `y`  - Raw bit patterns; bits above `width` are ignored.
/// * `width`   - Operand width in bits.
/// * `signed`  - Interpret both patterns as two's-complement when `true`.
pub fn compare_operands(x: u64, y: u64, width: u32, signed: bool) -> Ordering {
    compare_magnitude(extend(x, width, signed), extend(y, width, signed))
}
