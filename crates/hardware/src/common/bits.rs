//! Fixed-width two's-complement register helpers.
//!
//! Every engine in this crate carries operands as `u64` bit patterns of a
//! construction-time `width` (1..=64 bits). Intermediate arithmetic widens
//! into `i128`/`u128` so that at least one guard bit is always available;
//! in particular, negating the most negative `width`-bit value must not
//! wrap. Results are masked back to `width` bits only at reassembly.

/// Returns a mask with the low `width` bits set.
pub const fn mask(width: u32) -> u64 {
    if width >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

/// Returns a mask with the low `width` bits set, for double-width results.
pub const fn wide_mask(width: u32) -> u128 {
    if width >= u128::BITS {
        u128::MAX
    } else {
        (1u128 << width) - 1
    }
}

/// Bit pattern of the most negative `width`-bit signed value (`-2^(width-1)`).
pub const fn min_signed(width: u32) -> u64 {
    1u64 << (width - 1)
}

/// Whether the sign bit of a `width`-bit pattern is set.
pub const fn is_negative(value: u64, width: u32) -> bool {
    (value >> (width - 1)) & 1 == 1
}

/// Sign-extends a `width`-bit pattern into an `i128`.
pub const fn sign_extend(value: u64, width: u32) -> i128 {
    let v = (value & mask(width)) as i128;
    if is_negative(value, width) {
        v - (1i128 << width)
    } else {
        v
    }
}

/// Widens a `width`-bit pattern into an `i128` under the given interpretation.
///
/// # Arguments
///
/// * `value`  - The raw bit pattern; bits above `width` are ignored.
/// * `width`  - Operand width in bits.
/// * `signed` - Treat the pattern as two's-complement when `true`.
pub const fn extend(value: u64, width: u32, signed: bool) -> i128 {
    if signed {
        sign_extend(value, width)
    } else {
        (value & mask(width)) as i128
    }
}

/// Magnitude of a `width`-bit pattern under the given interpretation.
///
/// Fits in a `u64` for every supported width: the largest signed magnitude
/// is `2^(width-1)` and the largest unsigned magnitude is `2^width - 1`.
pub const fn magnitude(value: u64, width: u32, signed: bool) -> u64 {
    extend(value, width, signed).unsigned_abs() as u64
}

/// Two's-complement negation within `width` bits.
///
/// The most negative value maps to itself, exactly as a `width`-bit
/// negation circuit behaves.
pub const fn negate(value: u64, width: u32) -> u64 {
    value.wrapping_neg() & mask(width)
}
