//! Soft-core multiplier engines.
//!
//! Two implementations of the same arithmetic contract:
//! 1. [`MulticycleMul`]: one shift-accumulate step per tick, one multiply
//!    in flight, full valid/ready handshaking.
//! 2. [`PipelinedMul`]: `width` pipeline stages, one multiply finished per
//!    tick, no stall control flow.
//!
//! Both emit the exact `2 * width`-bit product for every input bit
//! pattern under the selected sign interpretation; there is no overflow
//! and no failure path.

mod multicycle;
mod pipelined;

pub use multicycle::MulticycleMul;
pub use pipelined::PipelinedMul;

/// Sign interpretation of the multiplier operands.
///
/// Selected per operation, not per instance. The bottom `width` bits of
/// the product are identical for [`Unsigned`](Sign::Unsigned) and
/// [`SignedUnsigned`](Sign::SignedUnsigned) given the same bit patterns;
/// the modes differ in how the upper half is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Both `a` and `b` are unsigned; the product is unsigned.
    Unsigned,
    /// Both `a` and `b` are two's-complement; the product is signed.
    Signed,
    /// `a` is two's-complement, `b` is an unsigned magnitude; the product
    /// is signed. This mirrors the signed-times-unsigned multiply found in
    /// instruction sets that split high/low product halves.
    SignedUnsigned,
}

/// One multiply operation: two `width`-bit operands and their
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MulRequest {
    /// Multiplicand bit pattern.
    pub a: u64,
    /// Multiplier bit pattern.
    pub b: u64,
    /// How to interpret `a` and `b`.
    pub sign: Sign,
}

/// The full product of one multiply operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Product {
    /// `2 * width`-bit product; two's-complement when the request was
    /// signed in either operand.
    pub o: u128,
    /// Sign mode of the request that produced this product.
    pub sign: Sign,
}
