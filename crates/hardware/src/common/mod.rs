//! Shared building blocks used by every arithmetic engine.
//!
//! This module provides the pieces the engines have in common:
//! 1. **Bit helpers:** masking, widening, and negation for fixed-width
//!    two's-complement patterns held in `u64` registers.
//! 2. **Magnitude comparison:** the combinational comparator used by the
//!    long divider and by result checking.
//! 3. **Stream contract:** the valid/ready handshake trait all engines
//!    implement.

/// Fixed-width two's-complement register helpers.
pub mod bits;

/// Combinational magnitude comparison.
pub mod magnitude;

/// Valid/ready handshake stream contract.
pub mod stream;

pub use magnitude::{compare_magnitude, compare_operands};
pub use stream::SoftCore;
