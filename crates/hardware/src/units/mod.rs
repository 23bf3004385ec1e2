//! The arithmetic engines.
//!
//! Each engine owns its iteration state exclusively; composing several
//! engines (or sharing one among callers) is arbitration the caller
//! provides externally. Responses leave a unit in the order requests were
//! accepted, since at most one operation is in flight per non-pipelined
//! instance.

/// Divider engines (multi-cycle restoring/non-restoring, long division).
pub mod div;

/// Multiplier engines (multi-cycle and pipelined).
pub mod mul;
