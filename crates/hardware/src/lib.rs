//! Cycle-accurate soft-core arithmetic units.
//!
//! This crate implements software models of the multi-cycle arithmetic
//! soft-cores a digital-logic pipeline falls back on when no dedicated
//! multiply/divide hardware exists:
//! 1. **Streams:** a valid/ready back-pressured request/response contract
//!    shared by every engine ([`common::stream`]).
//! 2. **Multipliers:** an iterative shift-accumulate multiplier and a
//!    fully pipelined one, each supporting unsigned, signed, and
//!    signed-times-unsigned interpretation ([`units::mul`]).
//! 3. **Dividers:** a restoring/non-restoring multi-cycle divider with
//!    RISC-V-compatible edge-case handling, plus a long-division
//!    reference ([`units::div`]).
//! 4. **Configuration:** construction-time operand width and algorithm
//!    selection, deserializable from JSON ([`config`]).
//!
//! Every engine is a plain clocked state machine: combinational outputs
//! are a function of current state, and all registers update atomically
//! once per `tick`. Latency is fixed per configuration, independent of
//! operand values.

/// Shared bit helpers, magnitude comparison, and the stream contract.
pub mod common;
/// Engine configuration (defaults, validation, JSON ingestion).
pub mod config;
/// The multiplier and divider engines.
pub mod units;

/// The clocked-engine stream trait; implemented by every non-pipelined unit.
pub use crate::common::stream::SoftCore;
/// Construction-time configuration types and the width-validation error.
pub use crate::config::{Algorithm, ConfigError, DivConfig, MulConfig};
