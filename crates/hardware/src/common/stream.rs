//! Valid/ready handshake stream contract.
//!
//! Every engine exposes exactly one request stream in and one response
//! stream out. A transfer occurs on a tick where the producer's `valid` and
//! the consumer's `ready` are both asserted; the producer must keep `valid`
//! asserted with a stable payload until the transfer happens, while the
//! consumer may assert and retract `ready` freely. No data is lost or
//! duplicated across a transfer boundary.
//!
//! In this cycle-stepped model the two flags map onto [`SoftCore`] like so:
//!
//! 1. **Request stream:** the caller asserts `valid` by passing
//!    `Some(request)` to [`SoftCore::tick`]; the engine's `ready` is
//!    [`SoftCore::ready`]. The request is accepted only when `ready` held at
//!    the start of the tick.
//! 2. **Response stream:** the engine's `valid` is [`SoftCore::valid`] and
//!    the payload is [`SoftCore::response`]; the caller asserts `ready` via
//!    the `response_ready` argument. A claimed payload is returned from
//!    `tick` and the engine drops `valid` on the next tick.
//!
//! A producer that retracts `valid` before a transfer has occurred is
//! violating the protocol; engines do not detect or recover from that.

/// A clocked arithmetic engine with streaming request/response ports.
///
/// All state transitions happen atomically once per [`tick`](Self::tick),
/// as in a synchronous digital circuit. Between ticks the observable
/// outputs (`ready`, `valid`, `response`) are stable.
pub trait SoftCore {
    /// Request payload carried on the input stream.
    type Request;
    /// Response payload carried on the output stream.
    type Response: Clone;

    /// Request-stream `ready`: the engine can accept a request this tick.
    ///
    /// Deasserted for the entire busy interval, from acceptance until the
    /// matching response has been produced and consumed.
    fn ready(&self) -> bool;

    /// Response-stream `valid`: a response payload is being offered.
    fn valid(&self) -> bool;

    /// The offered response payload, stable until claimed.
    fn response(&self) -> Option<&Self::Response>;

    /// Advances the engine by one clock tick.
    ///
    /// # Arguments
    ///
    /// * `request`        - `Some` asserts request-stream `valid` with the
    ///   given payload for this tick. A transfer occurs only if
    ///   [`ready`](Self::ready) was asserted at the start of the tick.
    /// * `response_ready` - Asserts response-stream `ready` for this tick.
    ///
    /// # Returns
    ///
    /// The response payload when a response transfer occurred this tick,
    /// `None` otherwise.
    fn tick(
        &mut self,
        request: Option<&Self::Request>,
        response_ready: bool,
    ) -> Option<Self::Response>;

    /// Returns the engine to its idle baseline, discarding any in-flight
    /// computation and any unclaimed response.
    fn reset(&mut self);

    /// Fixed number of ticks from request acceptance until
    /// [`valid`](Self::valid) asserts, independent of operand values.
    ///
    /// Engines that short-circuit specific inputs document the (strictly
    /// smaller, equally fixed) latency of those separately.
    fn latency(&self) -> u64;
}
