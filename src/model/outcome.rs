/// Terminal result of one authentication ceremony.
///
/// Produced exactly once per ceremony invocation and never reused. `C` is the
/// cryptographic context bound to the ceremony; on success the platform hands
/// it back evaluated under the biometric assertion.
#[derive(Debug)]
pub enum CeremonyOutcome<C> {
    /// Enrolled biometric matched. Carries the bound context back when one was
    /// supplied; `None` for unbound (liveness-only) ceremonies.
    Succeeded { context: Option<C> },
    /// User dismissed the prompt. A normal outcome, not a fault.
    Cancelled,
    /// Presented biometric did not match; no automatic retry.
    FailedMatch,
    /// Too many failed attempts. Permanent lockout requires stronger recovery
    /// than waiting (e.g. device credential).
    Locked { permanent: bool },
    /// Any other platform-reported error; message is diagnostic only.
    Errored { message: String },
}
