//! Biometric capability probe port.

use crate::model::{BiometryType, CapabilityCode};

/// Capability to query the platform for biometric readiness.
///
/// Returns the raw platform code; classification into an availability verdict
/// happens in [`crate::logic::availability`]. Never fails — an unreadable
/// platform state maps to [`CapabilityCode::Other`].
pub trait CapabilityProbe: Send + Sync {
    fn capability(&self) -> CapabilityCode;

    /// Kind of sensor backing the prompt. Platforms that do not distinguish
    /// report the generic kind.
    fn biometry_type(&self) -> BiometryType {
        BiometryType::Biometrics
    }
}
