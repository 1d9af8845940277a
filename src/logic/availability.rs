//! Mapping from raw platform capability codes to an availability verdict.

use tracing::debug;

use crate::model::{AvailabilityVerdict, BiometryType, CapabilityCode, UnavailableReason};

/// Classify a raw capability code for the given sensor kind.
///
/// Total and non-panicking: unrecognized codes fold into
/// [`UnavailableReason::Unknown`]. `available` is only affirmed for
/// [`CapabilityCode::Success`], i.e. strong-class biometrics ready to run.
pub fn classify(code: CapabilityCode, biometry_type: BiometryType) -> AvailabilityVerdict {
    let verdict = match code {
        CapabilityCode::Success => AvailabilityVerdict::available(biometry_type),
        CapabilityCode::NoHardware => {
            AvailabilityVerdict::unavailable(biometry_type, UnavailableReason::NoHardware)
        }
        CapabilityCode::HardwareUnavailable => {
            AvailabilityVerdict::unavailable(biometry_type, UnavailableReason::HardwareUnavailable)
        }
        CapabilityCode::NoneEnrolled => {
            AvailabilityVerdict::unavailable(biometry_type, UnavailableReason::NotEnrolled)
        }
        CapabilityCode::Other(raw) => {
            debug!(raw, "unrecognized biometric capability code");
            AvailabilityVerdict::unavailable(biometry_type, UnavailableReason::Unknown)
        }
    };

    debug!(?code, available = verdict.available, "classified biometric capability");
    verdict
}
