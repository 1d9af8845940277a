//! Biometric capability codes and the availability verdict built from them.

/// Raw capability code reported by the platform biometric subsystem.
///
/// `Success` means the platform can currently run strong-class biometric
/// checks; weaker sensor classes never report `Success` here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapabilityCode {
    Success,
    NoHardware,
    HardwareUnavailable,
    NoneEnrolled,
    /// Any other platform code; carried for diagnostics only.
    Other(i32),
}

/// Why biometrics are unavailable right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnavailableReason {
    NoHardware,
    HardwareUnavailable,
    NotEnrolled,
    Unknown,
}

impl UnavailableReason {
    /// Stable UI-facing label for the reason.
    pub fn display_label(self) -> &'static str {
        match self {
            UnavailableReason::NoHardware => "No biometric hardware",
            UnavailableReason::HardwareUnavailable => "Biometric hardware unavailable",
            UnavailableReason::NotEnrolled => "No biometric enrolled",
            UnavailableReason::Unknown => "Biometric error",
        }
    }
}

/// Kind of biometric sensor backing the platform prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BiometryType {
    TouchId,
    FaceId,
    Biometrics,
}

impl BiometryType {
    pub fn label(self) -> &'static str {
        match self {
            BiometryType::TouchId => "TouchID",
            BiometryType::FaceId => "FaceID",
            BiometryType::Biometrics => "Biometrics",
        }
    }
}

/// Point-in-time availability verdict; produced fresh on each query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvailabilityVerdict {
    pub available: bool,
    pub biometry_type: BiometryType,
    pub reason: Option<UnavailableReason>,
}

impl AvailabilityVerdict {
    pub fn available(biometry_type: BiometryType) -> Self {
        Self {
            available: true,
            biometry_type,
            reason: None,
        }
    }

    pub fn unavailable(biometry_type: BiometryType, reason: UnavailableReason) -> Self {
        Self {
            available: false,
            biometry_type,
            reason: Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_labels() {
        assert_eq!(
            UnavailableReason::NotEnrolled.display_label(),
            "No biometric enrolled"
        );
        assert_eq!(
            UnavailableReason::Unknown.display_label(),
            "Biometric error"
        );
    }

    #[test]
    fn test_available_verdict_has_no_reason() {
        let verdict = AvailabilityVerdict::available(BiometryType::Biometrics);
        assert!(verdict.available);
        assert_eq!(verdict.reason, None);
    }
}
