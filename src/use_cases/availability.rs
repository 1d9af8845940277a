//! Sensor availability use case.

use crate::logic::availability;
use crate::model::AvailabilityVerdict;
use crate::ports::CapabilityProbe;

/// Query the platform and classify the current biometric availability.
///
/// Never fails; absence of hardware or enrollment is data, not an error.
pub fn sensor_availability<P>(probe: &P) -> AvailabilityVerdict
where
    P: CapabilityProbe,
{
    availability::classify(probe.capability(), probe.biometry_type())
}
