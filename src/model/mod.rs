mod alias;
mod availability;
mod key_spec;
mod outcome;
mod prompt;

pub use alias::{AliasError, KeyAlias};
pub use availability::{AvailabilityVerdict, BiometryType, CapabilityCode, UnavailableReason};
pub use key_spec::{AuthPolicy, BiometricClass, KeyAlgorithm, KeySpec, PublicKey};
pub use outcome::CeremonyOutcome;
pub use prompt::{PromptSpec, RequestError, SigningRequest};
