//! biosign - biometric-gated key management and signing.
//!
//! The crate manages one named asymmetric keypair whose private half lives in
//! platform custody and is only usable after a fresh strong-class biometric
//! assertion. A successful assertion authorizes exactly one signature over
//! caller-supplied bytes; failures are classified so callers can route to the
//! right recovery (retry, enrollment, lockout guidance).
//!
//! Platform primitives (key store, capability query, biometric prompt) are
//! consumed through the traits in [`ports`]; [`adapters`] ships software
//! implementations so the full flow runs on development machines and in tests.

pub mod adapters;
pub mod api;
pub mod error;
pub mod logic;
pub mod model;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use api::{
    Biometrics, CreatedKeys, KeysDeleted, KeysExist, PromptOptions, PromptReceipt, SensorStatus,
    SignatureOptions, SignatureReceipt,
};
pub use error::{BiosignError, BiosignResult};
pub use model::{
    AvailabilityVerdict, BiometryType, CapabilityCode, CeremonyOutcome, KeyAlias, KeySpec,
    PromptSpec, PublicKey, SigningRequest, UnavailableReason,
};
