//! Error types for biosign operations.
//!
//! Errors are organized hierarchically and use thiserror for implementation.
//! Expected ceremony outcomes (user cancellation) are not errors; they resolve
//! as non-success results at the API layer. Absence conditions (no key, no
//! hardware) are data, not failures, and never appear here.

use thiserror::Error;

use crate::model::RequestError;

/// Result type alias for biosign operations.
pub type BiosignResult<T> = Result<T, BiosignError>;

/// Top-level error type for all biosign operations.
#[derive(Error, Debug)]
pub enum BiosignError {
    /// Caller supplied an invalid request (missing prompt text or payload).
    #[error("invalid parameters: {0}")]
    InvalidRequest(#[from] RequestError),

    /// No foreground interactive surface can host the biometric prompt.
    #[error("no interactive surface available to host the prompt")]
    NoInteractionSurface,

    /// Another ceremony is already presented; invocations never queue.
    #[error("a biometric ceremony is already in progress")]
    CeremonyAlreadyActive,

    /// Key store errors (generation, lookup).
    #[error("key store error: {0}")]
    KeyStore(#[from] KeyStoreError),

    /// Biometry is locked after repeated failed attempts.
    #[error("biometry is locked out (permanent: {permanent})")]
    BiometryLockout { permanent: bool },

    /// Biometric match failure or other platform-reported ceremony error.
    #[error("authentication error: {detail}")]
    AuthenticationError { detail: String },

    /// Signature finalization failed after a successful authentication.
    #[error("signing error: {0}")]
    Signing(#[from] SigningContextError),
}

impl BiosignError {
    /// Stable classification code for the calling application.
    pub fn code(&self) -> &'static str {
        match self {
            BiosignError::InvalidRequest(_) => "INVALID_PARAMS",
            BiosignError::NoInteractionSurface => "NO_ACTIVITY",
            BiosignError::CeremonyAlreadyActive => "CEREMONY_ALREADY_ACTIVE",
            BiosignError::KeyStore(KeyStoreError::KeyUnavailable { .. }) => "SIGNATURE_ERROR",
            BiosignError::KeyStore(_) => "KEY_GENERATION_ERROR",
            BiosignError::BiometryLockout { .. } => "biometry_lockout",
            BiosignError::AuthenticationError { .. } => "AUTHENTICATION_ERROR",
            BiosignError::Signing(_) => "SIGNING_FAILED",
        }
    }
}

/// Secure key store errors.
#[derive(Error, Debug)]
pub enum KeyStoreError {
    /// Keypair generation failed.
    #[error("key generation failed: {reason}")]
    GenerationFailed { reason: String },

    /// No key material under the requested alias.
    #[error("no key found under alias {alias}")]
    KeyUnavailable { alias: String },
}

/// Errors from the biometric-bound signing context.
#[derive(Error, Debug)]
pub enum SigningContextError {
    /// The digest/sign step failed after authentication succeeded.
    #[error("signature finalization failed: {reason}")]
    FinalizeFailed { reason: String },

    /// Platform reported success but did not hand back the bound context.
    #[error("platform did not return the bound signing context")]
    ContextNotReturned,
}
