//! Secure key store port.

use crate::error::{KeyStoreError, SigningContextError};
use crate::model::{KeyAlias, KeySpec, PublicKey};

/// Capability to manage one named, authentication-gated asymmetric keypair.
///
/// Implementations keep the private half inside the custody boundary; only
/// public key material crosses this interface. Mutations are not reentrant-safe
/// against an in-flight ceremony using the same alias — callers must not delete
/// a key while a signing ceremony referencing it is pending.
pub trait KeyVault: Send + Sync {
    /// Signing context produced from the stored private key.
    type Context: SigningContext + Send;

    /// Whether a keypair exists under the alias. Never fails.
    fn contains(&self, alias: &KeyAlias) -> bool;

    /// Generate a keypair under the alias, bound to the spec's authentication
    /// policy, and return the encoded public key.
    ///
    /// An existing keypair under the same alias is overwritten; callers that
    /// need idempotence check [`contains`](Self::contains) first.
    fn generate(&self, alias: &KeyAlias, spec: &KeySpec) -> Result<PublicKey, KeyStoreError>;

    /// Remove the keypair under the alias, best-effort.
    ///
    /// Returns `true` if an entry was removed, `false` if absent or removal
    /// failed. Intentionally never raises: "key already gone" is a normal end
    /// state, and the safe default after a failed removal is to proceed as if
    /// no key exists.
    fn delete(&self, alias: &KeyAlias) -> bool;

    /// Initialize a signing context over the stored private key.
    ///
    /// Fails with [`KeyStoreError::KeyUnavailable`] when no key exists under
    /// the alias (including platform-side invalidation after re-enrollment).
    fn signing_context(&self, alias: &KeyAlias) -> Result<Self::Context, KeyStoreError>;
}

/// A pending signing operation awaiting biometric authorization.
///
/// One context authorizes exactly one signature; finalization consumes it.
pub trait SigningContext {
    /// Digest and sign the payload, returning raw signature bytes.
    fn finalize(self, payload: &[u8]) -> Result<Vec<u8>, SigningContextError>;
}
