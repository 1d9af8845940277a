//! In-process software key vault.
//!
//! Implements the key store port with real RSA-2048 PKCS#1 v1.5 / SHA-256
//! keys held in memory. Custody is NOT hardware-isolated here: this adapter
//! exists so the signing flow can run end-to-end on development machines and
//! in tests. Production targets must back [`KeyVault`] with the platform
//! keystore, which keeps the private key inside its secure-execution boundary.

use std::collections::HashMap;
use std::sync::RwLock;

use rsa::pkcs8::EncodePublicKey;
use rsa::signature::{SignatureEncoding, Signer};
use rsa::RsaPrivateKey;
use sha2::Sha256;
use tracing::{debug, info};

use crate::error::{KeyStoreError, SigningContextError};
use crate::model::{KeyAlias, KeySpec, PublicKey};
use crate::ports::{KeyVault, SigningContext};

/// Software-backed key vault keyed by alias.
#[derive(Debug, Default)]
pub struct SoftVault {
    keys: RwLock<HashMap<KeyAlias, RsaPrivateKey>>,
}

impl SoftVault {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyVault for SoftVault {
    type Context = SoftSigningContext;

    fn contains(&self, alias: &KeyAlias) -> bool {
        self.keys
            .read()
            .map(|keys| keys.contains_key(alias))
            .unwrap_or(false)
    }

    fn generate(&self, alias: &KeyAlias, spec: &KeySpec) -> Result<PublicKey, KeyStoreError> {
        let bits = match spec.algorithm {
            crate::model::KeyAlgorithm::Rsa2048Pkcs1Sha256 => spec.algorithm.key_bits(),
        };

        let mut rng = rand::thread_rng();
        let private_key = RsaPrivateKey::new(&mut rng, bits).map_err(|e| {
            KeyStoreError::GenerationFailed {
                reason: e.to_string(),
            }
        })?;

        let spki = private_key
            .to_public_key()
            .to_public_key_der()
            .map_err(|e| KeyStoreError::GenerationFailed {
                reason: format!("public key encoding failed: {e}"),
            })?;

        let mut keys = self
            .keys
            .write()
            .map_err(|_| KeyStoreError::GenerationFailed {
                reason: "key store lock poisoned".to_string(),
            })?;
        // Platform semantics: regenerating under an existing alias overwrites.
        let replaced = keys.insert(alias.clone(), private_key).is_some();

        info!(%alias, replaced, "generated keypair");
        Ok(PublicKey::from_spki_der(spki.as_bytes().to_vec()))
    }

    fn delete(&self, alias: &KeyAlias) -> bool {
        let removed = self
            .keys
            .write()
            .map(|mut keys| keys.remove(alias).is_some())
            .unwrap_or(false);

        debug!(%alias, removed, "delete requested");
        removed
    }

    fn signing_context(&self, alias: &KeyAlias) -> Result<Self::Context, KeyStoreError> {
        let private_key = self
            .keys
            .read()
            .ok()
            .and_then(|keys| keys.get(alias).cloned())
            .ok_or_else(|| KeyStoreError::KeyUnavailable {
                alias: alias.to_string(),
            })?;

        Ok(SoftSigningContext {
            key: rsa::pkcs1v15::SigningKey::<Sha256>::new(private_key),
        })
    }
}

/// Pending PKCS#1 v1.5 / SHA-256 signing operation over a vault key.
pub struct SoftSigningContext {
    key: rsa::pkcs1v15::SigningKey<Sha256>,
}

impl std::fmt::Debug for SoftSigningContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SoftSigningContext([REDACTED])")
    }
}

impl SigningContext for SoftSigningContext {
    fn finalize(self, payload: &[u8]) -> Result<Vec<u8>, SigningContextError> {
        let signature =
            self.key
                .try_sign(payload)
                .map_err(|e| SigningContextError::FinalizeFailed {
                    reason: e.to_string(),
                })?;
        Ok(signature.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::vault_contract;

    contract_tests_for!(
        soft_vault_contract,
        make = SoftVault::new,
        tests = {
            test_contains_false_before_generate => vault_contract::test_contains_false_before_generate,
            test_generate_then_contains => vault_contract::test_generate_then_contains,
            test_delete_absent_returns_false => vault_contract::test_delete_absent_returns_false,
            test_delete_removes_key => vault_contract::test_delete_removes_key,
            test_generate_overwrites_existing => vault_contract::test_generate_overwrites_existing,
            test_signing_context_key_unavailable => vault_contract::test_signing_context_key_unavailable,
            test_context_signature_verifies => vault_contract::test_context_signature_verifies,
        }
    );
}
