//! Key generation parameters and exported public key material.

use std::fmt;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

/// Asymmetric signing algorithm for the managed keypair.
///
/// Fixed digest and padding; the signing context built from the stored key
/// always uses the combination named here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAlgorithm {
    /// RSA-2048 with PKCS#1 v1.5 padding over a SHA-256 digest.
    Rsa2048Pkcs1Sha256,
}

impl KeyAlgorithm {
    pub fn key_bits(self) -> usize {
        match self {
            KeyAlgorithm::Rsa2048Pkcs1Sha256 => 2048,
        }
    }
}

impl fmt::Display for KeyAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyAlgorithm::Rsa2048Pkcs1Sha256 => f.write_str("RSA-2048/PKCS1/SHA-256"),
        }
    }
}

impl Default for KeyAlgorithm {
    fn default() -> Self {
        KeyAlgorithm::Rsa2048Pkcs1Sha256
    }
}

/// Platform classification of biometric spoof resistance.
///
/// Only `Strong` is acceptable for key-bound operations; convenience-class
/// sensors must not unlock the private key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BiometricClass {
    Strong,
}

/// Authentication policy attached to the generated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthPolicy {
    /// Minimum biometric class required per signing operation.
    pub class: BiometricClass,
    /// Whether enrolling a new biometric invalidates the key.
    pub invalidated_by_enrollment: bool,
}

impl Default for AuthPolicy {
    fn default() -> Self {
        Self {
            class: BiometricClass::Strong,
            invalidated_by_enrollment: true,
        }
    }
}

/// Full parameter set for key generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeySpec {
    pub algorithm: KeyAlgorithm,
    pub policy: AuthPolicy,
}

/// Exported public half of the managed keypair, as SPKI DER.
///
/// The private half never leaves the key store; this is the only key material
/// callers ever see.
#[derive(Clone, PartialEq, Eq)]
pub struct PublicKey {
    der: Vec<u8>,
}

impl PublicKey {
    pub fn from_spki_der(der: Vec<u8>) -> Self {
        Self { der }
    }

    pub fn as_der(&self) -> &[u8] {
        &self.der
    }

    /// Base64 (standard alphabet, unwrapped) encoding of the SPKI DER.
    pub fn to_base64(&self) -> String {
        BASE64.encode(&self.der)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({} bytes)", self.der.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_spec_is_strong_rsa() {
        let spec = KeySpec::default();
        assert_eq!(spec.algorithm, KeyAlgorithm::Rsa2048Pkcs1Sha256);
        assert_eq!(spec.policy.class, BiometricClass::Strong);
        assert!(spec.policy.invalidated_by_enrollment);
    }

    #[test]
    fn test_algorithm_key_bits() {
        assert_eq!(KeyAlgorithm::Rsa2048Pkcs1Sha256.key_bits(), 2048);
    }

    #[test]
    fn test_public_key_base64() {
        let key = PublicKey::from_spki_der(vec![1, 2, 3]);
        assert_eq!(key.to_base64(), "AQID");
        assert_eq!(key.as_der(), &[1, 2, 3]);
    }
}
