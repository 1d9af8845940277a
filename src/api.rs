//! Stable caller-facing contract.
//!
//! [`Biometrics`] wraps a platform implementation and exposes the operations
//! an application binds to. Result payloads are serde-serializable so a
//! bridging layer can pass them through unchanged.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use serde::Serialize;

use crate::error::{BiosignError, BiosignResult};
use crate::model::{KeyAlias, KeySpec, PromptSpec, SigningRequest};
use crate::ports::BiometricPlatform;
use crate::use_cases;

/// Biometric availability as reported to the application.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SensorStatus {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub biometry_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedKeys {
    /// Base64-encoded SPKI DER of the generated public key.
    pub public_key: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysExist {
    pub keys_exist: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeysDeleted {
    pub keys_deleted: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureReceipt {
    pub success: bool,
    /// Base64-encoded signature bytes, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptReceipt {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Options for [`Biometrics::create_signature`].
#[derive(Debug, Clone)]
pub struct SignatureOptions {
    pub prompt_message: String,
    pub payload: Vec<u8>,
    pub cancel_button_text: Option<String>,
}

/// Options for [`Biometrics::simple_prompt`].
#[derive(Debug, Clone)]
pub struct PromptOptions {
    pub prompt_message: String,
    pub cancel_button_text: Option<String>,
}

/// Entry point binding an application to a biometric platform.
///
/// Ceremony-running operations ([`create_signature`](Self::create_signature),
/// [`simple_prompt`](Self::simple_prompt)) are single-flight: the platform
/// prompt supports one presentation at a time, so a second invocation while
/// one is pending fails fast with [`BiosignError::CeremonyAlreadyActive`]
/// rather than queueing behind the visible prompt.
///
/// Key mutations are not serialized against in-flight ceremonies; callers
/// must not delete the key while a signing ceremony referencing it is
/// pending.
pub struct Biometrics<P> {
    platform: P,
    alias: KeyAlias,
    spec: KeySpec,
    ceremony_gate: tokio::sync::Mutex<()>,
}

impl<P> Biometrics<P>
where
    P: BiometricPlatform,
{
    /// Manage the default key alias on the given platform.
    pub fn new(platform: P) -> Self {
        Self::with_alias(platform, KeyAlias::default())
    }

    pub fn with_alias(platform: P, alias: KeyAlias) -> Self {
        Self {
            platform,
            alias,
            spec: KeySpec::default(),
            ceremony_gate: tokio::sync::Mutex::new(()),
        }
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Whether strong-class biometrics can run right now, with a classified
    /// reason when they cannot.
    pub fn is_sensor_available(&self) -> SensorStatus {
        let verdict = use_cases::sensor_availability(&self.platform);
        SensorStatus {
            available: verdict.available,
            biometry_type: Some(verdict.biometry_type.label().to_string()),
            error: verdict.reason.map(|r| r.display_label().to_string()),
        }
    }

    /// Generate the managed keypair and return its public half.
    pub fn create_keys(&self) -> BiosignResult<CreatedKeys> {
        let public_key = use_cases::create_keys(&self.platform, &self.alias, &self.spec)?;
        Ok(CreatedKeys {
            public_key: public_key.to_base64(),
        })
    }

    pub fn biometric_keys_exist(&self) -> KeysExist {
        KeysExist {
            keys_exist: use_cases::keys_exist(&self.platform, &self.alias),
        }
    }

    /// Always resolves; `keys_deleted` reports whether an entry was removed.
    pub fn delete_keys(&self) -> KeysDeleted {
        KeysDeleted {
            keys_deleted: use_cases::delete_keys(&self.platform, &self.alias),
        }
    }

    /// Run a biometric ceremony that authorizes one signature over the
    /// payload. User cancellation resolves with `success: false`, not an
    /// error.
    pub async fn create_signature(
        &self,
        options: SignatureOptions,
    ) -> BiosignResult<SignatureReceipt> {
        let prompt = build_prompt(&options.prompt_message, options.cancel_button_text.as_deref())?;
        let request = SigningRequest::new(prompt, options.payload)?;

        let _permit = self
            .ceremony_gate
            .try_lock()
            .map_err(|_| BiosignError::CeremonyAlreadyActive)?;

        match use_cases::create_signature(&self.platform, &self.alias, &request).await? {
            use_cases::SignatureOutcome::Signed { signature } => Ok(SignatureReceipt {
                success: true,
                signature: Some(BASE64.encode(signature)),
                error: None,
            }),
            use_cases::SignatureOutcome::Cancelled => Ok(SignatureReceipt {
                success: false,
                signature: None,
                error: Some("User cancellation".to_string()),
            }),
        }
    }

    /// Run an unbound ceremony (identity/liveness check, no signing).
    pub async fn simple_prompt(&self, options: PromptOptions) -> BiosignResult<PromptReceipt> {
        let prompt = build_prompt(&options.prompt_message, options.cancel_button_text.as_deref())?;

        let _permit = self
            .ceremony_gate
            .try_lock()
            .map_err(|_| BiosignError::CeremonyAlreadyActive)?;

        match use_cases::simple_prompt(&self.platform, &prompt).await? {
            use_cases::PromptOutcome::Confirmed => Ok(PromptReceipt {
                success: true,
                error: None,
            }),
            use_cases::PromptOutcome::Cancelled => Ok(PromptReceipt {
                success: false,
                error: Some("User cancellation".to_string()),
            }),
        }
    }
}

fn build_prompt(message: &str, cancel_label: Option<&str>) -> BiosignResult<PromptSpec> {
    let prompt = match cancel_label {
        Some(label) => PromptSpec::with_cancel_label(message, label)?,
        None => PromptSpec::new(message)?,
    };
    Ok(prompt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ScriptedOutcome, ScriptedPlatform};

    fn signature_options() -> SignatureOptions {
        SignatureOptions {
            prompt_message: "Sign in".to_string(),
            payload: b"challenge".to_vec(),
            cancel_button_text: None,
        }
    }

    #[tokio::test]
    async fn test_invalid_params_engage_no_hardware() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());
        biometrics.create_keys().unwrap();

        let result = biometrics
            .create_signature(SignatureOptions {
                prompt_message: String::new(),
                ..signature_options()
            })
            .await;
        assert_eq!(result.unwrap_err().code(), "INVALID_PARAMS");

        let result = biometrics
            .create_signature(SignatureOptions {
                payload: Vec::new(),
                ..signature_options()
            })
            .await;
        assert_eq!(result.unwrap_err().code(), "INVALID_PARAMS");

        assert_eq!(biometrics.platform().prompts_presented(), 0);
    }

    #[tokio::test]
    async fn test_cancellation_receipt() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());
        biometrics.create_keys().unwrap();
        biometrics.platform().script(ScriptedOutcome::Cancel);

        let receipt = biometrics
            .create_signature(signature_options())
            .await
            .unwrap();
        assert!(!receipt.success);
        assert_eq!(receipt.signature, None);
        assert_eq!(receipt.error.as_deref(), Some("User cancellation"));
    }

    #[tokio::test]
    async fn test_signature_receipt_is_base64() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());
        biometrics.create_keys().unwrap();

        let receipt = biometrics
            .create_signature(signature_options())
            .await
            .unwrap();
        assert!(receipt.success);
        let encoded = receipt.signature.expect("signature missing");
        let decoded = BASE64.decode(encoded).expect("not valid base64");
        // RSA-2048 signatures are exactly the modulus size.
        assert_eq!(decoded.len(), 256);
    }

    #[tokio::test]
    async fn test_keys_exist_follows_lifecycle() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());

        assert!(!biometrics.biometric_keys_exist().keys_exist);
        biometrics.create_keys().unwrap();
        assert!(biometrics.biometric_keys_exist().keys_exist);
        assert!(biometrics.delete_keys().keys_deleted);
        assert!(!biometrics.biometric_keys_exist().keys_exist);
        assert!(!biometrics.delete_keys().keys_deleted);
    }

    #[tokio::test]
    async fn test_simple_prompt_confirms() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());

        let receipt = biometrics
            .simple_prompt(PromptOptions {
                prompt_message: "Confirm".to_string(),
                cancel_button_text: Some("Dismiss".to_string()),
            })
            .await
            .unwrap();
        assert!(receipt.success);
        assert_eq!(receipt.error, None);
    }

    #[tokio::test]
    async fn test_simple_prompt_cancellation_receipt() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());
        biometrics.platform().script(ScriptedOutcome::Cancel);

        let receipt = biometrics
            .simple_prompt(PromptOptions {
                prompt_message: "Confirm".to_string(),
                cancel_button_text: None,
            })
            .await
            .unwrap();
        assert!(!receipt.success);
        assert_eq!(receipt.error.as_deref(), Some("User cancellation"));
    }

    #[test]
    fn test_sensor_status_carries_reason_when_unavailable() {
        let biometrics = Biometrics::new(ScriptedPlatform::new());
        biometrics
            .platform()
            .set_capability(crate::model::CapabilityCode::NoneEnrolled);

        let status = biometrics.is_sensor_available();
        assert!(!status.available);
        assert_eq!(status.error.as_deref(), Some("No biometric enrolled"));
        assert_eq!(status.biometry_type.as_deref(), Some("Biometrics"));
    }
}
