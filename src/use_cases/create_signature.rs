//! Create-signature use case: the signing coordinator.
//!
//! Orchestrates key store and ceremony so a successful biometric assertion
//! authorizes exactly one signature over the request payload.

use tracing::info;

use crate::error::{BiosignError, BiosignResult, SigningContextError};
use crate::logic::ceremony;
use crate::model::{CeremonyOutcome, KeyAlias, SigningRequest};
use crate::ports::{BiometricPlatform, KeyVault, SigningContext, SurfaceProbe};

/// Resolution of a signing ceremony that was actually presented.
///
/// User cancellation is a normal resolution, not a fault.
#[derive(Debug)]
pub enum SignatureOutcome {
    Signed { signature: Vec<u8> },
    Cancelled,
}

/// Produce a biometric-authorized signature over the request payload.
///
/// Steps: resolve the interactive surface, initialize the signing context from
/// the stored key, run the ceremony bound to that context, finalize on
/// success. "Could not even attempt" conditions (no surface, key unavailable)
/// fail before any prompt is shown; a finalize failure after successful
/// authentication is classified separately from authentication failures.
pub async fn create_signature<P>(
    platform: &P,
    alias: &KeyAlias,
    request: &SigningRequest,
) -> BiosignResult<SignatureOutcome>
where
    P: BiometricPlatform,
{
    if !platform.has_foreground_surface() {
        return Err(BiosignError::NoInteractionSurface);
    }

    let context = platform.signing_context(alias)?;

    match ceremony::run(platform, request.prompt(), Some(context)).await? {
        CeremonyOutcome::Succeeded { context } => {
            let context = context.ok_or(SigningContextError::ContextNotReturned)?;
            let signature = context
                .finalize(request.payload())
                .map_err(BiosignError::Signing)?;
            info!(bytes = signature.len(), "signature finalized");
            Ok(SignatureOutcome::Signed { signature })
        }
        CeremonyOutcome::Cancelled => Ok(SignatureOutcome::Cancelled),
        CeremonyOutcome::Locked { permanent } => Err(BiosignError::BiometryLockout { permanent }),
        CeremonyOutcome::FailedMatch => Err(BiosignError::AuthenticationError {
            detail: "Authentication failed".to_string(),
        }),
        CeremonyOutcome::Errored { message } => {
            Err(BiosignError::AuthenticationError { detail: message })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{ScriptedOutcome, ScriptedPlatform};
    use crate::error::KeyStoreError;
    use crate::model::{KeySpec, PromptSpec};

    fn request() -> SigningRequest {
        let prompt = PromptSpec::new("Sign transaction").unwrap();
        SigningRequest::new(prompt, b"payload".to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_signs_after_approval() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();

        let outcome = create_signature(&platform, &alias, &request())
            .await
            .unwrap();
        assert!(matches!(outcome, SignatureOutcome::Signed { .. }));
    }

    #[tokio::test]
    async fn test_key_unavailable_fails_before_prompt() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();

        let result = create_signature(&platform, &alias, &request()).await;
        assert!(matches!(
            result.unwrap_err(),
            BiosignError::KeyStore(KeyStoreError::KeyUnavailable { .. })
        ));
        assert_eq!(platform.prompts_presented(), 0);
    }

    #[tokio::test]
    async fn test_no_surface_fails_before_key_load() {
        let platform = ScriptedPlatform::new();
        platform.set_surface(false);
        let alias = KeyAlias::default();

        let result = create_signature(&platform, &alias, &request()).await;
        assert!(matches!(
            result.unwrap_err(),
            BiosignError::NoInteractionSurface
        ));
        assert_eq!(platform.prompts_presented(), 0);
    }

    #[tokio::test]
    async fn test_cancellation_is_a_normal_resolution() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        platform.script(ScriptedOutcome::Cancel);

        let outcome = create_signature(&platform, &alias, &request())
            .await
            .unwrap();
        assert!(matches!(outcome, SignatureOutcome::Cancelled));
    }

    #[tokio::test]
    async fn test_lockout_classified_with_permanence() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        platform.script(ScriptedOutcome::Lockout { permanent: true });

        let result = create_signature(&platform, &alias, &request()).await;
        assert!(matches!(
            result.unwrap_err(),
            BiosignError::BiometryLockout { permanent: true }
        ));
    }

    #[tokio::test]
    async fn test_failed_match_maps_to_authentication_error() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        platform.script(ScriptedOutcome::FailMatch);

        let result = create_signature(&platform, &alias, &request()).await;
        assert!(matches!(
            result.unwrap_err(),
            BiosignError::AuthenticationError { .. }
        ));
    }

    #[tokio::test]
    async fn test_dropped_context_is_a_signing_fault_not_an_auth_failure() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        platform.script(ScriptedOutcome::ApproveDroppingContext);

        let err = create_signature(&platform, &alias, &request())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            BiosignError::Signing(SigningContextError::ContextNotReturned)
        ));
        assert_eq!(err.code(), "SIGNING_FAILED");
    }

    #[tokio::test]
    async fn test_platform_error_detail_passed_through() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        platform.script(ScriptedOutcome::Error("sensor detached".to_string()));

        let result = create_signature(&platform, &alias, &request()).await;
        match result.unwrap_err() {
            BiosignError::AuthenticationError { detail } => {
                assert_eq!(detail, "sensor detached")
            }
            other => panic!("expected error: {other:?}"),
        }
    }
}
