//! The authentication ceremony: one biometric challenge run to completion.
//!
//! A ceremony is a single-resolution flow: `Idle -> Presented -> terminal`.
//! No state persists across invocations and the returned future resolves
//! exactly once, whatever the outcome. A failed match is terminal — re-running
//! is the caller's decision, never an automatic retry.

use thiserror::Error;
use tracing::{debug, warn};

use crate::error::BiosignError;
use crate::model::{CeremonyOutcome, PromptSpec};
use crate::ports::{PromptRunner, SurfaceProbe};

/// Failure to even present the ceremony; no hardware was engaged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CeremonyError {
    #[error("no foreground interactive surface to host the prompt")]
    NoInteractionSurface,
}

impl From<CeremonyError> for BiosignError {
    fn from(err: CeremonyError) -> Self {
        match err {
            CeremonyError::NoInteractionSurface => BiosignError::NoInteractionSurface,
        }
    }
}

/// Run one biometric ceremony, optionally bound to a signing context.
///
/// Checks for a foreground surface before engaging any biometric hardware;
/// then presents the platform prompt and resolves to exactly one
/// [`CeremonyOutcome`]. On success with a bound context, the outcome carries
/// the context back evaluated under the biometric assertion.
pub async fn run<P>(
    platform: &P,
    spec: &PromptSpec,
    context: Option<<P as PromptRunner>::Context>,
) -> Result<CeremonyOutcome<<P as PromptRunner>::Context>, CeremonyError>
where
    P: SurfaceProbe + PromptRunner,
{
    if !platform.has_foreground_surface() {
        return Err(CeremonyError::NoInteractionSurface);
    }

    debug!(
        title = spec.title(),
        bound = context.is_some(),
        "presenting biometric prompt"
    );
    let outcome = platform.authenticate(spec, context).await;

    match &outcome {
        CeremonyOutcome::Succeeded { context } => {
            debug!(bound = context.is_some(), "ceremony succeeded")
        }
        CeremonyOutcome::Cancelled => debug!("ceremony cancelled by user"),
        CeremonyOutcome::FailedMatch => debug!("presented biometric did not match"),
        CeremonyOutcome::Locked { permanent } => warn!(permanent, "biometry locked out"),
        CeremonyOutcome::Errored { message } => warn!(%message, "ceremony errored"),
    }

    Ok(outcome)
}
