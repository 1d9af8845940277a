//! Simple-prompt use case: a liveness check with no cryptographic binding.

use crate::error::{BiosignError, BiosignResult};
use crate::logic::ceremony;
use crate::model::{CeremonyOutcome, PromptSpec};
use crate::ports::{PromptRunner, SurfaceProbe};

/// Resolution of an unbound ceremony that was actually presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptOutcome {
    Confirmed,
    Cancelled,
}

/// Run the ceremony without a signing context; same outcome classification as
/// signing, minus signature production.
pub async fn simple_prompt<P>(platform: &P, spec: &PromptSpec) -> BiosignResult<PromptOutcome>
where
    P: SurfaceProbe + PromptRunner,
{
    match ceremony::run(platform, spec, None).await? {
        CeremonyOutcome::Succeeded { .. } => Ok(PromptOutcome::Confirmed),
        CeremonyOutcome::Cancelled => Ok(PromptOutcome::Cancelled),
        CeremonyOutcome::Locked { permanent } => Err(BiosignError::BiometryLockout { permanent }),
        CeremonyOutcome::FailedMatch => Err(BiosignError::AuthenticationError {
            detail: "Authentication failed".to_string(),
        }),
        CeremonyOutcome::Errored { message } => {
            Err(BiosignError::AuthenticationError { detail: message })
        }
    }
}
