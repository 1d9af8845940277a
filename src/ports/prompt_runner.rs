//! Biometric prompt port.

use async_trait::async_trait;

use crate::model::{CeremonyOutcome, PromptSpec};

/// Capability to run one platform biometric prompt to completion.
///
/// The returned future resolves exactly once, for every outcome including
/// user cancellation. When a cryptographic context is supplied, the platform
/// guarantees it is evaluated under the specific biometric assertion that
/// succeeded — not merely permitted to run afterwards — and hands it back in
/// [`CeremonyOutcome::Succeeded`].
#[async_trait]
pub trait PromptRunner: Send + Sync {
    /// Cryptographic context the prompt can bind to.
    type Context: Send;

    async fn authenticate(
        &self,
        spec: &PromptSpec,
        context: Option<Self::Context>,
    ) -> CeremonyOutcome<Self::Context>;
}
