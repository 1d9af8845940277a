//! Scripted biometric platform for development and tests.
//!
//! Custody is delegated to [`SoftVault`]; the prompt resolves to a scripted
//! outcome instead of consulting a sensor. Outcomes are queued FIFO and an
//! empty queue approves, so the happy path needs no scripting. The capability
//! code, foreground-surface flag, and an optional prompt delay are all
//! settable to drive availability, surface-gating, and concurrency scenarios.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::adapters::{SoftSigningContext, SoftVault};
use crate::error::KeyStoreError;
use crate::model::{
    BiometryType, CapabilityCode, CeremonyOutcome, KeyAlias, KeySpec, PromptSpec, PublicKey,
};
use crate::ports::{CapabilityProbe, KeyVault, PromptRunner, SurfaceProbe};

/// Scripted resolution for one prompt invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedOutcome {
    Approve,
    /// Approve but resolve without handing back the bound context, as a
    /// faulty platform would. Drives the post-authentication signing-fault
    /// classification.
    ApproveDroppingContext,
    Cancel,
    FailMatch,
    Lockout { permanent: bool },
    Error(String),
}

/// Full [`crate::ports::BiometricPlatform`] backed by scripts and a soft vault.
pub struct ScriptedPlatform {
    vault: SoftVault,
    capability: Mutex<CapabilityCode>,
    biometry: Mutex<BiometryType>,
    surface: AtomicBool,
    outcomes: Mutex<VecDeque<ScriptedOutcome>>,
    prompt_delay: Mutex<Option<Duration>>,
    prompts_presented: AtomicUsize,
}

impl ScriptedPlatform {
    /// Platform with a foreground surface, enrolled strong biometrics, and an
    /// empty outcome queue (prompts approve).
    pub fn new() -> Self {
        Self {
            vault: SoftVault::new(),
            capability: Mutex::new(CapabilityCode::Success),
            biometry: Mutex::new(BiometryType::Biometrics),
            surface: AtomicBool::new(true),
            outcomes: Mutex::new(VecDeque::new()),
            prompt_delay: Mutex::new(None),
            prompts_presented: AtomicUsize::new(0),
        }
    }

    /// Queue the resolution for the next prompt invocation.
    pub fn script(&self, outcome: ScriptedOutcome) {
        if let Ok(mut outcomes) = self.outcomes.lock() {
            outcomes.push_back(outcome);
        }
    }

    pub fn set_capability(&self, code: CapabilityCode) {
        if let Ok(mut capability) = self.capability.lock() {
            *capability = code;
        }
    }

    pub fn set_biometry_type(&self, biometry_type: BiometryType) {
        if let Ok(mut biometry) = self.biometry.lock() {
            *biometry = biometry_type;
        }
    }

    pub fn set_surface(&self, present: bool) {
        self.surface.store(present, Ordering::SeqCst);
    }

    /// Delay applied before each prompt resolves; lets tests overlap ceremonies.
    pub fn set_prompt_delay(&self, delay: Duration) {
        if let Ok(mut prompt_delay) = self.prompt_delay.lock() {
            *prompt_delay = Some(delay);
        }
    }

    /// How many prompts have actually been presented.
    pub fn prompts_presented(&self) -> usize {
        self.prompts_presented.load(Ordering::SeqCst)
    }
}

impl Default for ScriptedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl SurfaceProbe for ScriptedPlatform {
    fn has_foreground_surface(&self) -> bool {
        self.surface.load(Ordering::SeqCst)
    }
}

impl CapabilityProbe for ScriptedPlatform {
    fn capability(&self) -> CapabilityCode {
        self.capability
            .lock()
            .map(|capability| *capability)
            .unwrap_or(CapabilityCode::Other(-1))
    }

    fn biometry_type(&self) -> BiometryType {
        self.biometry
            .lock()
            .map(|biometry| *biometry)
            .unwrap_or(BiometryType::Biometrics)
    }
}

impl KeyVault for ScriptedPlatform {
    type Context = SoftSigningContext;

    fn contains(&self, alias: &KeyAlias) -> bool {
        self.vault.contains(alias)
    }

    fn generate(&self, alias: &KeyAlias, spec: &KeySpec) -> Result<PublicKey, KeyStoreError> {
        self.vault.generate(alias, spec)
    }

    fn delete(&self, alias: &KeyAlias) -> bool {
        self.vault.delete(alias)
    }

    fn signing_context(&self, alias: &KeyAlias) -> Result<Self::Context, KeyStoreError> {
        self.vault.signing_context(alias)
    }
}

#[async_trait]
impl PromptRunner for ScriptedPlatform {
    type Context = SoftSigningContext;

    async fn authenticate(
        &self,
        spec: &PromptSpec,
        context: Option<Self::Context>,
    ) -> CeremonyOutcome<Self::Context> {
        self.prompts_presented.fetch_add(1, Ordering::SeqCst);

        let delay = self.prompt_delay.lock().map(|delay| *delay).unwrap_or(None);
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let next = self
            .outcomes
            .lock()
            .map(|mut outcomes| outcomes.pop_front())
            .unwrap_or(None)
            .unwrap_or(ScriptedOutcome::Approve);

        debug!(title = spec.title(), outcome = ?next, "scripted prompt resolving");
        match next {
            ScriptedOutcome::Approve => CeremonyOutcome::Succeeded { context },
            ScriptedOutcome::ApproveDroppingContext => {
                CeremonyOutcome::Succeeded { context: None }
            }
            ScriptedOutcome::Cancel => CeremonyOutcome::Cancelled,
            ScriptedOutcome::FailMatch => CeremonyOutcome::FailedMatch,
            ScriptedOutcome::Lockout { permanent } => CeremonyOutcome::Locked { permanent },
            ScriptedOutcome::Error(message) => CeremonyOutcome::Errored { message },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::vault_contract;

    contract_tests_for!(
        scripted_platform_vault_contract,
        make = ScriptedPlatform::new,
        tests = {
            test_contains_false_before_generate => vault_contract::test_contains_false_before_generate,
            test_generate_then_contains => vault_contract::test_generate_then_contains,
            test_delete_absent_returns_false => vault_contract::test_delete_absent_returns_false,
            test_delete_removes_key => vault_contract::test_delete_removes_key,
            test_signing_context_key_unavailable => vault_contract::test_signing_context_key_unavailable,
        }
    );

    #[tokio::test]
    async fn test_outcomes_resolve_in_fifo_order() {
        let platform = ScriptedPlatform::new();
        platform.script(ScriptedOutcome::Cancel);
        platform.script(ScriptedOutcome::FailMatch);
        let spec = PromptSpec::new("Confirm").unwrap();

        assert!(matches!(
            platform.authenticate(&spec, None).await,
            CeremonyOutcome::Cancelled
        ));
        assert!(matches!(
            platform.authenticate(&spec, None).await,
            CeremonyOutcome::FailedMatch
        ));
        // Queue drained: defaults to approval.
        assert!(matches!(
            platform.authenticate(&spec, None).await,
            CeremonyOutcome::Succeeded { .. }
        ));
        assert_eq!(platform.prompts_presented(), 3);
    }

    #[tokio::test]
    async fn test_bound_context_returned_on_approval() {
        let platform = ScriptedPlatform::new();
        let alias = KeyAlias::default();
        platform.generate(&alias, &KeySpec::default()).unwrap();
        let context = platform.signing_context(&alias).unwrap();
        let spec = PromptSpec::new("Confirm").unwrap();

        let outcome = platform.authenticate(&spec, Some(context)).await;
        assert!(matches!(
            outcome,
            CeremonyOutcome::Succeeded { context: Some(_) }
        ));
    }

    #[test]
    fn test_capability_settable() {
        let platform = ScriptedPlatform::new();
        assert_eq!(platform.capability(), CapabilityCode::Success);
        platform.set_capability(CapabilityCode::NoneEnrolled);
        assert_eq!(platform.capability(), CapabilityCode::NoneEnrolled);
    }
}
