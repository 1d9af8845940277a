//! Adapters - concrete implementations of ports (traits)
//!
//! Real targets back the ports with the OS keystore and biometric prompt.
//! The adapters here keep custody in-process so the full flow can run on
//! development machines and in tests.

mod scripted;
mod soft_vault;

pub use scripted::{ScriptedOutcome, ScriptedPlatform};
pub use soft_vault::{SoftSigningContext, SoftVault};
