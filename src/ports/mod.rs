//! Ports (traits) for the platform biometric and key-custody primitives.
//!
//! The core depends on these abstractions, not concrete implementations.
//! Real targets back them with the OS keystore and biometric prompt; the
//! adapters module provides software implementations for development and
//! tests.

mod capability;
mod key_vault;
mod prompt_runner;
mod surface;


pub use capability::CapabilityProbe;
pub use key_vault::{KeyVault, SigningContext};
pub use prompt_runner::PromptRunner;
pub use surface::SurfaceProbe;

/// Combined trait for a full biometric platform.
///
/// Ties the prompt's bound context to the vault's signing context so a
/// ceremony can only authorize contexts produced by the same platform.
pub trait BiometricPlatform:
    SurfaceProbe + CapabilityProbe + KeyVault + PromptRunner<Context = <Self as KeyVault>::Context>
{
}

// Blanket implementation for types that implement all platform traits
impl<T> BiometricPlatform for T where
    T: SurfaceProbe
        + CapabilityProbe
        + KeyVault
        + PromptRunner<Context = <T as KeyVault>::Context>
{
}
