//! Use cases (orchestration)
//!
//! This module contains use cases that orchestrate operations across ports.
//! They coordinate the key vault, capability probe, and ceremony to fulfill
//! the caller-facing contract.

mod availability;
mod create_signature;
mod keys;
mod simple_prompt;

pub use availability::sensor_availability;
pub use create_signature::{create_signature, SignatureOutcome};
pub use keys::{create_keys, delete_keys, keys_exist};
pub use simple_prompt::{simple_prompt, PromptOutcome};
