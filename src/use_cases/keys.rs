//! Key lifecycle use cases.

use tracing::info;

use crate::error::BiosignResult;
use crate::model::{KeyAlias, KeySpec, PublicKey};
use crate::ports::KeyVault;

/// Generate the managed keypair and return its exported public key.
///
/// Regenerating under an existing alias overwrites the previous keypair.
pub fn create_keys<V>(vault: &V, alias: &KeyAlias, spec: &KeySpec) -> BiosignResult<PublicKey>
where
    V: KeyVault,
{
    let public_key = vault.generate(alias, spec)?;
    info!(%alias, algorithm = %spec.algorithm, "keypair created");
    Ok(public_key)
}

/// Whether the managed keypair currently exists. Never fails.
pub fn keys_exist<V>(vault: &V, alias: &KeyAlias) -> bool
where
    V: KeyVault,
{
    vault.contains(alias)
}

/// Remove the managed keypair, best-effort. Never fails; returns whether an
/// entry was actually removed.
pub fn delete_keys<V>(vault: &V, alias: &KeyAlias) -> bool
where
    V: KeyVault,
{
    vault.delete(alias)
}
