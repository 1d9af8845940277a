use std::fmt;

use thiserror::Error;

/// Name under which the managed keypair lives in the platform key store.
///
/// At most one keypair exists per alias at any time; regenerating under the
/// same alias overwrites the previous entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyAlias(String);

impl KeyAlias {
    pub const DEFAULT: &'static str = "com.biosign.keys";

    pub fn new(name: impl Into<String>) -> Result<Self, AliasError> {
        let name = name.into();
        if name.is_empty() {
            return Err(AliasError::Empty);
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for KeyAlias {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for KeyAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AliasError {
    #[error("key alias must not be empty")]
    Empty,
}
