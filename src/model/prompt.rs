//! Prompt and signing request types with caller-error validation.
//!
//! Missing required fields are caller errors detected before any biometric
//! hardware is engaged, never mid-ceremony failures.

use thiserror::Error;

/// Text shown on the system-owned biometric prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    title: String,
    cancel_label: String,
}

impl PromptSpec {
    pub const DEFAULT_CANCEL_LABEL: &'static str = "Cancel";

    /// Build a prompt with the default cancel label.
    pub fn new(title: impl Into<String>) -> Result<Self, RequestError> {
        Self::with_cancel_label(title, Self::DEFAULT_CANCEL_LABEL)
    }

    pub fn with_cancel_label(
        title: impl Into<String>,
        cancel_label: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let title = title.into();
        if title.is_empty() {
            return Err(RequestError::MissingPromptText);
        }
        let cancel_label = cancel_label.into();
        let cancel_label = if cancel_label.is_empty() {
            Self::DEFAULT_CANCEL_LABEL.to_string()
        } else {
            cancel_label
        };
        Ok(Self {
            title,
            cancel_label,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn cancel_label(&self) -> &str {
        &self.cancel_label
    }
}

/// One signing request: prompt text plus the bytes to sign.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningRequest {
    prompt: PromptSpec,
    payload: Vec<u8>,
}

impl SigningRequest {
    pub fn new(prompt: PromptSpec, payload: impl Into<Vec<u8>>) -> Result<Self, RequestError> {
        let payload = payload.into();
        if payload.is_empty() {
            return Err(RequestError::MissingPayload);
        }
        Ok(Self { prompt, payload })
    }

    pub fn prompt(&self) -> &PromptSpec {
        &self.prompt
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestError {
    #[error("missing prompt message")]
    MissingPromptText,

    #[error("missing payload")]
    MissingPayload,
}
