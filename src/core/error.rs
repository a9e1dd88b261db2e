use thiserror::Error;

/// Errors that can occur during invoice construction, computation or rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BijakError {
    /// A negative or non-finite quantity, price or charge reached the
    /// arithmetic component. Never clamped; the caller must refuse to render.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Invoice number sequencing error.
    #[error("numbering error: {0}")]
    Numbering(String),

    /// A bundled image asset (logo, icons, signatures) failed to decode.
    /// Fatal — the page header cannot be drawn without it.
    #[error("asset load error: {0}")]
    AssetLoad(String),

    /// Both the primary and the fallback PDF emission path failed.
    /// Carries the underlying cause of the last attempt.
    #[error("render error: {0}")]
    Render(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "billing.name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
