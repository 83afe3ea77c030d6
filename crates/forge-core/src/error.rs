//! Error types for creation, build, and clone operations
//!
//! Two kinds cover the whole toolkit: a discriminator that resolves to
//! nothing, and a build extracted before its mandatory steps ran. Both are
//! local to a single call and are never retried.

/// Errors raised by creators, builders, and prototype registries
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreationError {
    /// No construction rule or exemplar is registered for the tag
    #[error("unknown variant: '{0}'")]
    UnknownVariant(String),

    /// A builder was asked to extract before a mandatory step ran
    #[error("incomplete build: step '{0}' has not run")]
    IncompleteBuild(&'static str),
}

impl CreationError {
    /// Create an unknown-variant error from any displayable tag
    pub fn unknown(tag: impl std::fmt::Display) -> Self {
        Self::UnknownVariant(tag.to_string())
    }
}

/// Result type alias for creation operations
pub type CreationResult<T> = Result<T, CreationError>;
