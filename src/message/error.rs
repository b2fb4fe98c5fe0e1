//! Error types for message normalization.
//!
//! Uses `thiserror` with a single failure kind: whatever goes wrong while
//! copying a message (draining a stream, parsing its bytes, folding a
//! traversal, or a destination rejecting an attachment) surfaces as a
//! [`TransformationError`] carrying the underlying cause in its `source`
//! chain.

use thiserror::Error;

/// Convenience alias for results of normalization operations.
pub type TransformationResult<T> = Result<T, TransformationError>;

/// A message transformation failed.
///
/// The display message describes what the transformation was doing; the
/// underlying failure, when there is one, is available through
/// [`std::error::Error::source`].
///
/// # Examples
///
/// ```
/// use crossdock::message::error::TransformationError;
/// use std::error::Error;
///
/// let cause = std::io::Error::other("connection reset");
/// let err = TransformationError::with_cause("failed to drain stream-backed content", cause);
/// assert_eq!(err.to_string(), "failed to drain stream-backed content");
/// assert!(err.source().is_some());
/// ```
#[derive(Debug, Error)]
#[error("{context}")]
pub struct TransformationError {
    context: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl TransformationError {
    /// Creates a transformation error with no underlying cause.
    #[must_use]
    pub fn new(context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            cause: None,
        }
    }

    /// Creates a transformation error wrapping an underlying cause.
    #[must_use]
    pub fn with_cause(
        context: impl Into<String>,
        cause: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            context: context.into(),
            cause: Some(cause.into()),
        }
    }

    /// Returns the description of what the transformation was doing.
    #[must_use]
    pub fn context(&self) -> &str {
        &self.context
    }
}
