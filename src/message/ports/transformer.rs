//! Port definition for message transformers.
//!
//! Transformers are the steps a runtime composes into a normalization
//! pipeline. The contract is deliberately narrow: given an exchange for
//! context, read one message and write another.

use super::message::NormalizedMessage;
use crate::message::domain::Exchange;
use crate::message::error::TransformationError;

/// A transformation step applied to messages travelling through an exchange.
pub trait MessageTransformer {
    /// Transforms the message `from` into the message `to`.
    ///
    /// The exchange is read for error attribution only; implementations must
    /// not mutate the source message.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] if the transformation cannot be
    /// applied.
    fn transform(
        &self,
        exchange: &Exchange,
        from: &dyn NormalizedMessage,
        to: &mut dyn NormalizedMessage,
    ) -> Result<(), TransformationError>;
}
