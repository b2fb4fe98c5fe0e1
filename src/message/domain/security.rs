//! Security context attached to normalized messages.

use serde::{Deserialize, Serialize};

/// The authenticated security context of a message.
///
/// Carries the principals established when the message entered the runtime.
/// Messages hold the subject behind a shared handle (`Arc<SecuritySubject>`);
/// copying it between messages preserves identical semantics and lifetime.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::SecuritySubject;
///
/// let subject = SecuritySubject::new("cn=order-service")
///     .with_principal("role=submitter");
/// assert_eq!(subject.principals.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecuritySubject {
    /// The authenticated principals, in the order they were established.
    pub principals: Vec<String>,
}

impl SecuritySubject {
    /// Creates a subject with a single principal.
    #[must_use]
    pub fn new(principal: impl Into<String>) -> Self {
        Self {
            principals: vec![principal.into()],
        }
    }

    /// Adds a further principal to the subject.
    #[must_use]
    pub fn with_principal(mut self, principal: impl Into<String>) -> Self {
        self.principals.push(principal.into());
        self
    }
}
