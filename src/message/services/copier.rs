//! Message copy service.
//!
//! When a message moves between the legs of an exchange, the runtime copies
//! selected facets of the inbound message onto the outbound one. The copy is
//! facet-by-facet in a fixed order (properties, content, attachments,
//! security subject), stops at the first failure, and never rolls back facets
//! already applied; callers needing atomicity copy into a scratch message and
//! swap it in on success.

use super::materializer::ContentMaterializer;
use crate::message::domain::{BODY_PROPERTY, Exchange};
use crate::message::error::TransformationError;
use crate::message::ports::{MessageTransformer, NormalizedMessage};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace, warn};

/// Selects which facets a [`CopyTransformer`] transfers.
///
/// Every facet defaults to enabled, both in [`Default`] and when fields are
/// omitted from a serialised form. The selection is fixed once a transformer
/// is constructed with it.
///
/// # Examples
///
/// ```
/// use crossdock::message::services::CopyConfig;
///
/// let config = CopyConfig::all().with_content(false);
/// assert!(!config.content);
/// assert!(config.properties);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyConfig {
    /// Whether message properties are copied.
    #[serde(default = "enabled")]
    pub properties: bool,
    /// Whether payload content is copied.
    #[serde(default = "enabled")]
    pub content: bool,
    /// Whether attachments are copied.
    #[serde(default = "enabled")]
    pub attachments: bool,
    /// Whether the security subject is copied.
    #[serde(default = "enabled")]
    pub security_subject: bool,
}

const fn enabled() -> bool {
    true
}

impl CopyConfig {
    /// Configuration with every facet enabled.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            properties: true,
            content: true,
            attachments: true,
            security_subject: true,
        }
    }

    /// Returns the configuration with property copying set to `enabled`.
    #[must_use]
    pub const fn with_properties(mut self, enabled: bool) -> Self {
        self.properties = enabled;
        self
    }

    /// Returns the configuration with content copying set to `enabled`.
    #[must_use]
    pub const fn with_content(mut self, enabled: bool) -> Self {
        self.content = enabled;
        self
    }

    /// Returns the configuration with attachment copying set to `enabled`.
    #[must_use]
    pub const fn with_attachments(mut self, enabled: bool) -> Self {
        self.attachments = enabled;
        self
    }

    /// Returns the configuration with security-subject copying set to
    /// `enabled`.
    #[must_use]
    pub const fn with_security_subject(mut self, enabled: bool) -> Self {
        self.security_subject = enabled;
        self
    }
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self::all()
    }
}

/// Copies the facets of one normalized message onto another.
///
/// The transformer holds its facet selection immutably; distinct selections
/// are distinct transformer values. A single transformer may serve any number
/// of exchanges concurrently.
///
/// # Examples
///
/// ```
/// use crossdock::message::adapters::memory::InMemoryMessage;
/// use crossdock::message::domain::{Content, Exchange, ExchangePattern};
/// use crossdock::message::ports::NormalizedMessage;
/// use crossdock::message::services::CopyTransformer;
/// use mockable::DefaultClock;
///
/// let clock = DefaultClock;
/// let exchange = Exchange::new(ExchangePattern::InOut, &clock);
/// let from = InMemoryMessage::new()
///     .with_content(Content::text(r#"{"order": 42}"#))
///     .with_property("channel", "orders");
///
/// let to: InMemoryMessage = CopyTransformer::shared()
///     .transform_new(&exchange, &from)
///     .expect("copy succeeds");
/// assert!(to.content().is_some());
/// assert!(to.property("channel").is_some());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct CopyTransformer {
    config: CopyConfig,
    materializer: ContentMaterializer,
}

impl CopyTransformer {
    /// Creates a transformer that copies every facet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            config: CopyConfig::all(),
            materializer: ContentMaterializer::new(),
        }
    }

    /// Creates a transformer with the given facet selection.
    #[must_use]
    pub const fn with_config(config: CopyConfig) -> Self {
        Self {
            config,
            materializer: ContentMaterializer::new(),
        }
    }

    /// Returns the facet selection this transformer applies.
    #[must_use]
    pub const fn config(&self) -> &CopyConfig {
        &self.config
    }

    /// Returns the process-wide transformer with every facet enabled.
    ///
    /// The instance is constructed in a `const` context and cannot be
    /// reconfigured; endpoints needing a different facet selection construct
    /// their own transformer.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: CopyTransformer = CopyTransformer::new();
        &SHARED
    }

    /// Copies the enabled facets of `from` onto `to`.
    ///
    /// Facets are applied in a fixed order: properties, content, attachments,
    /// security subject. The source message is never mutated. The first
    /// failing facet aborts the copy; facets already applied remain on `to`.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] attributed to `exchange` if content
    /// materialization fails or the destination rejects an attachment.
    #[instrument(skip_all, fields(exchange = %exchange.id()))]
    pub fn transform<F, T>(
        &self,
        exchange: &Exchange,
        from: &F,
        to: &mut T,
    ) -> Result<(), TransformationError>
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + ?Sized,
    {
        if self.config.properties {
            Self::copy_properties(from, to);
            trace!("copied properties");
        }
        if self.config.content {
            self.copy_content(from, to)
                .map_err(|err| attributed(exchange, err))?;
            trace!("copied content");
        }
        if self.config.attachments {
            Self::copy_attachments(from, to).map_err(|err| attributed(exchange, err))?;
            trace!("copied attachments");
        }
        if self.config.security_subject {
            Self::copy_security_subject(from, to);
            trace!("copied security subject");
        }
        Ok(())
    }

    /// Copies the enabled facets of `from` onto a freshly allocated message.
    ///
    /// This is the convenience entry point for runtimes that have no
    /// outbound message yet; it is the only place the core allocates one.
    /// Equivalent to allocating `T::default()` and calling
    /// [`transform`](Self::transform).
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] under the same conditions as
    /// [`transform`](Self::transform).
    pub fn transform_new<F, T>(
        &self,
        exchange: &Exchange,
        from: &F,
    ) -> Result<T, TransformationError>
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + Default,
    {
        let mut to = T::default();
        self.transform(exchange, from, &mut to)?;
        Ok(to)
    }

    /// Copies every property of `from` onto `to` except the reserved
    /// [`BODY_PROPERTY`] marker.
    ///
    /// Values transfer as shared references. Properties already on `to` under
    /// other names are left in place; a property of the same name is
    /// replaced.
    pub fn copy_properties<F, T>(from: &F, to: &mut T)
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + ?Sized,
    {
        for name in from.property_names() {
            if name == BODY_PROPERTY {
                continue;
            }
            if let Some(value) = from.property(&name) {
                to.set_property(&name, value);
            }
        }
    }

    /// Copies every attachment handle of `from` onto `to`.
    ///
    /// The handles are shared, not duplicated: both messages end up
    /// referencing the same attachment data.
    ///
    /// # Errors
    ///
    /// Returns a [`TransformationError`] wrapping the destination's
    /// [`AttachmentError`](crate::message::ports::AttachmentError) if `to`
    /// rejects an attachment.
    pub fn copy_attachments<F, T>(from: &F, to: &mut T) -> Result<(), TransformationError>
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + ?Sized,
    {
        for name in from.attachment_names() {
            if let Some(attachment) = from.attachment(&name) {
                to.add_attachment(&name, attachment).map_err(|err| {
                    TransformationError::with_cause(
                        format!("failed to add attachment '{name}' to the destination message"),
                        err,
                    )
                })?;
            }
        }
        Ok(())
    }

    /// Transfers the security subject reference of `from` onto `to`.
    ///
    /// A source without a subject clears the destination's subject, keeping
    /// the two messages' security context identical.
    pub fn copy_security_subject<F, T>(from: &F, to: &mut T)
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + ?Sized,
    {
        to.set_security_subject(from.security_subject());
    }

    /// Materializes the source content and assigns it to the destination,
    /// overwriting whatever content the destination held. A content-less
    /// source clears the destination's content.
    fn copy_content<F, T>(&self, from: &F, to: &mut T) -> Result<(), TransformationError>
    where
        F: NormalizedMessage + ?Sized,
        T: NormalizedMessage + ?Sized,
    {
        let materialized = from
            .content()
            .map(|content| self.materializer.materialize(content))
            .transpose()?;
        to.set_content(materialized);
        Ok(())
    }
}

impl MessageTransformer for CopyTransformer {
    fn transform(
        &self,
        exchange: &Exchange,
        from: &dyn NormalizedMessage,
        to: &mut dyn NormalizedMessage,
    ) -> Result<(), TransformationError> {
        // Resolves to the inherent method; inherent impls take precedence.
        Self::transform(self, exchange, from, to)
    }
}

/// Wraps a facet failure with the exchange it occurred on.
fn attributed(exchange: &Exchange, cause: TransformationError) -> TransformationError {
    warn!(error = %cause, "message copy failed");
    TransformationError::with_cause(
        format!("message copy failed for exchange {}", exchange.id()),
        cause,
    )
}

// Note: Unit tests for CopyTransformer are located in
// src/message/tests/copier_tests.rs with comprehensive coverage
// using rstest fixtures.
