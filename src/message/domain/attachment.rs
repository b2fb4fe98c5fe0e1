//! Binary attachments carried alongside message content.

use serde::{Deserialize, Serialize};

/// A named binary attachment.
///
/// Messages hold attachments behind shared handles (`Arc<Attachment>`), so
/// copying an attachment between messages transfers the handle rather than
/// duplicating the bytes.
///
/// # Examples
///
/// ```
/// use crossdock::message::domain::Attachment;
///
/// let attachment = Attachment::new("application/pdf", vec![0x25, 0x50, 0x44, 0x46]);
/// assert_eq!(attachment.media_type, "application/pdf");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attachment {
    /// The MIME media type of the attachment.
    pub media_type: String,
    /// The raw attachment bytes.
    pub data: Vec<u8>,
}

impl Attachment {
    /// Creates a new attachment.
    #[must_use]
    pub fn new(media_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }
}
