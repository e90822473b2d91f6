use serde::{Deserialize, Serialize};

/// Contents of a file attachment field.
///
/// Responses carry the file name (and, depending on the driver, a download
/// URL). Uploads set `body` to the base64 encoded file contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    pub filename: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl FileAttachment {
    pub fn new(filename: impl Into<String>) -> Self {
        Self {
            filename: filename.into(),
            body: None,
            url: None,
        }
    }

    /// Attach base64 encoded contents for upload.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}
