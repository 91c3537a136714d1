//! In-memory handle for an image picked by the consuming app.

/// MIME type assumed when the picker does not report one.
pub const DEFAULT_IMAGE_MIME: &str = "image/jpeg";

/// An image file staged for multipart upload.
///
/// Each uploaded part carries a filename and MIME type alongside the raw
/// bytes; the car service rejects parts without them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            bytes,
        }
    }

    /// An image with the default JPEG MIME type.
    pub fn jpeg(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self::new(file_name, DEFAULT_IMAGE_MIME, bytes)
    }
}
