//! Multipart upload payloads.

use std::fmt;
use std::path::Path;

/// Multipart form field the upload endpoint reads the file from.
pub const IMAGE_FIELD: &str = "image";

/// MIME type used when none is supplied or inferred.
pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

/// An image file to send to the upload endpoint.
///
/// # Example
///
/// ```rust
/// use lottery_admin::ImageUpload;
///
/// let upload = ImageUpload::new("banner.png", vec![0x89, b'P', b'N', b'G'])
///     .mime_type("image/png");
///
/// assert_eq!(upload.file_name(), "banner.png");
/// assert_eq!(upload.len(), 4);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ImageUpload {
    file_name: String,
    bytes: Vec<u8>,
    mime_type: String,
}

impl ImageUpload {
    /// Creates an upload from in-memory bytes.
    ///
    /// The MIME type is inferred from the file extension and falls back to
    /// `application/octet-stream`.
    #[must_use]
    pub fn new(file_name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        let file_name = file_name.into();
        let mime_type = mime_for_name(&file_name).to_string();
        Self {
            file_name,
            bytes: bytes.into(),
            mime_type,
        }
    }

    /// Reads an upload from disk.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the file cannot be read.
    pub async fn from_path(path: impl AsRef<Path>) -> std::io::Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map_or_else(|| "upload".to_string(), |n| n.to_string_lossy().into_owned());
        Ok(Self::new(file_name, bytes))
    }

    /// Overrides the MIME type.
    #[must_use]
    pub fn mime_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = mime_type.into();
        self
    }

    /// Returns the file name sent with the part.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Returns the MIME type sent with the part.
    #[must_use]
    pub fn content_type(&self) -> &str {
        &self.mime_type
    }

    /// Returns the raw file bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the payload size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` for an empty payload.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Converts the upload into a single-part multipart form.
    pub(crate) fn into_form(self) -> Result<reqwest::multipart::Form, reqwest::Error> {
        let part = reqwest::multipart::Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)?;
        Ok(reqwest::multipart::Form::new().part(IMAGE_FIELD, part))
    }
}

// Keep file contents out of logs.
impl fmt::Debug for ImageUpload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageUpload")
            .field("file_name", &self.file_name)
            .field("mime_type", &self.mime_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

fn mime_for_name(name: &str) -> &'static str {
    let ext = name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase());

    match ext.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("svg") => "image/svg+xml",
        _ => DEFAULT_MIME_TYPE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_inferred_from_extension() {
        assert_eq!(ImageUpload::new("a.PNG", vec![]).content_type(), "image/png");
        assert_eq!(ImageUpload::new("a.jpeg", vec![]).content_type(), "image/jpeg");
        assert_eq!(ImageUpload::new("a.jpg", vec![]).content_type(), "image/jpeg");
        assert_eq!(ImageUpload::new("a.webp", vec![]).content_type(), "image/webp");
        assert_eq!(
            ImageUpload::new("noext", vec![]).content_type(),
            DEFAULT_MIME_TYPE
        );
    }

    #[test]
    fn test_mime_type_override() {
        let upload = ImageUpload::new("blob", vec![1, 2, 3]).mime_type("image/gif");
        assert_eq!(upload.content_type(), "image/gif");
        assert_eq!(upload.bytes(), &[1, 2, 3]);
    }

    #[test]
    fn test_debug_hides_bytes() {
        let upload = ImageUpload::new("a.png", vec![42; 16]);
        let debug = format!("{upload:?}");
        assert!(debug.contains("a.png"));
        assert!(debug.contains("len: 16"));
        assert!(!debug.contains("42"));
    }

    #[test]
    fn test_into_form_rejects_bad_mime() {
        let upload = ImageUpload::new("a.png", vec![1]).mime_type("not a mime");
        assert!(upload.into_form().is_err());
    }

    #[tokio::test]
    async fn test_from_path_missing_file() {
        let result = ImageUpload::from_path("/definitely/not/here.png").await;
        assert!(result.is_err());
    }
}
