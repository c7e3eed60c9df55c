//! Image Upload Adapter Contract
//!
//! Port to the external image-hosting service. The workflow hands the
//! adapter raw bytes plus a content-type hint and gets back a durable URL;
//! the real SDK-backed adapter lives outside this crate.

use async_trait::async_trait;

/// A binary attachment received with a request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub data: Vec<u8>,
    /// Filename as declared by the client
    pub filename: String,
    /// Content-type hint as declared by the client
    pub content_type: Option<String>,
}

/// Upload options understood by the hosting service
#[derive(Debug, Clone, Default)]
pub struct UploadOptions<'a> {
    /// Remote folder to organize uploads under
    pub folder: Option<&'a str>,
    /// Target raster format to normalize to (e.g. "jpg")
    pub format: Option<&'a str>,
    /// Convert all pages of a multi-page document
    pub all_pages: bool,
}

/// A successfully hosted image
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Durable URL of the hosted file
    pub url: String,
}

/// Opaque upload failure
#[derive(Debug, Clone, thiserror::Error)]
#[error("upload failed: {0}")]
pub struct UploadError(pub String);

/// Object-storage port for image uploads
#[async_trait]
pub trait ImageUploader: Send + Sync {
    /// Upload a file and return its durable URL
    async fn upload(
        &self,
        file: &UploadedFile,
        opts: UploadOptions<'_>,
    ) -> Result<UploadedImage, UploadError>;
}
