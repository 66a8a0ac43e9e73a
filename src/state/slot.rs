/// File slots for the upload forms
///
/// A slot binds one selected image file to its in-memory preview. Both
/// ingestion modes (file picker and drag-and-drop) go through the same
/// `load_image` path, so validation cannot diverge between them.
use iced::widget::image::Handle;
use std::path::PathBuf;

use crate::api::ImagePart;
use crate::error::AppError;

/// An image file that passed validation: its bytes plus the sniffed
/// content type.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub path: PathBuf,
    pub bytes: Vec<u8>,
    pub mime: &'static str,
}

/// Read a file and verify it is an image.
///
/// Runs on the async executor so large files never block the UI thread.
/// Non-image files are rejected here, before they can reach a slot.
pub async fn load_image(path: PathBuf) -> Result<LoadedImage, AppError> {
    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|err| AppError::unexpected(format!("could not read {}: {err}", path.display())))?;

    let mime = sniff_image(&bytes)?;

    Ok(LoadedImage { path, bytes, mime })
}

/// Content-based image check on the file's magic bytes.
pub fn sniff_image(bytes: &[u8]) -> Result<&'static str, AppError> {
    match image::guess_format(bytes) {
        Ok(format) => Ok(format.to_mime_type()),
        Err(_) => Err(AppError::validation("Upload image file")),
    }
}

/// One file-input binding: the held file and its preview.
///
/// Invariant: a preview handle exists exactly when a file is held. `set`
/// replaces both together, dropping the superseded handle; `clear` drops
/// both.
#[derive(Debug, Clone, Default)]
pub struct UploadSlot {
    image: Option<LoadedImage>,
    preview: Option<Handle>,
}

impl UploadSlot {
    pub fn set(&mut self, loaded: LoadedImage) {
        self.preview = Some(Handle::from_bytes(loaded.bytes.clone()));
        self.image = Some(loaded);
    }

    pub fn clear(&mut self) {
        self.image = None;
        self.preview = None;
    }

    pub fn is_empty(&self) -> bool {
        self.image.is_none()
    }

    pub fn preview(&self) -> Option<&Handle> {
        self.preview.as_ref()
    }

    /// Copy of the held file in upload form, if any.
    pub fn part(&self) -> Option<ImagePart> {
        self.image
            .as_ref()
            .map(|img| ImagePart::new(&img.path, img.bytes.clone(), img.mime))
    }
}
