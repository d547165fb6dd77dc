//! # Media Library
//!
//! Uploaded assets live inline in the persisted media collection as data
//! URLs; there is no separate file tier, hence the upload cap. Deleting an
//! asset does not touch pages or records that still reference its URL.

use crate::error::{MediaError, StoreError};
use crate::keys::StoreKey;
use crate::store::ContentStore;
use base64::{engine::general_purpose, Engine as _};
use siteframe_schema::{Collection, MediaItem, MediaKind};
use std::path::Path;
use tracing::{info, warn};

/// A file handed to the media library
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaUpload {
    /// Build an upload from a file name and contents, guessing the mime type
    pub fn from_bytes(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime = guess_mime(&name).to_string();
        Self { name, mime, bytes }
    }
}

/// Mime type from a file extension
pub fn guess_mime(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "pdf" => "application/pdf",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}

/// Size label shown in the library, e.g. `"12.3 KB"`
pub fn size_label(bytes: usize) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

impl ContentStore {
    /// Store an upload and return the new library entry
    pub fn upload_media(&mut self, upload: MediaUpload) -> Result<MediaItem, StoreError> {
        let limit = self.options().max_upload_bytes;
        let size = upload.bytes.len();
        if size > limit {
            warn!(name = %upload.name, size, limit, "upload rejected");
            return Err(MediaError::TooLarge { size, limit }.into());
        }

        let url = format!(
            "data:{};base64,{}",
            upload.mime,
            general_purpose::STANDARD.encode(&upload.bytes)
        );
        let kind = if upload.mime.starts_with("image") {
            MediaKind::Image
        } else {
            MediaKind::Document
        };

        let item = MediaItem {
            id: self.ids.new_id("media-"),
            url,
            name: upload.name.clone(),
            kind,
            date: chrono::Local::now().format("%d/%m/%Y").to_string(),
            size: Some(size_label(size)),
        };
        info!(id = %item.id, name = %item.name, size, "media uploaded");

        self.snapshot_mut().media.insert(0, item.clone());
        self.log_activity("Upload", "Media", &format!("Uploaded {}", upload.name));
        self.commit(&[StoreKey::Collection(Collection::Media)])?;
        Ok(item)
    }

    pub fn delete_media(&mut self, id: &str) -> Result<(), StoreError> {
        self.remove::<MediaItem>(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guess_mime() {
        assert_eq!(guess_mime("logo.PNG"), "image/png");
        assert_eq!(guess_mime("brochure.pdf"), "application/pdf");
        assert_eq!(guess_mime("README"), "application/octet-stream");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(size_label(2048), "2.0 KB");
        assert_eq!(size_label(1000), "1.0 KB");
    }

    #[test]
    fn test_upload_builds_data_url() {
        let mut store = ContentStore::in_memory().unwrap();
        let item = store
            .upload_media(MediaUpload {
                name: "a.txt".to_string(),
                mime: "text/plain".to_string(),
                bytes: b"hi".to_vec(),
            })
            .unwrap();

        assert_eq!(item.url, "data:text/plain;base64,aGk=");
        assert_eq!(item.kind, MediaKind::Document);
        assert!(item.id.starts_with("media-"));
        assert_eq!(store.snapshot().media[0].id, item.id);
        assert_eq!(store.snapshot().activity[0].details, "Uploaded a.txt");
    }
}
