//! Sections L and M: site photos, video and supporting documents.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Maximum number of site photos per inspection.
pub const MAX_SITE_PHOTOS: usize = 10;

/// A file attached to an inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MediaFile {
    /// File name as uploaded.
    pub name: String,
    /// Storage path or URL.
    pub path: String,
    /// When the file was attached.
    pub upload_date: Option<DateTime<Utc>>,
}

impl MediaFile {
    /// Creates an attachment stamped with the current time.
    #[must_use]
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            upload_date: Some(Utc::now()),
        }
    }
}

/// Attachments of an inspection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteMedia {
    /// Site photos, at most [`MAX_SITE_PHOTOS`].
    pub site_photos: Vec<MediaFile>,
    /// Walk-through video.
    #[serde(deserialize_with = "video_slot")]
    pub site_video: Option<MediaFile>,
    /// Supporting documents.
    pub uploaded_documents: Vec<MediaFile>,
}

/// The backend stores an empty list when no video was attached.
fn video_slot<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<MediaFile>, D::Error> {
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Object(_) => serde_json::from_value(value)
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
