//! Upload descriptors handed over by the host.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// A file the host wants stored. Lives for the duration of one `save` call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDescriptor {
    /// Local filesystem location of the uploaded file
    pub path: PathBuf,
    /// Original file name as seen by the host
    pub name: String,
    /// Declared MIME type (e.g. "video/mp4")
    #[serde(rename = "type")]
    pub content_type: String,
    /// Target directory requested by the host. Unused by the Mux backend.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_dir: Option<String>,
}

impl AssetDescriptor {
    pub fn new(
        path: impl Into<PathBuf>,
        name: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            content_type: content_type.into(),
            target_dir: None,
        }
    }

    pub fn with_target_dir(mut self, target_dir: impl Into<String>) -> Self {
        self.target_dir = Some(target_dir.into());
        self
    }

    pub fn kind(&self) -> MediaKind {
        MediaKind::classify(&self.content_type)
    }
}

/// Which branch of the upload pipeline an asset takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    NonVideo,
}

impl MediaKind {
    /// Any type starting with `video/` is a video; everything else is not.
    pub fn classify(content_type: &str) -> Self {
        if content_type.starts_with("video/") {
            MediaKind::Video
        } else {
            MediaKind::NonVideo
        }
    }

    pub fn is_video(self) -> bool {
        self == MediaKind::Video
    }
}

/// Options passed by the host to `read`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadOptions {
    #[serde(default)]
    pub path: String,
}

impl ReadOptions {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
