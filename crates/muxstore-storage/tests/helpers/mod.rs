#![allow(dead_code)]

use muxstore_core::{MuxConfig, MuxOptions};
use serde_json::json;
use std::path::PathBuf;
use tempfile::TempDir;

pub const TOKEN_ID: &str = "test-token-id";
pub const TOKEN_SECRET: &str = "test-token-secret";
/// `Basic base64("test-token-id:test-token-secret")`
pub const BASIC_AUTH: &str = "Basic dGVzdC10b2tlbi1pZDp0ZXN0LXRva2VuLXNlY3JldA==";

pub const MANIFEST_BASE: &str = "https://vigue.me/api/muxManifest";
pub const THUMBNAIL_BASE: &str = "https://vigue.me/api/muxThumbnail";

/// Options pointing the adapter at a mock Mux API.
pub fn test_options(api_base_url: &str) -> MuxOptions {
    MuxOptions {
        api_base_url: Some(api_base_url.to_string()),
        upload_chunk_size: Some(8),
        ..MuxOptions::new(TOKEN_ID, TOKEN_SECRET)
    }
}

/// Resolve options without consulting the process environment.
pub fn config_from(options: MuxOptions) -> MuxConfig {
    MuxConfig::from_options_with_env(options, |_| None).expect("valid test config")
}

pub fn test_config(api_base_url: &str) -> MuxConfig {
    config_from(test_options(api_base_url))
}

/// A video file on disk, removed when dropped.
pub struct TestVideo {
    _dir: TempDir,
    pub path: PathBuf,
    pub contents: String,
}

impl TestVideo {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("v.mp4");
        let contents = "fake mp4 payload for streaming tests".repeat(4);
        std::fs::write(&path, &contents).expect("Failed to write test video");
        Self {
            _dir: dir,
            path,
            contents,
        }
    }
}

impl Default for TestVideo {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body for `POST /video/v1/uploads`.
pub fn upload_created(id: &str, url: &str) -> String {
    json!({
        "data": {
            "id": id,
            "url": url,
            "status": "waiting",
            "timeout": 3600,
            "cors_origin": "https://cms.vigue.me",
            "new_asset_settings": {
                "playback_policies": ["public"],
                "encoding_tier": "smart"
            }
        }
    })
    .to_string()
}

/// Response body for `GET /video/v1/uploads/{id}`.
pub fn upload_record(id: &str, status: &str, asset_id: Option<&str>) -> String {
    let mut data = json!({
        "id": id,
        "status": status,
        "timeout": 3600
    });
    if let Some(asset_id) = asset_id {
        data["asset_id"] = json!(asset_id);
    }
    json!({ "data": data }).to_string()
}
