//! Wire types for the Mux direct-upload endpoints.

use muxstore_core::{EncodingTier, PlaybackPolicy};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Body of `POST /video/v1/uploads`.
#[derive(Debug, Clone, Serialize)]
pub struct CreateUploadRequest {
    pub cors_origin: String,
    pub new_asset_settings: NewAssetSettings,
}

/// Settings applied to the asset Mux creates once the upload lands.
#[derive(Debug, Clone, Serialize)]
pub struct NewAssetSettings {
    pub playback_policy: Vec<PlaybackPolicy>,
    pub encoding_tier: EncodingTier,
}

/// Every Mux response wraps its payload in `data`.
#[derive(Debug, Deserialize)]
pub(crate) struct DataEnvelope<T> {
    pub data: T,
}

/// A direct upload as returned by create and retrieve.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadRecord {
    pub id: String,
    /// Signed PUT target. Present on creation.
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: UploadStatus,
    /// Set once Mux has created an asset from the uploaded bytes.
    #[serde(default)]
    pub asset_id: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UploadStatus {
    Waiting,
    AssetCreated,
    Errored,
    Cancelled,
    TimedOut,
    #[default]
    #[serde(other)]
    Unknown,
}

impl UploadStatus {
    /// The upload will never produce an asset.
    pub fn is_terminal_failure(self) -> bool {
        matches!(
            self,
            UploadStatus::Errored | UploadStatus::Cancelled | UploadStatus::TimedOut
        )
    }
}

impl Display for UploadStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            UploadStatus::Waiting => write!(f, "waiting"),
            UploadStatus::AssetCreated => write!(f, "asset_created"),
            UploadStatus::Errored => write!(f, "errored"),
            UploadStatus::Cancelled => write!(f, "cancelled"),
            UploadStatus::TimedOut => write!(f, "timed_out"),
            UploadStatus::Unknown => write!(f, "unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_shape() {
        let request = CreateUploadRequest {
            cors_origin: "https://cms.example.com".to_string(),
            new_asset_settings: NewAssetSettings {
                playback_policy: vec![PlaybackPolicy::Public],
                encoding_tier: EncodingTier::Smart,
            },
        };

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "cors_origin": "https://cms.example.com",
                "new_asset_settings": {
                    "playback_policy": ["public"],
                    "encoding_tier": "smart"
                }
            })
        );
    }

    #[test]
    fn test_upload_record_without_asset() {
        let envelope: DataEnvelope<UploadRecord> = serde_json::from_value(json!({
            "data": {
                "id": "s1",
                "url": "https://storage.example.com/upload",
                "status": "waiting",
                "timeout": 3600
            }
        }))
        .unwrap();

        assert_eq!(envelope.data.id, "s1");
        assert_eq!(envelope.data.status, UploadStatus::Waiting);
        assert!(envelope.data.asset_id.is_none());
    }

    #[test]
    fn test_unknown_status_tolerated() {
        let record: UploadRecord = serde_json::from_value(json!({
            "id": "s1",
            "status": "something_new",
            "asset_id": "a1"
        }))
        .unwrap();

        assert_eq!(record.status, UploadStatus::Unknown);
        assert_eq!(record.asset_id.as_deref(), Some("a1"));
    }

    #[test]
    fn test_terminal_failures() {
        assert!(UploadStatus::Errored.is_terminal_failure());
        assert!(UploadStatus::Cancelled.is_terminal_failure());
        assert!(UploadStatus::TimedOut.is_terminal_failure());
        assert!(!UploadStatus::Waiting.is_terminal_failure());
        assert!(!UploadStatus::AssetCreated.is_terminal_failure());
    }
}
