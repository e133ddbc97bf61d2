use muxstore_core::{EncodingTier, MuxConfig, PlaybackPolicy};

use crate::mux::{CreateUploadRequest, MuxClient, NewAssetSettings};
use crate::traits::{StorageError, StorageResult};

/// A provisioned, single-use upload target.
///
/// Not `Clone`: the transfer takes it by value, so one session backs at most
/// one PUT.
#[derive(Debug)]
pub struct UploadSession {
    id: String,
    url: String,
}

impl UploadSession {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub(crate) fn into_parts(self) -> (String, String) {
        (self.id, self.url)
    }
}

/// Per-adapter settings sent with every new upload.
#[derive(Debug, Clone)]
pub struct SessionSettings {
    pub cors_origin: String,
    pub encoding_tier: EncodingTier,
    pub playback_policy: PlaybackPolicy,
}

impl SessionSettings {
    pub fn from_config(config: &MuxConfig) -> Self {
        Self {
            cors_origin: config.cors_origin().to_string(),
            encoding_tier: config.encoding_tier(),
            playback_policy: config.playback_policy(),
        }
    }

    fn to_request(&self) -> CreateUploadRequest {
        CreateUploadRequest {
            cors_origin: self.cors_origin.clone(),
            new_asset_settings: NewAssetSettings {
                playback_policy: vec![self.playback_policy],
                encoding_tier: self.encoding_tier,
            },
        }
    }
}

/// Ask Mux for a new direct upload. Called once per video save, never retried.
///
/// If a later stage fails, the session is left to expire on the Mux side.
pub async fn create_session(
    client: &MuxClient,
    settings: &SessionSettings,
) -> StorageResult<UploadSession> {
    let record = client.create_upload(&settings.to_request()).await.map_err(|e| {
        tracing::error!(error = %e, "Mux upload creation failed");
        e
    })?;

    let url = record.url.filter(|u| !u.is_empty()).ok_or_else(|| {
        StorageError::SessionCreationFailed(format!("Upload {} has no upload URL", record.id))
    })?;

    tracing::info!(upload_id = %record.id, upload_url = %url, "Mux upload created");

    Ok(UploadSession::new(record.id, url))
}
