use muxstore_core::ResolvePolicy;

use super::transfer::CompletedUpload;
use crate::mux::MuxClient;
use crate::traits::{StorageError, StorageResult};

/// The Mux asset created from an upload. Only the id is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteAsset {
    pub id: String,
    pub upload_id: String,
}

/// Reads the asset id back from a completed upload.
///
/// Asset creation on the Mux side can lag behind the upload confirmation. With
/// the default policy (one attempt) that lag surfaces as `AssetNotReady`; a
/// policy with more attempts re-reads the upload after each interval.
#[derive(Debug, Clone, Copy)]
pub struct AssetResolver {
    policy: ResolvePolicy,
}

impl AssetResolver {
    pub fn new(policy: ResolvePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ResolvePolicy {
        self.policy
    }

    pub async fn resolve(
        &self,
        client: &MuxClient,
        upload: &CompletedUpload,
    ) -> StorageResult<RemoteAsset> {
        let upload_id = upload.upload_id();
        let attempts = self.policy.attempts.max(1);

        for attempt in 1..=attempts {
            let record = client.retrieve_upload(upload_id).await.map_err(|e| {
                tracing::error!(error = %e, upload_id = %upload_id, attempt, "Mux upload lookup failed");
                e
            })?;

            if let Some(asset_id) = record.asset_id.filter(|id| !id.is_empty()) {
                tracing::info!(upload_id = %upload_id, asset_id = %asset_id, attempt, "Mux asset resolved");
                return Ok(RemoteAsset {
                    id: asset_id,
                    upload_id: upload_id.to_string(),
                });
            }

            if record.status.is_terminal_failure() {
                tracing::error!(upload_id = %upload_id, status = %record.status, "Mux upload will not produce an asset");
                return Err(StorageError::ResolveFailed(format!(
                    "Upload {} ended with status {}",
                    upload_id, record.status
                )));
            }

            if attempt < attempts {
                tracing::debug!(
                    upload_id = %upload_id,
                    attempt,
                    status = %record.status,
                    "Mux asset not ready, retrying"
                );
                tokio::time::sleep(self.policy.interval).await;
            }
        }

        tracing::warn!(upload_id = %upload_id, attempts, "No asset ID found");
        Err(StorageError::AssetNotReady {
            upload_id: upload_id.to_string(),
        })
    }
}
