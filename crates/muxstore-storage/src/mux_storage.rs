use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use muxstore_core::{AssetDescriptor, MediaKind, MuxConfig, ReadOptions, Reference};
use std::sync::Arc;

use crate::mux::MuxClient;
use crate::references::ReferenceMapper;
use crate::serve::not_found_router;
use crate::traits::{StorageAdapter, StorageError, StorageResult};
use crate::upload::{
    create_session, AssetResolver, LocalSource, ReqwestTransport, SessionSettings,
    StreamTransfer, UploadTransport,
};

/// Mux-backed storage adapter.
///
/// Videos are uploaded to Mux and referenced through the manifest route;
/// everything else is treated as a thumbnail of an existing asset. Holds no
/// mutable state, so concurrent saves are independent.
#[derive(Clone)]
pub struct MuxStorage {
    client: MuxClient,
    settings: SessionSettings,
    transfer: StreamTransfer,
    resolver: AssetResolver,
    references: ReferenceMapper,
}

impl MuxStorage {
    /// Create a new MuxStorage instance streaming uploads through `reqwest`.
    ///
    /// Fails with `MissingCredential` if the token id or secret is missing.
    pub fn new(config: &MuxConfig) -> StorageResult<Self> {
        let client = MuxClient::from_config(config)?;
        let transport = Arc::new(ReqwestTransport::new(client.http().clone()));
        Ok(Self::with_parts(config, client, transport))
    }

    /// Create a MuxStorage instance with a custom upload transport.
    pub fn with_transport(
        config: &MuxConfig,
        transport: Arc<dyn UploadTransport>,
    ) -> StorageResult<Self> {
        let client = MuxClient::from_config(config)?;
        Ok(Self::with_parts(config, client, transport))
    }

    fn with_parts(
        config: &MuxConfig,
        client: MuxClient,
        transport: Arc<dyn UploadTransport>,
    ) -> Self {
        MuxStorage {
            client,
            settings: SessionSettings::from_config(config),
            transfer: StreamTransfer::new(transport, config.upload_chunk_size()),
            resolver: AssetResolver::new(config.resolve_policy()),
            references: ReferenceMapper::from_config(config),
        }
    }

    async fn save_video(&self, asset: &AssetDescriptor) -> StorageResult<Reference> {
        let start = std::time::Instant::now();

        let source = LocalSource::open(&asset.path).await?;
        let session = create_session(&self.client, &self.settings).await?;
        let upload_id = session.id().to_string();

        let upload = self
            .transfer
            .transfer(session, source, &asset.content_type)
            .await?;
        let remote = self.resolver.resolve(&self.client, &upload).await?;
        let reference = self.references.manifest(&remote.id);

        tracing::info!(
            name = %asset.name,
            upload_id = %upload_id,
            asset_id = %remote.id,
            size_bytes = upload.size_bytes(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Mux video save successful"
        );

        Ok(reference)
    }
}

#[async_trait]
impl StorageAdapter for MuxStorage {
    async fn save(&self, asset: &AssetDescriptor) -> StorageResult<Reference> {
        match asset.kind() {
            MediaKind::NonVideo => {
                let reference = self.references.thumbnail(&asset.name);
                tracing::debug!(
                    name = %asset.name,
                    content_type = %asset.content_type,
                    reference = %reference,
                    "Mapped non-video upload to thumbnail"
                );
                Ok(reference)
            }
            MediaKind::Video => self.save_video(asset).await,
        }
    }

    async fn delete(&self, _name: &str, _target_dir: Option<&str>) -> StorageResult<bool> {
        Ok(true)
    }

    async fn exists(&self, _name: &str, _target_dir: Option<&str>) -> StorageResult<bool> {
        Ok(false)
    }

    async fn read(&self, options: &ReadOptions) -> StorageResult<Bytes> {
        Err(StorageError::Unreadable(options.path.clone()))
    }

    fn serve(&self) -> Router {
        not_found_router()
    }
}
