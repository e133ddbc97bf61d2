//! Storage adapter trait
//!
//! This module defines the capability set the host expects from a storage
//! adapter, and the errors those operations can return.

use async_trait::async_trait;
use axum::Router;
use bytes::Bytes;
use muxstore_core::{AssetDescriptor, ReadOptions, Reference};
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("No Mux {0} provided")]
    MissingCredential(&'static str),

    #[error("Upload session creation failed: {0}")]
    SessionCreationFailed(String),

    #[error("Upload transfer failed{}: {message}", status_suffix(.status))]
    TransferFailed {
        status: Option<u16>,
        message: String,
    },

    #[error("No asset ID found for upload {upload_id}")]
    AssetNotReady { upload_id: String },

    #[error("Asset lookup failed: {0}")]
    ResolveFailed(String),

    #[error("{0} not readable")]
    Unreadable(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

fn status_suffix(status: &Option<u16>) -> String {
    match status {
        Some(code) => format!(" with status {}", code),
        None => String::new(),
    }
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage adapter trait
///
/// Mirrors the host's storage contract: `save` is the only operation with real
/// behaviour for a write-only backend. The remaining operations exist so the
/// host can treat every adapter uniformly.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Store an asset and return the reference URL the host should persist.
    ///
    /// A failed save never yields a partial reference.
    async fn save(&self, asset: &AssetDescriptor) -> StorageResult<Reference>;

    /// Delete a stored file. Returns whether the host should treat it as deleted.
    async fn delete(&self, name: &str, target_dir: Option<&str>) -> StorageResult<bool>;

    /// Check whether a file with this name is already stored.
    async fn exists(&self, name: &str, target_dir: Option<&str>) -> StorageResult<bool>;

    /// Read stored bytes back.
    async fn read(&self, options: &ReadOptions) -> StorageResult<Bytes>;

    /// Request handler the host mounts for serving stored files.
    fn serve(&self) -> Router;

    /// Map a reference URL back to a host path (its path component).
    fn url_to_path(&self, url: &str) -> StorageResult<String> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| StorageError::InvalidUrl(format!("{}: {}", url, e)))?;
        Ok(parsed.path().to_string())
    }
}
