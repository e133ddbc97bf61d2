//! Muxstore Storage Library
//!
//! A write-only storage adapter that hands media uploads to Mux instead of
//! keeping them locally. Saving an asset returns a [`Reference`] URL that the
//! host later resolves into a playback manifest or a thumbnail.
//!
//! # Upload pipeline
//!
//! - Non-video assets: the asset id is taken from the file name (everything
//!   before the first `_`) and mapped to the thumbnail route. No network call.
//! - Video assets: open the local file, create a Mux direct upload, stream the
//!   file into the upload URL with a single PUT, read the upload back for its
//!   asset id, and map that id to the manifest route.
//!
//! Any failure on the video path is returned to the caller; nothing is retried
//! except the asset lookup, and only when the configured [`ResolvePolicy`]
//! allows more than one attempt.
//!
//! [`Reference`]: muxstore_core::Reference
//! [`ResolvePolicy`]: muxstore_core::ResolvePolicy

pub mod factory;
pub mod mux;
pub mod mux_storage;
pub mod references;
pub mod serve;
pub mod traits;
pub mod upload;

// Re-export commonly used types
pub use factory::create_storage;
pub use mux::MuxClient;
pub use mux_storage::MuxStorage;
pub use references::ReferenceMapper;
pub use traits::{StorageAdapter, StorageError, StorageResult};
pub use upload::{
    AssetResolver, ByteStream, CompletedUpload, LocalSource, RemoteAsset, ReqwestTransport,
    SessionSettings, StreamTransfer, UploadSession, UploadTransport,
};
