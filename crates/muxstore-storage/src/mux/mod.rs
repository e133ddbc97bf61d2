//! Minimal Mux Video API client: direct uploads only.

pub mod client;
pub mod types;

pub use client::MuxClient;
pub use types::{CreateUploadRequest, NewAssetSettings, UploadRecord, UploadStatus};
