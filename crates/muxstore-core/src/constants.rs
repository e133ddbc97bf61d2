//! Defaults and environment variable names.

use std::time::Duration;

/// Base URL of the Mux REST API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.mux.com";

/// Origin allowed to PUT into a direct-upload URL.
pub const DEFAULT_CORS_ORIGIN: &str = "https://cms.vigue.me";

/// Route that resolves an asset id into a playback manifest.
pub const DEFAULT_MANIFEST_ROUTE_BASE: &str = "https://vigue.me/api/muxManifest";

/// Route that resolves an asset id into a thumbnail image.
pub const DEFAULT_THUMBNAIL_ROUTE_BASE: &str = "https://vigue.me/api/muxThumbnail";

/// Read size for streamed uploads (64 KiB).
pub const DEFAULT_UPLOAD_CHUNK_SIZE: usize = 64 * 1024;

/// One retrieval after the transfer, no polling.
pub const DEFAULT_RESOLVE_ATTEMPTS: u32 = 1;

pub const DEFAULT_RESOLVE_INTERVAL: Duration = Duration::from_secs(1);

pub const ENV_TOKEN_ID: &str = "MUX_TOKEN_ID";
pub const ENV_TOKEN_SECRET: &str = "MUX_TOKEN_SECRET";
/// Takes precedence over an explicitly configured encoding tier.
pub const ENV_ENCODING_TIER: &str = "ENCODING_TIER";
pub const ENV_PLAYBACK_POLICY: &str = "MUX_PLAYBACK_POLICY";
pub const ENV_CORS_ORIGIN: &str = "MUX_CORS_ORIGIN";
pub const ENV_API_BASE_URL: &str = "MUX_API_BASE_URL";
pub const ENV_MANIFEST_ROUTE_BASE: &str = "MUX_MANIFEST_ROUTE_BASE";
pub const ENV_THUMBNAIL_ROUTE_BASE: &str = "MUX_THUMBNAIL_ROUTE_BASE";
pub const ENV_UPLOAD_CHUNK_SIZE: &str = "MUX_UPLOAD_CHUNK_SIZE";
pub const ENV_RESOLVE_ATTEMPTS: &str = "MUX_RESOLVE_ATTEMPTS";
pub const ENV_RESOLVE_INTERVAL_MS: &str = "MUX_RESOLVE_INTERVAL_MS";
