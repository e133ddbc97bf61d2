//! Configuration module
//!
//! Adapter settings are resolved once, at construction, into an immutable
//! [`MuxConfig`]. Inputs come from explicit [`MuxOptions`] (what the host passes
//! in) or from the process environment.
//!
//! Precedence for the encoding tier: `ENCODING_TIER` environment variable, then
//! the explicit option, then the default (`smart`). Every other setting uses the
//! explicit option when present and falls back to the default.

use std::env;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::str::FromStr;
use std::time::Duration;

use crate::constants::*;
use crate::models::{EncodingTier, PlaybackPolicy};

/// Explicit adapter options. Unset fields fall back to defaults.
#[derive(Clone, Default)]
pub struct MuxOptions {
    pub token_id: Option<String>,
    pub token_secret: Option<String>,
    pub encoding_tier: Option<EncodingTier>,
    pub playback_policy: Option<PlaybackPolicy>,
    pub cors_origin: Option<String>,
    pub api_base_url: Option<String>,
    pub manifest_route_base: Option<String>,
    pub thumbnail_route_base: Option<String>,
    pub upload_chunk_size: Option<usize>,
    pub resolve_attempts: Option<u32>,
    pub resolve_interval: Option<Duration>,
}

impl MuxOptions {
    pub fn new(token_id: impl Into<String>, token_secret: impl Into<String>) -> Self {
        Self {
            token_id: Some(token_id.into()),
            token_secret: Some(token_secret.into()),
            ..Default::default()
        }
    }
}

impl Debug for MuxOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MuxOptions")
            .field("token_id", &self.token_id)
            .field("token_secret", &self.token_secret.as_ref().map(|_| "<redacted>"))
            .field("encoding_tier", &self.encoding_tier)
            .field("playback_policy", &self.playback_policy)
            .field("cors_origin", &self.cors_origin)
            .field("api_base_url", &self.api_base_url)
            .field("manifest_route_base", &self.manifest_route_base)
            .field("thumbnail_route_base", &self.thumbnail_route_base)
            .field("upload_chunk_size", &self.upload_chunk_size)
            .field("resolve_attempts", &self.resolve_attempts)
            .field("resolve_interval", &self.resolve_interval)
            .finish()
    }
}

/// How the asset id is read back after a transfer.
///
/// `attempts = 1` performs a single retrieval and fails with `AssetNotReady`
/// if Mux has not attached an asset yet. Higher values re-read the upload,
/// sleeping `interval` between reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvePolicy {
    pub attempts: u32,
    pub interval: Duration,
}

impl ResolvePolicy {
    pub fn fail_fast() -> Self {
        Self {
            attempts: 1,
            interval: DEFAULT_RESOLVE_INTERVAL,
        }
    }
}

impl Default for ResolvePolicy {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_RESOLVE_ATTEMPTS,
            interval: DEFAULT_RESOLVE_INTERVAL,
        }
    }
}

/// Resolved adapter configuration.
#[derive(Clone)]
pub struct MuxConfig {
    token_id: Option<String>,
    token_secret: Option<String>,
    encoding_tier: EncodingTier,
    playback_policy: PlaybackPolicy,
    cors_origin: String,
    api_base_url: String,
    manifest_route_base: String,
    thumbnail_route_base: String,
    upload_chunk_size: usize,
    resolve_policy: ResolvePolicy,
}

impl MuxConfig {
    /// Load configuration from the process environment (and `.env`, if present).
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        let lookup = |key: &str| env::var(key).ok();
        let options = options_from_lookup(&lookup)?;
        Self::from_options_with_env(options, lookup)
    }

    /// Resolve explicit options, applying the `ENCODING_TIER` override from the
    /// process environment.
    pub fn from_options(options: MuxOptions) -> Result<Self, anyhow::Error> {
        Self::from_options_with_env(options, |key| env::var(key).ok())
    }

    /// Resolve explicit options against an arbitrary environment lookup.
    pub fn from_options_with_env<F>(options: MuxOptions, lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let encoding_tier = match non_empty(lookup(ENV_ENCODING_TIER)) {
            Some(raw) => raw.parse()?,
            None => options.encoding_tier.unwrap_or_default(),
        };

        let config = MuxConfig {
            token_id: options.token_id,
            token_secret: options.token_secret,
            encoding_tier,
            playback_policy: options.playback_policy.unwrap_or_default(),
            cors_origin: options
                .cors_origin
                .unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            api_base_url: options
                .api_base_url
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            manifest_route_base: options
                .manifest_route_base
                .unwrap_or_else(|| DEFAULT_MANIFEST_ROUTE_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            thumbnail_route_base: options
                .thumbnail_route_base
                .unwrap_or_else(|| DEFAULT_THUMBNAIL_ROUTE_BASE.to_string())
                .trim_end_matches('/')
                .to_string(),
            upload_chunk_size: options
                .upload_chunk_size
                .unwrap_or(DEFAULT_UPLOAD_CHUNK_SIZE),
            resolve_policy: ResolvePolicy {
                attempts: options.resolve_attempts.unwrap_or(DEFAULT_RESOLVE_ATTEMPTS),
                interval: options.resolve_interval.unwrap_or(DEFAULT_RESOLVE_INTERVAL),
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate non-credential settings. Credentials are checked when the
    /// remote client is built.
    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.upload_chunk_size == 0 {
            return Err(anyhow::anyhow!("Upload chunk size must be greater than 0"));
        }
        if self.resolve_policy.attempts == 0 {
            return Err(anyhow::anyhow!("Resolve attempts must be at least 1"));
        }
        if self.api_base_url.is_empty() {
            return Err(anyhow::anyhow!("Mux API base URL must not be empty"));
        }
        Ok(())
    }

    pub fn token_id(&self) -> Option<&str> {
        self.token_id.as_deref()
    }

    pub fn token_secret(&self) -> Option<&str> {
        self.token_secret.as_deref()
    }

    pub fn encoding_tier(&self) -> EncodingTier {
        self.encoding_tier
    }

    pub fn playback_policy(&self) -> PlaybackPolicy {
        self.playback_policy
    }

    pub fn cors_origin(&self) -> &str {
        &self.cors_origin
    }

    pub fn api_base_url(&self) -> &str {
        &self.api_base_url
    }

    pub fn manifest_route_base(&self) -> &str {
        &self.manifest_route_base
    }

    pub fn thumbnail_route_base(&self) -> &str {
        &self.thumbnail_route_base
    }

    pub fn upload_chunk_size(&self) -> usize {
        self.upload_chunk_size
    }

    pub fn resolve_policy(&self) -> ResolvePolicy {
        self.resolve_policy
    }
}

impl Debug for MuxConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("MuxConfig")
            .field("token_id", &self.token_id)
            .field("token_secret", &self.token_secret.as_ref().map(|_| "<redacted>"))
            .field("encoding_tier", &self.encoding_tier)
            .field("playback_policy", &self.playback_policy)
            .field("cors_origin", &self.cors_origin)
            .field("api_base_url", &self.api_base_url)
            .field("manifest_route_base", &self.manifest_route_base)
            .field("thumbnail_route_base", &self.thumbnail_route_base)
            .field("upload_chunk_size", &self.upload_chunk_size)
            .field("resolve_policy", &self.resolve_policy)
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, anyhow::Error>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(key)) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e)),
        None => Ok(None),
    }
}

fn options_from_lookup<F>(lookup: &F) -> Result<MuxOptions, anyhow::Error>
where
    F: Fn(&str) -> Option<String>,
{
    Ok(MuxOptions {
        token_id: non_empty(lookup(ENV_TOKEN_ID)),
        token_secret: non_empty(lookup(ENV_TOKEN_SECRET)),
        // ENCODING_TIER is applied as an override in from_options_with_env
        encoding_tier: None,
        playback_policy: parse_var(lookup, ENV_PLAYBACK_POLICY)?,
        cors_origin: non_empty(lookup(ENV_CORS_ORIGIN)),
        api_base_url: non_empty(lookup(ENV_API_BASE_URL)),
        manifest_route_base: non_empty(lookup(ENV_MANIFEST_ROUTE_BASE)),
        thumbnail_route_base: non_empty(lookup(ENV_THUMBNAIL_ROUTE_BASE)),
        upload_chunk_size: parse_var(lookup, ENV_UPLOAD_CHUNK_SIZE)?,
        resolve_attempts: parse_var(lookup, ENV_RESOLVE_ATTEMPTS)?,
        resolve_interval: parse_var::<u64, _>(lookup, ENV_RESOLVE_INTERVAL_MS)?
            .map(Duration::from_millis),
    })
}
