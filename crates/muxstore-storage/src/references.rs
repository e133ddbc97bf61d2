//! Mapping asset ids to the outward reference URLs.

use muxstore_core::{MuxConfig, Reference};

/// Builds manifest and thumbnail references from fixed route bases.
#[derive(Debug, Clone)]
pub struct ReferenceMapper {
    manifest_route_base: String,
    thumbnail_route_base: String,
}

impl ReferenceMapper {
    pub fn new(manifest_route_base: &str, thumbnail_route_base: &str) -> Self {
        Self {
            manifest_route_base: manifest_route_base.trim_end_matches('/').to_string(),
            thumbnail_route_base: thumbnail_route_base.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &MuxConfig) -> Self {
        Self::new(config.manifest_route_base(), config.thumbnail_route_base())
    }

    /// Reference for a non-video upload.
    ///
    /// Thumbnails are named `{asset_id}_...` by the host, so the asset id is
    /// everything before the first `_`, or the whole name. The id is not checked
    /// against Mux.
    pub fn thumbnail(&self, name: &str) -> Reference {
        Reference::from_route(&self.thumbnail_route_base, thumbnail_asset_id(name))
    }

    /// Reference for a resolved video asset.
    pub fn manifest(&self, asset_id: &str) -> Reference {
        debug_assert!(!asset_id.is_empty(), "manifest reference needs an asset id");
        Reference::from_route(&self.manifest_route_base, asset_id)
    }
}

/// Asset id encoded in a thumbnail file name.
pub fn thumbnail_asset_id(name: &str) -> &str {
    name.split_once('_').map_or(name, |(asset_id, _)| asset_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapper() -> ReferenceMapper {
        ReferenceMapper::new(
            "https://vigue.me/api/muxManifest",
            "https://vigue.me/api/muxThumbnail/",
        )
    }

    #[test]
    fn test_thumbnail_asset_id() {
        assert_eq!(thumbnail_asset_id("abc123_thumb.jpg"), "abc123");
        assert_eq!(thumbnail_asset_id("abc_def_ghi.png"), "abc");
        assert_eq!(thumbnail_asset_id("noUnderscore"), "noUnderscore");
        assert_eq!(thumbnail_asset_id("_leading.jpg"), "");
    }

    #[test]
    fn test_thumbnail_reference() {
        assert_eq!(
            mapper().thumbnail("abc123_thumb.jpg").as_str(),
            "https://vigue.me/api/muxThumbnail/abc123"
        );
        assert_eq!(
            mapper().thumbnail("noUnderscore").as_str(),
            "https://vigue.me/api/muxThumbnail/noUnderscore"
        );
    }

    #[test]
    fn test_manifest_reference() {
        assert_eq!(
            mapper().manifest("a1").as_str(),
            "https://vigue.me/api/muxManifest/a1"
        );
    }
}
