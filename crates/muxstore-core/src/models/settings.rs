use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Quality/cost tier requested when Mux creates the asset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingTier {
    Baseline,
    #[default]
    Smart,
}

impl FromStr for EncodingTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "baseline" => Ok(EncodingTier::Baseline),
            "smart" => Ok(EncodingTier::Smart),
            _ => Err(anyhow::anyhow!("Invalid encoding tier: {}", s)),
        }
    }
}

impl Display for EncodingTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            EncodingTier::Baseline => write!(f, "baseline"),
            EncodingTier::Smart => write!(f, "smart"),
        }
    }
}

/// Playback policy attached to newly created assets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackPolicy {
    #[default]
    Public,
    Signed,
}

impl FromStr for PlaybackPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "public" => Ok(PlaybackPolicy::Public),
            "signed" => Ok(PlaybackPolicy::Signed),
            _ => Err(anyhow::anyhow!("Invalid playback policy: {}", s)),
        }
    }
}

impl Display for PlaybackPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            PlaybackPolicy::Public => write!(f, "public"),
            PlaybackPolicy::Signed => write!(f, "signed"),
        }
    }
}
