//! Muxstore Core Library
//!
//! This crate provides the configuration and the host-facing data model shared by
//! the Mux storage adapter and its command-line front end.

pub mod config;
pub mod constants;
pub mod models;

// Re-export commonly used types
pub use config::{MuxConfig, MuxOptions, ResolvePolicy};
pub use models::{
    AssetDescriptor, EncodingTier, MediaKind, PlaybackPolicy, ReadOptions, Reference,
};
