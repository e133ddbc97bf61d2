pub mod asset;
pub mod reference;
pub mod settings;

pub use asset::{AssetDescriptor, MediaKind, ReadOptions};
pub use reference::Reference;
pub use settings::{EncodingTier, PlaybackPolicy};
