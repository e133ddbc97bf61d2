use crate::{MuxStorage, StorageAdapter, StorageResult};
use muxstore_core::MuxConfig;
use std::sync::Arc;

/// Create the storage adapter described by `config`.
///
/// Fails with `MissingCredential` if the Mux token pair is incomplete.
pub fn create_storage(config: &MuxConfig) -> StorageResult<Arc<dyn StorageAdapter>> {
    let storage = MuxStorage::new(config)?;
    Ok(Arc::new(storage))
}
