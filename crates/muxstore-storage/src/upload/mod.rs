//! Video upload pipeline stages.
//!
//! Each stage consumes the previous stage's output, so the order
//! session → transfer → resolve is enforced by the types: a
//! [`CompletedUpload`] only exists after a successful transfer, and an
//! [`UploadSession`] is moved into the transfer that uses it.

pub mod resolver;
pub mod session;
pub mod transfer;

pub use resolver::{AssetResolver, RemoteAsset};
pub use session::{create_session, SessionSettings, UploadSession};
pub use transfer::{
    ByteStream, CompletedUpload, LocalSource, ReqwestTransport, StreamTransfer, UploadTransport,
};
