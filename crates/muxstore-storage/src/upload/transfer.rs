//! Streamed PUT of a local file into an upload session.
//!
//! The file is read through a `ReaderStream` and handed to the transport as a
//! pull-based body: the next chunk is only read from disk when the network side
//! asks for it, so memory use is bounded by the chunk size rather than the file
//! size.

use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE};
use reqwest::{Body, Client};
use std::io;
use std::path::{Path, PathBuf};
use std::pin::Pin;
use std::sync::Arc;
use tokio::fs::File;
use tokio_util::io::ReaderStream;

use super::session::UploadSession;
use crate::traits::{StorageError, StorageResult};

/// Request body handed to an [`UploadTransport`].
pub type ByteStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send + Sync>>;

/// Sends one streamed PUT and reports the response status.
///
/// Connection-level failures are returned as errors; HTTP statuses, including
/// failures, are returned as values for the caller to judge.
#[async_trait]
pub trait UploadTransport: Send + Sync {
    async fn put(
        &self,
        url: &str,
        content_type: &str,
        content_length: Option<u64>,
        body: ByteStream,
    ) -> StorageResult<u16>;
}

/// `reqwest` transport using a streaming request body.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl UploadTransport for ReqwestTransport {
    async fn put(
        &self,
        url: &str,
        content_type: &str,
        content_length: Option<u64>,
        body: ByteStream,
    ) -> StorageResult<u16> {
        let mut request = self
            .client
            .put(url)
            .header(CONTENT_TYPE, content_type)
            .body(Body::wrap_stream(body));

        if let Some(length) = content_length {
            request = request.header(CONTENT_LENGTH, length);
        }

        let response = request.send().await.map_err(|e| StorageError::TransferFailed {
            status: None,
            message: e.to_string(),
        })?;

        Ok(response.status().as_u16())
    }
}

/// An opened local file waiting to be streamed.
///
/// The handle is owned by the request body once the transfer starts and is
/// closed when the body is dropped, whether the PUT succeeded or not.
#[derive(Debug)]
pub struct LocalSource {
    path: PathBuf,
    file: File,
    len: Option<u64>,
}

impl LocalSource {
    pub async fn open(path: &Path) -> StorageResult<Self> {
        let file = File::open(path).await.map_err(|e| {
            tracing::error!(error = %e, path = %path.display(), "Failed to open upload source");
            StorageError::IoError(e)
        })?;
        let len = file.metadata().await.ok().map(|m| m.len());

        Ok(Self {
            path: path.to_path_buf(),
            file,
            len,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.len
    }
}

/// Proof that an upload session received its bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedUpload {
    upload_id: String,
    size_bytes: Option<u64>,
}

impl CompletedUpload {
    pub fn upload_id(&self) -> &str {
        &self.upload_id
    }

    pub fn size_bytes(&self) -> Option<u64> {
        self.size_bytes
    }
}

/// Streams local files into upload sessions through a pluggable transport.
#[derive(Clone)]
pub struct StreamTransfer {
    transport: Arc<dyn UploadTransport>,
    chunk_size: usize,
}

impl StreamTransfer {
    pub fn new(transport: Arc<dyn UploadTransport>, chunk_size: usize) -> Self {
        Self {
            transport,
            chunk_size: chunk_size.max(1),
        }
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// PUT `source` into `session`. Consumes the session.
    ///
    /// A non-2xx response is a `TransferFailed` error; the caller must not go on
    /// to resolve the asset.
    pub async fn transfer(
        &self,
        session: UploadSession,
        source: LocalSource,
        content_type: &str,
    ) -> StorageResult<CompletedUpload> {
        let (upload_id, url) = session.into_parts();
        let LocalSource { path, file, len } = source;
        let start = std::time::Instant::now();

        let body: ByteStream = Box::pin(ReaderStream::with_capacity(file, self.chunk_size));

        let status = self
            .transport
            .put(&url, content_type, len, body)
            .await
            .map_err(|e| {
                tracing::error!(
                    error = %e,
                    upload_id = %upload_id,
                    path = %path.display(),
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Mux upload transfer failed"
                );
                e
            })?;

        if !(200..300).contains(&status) {
            tracing::error!(
                upload_id = %upload_id,
                status,
                path = %path.display(),
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "Mux upload rejected"
            );
            return Err(StorageError::TransferFailed {
                status: Some(status),
                message: format!("upload {} was rejected", upload_id),
            });
        }

        tracing::info!(
            upload_id = %upload_id,
            status,
            size_bytes = len,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Mux upload completed"
        );

        Ok(CompletedUpload {
            upload_id,
            size_bytes: len,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use std::io::Write;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorded {
        url: String,
        content_type: String,
        content_length: Option<u64>,
        chunk_sizes: Vec<usize>,
        body: Vec<u8>,
    }

    /// Drains the body chunk by chunk and answers with a fixed status.
    struct RecordingTransport {
        status: u16,
        recorded: Mutex<Recorded>,
    }

    impl RecordingTransport {
        fn new(status: u16) -> Self {
            Self {
                status,
                recorded: Mutex::new(Recorded::default()),
            }
        }
    }

    #[async_trait]
    impl UploadTransport for RecordingTransport {
        async fn put(
            &self,
            url: &str,
            content_type: &str,
            content_length: Option<u64>,
            mut body: ByteStream,
        ) -> StorageResult<u16> {
            let mut chunk_sizes = Vec::new();
            let mut bytes = Vec::new();
            while let Some(chunk) = body.next().await {
                let chunk = chunk?;
                chunk_sizes.push(chunk.len());
                bytes.extend_from_slice(&chunk);
            }

            let mut recorded = self.recorded.lock().unwrap();
            recorded.url = url.to_string();
            recorded.content_type = content_type.to_string();
            recorded.content_length = content_length;
            recorded.chunk_sizes = chunk_sizes;
            recorded.body = bytes;
            Ok(self.status)
        }
    }

    fn write_temp_file(data: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(data).unwrap();
        file.flush().unwrap();
        file
    }

    #[tokio::test]
    async fn test_transfer_streams_in_bounded_chunks() {
        let data: Vec<u8> = (0..10_000u32).map(|i| (i % 251) as u8).collect();
        let file = write_temp_file(&data);
        let transport = Arc::new(RecordingTransport::new(200));
        let transfer = StreamTransfer::new(transport.clone(), 1024);

        let source = LocalSource::open(file.path()).await.unwrap();
        let completed = transfer
            .transfer(
                UploadSession::new("s1", "https://upload.example.com/s1"),
                source,
                "video/mp4",
            )
            .await
            .unwrap();

        assert_eq!(completed.upload_id(), "s1");
        assert_eq!(completed.size_bytes(), Some(data.len() as u64));

        let recorded = transport.recorded.lock().unwrap();
        assert_eq!(recorded.url, "https://upload.example.com/s1");
        assert_eq!(recorded.content_type, "video/mp4");
        assert_eq!(recorded.content_length, Some(data.len() as u64));
        assert_eq!(recorded.body, data);
        assert!(recorded.chunk_sizes.len() > 1);
        assert!(recorded.chunk_sizes.iter().all(|&n| n <= 1024));
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let file = write_temp_file(b"video bytes");
        let transport = Arc::new(RecordingTransport::new(403));
        let transfer = StreamTransfer::new(transport, 1024);

        let source = LocalSource::open(file.path()).await.unwrap();
        let result = transfer
            .transfer(UploadSession::new("s1", "https://u"), source, "video/mp4")
            .await;

        assert!(matches!(
            result,
            Err(StorageError::TransferFailed {
                status: Some(403),
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = LocalSource::open(&dir.path().join("missing.mp4")).await;
        assert!(matches!(result, Err(StorageError::IoError(_))));
    }

    #[test]
    fn test_zero_chunk_size_clamped() {
        let transfer = StreamTransfer::new(Arc::new(RecordingTransport::new(200)), 0);
        assert_eq!(transfer.chunk_size(), 1);
    }
}
