//! Injected filesystem capability for download destinations.

use std::path::Path;

use async_trait::async_trait;
use tokio::fs::File;
use tokio::io::{AsyncWrite, BufWriter};

/// Opens write sinks for downloaded bytes.
#[async_trait]
pub trait SinkFactory: Send + Sync {
    /// Writer returned for one destination.
    type Sink: AsyncWrite + Unpin + Send;

    /// Creates (or truncates) the destination at `path`.
    async fn create_write_stream(&self, path: &Path) -> std::io::Result<Self::Sink>;
}

/// [`SinkFactory`] writing to the local filesystem through `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFs;

#[async_trait]
impl SinkFactory for TokioFs {
    type Sink = BufWriter<File>;

    async fn create_write_stream(&self, path: &Path) -> std::io::Result<Self::Sink> {
        Ok(BufWriter::new(File::create(path).await?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncWriteExt;

    #[tokio::test]
    async fn test_tokio_fs_truncates_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("theme.zip");
        std::fs::write(&path, b"previous much longer content").unwrap();

        let mut sink = TokioFs.create_write_stream(&path).await.unwrap();
        sink.write_all(b"new").await.unwrap();
        sink.shutdown().await.unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"new");
    }

    #[tokio::test]
    async fn test_tokio_fs_missing_parent_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing").join("theme.zip");

        let err = TokioFs.create_write_stream(&path).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
