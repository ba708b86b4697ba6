//! Streaming of a response body into a download sink.

use std::path::Path;

use futures_util::StreamExt;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{debug, warn};

use super::error::FetchError;
use super::transport::ByteStream;

/// Lifecycle of a single download.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DownloadState {
    /// Waiting for the transport to answer.
    Requesting,
    /// Forwarding body chunks into the sink.
    Streaming,
    /// All chunks written and the sink closed.
    Completed,
    /// Terminal failure; any partial file is left in place.
    Failed,
}

/// State owned by one download invocation, from dispatching the request until
/// the body has been drained or the download has failed.
pub(crate) struct DownloadSession<'a> {
    url: &'a str,
    path: &'a Path,
    state: DownloadState,
    bytes_written: u64,
}

impl<'a> DownloadSession<'a> {
    /// Starts a session before the request is dispatched.
    pub(crate) fn new(url: &'a str, path: &'a Path) -> Self {
        debug!(state = ?DownloadState::Requesting, "starting download");
        Self {
            url,
            path,
            state: DownloadState::Requesting,
            bytes_written: 0,
        }
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> DownloadState {
        self.state
    }

    /// Marks the session failed before any chunk was streamed and hands the
    /// error back to the caller.
    pub(crate) fn fail(&mut self, error: FetchError) -> FetchError {
        self.transition(DownloadState::Failed);
        error
    }

    /// Drains `stream` into `sink` and returns the number of bytes written.
    ///
    /// Completes only after end-of-stream has been seen and the sink has been
    /// flushed and shut down. On failure the sink is still shut down.
    pub(crate) async fn stream_into<S, E>(
        &mut self,
        mut sink: S,
        mut stream: ByteStream<E>,
    ) -> Result<u64, FetchError>
    where
        S: AsyncWrite + Unpin + Send,
        E: std::error::Error + Send + Sync + 'static,
    {
        self.transition(DownloadState::Streaming);
        match self.drain(&mut sink, &mut stream).await {
            Ok(()) => {
                self.transition(DownloadState::Completed);
                Ok(self.bytes_written)
            }
            Err(error) => {
                self.transition(DownloadState::Failed);
                self.release(&mut sink).await;
                Err(error)
            }
        }
    }

    async fn drain<S, E>(
        &mut self,
        sink: &mut S,
        stream: &mut ByteStream<E>,
    ) -> Result<(), FetchError>
    where
        S: AsyncWrite + Unpin + Send,
        E: std::error::Error + Send + Sync + 'static,
    {
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(|e| FetchError::read(self.url, e))?;
            sink.write_all(&chunk)
                .await
                .map_err(|e| FetchError::write(self.path, e))?;
            self.bytes_written += chunk.len() as u64;
        }

        sink.flush()
            .await
            .map_err(|e| FetchError::write(self.path, e))?;
        sink.shutdown()
            .await
            .map_err(|e| FetchError::write(self.path, e))
    }

    async fn release<S: AsyncWrite + Unpin + Send>(&self, sink: &mut S) {
        if let Err(error) = sink.shutdown().await {
            warn!(path = %self.path.display(), %error, "failed to close download sink");
        }
    }

    fn transition(&mut self, next: DownloadState) {
        debug!(
            from = ?self.state,
            to = ?next,
            bytes = self.bytes_written,
            "download state change"
        );
        self.state = next;
    }
}
