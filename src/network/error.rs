//! Error types for file downloads.

use std::path::PathBuf;

use thiserror::Error;

/// Boxed error raised by an injected capability.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while downloading a file.
///
/// A failure after streaming started leaves the partially written file in
/// place.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport rejected the request (network error, error status).
    #[error("request failed for {url}: {source}")]
    Transport {
        /// The URL that was requested.
        url: String,
        /// The transport's error, unchanged.
        #[source]
        source: BoxError,
    },

    /// Reading the response body failed mid-stream.
    #[error("stream error downloading {url}: {source}")]
    Read {
        /// The URL being downloaded.
        url: String,
        /// The underlying stream error.
        #[source]
        source: BoxError,
    },

    /// Opening, writing, or closing the destination failed.
    #[error("IO error writing to {path}: {source}")]
    Write {
        /// The destination path.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl FetchError {
    /// Creates a transport error.
    pub fn transport(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Transport {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Creates a body read error.
    pub fn read(
        url: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Read {
            url: url.into(),
            source: Box::new(source),
        }
    }

    /// Creates a destination write error.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
