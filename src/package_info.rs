//! Host application version descriptor.
//!
//! The CLI publishes its own release version and the stencil framework
//! version it targets on every request. Both live in the host application's
//! `package.json`:
//!
//! ```json
//! { "version": "8.1.0", "config": { "stencil_version": "2.1.0" } }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Version descriptor read once per request to populate identifying headers.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    /// Release version of the CLI.
    pub version: String,
    /// Nested `config` block of `package.json`.
    pub config: PackageConfig,
}

/// The `config` block of `package.json`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PackageConfig {
    /// Stencil framework version the CLI targets.
    pub stencil_version: String,
}

/// Errors that can occur while loading a [`PackageInfo`].
#[derive(Debug, Error)]
pub enum PackageInfoError {
    /// The descriptor file could not be read.
    #[error("failed to read package descriptor {path}: {source}")]
    Io {
        /// Path that was read.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The descriptor is not valid JSON or lacks a required field.
    #[error("invalid package descriptor {path}: {source}")]
    Parse {
        /// Path (or `<inline>`) of the descriptor.
        path: PathBuf,
        /// The underlying parse error.
        #[source]
        source: serde_json::Error,
    },
}

impl PackageInfo {
    /// Creates a descriptor from explicit version strings.
    pub fn new(version: impl Into<String>, stencil_version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            config: PackageConfig {
                stencil_version: stencil_version.into(),
            },
        }
    }

    /// Parses a descriptor from `package.json` text. Unknown fields are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`PackageInfoError::Parse`] when the text is not valid JSON or
    /// `version` / `config.stencil_version` is missing.
    pub fn from_json_str(json: &str) -> Result<Self, PackageInfoError> {
        serde_json::from_str(json).map_err(|source| PackageInfoError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })
    }

    /// Loads a descriptor from a `package.json` file.
    ///
    /// # Errors
    ///
    /// Returns [`PackageInfoError::Io`] when the file cannot be read and
    /// [`PackageInfoError::Parse`] when its content is invalid.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, PackageInfoError> {
        let path = path.as_ref();
        let raw = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| PackageInfoError::Io {
                path: path.to_path_buf(),
                source,
            })?;
        let info: Self = serde_json::from_str(&raw).map_err(|source| PackageInfoError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            path = %path.display(),
            version = %info.version,
            stencil_version = %info.config.stencil_version,
            "loaded package descriptor"
        );
        Ok(info)
    }
}
