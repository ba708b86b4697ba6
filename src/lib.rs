//! Stencil network helpers.
//!
//! This library provides the networking primitives used by the stencil
//! storefront CLI: API requests decorated with the CLI's identifying headers
//! and streaming downloads of remote files to disk.
//!
//! # Architecture
//!
//! - [`network`] - Header composition, request dispatch, file downloads
//! - [`package_info`] - Version descriptor loaded from `package.json`

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod network;
pub mod package_info;

// Re-export commonly used types
pub use network::{
    FetchError, HeaderSet, NetworkClient, ReqwestTransport, RequestDescriptor, ResponseType,
    TokioFs, compose_headers,
};
pub use package_info::{PackageInfo, PackageInfoError};
