//! Outbound API requests and streaming file downloads.
//!
//! Every request carries the identifying headers composed by
//! [`compose_headers`]; downloads stream the response body straight into a
//! file without buffering it in memory.
//!
//! # Features
//!
//! - Three-stage header merge (access token, identity defaults, caller headers)
//! - Pass-through of the transport's response and errors
//! - Chunk-ordered streaming into a sink, closed on every exit path
//! - Injected transport and filesystem capabilities
//!
//! # Example
//!
//! ```no_run
//! use stencil_net::network::{NetworkClient, RequestDescriptor};
//! use stencil_net::PackageInfo;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let package = PackageInfo::load("package.json").await?;
//! let client = NetworkClient::with_defaults(package)?;
//! let response = client
//!     .send_api_request(RequestDescriptor::new("https://api.example.com/stores/abc/v3/themes"))
//!     .await?;
//! println!("{}", response.text().await?);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod constants;
mod download;
mod error;
mod headers;
mod request;
mod sink;
mod transport;

pub use client::NetworkClient;
pub use download::DownloadState;
pub use error::{BoxError, FetchError};
pub use headers::{HeaderSet, compose_headers};
pub use request::{RequestBody, RequestDescriptor, ResponseType, TransportCall};
pub use sink::{SinkFactory, TokioFs};
pub use transport::{BodyStream, ByteStream, ReqwestTransport, Transport};
