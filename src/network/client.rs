//! Network client: header-decorated API requests and streaming file downloads.
//!
//! All collaborators are supplied at construction time so the client can be
//! driven by real `reqwest`/`tokio::fs` capabilities or by test doubles.

use std::path::Path;

use reqwest::{Client, Method};
use tracing::{debug, info, instrument};

use super::download::DownloadSession;
use super::error::FetchError;
use super::headers::compose_headers;
use super::request::{RequestDescriptor, ResponseType, TransportCall};
use super::sink::{SinkFactory, TokioFs};
use super::transport::{BodyStream, ReqwestTransport, Transport};
use crate::package_info::PackageInfo;

/// Client issuing requests through an injected [`Transport`] and writing
/// downloads through an injected [`SinkFactory`].
///
/// The client holds no per-request state; concurrent calls are independent.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use stencil_net::{NetworkClient, PackageInfo, RequestDescriptor};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = NetworkClient::with_defaults(PackageInfo::new("8.1.0", "2.1.0"))?;
/// let response = client
///     .send_api_request(RequestDescriptor::new("https://api.example.com/themes").access_token("t0k3n"))
///     .await?;
/// println!("status: {}", response.status());
///
/// client
///     .fetch_file("https://cdn.example.com/theme.zip", Path::new("theme.zip"))
///     .await?;
/// # Ok(())
/// # }
/// ```
pub struct NetworkClient<T: Transport, F> {
    transport: T,
    https_agent: T::Agent,
    package_info: PackageInfo,
    fs: F,
}

impl NetworkClient<ReqwestTransport, TokioFs> {
    /// Creates a client using `reqwest` for transport and `tokio::fs` for files.
    ///
    /// # Errors
    ///
    /// Returns the `reqwest` error if the HTTP client cannot be built.
    pub fn with_defaults(package_info: PackageInfo) -> Result<Self, reqwest::Error> {
        let agent = Client::builder().build()?;
        Ok(Self::new(ReqwestTransport, agent, package_info, TokioFs))
    }
}

impl<T: Transport, F> NetworkClient<T, F> {
    /// Creates a client from its injected collaborators.
    pub fn new(transport: T, https_agent: T::Agent, package_info: PackageInfo, fs: F) -> Self {
        Self {
            transport,
            https_agent,
            package_info,
            fs,
        }
    }

    /// Returns the version descriptor used for identifying headers.
    #[must_use]
    pub fn package_info(&self) -> &PackageInfo {
        &self.package_info
    }

    /// Sends one request through the transport and returns its response
    /// unmodified.
    ///
    /// Headers are composed from the descriptor's headers and access token
    /// (see [`compose_headers`]). Body size limits are always unbounded.
    ///
    /// # Errors
    ///
    /// Returns the transport's error unchanged. Nothing is retried.
    #[instrument(skip(self, descriptor), fields(url = %descriptor.url))]
    pub async fn send_api_request(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T::Response, T::Error> {
        let RequestDescriptor {
            url,
            method,
            headers,
            access_token,
            response_type,
            body,
        } = descriptor;

        let call = TransportCall {
            url,
            method: method.unwrap_or(Method::GET),
            https_agent: self.https_agent.clone(),
            max_content_length: None,
            max_body_length: None,
            headers: compose_headers(
                &self.package_info,
                headers.as_ref(),
                access_token.as_deref(),
            ),
            response_type: response_type.filter(|kind| *kind == ResponseType::Stream),
            body,
        };
        debug!(
            method = %call.method,
            stream = call.is_stream(),
            header_count = call.headers.len(),
            "dispatching request"
        );

        self.transport.perform(call).await
    }
}

impl<T, F> NetworkClient<T, F>
where
    T: Transport,
    T::Response: BodyStream,
    F: SinkFactory,
{
    /// Downloads `url` into `output_path`, streaming the body chunk by chunk.
    ///
    /// Returns once every chunk has been written and the file closed. The
    /// file is created or truncated only after the transport answered.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Transport`] when the request fails,
    /// [`FetchError::Read`] when the body stream fails and
    /// [`FetchError::Write`] when the destination cannot be opened or written.
    /// A partially written file is left on disk.
    #[instrument(skip(self, output_path), fields(path = %output_path.display()))]
    pub async fn fetch_file(&self, url: &str, output_path: &Path) -> Result<(), FetchError> {
        let mut session = DownloadSession::new(url, output_path);

        let response = match self
            .send_api_request(RequestDescriptor::new(url).response_type(ResponseType::Stream))
            .await
        {
            Ok(response) => response,
            Err(e) => return Err(session.fail(FetchError::transport(url, e))),
        };

        let sink = match self.fs.create_write_stream(output_path).await {
            Ok(sink) => sink,
            Err(e) => return Err(session.fail(FetchError::write(output_path, e))),
        };

        let bytes = session
            .stream_into(sink, response.into_byte_stream())
            .await?;

        info!(path = %output_path.display(), bytes, "download complete");
        Ok(())
    }
}
