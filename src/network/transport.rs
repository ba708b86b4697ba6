//! Injected transport capability and its `reqwest`-backed implementation.

use async_trait::async_trait;
use bytes::Bytes;
use futures_util::StreamExt;
use futures_util::stream::BoxStream;
use reqwest::Client;
use tracing::{debug, instrument};

use super::request::{RequestBody, TransportCall};

/// Response body as an ordered stream of chunks.
pub type ByteStream<E> = BoxStream<'static, Result<Bytes, E>>;

/// Performs one outbound HTTP call.
///
/// This trait uses `async_trait` so clients stay generic over real and test
/// transports without boxing every future by hand.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Opaque connection agent forwarded into every call.
    type Agent: Clone + Send + Sync;
    /// Raw response handed back to the caller untouched.
    type Response: Send;
    /// Failure reported by the transport.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends the call and returns the transport's response.
    async fn perform(&self, call: TransportCall<Self::Agent>)
    -> Result<Self::Response, Self::Error>;
}

/// A response whose body can be consumed incrementally.
pub trait BodyStream: Send {
    /// Failure reported while reading the body.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Converts the response into its body stream.
    fn into_byte_stream(self) -> ByteStream<Self::Error>;
}

impl BodyStream for reqwest::Response {
    type Error = reqwest::Error;

    fn into_byte_stream(self) -> ByteStream<Self::Error> {
        self.bytes_stream().boxed()
    }
}

/// [`Transport`] backed by a shared [`reqwest::Client`] agent.
///
/// Non-2xx statuses are reported as errors. `reqwest` applies no body size
/// limits, which matches the unbounded limits the dispatcher always sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestTransport;

#[async_trait]
impl Transport for ReqwestTransport {
    type Agent = Client;
    type Response = reqwest::Response;
    type Error = reqwest::Error;

    #[instrument(level = "debug", skip(self, call), fields(method = %call.method, url = %call.url))]
    async fn perform(
        &self,
        call: TransportCall<Self::Agent>,
    ) -> Result<Self::Response, Self::Error> {
        let mut request = call.https_agent.request(call.method, call.url.as_str());
        for (name, value) in &call.headers {
            request = request.header(name.as_str(), value.as_str());
        }
        request = match call.body {
            Some(RequestBody::Json(value)) => request.json(&value),
            Some(RequestBody::Bytes(bytes)) => request.body(bytes),
            None => request,
        };

        let response = request.send().await?;
        debug!(status = %response.status(), "response received");
        response.error_for_status()
    }
}
