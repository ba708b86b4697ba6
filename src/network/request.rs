//! Request descriptors and the transport call assembled from them.

use reqwest::Method;

use super::headers::HeaderSet;

/// How the transport should deliver the response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseType {
    /// Transport default handling.
    #[default]
    Default,
    /// Body is consumed incrementally as a byte stream.
    Stream,
}

/// Request payload forwarded verbatim to the transport.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Serialized as JSON by the transport.
    Json(serde_json::Value),
    /// Sent as-is.
    Bytes(Vec<u8>),
}

/// Caller-facing description of a single API request.
///
/// `url` is not validated here; a malformed URL surfaces as a transport error.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RequestDescriptor {
    /// Target URL.
    pub url: String,
    /// HTTP method; `GET` when unset.
    pub method: Option<Method>,
    /// Caller-supplied headers, layered over the defaults.
    pub headers: Option<HeaderSet>,
    /// API token sent as `x-auth-token`.
    pub access_token: Option<String>,
    /// Response delivery mode.
    pub response_type: Option<ResponseType>,
    /// Optional request payload.
    pub body: Option<RequestBody>,
}

impl RequestDescriptor {
    /// Creates a `GET` descriptor for `url` with no extra options.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Sets the HTTP method.
    #[must_use]
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Adds one caller header, replacing an earlier value for the same key.
    #[must_use]
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(HeaderSet::new)
            .insert(name.into(), value.into());
        self
    }

    /// Replaces the caller headers.
    #[must_use]
    pub fn headers(mut self, headers: HeaderSet) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Sets the access token.
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the response delivery mode.
    #[must_use]
    pub fn response_type(mut self, response_type: ResponseType) -> Self {
        self.response_type = Some(response_type);
        self
    }

    /// Sets a JSON payload.
    #[must_use]
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Some(RequestBody::Json(value));
        self
    }

    /// Sets a raw byte payload.
    #[must_use]
    pub fn bytes(mut self, bytes: impl Into<Vec<u8>>) -> Self {
        self.body = Some(RequestBody::Bytes(bytes.into()));
        self
    }
}

/// Fully assembled call handed to the transport, one per request.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportCall<A> {
    /// Target URL.
    pub url: String,
    /// HTTP method.
    pub method: Method,
    /// Connection agent, forwarded verbatim from client construction.
    pub https_agent: A,
    /// Response body limit in bytes; `None` is unbounded.
    pub max_content_length: Option<u64>,
    /// Request body limit in bytes; `None` is unbounded.
    pub max_body_length: Option<u64>,
    /// Composed headers.
    pub headers: HeaderSet,
    /// Present only when streaming was requested.
    pub response_type: Option<ResponseType>,
    /// Request payload.
    pub body: Option<RequestBody>,
}

impl<A> TransportCall<A> {
    /// Returns true when the caller asked for a streamed response body.
    #[must_use]
    pub fn is_stream(&self) -> bool {
        self.response_type == Some(ResponseType::Stream)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_descriptor_defaults() {
        let descriptor = RequestDescriptor::new("https://x/y");
        assert_eq!(descriptor.url, "https://x/y");
        assert!(descriptor.method.is_none());
        assert!(descriptor.headers.is_none());
        assert!(descriptor.access_token.is_none());
        assert!(descriptor.response_type.is_none());
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_header_builder_last_value_wins() {
        let descriptor = RequestDescriptor::new("https://x/y")
            .header("accept", "text/plain")
            .header("accept", "application/json");
        let headers = descriptor.headers.unwrap_or_default();
        assert_eq!(headers.len(), 1);
        assert_eq!(headers["accept"], "application/json");
    }
}
