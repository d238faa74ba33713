//! HTTP transport for the note service.
//!
//! [`NoteClient`](crate::NoteClient) builds an [`ApiRequest`] and hands it to
//! a [`Transport`]. The default [`HttpTransport`] sends it with a blocking
//! reqwest client; tests plug in stubs that answer from memory.

use std::fmt;
use std::sync::Arc;

use crate::error::ServiceResult;

/// The one endpoint every operation talks to.
pub const BASE_URL: &str = "http://notehub.org/api/note";

/// HTTP verb of a request. Each client operation uses exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Retrieve a note; fields go in the query string.
    Get,
    /// Create a note; fields go in a form body.
    Post,
    /// Update a note; fields go in a form body.
    Put,
}

impl Method {
    /// Returns the verb as sent on the wire.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully built request, ready to send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    /// Field name/value pairs in send order.
    pub fields: Vec<(&'static str, String)>,
}

impl ApiRequest {
    /// Creates a request against [`BASE_URL`].
    pub fn new(method: Method, fields: Vec<(&'static str, String)>) -> Self {
        Self {
            method,
            url: BASE_URL.to_string(),
            fields,
        }
    }

    /// Looks up a field value by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the field names in send order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|(key, _)| *key).collect()
    }
}

/// Status code and body text of an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    /// Creates a response with the given status and body.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Sends one request and waits for its response.
///
/// Implementations report connection-level failures as
/// [`ServiceError`](crate::ServiceError); status codes and bodies are
/// validated by the client, not here.
pub trait Transport {
    fn send(&self, request: &ApiRequest) -> ServiceResult<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &ApiRequest) -> ServiceResult<RawResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &ApiRequest) -> ServiceResult<RawResponse> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn send(&self, request: &ApiRequest) -> ServiceResult<RawResponse> {
        (**self).send(request)
    }
}

/// Blocking reqwest transport.
///
/// Timeouts and TLS settings are reqwest's defaults unless a configured
/// client is passed to [`HttpTransport::with_client`].
#[derive(Debug, Clone, Default)]
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    /// Creates a transport with a default reqwest client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport around an existing reqwest client.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &ApiRequest) -> ServiceResult<RawResponse> {
        let builder = match request.method {
            Method::Get => self.client.get(&request.url).query(&request.fields),
            Method::Post => self.client.post(&request.url).form(&request.fields),
            Method::Put => self.client.put(&request.url).form(&request.fields),
        };

        let response = builder.send()?;
        let status = response.status().as_u16();
        let body = response.text()?;

        Ok(RawResponse { status, body })
    }
}
