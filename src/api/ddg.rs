use super::{
    normalize::normalize,
    request::{API_HOST, build_request},
    transport::{HttpTransport, Transport},
};
use crate::{
    error::Result,
    models::{QueryOptions, Response},
};

/// Zero-click API client.
///
/// Holds only the transport and the API host; per-query behaviour comes from
/// the [`QueryOptions`] passed to each call.
#[derive(Clone, Debug)]
pub struct Client<T = HttpTransport> {
    transport: T,
    host: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    pub fn new() -> Self {
        Self::with_transport(HttpTransport::default())
    }

    /// Client against another host, e.g. a mirror or a local test server.
    pub fn with_host(host: impl Into<String>) -> Self {
        Self::new().host(host)
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(transport: T) -> Self {
        Self {
            transport,
            host: API_HOST.to_string(),
        }
    }

    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn api_host(&self) -> &str {
        &self.host
    }

    pub async fn zero_click(&self, query: &str, options: &QueryOptions) -> Result<Response> {
        let request = build_request(&self.host, query, options)?;
        tracing::debug!(url = %request.url(), "zero-click query");

        let res = self.transport.perform(&request).await?;
        if !(200..300).contains(res.status()) {
            tracing::debug!(status = res.status(), "non-success status, decoding body anyway");
        }

        normalize(res.body())
    }
}

/// Queries the zero-click API with default options.
pub async fn zero_click(query: &str) -> Result<Response> {
    Client::new()
        .zero_click(query, &QueryOptions::default())
        .await
}
