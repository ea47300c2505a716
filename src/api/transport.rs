use async_trait::async_trait;
use derive_getters::Getters;
use derive_new::new;
use reqwest::Client;

use super::request::Request;
use crate::error::Result;

#[derive(Clone, Debug, Getters, new)]
pub struct TransportResponse {
    status: u16,
    body: Vec<u8>,
}

/// Performs a single HTTP round trip for a built [`Request`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn perform(&self, request: &Request) -> Result<TransportResponse>;
}

#[derive(Clone, Debug, Default)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn perform(&self, request: &Request) -> Result<TransportResponse> {
        let res = self
            .client
            .request(request.method().clone(), request.url().clone())
            .headers(request.headers().clone())
            .send()
            .await?;

        let status = res.status().as_u16();
        let body = res.bytes().await?.to_vec();

        tracing::debug!(status, bytes = body.len(), "zero-click response received");

        Ok(TransportResponse::new(status, body))
    }
}
