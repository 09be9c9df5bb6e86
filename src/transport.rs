//! HTTP transport to the gateway's two endpoints.
//!
//! Payment operations POST a form-encoded body to the transaction
//! endpoint; report operations GET the query endpoint with the same
//! parameters as a querystring. Either way the reply body comes back
//! unparsed for the decoder. A gateway decline is not a transport
//! failure: the gateway answers HTTP 200 with a decline code in the
//! body. Errors here mean no meaningful reply was obtained, and no
//! retries are attempted; retry policy belongs to the caller.

use std::sync::{Arc, LazyLock};
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use url::Url;

use crate::errors::TransportError;
use crate::query::Query;

/// Reply status and body before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// One HTTP exchange with the gateway.
///
/// Implementations may pool connections or add instrumentation, but must
/// not reorder parameters or alter the encoded body.
pub trait Transport {
    fn post(
        &self,
        url: &str,
        query: &Query,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;

    fn get(
        &self,
        url: &str,
        query: &Query,
    ) -> impl Future<Output = Result<RawResponse, TransportError>>;
}

impl<T: Transport> Transport for Arc<T> {
    async fn post(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        (**self).post(url, query).await
    }

    async fn get(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        (**self).get(url, query).await
    }
}

/// Shared pooled client so every default transport reuses connections.
static SHARED_CLIENT: LazyLock<reqwest::Client> = LazyLock::new(|| {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .expect("Failed to create shared HTTP client")
});

/// Gateway transport over a pooled [`reqwest::Client`].
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    /// Transport over the shared pooled client.
    pub fn new() -> Self {
        HttpTransport { client: SHARED_CLIENT.clone() }
    }

    /// Transport over a caller-configured client, for custom timeouts or
    /// proxy settings.
    pub fn with_client(client: reqwest::Client) -> Self {
        HttpTransport { client }
    }

    async fn read_response(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(TransportError::Status { status: status.as_u16(), body });
        }
        Ok(RawResponse { status: status.as_u16(), body })
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for HttpTransport {
    async fn post(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        let url = Url::parse(url)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %url, fields = query.len(), "posting to transaction endpoint");
        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(query.to_form_string())
            .send()
            .await?;
        Self::read_response(response).await
    }

    async fn get(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        let mut url = Url::parse(url)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(endpoint = %url, fields = query.len(), "fetching from query endpoint");
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query.pairs().iter());
        }
        let response = self.client.get(url).send().await?;
        Self::read_response(response).await
    }
}
