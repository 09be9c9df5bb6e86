//! Resolved per-client state shared by the operation families.

use crate::config::{self, Configuration};
use crate::errors::Result;
use crate::query::Query;
use crate::response::{self, DecodedAttributes};
use crate::transport::{HttpTransport, Transport};

/// Credentials, endpoints, and transport behind one client.
///
/// Values are fixed at construction: an explicit per-client override wins
/// over the provided configuration, which wins over the shared one. The
/// snapshot never re-reads configuration, so requests issued by this
/// client all carry the same credentials.
#[derive(Debug, Clone)]
pub struct Api<T = HttpTransport> {
    security_key: Option<String>,
    transaction_url: String,
    query_url: String,
    test_mode: Option<String>,
    transport: T,
}

impl Api<HttpTransport> {
    pub(crate) fn resolve(
        config: Option<&Configuration>,
        security_key: Option<String>,
        transaction_url: Option<String>,
        query_url: Option<String>,
        test_mode: Option<String>,
    ) -> Self {
        Self::resolve_with(
            HttpTransport::new(),
            config,
            security_key,
            transaction_url,
            query_url,
            test_mode,
        )
    }
}

impl<T: Transport> Api<T> {
    pub(crate) fn resolve_with(
        transport: T,
        config: Option<&Configuration>,
        security_key: Option<String>,
        transaction_url: Option<String>,
        query_url: Option<String>,
        test_mode: Option<String>,
    ) -> Self {
        let config = config.unwrap_or_else(|| config::shared());
        Api {
            security_key: security_key.or_else(|| config.security_key.clone()),
            transaction_url: transaction_url.unwrap_or_else(|| config.transaction_url.clone()),
            query_url: query_url.unwrap_or_else(|| config.query_url.clone()),
            test_mode: test_mode.or_else(|| config.test_mode.clone()),
            transport,
        }
    }

    pub fn security_key(&self) -> Option<&str> {
        self.security_key.as_deref()
    }

    pub fn transaction_url(&self) -> &str {
        &self.transaction_url
    }

    pub fn query_url(&self) -> &str {
        &self.query_url
    }

    pub fn test_mode(&self) -> Option<&str> {
        self.test_mode.as_deref()
    }

    /// Attach the resolved credentials, overwriting caller values of the
    /// same name. `test_mode` is forwarded only when set.
    fn authenticated(&self, mut query: Query) -> Query {
        if let Some(key) = &self.security_key {
            query.insert("security_key".to_owned(), key.clone());
        }
        if let Some(mode) = &self.test_mode {
            query.insert("test_mode".to_owned(), mode.clone());
        }
        query
    }

    pub(crate) async fn post(&self, query: Query) -> Result<DecodedAttributes> {
        let query = self.authenticated(query);
        let raw = self.transport.post(&self.transaction_url, &query).await?;
        Ok(response::decode(&raw.body))
    }

    pub(crate) async fn get(&self, query: Query) -> Result<DecodedAttributes> {
        let query = self.authenticated(query);
        let raw = self.transport.get(&self.query_url, &query).await?;
        Ok(response::decode(&raw.body))
    }
}
