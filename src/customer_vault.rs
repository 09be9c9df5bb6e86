//! Tokenized storage of customer payment methods.
//!
//! The vault lives on the gateway; this client only references entries by
//! `customer_vault_id`. Payment operations charge a stored entry by
//! passing that id to the transaction client.

use bon::bon;

use crate::api::Api;
use crate::config::Configuration;
use crate::errors::Result;
use crate::query::Query;
use crate::result;
use crate::transport::{HttpTransport, Transport};

/// Client for the customer-vault operation family.
#[derive(Debug, Clone)]
pub struct CustomerVault<T = HttpTransport> {
    api: Api<T>,
}

#[bon]
impl CustomerVault {
    /// Build a client. Unset fields resolve from `config` when given,
    /// otherwise from the shared configuration.
    #[builder]
    pub fn new(
        #[builder(into)] security_key: Option<String>,
        #[builder(into)] transaction_url: Option<String>,
        #[builder(into)] query_url: Option<String>,
        #[builder(into)] test_mode: Option<String>,
        config: Option<Configuration>,
    ) -> Self {
        CustomerVault {
            api: Api::resolve(
                config.as_ref(),
                security_key,
                transaction_url,
                query_url,
                test_mode,
            ),
        }
    }
}

impl<T: Transport> CustomerVault<T> {
    /// Client with a custom transport, for pooling control or tests.
    pub fn with_transport(transport: T, config: &Configuration) -> Self {
        CustomerVault {
            api: Api::resolve_with(transport, Some(config), None, None, None, None),
        }
    }

    /// The resolved credentials and endpoints behind this client.
    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    /// Store a payment method; the result carries the new vault id.
    pub async fn create(&self, query: Query) -> Result<result::Customer> {
        let query = query.set("customer_vault", "add_customer");
        query.require_fields(&["ccnumber", "ccexp"])?;
        Ok(result::Customer::new(self.api.post(query).await?))
    }

    /// Update fields on a stored payment method.
    pub async fn update(&self, query: Query) -> Result<result::Customer> {
        let query = query.set("customer_vault", "update_customer");
        query.require_fields(&["customer_vault_id"])?;
        Ok(result::Customer::new(self.api.post(query).await?))
    }

    /// Delete a stored payment method.
    pub async fn destroy(&self, query: Query) -> Result<result::Customer> {
        let query = query.set("customer_vault", "delete_customer");
        query.require_fields(&["customer_vault_id"])?;
        Ok(result::Customer::new(self.api.post(query).await?))
    }

    /// Look up a stored customer on the query endpoint.
    pub async fn find(&self, query: Query) -> Result<result::Customer> {
        let query = query.set("report_type", "customer_vault");
        query.require_fields(&["customer_vault_id"])?;
        Ok(result::Customer::new(self.api.get(query).await?))
    }
}
