//! Payment transactions against the transaction endpoint.
//!
//! Sale, authorization, credit, and validation accept any of the three
//! payment-method shapes (vaulted customer, payment token, raw card);
//! the shape is selected once per call from the query and decides which
//! fields must be present. Follow-up operations reference an earlier
//! transaction by `transactionid`. Reports go through [`Transaction::find`]
//! on the query endpoint.

use bon::bon;

use crate::api::Api;
use crate::config::Configuration;
use crate::errors::Result;
use crate::query::{PaymentMethod, Query};
use crate::result;
use crate::transport::{HttpTransport, Transport};

/// Client for the transaction operation family.
#[derive(Debug, Clone)]
pub struct Transaction<T = HttpTransport> {
    api: Api<T>,
}

#[bon]
impl Transaction {
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
        Transaction {
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

impl<T: Transport> Transaction<T> {
    /// Client with a custom transport, for pooling control or tests.
    pub fn with_transport(transport: T, config: &Configuration) -> Self {
        Transaction {
            api: Api::resolve_with(transport, Some(config), None, None, None, None),
        }
    }

    /// The resolved credentials and endpoints behind this client.
    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    /// Charge a payment method.
    pub async fn sale(&self, query: Query) -> Result<result::Transaction> {
        self.payment("sale", query, true).await
    }

    /// Authorize an amount without capturing it.
    pub async fn authorize(&self, query: Query) -> Result<result::Transaction> {
        self.payment("auth", query, true).await
    }

    /// Capture a previously authorized amount.
    pub async fn capture(&self, query: Query) -> Result<result::Transaction> {
        let query = query.set("type", "capture");
        query.require_fields(&["transactionid", "amount"])?;
        Ok(result::Transaction::new(self.api.post(query).await?))
    }

    /// Void a pending transaction.
    pub async fn void(&self, query: Query) -> Result<result::Transaction> {
        let query = query.set("type", "void");
        query.require_fields(&["transactionid"])?;
        Ok(result::Transaction::new(self.api.post(query).await?))
    }

    /// Refund a settled transaction.
    pub async fn refund(&self, query: Query) -> Result<result::Transaction> {
        let query = query.set("type", "refund");
        query.require_fields(&["transactionid"])?;
        Ok(result::Transaction::new(self.api.post(query).await?))
    }

    /// Update fields on a previous transaction, such as shipping data.
    pub async fn update(&self, query: Query) -> Result<result::Transaction> {
        let query = query.set("type", "update");
        query.require_fields(&["transactionid"])?;
        Ok(result::Transaction::new(self.api.post(query).await?))
    }

    /// Push funds to a payment method.
    pub async fn credit(&self, query: Query) -> Result<result::Transaction> {
        self.payment("credit", query, true).await
    }

    /// Verify a payment method without moving funds. Takes the same
    /// shapes as [`Transaction::sale`] but never requires an amount.
    pub async fn validate(&self, query: Query) -> Result<result::Transaction> {
        self.payment("validate", query, false).await
    }

    /// Fetch transaction reports from the query endpoint. A
    /// caller-supplied `report_type` is kept as-is.
    pub async fn find(&self, query: Query) -> Result<result::Transaction> {
        let query = query.set_default("report_type", "transaction");
        Ok(result::Transaction::new(self.api.get(query).await?))
    }

    async fn payment(
        &self,
        kind: &str,
        query: Query,
        amount_required: bool,
    ) -> Result<result::Transaction> {
        let query = query.set("type", kind);
        let mut required = PaymentMethod::detect(&query).required_fields().to_vec();
        if amount_required {
            required.push("amount");
        }
        query.require_fields(&required)?;
        Ok(result::Transaction::new(self.api.post(query).await?))
    }
}
