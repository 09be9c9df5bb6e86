//! Recurring billing plans and subscriptions.
//!
//! A plan is a billing template (`plan_amount`, `plan_payments`, schedule
//! fields); a subscription enrolls a payment method in one. Subscriptions
//! can follow an existing plan by `plan_id` or carry a custom schedule
//! inline. `plan_payments` counts the charges to make, with `0` meaning
//! until canceled; plan and custom-subscription creation default it to `0`.

use bon::bon;

use crate::api::Api;
use crate::config::Configuration;
use crate::errors::Result;
use crate::query::Query;
use crate::result;
use crate::transport::{HttpTransport, Transport};

/// Client for the recurring-billing operation family.
#[derive(Debug, Clone)]
pub struct Recurring<T = HttpTransport> {
    api: Api<T>,
}

#[bon]
impl Recurring {
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
        Recurring {
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

impl<T: Transport> Recurring<T> {
    /// Client with a custom transport, for pooling control or tests.
    pub fn with_transport(transport: T, config: &Configuration) -> Self {
        Recurring {
            api: Api::resolve_with(transport, Some(config), None, None, None, None),
        }
    }

    /// The resolved credentials and endpoints behind this client.
    pub fn api(&self) -> &Api<T> {
        &self.api
    }

    /// Create a billing plan.
    pub async fn create_plan(&self, query: Query) -> Result<result::Action> {
        let query = query
            .set("recurring", "add_plan")
            .set("type", "recurring")
            .set_default("plan_payments", "0");
        query.require_fields(&["plan_amount", "plan_name", "plan_id"])?;
        Ok(result::Action::new(self.api.post(query).await?))
    }

    /// List existing plans from the query endpoint.
    pub async fn list_plans(&self, query: Query) -> Result<result::Action> {
        let query = query.set("report_type", "recurring_plans");
        Ok(result::Action::new(self.api.get(query).await?))
    }

    /// Subscribe a payment method to an existing plan.
    pub async fn add_subscription_to_plan(&self, query: Query) -> Result<result::Action> {
        let query = query.set("recurring", "add_subscription").set("type", "recurring");
        query.require_fields(&["plan_id"])?;
        Ok(result::Action::new(self.api.post(query).await?))
    }

    /// Subscribe with an inline schedule instead of a stored plan.
    pub async fn add_custom_subscription(&self, query: Query) -> Result<result::Action> {
        let query = query
            .set("recurring", "add_subscription")
            .set("type", "recurring")
            .set_default("plan_payments", "0");
        query.require_fields(&["plan_payments", "plan_amount"])?;
        Ok(result::Action::new(self.api.post(query).await?))
    }

    /// Update an existing subscription.
    pub async fn update_subscription(&self, query: Query) -> Result<result::Action> {
        let query = query.set("recurring", "update_subscription").set("type", "recurring");
        query.require_fields(&["subscription_id"])?;
        Ok(result::Action::new(self.api.post(query).await?))
    }

    /// Cancel a subscription.
    pub async fn delete_subscription(&self, query: Query) -> Result<result::Action> {
        let query = query.set("recurring", "delete_subscription").set("type", "recurring");
        query.require_fields(&["subscription_id"])?;
        Ok(result::Action::new(self.api.post(query).await?))
    }
}
