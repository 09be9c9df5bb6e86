use serde::ser::{Serialize, Serializer};

use super::GatewayResult;
use crate::response::DecodedAttributes;

/// Generic result for operations without a richer view, including the
/// recurring plan and subscription calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Action {
    attributes: DecodedAttributes,
}

impl Action {
    pub fn new(attributes: DecodedAttributes) -> Self {
        Action { attributes }
    }

    pub fn transactionid(&self) -> Option<&str> {
        self.get("transactionid")
    }

    pub fn subscription_id(&self) -> Option<&str> {
        self.get("subscription_id")
    }

    pub fn plan_id(&self) -> Option<&str> {
        self.get("plan_id")
    }

    pub fn into_attributes(self) -> DecodedAttributes {
        self.attributes
    }
}

impl GatewayResult for Action {
    fn attributes(&self) -> &DecodedAttributes {
        &self.attributes
    }
}

impl Serialize for Action {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.attributes.serialize(serializer)
    }
}
