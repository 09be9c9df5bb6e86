use serde::ser::{Serialize, Serializer};

use super::GatewayResult;
use crate::response::DecodedAttributes;

/// Result of a customer-vault call or vault report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    attributes: DecodedAttributes,
}

impl Customer {
    pub fn new(attributes: DecodedAttributes) -> Self {
        Customer { attributes }
    }

    /// The vault identifier referencing the stored payment method.
    pub fn customer_vault_id(&self) -> Option<&str> {
        self.get("customer_vault_id")
    }

    pub fn first_name(&self) -> Option<&str> {
        self.get("first_name")
    }

    pub fn last_name(&self) -> Option<&str> {
        self.get("last_name")
    }

    pub fn email(&self) -> Option<&str> {
        self.get("email")
    }

    pub fn address1(&self) -> Option<&str> {
        self.get("address1")
    }

    pub fn city(&self) -> Option<&str> {
        self.get("city")
    }

    pub fn state(&self) -> Option<&str> {
        self.get("state")
    }

    pub fn zip(&self) -> Option<&str> {
        self.get("zip")
    }

    pub fn phone(&self) -> Option<&str> {
        self.get("phone")
    }

    pub fn into_attributes(self) -> DecodedAttributes {
        self.attributes
    }
}

impl GatewayResult for Customer {
    fn attributes(&self) -> &DecodedAttributes {
        &self.attributes
    }
}

impl Serialize for Customer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.attributes.serialize(serializer)
    }
}
