use serde::ser::{Serialize, Serializer};

use super::GatewayResult;
use crate::response::DecodedAttributes;

/// Result of a transaction-family call: sale, auth, capture, void,
/// refund, update, credit, validate, or a transaction report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    attributes: DecodedAttributes,
}

impl Transaction {
    pub fn new(attributes: DecodedAttributes) -> Self {
        Transaction { attributes }
    }

    /// The gateway's transaction identifier, referenced by capture, void,
    /// refund, and update calls.
    pub fn transactionid(&self) -> Option<&str> {
        self.get("transactionid")
    }

    /// The processor's authorization code for an approved payment.
    pub fn authcode(&self) -> Option<&str> {
        self.get("authcode")
    }

    pub fn orderid(&self) -> Option<&str> {
        self.get("orderid")
    }

    pub fn avsresponse(&self) -> Option<&str> {
        self.get("avsresponse")
    }

    pub fn cvvresponse(&self) -> Option<&str> {
        self.get("cvvresponse")
    }

    pub fn into_attributes(self) -> DecodedAttributes {
        self.attributes
    }
}

impl GatewayResult for Transaction {
    fn attributes(&self) -> &DecodedAttributes {
        &self.attributes
    }
}

impl Serialize for Transaction {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.attributes.serialize(serializer)
    }
}
