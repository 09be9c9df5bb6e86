//! Outgoing request parameters.
//!
//! A [`Query`] is an ordered name/value list built fresh for every call:
//! caller fields first, then the operation's fixed discriminator fields,
//! then the resolved credentials. Validation runs against the finished
//! query and collects every missing name before failing, so a caller sees
//! the complete list at once and no network traffic happens for an
//! invalid call.

use std::fmt::Display;

use serde::ser::{Serialize, SerializeSeq, Serializer};
use url::form_urlencoded;

use crate::errors::{Error, Result};

/// Ordered parameters for a single gateway call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Query { pairs: Vec::new() }
    }

    /// Set `name` to `value`, replacing an existing value in place.
    pub fn set(mut self, name: impl Into<String>, value: impl Display) -> Self {
        self.insert(name.into(), value.to_string());
        self
    }

    /// Set `name` only when the query does not already carry it.
    pub fn set_default(mut self, name: impl Into<String>, value: impl Display) -> Self {
        let name = name.into();
        if self.get(&name).is_none() {
            self.pairs.push((name, value.to_string()));
        }
        self
    }

    pub(crate) fn insert(&mut self, name: String, value: String) {
        match self.pairs.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.pairs.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// True when `name` is present, empty or not.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// True when `name` is present with a non-empty value.
    pub fn has(&self, name: &str) -> bool {
        self.get(name).is_some_and(|value| !value.is_empty())
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Check that every name in `required` is present with a non-empty
    /// value, reporting all missing names together.
    pub fn require_fields(&self, required: &[&str]) -> Result<()> {
        let fields: Vec<String> = required
            .iter()
            .filter(|name| !self.has(name))
            .map(|name| (*name).to_owned())
            .collect();
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Error::MissingParameters { fields })
        }
    }

    /// Encode as an `application/x-www-form-urlencoded` body.
    pub fn to_form_string(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        serializer.extend_pairs(self.pairs.iter());
        serializer.finish()
    }
}

impl Serialize for Query {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.pairs.len()))?;
        for pair in &self.pairs {
            seq.serialize_element(pair)?;
        }
        seq.end()
    }
}

impl<N: Into<String>, V: Display> FromIterator<(N, V)> for Query {
    fn from_iter<I: IntoIterator<Item = (N, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (name, value) in iter {
            query.insert(name.into(), value.to_string());
        }
        query
    }
}

/// How a payment operation identifies the instrument to charge.
///
/// Selected once per call by inspecting which discriminating key the query
/// carries, in this priority order; supplying more than one key selects
/// only the first match, so its requirements are the ones enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    /// `customer_vault_id` referencing an instrument stored in the vault.
    VaultedCustomer,
    /// `payment_token` produced by the gateway's tokenization flow.
    PaymentToken,
    /// Raw card number and expiry supplied directly.
    RawCard,
}

impl PaymentMethod {
    /// Select the payment-method shape for `query`. Presence decides the
    /// branch; emptiness is caught afterwards by the required-field check.
    pub fn detect(query: &Query) -> Self {
        if query.contains("customer_vault_id") {
            PaymentMethod::VaultedCustomer
        } else if query.contains("payment_token") {
            PaymentMethod::PaymentToken
        } else {
            PaymentMethod::RawCard
        }
    }

    /// Field names this shape must carry, before the amount is appended.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            PaymentMethod::VaultedCustomer => &["customer_vault_id"],
            PaymentMethod::PaymentToken => {
                &["payment_token", "first_name", "last_name", "email"]
            }
            PaymentMethod::RawCard => {
                &["ccnumber", "ccexp", "first_name", "last_name", "email"]
            }
        }
    }
}
