//! Decoding of the gateway's flat response encoding.
//!
//! Reply bodies are `name=value` pairs joined by `&`, the same encoding
//! the requests use, never JSON or XML. Decoding keeps every field the
//! gateway sent, known or not, so nothing is silently lost between the
//! wire and the typed result views.

use serde::ser::{Serialize, SerializeMap, Serializer};
use url::form_urlencoded;

/// Gateway fields decoded from one response body, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodedAttributes {
    fields: Vec<(String, String)>,
}

impl DecodedAttributes {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    fn insert(&mut self, name: String, value: String) {
        match self.fields.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.fields.push((name, value)),
        }
    }
}

impl Serialize for DecodedAttributes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Decode a raw response body.
///
/// Splits on `&`, then each segment on its first `=`, URL-decoding both
/// sides. Segments without an `=` are ignored, the last occurrence of a
/// duplicated name wins, and an empty body yields empty attributes. The
/// caller decides what an empty reply means; it is not an error here.
pub fn decode(body: &str) -> DecodedAttributes {
    let mut attributes = DecodedAttributes::default();
    for segment in body.split('&') {
        if !segment.contains('=') {
            continue;
        }
        if let Some((name, value)) = form_urlencoded::parse(segment.as_bytes()).next() {
            attributes.insert(name.into_owned(), value.into_owned());
        }
    }
    attributes
}

/// The gateway's numeric approve/decline/error classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCode {
    /// Code `1`: the request was approved.
    Approved,
    /// Code `2`: the request was declined.
    Declined,
    /// Code `3`: the gateway reported an error with the request.
    Error,
    /// Any other or missing code. The raw field stays readable on the
    /// result view.
    Unknown,
}

impl ResponseCode {
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some("1") => ResponseCode::Approved,
            Some("2") => ResponseCode::Declined,
            Some("3") => ResponseCode::Error,
            _ => ResponseCode::Unknown,
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, ResponseCode::Approved)
    }
}
