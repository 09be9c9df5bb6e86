//! Shared fixtures and the recording transport used across test binaries.
#![allow(dead_code)]

use std::sync::Mutex;

use nmi_gateway::query::Query;
use nmi_gateway::transport::{RawResponse, Transport};
use nmi_gateway::{Configuration, TransportError};

/// One recorded exchange: verb, endpoint URL, and the final query.
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub verb: &'static str,
    pub url: String,
    pub query: Query,
}

/// Transport that answers every call with a canned body and records what
/// was sent, so tests can assert on the exact outgoing parameters and on
/// the absence of network traffic.
#[derive(Debug)]
pub struct RecordingTransport {
    body: String,
    calls: Mutex<Vec<RecordedCall>>,
}

impl RecordingTransport {
    pub fn respond_with(body: &str) -> Self {
        RecordingTransport { body: body.to_owned(), calls: Mutex::new(Vec::new()) }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn last_call(&self) -> RecordedCall {
        self.calls.lock().unwrap().last().cloned().expect("no calls recorded")
    }

    fn record(&self, verb: &'static str, url: &str, query: &Query) {
        self.calls.lock().unwrap().push(RecordedCall {
            verb,
            url: url.to_owned(),
            query: query.clone(),
        });
    }
}

impl Transport for RecordingTransport {
    async fn post(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        self.record("POST", url, query);
        Ok(RawResponse { status: 200, body: self.body.clone() })
    }

    async fn get(&self, url: &str, query: &Query) -> Result<RawResponse, TransportError> {
        self.record("GET", url, query);
        Ok(RawResponse { status: 200, body: self.body.clone() })
    }
}

/// Configuration pointing at a host recording transports never dial.
pub fn test_config() -> Configuration {
    Configuration {
        security_key: Some("test-security-key".to_owned()),
        transaction_url: "https://gateway.test/api/transact.php".to_owned(),
        query_url: "https://gateway.test/api/query.php".to_owned(),
        test_mode: None,
    }
}

pub fn valid_visa() -> Query {
    Query::new()
        .set("ccnumber", "4111111111111111")
        .set("ccexp", "1225")
        .set("cvv", "999")
}

pub fn billing_info(query: Query) -> Query {
    query
        .set("first_name", "John")
        .set("last_name", "Doe")
        .set("address1", "123 Main St")
        .set("city", "Beverly Hills")
        .set("state", "CA")
        .set("zip", "90210")
        .set("email", "john@example.com")
}
