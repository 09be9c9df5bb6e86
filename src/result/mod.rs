//! Typed views over decoded gateway responses.
//!
//! Each view wraps the same [`DecodedAttributes`] and differs only in
//! which canonical fields it names. Success derives solely from the
//! numeric `response` code, never from field presence; an absent field
//! reads as `None` and is never itself an error. Fields without a named
//! accessor stay reachable through [`GatewayResult::get`].

mod action;
mod customer;
mod transaction;

pub use action::Action;
pub use customer::Customer;
pub use transaction::Transaction;

use crate::response::{DecodedAttributes, ResponseCode};

/// Behavior shared by every result view.
pub trait GatewayResult {
    /// The decoded field set behind this view.
    fn attributes(&self) -> &DecodedAttributes;

    /// Look up any decoded field by name.
    fn get(&self, name: &str) -> Option<&str> {
        self.attributes().get(name)
    }

    /// The raw `response` code field as the gateway sent it.
    fn response(&self) -> Option<&str> {
        self.get("response")
    }

    /// Classification of the `response` code.
    fn code(&self) -> ResponseCode {
        ResponseCode::from_field(self.response())
    }

    /// True iff the gateway approved the request (code `1`). Declines and
    /// errors come back here as `false`, not as `Err`.
    fn is_success(&self) -> bool {
        self.code().is_approved()
    }

    /// The gateway's human-readable message.
    fn response_text(&self) -> Option<&str> {
        self.get("responsetext")
    }
}
