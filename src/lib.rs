//! Client library for NMI-compatible card-processing gateways.
//!
//! Payment operations, the tokenized customer vault, and recurring
//! billing all speak the same protocol: form-encoded parameters to one
//! of two endpoints, a flat `key=value` reply decoded into a typed
//! result. Declines are ordinary results classified by the gateway's
//! response code; only missing request fields (caught before any I/O)
//! and transport failures are errors.
//!
//! ```rust,no_run
//! use nmi_gateway::result::GatewayResult;
//! use nmi_gateway::{Query, Transaction};
//!
//! # async fn demo() -> nmi_gateway::Result<()> {
//! let transaction = Transaction::builder().security_key("sk_test").build();
//! let result = transaction
//!     .sale(
//!         Query::new()
//!             .set("ccnumber", "4111111111111111")
//!             .set("ccexp", "1225")
//!             .set("first_name", "John")
//!             .set("last_name", "Doe")
//!             .set("email", "john@example.com")
//!             .set("amount", "10.00"),
//!     )
//!     .await?;
//! assert!(result.is_success());
//! println!("charged: {:?}", result.transactionid());
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod customer_vault;
pub mod errors;
pub mod query;
pub mod recurring;
pub mod response;
pub mod result;
pub mod transaction;
pub mod transport;

pub use config::Configuration;
pub use customer_vault::CustomerVault;
pub use errors::{Error, Result, TransportError};
pub use query::{PaymentMethod, Query};
pub use recurring::Recurring;
pub use transaction::Transaction;
