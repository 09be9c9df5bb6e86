//! Gateway credentials and endpoint configuration.
//!
//! Every field resolves in the same order: explicit builder value, then
//! the corresponding environment variable, then the hard-coded default.
//! Only the two endpoint URLs have defaults; the security key and the
//! test-mode flag stay unset unless provided. URLs are carried as plain
//! strings and validated by nothing here: a malformed URL surfaces as a
//! transport failure when the first request is issued.
//!
//! A process-wide instance backs clients built without an explicit
//! configuration. It is created from the environment on first access and
//! immutable afterwards; [`init`] installs a custom instance ahead of
//! that first access.

use std::env;
use std::sync::OnceLock;

use bon::bon;

/// Environment variable holding the account's security key.
pub const SECURITY_KEY_VAR: &str = "NMI_SECURITY_KEY";
/// Environment variable overriding the transaction endpoint URL.
pub const TRANSACTION_URL_VAR: &str = "NMI_TRANSACTION_URL";
/// Environment variable overriding the query endpoint URL.
pub const QUERY_URL_VAR: &str = "NMI_QUERY_URL";
/// Environment variable forwarding the gateway's test-mode flag.
pub const TEST_MODE_VAR: &str = "NMI_TEST_MODE";

pub const DEFAULT_TRANSACTION_URL: &str =
    "https://figpay.transactiongateway.com/api/transact.php";
pub const DEFAULT_QUERY_URL: &str = "https://figpay.transactiongateway.com/api/query.php";

static SHARED: OnceLock<Configuration> = OnceLock::new();

/// Credentials and endpoints for one gateway account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub security_key: Option<String>,
    pub transaction_url: String,
    pub query_url: String,
    pub test_mode: Option<String>,
}

#[bon]
impl Configuration {
    /// Build a configuration. Unset fields fall back to the environment,
    /// and the endpoint URLs fall back further to the gateway defaults.
    #[builder]
    pub fn new(
        #[builder(into)] security_key: Option<String>,
        #[builder(into)] transaction_url: Option<String>,
        #[builder(into)] query_url: Option<String>,
        #[builder(into)] test_mode: Option<String>,
    ) -> Self {
        Configuration {
            security_key: security_key.or_else(|| env::var(SECURITY_KEY_VAR).ok()),
            transaction_url: transaction_url
                .or_else(|| env::var(TRANSACTION_URL_VAR).ok())
                .unwrap_or_else(|| DEFAULT_TRANSACTION_URL.to_owned()),
            query_url: query_url
                .or_else(|| env::var(QUERY_URL_VAR).ok())
                .unwrap_or_else(|| DEFAULT_QUERY_URL.to_owned()),
            test_mode: test_mode.or_else(|| env::var(TEST_MODE_VAR).ok()),
        }
    }
}

impl Configuration {
    /// Resolve every field from the environment and the defaults.
    pub fn from_env() -> Self {
        Self::builder().build()
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Shared gateway configuration is already initialized")]
pub struct AlreadyInitialized(pub Configuration);

/// Install `config` as the process-wide shared configuration.
///
/// Must run before the first [`shared`] access, which includes the first
/// client built without an explicit configuration. Returns the rejected
/// value once a shared instance exists.
pub fn init(config: Configuration) -> Result<(), AlreadyInitialized> {
    SHARED.set(config).map_err(AlreadyInitialized)
}

/// The process-wide configuration, created from the environment on first
/// access unless [`init`] installed one earlier.
pub fn shared() -> &'static Configuration {
    SHARED.get_or_init(Configuration::from_env)
}
