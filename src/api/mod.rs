//! Command methods, one namespace per API area.
//!
//! Each method checks its preconditions, builds the request parameters, sends the
//! command through [`NamecheapClient::request`](crate::NamecheapClient::request),
//! normalizes the response with a fixed [`ResultSpec`](crate::normalize::ResultSpec)
//! and decodes the typed result.

pub mod dns;
pub mod domains;
pub mod ns;
pub mod ssl;
pub mod transfer;
pub mod users;

pub use dns::DnsApi;
pub use domains::DomainsApi;
pub use ns::NsApi;
pub use ssl::SslApi;
pub use transfer::TransferApi;
pub use users::UsersApi;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{NamecheapError, NamecheapResult};
use crate::normalize::{ResultSpec, normalize};

/// Normalize `raw` with `spec` and decode the result into `M`
pub(crate) fn decode<M: DeserializeOwned>(raw: &Value, spec: &ResultSpec) -> NamecheapResult<M> {
    serde_json::from_value(normalize(raw, spec)).map_err(NamecheapError::from)
}

pub(crate) fn require(value: &str, what: &str) -> NamecheapResult<()> {
    if value.trim().is_empty() {
        return Err(NamecheapError::InvalidInput(format!("{} must not be empty", what)));
    }
    Ok(())
}
