//! # Namecheap SDK for Rust
//!
//! An async client for the Namecheap XML API: domains, DNS host records,
//! glue nameservers, transfers, SSL certificates and account pricing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use namecheap_sdk_rs::{NamecheapClient, RecordType};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads NAMECHEAP_API_USER, NAMECHEAP_API_KEY, NAMECHEAP_USERNAME and NAMECHEAP_CLIENT_IP
//!     let client = NamecheapClient::from_env()?;
//!
//!     for result in client.domains().check(&["example.com", "example.org"]).await? {
//!         println!("{}: {}", result.domain, result.available);
//!     }
//!
//!     client.enhanced().update_record("example.com", "www", RecordType::A, "192.0.2.10", 1800, None).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod catalog;
pub mod client;
pub mod config;
pub mod domain;
pub mod enhanced;
pub mod error;
pub mod models;
pub mod normalize;
pub mod options;
pub mod parser;
pub mod request;
pub mod transport;
pub mod xml;

// Re-exports
pub use client::NamecheapClient;
pub use config::{Environment, NamecheapConfig};
pub use domain::{DomainParts, split_domain};
pub use error::{ApiError, NamecheapError, NamecheapResult};
pub use models::{ApiDate, DomainPrice, PricedDomain};
pub use normalize::{ResultSpec, normalize};
pub use options::{HostRecordInput, PricingRequest, RecordType};
pub use request::RequestParams;
pub use transport::{HttpTransport, Transport};
