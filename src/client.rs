use std::sync::Arc;

use serde_json::Value;

use crate::api::{DnsApi, DomainsApi, NsApi, SslApi, TransferApi, UsersApi};
use crate::catalog::{ErrorCatalog, ErrorContext};
use crate::config::NamecheapConfig;
use crate::enhanced::EnhancedApi;
use crate::error::NamecheapResult;
use crate::parser::ResponseParser;
use crate::request::RequestParams;
use crate::transport::{HttpTransport, Transport};

/// Namecheap API client
///
/// Cheap to clone; clones share the transport and its connection pool.
pub struct NamecheapClient<T: Transport = HttpTransport> {
    transport: Arc<T>,
}

impl<T: Transport> Clone for NamecheapClient<T> {
    fn clone(&self) -> Self {
        Self { transport: Arc::clone(&self.transport) }
    }
}

impl NamecheapClient<HttpTransport> {
    /// Create a new client for the configured environment
    pub fn new(config: NamecheapConfig) -> Self {
        Self::with_transport(HttpTransport::new(&config))
    }

    /// Create from `NAMECHEAP_*` environment variables
    pub fn from_env() -> NamecheapResult<Self> {
        Ok(Self::new(NamecheapConfig::from_env()?))
    }

    /// Create with custom endpoint URL
    pub fn with_url(config: NamecheapConfig, base_url: String) -> Self {
        Self::with_transport(HttpTransport::with_url(&config, base_url))
    }
}

impl<T: Transport> NamecheapClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport: Arc::new(transport) }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Send an authenticated command and return its `CommandResponse` mapping.
    ///
    /// API errors are enriched from `catalog`, with `context` filling the
    /// `{token}` placeholders of its templates.
    pub async fn request(
        &self,
        command: &str,
        params: RequestParams,
        catalog: &ErrorCatalog,
        context: &ErrorContext,
    ) -> NamecheapResult<Value> {
        let raw = self.transport.execute(command, &params).await?;
        ResponseParser::parse(&raw, command, catalog, context)
    }

    pub fn domains(&self) -> DomainsApi<'_, T> {
        DomainsApi::new(self)
    }

    pub fn dns(&self) -> DnsApi<'_, T> {
        DnsApi::new(self)
    }

    pub fn ns(&self) -> NsApi<'_, T> {
        NsApi::new(self)
    }

    pub fn transfers(&self) -> TransferApi<'_, T> {
        TransferApi::new(self)
    }

    pub fn ssl(&self) -> SslApi<'_, T> {
        SslApi::new(self)
    }

    pub fn users(&self) -> UsersApi<'_, T> {
        UsersApi::new(self)
    }

    /// Composite operations built on the command methods
    pub fn enhanced(&self) -> EnhancedApi<'_, T> {
        EnhancedApi::new(self)
    }
}
