use serde_json::Value;

use super::{decode, require};
use crate::catalog::{ErrorCatalog, ErrorContext, NS_CREATE, NS_DELETE, NS_INFO, NS_UPDATE};
use crate::client::NamecheapClient;
use crate::domain::split_domain;
use crate::error::NamecheapResult;
use crate::models::{NameserverInfo, NameserverResult};
use crate::normalize::ResultSpec;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const CREATE: &str = "namecheap.domains.ns.create";
pub const DELETE: &str = "namecheap.domains.ns.delete";
pub const UPDATE: &str = "namecheap.domains.ns.update";
pub const GET_INFO: &str = "namecheap.domains.ns.getInfo";

const CREATE_RESULT: ResultSpec = ResultSpec::object(&["DomainNSCreateResult"]);
const DELETE_RESULT: ResultSpec = ResultSpec::object(&["DomainNSDeleteResult"]);
const UPDATE_RESULT: ResultSpec = ResultSpec::object(&["DomainNSUpdateResult"]);
const INFO_RESULT: ResultSpec = ResultSpec::object(&["DomainNSInfoResult"]);
const INFO_STATUSES: ResultSpec = ResultSpec::list(&["DomainNSInfoResult", "NameserverStatuses", "Status"]);

/// `namecheap.domains.ns.*` commands, for glue nameservers under your own domain
pub struct NsApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> NsApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    pub async fn create(&self, domain: &str, nameserver: &str, ip: &str) -> NamecheapResult<NameserverResult> {
        require(ip, "IP address")?;
        let params = RequestParams::new().with("IP", ip);
        let raw = self.send(CREATE, domain, nameserver, params, &NS_CREATE).await?;
        decode(&raw, &CREATE_RESULT)
    }

    pub async fn delete(&self, domain: &str, nameserver: &str) -> NamecheapResult<NameserverResult> {
        let raw = self.send(DELETE, domain, nameserver, RequestParams::new(), &NS_DELETE).await?;
        decode(&raw, &DELETE_RESULT)
    }

    /// Move a nameserver from `old_ip` to `new_ip`
    pub async fn update(
        &self,
        domain: &str,
        nameserver: &str,
        old_ip: &str,
        new_ip: &str,
    ) -> NamecheapResult<NameserverResult> {
        require(old_ip, "Old IP address")?;
        require(new_ip, "New IP address")?;
        let params = RequestParams::new().with("OldIP", old_ip).with("IP", new_ip);
        let raw = self.send(UPDATE, domain, nameserver, params, &NS_UPDATE).await?;
        decode(&raw, &UPDATE_RESULT)
    }

    pub async fn get_info(&self, domain: &str, nameserver: &str) -> NamecheapResult<NameserverInfo> {
        let raw = self.send(GET_INFO, domain, nameserver, RequestParams::new(), &NS_INFO).await?;

        let mut info: NameserverInfo = decode(&raw, &INFO_RESULT)?;
        info.statuses = decode(&raw, &INFO_STATUSES)?;
        Ok(info)
    }

    async fn send(
        &self,
        command: &str,
        domain: &str,
        nameserver: &str,
        extra: RequestParams,
        catalog: &ErrorCatalog,
    ) -> NamecheapResult<Value> {
        require(domain, "Domain name")?;
        require(nameserver, "Nameserver")?;

        let parts = split_domain(domain)?;
        let params = RequestParams::new()
            .with("SLD", parts.sld.as_str())
            .with("TLD", parts.tld.as_str())
            .with("Nameserver", nameserver)
            .merge(extra);
        let context = ErrorContext::for_domain(parts.registrable()).nameserver(nameserver);

        self.client.request(command, params, catalog, &context).await
    }
}
