use serde_json::Value;

use super::{decode, require};
use crate::catalog::{DNS_HOSTS, DNS_NAMESERVERS, ErrorCatalog, ErrorContext};
use crate::client::NamecheapClient;
use crate::domain::split_domain;
use crate::error::{NamecheapError, NamecheapResult};
use crate::models::{DnsServerList, DnsUpdateResult, HostRecord, HostsResult};
use crate::normalize::ResultSpec;
use crate::options::HostRecordInput;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const GET_HOSTS: &str = "namecheap.domains.dns.getHosts";
pub const SET_HOSTS: &str = "namecheap.domains.dns.setHosts";
pub const SET_DEFAULT: &str = "namecheap.domains.dns.setDefault";
pub const SET_CUSTOM: &str = "namecheap.domains.dns.setCustom";
pub const GET_LIST: &str = "namecheap.domains.dns.getList";

pub const MAX_NAMESERVERS: usize = 12;

pub(crate) const HOSTS: ResultSpec = ResultSpec::object(&["DomainDNSGetHostsResult"]);
pub(crate) const HOST_RECORDS: ResultSpec = ResultSpec::list(&["DomainDNSGetHostsResult", "host"]);
const SET_HOSTS_RESULT: ResultSpec = ResultSpec::object(&["DomainDNSSetHostsResult"]);
const SET_DEFAULT_RESULT: ResultSpec =
    ResultSpec::object(&["DomainDNSSetDefaultResult"]).rename(&[("Updated", "IsSuccess")]);
const SET_CUSTOM_RESULT: ResultSpec =
    ResultSpec::object(&["DomainDNSSetCustomResult"]).rename(&[("Updated", "IsSuccess")]);
const LIST_RESULT: ResultSpec = ResultSpec::object(&["DomainDNSGetListResult"]);

/// `namecheap.domains.dns.*` commands
pub struct DnsApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> DnsApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    /// Host records of a domain using Namecheap DNS
    pub async fn get_hosts(&self, domain: &str) -> NamecheapResult<HostsResult> {
        let raw = self.by_sld(GET_HOSTS, domain, RequestParams::new(), &DNS_HOSTS).await?;

        let mut result: HostsResult = decode(&raw, &HOSTS)?;
        result.hosts = decode::<Vec<HostRecord>>(&raw, &HOST_RECORDS)?;
        Ok(result)
    }

    /// Replace every host record of `domain` with `hosts`.
    ///
    /// The API has no per-record update: records left out are deleted.
    pub async fn set_hosts(&self, domain: &str, hosts: &[HostRecordInput]) -> NamecheapResult<DnsUpdateResult> {
        for host in hosts {
            host.validate()?;
        }
        if hosts.is_empty() {
            tracing::warn!("No host records provided for {}; all records will be removed", domain);
        }

        let mut params = RequestParams::new();
        for (i, host) in hosts.iter().enumerate() {
            host.append_params(i + 1, &mut params);
        }

        tracing::debug!("Setting {} host records for {}", hosts.len(), domain);
        let raw = self.by_sld(SET_HOSTS, domain, params, &DNS_HOSTS).await?;
        decode(&raw, &SET_HOSTS_RESULT)
    }

    /// [`set_hosts`](Self::set_hosts) from loose mappings
    pub async fn set_hosts_from_values(&self, domain: &str, hosts: &[Value]) -> NamecheapResult<DnsUpdateResult> {
        let hosts = hosts.iter().map(HostRecordInput::try_from).collect::<NamecheapResult<Vec<_>>>()?;
        self.set_hosts(domain, &hosts).await
    }

    /// Switch back to Namecheap's default nameservers
    pub async fn set_default(&self, domain: &str) -> NamecheapResult<DnsUpdateResult> {
        let raw = self.by_sld(SET_DEFAULT, domain, RequestParams::new(), &DNS_NAMESERVERS).await?;
        decode(&raw, &SET_DEFAULT_RESULT)
    }

    pub async fn set_custom<S: AsRef<str>>(&self, domain: &str, nameservers: &[S]) -> NamecheapResult<DnsUpdateResult> {
        if nameservers.is_empty() {
            return Err(NamecheapError::InvalidInput("At least one nameserver is required".to_string()));
        }
        if nameservers.len() > MAX_NAMESERVERS {
            return Err(NamecheapError::InvalidInput(format!(
                "Maximum of {} nameservers can be set",
                MAX_NAMESERVERS
            )));
        }

        let list: Vec<&str> = nameservers.iter().map(|ns| ns.as_ref().trim()).collect();
        if list.iter().any(|ns| ns.is_empty()) {
            return Err(NamecheapError::InvalidInput("Nameserver names must not be empty".to_string()));
        }

        let params = RequestParams::new().with("Nameservers", list.join(","));
        let raw = self.by_sld(SET_CUSTOM, domain, params, &DNS_NAMESERVERS).await?;
        decode(&raw, &SET_CUSTOM_RESULT)
    }

    /// Nameservers currently set for a domain
    pub async fn get_list(&self, domain: &str) -> NamecheapResult<DnsServerList> {
        let raw = self.by_sld(GET_LIST, domain, RequestParams::new(), &DNS_NAMESERVERS).await?;
        decode(&raw, &LIST_RESULT)
    }

    async fn by_sld(
        &self,
        command: &str,
        domain: &str,
        extra: RequestParams,
        catalog: &ErrorCatalog,
    ) -> NamecheapResult<Value> {
        require(domain, "Domain name")?;
        let parts = split_domain(domain)?;
        let params = RequestParams::new()
            .with("SLD", parts.sld.as_str())
            .with("TLD", parts.tld.as_str())
            .merge(extra);
        self.client.request(command, params, catalog, &ErrorContext::for_domain(parts.registrable())).await
    }
}
