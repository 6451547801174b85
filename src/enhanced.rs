//! Composite operations built from several commands.
//!
//! Nothing here talks to the transport directly; every sub-call goes through the
//! command methods and is awaited in order.

use std::collections::{BTreeMap, BTreeSet};

use crate::client::NamecheapClient;
use crate::domain::dotted_suffix;
use crate::error::{NamecheapError, NamecheapResult};
use crate::models::{DnsUpdateResult, DomainCheckResult, DomainPrice, HostRecord, PricedDomain, ProductPrice};
use crate::options::{HostRecordInput, PricingRequest, RecordType};
use crate::transport::Transport;

pub const DEFAULT_SEARCH_TLDS: [&str; 5] = [".com", ".net", ".org", ".info", ".biz"];

/// Host names pointed at the address by [`EnhancedApi::set_a_records`]
const APEX_HOSTS: [&str; 2] = ["@", "www"];

pub struct EnhancedApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> EnhancedApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    /// Availability of `domains` together with their registration price.
    ///
    /// Regular prices come from one pricing lookup per distinct suffix among the
    /// available names. A failed lookup marks that suffix [`DomainPrice::Unavailable`]
    /// and does not affect the others.
    pub async fn check_with_pricing<S: AsRef<str>>(&self, domains: &[S]) -> NamecheapResult<Vec<PricedDomain>> {
        let checked = self.client.domains().check(domains).await?;

        let suffixes: BTreeSet<String> = checked
            .iter()
            .filter(|r| r.available)
            .filter_map(|r| dotted_suffix(&r.domain).ok())
            .collect();

        let mut prices = BTreeMap::new();
        for suffix in suffixes {
            let price = self.registration_price(&suffix).await;
            prices.insert(suffix, price);
        }

        let priced: Vec<PricedDomain> = checked.into_iter().map(|r| priced_domain(r, &prices)).collect();
        tracing::info!(
            "Priced {} domains ({} available) across {} suffixes",
            priced.len(),
            priced.iter().filter(|d| d.available).count(),
            prices.len()
        );
        Ok(priced)
    }

    /// Available `keyword` + suffix names, premium ones only when `include_premium` is set
    pub async fn search_available(
        &self,
        keyword: &str,
        tlds: Option<&[&str]>,
        include_premium: bool,
    ) -> NamecheapResult<Vec<PricedDomain>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(NamecheapError::InvalidInput("Search keyword must not be empty".to_string()));
        }

        let tlds = match tlds {
            Some(tlds) if !tlds.is_empty() => tlds,
            _ => &DEFAULT_SEARCH_TLDS[..],
        };
        let candidates: Vec<String> =
            tlds.iter().map(|tld| format!("{}.{}", keyword, tld.trim_start_matches('.'))).collect();

        let results = self.check_with_pricing(&candidates).await?;
        Ok(results.into_iter().filter(|d| d.available && (include_premium || !d.is_premium)).collect())
    }

    /// Add a record, or replace the existing record with the same host name and type,
    /// keeping every other record of the domain.
    pub async fn update_record(
        &self,
        domain: &str,
        name: &str,
        record_type: RecordType,
        value: &str,
        ttl: u32,
        priority: Option<u32>,
    ) -> NamecheapResult<DnsUpdateResult> {
        let mut record = HostRecordInput::new(name, record_type, value).with_ttl(ttl);
        if let Some(priority) = priority {
            record = record.with_mx_pref(priority);
        }
        record.validate()?;

        let existing = self.client.dns().get_hosts(domain).await?.hosts;
        let mut hosts = Vec::with_capacity(existing.len() + 1);
        let mut replaced = false;

        for host in &existing {
            if is_match(host, name, record_type) {
                let mut updated = record.clone();
                if priority.is_none() && host.mx_pref > 0 {
                    updated = updated.with_mx_pref(host.mx_pref);
                }
                hosts.push(updated);
                replaced = true;
            } else {
                hosts.push(HostRecordInput::try_from(host)?);
            }
        }
        if !replaced {
            hosts.push(record);
        }

        tracing::info!(
            "{} {} record '{}' on {}",
            if replaced { "Updating" } else { "Adding" },
            record_type,
            name,
            domain
        );
        self.client.dns().set_hosts(domain, &hosts).await
    }

    /// Remove records with this host name and type; with `value`, only those pointing at it
    pub async fn delete_record(
        &self,
        domain: &str,
        name: &str,
        record_type: RecordType,
        value: Option<&str>,
    ) -> NamecheapResult<DnsUpdateResult> {
        let existing = self.client.dns().get_hosts(domain).await?.hosts;

        let kept = existing
            .iter()
            .filter(|host| !(is_match(host, name, record_type) && value.is_none_or(|v| host.address == v)))
            .map(HostRecordInput::try_from)
            .collect::<NamecheapResult<Vec<_>>>()?;

        tracing::info!("Deleting {} {} record(s) '{}' on {}", existing.len() - kept.len(), record_type, name, domain);
        self.client.dns().set_hosts(domain, &kept).await
    }

    /// Point `@` and `www` at `ip` with A records, replacing any A records they had
    pub async fn set_a_records(&self, domain: &str, ip: &str) -> NamecheapResult<DnsUpdateResult> {
        if ip.trim().is_empty() {
            return Err(NamecheapError::InvalidInput("IP address must not be empty".to_string()));
        }

        let existing = self.client.dns().get_hosts(domain).await?.hosts;
        let mut hosts = existing
            .iter()
            .filter(|host| !APEX_HOSTS.iter().any(|apex| is_match(host, apex, RecordType::A)))
            .map(HostRecordInput::try_from)
            .collect::<NamecheapResult<Vec<_>>>()?;
        hosts.extend(APEX_HOSTS.iter().map(|apex| HostRecordInput::new(*apex, RecordType::A, ip)));

        tracing::info!("Pointing {} at {}", domain, ip);
        self.client.dns().set_hosts(domain, &hosts).await
    }

    async fn registration_price(&self, suffix: &str) -> DomainPrice {
        let request = PricingRequest::domain_registration([suffix.trim_start_matches('.')]);
        match self.client.users().get_pricing(&request).await {
            Ok(rows) => match pick_price(&rows) {
                Some(price) => DomainPrice::Regular(price),
                None => {
                    tracing::warn!("No registration price returned for {}", suffix);
                    DomainPrice::Unavailable
                }
            },
            Err(e) => {
                tracing::warn!("Pricing lookup for {} failed: {}", suffix, e);
                DomainPrice::Unavailable
            }
        }
    }
}

fn is_match(host: &HostRecord, name: &str, record_type: RecordType) -> bool {
    host.name == name && host.record_type.eq_ignore_ascii_case(record_type.as_str())
}

/// One-year price, falling back to the first row; the account price wins when set
fn pick_price(rows: &[ProductPrice]) -> Option<f64> {
    let row = rows.iter().find(|r| r.duration == 1).or_else(|| rows.first())?;
    let price = if row.your_price > 0.0 { row.your_price } else { row.price };
    (price > 0.0).then_some(price)
}

fn priced_domain(result: DomainCheckResult, prices: &BTreeMap<String, DomainPrice>) -> PricedDomain {
    let price = if !result.available {
        DomainPrice::NotApplicable
    } else if result.is_premium_name && result.premium_registration_price > 0.0 {
        DomainPrice::Premium(result.premium_registration_price)
    } else {
        dotted_suffix(&result.domain)
            .ok()
            .and_then(|suffix| prices.get(&suffix).copied())
            .unwrap_or(DomainPrice::Unavailable)
    };

    PricedDomain { domain: result.domain, available: result.available, is_premium: result.is_premium_name, price }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::dns::{GET_HOSTS, SET_HOSTS};
    use crate::api::fixtures::{client, error, ok};
    use crate::api::users::GET_PRICING;
    use crate::parser::DOMAIN_CHECK_COMMAND as CHECK;
    use crate::request::RequestParams;
    use tokio_test::{assert_err, assert_ok};

    fn pricing(suffix: &str, price: &str) -> String {
        ok(
            GET_PRICING,
            &format!(
                r#"<UserGetPricingResult>
      <ProductType Name="domains">
        <ProductCategory Name="register">
          <Product Name="{suffix}">
            <Price Duration="1" DurationType="YEAR" Price="{price}" RegularPrice="{price}" YourPrice="{price}" Currency="USD" />
            <Price Duration="2" DurationType="YEAR" Price="99.00" RegularPrice="99.00" YourPrice="99.00" Currency="USD" />
          </Product>
        </ProductCategory>
      </ProductType>
    </UserGetPricingResult>"#
            ),
        )
    }

    fn hosts(records: &str) -> String {
        ok(
            GET_HOSTS,
            &format!(
                r#"<DomainDNSGetHostsResult Domain="example.com" EmailType="FWD" IsUsingOurDNS="true">{records}</DomainDNSGetHostsResult>"#
            ),
        )
    }

    fn set_hosts_ok() -> String {
        ok(SET_HOSTS, r#"<DomainDNSSetHostsResult Domain="example.com" IsSuccess="true" />"#)
    }

    fn host_names(params: &RequestParams) -> Vec<(String, String, String)> {
        (1..)
            .map_while(|i| {
                let name = params.get(&format!("HostName{}", i))?;
                let kind = params.get(&format!("RecordType{}", i))?;
                let address = params.get(&format!("Address{}", i))?;
                Some((name, kind, address))
            })
            .collect()
    }

    #[tokio::test]
    async fn test_check_with_pricing() {
        let client = client(&[
            ok(
                CHECK,
                r#"<DomainCheckResult Domain="alpha.com" Available="true" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="beta.io" Available="true" IsPremiumName="true" PremiumRegistrationPrice="1200.00" />
    <DomainCheckResult Domain="gamma.net" Available="false" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="delta.co.uk" Available="true" IsPremiumName="false" PremiumRegistrationPrice="0" />"#,
            ),
            pricing("co.uk", "8.98"),
            pricing("com", "10.98"),
            pricing("io", "32.98"),
        ]);

        let priced =
            assert_ok!(client.enhanced().check_with_pricing(&["alpha.com", "beta.io", "gamma.net", "delta.co.uk"]).await);

        assert_eq!(priced.len(), 4);
        assert_eq!(priced[0].price, DomainPrice::Regular(10.98));
        assert_eq!(priced[1].price, DomainPrice::Premium(1200.0));
        assert!(priced[1].is_premium);
        assert_eq!(priced[2].price, DomainPrice::NotApplicable);
        assert_eq!(priced[3].price, DomainPrice::Regular(8.98));

        let calls = client.transport().calls();
        let products: Vec<String> = calls[1..].iter().filter_map(|(_, p)| p.get("ProductName")).collect();
        assert_eq!(products, ["co.uk", "com", "io"]);
    }

    #[tokio::test]
    async fn test_failed_suffix_is_unavailable_and_others_still_priced() {
        let client = client(&[
            ok(
                CHECK,
                r#"<DomainCheckResult Domain="alpha.com" Available="true" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="alpha.xyz" Available="true" IsPremiumName="false" PremiumRegistrationPrice="0" />"#,
            ),
            error("2011298", "ProductType is invalid"),
            pricing("xyz", "1.98"),
        ]);

        let priced = assert_ok!(client.enhanced().check_with_pricing(&["alpha.com", "alpha.xyz"]).await);

        assert_eq!(priced[0].price, DomainPrice::Unavailable);
        assert_eq!(priced[0].price.amount(), None);
        assert_eq!(priced[1].price, DomainPrice::Regular(1.98));
        assert_eq!(client.transport().calls().len(), 3);
    }

    #[tokio::test]
    async fn test_check_failure_aborts() {
        let client = client(&[error("1011150", "Parameter RequestIP is invalid")]);
        assert_err!(client.enhanced().check_with_pricing(&["alpha.com"]).await);
    }

    #[tokio::test]
    async fn test_search_available_filters_taken_and_premium() {
        let client = client(&[
            ok(
                CHECK,
                r#"<DomainCheckResult Domain="acme.com" Available="false" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="acme.net" Available="true" IsPremiumName="false" PremiumRegistrationPrice="0" />
    <DomainCheckResult Domain="acme.org" Available="true" IsPremiumName="true" PremiumRegistrationPrice="450.00" />"#,
            ),
            pricing("net", "12.98"),
            pricing("org", "9.98"),
        ]);

        let found = assert_ok!(client.enhanced().search_available("acme", Some(&[".com", "net", ".org"]), false).await);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].domain, "acme.net");
        let (_, check) = &client.transport().calls()[0];
        assert_eq!(check.get("DomainList").as_deref(), Some("acme.com,acme.net,acme.org"));
    }

    #[tokio::test]
    async fn test_search_available_default_tlds() {
        let client = client(&[]);
        assert_err!(client.enhanced().search_available("acme", None, true).await);

        let (_, check) = &client.transport().calls()[0];
        assert_eq!(check.get("DomainList").as_deref(), Some("acme.com,acme.net,acme.org,acme.info,acme.biz"));
    }

    #[tokio::test]
    async fn test_update_record_replaces_match_and_keeps_others() {
        let client = client(&[
            hosts(
                r#"<host HostId="1" Name="@" Type="A" Address="192.0.2.1" MXPref="10" TTL="1800" />
      <host HostId="2" Name="www" Type="CNAME" Address="example.com." MXPref="10" TTL="1800" />"#,
            ),
            set_hosts_ok(),
        ]);

        let result =
            assert_ok!(client.enhanced().update_record("example.com", "@", RecordType::A, "192.0.2.9", 600, None).await);
        assert!(result.success);

        let params = client.transport().last_params();
        assert_eq!(
            host_names(&params),
            [
                ("@".to_string(), "A".to_string(), "192.0.2.9".to_string()),
                ("www".to_string(), "CNAME".to_string(), "example.com.".to_string()),
            ]
        );
        assert_eq!(params.get("TTL1").as_deref(), Some("600"));
        assert!(params.get("MXPref1").is_none());
    }

    #[tokio::test]
    async fn test_update_record_appends_mx_with_priority() {
        let client = client(&[
            hosts(r#"<host HostId="1" Name="@" Type="A" Address="192.0.2.1" MXPref="10" TTL="1800" />"#),
            set_hosts_ok(),
        ]);

        assert_ok!(
            client.enhanced().update_record("example.com", "@", RecordType::Mx, "mx.example.com", 1800, Some(5)).await
        );

        let params = client.transport().last_params();
        assert_eq!(host_names(&params).len(), 2);
        assert_eq!(params.get("RecordType2").as_deref(), Some("MX"));
        assert_eq!(params.get("MXPref2").as_deref(), Some("5"));
    }

    #[tokio::test]
    async fn test_update_record_validates_before_reading_hosts() {
        let client = client(&[]);
        assert_err!(client.enhanced().update_record("example.com", "@", RecordType::A, "192.0.2.9", 30, None).await);
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_record_by_value() {
        let client = client(&[
            hosts(
                r#"<host HostId="1" Name="@" Type="TXT" Address="v=spf1 -all" MXPref="10" TTL="1800" />
      <host HostId="2" Name="@" Type="TXT" Address="google-site-verification=abc" MXPref="10" TTL="1800" />
      <host HostId="3" Name="@" Type="A" Address="192.0.2.1" MXPref="10" TTL="1800" />"#,
            ),
            set_hosts_ok(),
        ]);

        assert_ok!(client.enhanced().delete_record("example.com", "@", RecordType::Txt, Some("v=spf1 -all")).await);

        let remaining: Vec<String> =
            host_names(&client.transport().last_params()).into_iter().map(|(_, _, address)| address).collect();
        assert_eq!(remaining, ["google-site-verification=abc", "192.0.2.1"]);
    }

    #[tokio::test]
    async fn test_delete_record_without_value_removes_all_matches() {
        let client = client(&[
            hosts(
                r#"<host HostId="1" Name="@" Type="TXT" Address="one" MXPref="10" TTL="1800" />
      <host HostId="2" Name="@" Type="TXT" Address="two" MXPref="10" TTL="1800" />"#,
            ),
            set_hosts_ok(),
        ]);

        assert_ok!(client.enhanced().delete_record("example.com", "@", RecordType::Txt, None).await);

        let (command, params) = client.transport().calls().pop().unwrap();
        assert_eq!(command, SET_HOSTS);
        assert!(host_names(&params).is_empty());
    }

    #[tokio::test]
    async fn test_set_a_records() {
        let client = client(&[
            hosts(
                r#"<host HostId="1" Name="@" Type="A" Address="192.0.2.1" MXPref="10" TTL="1800" />
      <host HostId="2" Name="www" Type="A" Address="192.0.2.1" MXPref="10" TTL="1800" />
      <host HostId="3" Name="mail" Type="A" Address="192.0.2.5" MXPref="10" TTL="1800" />"#,
            ),
            set_hosts_ok(),
        ]);

        assert_ok!(client.enhanced().set_a_records("example.com", "203.0.113.7").await);

        assert_eq!(
            host_names(&client.transport().last_params()),
            [
                ("mail".to_string(), "A".to_string(), "192.0.2.5".to_string()),
                ("@".to_string(), "A".to_string(), "203.0.113.7".to_string()),
                ("www".to_string(), "A".to_string(), "203.0.113.7".to_string()),
            ]
        );
    }
}
