use serde::Deserialize;
use serde_json::Value;

use super::{decode, require};
use crate::catalog::{DOMAIN_CHECK, DOMAIN_GENERIC, DOMAIN_LIST, DOMAIN_RENEW, ErrorCatalog, ErrorContext};
use crate::client::NamecheapClient;
use crate::domain::split_domain;
use crate::error::{NamecheapError, NamecheapResult};
use crate::models::{
    ApiDate, DomainCheckResult, DomainContacts, DomainInfo, DomainList, RenewResult, Tld, de,
};
use crate::normalize::ResultSpec;
use crate::options::DomainListOptions;
use crate::parser::DOMAIN_CHECK_COMMAND;
use crate::request::RequestParams;
use crate::transport::Transport;

pub const GET_LIST: &str = "namecheap.domains.getList";
pub const GET_CONTACTS: &str = "namecheap.domains.getContacts";
pub const GET_INFO: &str = "namecheap.domains.getInfo";
pub const GET_TLD_LIST: &str = "namecheap.domains.getTldList";
pub const RENEW: &str = "namecheap.domains.renew";

/// Most domains a single availability check accepts.
pub const MAX_CHECK_DOMAINS: usize = 50;

const CHECK_RESULTS: ResultSpec = ResultSpec::list(&["DomainCheckResult"]);
const LIST_DOMAINS: ResultSpec =
    ResultSpec::list(&["DomainGetListResult", "Domain"]).booleans(&["AutoRenew"]).datetimes(&["Created", "Expires"]);
const LIST_PAGING: ResultSpec = ResultSpec::object(&["Paging"]);
const CONTACTS: ResultSpec = ResultSpec::object(&["DomainContactsResult"]);
const INFO: ResultSpec = ResultSpec::object(&["DomainGetInfoResult"]);
const INFO_DETAILS: ResultSpec =
    ResultSpec::object(&["DomainGetInfoResult", "DomainDetails"]).datetimes(&["CreatedDate", "ExpiredDate"]);
const INFO_WHOISGUARD: ResultSpec = ResultSpec::object(&["DomainGetInfoResult", "Whoisguard"]).booleans(&["Enabled"]);
const INFO_DNS: ResultSpec = ResultSpec::object(&["DomainGetInfoResult", "DnsDetails"]);
const INFO_NAMESERVERS: ResultSpec = ResultSpec::list(&["DomainGetInfoResult", "DnsDetails", "Nameserver"]);
const TLDS: ResultSpec =
    ResultSpec::list(&["Tlds", "Tld"]).rename(&[("#text", "Description")]).booleans(&["NonRealTime"]);
const RENEW_RESULT: ResultSpec =
    ResultSpec::object(&["DomainRenewResult"]).rename(&[("Renew", "Renewed")]).booleans(&["Renewed"]);
const RENEW_DETAILS: ResultSpec = ResultSpec::object(&["DomainRenewResult", "DomainDetails"]).datetimes(&["ExpiredDate"]);

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct InfoHeader {
    #[serde(rename = "ID", deserialize_with = "de::string")]
    id: String,
    #[serde(deserialize_with = "de::string")]
    domain_name: String,
    #[serde(deserialize_with = "de::string")]
    owner_name: String,
    #[serde(deserialize_with = "de::opt_string")]
    status: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    is_owner: bool,
    #[serde(deserialize_with = "de::flag")]
    is_premium: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DomainDetails {
    #[serde(deserialize_with = "de::opt_date")]
    created_date: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    expired_date: Option<ApiDate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct Whoisguard {
    #[serde(deserialize_with = "de::flag")]
    enabled: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
struct DnsDetails {
    #[serde(deserialize_with = "de::opt_string")]
    provider_type: Option<String>,
    #[serde(rename = "IsUsingOurDNS", deserialize_with = "de::flag")]
    is_using_our_dns: bool,
}

/// `namecheap.domains.*` commands
pub struct DomainsApi<'a, T: Transport> {
    client: &'a NamecheapClient<T>,
}

impl<'a, T: Transport> DomainsApi<'a, T> {
    pub(crate) fn new(client: &'a NamecheapClient<T>) -> Self {
        Self { client }
    }

    /// Check availability of up to 50 domains
    pub async fn check<S: AsRef<str>>(&self, domains: &[S]) -> NamecheapResult<Vec<DomainCheckResult>> {
        if domains.is_empty() {
            return Err(NamecheapError::InvalidInput("At least one domain must be checked".to_string()));
        }
        if domains.len() > MAX_CHECK_DOMAINS {
            return Err(NamecheapError::InvalidInput(format!(
                "Maximum of {} domains can be checked in a single API call",
                MAX_CHECK_DOMAINS
            )));
        }

        let list: Vec<&str> = domains.iter().map(|d| d.as_ref().trim()).collect();
        let list = list.join(",");
        tracing::debug!("Checking availability of {}", list);

        let params = RequestParams::new().with("DomainList", list.as_str());
        let raw = self.client.request(DOMAIN_CHECK_COMMAND, params, &DOMAIN_CHECK, &ErrorContext::for_domain(list)).await?;
        decode(&raw, &CHECK_RESULTS)
    }

    /// List domains in the account, one page at a time
    pub async fn get_list(&self, options: &DomainListOptions) -> NamecheapResult<DomainList> {
        let params = options.to_params()?;
        let raw = self.client.request(GET_LIST, params, &DOMAIN_LIST, &ErrorContext::default()).await?;

        Ok(DomainList { domains: decode(&raw, &LIST_DOMAINS)?, paging: decode(&raw, &LIST_PAGING)? })
    }

    pub async fn get_contacts(&self, domain: &str) -> NamecheapResult<DomainContacts> {
        let raw = self.by_name(GET_CONTACTS, domain, RequestParams::new(), &DOMAIN_GENERIC).await?;
        decode(&raw, &CONTACTS)
    }

    pub async fn get_info(&self, domain: &str) -> NamecheapResult<DomainInfo> {
        let raw = self.by_name(GET_INFO, domain, RequestParams::new(), &DOMAIN_GENERIC).await?;

        let header: InfoHeader = decode(&raw, &INFO)?;
        let details: DomainDetails = decode(&raw, &INFO_DETAILS)?;
        let whoisguard: Whoisguard = decode(&raw, &INFO_WHOISGUARD)?;
        let dns: DnsDetails = decode(&raw, &INFO_DNS)?;

        Ok(DomainInfo {
            id: header.id,
            domain_name: header.domain_name,
            owner_name: header.owner_name,
            status: header.status,
            is_owner: header.is_owner,
            is_premium: header.is_premium,
            created: details.created_date,
            expires: details.expired_date,
            whoisguard_enabled: whoisguard.enabled,
            dns_provider: dns.provider_type,
            is_using_our_dns: dns.is_using_our_dns,
            nameservers: decode(&raw, &INFO_NAMESERVERS)?,
        })
    }

    /// TLDs offered through the API
    pub async fn get_tld_list(&self) -> NamecheapResult<Vec<Tld>> {
        let raw = self
            .client
            .request(GET_TLD_LIST, RequestParams::new(), &DOMAIN_GENERIC, &ErrorContext::default())
            .await?;
        decode(&raw, &TLDS)
    }

    pub async fn renew(&self, domain: &str, years: u32, promotion_code: Option<&str>) -> NamecheapResult<RenewResult> {
        if years == 0 {
            return Err(NamecheapError::InvalidInput("Renewal period must be at least one year".to_string()));
        }

        let mut params = RequestParams::new().with("Years", years);
        params.insert_opt("PromotionCode", promotion_code.filter(|c| !c.is_empty()));

        let raw = self.by_name(RENEW, domain, params, &DOMAIN_RENEW).await?;
        let details: DomainDetails = decode(&raw, &RENEW_DETAILS)?;
        let mut result: RenewResult = decode(&raw, &RENEW_RESULT)?;
        result.expires = details.expired_date;
        Ok(result)
    }

    /// Commands addressed by the full domain name
    async fn by_name(
        &self,
        command: &str,
        domain: &str,
        extra: RequestParams,
        catalog: &ErrorCatalog,
    ) -> NamecheapResult<Value> {
        require(domain, "Domain name")?;
        let name = split_domain(domain)?.registrable();
        let params = RequestParams::new().with("DomainName", name.as_str()).merge(extra);
        self.client.request(command, params, catalog, &ErrorContext::for_domain(name)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fixtures::{client, error, ok};
    use chrono::NaiveDate;
    use tokio_test::{assert_err, assert_ok};

    #[tokio::test]
    async fn test_check_returns_typed_results() {
        let client = client(&[ok(
            DOMAIN_CHECK_COMMAND,
            r#"<DomainCheckResult Domain="example.com" Available="false" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" PremiumRenewalPrice="0" PremiumRestorePrice="0" PremiumTransferPrice="0" IcannFee="0" EapFee="0.0" />
    <DomainCheckResult Domain="example.net" Available="true" ErrorNo="0" Description="" IsPremiumName="false" PremiumRegistrationPrice="0" PremiumRenewalPrice="0" PremiumRestorePrice="0" PremiumTransferPrice="0" IcannFee="0" EapFee="0.0" />"#,
        )]);

        let results = assert_ok!(client.domains().check(&["example.com", "example.net"]).await);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].domain, "example.com");
        assert!(!results[0].available);
        assert_eq!(results[1].domain, "example.net");
        assert!(results[1].available);
        assert!(!results[1].is_premium_name);

        let (command, params) = &client.transport().calls()[0];
        assert_eq!(command, DOMAIN_CHECK_COMMAND);
        assert_eq!(params.get("DomainList").as_deref(), Some("example.com,example.net"));
    }

    #[tokio::test]
    async fn test_check_limits_are_checked_before_sending() {
        let client = client(&[]);
        let too_many: Vec<String> = (0..51).map(|i| format!("name{}.com", i)).collect();

        let err = assert_err!(client.domains().check(&too_many).await);
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(assert_err!(client.domains().check::<&str>(&[]).await).to_string().contains("At least one"));
        assert!(client.transport().calls().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_api_key() {
        let client = client(&[error("1011102", "API Key is invalid or API access has not been enabled")]);

        let err = assert_err!(client.domains().check(&["example.com"]).await);
        assert_eq!(err.code(), "1011102");
        assert!(err.to_string().contains("https://ap.www.namecheap.com/settings/tools/apiaccess/"));
    }

    #[tokio::test]
    async fn test_get_list() {
        let client = client(&[ok(
            GET_LIST,
            r#"<DomainGetListResult>
      <Domain ID="127" Name="domain1.com" User="owner" Created="02/15/2016" Expires="02/15/2022" IsExpired="false" IsLocked="false" AutoRenew="false" WhoisGuard="ENABLED" IsPremium="true" IsOurDNS="true"/>
      <Domain ID="381" Name="domain2.com" User="owner" Created="04/28/2016" Expires="04/28/2023" IsExpired="false" IsLocked="false" AutoRenew="true" WhoisGuard="NOTPRESENT" IsPremium="false" IsOurDNS="true"/>
    </DomainGetListResult>
    <Paging>
      <TotalItems>12</TotalItems>
      <CurrentPage>1</CurrentPage>
      <PageSize>20</PageSize>
    </Paging>"#,
        )]);

        let list = assert_ok!(client.domains().get_list(&DomainListOptions::default()).await);

        assert_eq!(list.domains.len(), 2);
        assert_eq!(list.domains[0].id, "127");
        assert!(list.domains[0].is_premium);
        assert!(list.domains[1].auto_renew);
        assert_eq!(
            list.domains[0].created,
            Some(ApiDate::Parsed(NaiveDate::from_ymd_opt(2016, 2, 15).unwrap().and_hms_opt(0, 0, 0).unwrap()))
        );
        assert_eq!(list.paging.total_items, 12);
        assert_eq!(list.paging.page_size, 20);
        assert_eq!(client.transport().last_params().get("SortBy").as_deref(), Some("NAME"));
    }

    #[tokio::test]
    async fn test_get_contacts() {
        let client = client(&[ok(
            GET_CONTACTS,
            r#"<DomainContactsResult Domain="domain1.com" domainnameid="3152456">
      <Registrant ReadOnly="false">
        <OrganizationName>NameCheap.com</OrganizationName>
        <FirstName>John</FirstName>
        <LastName>Smith</LastName>
        <Address1>8939 S.cross Blvd</Address1>
        <Address2 />
        <City>CA</City>
        <PostalCode>90045</PostalCode>
        <Country>US</Country>
        <Phone>+1.6613102107</Phone>
        <EmailAddress>john@gmail.com</EmailAddress>
      </Registrant>
      <Tech ReadOnly="false"><FirstName>Jane</FirstName></Tech>
    </DomainContactsResult>"#,
        )]);

        let contacts = assert_ok!(client.domains().get_contacts("www.domain1.com").await);
        let registrant = contacts.registrant.unwrap();

        assert_eq!(contacts.domain, "domain1.com");
        assert_eq!(registrant.first_name.as_deref(), Some("John"));
        assert_eq!(registrant.address2, None);
        assert_eq!(registrant.postal_code.as_deref(), Some("90045"));
        assert_eq!(contacts.tech.unwrap().first_name.as_deref(), Some("Jane"));
        assert!(contacts.admin.is_none());
        assert_eq!(client.transport().last_params().get("DomainName").as_deref(), Some("domain1.com"));
    }

    #[tokio::test]
    async fn test_get_info() {
        let client = client(&[ok(
            GET_INFO,
            r#"<DomainGetInfoResult Status="Ok" ID="57579" DomainName="example.com" OwnerName="anUser" IsOwner="true" IsPremium="false">
      <DomainDetails>
        <CreatedDate>05/31/2011</CreatedDate>
        <ExpiredDate>05/31/2012</ExpiredDate>
        <NumYears>0</NumYears>
      </DomainDetails>
      <LockDetails />
      <Whoisguard Enabled="True">
        <ID>53536</ID>
        <ExpiredDate>11/04/2015</ExpiredDate>
      </Whoisguard>
      <DnsDetails ProviderType="FREE" IsUsingOurDNS="true" HostCount="5" EmailType="FWD" DynamicDNSStatus="false" IsFailover="false">
        <Nameserver>dns1.registrar-servers.com</Nameserver>
        <Nameserver>dns2.registrar-servers.com</Nameserver>
      </DnsDetails>
      <Modificationrights All="true" />
    </DomainGetInfoResult>"#,
        )]);

        let info = assert_ok!(client.domains().get_info("example.com").await);

        assert_eq!(info.id, "57579");
        assert_eq!(info.owner_name, "anUser");
        assert!(info.is_owner);
        assert!(info.whoisguard_enabled);
        assert!(info.is_using_our_dns);
        assert_eq!(info.dns_provider.as_deref(), Some("FREE"));
        assert_eq!(info.expires.unwrap().to_string(), "2012-05-31");
        assert_eq!(info.nameservers, vec!["dns1.registrar-servers.com", "dns2.registrar-servers.com"]);
    }

    #[tokio::test]
    async fn test_get_info_unknown_domain_uses_catalog() {
        let client = client(&[error("2019166", "Domain not found")]);

        let err = assert_err!(client.domains().get_info("missing.co.uk").await);
        let api = err.as_api().unwrap();
        assert_eq!(api.explanation.as_deref(), Some("Domain not found"));
        assert_eq!(api.fix.as_deref(), Some("Verify that 'missing.co.uk' exists and is spelled correctly"));
    }

    #[tokio::test]
    async fn test_get_tld_list() {
        let client = client(&[ok(
            GET_TLD_LIST,
            r#"<Tlds>
      <Tld Name="biz" NonRealTime="false" MinRegisterYears="1" MaxRegisterYears="10" MinRenewYears="1" MaxRenewYears="10" MinTransferYears="1" MaxTransferYears="10" IsApiRegisterable="true" IsApiRenewable="true" IsApiTransferable="false" IsEppRequired="false" Type="GTLD" Category="P">US Business</Tld>
    </Tlds>"#,
        )]);

        let tlds = assert_ok!(client.domains().get_tld_list().await);

        assert_eq!(tlds.len(), 1);
        assert_eq!(tlds[0].name, "biz");
        assert_eq!(tlds[0].description.as_deref(), Some("US Business"));
        assert_eq!(tlds[0].max_register_years, 10);
        assert!(tlds[0].is_api_registerable);
        assert!(!tlds[0].is_api_transferable);
        assert!(!tlds[0].non_real_time);
    }

    #[tokio::test]
    async fn test_renew() {
        let client = client(&[ok(
            RENEW,
            r#"<DomainRenewResult DomainName="domain1.com" DomainID="151378" Renew="true" OrderID="23569" TransactionID="25080" ChargedAmount="650.0000">
      <DomainDetails>
        <ExpiredDate>11/10/2028</ExpiredDate>
        <NumYears>0</NumYears>
      </DomainDetails>
    </DomainRenewResult>"#,
        )]);

        let renewed = assert_ok!(client.domains().renew("domain1.com", 2, Some("SAVE")).await);

        assert!(renewed.renewed);
        assert_eq!(renewed.domain_id, "151378");
        assert_eq!(renewed.charged_amount, 650.0);
        assert_eq!(renewed.expires.unwrap().to_string(), "2028-11-10");

        let params = client.transport().last_params();
        assert_eq!(params.get("DomainName").as_deref(), Some("domain1.com"));
        assert_eq!(params.get("Years").as_deref(), Some("2"));
        assert_eq!(params.get("PromotionCode").as_deref(), Some("SAVE"));
    }

    #[tokio::test]
    async fn test_renew_rejects_zero_years() {
        let client = client(&[]);
        assert_err!(client.domains().renew("domain1.com", 0, None).await);
        assert!(client.transport().calls().is_empty());
    }
}
