//! Typed results decoded from normalized command responses.
//!
//! XML attributes arrive as strings and leaf text is type-guessed, so the same
//! field can be `"1800"` in one response and `1800` in another. The helpers in
//! [`de`] accept either form; list fields always decode to a `Vec`, whatever the
//! number of elements in the response.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Date as reported by the API.
///
/// Values the normalizer could parse are kept as [`NaiveDateTime`]; anything else
/// (e.g. `11/5/2008 8:05:26 AM`) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiDate {
    Parsed(NaiveDateTime),
    Raw(String),
}

impl ApiDate {
    pub fn parse(text: &str) -> Self {
        match NaiveDateTime::parse_from_str(text.trim(), "%Y-%m-%dT%H:%M:%S") {
            Ok(parsed) => ApiDate::Parsed(parsed),
            Err(_) => ApiDate::Raw(text.to_string()),
        }
    }

    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            ApiDate::Parsed(dt) => Some(dt),
            ApiDate::Raw(_) => None,
        }
    }
}

impl fmt::Display for ApiDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiDate::Parsed(dt) => write!(f, "{}", dt.format("%Y-%m-%d")),
            ApiDate::Raw(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for ApiDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ApiDate::Parsed(dt) => serializer.collect_str(&dt.format("%Y-%m-%dT%H:%M:%S")),
            ApiDate::Raw(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> Deserialize<'de> for ApiDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = de::string(deserializer)?;
        Ok(ApiDate::parse(&text))
    }
}

/// Lenient field decoders for normalized mappings
pub mod de {
    use std::str::FromStr;

    use serde::de::{DeserializeOwned, Error};
    use serde::{Deserialize, Deserializer};
    use serde_json::Value;

    use super::ApiDate;
    use crate::normalize::bool_token;

    fn scalar_text(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Any scalar as text; empty elements become `""`
    pub fn string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?).unwrap_or_default())
    }

    pub fn opt_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
        Ok(scalar_text(Value::deserialize(deserializer)?).filter(|s| !s.trim().is_empty()))
    }

    /// Number from a JSON number or numeric text; empty values give the default
    pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: FromStr + Default,
        T::Err: std::fmt::Display,
    {
        match scalar_text(Value::deserialize(deserializer)?) {
            Some(text) if !text.trim().is_empty() => text.trim().parse().map_err(D::Error::custom),
            _ => Ok(T::default()),
        }
    }

    pub fn flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::Bool(b) => Ok(b),
            Value::Number(n) => Ok(n.as_i64() == Some(1)),
            Value::String(s) if s.trim().is_empty() => Ok(false),
            Value::String(s) => bool_token(&s).ok_or_else(|| D::Error::custom(format!("invalid boolean '{}'", s))),
            _ => Ok(false),
        }
    }

    /// One element or a sequence of them; absent or empty becomes an empty `Vec`
    pub fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        let items = match Value::deserialize(deserializer)? {
            Value::Array(items) => items,
            Value::Null => Vec::new(),
            Value::Object(map) if map.is_empty() => Vec::new(),
            single => vec![single],
        };
        items.into_iter().map(|item| serde_json::from_value(item).map_err(D::Error::custom)).collect()
    }

    pub fn opt_date<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<ApiDate>, D::Error> {
        Ok(opt_string(deserializer)?.map(|text| ApiDate::parse(&text)))
    }
}

/// Paging block of the list commands
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Paging {
    #[serde(deserialize_with = "de::number")]
    pub total_items: u32,
    #[serde(deserialize_with = "de::number")]
    pub current_page: u32,
    #[serde(deserialize_with = "de::number")]
    pub page_size: u32,
}

/// One entry of `domains.check`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainCheckResult {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(deserialize_with = "de::flag")]
    pub available: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_premium_name: bool,
    #[serde(deserialize_with = "de::number")]
    pub premium_registration_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub premium_renewal_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub premium_restore_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub premium_transfer_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub icann_fee: f64,
    #[serde(deserialize_with = "de::number")]
    pub eap_fee: f64,
    #[serde(deserialize_with = "de::opt_string")]
    pub error_no: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
}

/// One domain of `domains.getList`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainListEntry {
    #[serde(rename = "ID", deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::string")]
    pub user: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub created: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expires: Option<ApiDate>,
    #[serde(deserialize_with = "de::flag")]
    pub is_expired: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_locked: bool,
    #[serde(deserialize_with = "de::flag")]
    pub auto_renew: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub whois_guard: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub is_premium: bool,
    #[serde(rename = "IsOurDNS", deserialize_with = "de::flag")]
    pub is_our_dns: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainList {
    pub domains: Vec<DomainListEntry>,
    pub paging: Paging,
}

/// Contact block of `domains.getContacts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Contact {
    #[serde(deserialize_with = "de::flag")]
    pub read_only: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub organization_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub job_title: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub address1: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub address2: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub city: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub state_province: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub state_province_choice: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub postal_code: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub phone_ext: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub fax: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub fax_ext: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub email_address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DomainContacts {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    pub registrant: Option<Contact>,
    pub tech: Option<Contact>,
    pub admin: Option<Contact>,
    pub aux_billing: Option<Contact>,
}

/// Result of `domains.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DomainInfo {
    pub id: String,
    pub domain_name: String,
    pub owner_name: String,
    pub status: Option<String>,
    pub is_owner: bool,
    pub is_premium: bool,
    pub created: Option<ApiDate>,
    pub expires: Option<ApiDate>,
    pub whoisguard_enabled: bool,
    pub dns_provider: Option<String>,
    pub is_using_our_dns: bool,
    pub nameservers: Vec<String>,
}

/// One TLD of `domains.getTldList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Tld {
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub non_real_time: bool,
    #[serde(deserialize_with = "de::number")]
    pub min_register_years: u32,
    #[serde(deserialize_with = "de::number")]
    pub max_register_years: u32,
    #[serde(deserialize_with = "de::number")]
    pub min_renew_years: u32,
    #[serde(deserialize_with = "de::number")]
    pub max_renew_years: u32,
    #[serde(deserialize_with = "de::number")]
    pub min_transfer_years: u32,
    #[serde(deserialize_with = "de::number")]
    pub max_transfer_years: u32,
    #[serde(deserialize_with = "de::flag")]
    pub is_api_registerable: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_api_renewable: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_api_transferable: bool,
    #[serde(deserialize_with = "de::flag")]
    pub is_epp_required: bool,
    #[serde(rename = "Type", deserialize_with = "de::opt_string")]
    pub tld_type: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub category: Option<String>,
}

/// Result of `domains.renew`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct RenewResult {
    #[serde(deserialize_with = "de::string")]
    pub domain_name: String,
    #[serde(rename = "DomainID", deserialize_with = "de::string")]
    pub domain_id: String,
    #[serde(deserialize_with = "de::flag")]
    pub renewed: bool,
    #[serde(rename = "OrderID", deserialize_with = "de::string")]
    pub order_id: String,
    #[serde(rename = "TransactionID", deserialize_with = "de::string")]
    pub transaction_id: String,
    #[serde(deserialize_with = "de::number")]
    pub charged_amount: f64,
    #[serde(skip_deserializing)]
    pub expires: Option<ApiDate>,
}

/// One record of `domains.dns.getHosts`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HostRecord {
    #[serde(deserialize_with = "de::string")]
    pub host_id: String,
    #[serde(deserialize_with = "de::string")]
    pub name: String,
    #[serde(rename = "Type", deserialize_with = "de::string")]
    pub record_type: String,
    #[serde(deserialize_with = "de::string")]
    pub address: String,
    #[serde(rename = "MXPref", deserialize_with = "de::number")]
    pub mx_pref: u32,
    #[serde(rename = "TTL", deserialize_with = "de::number")]
    pub ttl: u32,
    #[serde(deserialize_with = "de::flag")]
    pub is_active: bool,
    #[serde(rename = "IsDDNSEnabled", deserialize_with = "de::flag")]
    pub is_ddns_enabled: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct HostsResult {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub email_type: Option<String>,
    #[serde(rename = "IsUsingOurDNS", deserialize_with = "de::flag")]
    pub is_using_our_dns: bool,
    #[serde(skip_deserializing)]
    pub hosts: Vec<HostRecord>,
}

/// Result of `domains.dns.setHosts`, `setDefault` and `setCustom`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DnsUpdateResult {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(rename = "IsSuccess", deserialize_with = "de::flag")]
    pub success: bool,
}

/// Result of `domains.dns.getList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct DnsServerList {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(rename = "IsUsingOurDNS", deserialize_with = "de::flag")]
    pub is_using_our_dns: bool,
    #[serde(rename = "Nameserver", deserialize_with = "de::list")]
    pub nameservers: Vec<String>,
}

/// Result of `domains.ns.create`, `delete` and `update`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NameserverResult {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(deserialize_with = "de::string")]
    pub nameserver: String,
    #[serde(rename = "IP", deserialize_with = "de::opt_string")]
    pub ip: Option<String>,
    #[serde(rename = "IsSuccess", deserialize_with = "de::flag")]
    pub success: bool,
}

/// Result of `domains.ns.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct NameserverInfo {
    #[serde(deserialize_with = "de::string")]
    pub domain: String,
    #[serde(deserialize_with = "de::string")]
    pub nameserver: String,
    #[serde(rename = "IP", deserialize_with = "de::opt_string")]
    pub ip: Option<String>,
    #[serde(skip_deserializing)]
    pub statuses: Vec<String>,
}

/// Result of `domains.transfer.create`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransferCreateResult {
    #[serde(deserialize_with = "de::string")]
    pub domain_name: String,
    #[serde(deserialize_with = "de::flag")]
    pub transferred: bool,
    #[serde(rename = "TransferID", deserialize_with = "de::string")]
    pub transfer_id: String,
    #[serde(rename = "StatusID", deserialize_with = "de::opt_string")]
    pub status_id: Option<String>,
    #[serde(rename = "OrderID", deserialize_with = "de::opt_string")]
    pub order_id: Option<String>,
    #[serde(rename = "TransactionID", deserialize_with = "de::opt_string")]
    pub transaction_id: Option<String>,
    #[serde(deserialize_with = "de::number")]
    pub charged_amount: f64,
}

/// Result of `domains.transfer.getStatus`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransferStatus {
    #[serde(rename = "TransferID", deserialize_with = "de::string")]
    pub transfer_id: String,
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    #[serde(rename = "StatusID", deserialize_with = "de::opt_string")]
    pub status_id: Option<String>,
}

/// Result of `domains.transfer.updateStatus`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransferUpdateResult {
    #[serde(rename = "TransferID", deserialize_with = "de::string")]
    pub transfer_id: String,
    #[serde(deserialize_with = "de::flag")]
    pub resubmitted: bool,
}

/// One transfer of `domains.transfer.getList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TransferEntry {
    #[serde(rename = "ID", deserialize_with = "de::string")]
    pub id: String,
    #[serde(deserialize_with = "de::string")]
    pub domain_name: String,
    #[serde(deserialize_with = "de::string")]
    pub user: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub transfer_date: Option<ApiDate>,
    #[serde(rename = "OrderID", deserialize_with = "de::opt_string")]
    pub order_id: Option<String>,
    #[serde(rename = "StatusID", deserialize_with = "de::opt_string")]
    pub status_id: Option<String>,
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub status_date: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_string")]
    pub status_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferList {
    pub transfers: Vec<TransferEntry>,
    pub paging: Paging,
}

/// One certificate of `ssl.getList`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SslEntry {
    #[serde(rename = "CertificateID", deserialize_with = "de::string")]
    pub certificate_id: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub host_name: Option<String>,
    #[serde(rename = "SSLType", deserialize_with = "de::string")]
    pub ssl_type: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub purchase_date: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expire_date: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub activation_expire_date: Option<ApiDate>,
    #[serde(deserialize_with = "de::flag")]
    pub is_expired: bool,
    #[serde(deserialize_with = "de::string")]
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SslList {
    pub certificates: Vec<SslEntry>,
    pub paging: Paging,
}

/// Certificate ordered by `ssl.create`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SslCertificate {
    #[serde(rename = "CertificateID", deserialize_with = "de::string")]
    pub certificate_id: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub created: Option<ApiDate>,
    #[serde(rename = "SSLType", deserialize_with = "de::string")]
    pub ssl_type: String,
    #[serde(deserialize_with = "de::number")]
    pub years: u32,
    #[serde(deserialize_with = "de::string")]
    pub status: String,
}

/// Result of `ssl.create`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SslCreateResult {
    #[serde(rename = "IsSuccess", deserialize_with = "de::flag")]
    pub success: bool,
    #[serde(rename = "OrderId", alias = "OrderID", deserialize_with = "de::string")]
    pub order_id: String,
    #[serde(rename = "TransactionId", alias = "TransactionID", deserialize_with = "de::string")]
    pub transaction_id: String,
    #[serde(deserialize_with = "de::number")]
    pub charged_amount: f64,
    #[serde(skip_deserializing)]
    pub certificates: Vec<SslCertificate>,
}

/// Result of `ssl.getInfo`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SslInfo {
    #[serde(deserialize_with = "de::string")]
    pub status: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub status_description: Option<String>,
    #[serde(rename = "Type", deserialize_with = "de::string")]
    pub ssl_type: String,
    #[serde(deserialize_with = "de::opt_date")]
    pub issued_on: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub expires: Option<ApiDate>,
    #[serde(deserialize_with = "de::opt_date")]
    pub activation_expire_date: Option<ApiDate>,
    #[serde(rename = "OrderId", alias = "OrderID", deserialize_with = "de::opt_string")]
    pub order_id: Option<String>,
    #[serde(skip_deserializing)]
    pub common_name: Option<String>,
    #[serde(skip_deserializing)]
    pub approver_email: Option<String>,
    #[serde(skip_deserializing)]
    pub provider: Option<String>,
}

/// Details of `ssl.parseCSR`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct CsrDetails {
    #[serde(rename = "CommonName", deserialize_with = "de::string")]
    pub common_name: String,
    #[serde(deserialize_with = "de::opt_string")]
    pub domain_name: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub country: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub organisation_unit: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub organisation: Option<String>,
    #[serde(deserialize_with = "de::flag")]
    pub valid_true_domain: bool,
    #[serde(deserialize_with = "de::opt_string")]
    pub state: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub locality: Option<String>,
    #[serde(deserialize_with = "de::opt_string")]
    pub email: Option<String>,
}

/// Result of `ssl.activate`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct SslActivateResult {
    #[serde(rename = "ID", deserialize_with = "de::string")]
    pub id: String,
    #[serde(rename = "IsSuccess", deserialize_with = "de::flag")]
    pub success: bool,
}

/// One price row of `users.getPricing`, flattened from its product tree
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ProductPrice {
    #[serde(skip_deserializing)]
    pub product_type: String,
    #[serde(skip_deserializing)]
    pub category: String,
    #[serde(skip_deserializing)]
    pub product: String,
    #[serde(deserialize_with = "de::number")]
    pub duration: u32,
    #[serde(deserialize_with = "de::string")]
    pub duration_type: String,
    #[serde(deserialize_with = "de::number")]
    pub price: f64,
    #[serde(deserialize_with = "de::number")]
    pub regular_price: f64,
    #[serde(deserialize_with = "de::number")]
    pub your_price: f64,
    #[serde(deserialize_with = "de::string")]
    pub currency: String,
}

/// Result of `users.getBalances`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Balances {
    #[serde(deserialize_with = "de::string")]
    pub currency: String,
    #[serde(deserialize_with = "de::number")]
    pub available_balance: f64,
    #[serde(deserialize_with = "de::number")]
    pub account_balance: f64,
    #[serde(deserialize_with = "de::number")]
    pub earned_amount: f64,
    #[serde(deserialize_with = "de::number")]
    pub withdrawable_amount: f64,
    #[serde(deserialize_with = "de::number")]
    pub funds_required_for_auto_renew: f64,
}

/// Result of `users.changePassword`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct PasswordChangeResult {
    #[serde(deserialize_with = "de::flag")]
    pub success: bool,
    #[serde(deserialize_with = "de::string")]
    pub user_id: String,
}

/// Registration price reported by check-with-pricing
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "amount", rename_all = "snake_case")]
pub enum DomainPrice {
    /// Premium registration price from the availability check.
    Premium(f64),
    /// Regular registration price of the suffix.
    Regular(f64),
    /// The pricing lookup failed or returned no price for the suffix.
    Unavailable,
    /// The domain is taken.
    NotApplicable,
}

impl DomainPrice {
    pub fn amount(&self) -> Option<f64> {
        match self {
            DomainPrice::Premium(p) | DomainPrice::Regular(p) => Some(*p),
            DomainPrice::Unavailable | DomainPrice::NotApplicable => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedDomain {
    pub domain: String,
    pub available: bool,
    pub is_premium: bool,
    pub price: DomainPrice,
}
