//! Request-side types: enumerations accepted by the API, list options and DNS host input.
//!
//! Every enumeration parses case-insensitively from text and rejects anything else
//! with [`NamecheapError::InvalidInput`], so string input from a CLI or config file is
//! checked before a request is built.

use std::fmt;
use std::str::FromStr;

use serde_json::Value;

use crate::error::{NamecheapError, NamecheapResult};
use crate::models::HostRecord;
use crate::request::{ParamValue, RequestParams};

/// Largest page the list commands accept.
pub const MAX_PAGE_SIZE: u32 = 100;

macro_rules! api_enum {
    ($(#[$meta:meta])* $name:ident, $label:literal { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = NamecheapError;

            fn from_str(s: &str) -> NamecheapResult<Self> {
                let wanted = s.trim();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        NamecheapError::InvalidInput(format!(
                            "Invalid {} '{}'. Must be one of {}",
                            $label,
                            s,
                            allowed.join(", ")
                        ))
                    })
            }
        }

        impl From<$name> for ParamValue {
            fn from(value: $name) -> Self {
                ParamValue::Text(value.as_str().to_string())
            }
        }
    };
}

api_enum!(
    /// DNS record types accepted by `domains.dns.setHosts`
    RecordType, "record type" {
        A => "A",
        Aaaa => "AAAA",
        Cname => "CNAME",
        Mx => "MX",
        Txt => "TXT",
        Url => "URL",
        Url301 => "URL301",
        Frame => "FRAME",
    }
);

api_enum!(DomainSortBy, "sort order" {
    Name => "NAME",
    NameDesc => "NAME_DESC",
    ExpireDate => "EXPIREDATE",
    ExpireDateDesc => "EXPIREDATE_DESC",
    CreateDate => "CREATEDATE",
    CreateDateDesc => "CREATEDATE_DESC",
});

api_enum!(DomainListType, "list type" {
    All => "ALL",
    Expiring => "EXPIRING",
    Expired => "EXPIRED",
});

api_enum!(TransferSortBy, "sort order" {
    TransferDate => "TRANSFERDATE",
    TransferDateDesc => "TRANSFERDATE_DESC",
    DomainName => "DOMAINNAME",
    DomainNameDesc => "DOMAINNAME_DESC",
});

api_enum!(TransferListType, "list type" {
    All => "ALL",
    InProgress => "INPROGRESS",
    Cancelled => "CANCELLED",
    Completed => "COMPLETED",
});

api_enum!(SslSortBy, "sort order" {
    PurchaseDate => "PURCHASEDATE",
    PurchaseDateDesc => "PURCHASEDATE_DESC",
    SslType => "SSLTYPE",
    SslTypeDesc => "SSLTYPE_DESC",
    ExpireDate => "EXPIREDATETIME",
    ExpireDateDesc => "EXPIREDATETIME_DESC",
    HostName => "Host_Name",
    HostNameDesc => "Host_Name_DESC",
});

api_enum!(SslListType, "list type" {
    All => "ALL",
    Processing => "Processing",
    EmailSent => "EmailSent",
    TechnicalProblem => "TechnicalProblem",
    InProgress => "InProgress",
    Completed => "Completed",
    Deactivated => "Deactivated",
    Active => "Active",
    Cancelled => "Cancelled",
    NewPurchase => "NewPurchase",
    NewRenewal => "NewRenewal",
});

api_enum!(ProductType, "product type" {
    Domain => "DOMAIN",
    SslCertificate => "SSLCERTIFICATE",
    WhoisGuard => "WHOISGUARD",
});

api_enum!(ProductCategory, "product category" {
    Register => "REGISTER",
    Renew => "RENEW",
    Reactivate => "REACTIVATE",
    Transfer => "TRANSFER",
    WhoisGuard => "WHOISGUARD",
});

api_enum!(PricingAction, "action name" {
    Register => "REGISTER",
    Renew => "RENEW",
    Reactivate => "REACTIVATE",
    Transfer => "TRANSFER",
    WhoisGuard => "WHOISGUARD",
});

fn check_page_size(page_size: u32) -> NamecheapResult<()> {
    if page_size > MAX_PAGE_SIZE {
        return Err(NamecheapError::InvalidInput(format!("Maximum page size is {}", MAX_PAGE_SIZE)));
    }
    Ok(())
}

/// Options for `domains.getList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainListOptions {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: DomainSortBy,
    pub list_type: DomainListType,
    pub search_term: Option<String>,
}

impl Default for DomainListOptions {
    fn default() -> Self {
        Self { page: 1, page_size: 20, sort_by: DomainSortBy::Name, list_type: DomainListType::All, search_term: None }
    }
}

impl DomainListOptions {
    pub(crate) fn to_params(&self) -> NamecheapResult<RequestParams> {
        check_page_size(self.page_size)?;
        let mut params = RequestParams::new()
            .with("Page", self.page)
            .with("PageSize", self.page_size)
            .with("SortBy", self.sort_by)
            .with("ListType", self.list_type);
        params.insert_opt("SearchTerm", self.search_term.as_deref().filter(|s| !s.is_empty()));
        Ok(params)
    }
}

/// Options for `domains.transfer.getList`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferListOptions {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: TransferSortBy,
    pub list_type: TransferListType,
}

impl Default for TransferListOptions {
    fn default() -> Self {
        Self { page: 1, page_size: 20, sort_by: TransferSortBy::TransferDate, list_type: TransferListType::All }
    }
}

impl TransferListOptions {
    pub(crate) fn to_params(&self) -> NamecheapResult<RequestParams> {
        check_page_size(self.page_size)?;
        Ok(RequestParams::new()
            .with("Page", self.page)
            .with("PageSize", self.page_size)
            .with("SortBy", self.sort_by)
            .with("ListType", self.list_type))
    }
}

/// Options for `ssl.getList`; unset sort and filter are left to the API defaults
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SslListOptions {
    pub page: u32,
    pub page_size: u32,
    pub sort_by: Option<SslSortBy>,
    pub list_type: Option<SslListType>,
}

impl Default for SslListOptions {
    fn default() -> Self {
        Self { page: 1, page_size: 20, sort_by: None, list_type: None }
    }
}

impl SslListOptions {
    pub(crate) fn to_params(&self) -> NamecheapResult<RequestParams> {
        check_page_size(self.page_size)?;
        let mut params = RequestParams::new().with("Page", self.page).with("PageSize", self.page_size);
        params.insert_opt("SortBy", self.sort_by);
        params.insert_opt("ListType", self.list_type);
        Ok(params)
    }
}

/// Request for `users.getPricing`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingRequest {
    pub product_type: ProductType,
    pub product_category: Option<ProductCategory>,
    pub action_name: Option<PricingAction>,
    pub promotion_code: Option<String>,
    /// Product names, e.g. `com` or `co.uk` for domains.
    pub product_names: Vec<String>,
}

impl PricingRequest {
    pub fn new(product_type: ProductType) -> Self {
        Self { product_type, product_category: None, action_name: None, promotion_code: None, product_names: Vec::new() }
    }

    /// Registration price of the given domain suffixes
    pub fn domain_registration<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            product_category: Some(ProductCategory::Register),
            product_names: suffixes.into_iter().map(Into::into).collect(),
            ..Self::new(ProductType::Domain)
        }
    }

    pub fn category(mut self, category: ProductCategory) -> Self {
        self.product_category = Some(category);
        self
    }

    pub fn action(mut self, action: PricingAction) -> Self {
        self.action_name = Some(action);
        self
    }

    pub fn promotion_code(mut self, code: impl Into<String>) -> Self {
        self.promotion_code = Some(code.into());
        self
    }

    pub(crate) fn to_params(&self) -> RequestParams {
        let mut params = RequestParams::new().with("ProductType", self.product_type);
        params.insert_opt("ProductCategory", self.product_category);
        params.insert_opt("ActionName", self.action_name);
        params.insert_opt("PromotionCode", self.promotion_code.as_deref().filter(|s| !s.is_empty()));
        if !self.product_names.is_empty() {
            params.insert("ProductName", self.product_names.join(","));
        }
        params
    }
}

/// One DNS record to send with `domains.dns.setHosts`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostRecordInput {
    pub name: String,
    pub record_type: RecordType,
    pub address: String,
    /// Only sent for MX records.
    pub mx_pref: Option<u32>,
    pub ttl: u32,
}

impl HostRecordInput {
    pub const DEFAULT_TTL: u32 = 1800;
    pub const MIN_TTL: u32 = 60;
    pub const MAX_TTL: u32 = 86400;
    pub const DEFAULT_MX_PREF: u32 = 10;

    pub fn new(name: impl Into<String>, record_type: RecordType, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            record_type,
            address: address.into(),
            mx_pref: (record_type == RecordType::Mx).then_some(Self::DEFAULT_MX_PREF),
            ttl: Self::DEFAULT_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn with_mx_pref(mut self, mx_pref: u32) -> Self {
        if self.record_type == RecordType::Mx {
            self.mx_pref = Some(mx_pref);
        }
        self
    }

    pub fn validate(&self) -> NamecheapResult<()> {
        if self.name.trim().is_empty() {
            return Err(NamecheapError::InvalidInput("Host record name must not be empty".to_string()));
        }
        if self.address.trim().is_empty() {
            return Err(NamecheapError::InvalidInput(format!(
                "Host record '{}' is missing an address",
                self.name
            )));
        }
        if !(Self::MIN_TTL..=Self::MAX_TTL).contains(&self.ttl) {
            return Err(NamecheapError::InvalidInput(format!(
                "Invalid TTL value: {}. Must be an integer between {} and {}.",
                self.ttl,
                Self::MIN_TTL,
                Self::MAX_TTL
            )));
        }
        Ok(())
    }

    /// Append as the `index`-th (1-based) host of a setHosts request
    pub(crate) fn append_params(&self, index: usize, params: &mut RequestParams) {
        params.insert(format!("HostName{}", index), self.name.as_str());
        params.insert(format!("RecordType{}", index), self.record_type);
        params.insert(format!("Address{}", index), self.address.as_str());
        if self.record_type == RecordType::Mx {
            params.insert(format!("MXPref{}", index), self.mx_pref.unwrap_or(Self::DEFAULT_MX_PREF));
        }
        params.insert(format!("TTL{}", index), self.ttl);
    }
}

fn first_of<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| record.get(*k)).filter(|v| !v.is_null())
}

fn text_of(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn number_of(value: &Value, field: &str) -> NamecheapResult<u32> {
    let parsed = match value {
        Value::Number(n) => n.as_u64().and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        NamecheapError::InvalidInput(format!("Invalid {} value: {}. Must be a positive integer.", field, value))
    })
}

/// Build from a loose mapping using `Name`/`HostName`, `Type`/`RecordType`,
/// `Address`/`Value`, `MXPref`/`Priority` and `TTL`.
impl TryFrom<&Value> for HostRecordInput {
    type Error = NamecheapError;

    fn try_from(record: &Value) -> NamecheapResult<Self> {
        let missing = |fields: &str| {
            NamecheapError::InvalidInput(format!("Host record is missing required field {}", fields))
        };

        let name = first_of(record, &["Name", "HostName"])
            .and_then(text_of)
            .ok_or_else(|| missing("'Name' or 'HostName'"))?;
        let record_type: RecordType = first_of(record, &["Type", "RecordType"])
            .and_then(text_of)
            .ok_or_else(|| missing("'Type' or 'RecordType'"))?
            .parse()?;
        let address = first_of(record, &["Value", "Address"])
            .and_then(text_of)
            .ok_or_else(|| missing("'Value' or 'Address'"))?;

        let mut host = HostRecordInput::new(name, record_type, address);
        if let Some(ttl) = first_of(record, &["TTL"]) {
            host.ttl = number_of(ttl, "TTL")?;
        }
        if let Some(pref) = first_of(record, &["Priority", "MXPref"]) {
            host = host.with_mx_pref(number_of(pref, "MXPref")?);
        }
        Ok(host)
    }
}

/// Existing record as read back by `domains.dns.getHosts`
impl TryFrom<&HostRecord> for HostRecordInput {
    type Error = NamecheapError;

    fn try_from(record: &HostRecord) -> NamecheapResult<Self> {
        let record_type: RecordType = record.record_type.parse()?;
        let mut host = HostRecordInput::new(record.name.as_str(), record_type, record.address.as_str());
        if record.ttl > 0 {
            host.ttl = record.ttl;
        }
        if record.mx_pref > 0 {
            host = host.with_mx_pref(record.mx_pref);
        }
        Ok(host)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_enum_parsing_is_case_insensitive_and_strict() {
        assert_eq!("cname".parse::<RecordType>().unwrap(), RecordType::Cname);
        assert_eq!("EXPIREDATE_DESC".parse::<DomainSortBy>().unwrap(), DomainSortBy::ExpireDateDesc);
        assert_eq!("host_name".parse::<SslSortBy>().unwrap().as_str(), "Host_Name");

        let err = "SRV".parse::<RecordType>().unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(err.to_string().contains("A, AAAA, CNAME, MX, TXT, URL, URL301, FRAME"));
        assert!("SOMETIMES".parse::<DomainListType>().is_err());
        assert!("HOSTING".parse::<ProductType>().is_err());
    }

    #[test]
    fn test_domain_list_params() {
        let options = DomainListOptions { search_term: Some("shop".into()), ..Default::default() };
        let params = options.to_params().unwrap();
        assert_eq!(
            params.to_pairs(),
            vec![
                ("Page".to_string(), "1".to_string()),
                ("PageSize".to_string(), "20".to_string()),
                ("SortBy".to_string(), "NAME".to_string()),
                ("ListType".to_string(), "ALL".to_string()),
                ("SearchTerm".to_string(), "shop".to_string()),
            ]
        );

        let too_big = DomainListOptions { page_size: 101, ..Default::default() };
        assert_eq!(too_big.to_params().unwrap_err().code(), "INVALID_INPUT");
    }

    #[test]
    fn test_ssl_list_params_skip_unset_fields() {
        let params = SslListOptions::default().to_params().unwrap();
        assert_eq!(params.len(), 2);
        assert!(params.get("SortBy").is_none());
    }

    #[test]
    fn test_pricing_params() {
        let params = PricingRequest::domain_registration(["com", "co.uk"]).promotion_code("SAVE").to_params();
        assert_eq!(params.get("ProductType").as_deref(), Some("DOMAIN"));
        assert_eq!(params.get("ProductCategory").as_deref(), Some("REGISTER"));
        assert_eq!(params.get("ProductName").as_deref(), Some("com,co.uk"));
        assert_eq!(params.get("PromotionCode").as_deref(), Some("SAVE"));
        assert!(params.get("ActionName").is_none());
    }

    #[test]
    fn test_host_from_loose_mapping_accepts_aliases() {
        let host = HostRecordInput::try_from(&json!({
            "HostName": "mail",
            "RecordType": "MX",
            "Value": "mx.example.com",
            "Priority": 5,
            "TTL": "3600"
        }))
        .unwrap();

        assert_eq!(host.name, "mail");
        assert_eq!(host.record_type, RecordType::Mx);
        assert_eq!(host.address, "mx.example.com");
        assert_eq!(host.mx_pref, Some(5));
        assert_eq!(host.ttl, 3600);
    }

    #[test]
    fn test_host_defaults() {
        let mx = HostRecordInput::try_from(&json!({"Name": "@", "Type": "MX", "Address": "mx.example.com"})).unwrap();
        assert_eq!(mx.mx_pref, Some(10));
        assert_eq!(mx.ttl, 1800);

        let a = HostRecordInput::try_from(&json!({"Name": "@", "Type": "A", "Address": "192.0.2.1", "MXPref": 20}))
            .unwrap();
        assert_eq!(a.mx_pref, None);
    }

    #[test]
    fn test_host_missing_name_is_rejected() {
        let err = HostRecordInput::try_from(&json!({"Type": "A", "Address": "192.0.2.1"})).unwrap_err();
        assert_eq!(err.code(), "INVALID_INPUT");
        assert!(err.to_string().contains("'Name' or 'HostName'"));
    }

    #[test]
    fn test_ttl_range() {
        let host = HostRecordInput::new("@", RecordType::A, "192.0.2.1");
        assert!(host.clone().with_ttl(30).validate().is_err());
        assert!(host.clone().with_ttl(86401).validate().is_err());
        assert!(host.clone().with_ttl(60).validate().is_ok());

        let bad = HostRecordInput::try_from(&json!({"Name": "@", "Type": "A", "Address": "x", "TTL": "soon"}));
        assert_eq!(bad.unwrap_err().code(), "INVALID_INPUT");
    }

    #[test]
    fn test_append_params() {
        let mut params = RequestParams::new();
        HostRecordInput::new("@", RecordType::A, "192.0.2.1").append_params(1, &mut params);
        HostRecordInput::new("@", RecordType::Mx, "mx.example.com").with_mx_pref(20).append_params(2, &mut params);

        assert_eq!(params.get("HostName1").as_deref(), Some("@"));
        assert_eq!(params.get("TTL1").as_deref(), Some("1800"));
        assert!(params.get("MXPref1").is_none());
        assert_eq!(params.get("RecordType2").as_deref(), Some("MX"));
        assert_eq!(params.get("MXPref2").as_deref(), Some("20"));
    }
}
