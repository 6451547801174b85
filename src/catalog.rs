//! Per-command error catalogs and the call context used to fill their templates.
//!
//! A catalog maps upstream error numbers to an explanation and a suggested fix.
//! Templates may reference `{domain_name}`, `{nameserver}`, `{certificate_id}`,
//! `{transfer_id}` or `{product_type}`; tokens without a context value stay as written.

use crate::error::{ApiError, UNKNOWN_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub code: &'static str,
    pub explanation: &'static str,
    pub fix: &'static str,
}

const fn entry(code: &'static str, explanation: &'static str, fix: &'static str) -> CatalogEntry {
    CatalogEntry { code, explanation, fix }
}

/// Error table for one command, layered on top of shared entries
#[derive(Debug, Clone, Copy)]
pub struct ErrorCatalog {
    pub entries: &'static [CatalogEntry],
    pub shared: &'static [CatalogEntry],
    /// Entry used when the code is in neither table.
    pub unknown: Option<CatalogEntry>,
}

impl ErrorCatalog {
    pub const EMPTY: ErrorCatalog = ErrorCatalog { entries: &[], shared: &[], unknown: None };

    /// Find the entry for `code`: command table, shared table, global table, then `unknown`.
    pub fn lookup(&self, code: &str) -> Option<&CatalogEntry> {
        self.entries
            .iter()
            .chain(self.shared)
            .chain(GLOBAL_ERRORS)
            .find(|e| e.code == code)
            .or(self.unknown.as_ref())
    }
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Values available to catalog templates for one call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    pub domain_name: Option<String>,
    pub nameserver: Option<String>,
    pub certificate_id: Option<String>,
    pub transfer_id: Option<String>,
    pub product_type: Option<String>,
}

impl ErrorContext {
    pub fn for_domain(domain_name: impl Into<String>) -> Self {
        Self { domain_name: Some(domain_name.into()), ..Self::default() }
    }

    pub fn nameserver(mut self, nameserver: impl Into<String>) -> Self {
        self.nameserver = Some(nameserver.into());
        self
    }

    pub fn certificate(certificate_id: impl ToString) -> Self {
        Self { certificate_id: Some(certificate_id.to_string()), ..Self::default() }
    }

    pub fn transfer(transfer_id: impl ToString) -> Self {
        Self { transfer_id: Some(transfer_id.to_string()), ..Self::default() }
    }

    pub fn product(product_type: impl Into<String>) -> Self {
        Self { product_type: Some(product_type.into()), ..Self::default() }
    }

    pub fn get(&self, token: &str) -> Option<&str> {
        let value = match token {
            "domain_name" => &self.domain_name,
            "nameserver" => &self.nameserver,
            "certificate_id" => &self.certificate_id,
            "transfer_id" => &self.transfer_id,
            "product_type" => &self.product_type,
            _ => return None,
        };
        value.as_deref()
    }

    /// Replace every `{token}` that has a value; leave the rest verbatim
    pub fn render(&self, template: &str) -> String {
        let mut out = String::with_capacity(template.len());
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let after = &rest[open + 1..];
            match after.find('}') {
                Some(close) => {
                    let token = &after[..close];
                    match self.get(token) {
                        Some(value) => out.push_str(value),
                        None => {
                            out.push('{');
                            out.push_str(token);
                            out.push('}');
                        }
                    }
                    rest = &after[close + 1..];
                }
                None => {
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}

/// Build the API error for `code`, enriched from `catalog` when it knows the code.
pub fn build_api_error(code: &str, message: &str, catalog: &ErrorCatalog, context: &ErrorContext) -> ApiError {
    let mut error = ApiError::new(code, message);
    if let Some(found) = catalog.lookup(&error.code) {
        error.explanation = Some(context.render(found.explanation));
        error.fix = Some(context.render(found.fix));
    }
    error
}

/// Account-level errors that any command can return.
pub const GLOBAL_ERRORS: &[CatalogEntry] = &[
    entry(
        "1011102",
        "API Key is invalid or API access has not been enabled",
        "Please verify your API key and ensure API access is enabled at https://ap.www.namecheap.com/settings/tools/apiaccess/",
    ),
    entry(
        "1011147",
        "IP is not in the whitelist",
        "Please whitelist your IP address in your Namecheap API settings",
    ),
    entry("1010900", "Invalid username", "Please check your username is correct"),
];

pub const DOMAIN_ERRORS: &[CatalogEntry] = &[
    entry("2019166", "Domain not found", "Verify that '{domain_name}' exists and is spelled correctly"),
    entry(
        "2016166",
        "Domain is not associated with your account",
        "Check that '{domain_name}' is registered with your Namecheap account",
    ),
    entry("2011170", "Validation error from PromotionCode", "Check the promotion code or remove it"),
    entry("2011280", "TLD is invalid", "Verify the TLD is supported and spelled correctly"),
    entry("4023330", "Unable to process the request", "Retry later or contact Namecheap support"),
];

const NS_SHARED: &[CatalogEntry] = &[
    entry("2019166", "Domain not found", "Verify the domain exists and is spelled correctly"),
    entry(
        "2016166",
        "Domain is not associated with your account",
        "Check that the domain is registered with your Namecheap account",
    ),
    entry("2011177", "Nameserver is invalid", "Ensure the nameserver has proper format (e.g., ns1.example.com)"),
];

pub const DOMAIN_CHECK: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("3031510", "Error response from the provider", "Check fewer domains or retry later"),
        entry("2030280", "TLD is not supported in API", "Remove unsupported TLDs from the domain list"),
    ],
    shared: &[],
    unknown: Some(entry(UNKNOWN_ERROR, "Domain availability check failed", "Verify that every domain name is valid")),
};

pub const DOMAIN_GENERIC: ErrorCatalog = ErrorCatalog {
    entries: &[],
    shared: DOMAIN_ERRORS,
    unknown: Some(entry(UNKNOWN_ERROR, "Operation failed", "Verify that '{domain_name}' exists and all parameters are correct")),
};

pub const DOMAIN_LIST: ErrorCatalog = ErrorCatalog {
    entries: &[entry("5050900", "Unknown exceptions", "Retry later or contact Namecheap support")],
    shared: &[],
    unknown: Some(entry(UNKNOWN_ERROR, "Domain list request failed", "Verify the paging and sort parameters")),
};

pub const DOMAIN_RENEW: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2033409", "Possibly a logical error at the authentication phase", "Check the order status of '{domain_name}'"),
        entry("2528166", "Order creation failed", "Check your account balance and retry"),
        entry("2020166", "Domain has expired and cannot be renewed", "Reactivate '{domain_name}' instead"),
    ],
    shared: DOMAIN_ERRORS,
    unknown: Some(entry(UNKNOWN_ERROR, "Domain renewal failed", "Verify that '{domain_name}' exists and is eligible for renewal")),
};

pub const DNS_HOSTS: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2030166", "Edit permission for domain is not supported", "Check that '{domain_name}' uses Namecheap DNS"),
        entry("2050900", "Unknown error when setting hosts", "Check every host record for invalid values"),
        entry("3013288", "Too many records", "Remove some host records for '{domain_name}'"),
        entry("3031510", "Error from the DNS provider", "Retry later"),
        entry("3050900", "Unknown response from the DNS provider", "Retry later"),
    ],
    shared: DOMAIN_ERRORS,
    unknown: Some(entry(UNKNOWN_ERROR, "DNS host operation failed", "Verify that '{domain_name}' exists and uses Namecheap DNS")),
};

pub const DNS_NAMESERVERS: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011177", "Nameserver is invalid", "Ensure every nameserver has proper format (e.g., ns1.example.com)"),
        entry("2030166", "Edit permission for domain is not supported", "Check that you may edit '{domain_name}'"),
        entry("3031510", "Error from the registry", "Retry later"),
    ],
    shared: DOMAIN_ERRORS,
    unknown: Some(entry(UNKNOWN_ERROR, "Nameserver change failed", "Verify that '{domain_name}' exists and the nameservers are valid")),
};

pub const NS_CREATE: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011153", "Email address is invalid", "Provide a valid email address"),
        entry("2011163", "Phone is invalid", "Provide a valid phone number"),
        entry("2011178", "IP Address is invalid", "Provide a valid IP address in the correct format"),
        entry("2011280", "TLD is invalid", "Verify the TLD is supported and spelled correctly"),
    ],
    shared: NS_SHARED,
    unknown: Some(entry(UNKNOWN_ERROR, "Nameserver creation failed", "Verify that '{domain_name}' exists and all parameters are correct")),
};

pub const NS_DELETE: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("3031510", "Error deleting nameserver", "There was a problem with the nameserver deletion request"),
        entry("3031511", "Nameserver does not exist", "The specified nameserver does not exist for this domain"),
    ],
    shared: NS_SHARED,
    unknown: Some(entry(
        UNKNOWN_ERROR,
        "Nameserver deletion failed",
        "Verify that '{domain_name}' exists and nameserver '{nameserver}' is valid",
    )),
};

pub const NS_UPDATE: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011153", "Nameserver not found", "Verify that the nameserver exists for this domain"),
        entry("2011154", "Nameserver is not valid for this domain", "The nameserver cannot be updated for this domain"),
        entry("2011155", "Invalid IP address", "Provide a valid IP address in the correct format"),
    ],
    shared: NS_SHARED,
    unknown: Some(entry(UNKNOWN_ERROR, "Nameserver update failed", "Verify that '{domain_name}' exists and all parameters are correct")),
};

pub const NS_INFO: ErrorCatalog = ErrorCatalog {
    entries: &[],
    shared: NS_SHARED,
    unknown: Some(entry(
        UNKNOWN_ERROR,
        "Failed to get nameserver information",
        "Verify that '{domain_name}' exists and nameserver '{nameserver}' is valid",
    )),
};

pub const TRANSFER: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011170", "Validation error from PromotionCode", "Check the promotion code or remove it"),
        entry("2011280", "TLD is not valid for transfer", "Verify the TLD of '{domain_name}' can be transferred"),
        entry("2030280", "TLD is not supported in API", "Transfer '{domain_name}' through the website"),
        entry("2528166", "Order creation failed", "Check your account balance and retry"),
        entry("2011166", "Transfer ID is invalid", "Verify transfer '{transfer_id}' exists"),
        entry("2010320", "Transfer status cannot be updated", "Only transfers waiting for resubmission can be updated"),
    ],
    shared: &[],
    unknown: Some(entry(UNKNOWN_ERROR, "Transfer operation failed", "Verify the domain and transfer parameters")),
};

pub const SSL: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011166", "Certificate ID is invalid", "Verify certificate '{certificate_id}' exists in your account"),
        entry("2011170", "Validation error from PromotionCode", "Check the promotion code or remove it"),
        entry("2011280", "Certificate type is invalid", "Use a certificate type offered by Namecheap"),
        entry("2011297", "Approver email is invalid", "Use an approver email returned by ssl.getApproverEmailList"),
        entry("2011325", "CSR is invalid", "Regenerate the CSR and paste it without modification"),
        entry("2528166", "Order creation failed", "Check your account balance and retry"),
    ],
    shared: &[],
    unknown: Some(entry(UNKNOWN_ERROR, "SSL operation failed", "Verify the certificate parameters")),
};

pub const USERS: ErrorCatalog = ErrorCatalog {
    entries: &[
        entry("2011170", "Validation error from PromotionCode", "Check the promotion code or remove it"),
        entry("2011298", "ProductType is invalid", "Use DOMAIN, SSLCERTIFICATE or WHOISGUARD instead of '{product_type}'"),
        entry("4022312", "Could not retrieve balances", "Retry later"),
        entry("2011174", "Old password is incorrect", "Check the current password"),
    ],
    shared: &[],
    unknown: Some(entry(UNKNOWN_ERROR, "User account operation failed", "Verify the request parameters")),
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_known_tokens_only() {
        let ctx = ErrorContext::for_domain("example.com").nameserver("ns1.example.com");
        assert_eq!(
            ctx.render("Verify '{domain_name}' and '{nameserver}' ({certificate_id}) {unknown} {"),
            "Verify 'example.com' and 'ns1.example.com' ({certificate_id}) {unknown} {"
        );
    }

    #[test]
    fn test_render_repeated_token() {
        let ctx = ErrorContext::for_domain("a.io");
        assert_eq!(ctx.render("{domain_name}/{domain_name}"), "a.io/a.io");
    }

    #[test]
    fn test_lookup_order() {
        // Command entry wins over the shared one for the same code.
        assert_eq!(NS_UPDATE.lookup("2011153").unwrap().explanation, "Nameserver not found");
        assert_eq!(NS_CREATE.lookup("2011153").unwrap().explanation, "Email address is invalid");
        assert_eq!(NS_CREATE.lookup("2019166").unwrap().explanation, "Domain not found");
        assert_eq!(NS_CREATE.lookup("1011147").unwrap().explanation, "IP is not in the whitelist");
        assert_eq!(NS_CREATE.lookup("999").unwrap().explanation, "Nameserver creation failed");
        assert!(ErrorCatalog::EMPTY.lookup("999").is_none());
    }

    #[test]
    fn test_build_api_error_from_catalog() {
        let ctx = ErrorContext::for_domain("example.com").nameserver("ns1.example.com");
        let err = build_api_error("424242", "Something broke", &NS_DELETE, &ctx);

        assert_eq!(err.code, "424242");
        assert_eq!(err.message, "Something broke");
        assert_eq!(err.explanation.as_deref(), Some("Nameserver deletion failed"));
        assert_eq!(
            err.fix.as_deref(),
            Some("Verify that 'example.com' exists and nameserver 'ns1.example.com' is valid")
        );
    }

    #[test]
    fn test_build_api_error_without_entry() {
        let err = build_api_error("424242", "Something broke", &ErrorCatalog::EMPTY, &ErrorContext::default());
        assert!(err.explanation.is_none());
        assert!(err.to_string().starts_with("Operation failed"));
    }
}
