//! SLD/TLD splitting based on the public suffix list.
//!
//! `foo.bar.co.uk` splits into `bar` and `co.uk`; a naive first-dot split would
//! wrongly give `foo` and `bar.co.uk`.

use crate::error::{NamecheapError, NamecheapResult};

/// Registrable label and public suffix of a domain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainParts {
    /// Second-level label, e.g. `bar` for `bar.co.uk`.
    pub sld: String,
    /// Public suffix without a leading dot, e.g. `co.uk`.
    pub tld: String,
}

impl DomainParts {
    pub fn parse(domain: &str) -> NamecheapResult<Self> {
        split_domain(domain)
    }

    pub fn registrable(&self) -> String {
        format!("{}.{}", self.sld, self.tld)
    }
}

pub fn split_domain(domain: &str) -> NamecheapResult<DomainParts> {
    let cleaned = domain.trim().trim_end_matches('.').to_ascii_lowercase();
    if cleaned.is_empty() {
        return Err(NamecheapError::InvalidInput("Domain name must not be empty".to_string()));
    }

    let name = addr::parse_domain_name(&cleaned)
        .map_err(|e| NamecheapError::InvalidInput(format!("Invalid domain name '{}': {}", domain, e)))?;

    let suffix = name.suffix();
    let root = name.root().ok_or_else(|| {
        NamecheapError::InvalidInput(format!(
            "'{}' is a public suffix and has no registrable name",
            domain
        ))
    })?;

    let sld = root
        .strip_suffix(suffix)
        .and_then(|rest| rest.strip_suffix('.'))
        .filter(|label| !label.is_empty())
        .ok_or_else(|| NamecheapError::InvalidInput(format!("Cannot split domain name '{}'", domain)))?;

    Ok(DomainParts { sld: sld.to_string(), tld: suffix.to_string() })
}

/// Public suffix with a leading dot, as used in pricing product names (`.co.uk`)
pub fn dotted_suffix(domain: &str) -> NamecheapResult<String> {
    split_domain(domain).map(|parts| format!(".{}", parts.tld))
}
