use serde_json::{Map, Value};

use crate::catalog::{ErrorCatalog, ErrorContext, build_api_error};
use crate::error::{ApiError, NamecheapError, NamecheapResult, UNKNOWN_ERROR};
use crate::normalize::bool_token;
use crate::xml::{XmlElement, parse_document};

pub const DOMAIN_CHECK_COMMAND: &str = "namecheap.domains.check";

const API_KEY_INVALID: &str = "API Key is invalid or API access has not been enabled";
const IP_NOT_WHITELISTED: &str = "IP is not in the whitelist";

const PRICE_FIELDS: [&str; 6] = [
    "PremiumRegistrationPrice",
    "PremiumRenewalPrice",
    "PremiumRestorePrice",
    "PremiumTransferPrice",
    "IcannFee",
    "EapFee",
];
const CHECK_BOOL_FIELDS: [&str; 2] = ["Available", "IsPremiumName"];

/// Parser for Namecheap XML responses
pub struct ResponseParser;

impl ResponseParser {
    /// Parse a raw response for `command`.
    ///
    /// Returns the `CommandResponse` subtree (empty map when absent) or the API error,
    /// enriched from `catalog` with `context` substituted into its templates.
    pub fn parse(raw: &str, command: &str, catalog: &ErrorCatalog, context: &ErrorContext) -> NamecheapResult<Value> {
        if let Some(err) = Self::sentinel_error(raw, command) {
            return Err(err.into());
        }

        // The API sometimes truncates the closing tag of <Error>.
        let repaired = raw.replace("</e>", "</Error>");
        let root = parse_document(&repaired)?;

        match root.attr("Status") {
            Some(status) if status.eq_ignore_ascii_case("ERROR") => {
                Err(Self::api_error(&root, raw, command, catalog, context).into())
            }
            Some(status) if status.eq_ignore_ascii_case("OK") => Ok(Self::command_response(&root, command)),
            other => Err(NamecheapError::MalformedResponse(format!(
                "Unexpected response status {:?} for {}",
                other.unwrap_or("<missing>"),
                command
            ))),
        }
    }

    /// Errors the API reports with a body that is not well-formed XML
    fn sentinel_error(raw: &str, command: &str) -> Option<ApiError> {
        let (code, explanation, fix) = if raw.contains(API_KEY_INVALID) {
            (
                "1011102",
                API_KEY_INVALID,
                "Please verify your API key and ensure API access is enabled at https://ap.www.namecheap.com/settings/tools/apiaccess/",
            )
        } else if raw.contains(IP_NOT_WHITELISTED) {
            ("1011147", IP_NOT_WHITELISTED, "Please whitelist your IP address in your Namecheap API settings")
        } else {
            return None;
        };

        tracing::debug!("Namecheap rejected credentials for {}: {}", command, code);
        let mut err = ApiError::new(code, explanation);
        err.explanation = Some(explanation.to_string());
        err.fix = Some(fix.to_string());
        err.command = Some(command.to_string());
        err.raw_response = Some(raw.to_string());
        Some(err)
    }

    fn api_error(
        root: &XmlElement,
        raw: &str,
        command: &str,
        catalog: &ErrorCatalog,
        context: &ErrorContext,
    ) -> ApiError {
        let first = root.child("Errors").and_then(|errors| errors.children_named("Error").next());

        let (code, message) = match first {
            Some(error) => (
                error.attr("Number").unwrap_or(UNKNOWN_ERROR).to_string(),
                error.text().unwrap_or("Unknown error").to_string(),
            ),
            None => (
                UNKNOWN_ERROR.to_string(),
                "Unknown error occurred but no error details provided".to_string(),
            ),
        };

        tracing::debug!("Namecheap error {} for {}: {}", code, command, message);

        let mut err = build_api_error(&code, &message, catalog, context);
        err.command = Some(command.to_string());
        err.raw_response = Some(raw.to_string());
        err
    }

    fn command_response(root: &XmlElement, command: &str) -> Value {
        let Some(response) = root.child("CommandResponse") else {
            return Value::Object(Map::new());
        };

        let requested = root.child("RequestedCommand").and_then(|c| c.text()).unwrap_or(command);
        let mut value = response.to_value();
        if requested.eq_ignore_ascii_case(DOMAIN_CHECK_COMMAND) {
            coerce_domain_check(&mut value);
        }
        value
    }
}

/// Domain check results are always a list with numeric prices and real booleans
fn coerce_domain_check(value: &mut Value) {
    let Value::Object(map) = value else {
        *value = serde_json::json!({ "DomainCheckResult": [] });
        return;
    };

    let results = match map.remove("DomainCheckResult") {
        Some(Value::Array(items)) => items,
        Some(single) => vec![single],
        None => Vec::new(),
    };

    let coerced = results
        .into_iter()
        .map(|mut item| {
            if let Value::Object(fields) = &mut item {
                for field in PRICE_FIELDS {
                    let price = fields.get(field).map(as_price).unwrap_or(0.0);
                    fields.insert(field.to_string(), Value::from(price));
                }
                for field in CHECK_BOOL_FIELDS {
                    let flag = fields.get(field).map(as_flag).unwrap_or(false);
                    fields.insert(field.to_string(), Value::Bool(flag));
                }
            }
            item
        })
        .collect();

    map.insert("DomainCheckResult".to_string(), Value::Array(coerced));
}

fn as_price(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    }
}

fn as_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::String(s) => bool_token(s).unwrap_or(false),
        Value::Number(n) => n.as_i64() == Some(1),
        _ => false,
    }
}
