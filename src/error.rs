use std::fmt;

use thiserror::Error;

pub type NamecheapResult<T> = Result<T, NamecheapError>;

/// Code reported when the API answers `ERROR` without an error number.
pub const UNKNOWN_ERROR: &str = "UNKNOWN_ERROR";

#[derive(Error, Debug)]
pub enum NamecheapError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("{0}")]
    Api(ApiError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Decode error: {0}")]
    Decode(String),
}

impl NamecheapError {
    /// Stable, never empty, code for this failure.
    pub fn code(&self) -> &str {
        match self {
            NamecheapError::Connection(_) => "CONNECTION_ERROR",
            NamecheapError::MalformedResponse(_) => "XML_PARSE_ERROR",
            NamecheapError::Api(err) => &err.code,
            NamecheapError::InvalidInput(_) => "INVALID_INPUT",
            NamecheapError::Config(_) => "CONFIG_ERROR",
            NamecheapError::Decode(_) => "DECODE_ERROR",
        }
    }

    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            NamecheapError::Api(err) => Some(err),
            _ => None,
        }
    }
}

/// Error reported by the Namecheap API (`Status="ERROR"`), enriched from an error catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Upstream error number, or [`UNKNOWN_ERROR`].
    pub code: String,
    /// Raw message text sent by the API.
    pub message: String,
    pub explanation: Option<String>,
    pub fix: Option<String>,
    /// Command that failed, e.g. `namecheap.domains.dns.setHosts`.
    pub command: Option<String>,
    /// Full response body, kept for diagnostics.
    pub raw_response: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        let code = code.into();
        let message = message.into();
        Self {
            code: if code.trim().is_empty() { UNKNOWN_ERROR.to_string() } else { code },
            message: if message.trim().is_empty() { "Unknown error".to_string() } else { message },
            explanation: None,
            fix: None,
            command: None,
            raw_response: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let explanation = self.explanation.as_ref().filter(|e| **e != self.message);
        match (explanation, &self.fix) {
            (Some(explanation), Some(fix)) => write!(
                f,
                "Namecheap API error {}: {} ({}). {}",
                self.code, self.message, explanation, fix
            ),
            (Some(explanation), None) => {
                write!(f, "Namecheap API error {}: {} ({})", self.code, self.message, explanation)
            }
            (None, Some(fix)) => write!(f, "Namecheap API error {}: {} - {}", self.code, self.message, fix),
            (None, None) if self.explanation.is_some() => {
                write!(f, "Namecheap API error {}: {}", self.code, self.message)
            }
            (None, None) => write!(f, "Operation failed: {} (code {})", self.message, self.code),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ApiError> for NamecheapError {
    fn from(err: ApiError) -> Self {
        NamecheapError::Api(err)
    }
}

impl From<reqwest::Error> for NamecheapError {
    fn from(err: reqwest::Error) -> Self {
        NamecheapError::Connection(err.to_string())
    }
}

impl From<quick_xml::Error> for NamecheapError {
    fn from(err: quick_xml::Error) -> Self {
        NamecheapError::MalformedResponse(format!("Failed to parse XML response: {}", err))
    }
}

impl From<serde_json::Error> for NamecheapError {
    fn from(err: serde_json::Error) -> Self {
        NamecheapError::Decode(err.to_string())
    }
}
