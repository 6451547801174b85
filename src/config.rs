//! Client configuration: credentials, target environment and debug logging.
//!
//! Credentials can be given explicitly or loaded from the environment:
//!
//! | Variable                | Meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `NAMECHEAP_API_USER`    | API user                                  |
//! | `NAMECHEAP_API_KEY`     | API key                                   |
//! | `NAMECHEAP_USERNAME`    | account username (usually the API user)   |
//! | `NAMECHEAP_CLIENT_IP`   | whitelisted client IP                     |
//! | `NAMECHEAP_USE_SANDBOX` | `true`/`yes`/`1` for sandbox (default)    |
//! | `NAMECHEAP_DEBUG`       | `true`/`yes`/`1` to log full exchanges    |

use std::fmt;

use crate::error::{NamecheapError, NamecheapResult};

pub const ENV_API_USER: &str = "NAMECHEAP_API_USER";
pub const ENV_API_KEY: &str = "NAMECHEAP_API_KEY";
pub const ENV_USERNAME: &str = "NAMECHEAP_USERNAME";
pub const ENV_CLIENT_IP: &str = "NAMECHEAP_CLIENT_IP";
pub const ENV_USE_SANDBOX: &str = "NAMECHEAP_USE_SANDBOX";
pub const ENV_DEBUG: &str = "NAMECHEAP_DEBUG";

/// Namecheap API environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Sandbox,
    Production,
}

impl Environment {
    pub fn api_url(&self) -> &'static str {
        match self {
            Environment::Sandbox => "https://api.sandbox.namecheap.com/xml.response",
            Environment::Production => "https://api.namecheap.com/xml.response",
        }
    }

    pub fn from_sandbox_flag(sandbox: bool) -> Self {
        if sandbox { Environment::Sandbox } else { Environment::Production }
    }
}

/// API credentials sent with every request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_user: String,
    pub api_key: String,
    pub username: String,
    pub client_ip: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_user", &self.api_user)
            .field("api_key", &"<redacted>")
            .field("username", &self.username)
            .field("client_ip", &self.client_ip)
            .finish()
    }
}

/// Complete client configuration
#[derive(Debug, Clone)]
pub struct NamecheapConfig {
    pub credentials: Credentials,
    pub environment: Environment,
    /// Log request parameters and response bodies at debug level.
    pub debug: bool,
}

impl NamecheapConfig {
    /// Create a sandbox configuration from explicit credentials
    pub fn new(
        api_user: impl Into<String>,
        api_key: impl Into<String>,
        username: impl Into<String>,
        client_ip: impl Into<String>,
    ) -> NamecheapResult<Self> {
        ConfigBuilder::default()
            .api_user(api_user)
            .api_key(api_key)
            .username(username)
            .client_ip(client_ip)
            .build()
    }

    /// Load every setting from `NAMECHEAP_*` environment variables
    pub fn from_env() -> NamecheapResult<Self> {
        Self::builder().with_env().build()
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub fn api_url(&self) -> &'static str {
        self.environment.api_url()
    }
}

/// Builder where explicit values win and environment variables fill the gaps
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    api_user: Option<String>,
    api_key: Option<String>,
    username: Option<String>,
    client_ip: Option<String>,
    sandbox: Option<bool>,
    debug: Option<bool>,
}

impl ConfigBuilder {
    pub fn api_user(mut self, value: impl Into<String>) -> Self {
        self.api_user = Some(value.into());
        self
    }

    pub fn api_key(mut self, value: impl Into<String>) -> Self {
        self.api_key = Some(value.into());
        self
    }

    pub fn username(mut self, value: impl Into<String>) -> Self {
        self.username = Some(value.into());
        self
    }

    pub fn client_ip(mut self, value: impl Into<String>) -> Self {
        self.client_ip = Some(value.into());
        self
    }

    pub fn sandbox(mut self, sandbox: bool) -> Self {
        self.sandbox = Some(sandbox);
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = Some(debug);
        self
    }

    /// Fill unset fields from the process environment
    pub fn with_env(self) -> Self {
        self.with_lookup(|key| std::env::var(key).ok())
    }

    /// Fill unset fields from an arbitrary key lookup
    pub fn with_lookup<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        self.api_user = self.api_user.or_else(|| non_empty(ENV_API_USER));
        self.api_key = self.api_key.or_else(|| non_empty(ENV_API_KEY));
        self.username = self.username.or_else(|| non_empty(ENV_USERNAME));
        self.client_ip = self.client_ip.or_else(|| non_empty(ENV_CLIENT_IP));
        self.sandbox = self.sandbox.or_else(|| non_empty(ENV_USE_SANDBOX).map(|v| parse_flag(&v)));
        self.debug = self.debug.or_else(|| non_empty(ENV_DEBUG).map(|v| parse_flag(&v)));
        self
    }

    pub fn build(self) -> NamecheapResult<NamecheapConfig> {
        let mut missing = Vec::new();
        let mut require = |value: Option<String>, label: &str, var: &str| match value {
            Some(v) if !v.trim().is_empty() => v,
            _ => {
                missing.push(format!("{} ({})", label, var));
                String::new()
            }
        };

        let credentials = Credentials {
            api_user: require(self.api_user, "api_user", ENV_API_USER),
            api_key: require(self.api_key, "api_key", ENV_API_KEY),
            username: require(self.username, "username", ENV_USERNAME),
            client_ip: require(self.client_ip, "client_ip", ENV_CLIENT_IP),
        };

        if !missing.is_empty() {
            return Err(NamecheapError::Config(format!(
                "Missing required Namecheap API credentials: {}. Set them explicitly or through the environment.",
                missing.join(", ")
            )));
        }

        Ok(NamecheapConfig {
            credentials,
            environment: Environment::from_sandbox_flag(self.sandbox.unwrap_or(true)),
            debug: self.debug.unwrap_or(false),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_explicit_config_defaults_to_sandbox() {
        let config = NamecheapConfig::new("user", "key", "user", "127.0.0.1").unwrap();
        assert_eq!(config.environment, Environment::Sandbox);
        assert_eq!(config.api_url(), "https://api.sandbox.namecheap.com/xml.response");
        assert!(!config.debug);
    }

    #[test]
    fn test_production_url() {
        let config = NamecheapConfig::new("user", "key", "user", "127.0.0.1")
            .unwrap()
            .with_environment(Environment::Production);
        assert_eq!(config.api_url(), "https://api.namecheap.com/xml.response");
    }

    #[test]
    fn test_lookup_fills_only_missing_values() {
        let env: HashMap<&str, &str> = [
            (ENV_API_USER, "env_user"),
            (ENV_API_KEY, "env_key"),
            (ENV_USERNAME, "env_user"),
            (ENV_CLIENT_IP, "10.0.0.1"),
            (ENV_USE_SANDBOX, "False"),
            (ENV_DEBUG, "yes"),
        ]
        .into_iter()
        .collect();

        let config = NamecheapConfig::builder()
            .api_key("explicit_key")
            .with_lookup(|key| env.get(key).map(|v| v.to_string()))
            .build()
            .unwrap();

        assert_eq!(config.credentials.api_user, "env_user");
        assert_eq!(config.credentials.api_key, "explicit_key");
        assert_eq!(config.credentials.client_ip, "10.0.0.1");
        assert_eq!(config.environment, Environment::Production);
        assert!(config.debug);
    }

    #[test]
    fn test_missing_credentials_are_all_listed() {
        let err = NamecheapConfig::builder()
            .api_user("user")
            .with_lookup(|_| None)
            .build()
            .unwrap_err();

        let message = err.to_string();
        assert_eq!(err.code(), "CONFIG_ERROR");
        assert!(message.contains("NAMECHEAP_API_KEY"));
        assert!(message.contains("NAMECHEAP_USERNAME"));
        assert!(message.contains("NAMECHEAP_CLIENT_IP"));
        assert!(!message.contains("NAMECHEAP_API_USER"));
    }

    #[test]
    fn test_debug_output_hides_api_key() {
        let config = NamecheapConfig::new("user", "secret-key", "user", "127.0.0.1").unwrap();
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("<redacted>"));
    }
}
