use async_trait::async_trait;
use reqwest::Client;

use crate::config::{Credentials, NamecheapConfig};
use crate::error::{NamecheapError, NamecheapResult};
use crate::request::RequestParams;

/// Sends one command to the API and returns the raw response body.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, command: &str, params: &RequestParams) -> NamecheapResult<String>;
}

/// HTTP GET transport against the Namecheap XML endpoint
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
    credentials: Credentials,
    debug: bool,
}

impl HttpTransport {
    pub fn new(config: &NamecheapConfig) -> Self {
        Self::with_url(config, config.api_url().to_string())
    }

    /// Create with custom endpoint URL
    pub fn with_url(config: &NamecheapConfig, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            credentials: config.credentials.clone(),
            debug: config.debug,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full query string: authentication, command, then caller parameters
    pub fn query(&self, command: &str, params: &RequestParams) -> Vec<(String, String)> {
        let mut query = vec![
            ("ApiUser".to_string(), self.credentials.api_user.clone()),
            ("ApiKey".to_string(), self.credentials.api_key.clone()),
            ("UserName".to_string(), self.credentials.username.clone()),
            ("ClientIp".to_string(), self.credentials.client_ip.clone()),
            ("Command".to_string(), command.to_string()),
        ];
        query.extend(params.to_pairs());
        query
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn execute(&self, command: &str, params: &RequestParams) -> NamecheapResult<String> {
        tracing::debug!("Calling Namecheap: {} ({} params)", command, params.len());
        if self.debug {
            tracing::debug!("Request to {} with params {:?}", self.base_url, params.to_pairs());
        }

        let response = self
            .client
            .get(&self.base_url)
            .query(&self.query(command, params))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(NamecheapError::Connection(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        let body = response.text().await?;
        if self.debug {
            let preview: String = body.chars().take(1000).collect();
            tracing::debug!("Response for {} ({}): {}", command, status, preview);
        }

        Ok(body)
    }
}

#[cfg(test)]
pub(crate) mod mock {
    use super::*;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays canned bodies in order and records every call.
    #[derive(Default)]
    pub(crate) struct MockTransport {
        responses: Mutex<VecDeque<NamecheapResult<String>>>,
        calls: Mutex<Vec<(String, RequestParams)>>,
    }

    impl MockTransport {
        pub(crate) fn new() -> Self {
            Self::default()
        }

        pub(crate) fn with_response(self, body: &str) -> Self {
            self.push(Ok(body.to_string()));
            self
        }

        pub(crate) fn with_failure(self, err: NamecheapError) -> Self {
            self.push(Err(err));
            self
        }

        fn push(&self, response: NamecheapResult<String>) {
            if let Ok(mut queue) = self.responses.lock() {
                queue.push_back(response);
            }
        }

        pub(crate) fn calls(&self) -> Vec<(String, RequestParams)> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub(crate) fn last_params(&self) -> RequestParams {
            self.calls().pop().map(|(_, p)| p).unwrap_or_default()
        }
    }

    #[async_trait]
    impl Transport for MockTransport {
        async fn execute(&self, command: &str, params: &RequestParams) -> NamecheapResult<String> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((command.to_string(), params.clone()));
            }
            self.responses
                .lock()
                .ok()
                .and_then(|mut queue| queue.pop_front())
                .unwrap_or_else(|| Err(NamecheapError::Connection("no canned response".to_string())))
        }
    }
}
