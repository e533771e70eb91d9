//! Re-invite endpoint client
//!
//! Wraps a `reqwest::Client` bound to a single endpoint URL.
//!
//! # Examples
//!
//! ```rust,no_run
//! use github_reinvite::{ReinviteClient, ReinviteInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ReinviteClient::new("https://reinvite.example.edu/api/reinvite")?;
//!
//!     let result = client
//!         .reinvite(ReinviteInput {
//!             owner: "18-341".into(),
//!             repo: "p3-noc-octocat".into(),
//!             username: "octocat".into(),
//!         })
//!         .await??;
//!
//!     println!("{}", result.to_pretty_json());
//!     Ok(())
//! }
//! ```

use crate::reinvite::error::{ReinviteError, ReinviteResultOf};
use crate::reinvite::types::{ReinviteInput, ReinviteResult};
use crate::runtime::AsyncTask;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

const USER_AGENT: &str = concat!("github-reinvite/", env!("CARGO_PKG_VERSION"));

/// Client for the re-invite endpoint.
///
/// Cloning is cheap (Arc clone).
#[derive(Clone, Debug)]
pub struct ReinviteClient {
    http: Arc<Client>,
    endpoint: Arc<str>,
}

impl ReinviteClient {
    /// Create a new client builder
    #[must_use]
    pub fn builder() -> ReinviteClientBuilder {
        ReinviteClientBuilder::new()
    }

    /// Convenience: client for `endpoint` with default settings
    pub fn new(endpoint: impl Into<String>) -> ReinviteResultOf<Self> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Endpoint URL this client posts to
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Ask the endpoint to re-invite `input.username` to `input.owner/input.repo`.
    ///
    /// Resolves immediately with `InvalidInput` when a field is blank.
    #[must_use]
    pub fn reinvite(
        &self,
        input: ReinviteInput,
    ) -> AsyncTask<Result<ReinviteResult, ReinviteError>> {
        let blank = [
            ("owner", &input.owner),
            ("repo", &input.repo),
            ("username", &input.username),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field);

        if let Some(field) = blank {
            return AsyncTask::ready(Err(ReinviteError::InvalidInput(format!(
                "{field} must not be empty"
            ))));
        }
        crate::reinvite::request::reinvite(self.http.clone(), self.endpoint.clone(), input)
    }
}

/// Builder for [`ReinviteClient`]
pub struct ReinviteClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

impl ReinviteClientBuilder {
    /// Create a new builder
    #[must_use]
    pub fn new() -> Self {
        Self {
            endpoint: None,
            timeout: None,
            user_agent: None,
        }
    }

    /// Set the endpoint URL (required)
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the overall request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the User-Agent header
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the [`ReinviteClient`]
    pub fn build(self) -> ReinviteResultOf<ReinviteClient> {
        let endpoint = self
            .endpoint
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ReinviteError::ClientSetup("endpoint URL is required".into()))?;

        let parsed = reqwest::Url::parse(&endpoint)
            .map_err(|e| ReinviteError::ClientSetup(format!("Invalid endpoint {endpoint}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ReinviteError::ClientSetup(format!(
                "Endpoint must be http(s): {endpoint}"
            )));
        }

        let mut builder = Client::builder()
            .user_agent(self.user_agent.unwrap_or_else(|| USER_AGENT.to_string()));
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let http = builder
            .build()
            .map_err(|e| ReinviteError::ClientSetup(e.to_string()))?;

        Ok(ReinviteClient {
            http: Arc::new(http),
            endpoint: Arc::from(endpoint),
        })
    }
}

impl Default for ReinviteClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
