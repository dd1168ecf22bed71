//! HTTP client for the case-management backend.

use std::time::Duration;

use anyhow::{Context, Result};
use docketcal_core::Case;
use docketcal_core::config::DocketConfig;
use serde::Deserialize;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the backend's case-listing API.
pub struct CaseClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

/// Error body the backend returns on non-2xx responses.
#[derive(Deserialize)]
struct ApiError {
    detail: String,
}

impl CaseClient {
    pub fn from_config(config: &DocketConfig) -> Self {
        CaseClient {
            http: reqwest::Client::new(),
            base_url: config.api_url.trim_end_matches('/').to_string(),
            token: config.api_token.clone(),
        }
    }

    /// Fetch the full case list. The endpoint has no server-side judge
    /// scoping; callers filter with `assigned_cases`.
    pub async fn list_cases(&self) -> Result<Vec<Case>> {
        let mut request = self
            .http
            .get(format!("{}/api/cases", self.base_url))
            .timeout(REQUEST_TIMEOUT);

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await
            .with_context(|| format!("Could not reach {}", self.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ApiError>()
                .await
                .map(|e| e.detail)
                .unwrap_or_else(|_| status.to_string());
            anyhow::bail!("Backend rejected the request: {detail}");
        }

        response
            .json()
            .await
            .context("Backend returned an unreadable case list")
    }
}
