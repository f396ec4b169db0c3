use crate::app::ProfileSource;
use crate::config::PortfolioConfig;
use crate::error::{PortfolioError, Result};
use crate::models::RateLimitState;
use crate::pager::PageSource;
use crate::types::{DeveloperProfile, RepoSummary};
use async_trait::async_trait;
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

const ACCEPT: &str = "application/vnd.github+json";

/// Thin JSON client bound to one developer endpoint, e.g.
/// `https://api.github.com/users/kanaaa224`.
#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    endpoint: Url,
}

impl GitHubClient {
    pub fn new(config: &PortfolioConfig) -> Result<Self> {
        Self::with_endpoint(config.endpoint()?, &config.user_agent, config.timeout)
    }

    pub fn with_endpoint(endpoint: Url, user_agent: &str, timeout: Option<Duration>) -> Result<Self> {
        if endpoint.cannot_be_a_base() {
            return Err(PortfolioError::InvalidUrl(format!(
                "Endpoint cannot carry a path: {}",
                endpoint
            )));
        }

        let mut builder = Client::builder().user_agent(user_agent);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(GitHubClient {
            client: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Resolve `path` below the endpoint and append `query` in order.
    pub fn url_for(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
        let mut url = self.endpoint.clone();

        let path = path.trim_matches('/');
        if !path.is_empty() {
            url.path_segments_mut()
                .map_err(|_| PortfolioError::InvalidUrl(self.endpoint.to_string()))?
                .pop_if_empty()
                .extend(path.split('/'));
        }

        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }

        Ok(url)
    }

    /// Issue one request and parse the JSON body. A body switches the verb to POST.
    pub async fn request(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Value> {
        let url = self.url_for(path, query)?;
        let method = if body.is_some() { Method::POST } else { Method::GET };

        debug!(%method, %url, "GitHub request");

        let mut request = self
            .client
            .request(method, url)
            .header("Accept", ACCEPT);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;

        let rate_limit = RateLimitState::from_headers(response.headers());
        debug!(
            remaining = rate_limit.remaining,
            limit = rate_limit.limit,
            reset = %rate_limit.reset_time,
            "Rate limit state"
        );
        if rate_limit.is_low() {
            warn!("⚠️ Rate limit low ({} of {} remaining)", rate_limit.remaining, rate_limit.limit);
        }

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(PortfolioError::BadStatus {
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    pub async fn fetch_profile(&self) -> Result<DeveloperProfile> {
        let value = self.request("", &[], None).await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetch one page of repositories. `page` is 1-based.
    pub async fn fetch_repos_page(&self, page: u32, per_page: u32) -> Result<Vec<RepoSummary>> {
        let query = [("per_page", per_page.to_string()), ("page", page.to_string())];
        let value = self.request("repos", &query, None).await?;
        Ok(serde_json::from_value(value)?)
    }
}

#[async_trait]
impl PageSource<RepoSummary> for GitHubClient {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RepoSummary>> {
        self.fetch_repos_page(page, per_page).await
    }
}

#[async_trait]
impl ProfileSource for GitHubClient {
    async fn fetch_profile(&self) -> Result<DeveloperProfile> {
        GitHubClient::fetch_profile(self).await
    }
}
