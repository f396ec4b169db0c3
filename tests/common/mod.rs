#![allow(dead_code)]

use async_trait::async_trait;
use github_portfolio::app::ProfileSource;
use github_portfolio::error::{PortfolioError, Result};
use github_portfolio::pager::PageSource;
use github_portfolio::types::{DeveloperProfile, RepoSummary};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Scripted reply for one page request.
#[derive(Debug, Clone)]
pub enum PageReply {
    Items(Vec<RepoSummary>),
    Status(u16),
}

/// One call made against [`MockApi`], in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiCall {
    Profile,
    Page(u32, u32),
}

/// In-memory stand-in for the GitHub API.
#[derive(Default)]
pub struct MockApi {
    profile: Option<DeveloperProfile>,
    pages: Mutex<VecDeque<PageReply>>,
    calls: Mutex<Vec<ApiCall>>,
    gate: Option<Arc<Notify>>,
}

impl MockApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(mut self, profile: DeveloperProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn with_pages(self, pages: Vec<PageReply>) -> Self {
        *self.pages.lock().unwrap() = pages.into();
        self
    }

    /// Hold every page request until the gate is notified.
    pub fn with_gate(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Every profile and page call so far.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().unwrap().clone()
    }

    /// `(page, per_page)` of every page call so far.
    pub fn requests(&self) -> Vec<(u32, u32)> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                ApiCall::Page(page, per_page) => Some((page, per_page)),
                ApiCall::Profile => None,
            })
            .collect()
    }
}

#[async_trait]
impl PageSource<RepoSummary> for MockApi {
    async fn fetch_page(&self, page: u32, per_page: u32) -> Result<Vec<RepoSummary>> {
        self.calls.lock().unwrap().push(ApiCall::Page(page, per_page));

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        let reply = self.pages.lock().unwrap().pop_front();
        match reply {
            Some(PageReply::Items(items)) => Ok(items),
            Some(PageReply::Status(status)) => Err(PortfolioError::BadStatus {
                status,
                body: "{\"message\":\"scripted failure\"}".to_string(),
            }),
            None => Ok(Vec::new()),
        }
    }
}

#[async_trait]
impl ProfileSource for MockApi {
    async fn fetch_profile(&self) -> Result<DeveloperProfile> {
        self.calls.lock().unwrap().push(ApiCall::Profile);

        match &self.profile {
            Some(profile) => Ok(profile.clone()),
            None => Err(PortfolioError::BadStatus {
                status: 404,
                body: "{\"message\":\"Not Found\"}".to_string(),
            }),
        }
    }
}

pub fn repo(id: u64) -> RepoSummary {
    RepoSummary {
        id,
        name: format!("repo-{}", id),
        description: Some(format!("Repository number {}", id)),
        stargazers_count: (id % 7) as u32,
        forks_count: (id % 3) as u32,
        language: if id % 2 == 0 { Some("Rust".to_string()) } else { None },
        has_pages: id % 5 == 0,
        homepage: Some(format!("https://octo.github.io/repo-{}", id)),
        html_url: format!("https://github.com/octo/repo-{}", id),
    }
}

/// `count` repositories with ids starting at `first_id`.
pub fn page(first_id: u64, count: usize) -> PageReply {
    PageReply::Items((first_id..first_id + count as u64).map(repo).collect())
}

pub fn profile() -> DeveloperProfile {
    DeveloperProfile {
        login: "octo".to_string(),
        name: Some("Octo Cat".to_string()),
        avatar_url: "https://avatars.githubusercontent.com/u/1".to_string(),
        html_url: Some("https://github.com/octo".to_string()),
        bio: Some("Writes code".to_string()),
        public_repos: Some(14),
        followers: Some(3),
        following: Some(1),
    }
}
