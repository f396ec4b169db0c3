use serde::{Deserialize, Serialize};

// GitHub API response structures

/// Profile returned by `GET /users/{account}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeveloperProfile {
    #[serde(default)]
    pub login: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar_url: String,
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub public_repos: Option<u32>,
    #[serde(default)]
    pub followers: Option<u32>,
    #[serde(default)]
    pub following: Option<u32>,
}

impl DeveloperProfile {
    /// Display name, falling back to the login.
    pub fn display_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.login,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.login.is_empty()
    }

    /// Repository tab of the profile page.
    pub fn repositories_url(&self) -> Option<String> {
        self.html_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .map(|url| format!("{}?tab=repositories", url))
    }
}

/// One entry of `GET /users/{account}/repos`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub has_pages: bool,
    #[serde(default)]
    pub homepage: Option<String>,
    pub html_url: String,
}

impl RepoSummary {
    /// Published site, only when GitHub Pages is enabled and a homepage is set.
    pub fn pages_url(&self) -> Option<&str> {
        if !self.has_pages {
            return None;
        }
        self.homepage.as_deref().filter(|h| !h.is_empty())
    }
}
