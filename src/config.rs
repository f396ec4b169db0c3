use crate::error::{PortfolioError, Result};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

pub const DEFAULT_API_BASE: &str = "https://api.github.com";
pub const DEFAULT_ACCOUNT: &str = "kanaaa224";
pub const DEFAULT_PER_PAGE: u32 = 10;
pub const MAX_PER_PAGE: u32 = 100;

/// A labelled outbound link shown on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioLink {
    pub label: String,
    pub url: String,
}

impl PortfolioLink {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }
}

/// Parses `label=url`.
impl FromStr for PortfolioLink {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (label, url) = s
            .split_once('=')
            .ok_or_else(|| format!("expected label=url, got {}", s))?;
        let (label, url) = (label.trim(), url.trim());
        if label.is_empty() || url.is_empty() {
            return Err(format!("expected label=url, got {}", s));
        }
        Url::parse(url).map_err(|e| format!("invalid link URL {}: {}", url, e))?;
        Ok(PortfolioLink::new(label, url))
    }
}

impl fmt::Display for PortfolioLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.url)
    }
}

/// Social accounts of [`DEFAULT_ACCOUNT`].
pub fn default_social_links() -> Vec<PortfolioLink> {
    vec![
        PortfolioLink::new("Instagram", "https://instagram.com/kanaaa224"),
        PortfolioLink::new("SoundCloud", "https://soundcloud.com/kanaaa224"),
        PortfolioLink::new("Steam", "https://steamcommunity.com/profiles/76561198377009596"),
        PortfolioLink::new("PlayStation", "https://profile.playstation.com/kanaaa224"),
        PortfolioLink::new("Discord", "https://discord.com/users/551228674784100361"),
        PortfolioLink::new("GitHub", "https://github.com/kanaaa224"),
    ]
}

/// Other sites of [`DEFAULT_ACCOUNT`].
pub fn default_links() -> Vec<PortfolioLink> {
    vec![
        PortfolioLink::new("Portfolio", "https://kanaaa224.github.io/portfolio"),
        PortfolioLink::new("Home server", "https://ponzu.server-on.net"),
    ]
}

/// Everything the portfolio needs at startup.
#[derive(Debug, Clone)]
pub struct PortfolioConfig {
    /// REST API root, e.g. `https://api.github.com`
    pub api_base: Url,
    /// Account whose profile and repositories are shown
    pub account: String,
    /// Repositories requested per page
    pub per_page: u32,
    /// Request timeout; none unless set
    pub timeout: Option<Duration>,
    pub user_agent: String,
    /// Scroll offset at which the back-to-top button appears
    pub scroll_threshold: u32,
    /// Viewport width at which inline navigation is shown
    pub wide_layout_threshold: u32,
    /// Default lifetime of a notification
    pub notification_duration: Duration,
    /// Initial color scheme preference
    pub prefers_dark: bool,
    /// Initial viewport width
    pub initial_width: u32,
    /// Shown under the profile
    pub social_links: Vec<PortfolioLink>,
    /// Shown in the "Links" section; the section is omitted when empty
    pub links: Vec<PortfolioLink>,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            api_base: Url::parse(DEFAULT_API_BASE).expect("default API base is a valid URL"),
            account: DEFAULT_ACCOUNT.to_string(),
            per_page: DEFAULT_PER_PAGE,
            timeout: None,
            user_agent: format!("github-portfolio/{}", env!("CARGO_PKG_VERSION")),
            scroll_threshold: 50,
            wide_layout_threshold: 600,
            notification_duration: Duration::from_millis(3000),
            prefers_dark: false,
            initial_width: 80,
            social_links: default_social_links(),
            links: default_links(),
        }
    }
}

impl PortfolioConfig {
    pub fn validate(&self) -> Result<()> {
        if self.account.trim().is_empty() {
            return Err(PortfolioError::Config("account must not be empty".to_string()));
        }
        if self.account.contains('/') {
            return Err(PortfolioError::Config(format!(
                "account must be a single path segment: {}",
                self.account
            )));
        }
        if self.per_page == 0 || self.per_page > MAX_PER_PAGE {
            return Err(PortfolioError::Config(format!(
                "per_page must be between 1 and {}, got {}",
                MAX_PER_PAGE, self.per_page
            )));
        }
        if self.api_base.cannot_be_a_base() {
            return Err(PortfolioError::Config(format!(
                "API base cannot carry a path: {}",
                self.api_base
            )));
        }
        Ok(())
    }

    /// Developer endpoint: `{api_base}/users/{account}`.
    pub fn endpoint(&self) -> Result<Url> {
        let mut url = self.api_base.clone();
        url.path_segments_mut()
            .map_err(|_| PortfolioError::InvalidUrl(self.api_base.to_string()))?
            .pop_if_empty()
            .push("users")
            .push(&self.account);
        Ok(url)
    }
}
