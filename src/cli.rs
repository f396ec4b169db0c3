use crate::config::{
    default_links, default_social_links, PortfolioConfig, PortfolioLink, DEFAULT_ACCOUNT,
    DEFAULT_API_BASE, DEFAULT_PER_PAGE,
};
use crate::error::{PortfolioError, Result};
use clap::{Parser, ValueEnum};
use std::time::Duration;
use url::Url;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeArg {
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = "github-portfolio")]
#[command(about = "GitHub Portfolio - Shows a developer profile and their repositories page by page")]
#[command(version)]
pub struct Cli {
    /// GitHub account to show
    #[arg(long, env = "PORTFOLIO_ACCOUNT", default_value = DEFAULT_ACCOUNT)]
    pub account: String,

    /// GitHub REST API base URL
    #[arg(long, env = "PORTFOLIO_API_BASE", default_value = DEFAULT_API_BASE)]
    pub api_base: String,

    /// Repositories fetched per page
    #[arg(long, env = "PORTFOLIO_PER_PAGE", default_value_t = DEFAULT_PER_PAGE)]
    pub per_page: u32,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "PORTFOLIO_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Preferred color scheme
    #[arg(long, env = "PORTFOLIO_THEME", value_enum, default_value_t = ThemeArg::Light)]
    pub theme: ThemeArg,

    /// Initial viewport width
    #[arg(long, env = "COLUMNS", default_value_t = 80)]
    pub width: u32,

    /// Social link as label=url (repeatable)
    #[arg(long = "social", value_name = "LABEL=URL")]
    pub social_links: Vec<PortfolioLink>,

    /// Entry of the Links section as label=url (repeatable)
    #[arg(long = "link", value_name = "LABEL=URL")]
    pub links: Vec<PortfolioLink>,

    /// Load the first page, print it and exit
    #[arg(long)]
    pub once: bool,
}

impl Cli {
    pub fn to_config(&self) -> Result<PortfolioConfig> {
        let api_base = Url::parse(&self.api_base)
            .map_err(|e| PortfolioError::Config(format!("invalid API base {}: {}", self.api_base, e)))?;

        // built-in links belong to the default account only
        let is_default_account = self.account == DEFAULT_ACCOUNT;
        let social_links = match (self.social_links.is_empty(), is_default_account) {
            (false, _) => self.social_links.clone(),
            (true, true) => default_social_links(),
            (true, false) => Vec::new(),
        };
        let links = match (self.links.is_empty(), is_default_account) {
            (false, _) => self.links.clone(),
            (true, true) => default_links(),
            (true, false) => Vec::new(),
        };

        let config = PortfolioConfig {
            api_base,
            account: self.account.clone(),
            per_page: self.per_page,
            timeout: self.timeout_secs.map(Duration::from_secs),
            prefers_dark: self.theme == ThemeArg::Dark,
            initial_width: self.width,
            social_links,
            links,
            ..Default::default()
        };

        config.validate()?;
        Ok(config)
    }
}
