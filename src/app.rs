//! Page-level orchestration: mount sequence, "load more", signals and
//! notifications. Every mutation publishes a fresh [`ViewSnapshot`] on a
//! `watch` channel; the presentation layer only ever reads snapshots.

use crate::config::{PortfolioConfig, PortfolioLink};
use crate::error::Result;
use crate::notify::{Notification, NotificationChannel, Severity};
use crate::pager::{LoadOutcome, PageSource, PaginatedFetcher};
use crate::types::{DeveloperProfile, RepoSummary};
use crate::view::{ViewFlags, ViewSignal, ViewState};
use async_trait::async_trait;
use std::sync::{Arc, Weak};
use std::time::{Duration, Instant};
use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, error, info};

/// Generic text for every failed repository load.
pub const LOAD_ERROR_MESSAGE: &str = "An error occurred while loading the page";

#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self) -> Result<DeveloperProfile>;
}

/// Everything the portfolio reads from GitHub.
pub trait PortfolioApi: ProfileSource + PageSource<RepoSummary> {}

impl<T: ProfileSource + PageSource<RepoSummary>> PortfolioApi for T {}

/// Immutable copy of what the renderer needs.
#[derive(Debug, Clone)]
pub struct ViewSnapshot {
    pub flags: ViewFlags,
    pub profile: DeveloperProfile,
    pub repos: Vec<RepoSummary>,
    pub loading: bool,
    pub exhausted: bool,
    pub notification: Option<Notification>,
    pub social_links: Vec<PortfolioLink>,
    pub links: Vec<PortfolioLink>,
}

struct UiState {
    view: ViewState,
    notifications: NotificationChannel,
    profile: DeveloperProfile,
    torn_down: bool,
}

pub struct Portfolio<A> {
    api: A,
    repos: PaginatedFetcher<RepoSummary>,
    ui: Mutex<UiState>,
    social_links: Vec<PortfolioLink>,
    links: Vec<PortfolioLink>,
    snapshots: watch::Sender<ViewSnapshot>,
}

impl<A: PortfolioApi> Portfolio<A> {
    pub fn new(api: A, config: &PortfolioConfig) -> Self {
        let view = ViewState::new(config);

        let initial = ViewSnapshot {
            flags: view.flags(),
            profile: DeveloperProfile::default(),
            repos: Vec::new(),
            loading: false,
            exhausted: false,
            notification: None,
            social_links: config.social_links.clone(),
            links: config.links.clone(),
        };
        let (snapshots, _) = watch::channel(initial);

        Self {
            api,
            repos: PaginatedFetcher::new(config.per_page),
            ui: Mutex::new(UiState {
                view,
                notifications: NotificationChannel::new(config.notification_duration),
                profile: DeveloperProfile::default(),
                torn_down: false,
            }),
            social_links: config.social_links.clone(),
            links: config.links.clone(),
            snapshots,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<ViewSnapshot> {
        self.snapshots.subscribe()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub fn repos(&self) -> &PaginatedFetcher<RepoSummary> {
        &self.repos
    }

    /// Initial load: profile, then the first repository page, then reveal
    /// the container. A failed profile fetch is logged and the page carries
    /// on with an empty profile.
    pub async fn mount(&self) {
        info!("Mounting portfolio");

        match self.api.fetch_profile().await {
            Ok(profile) => {
                info!(login = %profile.login, "Loaded developer profile");
                self.ui.lock().await.profile = profile;
            }
            Err(e) => {
                error!("Failed to load developer profile: {}", e);
            }
        }

        self.load_more().await;

        self.handle_signal(ViewSignal::ContentReady).await;
    }

    /// Stop reacting to resolved loads. Late responses still land in the
    /// fetcher but no longer touch notifications or publish snapshots.
    pub async fn teardown(&self) {
        self.ui.lock().await.torn_down = true;
        info!("Portfolio torn down");
    }

    pub async fn is_torn_down(&self) -> bool {
        self.ui.lock().await.torn_down
    }

    /// Load the next repository page. Failures become a notification.
    /// Returns `None` when the load failed.
    pub async fn load_more(&self) -> Option<LoadOutcome> {
        let result = self.repos.load_next(&self.api).await;

        if self.is_torn_down().await {
            debug!("Load resolved after teardown, ignoring");
            return result.ok();
        }

        let outcome = match result {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                error!(kind = ?e.kind(), "Failed to load repositories: {}", e);
                self.ui
                    .lock()
                    .await
                    .notifications
                    .show(LOAD_ERROR_MESSAGE, Severity::Error, None);
                None
            }
        };

        self.publish().await;
        outcome
    }

    pub async fn handle_signal(&self, signal: ViewSignal) -> bool {
        let changed = self.ui.lock().await.view.apply(signal);
        if changed {
            debug!(?signal, "View state changed");
            self.publish().await;
        }
        changed
    }

    pub async fn notify(
        &self,
        message: impl Into<String>,
        severity: Severity,
        duration: Option<Duration>,
    ) -> bool {
        let shown = self.ui.lock().await.notifications.show(message, severity, duration);
        if shown {
            self.publish().await;
        }
        shown
    }

    pub async fn dismiss_notification(&self) -> bool {
        let dismissed = self.ui.lock().await.notifications.dismiss().is_some();
        if dismissed {
            self.publish().await;
        }
        dismissed
    }

    /// Auto-dismiss timer hook for the presentation layer.
    pub async fn expire_notifications(&self, now: Instant) -> bool {
        let expired = self.ui.lock().await.notifications.expire(now);
        if expired {
            self.publish().await;
        }
        expired
    }

    pub async fn snapshot(&self) -> ViewSnapshot {
        let page = self.repos.snapshot().await;

        let ui = self.ui.lock().await;
        ViewSnapshot {
            flags: ui.view.flags(),
            profile: ui.profile.clone(),
            repos: page.items,
            loading: page.loading,
            exhausted: page.exhausted,
            notification: ui.notifications.current().cloned(),
            social_links: self.social_links.clone(),
            links: self.links.clone(),
        }
    }

    async fn publish(&self) {
        let snapshot = self.snapshot().await;
        self.snapshots.send_replace(snapshot);
    }
}

impl<A: PortfolioApi + 'static> Portfolio<A> {
    /// Run "load more" in the background. The task only holds a weak
    /// reference, so it does nothing if the portfolio is already gone.
    pub fn spawn_load_more(self: &Arc<Self>) -> JoinHandle<()> {
        let portfolio: Weak<Self> = Arc::downgrade(self);

        tokio::spawn(async move {
            match portfolio.upgrade() {
                Some(portfolio) => {
                    portfolio.load_more().await;
                }
                None => debug!("Portfolio dropped before load started"),
            }
        })
    }
}
