mod common;

use common::{profile, repo};
use github_portfolio::app::ViewSnapshot;
use github_portfolio::config::PortfolioLink;
use github_portfolio::notify::{Notification, Severity};
use github_portfolio::render::render;
use github_portfolio::types::DeveloperProfile;
use github_portfolio::view::{Theme, ViewFlags};
use std::time::{Duration, Instant};

fn snapshot(container_visible: bool) -> ViewSnapshot {
    ViewSnapshot {
        flags: ViewFlags {
            theme: Theme::Light,
            top_button_visible: false,
            wide_layout: true,
            container_visible,
        },
        profile: profile(),
        repos: (1..=5).map(repo).collect(),
        loading: false,
        exhausted: false,
        notification: None,
        social_links: vec![PortfolioLink::new("GitHub", "https://github.com/octo")],
        links: vec![PortfolioLink::new("Blog", "https://octo.example.com")],
    }
}

#[test]
fn test_hidden_container_shows_only_placeholder() {
    colored::control::set_override(false);

    let out = render(&snapshot(false));

    assert!(out.contains("Loading..."));
    assert!(!out.contains("repo-1"));
}

#[test]
fn test_visible_page_lists_repositories_in_order() {
    colored::control::set_override(false);

    let out = render(&snapshot(true));

    assert!(out.contains("Octo Cat"));
    assert!(out.contains("@octo"));
    assert!(out.contains("Links | Repositories"));
    assert!(out.contains("Repositories (5)"));

    let first = out.find("repo-1").unwrap();
    let last = out.find("repo-5").unwrap();
    assert!(first < last);

    // repo-5 has pages enabled
    assert!(out.contains("https://octo.github.io/repo-5"));
    assert!(!out.contains("https://octo.github.io/repo-4"));
    assert!(out.contains("stars: 2 | forks: 2 | language: Rust"));
}

#[test]
fn test_profile_avatar_links_and_github_footer() {
    colored::control::set_override(false);

    let out = render(&snapshot(true));

    assert!(out.contains("avatar: https://avatars.githubusercontent.com/u/1"));
    assert!(out.contains("GitHub https://github.com/octo"));

    // the nav entry points at a real section
    let section = out.find("\nLinks\n").expect("links section");
    let repos = out.find("Repositories (5)").unwrap();
    assert!(section < repos);
    assert!(out.contains("Blog https://octo.example.com"));

    let footer = out
        .find("View all on GitHub: https://github.com/octo?tab=repositories")
        .expect("footer link");
    assert!(footer > out.find("repo-5").unwrap());
}

#[test]
fn test_no_links_means_no_links_nav_or_section() {
    colored::control::set_override(false);

    let mut snap = snapshot(true);
    snap.links.clear();
    snap.social_links.clear();
    snap.profile.html_url = None;

    let out = render(&snap);

    assert!(!out.contains("Links"));
    assert!(out.contains("Repositories  ☀"));
    assert!(!out.contains("View all on GitHub"));
}

#[test]
fn test_flags_and_footer() {
    colored::control::set_override(false);

    let mut snap = snapshot(true);
    snap.flags.wide_layout = false;
    snap.flags.top_button_visible = true;
    snap.exhausted = true;
    snap.profile = DeveloperProfile::default();

    let out = render(&snap);

    assert!(!out.contains("Links | Repositories"));
    assert!(out.contains("≡"));
    assert!(out.contains("[↑ top]"));
    assert!(out.contains("No more repositories"));
    assert!(out.contains("(profile unavailable)"));
}

#[test]
fn test_notification_is_rendered() {
    colored::control::set_override(false);

    let mut snap = snapshot(true);
    snap.notification = Some(Notification {
        message: "An error occurred while loading the page".to_string(),
        severity: Severity::Error,
        duration: Duration::from_secs(3),
        shown_at: Instant::now(),
    });

    assert!(render(&snap).contains("An error occurred while loading the page"));
}
