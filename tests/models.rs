use chrono::{TimeZone, Utc};
use github_portfolio::models::RateLimitState;
use github_portfolio::types::{DeveloperProfile, RepoSummary};
use reqwest::header::{HeaderMap, HeaderValue};

#[test]
fn test_rate_limit_from_headers() {
    let mut headers = HeaderMap::new();
    headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("42"));
    headers.insert("X-RateLimit-Limit", HeaderValue::from_static("60"));
    headers.insert("X-RateLimit-Reset", HeaderValue::from_static("1700000000"));

    let state = RateLimitState::from_headers(&headers);

    assert_eq!(state.remaining, 42);
    assert_eq!(state.limit, 60);
    assert_eq!(state.reset_time, Utc.timestamp_opt(1_700_000_000, 0).unwrap());
    assert!(!state.is_limited);
    assert!(!state.is_low());
}

#[test]
fn test_rate_limit_exhausted() {
    let mut headers = HeaderMap::new();
    headers.insert("X-RateLimit-Remaining", HeaderValue::from_static("0"));
    headers.insert("X-RateLimit-Limit", HeaderValue::from_static("60"));

    let state = RateLimitState::from_headers(&headers);

    assert!(state.is_limited);
    assert!(state.is_low());
}

#[test]
fn test_rate_limit_without_headers() {
    let state = RateLimitState::from_headers(&HeaderMap::new());

    assert_eq!(state.remaining, 60);
    assert_eq!(state.limit, 60);
    assert!(!state.is_limited);
    assert!(state.reset_time > Utc::now());
}

#[test]
fn test_profile_display_name() {
    let mut profile: DeveloperProfile = serde_json::from_value(serde_json::json!({
        "login": "octo",
        "avatar_url": "https://avatars.githubusercontent.com/u/1"
    }))
    .unwrap();

    assert_eq!(profile.display_name(), "octo");
    assert!(!profile.is_empty());

    profile.name = Some(String::new());
    assert_eq!(profile.display_name(), "octo");

    profile.name = Some("Octo Cat".to_string());
    assert_eq!(profile.display_name(), "Octo Cat");

    assert!(DeveloperProfile::default().is_empty());
}

#[test]
fn test_repo_tolerates_missing_fields() {
    let repo: RepoSummary = serde_json::from_value(serde_json::json!({
        "id": 7,
        "name": "dotfiles",
        "html_url": "https://github.com/octo/dotfiles",
        "private": false,
        "owner": { "login": "octo" }
    }))
    .unwrap();

    assert_eq!(repo.id, 7);
    assert!(repo.description.is_none());
    assert_eq!(repo.stargazers_count, 0);
    assert!(!repo.has_pages);
    assert!(repo.pages_url().is_none());
}

#[test]
fn test_pages_url_requires_pages_and_homepage() {
    let mut repo: RepoSummary = serde_json::from_value(serde_json::json!({
        "id": 1,
        "name": "site",
        "html_url": "https://github.com/octo/site",
        "has_pages": true,
        "homepage": ""
    }))
    .unwrap();

    assert!(repo.pages_url().is_none());

    repo.homepage = Some("https://octo.github.io/site".to_string());
    assert_eq!(repo.pages_url(), Some("https://octo.github.io/site"));

    repo.has_pages = false;
    assert!(repo.pages_url().is_none());
}
