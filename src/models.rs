use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Rate limit state reported by the last GitHub response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateLimitState {
    pub remaining: u32,
    pub limit: u32,
    pub reset_time: DateTime<Utc>,
    pub is_limited: bool,
}

impl Default for RateLimitState {
    fn default() -> Self {
        Self {
            remaining: 60,
            limit: 60,
            reset_time: Utc::now() + chrono::Duration::hours(1),
            is_limited: false,
        }
    }
}

impl RateLimitState {
    /// Read the `X-RateLimit-*` headers. Missing headers keep the defaults.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let defaults = Self::default();

        let remaining = header_value::<u32>(headers, "X-RateLimit-Remaining")
            .unwrap_or(defaults.remaining);

        let limit = header_value::<u32>(headers, "X-RateLimit-Limit").unwrap_or(defaults.limit);

        let reset_time = header_value::<i64>(headers, "X-RateLimit-Reset")
            .and_then(|timestamp| DateTime::from_timestamp(timestamp, 0))
            .unwrap_or(defaults.reset_time);

        Self {
            remaining,
            limit,
            reset_time,
            is_limited: remaining == 0,
        }
    }

    /// Below a tenth of the hourly budget.
    pub fn is_low(&self) -> bool {
        self.remaining.saturating_mul(10) < self.limit
    }
}

fn header_value<T: std::str::FromStr>(headers: &HeaderMap, name: &str) -> Option<T> {
    headers
        .get(name)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.parse::<T>().ok())
}
