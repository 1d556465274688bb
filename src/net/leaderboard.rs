//! Leaderboard data provider.
//!
//! The backend does not serve `/leaderboards` yet, so pages receive a mocked
//! payload shaped like the real response. The mock ignores sort, timeframe,
//! search and page: it always returns `per_page` copies of one sample row
//! against a fixed total.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "leaderboard_test.rs"]
mod leaderboard_test;

use super::api::ApiError;
use super::types::{LeaderboardMeta, LeaderboardPage, LeaderboardQuery, LeaderboardRow, SharePayload};

/// Participant count reported by the mocked payload.
pub const MOCK_TOTAL: u32 = 42;

const MOCK_PAIRS: [&str; 4] = ["USD/JPY", "CAD/USD", "GBP/AUD", "USD/NZD"];

/// Fetch one leaderboard page.
///
/// # Errors
///
/// Returns `ApiError::InvalidQuery` for a zero page size. The error is
/// logged before it is returned.
pub async fn fetch_leaderboard(query: &LeaderboardQuery) -> Result<LeaderboardPage, ApiError> {
    mock_leaderboard(query).inspect_err(|e| leptos::logging::error!("fetch_leaderboard failed: {e}"))
}

/// Build the mocked leaderboard payload for `query`.
///
/// # Errors
///
/// Returns `ApiError::InvalidQuery` when `per_page` is zero.
pub fn mock_leaderboard(query: &LeaderboardQuery) -> Result<LeaderboardPage, ApiError> {
    if query.per_page == 0 {
        return Err(ApiError::InvalidQuery("perPage must be at least 1".to_owned()));
    }
    let data = (1..=query.per_page).map(mock_row).collect();
    let meta = LeaderboardMeta {
        total: MOCK_TOTAL,
        page: query.page,
        per_page: query.per_page,
        last_page: MOCK_TOTAL.div_ceil(query.per_page),
    };
    Ok(LeaderboardPage { data, meta })
}

/// Build the share link for the leaderboard filtered by `query`.
///
/// `origin` is the page origin (`scheme://host[:port]`). An empty search is
/// left out of the query string.
pub fn share_payload(origin: &str, query: &LeaderboardQuery) -> SharePayload {
    let page = query.page.to_string();
    let per_page = query.per_page.to_string();
    let mut params = vec![
        ("sort", query.sort.as_str()),
        ("timeframe", query.timeframe.as_str()),
        ("page", page.as_str()),
        ("perPage", per_page.as_str()),
    ];
    if !query.search.is_empty() {
        params.push(("search", query.search.as_str()));
    }
    let qs = params
        .iter()
        .map(|(k, v)| format!("{k}={}", urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    SharePayload { url: format!("{}/leaderboards?{qs}", origin.trim_end_matches('/')) }
}

/// Current page origin in the browser; empty on the server.
pub fn current_origin() -> String {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

fn mock_row(id: u32) -> LeaderboardRow {
    LeaderboardRow {
        id,
        rank: 17,
        name: "Daniel Peters".to_owned(),
        avatar: None,
        hours_on_chart: "44hrs 17mins".to_owned(),
        daily_average: "4hrs 17mins".to_owned(),
        pairs_visited: MOCK_PAIRS.iter().chain(MOCK_PAIRS.iter()).map(|&p| p.to_owned()).collect(),
        country_flag: "🇩🇪".to_owned(),
    }
}
