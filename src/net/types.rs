//! Wire DTOs for profile and leaderboard payloads.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON so the mocked leaderboard
//! payload and a future real response deserialize through the same types.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A user profile record as served by `/profiles/{id}`.
///
/// Only `id` is guaranteed; anything the endpoint adds is kept in `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Leaderboard ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaderboardSort {
    #[default]
    MostActive,
    HoursOnChart,
    DailyAverage,
}

impl LeaderboardSort {
    pub const ALL: [Self; 3] = [Self::MostActive, Self::HoursOnChart, Self::DailyAverage];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::MostActive => "Most active",
            Self::HoursOnChart => "Hours on chart",
            Self::DailyAverage => "Daily average",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MostActive => "most_active",
            Self::HoursOnChart => "hours_on_chart",
            Self::DailyAverage => "daily_average",
        }
    }
}

/// Window the leaderboard aggregates over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    #[default]
    Weekly,
    Monthly,
    AllTime,
}

impl Timeframe {
    pub const ALL: [Self; 3] = [Self::Weekly, Self::Monthly, Self::AllTime];

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Weekly => "Weekly",
            Self::Monthly => "Monthly",
            Self::AllTime => "All time",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::AllTime => "all_time",
        }
    }
}

/// Leaderboard request parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardQuery {
    pub sort: LeaderboardSort,
    pub timeframe: Timeframe,
    pub search: String,
    pub page: u32,
    pub per_page: u32,
}

impl Default for LeaderboardQuery {
    fn default() -> Self {
        Self { sort: LeaderboardSort::MostActive, timeframe: Timeframe::Weekly, search: String::new(), page: 1, per_page: 10 }
    }
}

impl LeaderboardQuery {
    /// Same filters on another page.
    #[must_use]
    pub fn with_page(&self, page: u32) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    /// Replace the search text; a new search starts again from page 1.
    #[must_use]
    pub fn with_search(&self, search: &str) -> Self {
        Self { search: search.trim().to_owned(), page: 1, ..self.clone() }
    }
}

/// One participant row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardRow {
    pub id: u32,
    pub rank: u32,
    pub name: String,
    pub avatar: Option<String>,
    pub hours_on_chart: String,
    pub daily_average: String,
    pub pairs_visited: Vec<String>,
    pub country_flag: String,
}

/// Pagination info accompanying a leaderboard page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardMeta {
    pub total: u32,
    pub page: u32,
    pub per_page: u32,
    pub last_page: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardPage {
    pub data: Vec<LeaderboardRow>,
    pub meta: LeaderboardMeta,
}

/// Link users can copy to share the current leaderboard view.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub url: String,
}
