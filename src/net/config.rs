//! API configuration resolved at build time.
//!
//! The WASM bundle has no process environment, so the base URL is baked in
//! from `JOURNAL_API_BASE` when the crate is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash. Empty means same-origin root.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ApiConfig {
    /// Build config from the compile-time `JOURNAL_API_BASE` variable.
    pub fn from_env() -> Self {
        Self::new(option_env!("JOURNAL_API_BASE"))
    }

    /// Build config from a raw base URL; blank or absent falls back to `/`.
    pub fn new(raw: Option<&str>) -> Self {
        let raw = raw.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(DEFAULT_API_BASE);
        Self { base_url: raw.trim_end_matches('/').to_owned() }
    }

    /// Join `path` onto the base URL with exactly one separating slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
