//! Networking modules for the dashboard's HTTP surface.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs real REST calls, `leaderboard` serves the mocked leaderboard
//! payloads, `config` resolves the API base URL, and `types` defines the
//! wire schema.

pub mod api;
pub mod config;
pub mod leaderboard;
pub mod types;
