//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data tiles. Stateful components
//! read their provider from Leptos context supplied by the owning page.

pub mod day_card;
pub mod layout;
pub mod leaderboard_table;
pub mod metric_card;
pub mod trade_card;
