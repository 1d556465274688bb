//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its provider state (created on mount, provided via context
//! to its components) and delegates rendering details to `components`.

pub mod activity;
pub mod activity_detail;
pub mod dashboard;
pub mod landing;
pub mod leaderboards;
pub mod placeholder;
pub mod profile;
