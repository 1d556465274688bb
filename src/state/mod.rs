//! Client-side state providers.
//!
//! DESIGN
//! ======
//! Each provider is a plain struct owned by the page that consumes it and
//! wrapped in an `RwSignal` there. Providers never call into one another, so
//! each can be exercised in isolation without a reactive runtime.

pub mod activity;
pub mod activity_detail;
pub mod metric;
