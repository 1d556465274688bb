//! Dashboard sections that do not have data providers yet.

use leptos::prelude::*;

#[component]
fn EmptySection(message: &'static str) -> impl IntoView {
    view! {
        <section class="empty-section">
            <p>{message}</p>
        </section>
    }
}

#[component]
pub fn TradeHistoryPage() -> impl IntoView {
    view! { <EmptySection message="Your closed trades will appear here."/> }
}

#[component]
pub fn PerformancePage() -> impl IntoView {
    view! { <EmptySection message="Performance charts will appear here."/> }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    view! { <EmptySection message="Account and display settings will appear here."/> }
}
