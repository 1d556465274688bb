//! Dashboard overview: this week's headline metrics and a shortcut into activity.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::metric_card::MetricGrid;
use crate::state::activity::ActivityState;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let summary = ActivityState::default();

    view! {
        <div class="dashboard-page">
            <p class="dashboard-page__callout">{summary.callout}</p>
            <MetricGrid cards=summary.top_metrics/>
            <A href="/dashboard/activity">
                <span class="btn">"View activity"</span>
            </A>
        </div>
    }
}
