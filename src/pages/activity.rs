//! Activity summary page: range tabs, metric grids and the day strip.

use leptos::prelude::*;

use crate::components::day_card::DayCard;
use crate::components::metric_card::MetricGrid;
use crate::state::activity::ActivityState;

#[component]
pub fn ActivityPage() -> impl IntoView {
    let activity = RwSignal::new(ActivityState::default());
    provide_context(activity);

    let ActivityState { tabs, top_metrics, secondary_metrics, daily_activity, callout, .. } = activity.get_untracked();

    view! {
        <div class="activity-page">
            <div class="range-tabs" role="tablist">
                {tabs
                    .into_iter()
                    .map(|tab| {
                        let value = tab.value;
                        let class = move || {
                            if activity.with(|a| a.selected_range == value) {
                                "range-tabs__tab range-tabs__tab--active"
                            } else {
                                "range-tabs__tab"
                            }
                        };
                        view! {
                            <button class=class role="tab" on:click=move |_| activity.update(|a| a.set_range(value.as_str()))>
                                {tab.label}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <p class="activity-page__callout">{callout}</p>
            <MetricGrid cards=top_metrics/>
            <MetricGrid cards=secondary_metrics/>
            <div class="activity-page__days">
                {daily_activity.into_iter().map(|day| view! { <DayCard day=day/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
