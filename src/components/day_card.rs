//! Day card in the weekly activity strip.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::{self, DAY_KEY_PARAM};
use crate::state::activity::{ActivityState, DayActivity};

/// One day's traded symbols. Clicking selects the day in the activity
/// provider; the footer links to the day's trade detail.
#[component]
pub fn DayCard(day: DayActivity) -> impl IntoView {
    let activity = expect_context::<RwSignal<ActivityState>>();
    let key = day.key.clone();
    let class = {
        let key = key.clone();
        move || {
            if activity.with(|a| a.active_day_key == key) {
                "day-card day-card--active"
            } else {
                "day-card"
            }
        }
    };
    let detail_href = routes::href_for("activity-detail", &[(DAY_KEY_PARAM, day.key.as_str())]).unwrap_or_default();

    view! {
        <div
            class=class
            on:click=move |_| activity.update(|a| a.set_active_day(&key))
        >
            <header class="day-card__header">
                <span class="day-card__label">{day.day_label}</span>
                <span class="day-card__number">{day.day_number}</span>
                <span class="day-card__badge">{day.badge}</span>
            </header>
            <ul class="day-card__rows">
                {day
                    .rows
                    .into_iter()
                    .map(|row| {
                        view! {
                            <li class="day-card__row">
                                <span>{row.symbol}</span>
                                <span>{row.time}</span>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <A href=detail_href>
                <span class="day-card__more">{day.more_text}</span>
            </A>
        </div>
    }
}
