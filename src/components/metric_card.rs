//! Metric tile showing a value, its change, and an optional note.

use leptos::prelude::*;

use crate::state::metric::MetricCard;

#[component]
pub fn MetricTile(card: MetricCard) -> impl IntoView {
    let delta_class = if card.delta.starts_with('-') {
        "metric-tile__delta metric-tile__delta--down"
    } else {
        "metric-tile__delta metric-tile__delta--up"
    };

    view! {
        <div class="metric-tile">
            <span class="metric-tile__title">{card.title}</span>
            <span class="metric-tile__value">{card.value}</span>
            <span class=delta_class>{card.delta}</span>
            {card.note.map(|note| view! { <span class="metric-tile__note">{note}</span> })}
        </div>
    }
}

/// Row of metric tiles.
#[component]
pub fn MetricGrid(cards: Vec<MetricCard>) -> impl IntoView {
    view! {
        <div class="metric-grid">
            {cards.into_iter().map(|card| view! { <MetricTile card=card/> }).collect::<Vec<_>>()}
        </div>
    }
}
