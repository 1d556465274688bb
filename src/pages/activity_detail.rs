//! Activity detail page: the trades journaled for one day.
//!
//! The `dayKey` route parameter seeds the provider; without one the default
//! day is shown. Uploaded gallery images are released when the page unmounts.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::metric_card::MetricGrid;
use crate::components::trade_card::TradeCard;
use crate::routes::DAY_KEY_PARAM;
use crate::state::activity_detail::ActivityDetailState;
use crate::util::object_url::PlatformObjectUrls;

#[component]
pub fn ActivityDetailPage() -> impl IntoView {
    let params = use_params_map();
    let day_key = params.with_untracked(|p| p.get(DAY_KEY_PARAM));

    let detail = RwSignal::new(ActivityDetailState::new(day_key.as_deref()));
    provide_context(detail);

    on_cleanup(move || {
        detail.try_update(|d| d.release_all(&mut PlatformObjectUrls::default()));
    });

    let (day, metrics, trade_ids) = detail.with_untracked(|d| {
        (d.day_key.clone(), d.top_metrics.clone(), d.trades.iter().map(|t| t.id.clone()).collect::<Vec<_>>())
    });

    view! {
        <div class="activity-detail-page">
            <h2 class="activity-detail-page__day">{day}</h2>
            <MetricGrid cards=metrics/>
            <div class="activity-detail-page__trades">
                {trade_ids.into_iter().map(|id| view! { <TradeCard trade_id=id/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
