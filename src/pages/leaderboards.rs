//! Leaderboards page: filters, ranked table, pager and share link.

#[cfg(test)]
#[path = "leaderboards_test.rs"]
mod leaderboards_test;

use leptos::prelude::*;

use crate::components::leaderboard_table::{LeaderboardTable, Pager};
use crate::net::leaderboard::{current_origin, fetch_leaderboard, share_payload};
use crate::net::types::{LeaderboardQuery, LeaderboardSort, Timeframe};

/// Apply a `<select>` value to the query; unknown values leave it unchanged.
fn apply_filter(query: &LeaderboardQuery, field: &str, raw: &str) -> Option<LeaderboardQuery> {
    let mut next = query.clone();
    match field {
        "sort" => next.sort = LeaderboardSort::parse(raw)?,
        "timeframe" => next.timeframe = Timeframe::parse(raw)?,
        _ => return None,
    }
    next.page = 1;
    Some(next)
}

#[component]
pub fn LeaderboardsPage() -> impl IntoView {
    let query = RwSignal::new(LeaderboardQuery::default());
    let share_url = RwSignal::new(None::<String>);

    let board = LocalResource::new(move || {
        let q = query.get();
        async move { fetch_leaderboard(&q).await }
    });

    let on_filter = move |field: &'static str| {
        move |ev: leptos::ev::Event| {
            let raw = event_target_value(&ev);
            if let Some(next) = query.with_untracked(|q| apply_filter(q, field, &raw)) {
                query.set(next);
            }
        }
    };
    let on_page = Callback::new(move |page: u32| query.update(|q| *q = q.with_page(page)));
    let on_share = move |_| {
        let payload = query.with_untracked(|q| share_payload(&current_origin(), q));
        share_url.set(Some(payload.url));
    };

    view! {
        <div class="leaderboards-page">
            <div class="leaderboards-page__filters">
                <input
                    class="leaderboards-page__search"
                    type="search"
                    placeholder="Search traders"
                    prop:value=move || query.with(|q| q.search.clone())
                    on:change=move |ev| {
                        let raw = event_target_value(&ev);
                        query.update(|q| *q = q.with_search(&raw));
                    }
                />
                <select on:change=on_filter("sort")>
                    {LeaderboardSort::ALL
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str() selected=move || query.with(|q| q.sort == s)>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select on:change=on_filter("timeframe")>
                    {Timeframe::ALL
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str() selected=move || query.with(|q| q.timeframe == t)>{t.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <button class="btn" on:click=on_share>"Share"</button>
            </div>
            {move || share_url.get().map(|url| view! { <p class="leaderboards-page__share">{url}</p> })}
            <Suspense fallback=move || view! { <p>"Loading leaderboard..."</p> }>
                {move || {
                    board
                        .get()
                        .map(|result| match result {
                            Ok(page) => {
                                view! {
                                    <LeaderboardTable rows=page.data/>
                                    <Pager meta=page.meta on_page=on_page/>
                                }
                                    .into_any()
                            }
                            Err(e) => {
                                view! { <p class="error">{format!("Could not load leaderboard: {e}")}</p> }.into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
