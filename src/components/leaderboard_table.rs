//! Leaderboard table and pager.

use leptos::prelude::*;

use crate::net::types::{LeaderboardMeta, LeaderboardRow};

#[component]
pub fn LeaderboardTable(rows: Vec<LeaderboardRow>) -> impl IntoView {
    view! {
        <table class="leaderboard-table">
            <thead>
                <tr>
                    <th>"Rank"</th>
                    <th>"Trader"</th>
                    <th>"Hours on chart"</th>
                    <th>"Daily average"</th>
                    <th>"Pairs visited"</th>
                </tr>
            </thead>
            <tbody>
                {rows
                    .into_iter()
                    .map(|row| {
                        let initials: String = row.name.split_whitespace().filter_map(|w| w.chars().next()).collect();
                        view! {
                            <tr>
                                <td>{row.rank}</td>
                                <td class="leaderboard-table__trader">
                                    {match row.avatar {
                                        Some(src) => view! { <img class="avatar" src=src alt=row.name.clone()/> }.into_any(),
                                        None => view! { <span class="avatar avatar--initials">{initials}</span> }.into_any(),
                                    }}
                                    <span>{row.name}</span>
                                    <span class="leaderboard-table__flag">{row.country_flag}</span>
                                </td>
                                <td>{row.hours_on_chart}</td>
                                <td>{row.daily_average}</td>
                                <td class="leaderboard-table__pairs">
                                    {row
                                        .pairs_visited
                                        .into_iter()
                                        .map(|pair| view! { <span class="tag">{pair}</span> })
                                        .collect::<Vec<_>>()}
                                </td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}

/// Previous/next pager bounded by `meta.last_page`.
#[component]
pub fn Pager(meta: LeaderboardMeta, on_page: Callback<u32>) -> impl IntoView {
    let prev = meta.page.saturating_sub(1).max(1);
    let next = (meta.page + 1).min(meta.last_page.max(1));

    view! {
        <div class="pager">
            <button class="btn" disabled={meta.page <= 1} on:click=move |_| on_page.run(prev)>
                "Previous"
            </button>
            <span class="pager__status">{format!("Page {} of {}", meta.page, meta.last_page)}</span>
            <button class="btn" disabled={meta.page >= meta.last_page} on:click=move |_| on_page.run(next)>
                "Next"
            </button>
        </div>
    }
}
