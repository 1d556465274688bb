//! Dashboard layout shell: sidebar navigation plus a page header.
//!
//! The header title and subtitle come from the route table entry matching
//! the current location, so pages never set their own headings.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_location;

use crate::routes::{self, RouteMeta};

/// Sidebar entries as (label, route name).
const NAV: [(&str, &str); 7] = [
    ("Dashboard", "dashboard"),
    ("Activity", "activity"),
    ("Trade History", "trade-history"),
    ("Performance", "performance"),
    ("Leaderboards", "leaderboards"),
    ("Profile", "profile"),
    ("Settings", "settings"),
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub name: &'static str,
    pub href: String,
}

/// Sidebar links; entries whose route cannot be built are skipped.
pub fn nav_items() -> Vec<NavItem> {
    NAV.iter()
        .filter_map(|&(label, name)| routes::href_for(name, &[]).map(|href| NavItem { label, name, href }))
        .collect()
}

/// Header metadata for `path`, if the route defines any.
pub fn header_for(path: &str) -> Option<RouteMeta> {
    routes::resolve(path).and_then(|r| r.meta)
}

/// Layout wrapping every dashboard page.
#[component]
pub fn DashboardLayout() -> impl IntoView {
    let location = use_location();
    let resolved = Memo::new(move |_| routes::resolve(&location.pathname.get()));
    let meta = move || resolved.get().and_then(|r| r.meta);
    let active_name = move || resolved.get().and_then(|r| r.name);

    view! {
        <div class="dashboard-layout">
            <nav class="dashboard-layout__sidebar">
                {nav_items()
                    .into_iter()
                    .map(|item| {
                        let name = item.name;
                        let class = move || {
                            if active_name() == Some(name) {
                                "sidebar__link sidebar__link--active"
                            } else {
                                "sidebar__link"
                            }
                        };
                        view! {
                            <A href=item.href>
                                <span class=class>{item.label}</span>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <main class="dashboard-layout__main">
                <header class="dashboard-layout__header">
                    <h1>{move || meta().map(|m| m.title).unwrap_or_default()}</h1>
                    {move || {
                        meta()
                            .and_then(|m| m.subtitle)
                            .map(|s| view! { <p class="dashboard-layout__subtitle">{s}</p> })
                    }}
                </header>
                <Outlet/>
            </main>
        </div>
    }
}
