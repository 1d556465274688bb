//! Root application component with routing.
//!
//! The router mirrors `routes::ROUTES`: dashboard pages nest under
//! `DashboardLayout`, and the two legacy dashboard paths redirect to their
//! top-level pages. Adding or renaming a route means editing both; the
//! `server` tests compare `generate_route_list(App)` against the table.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::pages::{
    activity::ActivityPage, activity_detail::ActivityDetailPage, dashboard::DashboardPage, landing::LandingPage,
    leaderboards::LeaderboardsPage, placeholder::PerformancePage, placeholder::SettingsPage,
    placeholder::TradeHistoryPage, profile::ProfilePage,
};
use crate::routes::DAY_KEY_PARAM;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Providers are owned by the pages that use them, so the root only sets up
/// metadata and routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/journal-dashboard.css"/>
        <Title text="Trading Journal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=LandingPage/>
                <ParentRoute path=StaticSegment("profile") view=DashboardLayout>
                    <Route path=StaticSegment("") view=ProfilePage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("leaderboards") view=DashboardLayout>
                    <Route path=StaticSegment("") view=LeaderboardsPage/>
                </ParentRoute>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("activity") view=ActivityPage/>
                    <Route
                        path=(StaticSegment("activity"), ParamSegment(DAY_KEY_PARAM))
                        view=ActivityDetailPage
                    />
                    <Route path=StaticSegment("trade-history") view=TradeHistoryPage/>
                    <Route path=StaticSegment("performance") view=PerformancePage/>
                    <Route
                        path=StaticSegment("leaderboards")
                        view=|| view! { <Redirect path="/leaderboards"/> }
                    />
                    <Route path=StaticSegment("profile") view=|| view! { <Redirect path="/profile"/> }/>
                    <Route path=StaticSegment("settings") view=SettingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
