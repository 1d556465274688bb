//! Static route table and path resolver.
//!
//! ARCHITECTURE
//! ============
//! `ROUTES` is the single description of every URL the dashboard serves:
//! which page renders it, whether it sits inside the dashboard layout, and
//! the title/subtitle the layout header shows. The Leptos router in `app`
//! mirrors this table, and the layout shell resolves the current location
//! against it to find its metadata.
//!
//! Patterns are `/`-separated; a `:name` segment captures one required path
//! parameter. Redirect entries are unnamed and point at a canonical path.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::activity::DEFAULT_DAY_KEY;

/// Path parameter carrying the activity-detail day selector.
pub const DAY_KEY_PARAM: &str = "dayKey";

const MAX_REDIRECTS: usize = 4;

const PROFILE_SUBTITLE: &str = "Here you can add, remove, and edit properties on your profile";

/// Page views reachable through the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Landing,
    Profile,
    Leaderboards,
    Dashboard,
    Activity,
    ActivityDetail,
    TradeHistory,
    Performance,
    Settings,
}

/// Shell a page renders inside.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Layout {
    Bare,
    Dashboard,
}

/// Header text shown by the dashboard layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteMeta {
    pub title: &'static str,
    pub subtitle: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    View { page: Page, layout: Layout, meta: Option<RouteMeta> },
    Redirect(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub path: &'static str,
    pub name: Option<&'static str>,
    pub target: RouteTarget,
}

const fn view(path: &'static str, name: &'static str, page: Page, layout: Layout, meta: Option<RouteMeta>) -> RouteDef {
    RouteDef { path, name: Some(name), target: RouteTarget::View { page, layout, meta } }
}

const fn titled(title: &'static str) -> Option<RouteMeta> {
    Some(RouteMeta { title, subtitle: None })
}

const fn redirect(path: &'static str, to: &'static str) -> RouteDef {
    RouteDef { path, name: None, target: RouteTarget::Redirect(to) }
}

pub static ROUTES: [RouteDef; 11] = [
    view("/", "landing", Page::Landing, Layout::Bare, None),
    view(
        "/profile",
        "profile",
        Page::Profile,
        Layout::Dashboard,
        Some(RouteMeta { title: "Profile", subtitle: Some(PROFILE_SUBTITLE) }),
    ),
    view(
        "/leaderboards",
        "leaderboards",
        Page::Leaderboards,
        Layout::Dashboard,
        Some(RouteMeta { title: "Leaderboards", subtitle: Some(PROFILE_SUBTITLE) }),
    ),
    view("/dashboard", "dashboard", Page::Dashboard, Layout::Dashboard, titled("Dashboard")),
    view("/dashboard/activity", "activity", Page::Activity, Layout::Dashboard, titled("Activity")),
    view(
        "/dashboard/activity/:dayKey",
        "activity-detail",
        Page::ActivityDetail,
        Layout::Dashboard,
        titled("Activity Detail"),
    ),
    view("/dashboard/trade-history", "trade-history", Page::TradeHistory, Layout::Dashboard, titled("Trade History")),
    view("/dashboard/performance", "performance", Page::Performance, Layout::Dashboard, titled("Performance")),
    redirect("/dashboard/leaderboards", "/leaderboards"),
    redirect("/dashboard/profile", "/profile"),
    view("/dashboard/settings", "settings", Page::Settings, Layout::Dashboard, titled("Settings")),
];

/// A path matched to a viewable route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Table pattern that matched, e.g. `/dashboard/activity/:dayKey`.
    pub pattern: &'static str,
    pub name: Option<&'static str>,
    pub page: Page,
    pub layout: Layout,
    pub meta: Option<RouteMeta>,
    pub params: Vec<(&'static str, String)>,
    /// Path originally requested when one or more redirects were followed.
    pub redirected_from: Option<String>,
}

impl ResolvedRoute {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }

    /// Day selector for activity views; `THUR` when the path carries none.
    pub fn day_key(&self) -> &str {
        self.param(DAY_KEY_PARAM).filter(|k| !k.is_empty()).unwrap_or(DEFAULT_DAY_KEY)
    }
}

/// Match `path` against the table, following redirects.
///
/// Query strings, fragments, repeated and trailing slashes are ignored.
/// Returns `None` when nothing matches or a redirect chain does not settle.
pub fn resolve(path: &str) -> Option<ResolvedRoute> {
    let mut current = path.to_owned();
    let mut redirected_from = None;

    for _ in 0..=MAX_REDIRECTS {
        let segments = path_segments(&current);
        let (route, params) = ROUTES.iter().find_map(|r| match_pattern(r.path, &segments).map(|p| (r, p)))?;
        match route.target {
            RouteTarget::View { page, layout, meta } => {
                return Some(ResolvedRoute {
                    pattern: route.path,
                    name: route.name,
                    page,
                    layout,
                    meta,
                    params,
                    redirected_from,
                });
            }
            RouteTarget::Redirect(to) => {
                if redirected_from.is_none() {
                    redirected_from = Some(path.to_owned());
                }
                to.clone_into(&mut current);
            }
        }
    }

    leptos::logging::warn!("redirect loop resolving {path}");
    None
}

pub fn route_by_name(name: &str) -> Option<&'static RouteDef> {
    ROUTES.iter().find(|r| r.name == Some(name))
}

/// Build the concrete path for the route called `name`.
///
/// Returns `None` for an unknown name or when a required parameter is missing.
pub fn href_for(name: &str, params: &[(&str, &str)]) -> Option<String> {
    let route = route_by_name(name)?;
    let mut out = String::new();
    for segment in path_segments(route.path) {
        out.push('/');
        if let Some(key) = segment.strip_prefix(':') {
            let value = params.iter().find(|(k, _)| *k == key).map(|(_, v)| *v).filter(|v| !v.is_empty())?;
            out.push_str(&urlencoding::encode(value));
        } else {
            out.push_str(segment);
        }
    }
    if out.is_empty() {
        out.push('/');
    }
    Some(out)
}

fn path_segments(path: &str) -> Vec<&str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end].split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    let expected = path_segments(pattern);
    if expected.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (want, got) in expected.into_iter().zip(segments) {
        if let Some(key) = want.strip_prefix(':') {
            let value = urlencoding::decode(got).map_or_else(|_| (*got).to_owned(), std::borrow::Cow::into_owned);
            params.push((key, value));
        } else if want != *got {
            return None;
        }
    }
    Some(params)
}
