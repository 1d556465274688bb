//! Profile overview page backed by `GET /profiles/{id}`.
//!
//! The profile id comes from the `?id=` query parameter; without one the
//! signed-in user's alias `me` is requested.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::fetch_profile;
use crate::net::config::ApiConfig;
use crate::net::types::Profile;

const DEFAULT_PROFILE_ID: &str = "me";

/// Name to show for a profile: its name, else its id.
fn display_name(profile: &Profile) -> &str {
    profile.name.as_deref().map(str::trim).filter(|n| !n.is_empty()).unwrap_or(&profile.id)
}

fn requested_id(raw: Option<String>) -> String {
    raw.map(|id| id.trim().to_owned())
        .filter(|id| !id.is_empty())
        .unwrap_or_else(|| DEFAULT_PROFILE_ID.to_owned())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let query = use_query_map();
    let config = ApiConfig::from_env();

    let profile = LocalResource::new(move || {
        let id = requested_id(query.with(|q| q.get("id")));
        let config = config.clone();
        async move { fetch_profile(&config, &id).await }
    });

    view! {
        <div class="profile-page">
            <Suspense fallback=move || view! { <p>"Loading profile..."</p> }>
                {move || {
                    profile
                        .get()
                        .map(|result| match result {
                            Ok(p) => {
                                let name = display_name(&p).to_owned();
                                view! {
                                    <div class="profile-card">
                                        {p.avatar.map(|src| view! { <img class="avatar" src=src alt="Avatar"/> })}
                                        <h2>{name}</h2>
                                        <dl class="profile-card__fields">
                                            {p
                                                .extra
                                                .into_iter()
                                                .map(|(key, value)| {
                                                    view! {
                                                        <dt>{key}</dt>
                                                        <dd>{value.to_string()}</dd>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </dl>
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="error">{format!("Could not load profile: {e}")}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}
