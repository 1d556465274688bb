//! Public landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <h1>"Trading Journal"</h1>
            <p>"See where your screen time goes, trade by trade."</p>
            <A href="/dashboard">
                <span class="btn btn--primary">"Open dashboard"</span>
            </A>
        </div>
    }
}
