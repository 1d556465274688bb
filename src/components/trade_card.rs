//! Expandable trade card with narrative notes and an image gallery.

use leptos::prelude::*;

use crate::state::activity_detail::ActivityDetailState;
use crate::util::object_url::PlatformObjectUrls;

/// Summary row for one trade; expands into notes and gallery when open.
#[component]
pub fn TradeCard(trade_id: String) -> impl IntoView {
    let detail = expect_context::<RwSignal<ActivityDetailState>>();
    let Some(trade) = detail.with_untracked(|d| d.trade(&trade_id).cloned()) else {
        return ().into_any();
    };

    let open_id = trade_id.clone();
    let is_open = move || detail.with(|d| d.is_open(&open_id));
    let toggle_id = trade_id.clone();
    let body_id = trade_id;

    view! {
        <article class="trade-card">
            <button
                class="trade-card__summary"
                on:click=move |_| detail.update(|d| d.toggle_trade(&toggle_id))
            >
                <span class="trade-card__symbol">{trade.symbol}</span>
                <span class="trade-card__time">{trade.time_label}</span>
                <span class="trade-card__tags">
                    {trade
                        .tags
                        .into_iter()
                        .map(|tag| view! { <span class="tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </span>
            </button>
            {move || {
                is_open()
                    .then(|| {
                        view! {
                            <div class="trade-card__body">
                                <ul class="trade-card__notes">
                                    {trade
                                        .narrative_bullets
                                        .iter()
                                        .map(|b| view! { <li>{b.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <TradeGallery trade_id=body_id.clone()/>
                            </div>
                        }
                    })
            }}
        </article>
    }
        .into_any()
}

/// Gallery of uploads followed by placeholder shots, with an upload input.
#[component]
fn TradeGallery(trade_id: String) -> impl IntoView {
    let detail = expect_context::<RwSignal<ActivityDetailState>>();

    let uploads_id = trade_id.clone();
    let uploads = move || {
        detail.with(|d| d.trade(&uploads_id).map(|t| t.gallery_uploads.clone()).unwrap_or_default())
    };
    let placeholders = detail.with_untracked(|d| d.trade(&trade_id).map(|t| t.placeholder_images.clone()).unwrap_or_default());

    let remove_id = trade_id.clone();
    let remove = move |url: String| {
        detail.update(|d| {
            d.remove_images(&mut PlatformObjectUrls::default(), &remove_id, &[url]);
        });
    };

    let upload_id = trade_id;
    let on_files = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            use crate::util::object_url::files_from_input;

            let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) else {
                return;
            };
            let files = files_from_input(&input);
            let created = detail
                .try_update(|d| d.add_images(&mut PlatformObjectUrls::default(), &upload_id, &files))
                .unwrap_or_default();
            leptos::logging::log!("added {} image(s) to trade {upload_id}", created.len());
            input.set_value("");
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ev, &upload_id);
        }
    };

    view! {
        <div class="trade-gallery">
            {move || {
                uploads()
                    .into_iter()
                    .map(|upload| {
                        let url = upload.url.clone();
                        let remove = remove.clone();
                        view! {
                            <figure class="trade-gallery__item trade-gallery__item--upload">
                                <img src=upload.url alt=upload.name/>
                                <button class="trade-gallery__remove" on:click=move |_| remove(url.clone())>
                                    "Remove"
                                </button>
                            </figure>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
            {placeholders
                .into_iter()
                .map(|src| {
                    view! {
                        <figure class="trade-gallery__item">
                            <img src=src alt="Trade screenshot"/>
                        </figure>
                    }
                })
                .collect::<Vec<_>>()}
            <label class="trade-gallery__upload">
                "Add images"
                <input type="file" accept="image/*" multiple=true on:change=on_files/>
            </label>
        </div>
    }
}
