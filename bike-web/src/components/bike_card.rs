//! Listing summary card used in grids

use leptos::prelude::*;
use leptos_router::components::A;
use shared::routes::AppRoute;
use shared::utils::{fallback_image, format_km, format_price, optimize_image_url};
use shared::Vehicle;

use crate::utils::constants::CARD_IMAGE_WIDTH;

#[component]
pub fn BikeCard(bike: Vehicle) -> impl IntoView {
    let (image_loaded, set_image_loaded) = signal(false);
    let image_url = optimize_image_url(bike.primary_image(), CARD_IMAGE_WIDTH, 75);
    let href = AppRoute::BikeDetails(bike.id.clone()).path();
    let location = bike.location.clone().unwrap_or_default();
    let is_sold = bike.is_sold;
    let is_negotiable = bike.is_negotiable;

    view! {
        <A href=href>
            <div class="card bike-card">
                <div class="bike-card-media">
                    <Show when=move || is_sold>
                        <div class="badge-sold">"SOLD"</div>
                    </Show>
                    <img
                        src=image_url
                        alt=bike.title.clone()
                        loading="lazy"
                        decoding="async"
                        class:loaded=move || image_loaded.get()
                        on:load=move |_| set_image_loaded.set(true)
                        on:error=move |ev| {
                            let img: web_sys::HtmlElement = event_target(&ev);
                            let current = img.get_attribute("src").unwrap_or_default();
                            if let Some(src) = fallback_image(&current) {
                                img.set_attribute("src", src).ok();
                            }
                            set_image_loaded.set(true);
                        }
                    />
                    <div class="badge-price">{format_price(bike.price)}</div>
                    <Show when=move || is_negotiable>
                        <div class="badge-negotiable">"Negotiable"</div>
                    </Show>
                </div>

                <div class="bike-card-body">
                    <div class="bike-card-meta">
                        <span class="chip">{bike.brand.clone()}</span>
                        <span class="muted">{bike.year}</span>
                    </div>
                    <h3 class="bike-card-title">{bike.title.clone()}</h3>
                    <p class="muted">{bike.model.clone()}</p>
                    <div class="bike-card-footer">
                        <span>{format_km(bike.km_driven)}</span>
                        <span>{location}</span>
                    </div>
                </div>
            </div>
        </A>
    }
}
