//! Landing page: hero, featured listings, brand grid

use leptos::prelude::*;
use leptos_router::components::A;
use shared::constants::{brand_logo, BIKE_BRANDS, FEATURED_COUNT};
use shared::query::VehicleQuery;
use shared::routes::bikes_by_brand;
use shared::Vehicle;

use crate::components::BikeCard;
use crate::services::vehicles;

const STATS: &[(&str, &str)] = &[
    ("500+", "Bikes Listed"),
    ("10K+", "Happy Buyers"),
    ("50+", "Cities"),
    ("100%", "Verified Sellers"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let (featured, set_featured) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        match vehicles::get_all(&VehicleQuery::latest(FEATURED_COUNT)).await {
            Ok(list) => set_featured.set(list.vehicles),
            Err(e) => log::error!("Error fetching featured bikes: {}", e),
        }
        set_loading.set(false);
    });

    view! {
        <div class="page">
            <section class="hero">
                <h1>"Buy & Sell " <span class="accent">"Used Bikes"</span></h1>
                <p>
                    "India's trusted marketplace for buying and selling used bikes. "
                    "Find verified sellers and great deals near you."
                </p>
                <div class="hero-actions">
                    <A href="/bikes"><span class="btn-primary">"Browse Bikes"</span></A>
                    <A href="/add-bike"><span class="btn-secondary">"Sell Your Bike"</span></A>
                </div>
            </section>

            <section class="stats">
                {STATS
                    .iter()
                    .map(|(number, label)| view! {
                        <div class="stat">
                            <div class="stat-number">{*number}</div>
                            <div class="muted">{*label}</div>
                        </div>
                    })
                    .collect_view()}
            </section>

            <section class="section">
                <h2>"Latest Listings"</h2>
                <p class="muted">"Check out the newest bikes listed for sale on our marketplace"</p>
                {move || {
                    if loading.get() {
                        view! { <div class="spinner"></div> }.into_any()
                    } else if featured.with(Vec::is_empty) {
                        view! {
                            <p class="empty">"No bikes available yet. Be the first to add one!"</p>
                        }.into_any()
                    } else {
                        view! {
                            <div class="bike-grid">
                                {featured
                                    .get()
                                    .into_iter()
                                    .map(|bike| view! { <BikeCard bike=bike/> })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
                <A href="/bikes"><span class="link">"View All Bikes →"</span></A>
            </section>

            <section class="section">
                <h2>"Browse by Brand"</h2>
                <p class="muted">"Find bikes from your favorite manufacturers"</p>
                <div class="brand-grid">
                    {BIKE_BRANDS
                        .iter()
                        .map(|brand| view! {
                            <A href=bikes_by_brand(brand)>
                                <div class="brand-tile">
                                    {brand_logo(brand).map(|src| view! {
                                        <img src=src alt=*brand loading="lazy"/>
                                    })}
                                    <span>{*brand}</span>
                                </div>
                            </A>
                        })
                        .collect_view()}
                </div>
            </section>
        </div>
    }
}
