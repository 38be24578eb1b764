//! Listing search: filters, results grid, pagination

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use shared::constants::BIKE_BRANDS;
use shared::query::VehicleQuery;
use shared::utils::page_numbers;
use shared::Vehicle;

use crate::components::BikeCard;
use crate::services::vehicles;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pagination {
    page: u32,
    pages: u32,
    total: u64,
}

#[component]
pub fn BikesPage() -> impl IntoView {
    let query = use_query_map();

    let initial_brand = query.with_untracked(|q| q.get("brand")).unwrap_or_default();
    let filters = RwSignal::new(VehicleQuery {
        brand: initial_brand,
        ..VehicleQuery::default()
    });
    let (bikes, set_bikes) = signal(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);
    let (pagination, set_pagination) = signal(Pagination { page: 1, pages: 1, total: 0 });
    let brands = RwSignal::new(BIKE_BRANDS.iter().map(|b| b.to_string()).collect::<Vec<_>>());

    leptos::task::spawn_local(async move {
        match vehicles::get_brands().await {
            Ok(names) if !names.is_empty() => brands.set(names),
            Ok(_) => {}
            Err(e) => log::warn!("Brand list unavailable, using built-in list: {}", e),
        }
    });

    let fetch = move |page: u32| {
        let request = filters.get_untracked().with_page(page);
        set_loading.set(true);
        leptos::task::spawn_local(async move {
            match vehicles::get_all(&request).await {
                Ok(list) => {
                    set_pagination.set(Pagination {
                        page: list.page,
                        pages: list.pages,
                        total: list.total,
                    });
                    set_bikes.set(list.vehicles);
                }
                Err(e) => log::error!("Error fetching bikes: {}", e),
            }
            set_loading.set(false);
        });
    };

    // Follow ?brand= when the brand grid links here while already on this page
    Effect::new(move |_| {
        let brand = query.with(|q| q.get("brand")).unwrap_or_default();
        if filters.with_untracked(|f| f.brand != brand) {
            filters.update(|f| f.brand = brand);
        }
    });

    // Brand changes refetch immediately; the other filters wait for submit
    let brand = Memo::new(move |_| filters.with(|f| f.brand.clone()));
    Effect::new(move |_| {
        brand.track();
        fetch(1);
    });

    let on_filter = move |ev: SubmitEvent| {
        ev.prevent_default();
        fetch(1);
    };

    let on_clear = move |_| {
        let brand_was_set = filters.with_untracked(|f| !f.brand.is_empty());
        filters.update(|f| *f = f.cleared());
        // A brand change already triggers a refetch through the effect
        if !brand_was_set {
            fetch(1);
        }
    };

    view! {
        <div class="page">
            <header class="page-header">
                <h1>"Bikes for Sale"</h1>
                <p class="muted">
                    {move || format!("{} bikes available", pagination.get().total)}
                </p>
            </header>

            <form class="filters card" on:submit=on_filter>
                <input
                    type="text"
                    class="input-field"
                    placeholder="Search model..."
                    prop:value=move || filters.with(|f| f.search.clone())
                    on:input=move |ev| filters.update(|f| f.search = event_target_value(&ev))
                />
                <select
                    class="input-field"
                    prop:value=move || filters.with(|f| f.brand.clone())
                    on:change=move |ev| filters.update(|f| f.brand = event_target_value(&ev))
                >
                    <option value="">"All Brands"</option>
                    {move || {
                        let current = filters.with(|f| f.brand.clone());
                        brands
                            .get()
                            .into_iter()
                            .map(|b| {
                                let selected = b == current;
                                view! { <option value=b.clone() selected=selected>{b.clone()}</option> }
                            })
                            .collect_view()
                    }}
                </select>
                <input
                    type="number"
                    class="input-field"
                    placeholder="Min Price"
                    prop:value=move || filters.with(|f| f.min_price.clone())
                    on:input=move |ev| filters.update(|f| f.min_price = event_target_value(&ev))
                />
                <input
                    type="number"
                    class="input-field"
                    placeholder="Max Price"
                    prop:value=move || filters.with(|f| f.max_price.clone())
                    on:input=move |ev| filters.update(|f| f.max_price = event_target_value(&ev))
                />
                <div class="filter-actions">
                    <button type="submit" class="btn-primary">"Search"</button>
                    <button type="button" class="btn-secondary" on:click=on_clear>"Clear"</button>
                </div>
            </form>

            {move || {
                if loading.get() {
                    view! { <div class="spinner"></div> }.into_any()
                } else if bikes.with(Vec::is_empty) {
                    view! {
                        <div class="empty card">
                            <div class="empty-icon">"🏍️"</div>
                            <h3>"No bikes found"</h3>
                            <p class="muted">"Try adjusting your filters"</p>
                        </div>
                    }.into_any()
                } else {
                    let Pagination { page: current, pages, .. } = pagination.get();
                    view! {
                        <div class="bike-grid">
                            {bikes
                                .get()
                                .into_iter()
                                .map(|bike| view! { <BikeCard bike=bike/> })
                                .collect_view()}
                        </div>
                        <Show when=move || { pages > 1 }>
                            <div class="pagination">
                                {page_numbers(pages)
                                    .into_iter()
                                    .map(|page| view! {
                                        <button
                                            class="page-btn"
                                            class:active={page == current}
                                            on:click=move |_| fetch(page)
                                        >
                                            {page}
                                        </button>
                                    })
                                    .collect_view()}
                            </div>
                        </Show>
                    }.into_any()
                }
            }}
        </div>
    }
}
