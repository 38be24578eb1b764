//! The signed-in user's own listings

use leptos::prelude::*;
use leptos_router::components::A;
use shared::routes::AppRoute;
use shared::utils::{format_km, format_price, optimize_image_url, truncate_text};
use shared::Vehicle;

use crate::components::PageLoader;
use crate::services::vehicles;
use crate::state::toast::use_toast;
use crate::utils::constants::{CARD_IMAGE_WIDTH, DESCRIPTION_PREVIEW_CHARS};
use crate::utils::dom::confirm;

#[component]
pub fn MyCollectionPage() -> impl IntoView {
    let toast = use_toast();
    let bikes = RwSignal::new(Vec::<Vehicle>::new());
    let (loading, set_loading) = signal(true);

    leptos::task::spawn_local(async move {
        match vehicles::get_my_bikes().await {
            Ok(list) => bikes.set(list.vehicles),
            Err(e) => {
                log::error!("Failed to load own listings: {}", e);
                toast.error(e.user_message("Failed to load your bikes"));
            }
        }
        set_loading.set(false);
    });

    let delete_bike = move |id: String, title: String| {
        if !confirm(&format!("Are you sure you want to delete \"{}\"?", title)) {
            return;
        }
        leptos::task::spawn_local(async move {
            match vehicles::delete(&id).await {
                Ok(_) => {
                    bikes.update(|list| list.retain(|b| b.id != id));
                    toast.success("Bike deleted successfully");
                }
                Err(e) => toast.error(e.user_message("Failed to delete bike")),
            }
        });
    };

    view! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>"My Collection"</h1>
                    <p class="muted">
                        {move || format!("{} bike(s) listed", bikes.with(Vec::len))}
                    </p>
                </div>
                <A href="/add-bike"><span class="btn-primary">"+ Add New Bike"</span></A>
            </div>

            {move || {
                if loading.get() {
                    return view! { <PageLoader/> }.into_any();
                }
                if bikes.with(Vec::is_empty) {
                    return view! {
                        <div class="card empty-state">
                            <div class="empty-icon">"🏍️"</div>
                            <h3>"No bikes listed yet"</h3>
                            <p class="muted">"Start selling by adding your first bike"</p>
                            <A href="/add-bike"><span class="btn-primary">"Add Your First Bike"</span></A>
                        </div>
                    }
                    .into_any();
                }
                view! {
                    <div class="collection-list">
                        <For
                            each=move || bikes.get()
                            key=|bike| bike.id.clone()
                            children=move |bike| {
                                let id = bike.id.clone();
                                let title = bike.title.clone();
                                let image = optimize_image_url(bike.primary_image(), CARD_IMAGE_WIDTH, 80);
                                let details = format!(
                                    "{} {} • {} • {}",
                                    bike.brand,
                                    bike.model,
                                    bike.year,
                                    format_km(bike.km_driven),
                                );
                                let preview = bike
                                    .description
                                    .as_deref()
                                    .map(|d| truncate_text(d, DESCRIPTION_PREVIEW_CHARS));
                                view! {
                                    <div class="card collection-row">
                                        <img class="collection-thumb" src=image alt=bike.title.clone() loading="lazy"/>
                                        <div class="collection-info">
                                            <h3>{bike.title.clone()}</h3>
                                            <p class="muted">{details}</p>
                                            <p class="price">{format_price(bike.price)}</p>
                                            {preview.map(|text| view! { <p class="muted small">{text}</p> })}
                                            {bike.is_sold.then(|| view! { <span class="badge-sold">"SOLD"</span> })}
                                        </div>
                                        <div class="collection-actions">
                                            <A href=AppRoute::BikeDetails(bike.id.clone()).path()>
                                                <span class="btn-secondary">"View"</span>
                                            </A>
                                            <A href=AppRoute::EditBike(bike.id.clone()).path()>
                                                <span class="btn-secondary">"Edit"</span>
                                            </A>
                                            <button
                                                class="btn-danger"
                                                on:click=move |_| delete_bike(id.clone(), title.clone())
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
