//! Single listing: gallery, specifications, seller, owner actions

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared::constants::DEFAULT_BIKE_IMAGE;
use shared::routes::AppRoute;
use shared::utils::{format_date, format_km, format_price, optimize_image_url, owner_type_label};
use shared::Vehicle;

use crate::components::PageLoader;
use crate::services::vehicles;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast;
use crate::utils::constants::{DETAIL_IMAGE_WIDTH, THUMB_IMAGE_WIDTH};
use crate::utils::dom::confirm;

#[component]
pub fn BikeDetailsPage() -> impl IntoView {
    let params = use_params_map();
    let navigate = use_navigate();
    let session = use_session_context();
    let toast = use_toast();

    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let (bike, set_bike) = signal(None::<Vehicle>);
    let (loading, set_loading) = signal(true);
    let (selected_image, set_selected_image) = signal(0usize);
    let (deleting, set_deleting) = signal(false);

    {
        let id = id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match vehicles::get_by_id(&id).await {
                Ok(v) => set_bike.set(Some(v)),
                Err(e) => {
                    log::warn!("Failed to load vehicle {}: {}", id, e);
                    if e.is_not_found() {
                        toast.error("Bike not found");
                    } else {
                        toast.error(e.user_message("Failed to load bike details"));
                    }
                    navigate("/bikes", Default::default());
                }
            }
            set_loading.set(false);
        });
    }

    let on_delete = {
        let id = id.clone();
        move |_| {
            if !confirm("Are you sure you want to delete this listing?") {
                return;
            }
            set_deleting.set(true);
            let id = id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match vehicles::delete(&id).await {
                    Ok(_) => {
                        toast.success("Listing deleted successfully");
                        navigate("/bikes", Default::default());
                    }
                    Err(e) => toast.error(e.user_message("Failed to delete listing")),
                }
                set_deleting.set(false);
            });
        }
    };

    move || {
        if loading.get() {
            return view! { <PageLoader/> }.into_any();
        }
        let Some(bike) = bike.get() else {
            return ().into_any();
        };

        let images: Vec<String> = bike
            .gallery()
            .iter()
            .map(|url| optimize_image_url(url, DETAIL_IMAGE_WIDTH, 80))
            .collect();
        let thumbs = images.clone();
        let image_count = images.len();
        let main_image = move || {
            images
                .get(selected_image.get())
                .cloned()
                .unwrap_or_else(|| DEFAULT_BIKE_IMAGE.to_string())
        };

        let is_sold = bike.is_sold;
        let is_owner = session.is_authenticated() && bike.is_owned_by(session.user().as_ref());
        let edit_href = AppRoute::EditBike(bike.id.clone()).path();
        let on_delete = on_delete.clone();

        let specs: Vec<(&'static str, String)> = [
            Some(("Brand", bike.brand.clone())),
            Some(("Model", bike.model.clone())),
            Some(("Year", bike.year.to_string())),
            Some(("KM Driven", format_km(bike.km_driven))),
            Some(("Fuel Type", bike.fuel_type.clone())),
            bike.owner_type.as_deref().map(|o| ("Owner", owner_type_label(o).to_string())),
            bike.engine_cc.map(|cc| ("Engine", format!("{} cc", cc))),
            bike.mileage.map(|m| ("Mileage", format!("{} km/l", m))),
            bike.color.clone().map(|c| ("Color", c)),
            bike.location.clone().map(|l| ("Location", l)),
            bike.created_at.as_deref().map(|d| ("Listed On", format_date(d))),
        ]
        .into_iter()
        .flatten()
        .collect();

        view! {
            <div class="page">
                <nav class="breadcrumb">
                    <A href="/bikes">"← Back to Listings"</A>
                </nav>

                <div class="details-layout">
                    <div class="details-main">
                        <div class="card gallery">
                            <Show when=move || is_sold>
                                <div class="badge-sold">"SOLD"</div>
                            </Show>
                            <img
                                class="gallery-main"
                                src=main_image
                                alt=bike.title.clone()
                                loading="eager"
                                decoding="async"
                            />
                            <Show when=move || { image_count > 1 }>
                                <div class="gallery-thumbs">
                                    {thumbs
                                        .iter()
                                        .enumerate()
                                        .map(|(index, url)| {
                                            let src = optimize_image_url(url, THUMB_IMAGE_WIDTH, 80);
                                            view! {
                                                <button
                                                    class="thumb"
                                                    class:active=move || selected_image.get() == index
                                                    on:click=move |_| set_selected_image.set(index)
                                                >
                                                    <img src=src loading="lazy" decoding="async"/>
                                                </button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>

                        <div class="card">
                            <h2>"Vehicle Details"</h2>
                            <dl class="spec-grid">
                                {specs
                                    .into_iter()
                                    .map(|(label, value)| view! {
                                        <div class="spec">
                                            <dt class="muted">{label}</dt>
                                            <dd>{value}</dd>
                                        </div>
                                    })
                                    .collect_view()}
                            </dl>
                        </div>

                        {bike.description.clone().filter(|d| !d.trim().is_empty()).map(|d| view! {
                            <div class="card">
                                <h2>"Description"</h2>
                                <p class="description">{d}</p>
                            </div>
                        })}
                    </div>

                    <aside class="details-side card">
                        <h1 class="details-title">{bike.title.clone()}</h1>
                        <div class="details-price">{format_price(bike.price)}</div>
                        {bike.is_negotiable.then(|| view! { <span class="badge-negotiable">"Negotiable"</span> })}

                        {bike.owner.clone().map(|owner| view! {
                            <div class="seller">
                                <h3>"Seller Details"</h3>
                                <p>{owner.name}</p>
                                {owner.phone.map(|phone| {
                                    let href = format!("tel:{}", phone);
                                    view! { <a class="btn-primary" href=href>{format!("Call {}", phone)}</a> }
                                })}
                                {owner.email.map(|email| {
                                    let href = format!("mailto:{}", email);
                                    view! { <a class="btn-secondary" href=href>{email}</a> }
                                })}
                            </div>
                        })}

                        {is_owner.then(|| view! {
                            <div class="owner-actions">
                                <A href=edit_href><span class="btn-secondary">"Edit Listing"</span></A>
                                <button
                                    class="btn-danger"
                                    disabled=move || deleting.get()
                                    on:click=on_delete
                                >
                                    {move || if deleting.get() { "Deleting..." } else { "Delete Listing" }}
                                </button>
                            </div>
                        })}

                        {(!session.is_authenticated()).then(|| view! {
                            <A href="/login"><span class="btn-primary">"Login to Contact Seller"</span></A>
                        })}
                    </aside>
                </div>
            </div>
        }
        .into_any()
    }
}
