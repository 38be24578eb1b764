//! New listing page

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::validation::ListingForm;
use web_sys::File;

use crate::components::{ListingFormFields, PhotoPicker};
use crate::services::vehicles;
use crate::state::toast::use_toast;
use crate::utils::dom::go_back;

#[component]
pub fn AddBikePage() -> impl IntoView {
    let toast = use_toast();
    let navigate = use_navigate();

    let form = RwSignal::new(ListingForm::default());
    let files = RwSignal::new_local(Vec::<File>::new());
    let (saving, set_saving) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let payload = match form.with_untracked(ListingForm::to_payload) {
            Ok(payload) => payload,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        set_saving.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let created = match vehicles::create(&payload).await {
                Ok(vehicle) => vehicle,
                Err(e) => {
                    log::error!("Create listing failed: {}", e);
                    toast.error(e.user_message("Failed to add bike"));
                    set_saving.set(false);
                    return;
                }
            };
            log::info!("Created listing {}", created.id);

            let photos = files.get_untracked();
            if photos.is_empty() {
                toast.success("Bike listed for sale!");
            } else {
                match vehicles::upload_images(&created.id, &photos).await {
                    Ok(_) => toast.success("Bike listed for sale!"),
                    Err(e) => {
                        log::warn!("Photo upload for {} failed: {}", created.id, e);
                        toast.error("Bike listed, but photo upload failed");
                    }
                }
            }
            set_saving.set(false);
            navigate("/bikes", Default::default());
        });
    };

    view! {
        <div class="page page-narrow">
            <h1>"Sell Your Bike"</h1>
            <p class="muted">"Fill in the details to list your bike for sale"</p>

            <form class="card listing-form" on:submit=on_submit>
                <ListingFormFields form=form/>
                <PhotoPicker files=files/>

                <div class="form-actions">
                    <button type="button" class="btn-secondary" on:click=move |_| go_back()>
                        "Cancel"
                    </button>
                    <button type="submit" class="btn-primary" disabled=move || saving.get()>
                        {move || if saving.get() { "Listing..." } else { "List Bike for Sale" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
