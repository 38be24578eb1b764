//! Edit an owned listing

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use shared::routes::AppRoute;
use shared::validation::ListingForm;
use web_sys::File;

use crate::components::{ListingFormFields, PageLoader, PhotoPicker};
use crate::services::vehicles;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast;
use crate::utils::dom::go_back;

#[component]
pub fn EditBikePage() -> impl IntoView {
    let params = use_params_map();
    let session = use_session_context();
    let toast = use_toast();
    let navigate = use_navigate();

    let id = params.with_untracked(|p| p.get("id")).unwrap_or_default();
    let form = RwSignal::new(ListingForm::default());
    let files = RwSignal::new_local(Vec::<File>::new());
    let (loading, set_loading) = signal(true);
    let (saving, set_saving) = signal(false);

    {
        let id = id.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match vehicles::get_by_id(&id).await {
                Ok(vehicle) => {
                    if !vehicle.is_owned_by(session.user.get_untracked().as_ref()) {
                        toast.error("You can only edit your own bikes");
                        navigate("/bikes", Default::default());
                        return;
                    }
                    form.set(ListingForm::from_vehicle(&vehicle));
                    set_loading.set(false);
                }
                Err(e) => {
                    log::warn!("Failed to load vehicle {} for editing: {}", id, e);
                    if e.is_not_found() {
                        toast.error("Bike not found");
                    } else {
                        toast.error(e.user_message("Failed to load bike details"));
                    }
                    navigate("/bikes", Default::default());
                }
            }
        });
    }

    let on_submit = {
        let id = id.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            let payload = match form.with_untracked(ListingForm::to_payload) {
                Ok(payload) => payload,
                Err(e) => {
                    toast.error(e.to_string());
                    return;
                }
            };

            set_saving.set(true);
            let id = id.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                if let Err(e) = vehicles::update(&id, &payload).await {
                    log::error!("Update of {} failed: {}", id, e);
                    toast.error(e.user_message("Failed to update bike"));
                    set_saving.set(false);
                    return;
                }

                let photos = files.get_untracked();
                let uploaded = if photos.is_empty() {
                    Ok(())
                } else {
                    vehicles::upload_images(&id, &photos).await.map(|_| ())
                };
                match uploaded {
                    Ok(()) => toast.success("Bike updated successfully!"),
                    Err(e) => {
                        log::warn!("Photo upload for {} failed: {}", id, e);
                        toast.error("Bike updated, but photo upload failed");
                    }
                }
                set_saving.set(false);
                navigate(&AppRoute::BikeDetails(id).path(), Default::default());
            });
        }
    };

    move || {
        if loading.get() {
            return view! { <PageLoader/> }.into_any();
        }
        let on_submit = on_submit.clone();
        view! {
            <div class="page page-narrow">
                <h1>"Edit Listing"</h1>
                <p class="muted">"Update the details of your bike"</p>

                <form class="card listing-form" on:submit=on_submit>
                    <ListingFormFields form=form/>
                    <PhotoPicker files=files/>
                    <p class="muted small">"New photos are added to the existing ones."</p>

                    <div class="form-actions">
                        <button type="button" class="btn-secondary" on:click=move |_| go_back()>
                            "Cancel"
                        </button>
                        <button type="submit" class="btn-primary" disabled=move || saving.get()>
                            {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                        </button>
                    </div>
                </form>
            </div>
        }
        .into_any()
    }
}
