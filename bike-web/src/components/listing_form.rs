//! Listing form fields shared by the add and edit pages

use leptos::prelude::*;
use shared::constants::{BIKE_BRANDS, BIKE_COLORS, FUEL_TYPES, MAX_IMAGES, MIN_YEAR, OWNER_TYPES};
use shared::validation::{current_year, validate_image_selection, ListingForm};
use web_sys::{File, HtmlInputElement};

use crate::state::toast::use_toast;

fn plain_options(values: &[&str]) -> Vec<(String, String)> {
    values.iter().map(|v| (v.to_string(), v.to_string())).collect()
}

#[component]
fn FormInput(
    form: RwSignal<ListingForm>,
    label: &'static str,
    read: fn(&ListingForm) -> String,
    write: fn(&mut ListingForm, String),
    #[prop(default = "text")] kind: &'static str,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <input
                type=kind
                class="input-field"
                placeholder=placeholder
                prop:value=move || form.with(read)
                on:input=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            />
        </label>
    }
}

#[component]
fn FormSelect(
    form: RwSignal<ListingForm>,
    label: &'static str,
    options: Vec<(String, String)>,
    read: fn(&ListingForm) -> String,
    write: fn(&mut ListingForm, String),
    #[prop(optional)] empty_label: Option<&'static str>,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select
                class="input-field"
                prop:value=move || form.with(read)
                on:change=move |ev| form.update(|f| write(f, event_target_value(&ev)))
            >
                {empty_label.map(|text| view! { <option value="">{text}</option> })}
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        let current = value.clone();
                        view! {
                            <option value=value selected=move || form.with(read) == current>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Every editable listing field bound to `form`.
#[component]
pub fn ListingFormFields(form: RwSignal<ListingForm>) -> impl IntoView {
    let owner_options: Vec<(String, String)> = OWNER_TYPES
        .iter()
        .map(|(value, label)| (value.to_string(), label.to_string()))
        .collect();
    let year_hint = format!("Year of Purchase ({}-{})", MIN_YEAR, current_year());

    view! {
        <h2 class="form-section">"Basic Information"</h2>
        <div class="form-grid">
            <FormInput
                form=form
                label="Ad Title *"
                placeholder="e.g., Royal Enfield Classic 350 - Well Maintained"
                read=|f: &ListingForm| f.title.clone()
                write=|f: &mut ListingForm, v: String| f.title = v
            />
            <FormSelect
                form=form
                label="Brand *"
                empty_label="Select Brand"
                options=plain_options(BIKE_BRANDS)
                read=|f: &ListingForm| f.brand.clone()
                write=|f: &mut ListingForm, v: String| f.brand = v
            />
            <FormInput
                form=form
                label="Model *"
                placeholder="e.g., Classic 350"
                read=|f: &ListingForm| f.model.clone()
                write=|f: &mut ListingForm, v: String| f.model = v
            />
            <FormInput
                form=form
                label="Selling Price (₹) *"
                kind="number"
                placeholder="e.g., 150000"
                read=|f: &ListingForm| f.price.clone()
                write=|f: &mut ListingForm, v: String| f.price = v
            />
            <label class="field">
                <span class="field-label">{year_hint}</span>
                <input
                    type="number"
                    class="input-field"
                    min=MIN_YEAR.to_string()
                    max=current_year().to_string()
                    prop:value=move || form.with(|f| f.year.clone())
                    on:input=move |ev| form.update(|f| f.year = event_target_value(&ev))
                />
            </label>
        </div>

        <h2 class="form-section">"Vehicle Details"</h2>
        <div class="form-grid">
            <FormInput
                form=form
                label="KM Driven"
                kind="number"
                placeholder="e.g., 15000"
                read=|f: &ListingForm| f.km_driven.clone()
                write=|f: &mut ListingForm, v: String| f.km_driven = v
            />
            <FormSelect
                form=form
                label="Fuel Type"
                options=plain_options(FUEL_TYPES)
                read=|f: &ListingForm| f.fuel_type.clone()
                write=|f: &mut ListingForm, v: String| f.fuel_type = v
            />
            <FormSelect
                form=form
                label="Owner Type"
                options=owner_options
                read=|f: &ListingForm| f.owner_type.clone()
                write=|f: &mut ListingForm, v: String| f.owner_type = v
            />
            <FormInput
                form=form
                label="Engine (CC)"
                kind="number"
                placeholder="e.g., 350"
                read=|f: &ListingForm| f.engine_cc.clone()
                write=|f: &mut ListingForm, v: String| f.engine_cc = v
            />
            <FormInput
                form=form
                label="Mileage (km/l)"
                kind="number"
                placeholder="e.g., 35"
                read=|f: &ListingForm| f.mileage.clone()
                write=|f: &mut ListingForm, v: String| f.mileage = v
            />
            <FormSelect
                form=form
                label="Color"
                empty_label="Select Color"
                options=plain_options(BIKE_COLORS)
                read=|f: &ListingForm| f.color.clone()
                write=|f: &mut ListingForm, v: String| f.color = v
            />
            <FormInput
                form=form
                label="Location"
                placeholder="e.g., Mumbai"
                read=|f: &ListingForm| f.location.clone()
                write=|f: &mut ListingForm, v: String| f.location = v
            />
        </div>

        <label class="field-checkbox">
            <input
                type="checkbox"
                prop:checked=move || form.with(|f| f.is_negotiable)
                on:change=move |ev| form.update(|f| f.is_negotiable = event_target_checked(&ev))
            />
            <span>"Price is negotiable"</span>
        </label>

        <label class="field">
            <span class="field-label">"Description"</span>
            <textarea
                class="input-field textarea"
                placeholder="Describe your bike's condition, features, reason for selling, etc."
                prop:value=move || form.with(|f| f.description.clone())
                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
            ></textarea>
        </label>
    }
}

/// Multi-file photo input. A selection over the limit is rejected with a
/// toast and leaves the previous selection in place.
#[component]
pub fn PhotoPicker(files: RwSignal<Vec<File>, LocalStorage>) -> impl IntoView {
    let toast = use_toast();

    let on_change = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let count = list.length() as usize;
        if let Err(e) = validate_image_selection(count) {
            toast.error(e.to_string());
            input.set_value("");
            return;
        }
        let selected: Vec<File> = (0..list.length()).filter_map(|i| list.item(i)).collect();
        files.set(selected);
    };

    view! {
        <div class="field">
            <span class="field-label">{format!("Photos (Max {})", MAX_IMAGES)}</span>
            <label class="photo-drop">
                <input type="file" multiple=true accept="image/*" class="hidden" on:change=on_change/>
                <div class="photo-drop-icon">"📷"</div>
                <p class="muted">"Click to upload photos of your bike"</p>
                {move || {
                    let count = files.with(Vec::len);
                    (count > 0).then(|| view! {
                        <p class="photo-count">{format!("{} photo(s) selected", count)}</p>
                    })
                }}
            </label>
        </div>
    }
}
