use leptos::prelude::*;

#[component]
pub fn PageLoader() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="spinner"></div>
        </div>
    }
}
