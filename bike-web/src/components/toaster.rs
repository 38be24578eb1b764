use leptos::prelude::*;

use crate::state::toast::use_toast;

#[component]
pub fn Toaster() -> impl IntoView {
    let toast = use_toast();

    view! {
        <div class="toaster">
            <For
                each=move || toast.toasts.get()
                key=|t| t.id
                children=move |t| {
                    let id = t.id;
                    view! {
                        <div class=t.kind.class() on:click=move |_| toast.dismiss(id)>
                            {t.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
