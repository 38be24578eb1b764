//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();
    let (menu_open, set_menu_open) = signal(false);

    let on_logout = move |_| {
        session.sign_out();
        navigate("/", Default::default());
    };

    let close_menu = move |_| set_menu_open.set(false);

    view! {
        <nav class="navbar">
            <div class="navbar-inner">
                <A href="/">
                    <span class="nav-brand">
                        <span class="nav-logo">"🏍️"</span>
                        <span class="nav-title">"BikeMarket"</span>
                    </span>
                </A>

                <button class="nav-toggle" on:click=move |_| set_menu_open.update(|open| *open = !*open)>
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>

                <div class="nav-links" class:open=move || menu_open.get() on:click=close_menu>
                    <A href="/">"Home"</A>
                    <A href="/bikes">"Bikes"</A>
                    <Show when=move || session.is_authenticated()>
                        <A href="/my-collection">"My Listings"</A>
                        <A href="/add-bike">"Sell Bike"</A>
                    </Show>
                </div>

                {move || {
                    let on_logout = on_logout.clone();
                    if session.is_authenticated() {
                        let name = session.user().map(|u| u.name).unwrap_or_default();
                        view! {
                            <div class="nav-account">
                                <span class="muted">"Hi, " {name}</span>
                                <button class="btn-secondary" on:click=on_logout>"Logout"</button>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="nav-account">
                                <A href="/login">"Login"</A>
                                <A href="/signup"><span class="btn-primary">"Sign Up"</span></A>
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </nav>
    }
}
