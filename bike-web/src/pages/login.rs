//! Login page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::validation::validate_login;

use crate::services::auth;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let toast = use_toast();
    let navigate = use_navigate();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match validate_login(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::login(&request).await {
                Ok(response) => {
                    session.sign_in(&response);
                    toast.success("Welcome back!");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Login failed: {}", e);
                    toast.error(e.user_message("Invalid credentials"));
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="page page-centered">
            <div class="card auth-card">
                <h1>"Welcome Back"</h1>
                <p class="muted">"Login to manage your listings"</p>

                <form on:submit=on_submit>
                    <label class="field">
                        <span class="field-label">"Email"</span>
                        <input
                            type="email"
                            class="input-field"
                            placeholder="you@example.com"
                            prop:value=email
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Password"</span>
                        <input
                            type="password"
                            class="input-field"
                            placeholder="Your password"
                            prop:value=password
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                        />
                    </label>
                    <button type="submit" class="btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Logging in..." } else { "Login" }}
                    </button>
                </form>

                <p class="muted auth-switch">
                    "Don't have an account? "
                    <A href="/signup">"Sign up"</A>
                </p>
            </div>
        </div>
    }
}
