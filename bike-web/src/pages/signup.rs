//! Registration page

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::constants::MIN_PASSWORD_LEN;
use shared::validation::SignupForm;

use crate::services::auth;
use crate::state::session::use_session_context;
use crate::state::toast::use_toast;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session_context();
    let toast = use_toast();
    let navigate = use_navigate();

    let form = RwSignal::new(SignupForm::default());
    let (loading, set_loading) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let request = match form.with_untracked(SignupForm::validate) {
            Ok(request) => request,
            Err(e) => {
                toast.error(e.to_string());
                return;
            }
        };

        set_loading.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth::register(&request).await {
                Ok(response) => {
                    session.sign_in(&response);
                    toast.success("Account created successfully!");
                    navigate("/", Default::default());
                }
                Err(e) => {
                    log::warn!("Registration failed: {}", e);
                    toast.error(e.user_message("Registration failed"));
                }
            }
            set_loading.set(false);
        });
    };

    let password_hint = format!("At least {} characters", MIN_PASSWORD_LEN);

    view! {
        <div class="page page-centered">
            <div class="card auth-card">
                <h1>"Create Account"</h1>
                <p class="muted">"Join to buy and sell bikes"</p>

                <form on:submit=on_submit>
                    <label class="field">
                        <span class="field-label">"Full Name"</span>
                        <input
                            type="text"
                            class="input-field"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Email"</span>
                        <input
                            type="email"
                            class="input-field"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Phone"</span>
                        <input
                            type="tel"
                            class="input-field"
                            placeholder="Optional"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Password"</span>
                        <input
                            type="password"
                            class="input-field"
                            placeholder=password_hint
                            prop:value=move || form.with(|f| f.password.clone())
                            on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                        />
                    </label>
                    <label class="field">
                        <span class="field-label">"Confirm Password"</span>
                        <input
                            type="password"
                            class="input-field"
                            prop:value=move || form.with(|f| f.confirm_password.clone())
                            on:input=move |ev| {
                                form.update(|f| f.confirm_password = event_target_value(&ev))
                            }
                        />
                    </label>
                    <button type="submit" class="btn-primary btn-block" disabled=move || loading.get()>
                        {move || if loading.get() { "Creating account..." } else { "Sign Up" }}
                    </button>
                </form>

                <p class="muted auth-switch">
                    "Already have an account? "
                    <A href="/login">"Login"</A>
                </p>
            </div>
        </div>
    }
}
