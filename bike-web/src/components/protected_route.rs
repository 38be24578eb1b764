//! Route guard for pages that need a session

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;
use shared::routes::{guard, AppRoute, GuardDecision, LOGIN_PATH};

use crate::state::session::use_session_context;

/// Render `children` only when the current route may be shown; otherwise
/// redirect to the login page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session_context();
    let location = use_location();

    move || {
        let pathname = location.pathname.get();
        let decision = match AppRoute::parse(&pathname) {
            Some(route) => guard(&route, session.is_authenticated()),
            None if session.is_authenticated() => GuardDecision::Render,
            None => GuardDecision::RedirectToLogin,
        };

        match decision {
            GuardDecision::Render => children().into_any(),
            GuardDecision::RedirectToLogin => {
                log::info!("Redirecting unauthenticated visit to {}", pathname);
                view! { <Redirect path=LOGIN_PATH/> }.into_any()
            }
        }
    }
}
