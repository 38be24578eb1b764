//! BikeMarket Web App - Router

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::{Navbar, ProtectedRoute, Toaster};
use crate::pages::{
    AddBikePage, BikeDetailsPage, BikesPage, EditBikePage, HomePage, LoginPage,
    MyCollectionPage, SignupPage,
};
use crate::state::session::provide_session_context;
use crate::state::toast::provide_toast_context;

#[component]
pub fn App() -> impl IntoView {
    // Session is read from local storage once, here
    provide_session_context();
    provide_toast_context();

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=HomePage/>
                    <Route path=path!("/bikes") view=BikesPage/>
                    <Route path=path!("/bikes/:id") view=BikeDetailsPage/>
                    <Route path=path!("/login") view=LoginPage/>
                    <Route path=path!("/signup") view=SignupPage/>
                    <Route
                        path=path!("/add-bike")
                        view=|| view! { <ProtectedRoute><AddBikePage/></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/edit-bike/:id")
                        view=|| view! { <ProtectedRoute><EditBikePage/></ProtectedRoute> }
                    />
                    <Route
                        path=path!("/my-collection")
                        view=|| view! { <ProtectedRoute><MyCollectionPage/></ProtectedRoute> }
                    />
                </Routes>
                <Toaster/>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page-centered">
            <div class="card" style="max-width: 500px; text-align: center;">
                <h1>"404 - Page Not Found"</h1>
                <p class="muted">"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn-primary">"Go to Home"</span>
                </A>
            </div>
        </div>
    }
}
