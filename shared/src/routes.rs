//! # Route Table and Guard
//!
//! Every page of the application and whether it needs a session.
//!
//! ```rust
//! use shared::routes::{guard, AppRoute, GuardDecision};
//!
//! let route = AppRoute::parse("/edit-bike/42").unwrap();
//! assert_eq!(route, AppRoute::EditBike("42".to_string()));
//! assert_eq!(guard(&route, false), GuardDecision::RedirectToLogin);
//! assert_eq!(guard(&AppRoute::Bikes, false), GuardDecision::Render);
//! ```

pub const LOGIN_PATH: &str = "/login";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppRoute {
    Home,
    Bikes,
    BikeDetails(String),
    Login,
    Signup,
    AddBike,
    EditBike(String),
    MyCollection,
}

impl AppRoute {
    /// Resolve a location path (query string and trailing slash ignored).
    pub fn parse(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Some(AppRoute::Home),
            ["bikes"] => Some(AppRoute::Bikes),
            ["bikes", id] => Some(AppRoute::BikeDetails((*id).to_string())),
            ["login"] => Some(AppRoute::Login),
            ["signup"] => Some(AppRoute::Signup),
            ["add-bike"] => Some(AppRoute::AddBike),
            ["edit-bike", id] => Some(AppRoute::EditBike((*id).to_string())),
            ["my-collection"] => Some(AppRoute::MyCollection),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Home => "/".to_string(),
            AppRoute::Bikes => "/bikes".to_string(),
            AppRoute::BikeDetails(id) => format!("/bikes/{}", id),
            AppRoute::Login => LOGIN_PATH.to_string(),
            AppRoute::Signup => "/signup".to_string(),
            AppRoute::AddBike => "/add-bike".to_string(),
            AppRoute::EditBike(id) => format!("/edit-bike/{}", id),
            AppRoute::MyCollection => "/my-collection".to_string(),
        }
    }

    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            AppRoute::AddBike | AppRoute::EditBike(_) | AppRoute::MyCollection
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    RedirectToLogin,
}

pub fn guard(route: &AppRoute, authenticated: bool) -> GuardDecision {
    if route.requires_auth() && !authenticated {
        GuardDecision::RedirectToLogin
    } else {
        GuardDecision::Render
    }
}

/// `/bikes?brand=<brand>` link used by the brand grid.
pub fn bikes_by_brand(brand: &str) -> String {
    format!("/bikes?brand={}", urlencoding::encode(brand))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_all_routes() {
        assert_eq!(AppRoute::parse("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::parse("/bikes/"), Some(AppRoute::Bikes));
        assert_eq!(AppRoute::parse("/bikes?brand=KTM"), Some(AppRoute::Bikes));
        assert_eq!(AppRoute::parse("/bikes/9"), Some(AppRoute::BikeDetails("9".to_string())));
        assert_eq!(AppRoute::parse("/login"), Some(AppRoute::Login));
        assert_eq!(AppRoute::parse("/signup"), Some(AppRoute::Signup));
        assert_eq!(AppRoute::parse("/add-bike"), Some(AppRoute::AddBike));
        assert_eq!(AppRoute::parse("/my-collection"), Some(AppRoute::MyCollection));
        assert_eq!(AppRoute::parse("/nope"), None);
        assert_eq!(AppRoute::parse("/bikes/9/extra"), None);
    }

    #[test]
    fn test_path_round_trips_through_parse() {
        let routes = [
            AppRoute::Home,
            AppRoute::BikeDetails("12".to_string()),
            AppRoute::EditBike("12".to_string()),
            AppRoute::MyCollection,
        ];
        for route in routes {
            assert_eq!(AppRoute::parse(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_unauthenticated_users_are_redirected_from_protected_routes() {
        for route in [AppRoute::AddBike, AppRoute::EditBike("1".to_string()), AppRoute::MyCollection] {
            assert_eq!(guard(&route, false), GuardDecision::RedirectToLogin);
            assert_eq!(guard(&route, true), GuardDecision::Render);
        }
    }

    #[test]
    fn test_public_routes_always_render() {
        for route in [AppRoute::Home, AppRoute::Bikes, AppRoute::Login, AppRoute::Signup] {
            assert_eq!(guard(&route, false), GuardDecision::Render);
        }
    }

    #[test]
    fn test_bikes_by_brand_encodes() {
        assert_eq!(bikes_by_brand("KTM"), "/bikes?brand=KTM");
        assert_eq!(bikes_by_brand("Royal Enfield"), "/bikes?brand=Royal%20Enfield");
    }
}
