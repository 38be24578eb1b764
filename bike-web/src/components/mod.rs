//! UI Components

pub mod bike_card;
pub mod listing_form;
pub mod loader;
pub mod navbar;
pub mod protected_route;
pub mod toaster;

pub use bike_card::BikeCard;
pub use listing_form::{ListingFormFields, PhotoPicker};
pub use loader::PageLoader;
pub use navbar::Navbar;
pub use protected_route::ProtectedRoute;
pub use toaster::Toaster;
