//! Page modules

pub mod add_bike;
pub mod bike_details;
pub mod bikes;
pub mod edit_bike;
pub mod home;
pub mod login;
pub mod my_collection;
pub mod signup;

pub use add_bike::AddBikePage;
pub use bike_details::BikeDetailsPage;
pub use bikes::BikesPage;
pub use edit_bike::EditBikePage;
pub use home::HomePage;
pub use login::LoginPage;
pub use my_collection::MyCollectionPage;
pub use signup::SignupPage;
