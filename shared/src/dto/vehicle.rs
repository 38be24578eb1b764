//! # Vehicle (Listing) DTOs
//!
//! Records exchanged with the `/vehicles` endpoints.

use serde::{Deserialize, Serialize};

use super::auth::UserInfo;
use super::id::{deserialize_id, deserialize_opt_id, deserialize_or_default};
use crate::constants::DEFAULT_BIKE_IMAGE;

/// A bike listed for sale.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Vehicle {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub brand: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub model: String,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub price: f64,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub year: i32,
    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub km_driven: u64,
    #[serde(default = "default_fuel_type")]
    pub fuel_type: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub owner_type: Option<String>,
    #[serde(default)]
    pub engine_cc: Option<u32>,
    #[serde(default)]
    pub mileage: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub is_negotiable: bool,
    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_opt_id")]
    pub owner_id: Option<String>,
    #[serde(default)]
    pub owner: Option<OwnerInfo>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_fuel_type() -> String {
    "Petrol".to_string()
}

impl Vehicle {
    /// First uploaded image, or the placeholder when the listing has none.
    pub fn primary_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(DEFAULT_BIKE_IMAGE)
    }

    /// Gallery images, falling back to the placeholder.
    pub fn gallery(&self) -> Vec<String> {
        if self.images.is_empty() {
            vec![DEFAULT_BIKE_IMAGE.to_string()]
        } else {
            self.images.clone()
        }
    }

    pub fn is_owned_by(&self, user: Option<&UserInfo>) -> bool {
        match (self.owner_id.as_deref(), user) {
            (Some(owner_id), Some(user)) => owner_id == user.id,
            _ => false,
        }
    }
}

/// Seller contact details embedded in a listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OwnerInfo {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

/// One page of listings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehicleList {
    #[serde(default)]
    pub vehicles: Vec<Vehicle>,
    #[serde(default = "first_page")]
    pub page: u32,
    #[serde(default = "first_page")]
    pub pages: u32,
    #[serde(default)]
    pub total: u64,
}

fn first_page() -> u32 {
    1
}

/// Body of create and update requests.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VehiclePayload {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub price: f64,
    pub year: i32,
    pub km_driven: u64,
    pub fuel_type: String,
    pub location: String,
    pub description: String,
    pub owner_type: String,
    pub engine_cc: Option<u32>,
    pub mileage: Option<f64>,
    pub color: String,
    pub is_negotiable: bool,
}

/// Response of `POST /vehicles/{id}/upload-images`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadImagesResponse {
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Brand names as returned by `/vehicles/brands/list`.
///
/// The endpoint answers either with a bare array or with `{ "brands": [...] }`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BrandList {
    Plain(Vec<String>),
    Wrapped { brands: Vec<String> },
}

impl BrandList {
    pub fn into_names(self) -> Vec<String> {
        match self {
            BrandList::Plain(names) | BrandList::Wrapped { brands: names } => names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "id": 42,
            "title": "Royal Enfield Classic 350",
            "brand": "Royal Enfield",
            "model": "Classic 350",
            "price": 150000,
            "year": 2021,
            "owner_id": 7
        }"#
    }

    #[test]
    fn test_vehicle_defaults_for_missing_fields() {
        let v: Vehicle = serde_json::from_str(sample_json()).unwrap();
        assert_eq!(v.id, "42");
        assert_eq!(v.owner_id.as_deref(), Some("7"));
        assert_eq!(v.km_driven, 0);
        assert_eq!(v.fuel_type, "Petrol");
        assert!(!v.is_sold);
        assert!(v.images.is_empty());
        assert_eq!(v.primary_image(), DEFAULT_BIKE_IMAGE);
        assert_eq!(v.gallery(), vec![DEFAULT_BIKE_IMAGE.to_string()]);
    }

    #[test]
    fn test_is_owned_by() {
        let v: Vehicle = serde_json::from_str(sample_json()).unwrap();
        let owner = UserInfo {
            id: "7".to_string(),
            name: "Ravi".to_string(),
            email: "ravi@example.com".to_string(),
            phone: None,
        };
        let stranger = UserInfo { id: "8".to_string(), ..owner.clone() };
        assert!(v.is_owned_by(Some(&owner)));
        assert!(!v.is_owned_by(Some(&stranger)));
        assert!(!v.is_owned_by(None));
    }

    #[test]
    fn test_vehicle_list_defaults() {
        let list: VehicleList = serde_json::from_str("{}").unwrap();
        assert!(list.vehicles.is_empty());
        assert_eq!(list.page, 1);
        assert_eq!(list.pages, 1);
        assert_eq!(list.total, 0);
    }

    #[test]
    fn test_partial_record_keeps_the_page() {
        let json = r#"{
            "vehicles": [
                {"id": 1, "title": "Pulsar 150", "brand": "Bajaj", "model": "Pulsar", "price": 65000, "year": 2019},
                {"id": 2, "title": "Activa", "brand": null, "model": null, "price": null, "km_driven": null}
            ],
            "page": 1, "pages": 1, "total": 2
        }"#;
        let list: VehicleList = serde_json::from_str(json).unwrap();
        assert_eq!(list.vehicles.len(), 2);

        let partial = &list.vehicles[1];
        assert_eq!(partial.id, "2");
        assert_eq!(partial.title, "Activa");
        assert_eq!(partial.brand, "");
        assert_eq!(partial.model, "");
        assert_eq!(partial.price, 0.0);
        assert_eq!(partial.year, 0);
        assert_eq!(partial.km_driven, 0);
    }

    #[test]
    fn test_brand_list_both_shapes() {
        let plain: BrandList = serde_json::from_str(r#"["KTM","Honda"]"#).unwrap();
        let wrapped: BrandList = serde_json::from_str(r#"{"brands":["KTM","Honda"]}"#).unwrap();
        assert_eq!(plain.into_names(), vec!["KTM", "Honda"]);
        assert_eq!(wrapped.into_names(), vec!["KTM", "Honda"]);
    }
}
