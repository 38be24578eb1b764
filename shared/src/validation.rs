//! # Form Validation
//!
//! Checks that run before a form is submitted. Form state is kept as the raw
//! strings typed into inputs; conversion to request bodies happens here so
//! pages only deal with one `Result`.

use chrono::Datelike;

use crate::constants::{
    DEFAULT_FUEL_TYPE, DEFAULT_OWNER_TYPE, MAX_IMAGES, MIN_PASSWORD_LEN, MIN_YEAR,
};
use crate::dto::{LoginRequest, RegisterRequest, Vehicle, VehiclePayload};
use crate::error::ValidationError;

/// Calendar year on the client's clock.
pub fn current_year() -> i32 {
    chrono::Utc::now().year()
}

/// Editable state of the add/edit listing form.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingForm {
    pub title: String,
    pub brand: String,
    pub model: String,
    pub price: String,
    pub year: String,
    pub km_driven: String,
    pub fuel_type: String,
    pub location: String,
    pub description: String,
    pub owner_type: String,
    pub engine_cc: String,
    pub mileage: String,
    pub color: String,
    pub is_negotiable: bool,
}

impl Default for ListingForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            brand: String::new(),
            model: String::new(),
            price: String::new(),
            year: current_year().to_string(),
            km_driven: String::new(),
            fuel_type: DEFAULT_FUEL_TYPE.to_string(),
            location: String::new(),
            description: String::new(),
            owner_type: DEFAULT_OWNER_TYPE.to_string(),
            engine_cc: String::new(),
            mileage: String::new(),
            color: String::new(),
            is_negotiable: true,
        }
    }
}

impl ListingForm {
    /// Pre-fill the form from an existing listing.
    pub fn from_vehicle(v: &Vehicle) -> Self {
        Self {
            title: v.title.clone(),
            brand: v.brand.clone(),
            model: v.model.clone(),
            price: trim_float(v.price),
            year: v.year.to_string(),
            km_driven: v.km_driven.to_string(),
            fuel_type: v.fuel_type.clone(),
            location: v.location.clone().unwrap_or_default(),
            description: v.description.clone().unwrap_or_default(),
            owner_type: v
                .owner_type
                .clone()
                .unwrap_or_else(|| DEFAULT_OWNER_TYPE.to_string()),
            engine_cc: v.engine_cc.map(|cc| cc.to_string()).unwrap_or_default(),
            mileage: v.mileage.map(trim_float).unwrap_or_default(),
            color: v.color.clone().unwrap_or_default(),
            is_negotiable: v.is_negotiable,
        }
    }

    /// Validate against the current year and build the request body.
    pub fn to_payload(&self) -> Result<VehiclePayload, ValidationError> {
        self.to_payload_with_max_year(current_year())
    }

    pub fn to_payload_with_max_year(&self, max_year: i32) -> Result<VehiclePayload, ValidationError> {
        if [&self.title, &self.brand, &self.model, &self.price]
            .iter()
            .any(|f| f.trim().is_empty())
        {
            return Err(ValidationError::MissingRequired);
        }

        let price = positive(parse_required::<f64>(&self.price, "Price")?, "Price")?;
        let year = parse_required::<i32>(&self.year, "Year")?;
        if !(MIN_YEAR..=max_year).contains(&year) {
            return Err(ValidationError::YearOutOfRange { min: MIN_YEAR, max: max_year });
        }

        Ok(VehiclePayload {
            title: self.title.trim().to_string(),
            brand: self.brand.clone(),
            model: self.model.trim().to_string(),
            price,
            year,
            // Unparseable mileage counts as a fresh bike.
            km_driven: self.km_driven.trim().parse().unwrap_or(0),
            fuel_type: self.fuel_type.clone(),
            location: self.location.trim().to_string(),
            description: self.description.trim().to_string(),
            owner_type: self.owner_type.clone(),
            engine_cc: parse_optional::<u32>(&self.engine_cc, "Engine CC")?,
            mileage: parse_optional::<f64>(&self.mileage, "Mileage")?
                .map(|m| positive(m, "Mileage"))
                .transpose()?,
            color: self.color.clone(),
            is_negotiable: self.is_negotiable,
        })
    }
}

fn parse_required<T: std::str::FromStr>(raw: &str, field: &'static str) -> Result<T, ValidationError> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidNumber { field })
}

/// Finite and above zero. `f64::from_str` also accepts `NaN` and `inf`.
fn positive(value: f64, field: &'static str) -> Result<f64, ValidationError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive { field })
    }
}

fn parse_optional<T: std::str::FromStr>(raw: &str, field: &'static str) -> Result<Option<T>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        Ok(None)
    } else {
        parse_required(raw, field).map(Some)
    }
}

fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Login form check.
pub fn validate_login(email: &str, password: &str) -> Result<LoginRequest, ValidationError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(ValidationError::MissingCredentials);
    }
    Ok(LoginRequest {
        email: email.trim().to_string(),
        password: password.to_string(),
    })
}

/// Editable state of the signup form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn validate(&self) -> Result<RegisterRequest, ValidationError> {
        if self.name.trim().is_empty() || self.email.trim().is_empty() || self.password.is_empty() {
            return Err(ValidationError::MissingCredentials);
        }
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        let phone = self.phone.trim();
        Ok(RegisterRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: (!phone.is_empty()).then(|| phone.to_string()),
            password: self.password.clone(),
        })
    }
}

/// Reject a photo selection larger than the listing limit.
pub fn validate_image_selection(count: usize) -> Result<(), ValidationError> {
    if count > MAX_IMAGES {
        Err(ValidationError::TooManyImages(MAX_IMAGES))
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ListingForm {
        ListingForm {
            title: "Classic 350 - well kept".to_string(),
            brand: "Royal Enfield".to_string(),
            model: "Classic 350".to_string(),
            price: "150000".to_string(),
            year: "2021".to_string(),
            ..ListingForm::default()
        }
    }

    #[test]
    fn test_form_rejects_empty_required_fields() {
        for blank in ["title", "brand", "model", "price"] {
            let mut form = filled();
            match blank {
                "title" => form.title = "  ".to_string(),
                "brand" => form.brand.clear(),
                "model" => form.model.clear(),
                _ => form.price.clear(),
            }
            assert_eq!(form.to_payload_with_max_year(2025), Err(ValidationError::MissingRequired));
        }
    }

    #[test]
    fn test_form_builds_payload() {
        let mut form = filled();
        form.km_driven = "abc".to_string();
        form.engine_cc = "349".to_string();
        let payload = form.to_payload_with_max_year(2025).unwrap();
        assert_eq!(payload.price, 150000.0);
        assert_eq!(payload.year, 2021);
        assert_eq!(payload.km_driven, 0);
        assert_eq!(payload.engine_cc, Some(349));
        assert_eq!(payload.mileage, None);
        assert_eq!(payload.fuel_type, "Petrol");
        assert_eq!(payload.owner_type, "first_owner");
        assert!(payload.is_negotiable);
    }

    #[test]
    fn test_form_rejects_bad_numbers_and_years() {
        let mut form = filled();
        form.price = "lots".to_string();
        assert_eq!(
            form.to_payload_with_max_year(2025),
            Err(ValidationError::InvalidNumber { field: "Price" })
        );

        let mut form = filled();
        form.year = "1985".to_string();
        assert_eq!(
            form.to_payload_with_max_year(2025),
            Err(ValidationError::YearOutOfRange { min: 1990, max: 2025 })
        );

        let mut form = filled();
        form.mileage = "fast".to_string();
        assert_eq!(
            form.to_payload_with_max_year(2025),
            Err(ValidationError::InvalidNumber { field: "Mileage" })
        );
    }

    #[test]
    fn test_form_rejects_non_finite_and_negative_amounts() {
        for bad in ["NaN", "inf", "-5000", "0"] {
            let mut form = filled();
            form.price = bad.to_string();
            assert_eq!(
                form.to_payload_with_max_year(2025),
                Err(ValidationError::NotPositive { field: "Price" }),
                "price {:?}",
                bad
            );

            let mut form = filled();
            form.mileage = bad.to_string();
            assert_eq!(
                form.to_payload_with_max_year(2025),
                Err(ValidationError::NotPositive { field: "Mileage" }),
                "mileage {:?}",
                bad
            );
        }

        let mut form = filled();
        form.mileage = "35.5".to_string();
        assert_eq!(form.to_payload_with_max_year(2025).unwrap().mileage, Some(35.5));
    }

    #[test]
    fn test_from_vehicle_prefills() {
        let json = r#"{"id":1,"title":"Duke","brand":"KTM","model":"Duke 390","price":250000.0,
            "year":2022,"km_driven":8000,"mileage":28.5,"owner_id":"u1"}"#;
        let v: Vehicle = serde_json::from_str(json).unwrap();
        let form = ListingForm::from_vehicle(&v);
        assert_eq!(form.price, "250000");
        assert_eq!(form.mileage, "28.5");
        assert_eq!(form.km_driven, "8000");
        assert_eq!(form.engine_cc, "");
        assert_eq!(form.owner_type, "first_owner");
    }

    #[test]
    fn test_validate_login() {
        assert_eq!(validate_login("", "x"), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_login("a@b.in", ""), Err(ValidationError::MissingCredentials));
        assert_eq!(validate_login(" a@b.in ", "pw").unwrap().email, "a@b.in");
    }

    #[test]
    fn test_signup_checks_in_order() {
        let mut form = SignupForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: " ".to_string(),
            password: "abc".to_string(),
            confirm_password: "abd".to_string(),
        };
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        form.confirm_password = "abc".to_string();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort(6)));

        form.password = "abcdef".to_string();
        form.confirm_password = "abcdef".to_string();
        let req = form.validate().unwrap();
        assert_eq!(req.phone, None);

        form.name.clear();
        assert_eq!(form.validate(), Err(ValidationError::MissingCredentials));
    }

    #[test]
    fn test_image_selection_limit() {
        assert!(validate_image_selection(0).is_ok());
        assert!(validate_image_selection(5).is_ok());
        assert_eq!(validate_image_selection(6), Err(ValidationError::TooManyImages(5)));
    }
}
