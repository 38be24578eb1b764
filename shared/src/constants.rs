//! Marketplace catalogue constants

pub const FUEL_TYPES: &[&str] = &["Petrol", "Diesel", "Electric", "Hybrid"];

pub const BIKE_BRANDS: &[&str] = &[
    "Bajaj",
    "BMW",
    "Ducati",
    "Harley-Davidson",
    "Honda",
    "Kawasaki",
    "KTM",
    "Royal Enfield",
    "Suzuki",
    "Yamaha",
    "TVS",
    "Hero",
];

pub const BRAND_LOGOS: &[(&str, &str)] = &[
    ("Bajaj", "https://upload.wikimedia.org/wikipedia/commons/thumb/5/5e/Bajaj_Auto_Logo.svg/200px-Bajaj_Auto_Logo.svg.png"),
    ("BMW", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/44/BMW.svg/200px-BMW.svg.png"),
    ("Ducati", "https://upload.wikimedia.org/wikipedia/commons/thumb/8/8e/Ducati_red_logo.svg/200px-Ducati_red_logo.svg.png"),
    ("Harley-Davidson", "https://upload.wikimedia.org/wikipedia/commons/thumb/d/de/Harley-Davidson_logo.svg/200px-Harley-Davidson_logo.svg.png"),
    ("Honda", "https://upload.wikimedia.org/wikipedia/commons/thumb/3/38/Honda.svg/200px-Honda.svg.png"),
    ("Kawasaki", "https://upload.wikimedia.org/wikipedia/commons/thumb/2/21/Kawasaki_Heavy_Industries_Logo.svg/200px-Kawasaki_Heavy_Industries_Logo.svg.png"),
    ("KTM", "https://upload.wikimedia.org/wikipedia/commons/thumb/b/b5/KTM-Logo.svg/200px-KTM-Logo.svg.png"),
    ("Royal Enfield", "https://upload.wikimedia.org/wikipedia/en/thumb/2/2e/Royal_Enfield_logo.svg/200px-Royal_Enfield_logo.svg.png"),
    ("Suzuki", "https://upload.wikimedia.org/wikipedia/commons/thumb/1/12/Suzuki_logo_2.svg/200px-Suzuki_logo_2.svg.png"),
    ("Yamaha", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/47/Yamaha_Motor_logo.svg/200px-Yamaha_Motor_logo.svg.png"),
    ("TVS", "https://upload.wikimedia.org/wikipedia/commons/thumb/4/4e/TVS_Motor_Company_Logo.svg/200px-TVS_Motor_Company_Logo.svg.png"),
    ("Hero", "https://upload.wikimedia.org/wikipedia/commons/thumb/e/e0/Hero_MotoCorp_Logo.svg/200px-Hero_MotoCorp_Logo.svg.png"),
];

// (value sent to the API, label shown in forms)
pub const OWNER_TYPES: &[(&str, &str)] = &[
    ("first_owner", "1st Owner"),
    ("second_owner", "2nd Owner"),
    ("third_owner", "3rd Owner"),
    ("fourth_plus", "4th Owner or More"),
];

pub const BIKE_COLORS: &[&str] = &[
    "Black", "White", "Red", "Blue", "Silver", "Grey", "Green", "Orange", "Yellow", "Brown",
];

pub const DEFAULT_BIKE_IMAGE: &str =
    "https://images.unsplash.com/photo-1558618666-fcd25c85cd64?w=400";

pub const DEFAULT_FUEL_TYPE: &str = "Petrol";
pub const DEFAULT_OWNER_TYPE: &str = "first_owner";

// Listing rules
pub const MAX_IMAGES: usize = 5;
pub const MIN_YEAR: i32 = 1990;
pub const MIN_PASSWORD_LEN: usize = 6;

// Paging
pub const PAGE_SIZE: u32 = 12;
pub const FEATURED_COUNT: u32 = 6;

/// Logo URL for a known brand.
pub fn brand_logo(brand: &str) -> Option<&'static str> {
    BRAND_LOGOS
        .iter()
        .find(|(name, _)| *name == brand)
        .map(|(_, url)| *url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_brand_has_a_logo() {
        for brand in BIKE_BRANDS {
            assert!(brand_logo(brand).is_some(), "missing logo for {}", brand);
        }
        assert_eq!(brand_logo("Vespa"), None);
    }
}
