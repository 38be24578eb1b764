//! Application constants

/// REST API base URL, overridable at build time with `BIKE_API_URL`.
pub const API_BASE: &str = match option_env!("BIKE_API_URL") {
    Some(url) => url,
    None => "https://bike-backend-p83u.onrender.com",
};

// UI constants
pub const TOAST_DURATION_MS: u32 = 3000;
pub const CARD_IMAGE_WIDTH: u32 = 400;
pub const DETAIL_IMAGE_WIDTH: u32 = 800;
pub const THUMB_IMAGE_WIDTH: u32 = 100;
pub const DESCRIPTION_PREVIEW_CHARS: usize = 100;
