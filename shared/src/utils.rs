//! # Shared Formatting Helpers
//!
//! Display helpers used by listing cards, detail pages and forms.
//!
//! - [`format_price`] - Rupee amount with Indian digit grouping
//! - [`format_number_in`] - Indian digit grouping without currency
//! - [`format_date`] - Short date such as `15 Jan 2024`
//! - [`truncate_text`] - Clip long descriptions with an ellipsis
//! - [`optimize_image_url`] - Ask the image CDN for a smaller rendition
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_price, truncate_text};
//!
//! assert_eq!(format_price(150000.0), "₹1,50,000");
//! assert_eq!(truncate_text("Single owner, serviced", 6), "Single...");
//! ```

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{DEFAULT_BIKE_IMAGE, OWNER_TYPES};

static WIDTH_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"w=\d+").expect("valid width pattern"));
static QUALITY_PARAM: Lazy<Regex> = Lazy::new(|| Regex::new(r"&q=\d+").expect("valid quality pattern"));

/// Group digits the Indian way: last three, then pairs (`12,34,567`).
///
/// ```rust
/// use shared::utils::format_number_in;
///
/// assert_eq!(format_number_in(1234567), "12,34,567");
/// assert_eq!(format_number_in(999), "999");
/// ```
pub fn format_number_in(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Format a price in rupees, rounded to whole rupees.
pub fn format_price(price: f64) -> String {
    if !price.is_finite() {
        return "₹0".to_string();
    }
    let rounded = price.abs().round() as u64;
    let sign = if price < 0.0 && rounded > 0 { "-" } else { "" };
    format!("{}₹{}", sign, format_number_in(rounded))
}

/// Odometer reading such as `15,000 km`.
pub fn format_km(km: u64) -> String {
    format!("{} km", format_number_in(km))
}

/// Short calendar date. Input that is not a recognised timestamp is returned unchanged.
///
/// ```rust
/// use shared::utils::format_date;
///
/// assert_eq!(format_date("2024-01-15T10:30:00Z"), "15 Jan 2024");
/// assert_eq!(format_date("2024-01-15T10:30:00.123456"), "15 Jan 2024");
/// assert_eq!(format_date("yesterday"), "yesterday");
/// ```
pub fn format_date(raw: &str) -> String {
    let date = DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.date_naive())
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
        .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"));

    match date {
        Ok(date) => date.format("%-d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// Clip `text` to `max_len` characters, appending `...` when clipped.
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        return text.to_string();
    }
    let clipped: String = text.chars().take(max_len).collect();
    format!("{}...", clipped)
}

/// Rewrite an Unsplash URL to the requested width and quality.
/// Images hosted elsewhere are returned untouched.
pub fn optimize_image_url(url: &str, width: u32, quality: u8) -> String {
    if !url.contains("unsplash.com") {
        return url.to_string();
    }
    let resized = WIDTH_PARAM.replace(url, format!("w={}", width).as_str());
    let stripped = QUALITY_PARAM.replace_all(&resized, "");
    format!("{}&q={}", stripped, quality)
}

/// Replacement source for an image that failed to load, or `None` once the
/// placeholder itself is showing.
pub fn fallback_image(current_src: &str) -> Option<&'static str> {
    (current_src != DEFAULT_BIKE_IMAGE).then_some(DEFAULT_BIKE_IMAGE)
}

/// Label for an owner-type code, falling back to the code itself.
pub fn owner_type_label(value: &str) -> &str {
    OWNER_TYPES
        .iter()
        .find(|(code, _)| *code == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

/// Page buttons to render for a result set.
pub fn page_numbers(pages: u32) -> Vec<u32> {
    (1..=pages).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_in() {
        assert_eq!(format_number_in(0), "0");
        assert_eq!(format_number_in(1000), "1,000");
        assert_eq!(format_number_in(150000), "1,50,000");
        assert_eq!(format_number_in(10000000), "1,00,00,000");
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(150000.0), "₹1,50,000");
        assert_eq!(format_price(99.6), "₹100");
        assert_eq!(format_price(-500.0), "-₹500");
        assert_eq!(format_price(f64::NAN), "₹0");
    }

    #[test]
    fn test_format_km() {
        assert_eq!(format_km(15000), "15,000 km");
    }

    #[test]
    fn test_format_date_plain_date() {
        assert_eq!(format_date("2023-11-05"), "5 Nov 2023");
    }

    #[test]
    fn test_truncate_text() {
        assert_eq!(truncate_text("short", 100), "short");
        assert_eq!(truncate_text("", 10), "");
        assert_eq!(truncate_text("abcdef", 3), "abc...");
        assert_eq!(truncate_text("₹₹₹₹", 2), "₹₹...");
    }

    #[test]
    fn test_optimize_image_url() {
        let url = "https://images.unsplash.com/photo-1?w=1200&q=90";
        assert_eq!(optimize_image_url(url, 400, 75), "https://images.unsplash.com/photo-1?w=400&q=75");

        let url = "https://images.unsplash.com/photo-1?w=400";
        assert_eq!(optimize_image_url(url, 800, 80), "https://images.unsplash.com/photo-1?w=800&q=80");

        let other = "https://cdn.example.com/bike.jpg";
        assert_eq!(optimize_image_url(other, 400, 75), other);
    }

    #[test]
    fn test_fallback_image_stops_at_placeholder() {
        assert_eq!(fallback_image("https://cdn.example.com/broken.jpg"), Some(DEFAULT_BIKE_IMAGE));
        assert_eq!(fallback_image(""), Some(DEFAULT_BIKE_IMAGE));
        assert_eq!(fallback_image(DEFAULT_BIKE_IMAGE), None);
    }

    #[test]
    fn test_owner_type_label() {
        assert_eq!(owner_type_label("second_owner"), "2nd Owner");
        assert_eq!(owner_type_label("dealer"), "dealer");
    }

    #[test]
    fn test_page_numbers() {
        assert_eq!(page_numbers(3), vec![1, 2, 3]);
        assert!(page_numbers(0).is_empty());
    }
}
