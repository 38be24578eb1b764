//! Listing search parameters for `GET /vehicles`.

use crate::constants::PAGE_SIZE;

/// Filters and paging for the listing search.
///
/// Blank filters are left out of the query string entirely.
///
/// ```rust
/// use shared::query::VehicleQuery;
///
/// let query = VehicleQuery { brand: "KTM".to_string(), ..VehicleQuery::default() };
/// assert_eq!(
///     query.to_params(),
///     vec![("page", "1".to_string()), ("limit", "12".to_string()), ("brand", "KTM".to_string())]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleQuery {
    pub page: Option<u32>,
    pub limit: u32,
    pub brand: String,
    pub min_price: String,
    pub max_price: String,
    pub search: String,
}

impl Default for VehicleQuery {
    fn default() -> Self {
        Self {
            page: Some(1),
            limit: PAGE_SIZE,
            brand: String::new(),
            min_price: String::new(),
            max_price: String::new(),
            search: String::new(),
        }
    }
}

impl VehicleQuery {
    /// Newest `limit` listings with no paging or filters.
    pub fn latest(limit: u32) -> Self {
        Self {
            page: None,
            limit,
            ..Self::default()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    /// Same paging, no filters.
    pub fn cleared(&self) -> Self {
        Self {
            page: Some(1),
            limit: self.limit,
            ..Self::default()
        }
    }

    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(page) = self.page {
            params.push(("page", page.to_string()));
        }
        params.push(("limit", self.limit.to_string()));

        let filters = [
            ("brand", &self.brand),
            ("min_price", &self.min_price),
            ("max_price", &self.max_price),
            ("search", &self.search),
        ];
        for (key, value) in filters {
            let value = value.trim();
            if !value.is_empty() {
                params.push((key, value.to_string()));
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_has_only_limit() {
        assert_eq!(VehicleQuery::latest(6).to_params(), vec![("limit", "6".to_string())]);
    }

    #[test]
    fn test_all_filters() {
        let query = VehicleQuery {
            page: Some(2),
            limit: 12,
            brand: "Honda".to_string(),
            min_price: "50000".to_string(),
            max_price: " 90000 ".to_string(),
            search: "shine".to_string(),
        };
        assert_eq!(
            query.to_params(),
            vec![
                ("page", "2".to_string()),
                ("limit", "12".to_string()),
                ("brand", "Honda".to_string()),
                ("min_price", "50000".to_string()),
                ("max_price", "90000".to_string()),
                ("search", "shine".to_string()),
            ]
        );
    }

    #[test]
    fn test_cleared_and_with_page() {
        let query = VehicleQuery {
            brand: "Honda".to_string(),
            search: "shine".to_string(),
            ..VehicleQuery::default()
        };
        assert_eq!(query.with_page(3).page, Some(3));
        assert_eq!(query.with_page(3).brand, "Honda");
        assert_eq!(query.cleared(), VehicleQuery::default());
    }
}
