//! Search Query DTOs
//!
//! Each list page takes one optional filter parameter. An empty or missing
//! value lists everything. A repeated parameter keeps its last value, and
//! unrelated parameters are ignored, so no querystring is ever rejected.

use crate::domain::models::SearchFilter;

#[derive(Debug, Default)]
pub struct ManufacturerSearchQuery {
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub struct DriverSearchQuery {
    pub username: Option<String>,
}

#[derive(Debug, Default)]
pub struct CarSearchQuery {
    pub model: Option<String>,
}

/// Last value of `key` in a raw querystring
fn last_value(query: Option<&str>, key: &str) -> Option<String> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or_default()).unwrap_or_default();
    pairs
        .into_iter()
        .rev()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

/// Filter for the use case plus the raw value echoed back into the search box
fn split(raw: Option<String>) -> (SearchFilter, String) {
    let echoed = raw.clone().unwrap_or_default();
    (SearchFilter::new(raw), echoed)
}

impl ManufacturerSearchQuery {
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        Self {
            name: last_value(query, "name"),
        }
    }

    #[must_use]
    pub fn into_filter(self) -> (SearchFilter, String) {
        split(self.name)
    }
}

impl DriverSearchQuery {
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        Self {
            username: last_value(query, "username"),
        }
    }

    #[must_use]
    pub fn into_filter(self) -> (SearchFilter, String) {
        split(self.username)
    }
}

impl CarSearchQuery {
    #[must_use]
    pub fn from_query(query: Option<&str>) -> Self {
        Self {
            model: last_value(query, "model"),
        }
    }

    #[must_use]
    pub fn into_filter(self) -> (SearchFilter, String) {
        split(self.model)
    }
}
