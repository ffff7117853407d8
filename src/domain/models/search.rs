//! Search Filter
//!
//! The single free-text filter accepted by every list page.

/// Case-insensitive substring filter on one text field.
///
/// An absent or empty term means "no filter" and matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    term: Option<String>,
}

impl SearchFilter {
    /// Build a filter from the raw querystring value
    #[must_use]
    pub fn new(raw: Option<String>) -> Self {
        Self {
            term: raw.filter(|term| !term.is_empty()),
        }
    }

    /// A filter that matches every record
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// The search term, if any
    #[must_use]
    pub fn term(&self) -> Option<&str> {
        self.term.as_deref()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.term.is_none()
    }

    /// Whether `value` contains the term, ignoring case
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        match &self.term {
            None => true,
            Some(term) => value.to_lowercase().contains(&term.to_lowercase()),
        }
    }
}

impl From<Option<String>> for SearchFilter {
    fn from(raw: Option<String>) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for SearchFilter {
    fn from(raw: &str) -> Self {
        Self::new(Some(raw.to_string()))
    }
}
