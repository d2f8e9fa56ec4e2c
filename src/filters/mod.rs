//! Typed filter records driving the list views.
//!
//! Every list view owns one [`FilterSet`] implementation with a closed set of
//! keys. Records travel over the wire as query strings: empty values are
//! omitted, `per_page` and `page` are always present.

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::domain::types::{PageNumber, PerPage};

pub mod shops;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Errors raised while moving filter records to and from query strings.
pub enum FilterError {
    #[error("failed to encode filters: {0}")]
    Encode(String),

    #[error("failed to decode filters: {0}")]
    Decode(String),
}

/// A typed filter record for one list view.
pub trait FilterSet:
    Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// One variant per key, carrying the new value for that key.
    type Field: Clone + Debug + Send;

    /// Stores a single key.
    fn apply(&mut self, field: Self::Field);

    fn page(&self) -> PageNumber;

    fn set_page(&mut self, page: PageNumber);

    fn per_page(&self) -> PerPage;

    fn set_per_page(&mut self, per_page: PerPage);

    /// Copies every non-empty key of `other` over `self`.
    ///
    /// `per_page` and `page` are always copied.
    fn overlay(&mut self, other: &Self);

    /// The same filters pointing at another page.
    fn with_page(&self, page: PageNumber) -> Self {
        let mut filters = self.clone();
        filters.set_page(page);
        filters
    }

    /// Encodes the non-empty keys as an `application/x-www-form-urlencoded` string.
    fn to_query(&self) -> Result<String, FilterError> {
        serde_html_form::to_string(self).map_err(|err| FilterError::Encode(err.to_string()))
    }

    /// Decodes a query string; a leading `?` is accepted and missing keys take
    /// their default value.
    fn from_query(query: &str) -> Result<Self, FilterError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        serde_html_form::from_str(query).map_err(|err| FilterError::Decode(err.to_string()))
    }
}

/// Builds a link to `path` carrying the given filters.
pub fn link_to<F: FilterSet>(path: &str, filters: &F) -> Result<String, FilterError> {
    let query = filters.to_query()?;
    if query.is_empty() {
        Ok(path.to_string())
    } else {
        Ok(format!("{path}?{query}"))
    }
}
