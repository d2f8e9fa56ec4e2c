//! Raw query strings of the shop list pages.
//!
//! Everything arrives as optional text; [`PublicShopsQuery::normalize`] and
//! [`AdminShopsQuery::normalize`] turn it into the canonical filter record
//! that is echoed back to the view.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::Deserialize;
use validator::Validate;

use crate::domain::types::{PageNumber, PerPage};
use crate::filters::shops::{AdminShopFilters, PublicShopFilters};
use crate::forms::FormError;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Default, Deserialize, Validate)]
pub struct PublicShopsQuery {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub category: Option<String>,
    #[validate(length(max = 80))]
    pub city: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

#[derive(Debug, Default, Deserialize, Validate)]
pub struct AdminShopsQuery {
    #[validate(length(max = 100))]
    pub search: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub created_start: Option<String>,
    pub created_end: Option<String>,
    pub per_page: Option<String>,
    pub page: Option<String>,
}

impl PublicShopsQuery {
    pub fn parse(query_string: &str) -> Result<Self, FormError> {
        parse_query(query_string)
    }

    pub fn normalize(self) -> PublicShopFilters {
        PublicShopFilters {
            search: trimmed(self.search.as_deref()),
            category: choice(self.category.as_deref()),
            city: trimmed(self.city.as_deref()),
            per_page: per_page(self.per_page.as_deref()),
            page: page(self.page.as_deref()),
        }
    }
}

impl AdminShopsQuery {
    pub fn parse(query_string: &str) -> Result<Self, FormError> {
        parse_query(query_string)
    }

    /// Also swaps an inverted date range back into order.
    pub fn normalize(self) -> AdminShopFilters {
        let mut created_start = date(self.created_start.as_deref());
        let mut created_end = date(self.created_end.as_deref());
        if let (Some(start), Some(end)) = (created_start, created_end) {
            if start > end {
                created_start = Some(end);
                created_end = Some(start);
            }
        }

        AdminShopFilters {
            search: trimmed(self.search.as_deref()),
            status: choice(self.status.as_deref()),
            category: choice(self.category.as_deref()),
            created_start,
            created_end,
            per_page: per_page(self.per_page.as_deref()),
            page: page(self.page.as_deref()),
        }
    }
}

fn parse_query<Q>(query_string: &str) -> Result<Q, FormError>
where
    Q: for<'de> Deserialize<'de> + Validate,
{
    let query: Q = serde_html_form::from_str(query_string)
        .map_err(|err| FormError::Malformed(err.to_string()))?;
    query.validate()?;
    Ok(query)
}

fn trimmed(raw: Option<&str>) -> String {
    raw.map(str::trim).unwrap_or_default().to_string()
}

/// Unknown choices are ignored rather than rejected.
fn choice<T: FromStr>(raw: Option<&str>) -> Option<T> {
    raw.map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| value.parse().ok())
}

fn date(raw: Option<&str>) -> Option<NaiveDate> {
    raw.map(str::trim)
        .and_then(|value| NaiveDate::parse_from_str(value, DATE_FORMAT).ok())
}

fn per_page(raw: Option<&str>) -> PerPage {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map_or(PerPage::DEFAULT, PerPage::clamp)
}

fn page(raw: Option<&str>) -> PageNumber {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .map_or(PageNumber::FIRST, PageNumber::clamp)
}
