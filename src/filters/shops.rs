//! Filter records of the shop list views.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::shop::{ShopCategory, ShopStatus};
use crate::domain::types::{PageNumber, PerPage};
use crate::filters::FilterSet;

/// Filters of the public directory: only verified, active shops are listed.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublicShopFilters {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ShopCategory>,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub city: String,
    pub per_page: PerPage,
    pub page: PageNumber,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PublicShopField {
    Search(String),
    Category(Option<ShopCategory>),
    City(String),
    PerPage(PerPage),
    Page(PageNumber),
}

impl FilterSet for PublicShopFilters {
    type Field = PublicShopField;

    fn apply(&mut self, field: PublicShopField) {
        match field {
            PublicShopField::Search(search) => self.search = search,
            PublicShopField::Category(category) => self.category = category,
            PublicShopField::City(city) => self.city = city,
            PublicShopField::PerPage(per_page) => self.per_page = per_page,
            PublicShopField::Page(page) => self.page = page,
        }
    }

    fn page(&self) -> PageNumber {
        self.page
    }

    fn set_page(&mut self, page: PageNumber) {
        self.page = page;
    }

    fn per_page(&self) -> PerPage {
        self.per_page
    }

    fn set_per_page(&mut self, per_page: PerPage) {
        self.per_page = per_page;
    }

    fn overlay(&mut self, other: &Self) {
        if !other.search.is_empty() {
            self.search.clone_from(&other.search);
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if !other.city.is_empty() {
            self.city.clone_from(&other.city);
        }
        self.per_page = other.per_page;
        self.page = other.page;
    }
}

/// Filters of the administrator listing screen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminShopFilters {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub search: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ShopStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<ShopCategory>,
    /// Inclusive lower bound on the listing creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_start: Option<NaiveDate>,
    /// Inclusive upper bound on the listing creation date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_end: Option<NaiveDate>,
    pub per_page: PerPage,
    pub page: PageNumber,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AdminShopField {
    Search(String),
    Status(Option<ShopStatus>),
    Category(Option<ShopCategory>),
    CreatedStart(Option<NaiveDate>),
    CreatedEnd(Option<NaiveDate>),
    PerPage(PerPage),
    Page(PageNumber),
}

impl FilterSet for AdminShopFilters {
    type Field = AdminShopField;

    fn apply(&mut self, field: AdminShopField) {
        match field {
            AdminShopField::Search(search) => self.search = search,
            AdminShopField::Status(status) => self.status = status,
            AdminShopField::Category(category) => self.category = category,
            AdminShopField::CreatedStart(date) => self.created_start = date,
            AdminShopField::CreatedEnd(date) => self.created_end = date,
            AdminShopField::PerPage(per_page) => self.per_page = per_page,
            AdminShopField::Page(page) => self.page = page,
        }
    }

    fn page(&self) -> PageNumber {
        self.page
    }

    fn set_page(&mut self, page: PageNumber) {
        self.page = page;
    }

    fn per_page(&self) -> PerPage {
        self.per_page
    }

    fn set_per_page(&mut self, per_page: PerPage) {
        self.per_page = per_page;
    }

    fn overlay(&mut self, other: &Self) {
        if !other.search.is_empty() {
            self.search.clone_from(&other.search);
        }
        if other.status.is_some() {
            self.status = other.status;
        }
        if other.category.is_some() {
            self.category = other.category;
        }
        if other.created_start.is_some() {
            self.created_start = other.created_start;
        }
        if other.created_end.is_some() {
            self.created_end = other.created_end;
        }
        self.per_page = other.per_page;
        self.page = other.page;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filters::link_to;

    #[test]
    fn empty_filters_send_only_paging_keys() {
        let filters = AdminShopFilters::default();
        assert_eq!(filters.to_query().unwrap(), "per_page=10&page=1");

        let filters = PublicShopFilters::default();
        assert_eq!(filters.to_query().unwrap(), "per_page=10&page=1");
    }

    #[test]
    fn non_empty_filters_are_encoded_in_declaration_order() {
        let filters = AdminShopFilters {
            search: "tire".to_string(),
            status: Some(ShopStatus::Active),
            created_start: NaiveDate::from_ymd_opt(2024, 3, 1),
            per_page: PerPage::new(25).unwrap(),
            page: PageNumber::new(2).unwrap(),
            ..AdminShopFilters::default()
        };
        assert_eq!(
            filters.to_query().unwrap(),
            "search=tire&status=active&created_start=2024-03-01&per_page=25&page=2"
        );
    }

    #[test]
    fn query_decoding_treats_empty_values_as_absent() {
        let filters =
            AdminShopFilters::from_query("?search=&status=&category=wheels&per_page=50").unwrap();
        assert_eq!(filters.search, "");
        assert_eq!(filters.status, None);
        assert_eq!(filters.category, Some(ShopCategory::Wheels));
        assert_eq!(filters.per_page.get(), 50);
        assert_eq!(filters.page, PageNumber::FIRST);
    }

    #[test]
    fn query_decoding_rejects_disallowed_page_size() {
        assert!(PublicShopFilters::from_query("per_page=7").is_err());
    }

    #[test]
    fn overlay_keeps_defaults_for_empty_keys() {
        let mut defaults = PublicShopFilters {
            city: "Austin".to_string(),
            ..PublicShopFilters::default()
        };
        let echo = PublicShopFilters {
            search: "tread".to_string(),
            page: PageNumber::new(3).unwrap(),
            ..PublicShopFilters::default()
        };
        defaults.overlay(&echo);
        assert_eq!(defaults.search, "tread");
        assert_eq!(defaults.city, "Austin");
        assert_eq!(defaults.page.get(), 3);
    }

    #[test]
    fn apply_sets_exactly_one_key() {
        let mut filters = PublicShopFilters::default();
        filters.apply(PublicShopField::Search("tire".to_string()));
        assert_eq!(
            filters,
            PublicShopFilters {
                search: "tire".to_string(),
                ..PublicShopFilters::default()
            }
        );
    }

    #[test]
    fn links_preserve_other_filters() {
        let filters = PublicShopFilters {
            search: "tire".to_string(),
            category: Some(ShopCategory::Repair),
            ..PublicShopFilters::default()
        };
        let link = link_to("/shops", &filters.with_page(PageNumber::new(4).unwrap())).unwrap();
        assert_eq!(link, "/shops?search=tire&category=repair&per_page=10&page=4");
    }
}
