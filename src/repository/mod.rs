use chrono::NaiveDate;

use crate::db::DbPool;
use crate::domain::shop::{NewShop, Shop, ShopCategory, ShopStatus};
use crate::repository::errors::RepositoryResult;

pub mod errors;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;
pub mod shop;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

impl Pagination {
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1) * self.per_page
    }
}

/// Filters understood by [`ShopReader::list_shops`]. `None` means "any".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShopListQuery {
    /// Substring matched against name and city.
    pub search: Option<String>,
    pub city: Option<String>,
    pub category: Option<ShopCategory>,
    pub status: Option<ShopStatus>,
    pub verified: Option<bool>,
    pub created_start: Option<NaiveDate>,
    pub created_end: Option<NaiveDate>,
    pub pagination: Option<Pagination>,
}

impl ShopListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    pub fn category(mut self, category: ShopCategory) -> Self {
        self.category = Some(category);
        self
    }

    pub fn status(mut self, status: ShopStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn verified(mut self, verified: bool) -> Self {
        self.verified = Some(verified);
        self
    }

    pub fn created_between(mut self, start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        self.created_start = start;
        self.created_end = end;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait ShopReader {
    /// Total number of matching shops and the requested page of them.
    fn list_shops(&self, query: ShopListQuery) -> RepositoryResult<(usize, Vec<Shop>)>;
}

pub trait ShopWriter {
    fn create_shops(&self, new_shops: &[NewShop]) -> RepositoryResult<usize>;
}

/// Diesel implementation of every repository trait.
#[derive(Clone)]
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
