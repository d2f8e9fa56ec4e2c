use serde::Serialize;

use crate::domain::shop::{ShopCategory, ShopStatus};
use crate::pagination::PagePayload;
use crate::render::PaginationControls;

/// Data required to render a shop list page.
#[derive(Debug, Serialize)]
pub struct ShopsPageData<F, T> {
    /// Rows, page shape and the canonical filters, exactly as the JSON
    /// endpoint returns them.
    pub payload: PagePayload<F, T>,
    /// Pagination controls; absent when every row fits one page.
    pub controls: Option<PaginationControls>,
}

impl<F, T> ShopsPageData<F, T> {
    pub fn new(payload: PagePayload<F, T>) -> Self {
        let controls = PaginationControls::from_result(&payload.page);
        Self { payload, controls }
    }
}

/// Option lists for the filter selectors.
#[derive(Debug, Serialize)]
pub struct FilterChoices {
    pub categories: Vec<&'static str>,
    pub statuses: Vec<&'static str>,
    pub page_sizes: Vec<u32>,
}

impl Default for FilterChoices {
    fn default() -> Self {
        Self {
            categories: ShopCategory::ALL.iter().map(|c| c.as_str()).collect(),
            statuses: ShopStatus::ALL.iter().map(|s| s.as_str()).collect(),
            page_sizes: crate::domain::types::ALLOWED_PER_PAGE.to_vec(),
        }
    }
}
