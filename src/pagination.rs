//! Paginated result sets and their navigation links.

use serde::{Deserialize, Serialize};

use crate::domain::types::{PageNumber, PerPage};

pub const PREVIOUS_LABEL: &str = "« Previous";
pub const NEXT_LABEL: &str = "Next »";
pub const GAP_LABEL: &str = "...";

/// Page numbers to show around `current_page`; `None` marks a gap.
fn get_pages(
    total_pages: usize,
    current_page: usize,
    left_edge: usize,
    left_current: usize,
    right_current: usize,
    right_edge: usize,
) -> Vec<Option<usize>> {
    let last_page = total_pages;

    if last_page == 0 {
        return vec![];
    }

    let mut pages = Vec::new();

    let left_end = (1 + left_edge).min(last_page + 1);
    pages.extend((1..left_end).map(Some));

    let mid_start = left_end.max(current_page.saturating_sub(left_current));
    let mid_end = (current_page + right_current + 1).min(last_page + 1);

    if mid_start > left_end {
        pages.push(None);
    }
    pages.extend((mid_start..mid_end).map(Some));

    let right_start = mid_end.max(last_page.saturating_sub(right_edge) + 1);

    if right_start > mid_end {
        pages.push(None);
    }
    pages.extend((right_start..=last_page).map(Some));

    pages
}

/// One navigation entry. Entries without a URL are inert.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLink {
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

#[derive(Deserialize)]
struct PageParam {
    page: Option<u32>,
}

impl PageLink {
    /// The `page` query parameter the link points at.
    pub fn target_page(&self) -> Option<PageNumber> {
        let url = self.url.as_deref()?;
        let (_, query) = url.split_once('?')?;
        let param: PageParam = serde_html_form::from_str(query).ok()?;
        PageNumber::new(param.page?).ok()
    }
}

/// A single page of rows plus the shape of the whole result set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedResult<T> {
    pub data: Vec<T>,
    pub total: usize,
    pub current_page: u32,
    pub last_page: u32,
    pub per_page: u32,
    /// One-based index of the first row on this page, 0 when empty.
    pub from: usize,
    /// One-based index of the last row on this page, 0 when empty.
    pub to: usize,
    pub prev_page_url: Option<String>,
    pub next_page_url: Option<String>,
    /// Previous link, numbered links with gaps, next link.
    pub links: Vec<PageLink>,
}

/// Number of pages needed for `total` rows; never less than one.
pub fn last_page(total: usize, per_page: PerPage) -> PageNumber {
    let pages = total.div_ceil(per_page.as_usize()).max(1);
    PageNumber::new(u32::try_from(pages).unwrap_or(u32::MAX)).unwrap_or(PageNumber::FIRST)
}

impl<T> PaginatedResult<T> {
    /// Builds a page, clamping `page` into `1..=last_page`.
    ///
    /// `url_for` produces the address of any page of the same result set.
    pub fn new<E>(
        data: Vec<T>,
        total: usize,
        page: PageNumber,
        per_page: PerPage,
        url_for: impl Fn(PageNumber) -> Result<String, E>,
    ) -> Result<Self, E> {
        let last = last_page(total, per_page);
        let current = page.min(last);

        let (from, to) = if total == 0 {
            (0, 0)
        } else {
            let from = (current.as_usize() - 1) * per_page.as_usize() + 1;
            let to = (current.as_usize() * per_page.as_usize()).min(total);
            (from, to)
        };

        let prev_page_url = current.prev().map(&url_for).transpose()?;
        let next_page_url = if current < last {
            Some(url_for(current.next())?)
        } else {
            None
        };

        let mut links = Vec::new();
        links.push(PageLink {
            url: prev_page_url.clone(),
            label: PREVIOUS_LABEL.to_string(),
            active: false,
        });
        for entry in get_pages(last.as_usize(), current.as_usize(), 2, 2, 4, 2) {
            let link = match entry {
                Some(number) => {
                    let number = PageNumber::clamp(i64::try_from(number).unwrap_or(i64::MAX));
                    PageLink {
                        url: Some(url_for(number)?),
                        label: number.to_string(),
                        active: number == current,
                    }
                }
                None => PageLink {
                    url: None,
                    label: GAP_LABEL.to_string(),
                    active: false,
                },
            };
            links.push(link);
        }
        links.push(PageLink {
            url: next_page_url.clone(),
            label: NEXT_LABEL.to_string(),
            active: false,
        });

        Ok(Self {
            data,
            total,
            current_page: current.get(),
            last_page: last.get(),
            per_page: per_page.get(),
            from,
            to,
            prev_page_url,
            next_page_url,
            links,
        })
    }

    /// Converts the rows while keeping the page shape.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> PaginatedResult<U> {
        PaginatedResult {
            data: self.data.into_iter().map(f).collect(),
            total: self.total,
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            from: self.from,
            to: self.to,
            prev_page_url: self.prev_page_url,
            next_page_url: self.next_page_url,
            links: self.links,
        }
    }
}

/// What a list endpoint returns: a page of rows and the canonical filters
/// the server actually applied.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PagePayload<F, T> {
    #[serde(flatten)]
    pub page: PaginatedResult<T>,
    pub filters: F,
}
