//! Pagination controls derived from a [`PaginatedResult`].
//!
//! The same controls back the server-rendered templates and the client view:
//! activating one only ever changes the `page` filter.

use serde::Serialize;

use crate::domain::types::PageNumber;
use crate::pagination::{PageLink, PaginatedResult};

/// A clickable (or inert) navigation entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    pub label: String,
    pub url: Option<String>,
    /// Page to switch to; `None` for gaps and unavailable prev/next.
    pub page: Option<PageNumber>,
    pub active: bool,
}

impl Control {
    fn from_link(link: &PageLink) -> Self {
        Self {
            label: link.label.clone(),
            url: link.url.clone(),
            page: link.target_page(),
            active: link.active,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.page.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PaginationControls {
    pub previous: Control,
    pub pages: Vec<Control>,
    pub next: Control,
    pub from: usize,
    pub to: usize,
    pub total: usize,
}

impl PaginationControls {
    /// Controls for `result`, or `None` when every row fits on one page.
    pub fn from_result<T>(result: &PaginatedResult<T>) -> Option<Self> {
        if result.total <= result.per_page as usize {
            return None;
        }

        let (previous, pages, next) = match result.links.as_slice() {
            [first, middle @ .., last] => (
                Control::from_link(first),
                middle.iter().map(Control::from_link).collect(),
                Control::from_link(last),
            ),
            _ => return None,
        };

        Some(Self {
            previous,
            pages,
            next,
            from: result.from,
            to: result.to,
            total: result.total,
        })
    }

    /// The control marking the current page.
    pub fn current(&self) -> Option<&Control> {
        self.pages.iter().find(|control| control.active)
    }
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use crate::domain::types::PerPage;
    use crate::pagination::GAP_LABEL;

    fn result(total: usize, page: u32) -> PaginatedResult<()> {
        PaginatedResult::new(
            Vec::new(),
            total,
            PageNumber::new(page).unwrap(),
            PerPage::DEFAULT,
            |p| Ok::<_, Infallible>(format!("/shops?search=tire&per_page=10&page={p}")),
        )
        .unwrap()
    }

    #[test]
    fn nothing_to_render_for_an_empty_result() {
        assert_eq!(PaginationControls::from_result(&result(0, 1)), None);
    }

    #[test]
    fn nothing_to_render_when_everything_fits_one_page() {
        assert_eq!(PaginationControls::from_result(&result(10, 1)), None);
        assert_eq!(PaginationControls::from_result(&result(7, 1)), None);
    }

    #[test]
    fn controls_point_at_neighbouring_pages() {
        let controls = PaginationControls::from_result(&result(95, 3)).unwrap();
        assert_eq!(controls.previous.page, PageNumber::new(2).ok());
        assert_eq!(controls.next.page, PageNumber::new(4).ok());
        assert_eq!(controls.current().and_then(|c| c.page), PageNumber::new(3).ok());
        assert_eq!((controls.from, controls.to, controls.total), (21, 30, 95));
    }

    #[test]
    fn first_page_has_inert_previous_and_gap() {
        let controls = PaginationControls::from_result(&result(200, 1)).unwrap();
        assert!(!controls.previous.is_enabled());
        assert!(controls.next.is_enabled());
        let gap = controls
            .pages
            .iter()
            .find(|control| control.label == GAP_LABEL)
            .unwrap();
        assert!(!gap.is_enabled());
    }
}
