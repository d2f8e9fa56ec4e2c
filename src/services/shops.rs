//! Services loading the shop list pages.

use crate::domain::shop::{Shop, ShopStatus};
use crate::dto::shops::ShopsPageData;
use crate::filters::shops::{AdminShopFilters, PublicShopFilters};
use crate::filters::{FilterSet, link_to};
use crate::forms::shops::{AdminShopsQuery, PublicShopsQuery};
use crate::pagination::{PagePayload, PaginatedResult, last_page};
use crate::repository::{ShopListQuery, ShopReader};
use crate::services::ServiceResult;

/// Loads verified, active shops for the public directory.
///
/// `path` is the page the navigation links point at.
pub fn load_public_shops<R>(
    repo: &R,
    query_string: &str,
    path: &str,
) -> ServiceResult<ShopsPageData<PublicShopFilters, Shop>>
where
    R: ShopReader + ?Sized,
{
    let filters = PublicShopsQuery::parse(query_string)?.normalize();

    let mut list_query = ShopListQuery::new()
        .status(ShopStatus::Active)
        .verified(true);
    if !filters.search.is_empty() {
        list_query = list_query.search(filters.search.as_str());
    }
    if !filters.city.is_empty() {
        list_query = list_query.city(filters.city.as_str());
    }
    if let Some(category) = filters.category {
        list_query = list_query.category(category);
    }

    let payload = load_page(repo, filters, list_query, path)?;
    Ok(ShopsPageData::new(payload))
}

/// Loads every listing, whatever its status, for the administrator screen.
pub fn load_admin_shops<R>(
    repo: &R,
    query_string: &str,
    path: &str,
) -> ServiceResult<ShopsPageData<AdminShopFilters, Shop>>
where
    R: ShopReader + ?Sized,
{
    let filters = AdminShopsQuery::parse(query_string)?.normalize();

    let mut list_query =
        ShopListQuery::new().created_between(filters.created_start, filters.created_end);
    if !filters.search.is_empty() {
        list_query = list_query.search(filters.search.as_str());
    }
    if let Some(status) = filters.status {
        list_query = list_query.status(status);
    }
    if let Some(category) = filters.category {
        list_query = list_query.category(category);
    }

    let payload = load_page(repo, filters, list_query, path)?;
    Ok(ShopsPageData::new(payload))
}

/// Runs the list query for the requested page, falling back to the last page
/// when the request points past it.
fn load_page<R, F>(
    repo: &R,
    mut filters: F,
    list_query: ShopListQuery,
    path: &str,
) -> ServiceResult<PagePayload<F, Shop>>
where
    R: ShopReader + ?Sized,
    F: FilterSet,
{
    let per_page = filters.per_page();
    let requested = filters.page();

    let (total, mut shops) = repo
        .list_shops(
            list_query
                .clone()
                .paginate(requested.as_usize(), per_page.as_usize()),
        )
        .map_err(|err| {
            log::error!("Failed to list shops: {err}");
            err
        })?;

    let last = last_page(total, per_page);
    if requested > last {
        filters.set_page(last);
        let (_, last_rows) = repo
            .list_shops(list_query.paginate(last.as_usize(), per_page.as_usize()))
            .map_err(|err| {
                log::error!("Failed to list shops: {err}");
                err
            })?;
        shops = last_rows;
    }

    let page = PaginatedResult::new(shops, total, filters.page(), per_page, |page| {
        link_to(path, &filters.with_page(page))
    })?;

    Ok(PagePayload { page, filters })
}
