use chrono::NaiveTime;
use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::domain::shop::{NewShop, Shop};
use crate::models::shop::{NewShop as DbNewShop, Shop as DbShop};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ShopListQuery, ShopReader, ShopWriter};
use crate::schema::shops;

/// Applies every filter of `query` except pagination.
fn filtered(query: &ShopListQuery) -> shops::BoxedQuery<'static, Sqlite> {
    let mut items = shops::table.into_boxed();

    if let Some(term) = &query.search {
        let pattern = format!("%{term}%");
        items = items.filter(shops::name.like(pattern.clone()).or(shops::city.like(pattern)));
    }
    if let Some(city) = &query.city {
        // LIKE without wildcards: case-insensitive equality on SQLite.
        items = items.filter(shops::city.like(city.clone()));
    }
    if let Some(category) = query.category {
        items = items.filter(shops::category.eq(category.as_str()));
    }
    if let Some(status) = query.status {
        items = items.filter(shops::status.eq(status.as_str()));
    }
    if let Some(verified) = query.verified {
        items = items.filter(shops::verified.eq(verified));
    }
    if let Some(start) = query.created_start {
        items = items.filter(shops::created_at.ge(start.and_time(NaiveTime::MIN)));
    }
    if let Some(next_day) = query.created_end.and_then(|end| end.succ_opt()) {
        items = items.filter(shops::created_at.lt(next_day.and_time(NaiveTime::MIN)));
    }

    items
}

impl ShopReader for DieselRepository {
    fn list_shops(&self, query: ShopListQuery) -> RepositoryResult<(usize, Vec<Shop>)> {
        let mut conn = self.pool().get()?;

        let total: i64 = filtered(&query).count().get_result(&mut conn)?;

        let mut items = filtered(&query)
            .order((shops::name.asc(), shops::id.asc()))
            .select(DbShop::as_select());

        if let Some(pagination) = &query.pagination {
            let limit = i64::try_from(pagination.per_page).unwrap_or(i64::MAX);
            let offset = i64::try_from(pagination.offset()).unwrap_or(i64::MAX);
            items = items.limit(limit).offset(offset);
        }

        let shops = items
            .load::<DbShop>(&mut conn)?
            .into_iter()
            .map(Shop::try_from)
            .collect::<Result<Vec<Shop>, _>>()?;

        Ok((usize::try_from(total).unwrap_or_default(), shops))
    }
}

impl ShopWriter for DieselRepository {
    fn create_shops(&self, new_shops: &[NewShop]) -> RepositoryResult<usize> {
        if new_shops.is_empty() {
            return Ok(0);
        }

        let mut conn = self.pool().get()?;
        let insertables: Vec<DbNewShop> = new_shops.iter().map(Into::into).collect();

        let affected = diesel::insert_into(shops::table)
            .values(&insertables)
            .execute(&mut conn)?;

        Ok(affected)
    }
}
