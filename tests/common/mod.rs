#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::TempDir;

use tireshop_directory::db::{DbPool, establish_connection_pool, run_migrations};
use tireshop_directory::domain::shop::{NewShop, ShopCategory, ShopStatus};
use tireshop_directory::domain::types::{CityName, ShopName};

/// A migrated SQLite database in a temporary directory, removed on drop.
pub struct TestDb {
    pool: DbPool,
    _dir: TempDir,
}

impl TestDb {
    pub fn new(name: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        let pool = establish_connection_pool(path.to_str().expect("utf-8 path"))
            .expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Self { pool, _dir: dir }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }
}

pub fn at(year: i32, month: u32, day: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(12, 0, 0))
        .expect("valid date")
}

pub fn new_shop(
    name: &str,
    city: &str,
    category: ShopCategory,
    status: ShopStatus,
    verified: bool,
    created_at: NaiveDateTime,
) -> NewShop {
    NewShop::new(
        ShopName::new(name).expect("name"),
        CityName::new(city).expect("city"),
        category,
        status,
        verified,
        created_at,
    )
}

/// `count` verified, active tire dealers in Reno named `Shop 001`, `Shop 002`, ...
pub fn active_shops(count: usize) -> Vec<NewShop> {
    (1..=count)
        .map(|n| {
            new_shop(
                &format!("Shop {n:03}"),
                "Reno",
                ShopCategory::TireSales,
                ShopStatus::Active,
                true,
                at(2024, 1, 1),
            )
        })
        .collect()
}
