use chrono::NaiveDate;
use tireshop_directory::domain::shop::{ShopCategory, ShopStatus};
use tireshop_directory::repository::{DieselRepository, ShopListQuery, ShopReader, ShopWriter};

mod common;

use common::{active_shops, at, new_shop};

#[test]
fn test_shop_repository_create_and_list() {
    let test_db = common::TestDb::new("test_shop_repository_create_and_list.db");
    let repo = DieselRepository::new(test_db.pool());

    let shops = vec![
        new_shop(
            "Tread Works",
            "Reno",
            ShopCategory::TireSales,
            ShopStatus::Active,
            true,
            at(2024, 1, 10),
        ),
        new_shop(
            "Axle Garage",
            "Boise",
            ShopCategory::Repair,
            ShopStatus::Pending,
            false,
            at(2024, 2, 10),
        ),
    ];

    assert_eq!(repo.create_shops(&shops).unwrap(), 2);
    assert_eq!(repo.create_shops(&[]).unwrap(), 0);

    let (total, items) = repo.list_shops(ShopListQuery::new()).unwrap();
    assert_eq!(total, 2);
    // Ordered by name.
    assert_eq!(items[0].name.as_str(), "Axle Garage");
    assert_eq!(items[1].name.as_str(), "Tread Works");
    assert_eq!(items[1].category, ShopCategory::TireSales);
    assert_eq!(items[1].status, ShopStatus::Active);
    assert!(items[1].verified);
    assert_eq!(items[1].created_at, at(2024, 1, 10));
}

#[test]
fn test_shop_repository_filters() {
    let test_db = common::TestDb::new("test_shop_repository_filters.db");
    let repo = DieselRepository::new(test_db.pool());

    repo.create_shops(&[
        new_shop(
            "Tread Works",
            "Reno",
            ShopCategory::TireSales,
            ShopStatus::Active,
            true,
            at(2024, 1, 10),
        ),
        new_shop(
            "Rim Depot",
            "Sparks",
            ShopCategory::Wheels,
            ShopStatus::Active,
            false,
            at(2024, 1, 20),
        ),
        new_shop(
            "Lug Garage",
            "Reno",
            ShopCategory::Repair,
            ShopStatus::Suspended,
            true,
            at(2024, 3, 1),
        ),
    ])
    .unwrap();

    let (total, items) = repo.list_shops(ShopListQuery::new().search("reno")).unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|shop| shop.city.as_str() == "Reno"));

    let (total, items) = repo.list_shops(ShopListQuery::new().search("Depot")).unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Rim Depot");

    let (total, _) = repo.list_shops(ShopListQuery::new().city("sparks")).unwrap();
    assert_eq!(total, 1);

    let (total, items) = repo
        .list_shops(ShopListQuery::new().status(ShopStatus::Active).verified(true))
        .unwrap();
    assert_eq!(total, 1);
    assert_eq!(items[0].name.as_str(), "Tread Works");

    let (total, _) = repo
        .list_shops(ShopListQuery::new().category(ShopCategory::Repair))
        .unwrap();
    assert_eq!(total, 1);

    // Both bounds are inclusive days.
    let (total, items) = repo
        .list_shops(ShopListQuery::new().created_between(
            NaiveDate::from_ymd_opt(2024, 1, 10),
            NaiveDate::from_ymd_opt(2024, 1, 20),
        ))
        .unwrap();
    assert_eq!(total, 2);
    assert!(items.iter().all(|shop| shop.status == ShopStatus::Active));

    let (total, _) = repo
        .list_shops(ShopListQuery::new().created_between(NaiveDate::from_ymd_opt(2024, 2, 1), None))
        .unwrap();
    assert_eq!(total, 1);
}

#[test]
fn test_shop_repository_pagination() {
    let test_db = common::TestDb::new("test_shop_repository_pagination.db");
    let repo = DieselRepository::new(test_db.pool());
    repo.create_shops(&active_shops(23)).unwrap();

    let (total, first) = repo.list_shops(ShopListQuery::new().paginate(1, 10)).unwrap();
    assert_eq!(total, 23);
    assert_eq!(first.len(), 10);
    assert_eq!(first[0].name.as_str(), "Shop 001");

    let (total, last) = repo.list_shops(ShopListQuery::new().paginate(3, 10)).unwrap();
    assert_eq!(total, 23);
    assert_eq!(last.len(), 3);
    assert_eq!(last[2].name.as_str(), "Shop 023");

    let (total, beyond) = repo.list_shops(ShopListQuery::new().paginate(4, 10)).unwrap();
    assert_eq!(total, 23);
    assert!(beyond.is_empty());
}
