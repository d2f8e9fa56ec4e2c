use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::Value;
use tera::Tera;

use tireshop_directory::configure;
use tireshop_directory::domain::shop::{ShopCategory, ShopStatus};
use tireshop_directory::repository::{DieselRepository, ShopWriter};

mod common;

use common::{active_shops, at, new_shop};

fn seeded(name: &str) -> (common::TestDb, DieselRepository) {
    let test_db = common::TestDb::new(name);
    let repo = DieselRepository::new(test_db.pool());
    let mut shops = active_shops(23);
    shops.push(new_shop(
        "Hidden Tires",
        "Reno",
        ShopCategory::TireSales,
        ShopStatus::Pending,
        false,
        at(2024, 6, 1),
    ));
    repo.create_shops(&shops).unwrap();
    (test_db, repo)
}

fn tera() -> Tera {
    Tera::new("templates/**/*").unwrap()
}

#[actix_web::test]
async fn api_returns_paginated_payload_with_filter_echo() {
    let (_db, repo) = seeded("api_returns_paginated_payload_with_filter_echo.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/shops?search=shop&page=2")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 23);
    assert_eq!(body["current_page"], 2);
    assert_eq!(body["last_page"], 3);
    assert_eq!(body["from"], 11);
    assert_eq!(body["to"], 20);
    assert_eq!(body["data"].as_array().unwrap().len(), 10);
    assert_eq!(body["filters"]["search"], "shop");
    assert_eq!(body["filters"]["per_page"], 10);
    assert_eq!(body["filters"]["page"], 2);
    assert_eq!(
        body["next_page_url"],
        "/shops?search=shop&per_page=10&page=3"
    );
}

#[actix_web::test]
async fn api_normalizes_loose_query_input() {
    let (_db, repo) = seeded("api_normalizes_loose_query_input.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/shops?per_page=7&page=40&category=spaceships")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["filters"]["per_page"], 10);
    assert_eq!(body["filters"]["page"], 3);
    assert!(body["filters"].get("category").is_none());
    assert_eq!(body["current_page"], 3);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[actix_web::test]
async fn api_with_no_matches_has_empty_bounds() {
    let (_db, repo) = seeded("api_with_no_matches_has_empty_bounds.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/shops?search=nothing-like-this")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 0);
    assert_eq!(body["from"], 0);
    assert_eq!(body["to"], 0);
    assert_eq!(body["last_page"], 1);
    assert!(body["prev_page_url"].is_null());
    assert!(body["next_page_url"].is_null());
}

#[actix_web::test]
async fn admin_api_lists_every_status() {
    let (_db, repo) = seeded("admin_api_lists_every_status.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/api/v1/admin/shops?status=pending&created_start=2024-06-30&created_end=2024-05-01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 1);
    assert_eq!(body["data"][0]["name"], "Hidden Tires");
    assert_eq!(body["filters"]["created_start"], "2024-05-01");
    assert_eq!(body["filters"]["created_end"], "2024-06-30");
}

#[actix_web::test]
async fn api_rejects_overlong_search() {
    let (_db, repo) = seeded("api_rejects_overlong_search.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .configure(configure),
    )
    .await;

    let uri = format!("/api/v1/shops?search={}", "x".repeat(120));
    let req = test::TestRequest::get().uri(&uri).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn shops_page_renders_rows_controls_and_initial_payload() {
    let (_db, repo) = seeded("shops_page_renders_rows_controls_and_initial_payload.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(tera()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get().uri("/shops?page=2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(
        resp.headers()
            .get(header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("text/html")
    );

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Shop 011"));
    assert!(!body.contains("Hidden Tires"));
    assert!(body.contains("Showing 11 to 20 of 23"));
    assert!(body.contains("per_page=10&amp;page=3"));
    assert!(body.contains("id=\"initial-data\""));
    assert!(body.contains("\"current_page\":2"));
}

#[actix_web::test]
async fn shops_page_without_overflow_has_no_pagination() {
    let (_db, repo) = seeded("shops_page_without_overflow_has_no_pagination.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(tera()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/shops?per_page=25")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Shop 023"));
    assert!(!body.contains("aria-label=\"Pagination\""));
}

#[actix_web::test]
async fn admin_page_renders_selected_filters() {
    let (_db, repo) = seeded("admin_page_renders_selected_filters.db");
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(repo))
            .app_data(web::Data::new(tera()))
            .configure(configure),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/admin/shops?status=pending")
        .to_request();
    let body = test::call_and_read_body(&app, req).await;
    let body = String::from_utf8(body.to_vec()).unwrap();

    assert!(body.contains("Hidden Tires"));
    assert!(body.contains("<option value=\"pending\" selected>"));
    assert!(!body.contains("Shop 001"));
}
