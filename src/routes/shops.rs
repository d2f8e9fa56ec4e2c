use actix_web::{HttpRequest, Responder, get, web};
use serde::Serialize;
use tera::{Context, Tera};

use crate::dto::shops::{FilterChoices, ShopsPageData};
use crate::repository::DieselRepository;
use crate::routes::{ADMIN_SHOPS_PATH, PUBLIC_SHOPS_PATH, page_error, render_template};
use crate::services::shops as shops_service;

/// Context shared by both list pages. `initial_json` seeds the list view so
/// the first paint does not need a round trip.
fn list_context<F, T>(data: &ShopsPageData<F, T>, api_path: &str) -> Result<Context, serde_json::Error>
where
    F: Serialize,
    T: Serialize,
{
    let mut context = Context::new();
    context.insert("payload", &data.payload);
    context.insert("filters", &data.payload.filters);
    context.insert("controls", &data.controls);
    context.insert("choices", &FilterChoices::default());
    context.insert("api_path", api_path);
    // Embedded in a <script> element.
    let initial_json = serde_json::to_string(&data.payload)?.replace("</", "<\\/");
    context.insert("initial_json", &initial_json);
    Ok(context)
}

#[get("/shops")]
pub async fn show_shops(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match shops_service::load_public_shops(
        repo.get_ref(),
        req.query_string(),
        PUBLIC_SHOPS_PATH,
    ) {
        Ok(data) => data,
        Err(err) => return page_error(err),
    };

    match list_context(&data, "/api/v1/shops") {
        Ok(context) => render_template(&tera, "shops/index.html", &context),
        Err(err) => page_error(err.into()),
    }
}

/// Administrator listing. No access control is applied here; deployments put
/// it behind their own gateway.
#[get("/admin/shops")]
pub async fn show_admin_shops(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let data = match shops_service::load_admin_shops(
        repo.get_ref(),
        req.query_string(),
        ADMIN_SHOPS_PATH,
    ) {
        Ok(data) => data,
        Err(err) => return page_error(err),
    };

    match list_context(&data, "/api/v1/admin/shops") {
        Ok(context) => render_template(&tera, "admin/shops.html", &context),
        Err(err) => page_error(err.into()),
    }
}
