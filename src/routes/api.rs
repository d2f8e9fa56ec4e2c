use actix_web::{HttpRequest, HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::routes::{ADMIN_SHOPS_PATH, PUBLIC_SHOPS_PATH, api_error};
use crate::services::shops as shops_service;

/// JSON twin of the public directory page; the list view fetches this.
#[get("/v1/shops")]
pub async fn api_v1_shops(req: HttpRequest, repo: web::Data<DieselRepository>) -> impl Responder {
    match shops_service::load_public_shops(repo.get_ref(), req.query_string(), PUBLIC_SHOPS_PATH) {
        Ok(data) => HttpResponse::Ok().json(data.payload),
        Err(err) => api_error(err),
    }
}

#[get("/v1/admin/shops")]
pub async fn api_v1_admin_shops(
    req: HttpRequest,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match shops_service::load_admin_shops(repo.get_ref(), req.query_string(), ADMIN_SHOPS_PATH) {
        Ok(data) => HttpResponse::Ok().json(data.payload),
        Err(err) => api_error(err),
    }
}
