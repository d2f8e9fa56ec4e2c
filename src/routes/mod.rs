//! HTTP handlers of the directory.

use actix_web::HttpResponse;
use serde_json::json;
use tera::{Context, Tera};

use crate::services::ServiceError;

pub mod api;
pub mod shops;

/// Path of the public directory page.
pub const PUBLIC_SHOPS_PATH: &str = "/shops";
/// Path of the administrator listing page.
pub const ADMIN_SHOPS_PATH: &str = "/admin/shops";

/// Renders `template` or answers 500 when rendering fails.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure on an HTML page.
pub fn page_error(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest()
            .content_type("text/plain; charset=utf-8")
            .body(message),
        err => {
            log::error!("Failed to load shops: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Maps a service failure on a JSON endpoint.
pub fn api_error(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::Form(message) => HttpResponse::BadRequest().json(json!({ "error": message })),
        err => {
            log::error!("Failed to load shops: {err}");
            HttpResponse::InternalServerError().json(json!({ "error": "internal server error" }))
        }
    }
}
