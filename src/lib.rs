pub mod config;
pub mod csrf;
pub mod db;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::{HttpResponse, cookie::Key, web};

use errors::AppError;

/// Cookie session used to carry the CSRF token between the page and its posts.
pub fn session_middleware(key: Key) -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), key)
        .cookie_secure(false)
        .cookie_http_only(true)
        .build()
}

/// Application routes. Expects `PgPool`, `ListingCache` and `SiteInfo` as app data.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::opinion_handlers::page))
        .route("/opinions/validate", web::post().to(handlers::opinion_handlers::validate_fields))
        .route("/opinions", web::post().to(handlers::opinion_handlers::submit))
        .default_service(web::to(not_found));
}

async fn not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound)
}
