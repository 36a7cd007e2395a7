//! Shared test infrastructure.
//!
//! Database tests use `#[sqlx::test]`, which hands each test a fresh database
//! with `migrations/` applied (needs `DATABASE_URL` pointing at a Postgres
//! server). HTTP tests build the app with `test_app!` and drive it through
//! `actix_web::test`.

#![allow(dead_code, unused_imports, unused_macros)]

use actix_web::body::MessageBody;
use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use regex::Regex;

use syndic_survey::models::opinion::{NewOpinion, OpinionForm};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const TEST_NAME: &str = "Alice";
pub const TEST_EMAIL: &str = "a@example.com";

// ============================================================================
// PAYLOADS
// ============================================================================

/// The reference valid submission, without CSRF token.
pub fn valid_form() -> OpinionForm {
    OpinionForm {
        name: TEST_NAME.to_string(),
        email: TEST_EMAIL.to_string(),
        is_anonymous: Some("false".to_string()),
        building: "entry-a".to_string(),
        status: "owner".to_string(),
        willing_to_change: "yes".to_string(),
        message: String::new(),
        csrf_token: String::new(),
    }
}

pub fn valid_new_opinion() -> NewOpinion {
    NewOpinion {
        name: TEST_NAME.to_string(),
        email: TEST_EMAIL.to_string(),
        is_anonymous: false,
        building: "entry-a".to_string(),
        status: "owner".to_string(),
        willing_to_change: "yes".to_string(),
        message: Some(String::new()),
    }
}

/// Urlencode a form the way a browser would post it.
pub fn encode_form(form: &OpinionForm, csrf_token: &str) -> String {
    let mut form = form.clone();
    form.csrf_token = csrf_token.to_string();
    serde_urlencoded::to_string(&form).expect("form should encode")
}

// ============================================================================
// HTTP HELPERS
// ============================================================================

/// Build the app service around a pool and a listing cache.
macro_rules! test_app {
    ($pool:expr, $cache:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(syndic_survey::session_middleware(actix_web::cookie::Key::generate()))
                .app_data(actix_web::web::Data::new($pool.clone()))
                .app_data($cache.clone())
                .app_data(actix_web::web::Data::new(syndic_survey::config::SiteInfo {
                    app_name: "Test".to_string(),
                }))
                .configure(syndic_survey::routes),
        )
        .await
    };
}
pub(crate) use test_app;

pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .expect("response should set the session cookie")
        .into_owned()
}

pub async fn body_string<B: MessageBody>(resp: ServiceResponse<B>) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("body should be UTF-8")
}

pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]{64})""#).unwrap();
    re.captures(html)
        .expect("page should embed a CSRF token")[1]
        .to_string()
}

pub async fn count_rows(pool: &sqlx::PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM opinions")
        .fetch_one(pool)
        .await
        .unwrap()
}
