#![allow(dead_code)]

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test::{self, TestRequest};

use async_inn::csrf::{COOKIE_NAME, FIELD_NAME};
use async_inn::db::{self, SqliteStore};

pub const TOKEN: &str = "integration-test-token";

pub async fn store() -> SqliteStore {
    SqliteStore::new(db::memory_pool().await.expect("in-memory database"))
}

/// Builds the full back office over `$store`.
#[macro_export]
macro_rules! app {
    ($store:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new($store.clone()))
                .configure(async_inn::configure::<async_inn::db::SqliteStore>),
        )
        .await
    };
}

/// Form post carrying a matching anti-forgery cookie and field.
pub fn post_form(uri: &str, fields: &[(&str, &str)]) -> TestRequest {
    let mut body: Vec<(String, String)> = fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    body.push((FIELD_NAME.to_string(), TOKEN.to_string()));

    TestRequest::post()
        .uri(uri)
        .cookie(Cookie::new(COOKIE_NAME, TOKEN))
        .set_form(body)
}

pub async fn body_text(resp: ServiceResponse) -> String {
    let bytes = test::read_body(resp).await;
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub fn location(resp: &ServiceResponse) -> &str {
    resp.headers()
        .get(actix_web::http::header::LOCATION)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
}
