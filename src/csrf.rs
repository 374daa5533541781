//! Double-submit anti-forgery tokens.
//!
//! Rendering a form hands out a random token both as a cookie and as a hidden
//! field. A post is accepted only when the field echoes the cookie.

use std::future::{ready, Ready};

use actix_web::cookie::{Cookie, SameSite};
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use rand::Rng;

use crate::error::AppError;

pub const COOKIE_NAME: &str = "asyncinn_csrf";
pub const FIELD_NAME: &str = "csrf_token";

const TOKEN_BYTES: usize = 32;

/// Token to embed in the form being rendered.
#[derive(Debug, Clone)]
pub struct CsrfToken {
    value: String,
    fresh: bool,
}

impl CsrfToken {
    /// Reuses the browser's token when it has one.
    pub fn for_request(req: &HttpRequest) -> Self {
        match req.cookie(COOKIE_NAME) {
            Some(cookie) if is_well_formed(cookie.value()) => Self {
                value: cookie.value().to_owned(),
                fresh: false,
            },
            _ => Self::generate(),
        }
    }

    pub fn generate() -> Self {
        let bytes: [u8; TOKEN_BYTES] = rand::thread_rng().gen();
        Self {
            value: hex::encode(bytes),
            fresh: true,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Cookie to attach to the response, if the browser does not hold it yet.
    pub fn cookie(&self) -> Option<Cookie<'static>> {
        self.fresh.then(|| {
            Cookie::build(COOKIE_NAME, self.value.clone())
                .path("/")
                .http_only(true)
                .same_site(SameSite::Strict)
                .finish()
        })
    }
}

impl FromRequest for CsrfToken {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Ok(Self::for_request(req)))
    }
}

/// Rejects a post whose submitted token does not match the cookie.
pub fn verify(req: &HttpRequest, submitted: &str) -> Result<(), AppError> {
    let cookie = req.cookie(COOKIE_NAME).ok_or(AppError::Forgery)?;
    if !submitted.is_empty() && constant_time_eq(cookie.value(), submitted) {
        Ok(())
    } else {
        Err(AppError::Forgery)
    }
}

fn is_well_formed(value: &str) -> bool {
    value.len() == TOKEN_BYTES * 2 && value.bytes().all(|b| b.is_ascii_hexdigit())
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a.bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

#[cfg(test)]
mod tests {
    use actix_web::test::TestRequest;

    use super::*;

    #[test]
    fn generated_tokens_are_hex_and_distinct() {
        let a = CsrfToken::generate();
        let b = CsrfToken::generate();

        assert!(is_well_formed(a.value()));
        assert_ne!(a.value(), b.value());
        assert!(a.cookie().is_some());
    }

    #[test]
    fn existing_cookie_is_reused() {
        let token = "ab".repeat(TOKEN_BYTES);
        let req = TestRequest::default()
            .cookie(Cookie::new(COOKIE_NAME, token.clone()))
            .to_http_request();

        let csrf = CsrfToken::for_request(&req);
        assert_eq!(csrf.value(), token);
        assert!(csrf.cookie().is_none());
    }

    #[test]
    fn verify_requires_matching_cookie() {
        let req = TestRequest::default()
            .cookie(Cookie::new(COOKIE_NAME, "secret"))
            .to_http_request();

        assert!(verify(&req, "secret").is_ok());
        assert!(matches!(verify(&req, "other"), Err(AppError::Forgery)));
        assert!(matches!(verify(&req, ""), Err(AppError::Forgery)));

        let bare = TestRequest::default().to_http_request();
        assert!(matches!(verify(&bare, "secret"), Err(AppError::Forgery)));
    }
}
