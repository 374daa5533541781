//! Request handlers, one module per section of the back office.
//!
//! Every section follows the same shape: Index, Details, Create, Edit and
//! Delete, where Create/Edit/Delete are a GET rendering a form and a POST
//! that verifies the anti-forgery token, binds and validates the form,
//! writes through the [`Store`] and redirects back to the Index.

pub mod amenities;
pub mod hotel_rooms;
pub mod hotels;
pub mod room_amenities;
pub mod rooms;

use actix_web::http::header::{self, ContentType};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use crate::csrf::{self, CsrfToken};
use crate::db::{ConstraintKind, Store};
use crate::error::AppError;
use crate::models::{Entity, Submission};
use crate::views::{self, FormErrors};

pub const CONFLICT_MESSAGE: &str = "This record was changed by someone else after you opened it. \
     The form now shows the current values; review them and save again.";

/// Registers every route of the back office.
pub fn configure<S: Store>(cfg: &mut web::ServiceConfig) {
    cfg.app_data(form_config())
        .app_data(query_config())
        .route("/", web::get().to(home))
        .service(amenities::scope::<S>())
        .service(rooms::scope::<S>())
        .service(room_amenities::scope::<S>())
        .service(hotels::scope::<S>())
        .service(hotel_rooms::scope::<S>());
}

async fn home() -> HttpResponse {
    page(StatusCode::OK, views::home::index(), None)
}

/// Malformed bodies never reach a handler.
fn form_config() -> web::FormConfig {
    web::FormConfig::default()
        .error_handler(|err, _req| AppError::BadRequest(err.to_string()).into())
}

/// A key that does not parse cannot name an existing record.
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        AppError::NotFound(format!("Record matching query ({err})")).into()
    })
}

/// HTML response, attaching the anti-forgery cookie when one was just issued.
pub(crate) fn page(status: StatusCode, html: String, csrf: Option<&CsrfToken>) -> HttpResponse {
    let mut builder = HttpResponse::build(status);
    builder.content_type(ContentType::html());
    if let Some(cookie) = csrf.and_then(|token| token.cookie()) {
        builder.cookie(cookie);
    }
    builder.body(html)
}

/// Post/redirect/get back to a listing.
pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Outcome of binding a posted form.
pub(crate) enum Bound<F> {
    Valid(F),
    Invalid(F, FormErrors),
}

impl<F> Bound<F> {
    pub(crate) fn form(&self) -> &F {
        match self {
            Bound::Valid(form) | Bound::Invalid(form, _) => form,
        }
    }
}

/// Checks the anti-forgery token, then normalizes and validates the form.
pub(crate) fn bind<F: Submission>(req: &HttpRequest, form: web::Form<F>) -> Result<Bound<F>, AppError> {
    let form = form.into_inner();
    csrf::verify(req, form.csrf_token())?;

    let form = form.normalized();
    Ok(match form.validate() {
        Ok(()) => Bound::Valid(form),
        Err(e) => {
            let errors = FormErrors::from_validation(&e);
            Bound::Invalid(form, errors)
        }
    })
}

/// Body of a delete confirmation post.
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    #[serde(default)]
    pub csrf_token: String,
}

/// Form-level message for a write the store refused.
pub(crate) fn constraint_errors<E: Entity>(kind: ConstraintKind, references: &str) -> FormErrors {
    let message = match kind {
        ConstraintKind::Duplicate => format!("This {} already exists.", E::NAME),
        ConstraintKind::MissingReference => format!("The selected {references} no longer exists."),
    };
    FormErrors::new().with_summary(message)
}

pub(crate) fn conflict_errors() -> FormErrors {
    FormErrors::new().with_summary(CONFLICT_MESSAGE)
}
