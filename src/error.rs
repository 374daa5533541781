use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::db::RepoError;
use crate::views;

/// Failures that end a request with an error page.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("The form has expired or was not issued by this site")]
    Forgery,

    #[error("Internal server error")]
    Internal(String),
}

impl AppError {
    pub fn not_found(what: &str, key: impl std::fmt::Display) -> Self {
        AppError::NotFound(format!("{what} {key}"))
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(what) => AppError::NotFound(what),
            RepoError::Conflict(what) => AppError::BadRequest(what),
            RepoError::Constraint(kind) => AppError::BadRequest(format!("{kind:?}")),
            RepoError::Database(e) => AppError::Internal(e.to_string()),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) | AppError::Forgery => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::Internal(detail) => log::error!("Request failed: {detail}"),
            AppError::Forgery => log::warn!("Rejected form post with a missing or stale anti-forgery token"),
            _ => log::debug!("{self}"),
        }

        let status = self.status_code();
        HttpResponse::build(status)
            .content_type(ContentType::html())
            .body(views::error_page(status, &self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repository_errors_map_to_statuses() {
        let not_found: AppError = RepoError::NotFound("amenity 3".into()).into();
        assert_eq!(not_found.status_code(), StatusCode::NOT_FOUND);

        let stale: AppError = RepoError::Conflict("amenity 3".into()).into();
        assert_eq!(stale.status_code(), StatusCode::BAD_REQUEST);

        let db: AppError = RepoError::Database(sqlx::Error::RowNotFound).into();
        assert_eq!(db.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(db.to_string(), "Internal server error");
    }
}
