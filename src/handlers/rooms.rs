use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::{bind, conflict_errors, page, redirect, Bound, DeleteForm};
use crate::csrf::{self, CsrfToken};
use crate::db::{ListFilter, RepoError, Repository, Store};
use crate::error::AppError;
use crate::models::{Entity, Room, RoomForm, Submission};
use crate::views::{self, FormErrors};

const INDEX: &str = "/Rooms";

pub fn scope<S: Store>() -> actix_web::Scope {
    web::scope(INDEX)
        .route("", web::get().to(index::<S>))
        .route("/", web::get().to(index::<S>))
        .service(
            web::resource("/Create")
                .route(web::get().to(create_form))
                .route(web::post().to(create::<S>)),
        )
        .route("/Details/{id}", web::get().to(details::<S>))
        .service(
            web::resource("/Edit/{id}")
                .route(web::get().to(edit_form::<S>))
                .route(web::post().to(edit::<S>)),
        )
        .service(
            web::resource("/Delete/{id}")
                .route(web::get().to(delete_form::<S>))
                .route(web::post().to(delete::<S>)),
        )
}

#[derive(Debug, Deserialize)]
pub struct RoomSearch {
    #[serde(rename = "searchString")]
    pub search_string: Option<String>,
}

async fn find<S: Store>(store: &S, id: i64) -> Result<Room, AppError> {
    store
        .rooms()
        .find(id)
        .await?
        .ok_or_else(|| AppError::not_found("Room", id))
}

pub async fn index<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomSearch>,
) -> Result<HttpResponse, AppError> {
    let search = params.search_string.as_deref();
    let rooms = store.rooms().list(&ListFilter::search(search)).await?;
    Ok(page(StatusCode::OK, views::rooms::index(&rooms, search), None))
}

/// Shows the room together with its amenities.
pub async fn details<S: Store>(
    store: web::Data<S>,
    path: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let room = find(store.get_ref(), path.into_inner()).await?;
    let amenities = store
        .room_amenities()
        .list(&ListFilter::owned_by(room.id))
        .await?;
    Ok(page(StatusCode::OK, views::rooms::details(&room, &amenities), None))
}

pub async fn create_form(csrf: CsrfToken) -> HttpResponse {
    let html = views::rooms::create(&RoomForm::default(), &FormErrors::new(), csrf.value());
    page(StatusCode::OK, html, Some(&csrf))
}

pub async fn create<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    csrf: CsrfToken,
    form: web::Form<RoomForm>,
) -> Result<HttpResponse, AppError> {
    match bind(&req, form)? {
        Bound::Valid(form) => {
            let room = store.rooms().create(&form).await?;
            log::info!("Created room {} ({})", room.id, room.name);
            Ok(redirect(INDEX))
        }
        Bound::Invalid(form, errors) => {
            let html = views::rooms::create(&form, &errors, csrf.value());
            Ok(page(StatusCode::OK, html, Some(&csrf)))
        }
    }
}

pub async fn edit_form<S: Store>(
    store: web::Data<S>,
    path: web::Path<i64>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let room = find(store.get_ref(), path.into_inner()).await?;
    let html = views::rooms::edit(room.id, &RoomForm::from(&room), &FormErrors::new(), csrf.value());
    Ok(page(StatusCode::OK, html, Some(&csrf)))
}

pub async fn edit<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    path: web::Path<i64>,
    csrf: CsrfToken,
    form: web::Form<RoomForm>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let bound = bind(&req, form)?;
    if bound.form().id != Some(id) {
        return Err(AppError::not_found("Room", id));
    }

    let form = match bound {
        Bound::Valid(form) => form,
        Bound::Invalid(form, errors) => {
            let html = views::rooms::edit(id, &form, &errors, csrf.value());
            return Ok(page(StatusCode::OK, html, Some(&csrf)));
        }
    };

    match store.rooms().update(id, &form, form.version()).await {
        Ok(room) => {
            log::info!("Updated room {} to version {}", room.id, room.version());
            Ok(redirect(INDEX))
        }
        Err(RepoError::Conflict(detail)) => {
            log::warn!("Edit conflict: {detail}");
            let current = find(store.get_ref(), id).await?;
            let html = views::rooms::edit(id, &RoomForm::from(&current), &conflict_errors(), csrf.value());
            Ok(page(StatusCode::CONFLICT, html, Some(&csrf)))
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_form<S: Store>(
    store: web::Data<S>,
    path: web::Path<i64>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let room = find(store.get_ref(), path.into_inner()).await?;
    Ok(page(StatusCode::OK, views::rooms::delete(&room, csrf.value()), Some(&csrf)))
}

/// Removing a room also drops its amenity links and hotel placements.
pub async fn delete<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    path: web::Path<i64>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&req, &form.csrf_token)?;
    let id = path.into_inner();
    store.rooms().delete(id).await?;
    log::info!("Deleted room {id}");
    Ok(redirect(INDEX))
}
