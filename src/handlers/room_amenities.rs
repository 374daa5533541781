use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::{bind, conflict_errors, constraint_errors, page, redirect, Bound, DeleteForm};
use crate::csrf::{self, CsrfToken};
use crate::db::{ListFilter, RepoError, Repository, Store};
use crate::error::AppError;
use crate::models::{Entity, RoomAmenity, RoomAmenityForm, RoomAmenityKey, Submission};
use crate::views::{self, FormErrors};

const INDEX: &str = "/RoomAmenities";
const REFERENCES: &str = "room or amenity";

pub fn scope<S: Store>() -> actix_web::Scope {
    web::scope(INDEX)
        .route("", web::get().to(index::<S>))
        .route("/", web::get().to(index::<S>))
        .service(
            web::resource("/Create")
                .route(web::get().to(create_form::<S>))
                .route(web::post().to(create::<S>)),
        )
        .route("/Details", web::get().to(details::<S>))
        .service(
            web::resource("/Edit")
                .route(web::get().to(edit_form::<S>))
                .route(web::post().to(edit::<S>)),
        )
        .service(
            web::resource("/Delete")
                .route(web::get().to(delete_form::<S>))
                .route(web::post().to(delete::<S>)),
        )
}

/// `?roomid=&amenityid=` as sent by the list links.
#[derive(Debug, Default, Deserialize)]
pub struct RoomAmenityQuery {
    pub roomid: Option<i64>,
    pub amenityid: Option<i64>,
}

impl RoomAmenityQuery {
    /// Both halves are required to address a row.
    fn key(&self) -> Result<RoomAmenityKey, AppError> {
        match (self.roomid, self.amenityid) {
            (Some(room_id), Some(amenity_id)) => Ok(RoomAmenityKey {
                room_id,
                amenity_id,
            }),
            _ => Err(AppError::NotFound("Room amenity".into())),
        }
    }
}

async fn find<S: Store>(store: &S, key: RoomAmenityKey) -> Result<RoomAmenity, AppError> {
    store
        .room_amenities()
        .find(key)
        .await?
        .ok_or_else(|| AppError::not_found("Room amenity", key))
}

/// Renders the create form. Loads the full room and amenity tables for the drop-downs.
async fn render_create<S: Store>(
    store: &S,
    form: &RoomAmenityForm,
    errors: &FormErrors,
    csrf: &CsrfToken,
) -> Result<HttpResponse, AppError> {
    let rooms = store.rooms().list(&ListFilter::all()).await?;
    let amenities = store.amenities().list(&ListFilter::all()).await?;
    let html = views::room_amenities::create(form, &rooms, &amenities, errors, csrf.value());
    Ok(page(StatusCode::OK, html, Some(csrf)))
}

async fn render_edit<S: Store>(
    store: &S,
    key: RoomAmenityKey,
    form: &RoomAmenityForm,
    errors: &FormErrors,
    csrf: &CsrfToken,
    status: StatusCode,
) -> Result<HttpResponse, AppError> {
    let rooms = store.rooms().list(&ListFilter::all()).await?;
    let amenities = store.amenities().list(&ListFilter::all()).await?;
    let html = views::room_amenities::edit(key, form, &rooms, &amenities, errors, csrf.value());
    Ok(page(status, html, Some(csrf)))
}

/// Every association with room and amenity names, optionally for one room.
pub async fn index<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = params.roomid.map(ListFilter::owned_by).unwrap_or_default();
    let rows = store.room_amenities().list(&filter).await?;
    Ok(page(StatusCode::OK, views::room_amenities::index(&rows), None))
}

pub async fn details<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    Ok(page(StatusCode::OK, views::room_amenities::details(&row), None))
}

/// Drop-downs start on the room/amenity named in the query, if any.
pub async fn create_form<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let form = RoomAmenityForm {
        room_id: params.roomid.unwrap_or_default(),
        amenity_id: params.amenityid.unwrap_or_default(),
        ..Default::default()
    };
    render_create(store.get_ref(), &form, &FormErrors::new(), &csrf).await
}

pub async fn create<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    csrf: CsrfToken,
    form: web::Form<RoomAmenityForm>,
) -> Result<HttpResponse, AppError> {
    let form = match bind(&req, form)? {
        Bound::Valid(form) => form,
        Bound::Invalid(form, errors) => {
            return render_create(store.get_ref(), &form, &errors, &csrf).await;
        }
    };

    match store.room_amenities().create(&form).await {
        Ok(row) => {
            log::info!("Linked {} to {}", row.amenity_name, row.room_name);
            Ok(redirect(INDEX))
        }
        Err(RepoError::Constraint(kind)) => {
            let errors = constraint_errors::<RoomAmenity>(kind, REFERENCES);
            render_create(store.get_ref(), &form, &errors, &csrf).await
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    render_edit(
        store.get_ref(),
        row.key(),
        &RoomAmenityForm::from(&row),
        &FormErrors::new(),
        &csrf,
        StatusCode::OK,
    )
    .await
}

/// Re-points the association at the room and amenity chosen in the form.
pub async fn edit<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
    csrf: CsrfToken,
    form: web::Form<RoomAmenityForm>,
) -> Result<HttpResponse, AppError> {
    let bound = bind(&req, form)?;
    let key = params.key()?;

    let form = match bound {
        Bound::Valid(form) => form,
        Bound::Invalid(form, errors) => {
            return render_edit(store.get_ref(), key, &form, &errors, &csrf, StatusCode::OK).await;
        }
    };

    match store.room_amenities().update(key, &form, form.version()).await {
        Ok(row) => {
            log::info!("Updated room amenity {} (version {})", row.key(), row.version());
            Ok(redirect(INDEX))
        }
        Err(RepoError::Constraint(kind)) => {
            let errors = constraint_errors::<RoomAmenity>(kind, REFERENCES);
            render_edit(store.get_ref(), key, &form, &errors, &csrf, StatusCode::OK).await
        }
        Err(RepoError::Conflict(detail)) => {
            log::warn!("Edit conflict: {detail}");
            let current = find(store.get_ref(), key).await?;
            render_edit(
                store.get_ref(),
                key,
                &RoomAmenityForm::from(&current),
                &conflict_errors(),
                &csrf,
                StatusCode::CONFLICT,
            )
            .await
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn delete_form<S: Store>(
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    Ok(page(
        StatusCode::OK,
        views::room_amenities::delete(&row, csrf.value()),
        Some(&csrf),
    ))
}

/// Fails with 404 instead of deleting when the pair does not exist.
pub async fn delete<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    params: web::Query<RoomAmenityQuery>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&req, &form.csrf_token)?;
    let key = params.key()?;
    store.room_amenities().delete(key).await?;
    log::info!("Deleted room amenity {key}");
    Ok(redirect(INDEX))
}
