use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::Deserialize;

use super::{bind, conflict_errors, constraint_errors, page, redirect, Bound, DeleteForm};
use crate::csrf::{self, CsrfToken};
use crate::db::{ListFilter, RepoError, Repository, Store};
use crate::error::AppError;
use crate::models::{Entity, HotelRoom, HotelRoomForm, HotelRoomKey, Submission};
use crate::views::{self, FormErrors};

const INDEX: &str = "/HotelRooms";
const REFERENCES: &str = "hotel or room";

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

/// `?hotelid=&roomnumber=` as sent by the list links.
#[derive(Debug, Default, Deserialize)]
pub struct HotelRoomQuery {
    pub hotelid: Option<i64>,
    pub roomnumber: Option<i64>,
}

impl HotelRoomQuery {
    /// Both halves are required to address a row.
    fn key(&self) -> Result<HotelRoomKey, AppError> {
        match (self.hotelid, self.roomnumber) {
            (Some(hotel_id), Some(room_number)) => Ok(HotelRoomKey {
                hotel_id,
                room_number,
            }),
            _ => Err(AppError::NotFound("Hotel room".into())),
        }
    }
}

async fn find<S: Store>(store: &S, key: HotelRoomKey) -> Result<HotelRoom, AppError> {
    store
        .hotel_rooms()
        .find(key)
        .await?
        .ok_or_else(|| AppError::not_found("Hotel room", key))
}

/// Renders the create form. Loads the full hotel and room tables for the drop-downs.
async fn render_create<S: Store>(
    store: &S,
    form: &HotelRoomForm,
    errors: &FormErrors,
    csrf: &CsrfToken,
) -> Result<HttpResponse, AppError> {
    let hotels = store.hotels().list(&ListFilter::all()).await?;
    let rooms = store.rooms().list(&ListFilter::all()).await?;
    let html = views::hotel_rooms::create(form, &hotels, &rooms, errors, csrf.value());
    Ok(page(StatusCode::OK, html, Some(csrf)))
}

async fn render_edit<S: Store>(
    store: &S,
    key: HotelRoomKey,
    form: &HotelRoomForm,
    errors: &FormErrors,
    csrf: &CsrfToken,
    status: StatusCode,
) -> Result<HttpResponse, AppError> {
    let hotels = store.hotels().list(&ListFilter::all()).await?;
    let rooms = store.rooms().list(&ListFilter::all()).await?;
    let html = views::hotel_rooms::edit(key, form, &hotels, &rooms, errors, csrf.value());
    Ok(page(status, html, Some(csrf)))
}

/// Every hotel room with hotel and room names, optionally for one hotel.
pub async fn index<S: Store>(
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
) -> Result<HttpResponse, AppError> {
    let filter = params.hotelid.map(ListFilter::owned_by).unwrap_or_default();
    let rows = store.hotel_rooms().list(&filter).await?;
    Ok(page(StatusCode::OK, views::hotel_rooms::index(&rows), None))
}

pub async fn details<S: Store>(
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    Ok(page(StatusCode::OK, views::hotel_rooms::details(&row), None))
}

/// The hotel drop-down starts on the hotel named in the query, if any.
pub async fn create_form<S: Store>(
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let form = HotelRoomForm {
        hotel_id: params.hotelid.unwrap_or_default(),
        room_number: params.roomnumber.unwrap_or_default(),
        ..Default::default()
    };
    render_create(store.get_ref(), &form, &FormErrors::new(), &csrf).await
}

pub async fn create<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    csrf: CsrfToken,
    form: web::Form<HotelRoomForm>,
) -> Result<HttpResponse, AppError> {
    let form = match bind(&req, form)? {
        Bound::Valid(form) => form,
        Bound::Invalid(form, errors) => {
            return render_create(store.get_ref(), &form, &errors, &csrf).await;
        }
    };

    match store.hotel_rooms().create(&form).await {
        Ok(row) => {
            log::info!("Added room {} to {}", row.room_number, row.hotel_name);
            Ok(redirect(INDEX))
        }
        Err(RepoError::Constraint(kind)) => {
            let errors = constraint_errors::<HotelRoom>(kind, REFERENCES);
            render_create(store.get_ref(), &form, &errors, &csrf).await
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn edit_form<S: Store>(
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    render_edit(
        store.get_ref(),
        row.key(),
        &HotelRoomForm::from(&row),
        &FormErrors::new(),
        &csrf,
        StatusCode::OK,
    )
    .await
}

/// May move the room to another hotel or number; the key follows the form.
pub async fn edit<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
    csrf: CsrfToken,
    form: web::Form<HotelRoomForm>,
) -> Result<HttpResponse, AppError> {
    let bound = bind(&req, form)?;
    let key = params.key()?;

    let form = match bound {
        Bound::Valid(form) => form,
        Bound::Invalid(form, errors) => {
            return render_edit(store.get_ref(), key, &form, &errors, &csrf, StatusCode::OK).await;
        }
    };

    match store.hotel_rooms().update(key, &form, form.version()).await {
        Ok(row) => {
            log::info!("Updated hotel room {} (version {})", row.key(), row.version());
            Ok(redirect(INDEX))
        }
        Err(RepoError::Constraint(kind)) => {
            let errors = constraint_errors::<HotelRoom>(kind, REFERENCES);
            render_edit(store.get_ref(), key, &form, &errors, &csrf, StatusCode::OK).await
        }
        Err(RepoError::Conflict(detail)) => {
            log::warn!("Edit conflict: {detail}");
            let current = find(store.get_ref(), key).await?;
            render_edit(
                store.get_ref(),
                key,
                &HotelRoomForm::from(&current),
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
    params: web::Query<HotelRoomQuery>,
    csrf: CsrfToken,
) -> Result<HttpResponse, AppError> {
    let row = find(store.get_ref(), params.key()?).await?;
    Ok(page(
        StatusCode::OK,
        views::hotel_rooms::delete(&row, csrf.value()),
        Some(&csrf),
    ))
}

/// Fails with 404 instead of deleting when the hotel room does not exist.
pub async fn delete<S: Store>(
    req: HttpRequest,
    store: web::Data<S>,
    params: web::Query<HotelRoomQuery>,
    form: web::Form<DeleteForm>,
) -> Result<HttpResponse, AppError> {
    csrf::verify(&req, &form.csrf_token)?;
    let key = params.key()?;
    store.hotel_rooms().delete(key).await?;
    log::info!("Deleted hotel room {key}");
    Ok(redirect(INDEX))
}
