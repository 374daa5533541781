mod common;

use actix_web::http::StatusCode;
use actix_web::test::{self, TestRequest};

use async_inn::db::{ListFilter, Repository, SqliteStore, Store};
use async_inn::models::{AmenityForm, Layout, RoomAmenityForm, RoomAmenityKey, RoomForm};
use common::{body_text, location, post_form};

struct Seeded {
    room: i64,
    wifi: i64,
    minibar: i64,
}

async fn seed(store: &SqliteStore) -> Seeded {
    let room = store
        .rooms()
        .create(&RoomForm {
            name: "Seahawk Snooze".into(),
            layout: Layout::OneBedroom,
            ..Default::default()
        })
        .await
        .unwrap();
    let mut ids = Vec::new();
    for name in ["WiFi", "Mini bar"] {
        let amenity = store
            .amenities()
            .create(&AmenityForm {
                name: name.into(),
                ..Default::default()
            })
            .await
            .unwrap();
        ids.push(amenity.id);
    }
    Seeded {
        room: room.id,
        wifi: ids[0],
        minibar: ids[1],
    }
}

async fn link(store: &SqliteStore, room_id: i64, amenity_id: i64) {
    store
        .room_amenities()
        .create(&RoomAmenityForm {
            room_id,
            amenity_id,
            ..Default::default()
        })
        .await
        .unwrap();
}

#[actix_web::test]
async fn create_then_list_with_joined_names() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    let app = app!(store);

    let room = seeded.room.to_string();
    let wifi = seeded.wifi.to_string();
    let req = post_form(
        "/RoomAmenities/Create",
        &[("room_id", room.as_str()), ("amenity_id", wifi.as_str())],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/RoomAmenities");

    let resp = test::call_service(&app, TestRequest::get().uri("/RoomAmenities").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("<td>Seahawk Snooze</td>"));
    assert!(body.contains("<td>WiFi</td>"));
}

#[actix_web::test]
async fn create_form_offers_every_room_and_amenity() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Create?roomid={}", seeded.room);
    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains(&format!("<option value=\"{}\" selected>Seahawk Snooze</option>", seeded.room)));
    assert!(body.contains(&format!("<option value=\"{}\">WiFi</option>", seeded.wifi)));
    assert!(body.contains(&format!("<option value=\"{}\">Mini bar</option>", seeded.minibar)));
}

#[actix_web::test]
async fn details_by_composite_key() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Details?roomid={}&amenityid={}", seeded.room, seeded.wifi);
    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_text(resp).await;
    assert!(body.contains("<dd>Seahawk Snooze</dd>"));
    assert!(body.contains("<dd>WiFi</dd>"));

    let unknown = format!("/RoomAmenities/Details?roomid={}&amenityid={}", seeded.room, seeded.minibar);
    let resp = test::call_service(&app, TestRequest::get().uri(&unknown).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let half = format!("/RoomAmenities/Details?roomid={}", seeded.room);
    let resp = test::call_service(&app, TestRequest::get().uri(&half).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let garbled = "/RoomAmenities/Details?roomid=one&amenityid=2";
    let resp = test::call_service(&app, TestRequest::get().uri(garbled).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn duplicate_association_rerenders_with_message() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    let app = app!(store);

    let room = seeded.room.to_string();
    let wifi = seeded.wifi.to_string();
    let req = post_form(
        "/RoomAmenities/Create",
        &[("room_id", room.as_str()), ("amenity_id", wifi.as_str())],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("This room amenity already exists."));

    let rows = store.room_amenities().list(&ListFilter::all()).await.unwrap();
    assert_eq!(rows.len(), 1);
}

#[actix_web::test]
async fn unselected_drop_downs_fail_validation() {
    let store = common::store().await;
    seed(&store).await;
    let app = app!(store);

    let req = post_form("/RoomAmenities/Create", &[("room_id", "0"), ("amenity_id", "0")]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_text(resp).await;
    assert!(body.contains("Select a room."));
    assert!(body.contains("Select an amenity."));
}

#[actix_web::test]
async fn edit_moves_the_association() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Edit?roomid={}&amenityid={}", seeded.room, seeded.wifi);
    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let room = seeded.room.to_string();
    let minibar = seeded.minibar.to_string();
    let req = post_form(
        &uri,
        &[("room_id", room.as_str()), ("amenity_id", minibar.as_str()), ("version", "1")],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let moved = RoomAmenityKey {
        room_id: seeded.room,
        amenity_id: seeded.minibar,
    };
    assert!(store.room_amenities().exists(moved).await.unwrap());
}

#[actix_web::test]
async fn delete_confirmed_removes_the_row() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Delete?roomid={}&amenityid={}", seeded.room, seeded.wifi);
    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = test::call_service(&app, post_form(&uri, &[]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let rows = store.room_amenities().list(&ListFilter::all()).await.unwrap();
    assert!(rows.is_empty());
}

#[actix_web::test]
async fn delete_confirmed_on_missing_pair_is_not_found() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Delete?roomid={}&amenityid={}", seeded.room, seeded.wifi);
    let resp = test::call_service(&app, post_form(&uri, &[]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn stale_edit_is_a_conflict() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    let app = app!(store);

    let uri = format!("/RoomAmenities/Edit?roomid={}&amenityid={}", seeded.room, seeded.wifi);
    let room = seeded.room.to_string();
    let minibar = seeded.minibar.to_string();
    let req = post_form(
        &uri,
        &[("room_id", room.as_str()), ("amenity_id", minibar.as_str()), ("version", "0")],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
    assert!(body_text(resp).await.contains("changed by someone else"));

    let unchanged = RoomAmenityKey {
        room_id: seeded.room,
        amenity_id: seeded.wifi,
    };
    assert!(store.room_amenities().exists(unchanged).await.unwrap());
}

#[actix_web::test]
async fn create_with_deleted_amenity_rerenders_with_message() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    store.amenities().delete(seeded.wifi).await.unwrap();
    let app = app!(store);

    let room = seeded.room.to_string();
    let wifi = seeded.wifi.to_string();
    let req = post_form(
        "/RoomAmenities/Create",
        &[("room_id", room.as_str()), ("amenity_id", wifi.as_str())],
    )
    .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("The selected room or amenity no longer exists."));

    let rows = store.room_amenities().list(&ListFilter::all()).await.unwrap();
    assert!(rows.is_empty());
}

#[actix_web::test]
async fn amenity_delete_cascades_to_associations() {
    let store = common::store().await;
    let seeded = seed(&store).await;
    link(&store, seeded.room, seeded.wifi).await;
    link(&store, seeded.room, seeded.minibar).await;
    let app = app!(store);

    let uri = format!("/Amenities/Delete/{}", seeded.wifi);
    let resp = test::call_service(&app, post_form(&uri, &[]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let rows = store.room_amenities().list(&ListFilter::all()).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].amenity_id, seeded.minibar);
}
