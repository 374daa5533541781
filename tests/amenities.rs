mod common;

use actix_web::http::{header, StatusCode};
use actix_web::test::{self, TestRequest};

use async_inn::db::{ListFilter, Repository, Store};
use async_inn::models::AmenityForm;
use common::{body_text, location, post_form};

fn named(name: &str) -> AmenityForm {
    AmenityForm {
        name: name.into(),
        ..Default::default()
    }
}

#[actix_web::test]
async fn created_amenity_shows_up_in_the_list() {
    let store = common::store().await;
    let app = app!(store);

    let resp = test::call_service(&app, post_form("/Amenities/Create", &[("name", "WiFi")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/Amenities");

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<td>WiFi</td>"));

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities/Details/9999").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn details_shows_the_matching_record() {
    let store = common::store().await;
    let sauna = store.amenities().create(&named("Sauna")).await.unwrap();
    let app = app!(store);

    let uri = format!("/Amenities/Details/{}", sauna.id);
    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("<dd>Sauna</dd>"));

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities/Details/abc").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn search_string_filters_by_substring() {
    let store = common::store().await;
    for name in ["Pool", "WiFi", "Coffee maker"] {
        store.amenities().create(&named(name)).await.unwrap();
    }
    let app = app!(store);

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities?searchString=Wi").to_request()).await;
    let body = body_text(resp).await;
    assert!(body.contains("<td>WiFi</td>"));
    assert!(!body.contains("<td>Pool</td>"));
    assert!(!body.contains("<td>Coffee maker</td>"));

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities?searchString=").to_request()).await;
    let body = body_text(resp).await;
    let pool = body.find("<td>Pool</td>").unwrap();
    let wifi = body.find("<td>WiFi</td>").unwrap();
    let coffee = body.find("<td>Coffee maker</td>").unwrap();
    assert!(pool < wifi && wifi < coffee);
}

#[actix_web::test]
async fn invalid_create_rerenders_without_saving() {
    let store = common::store().await;
    let app = app!(store);

    let resp = test::call_service(&app, post_form("/Amenities/Create", &[("name", "   ")]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Name is required"));

    let all = store.amenities().list(&ListFilter::all()).await.unwrap();
    assert!(all.is_empty());
}

#[actix_web::test]
async fn post_without_anti_forgery_token_is_rejected() {
    let store = common::store().await;
    let app = app!(store);

    let req = TestRequest::post()
        .uri("/Amenities/Create")
        .set_form([("name", "WiFi")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let all = store.amenities().list(&ListFilter::all()).await.unwrap();
    assert!(all.is_empty());
}

#[actix_web::test]
async fn create_form_issues_a_token_cookie() {
    let store = common::store().await;
    let app = app!(store);

    let resp = test::call_service(&app, TestRequest::get().uri("/Amenities/Create").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let cookie = resp
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    let token = cookie
        .strip_prefix("asyncinn_csrf=")
        .and_then(|rest| rest.split(';').next())
        .unwrap()
        .to_string();

    let body = body_text(resp).await;
    assert!(body.contains(&format!("name=\"csrf_token\" value=\"{token}\"")));
}

#[actix_web::test]
async fn edit_saves_and_redirects() {
    let store = common::store().await;
    let wifi = store.amenities().create(&named("Wifi")).await.unwrap();
    let app = app!(store);

    let uri = format!("/Amenities/Edit/{}", wifi.id);
    let id = wifi.id.to_string();
    let version = wifi.version.to_string();
    let req = post_form(&uri, &[("id", id.as_str()), ("name", "WiFi"), ("version", version.as_str())]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    let saved = store.amenities().find(wifi.id).await.unwrap().unwrap();
    assert_eq!(saved.name, "WiFi");
    assert_eq!(saved.version, wifi.version + 1);
}

#[actix_web::test]
async fn edit_with_mismatched_id_is_not_found() {
    let store = common::store().await;
    let wifi = store.amenities().create(&named("WiFi")).await.unwrap();
    let app = app!(store);

    let uri = format!("/Amenities/Edit/{}", wifi.id);
    let other = (wifi.id + 1).to_string();
    let req = post_form(&uri, &[("id", other.as_str()), ("name", "Changed"), ("version", "1")]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let saved = store.amenities().find(wifi.id).await.unwrap().unwrap();
    assert_eq!(saved.name, "WiFi");
}

#[actix_web::test]
async fn stale_edit_reports_conflict_with_current_values() {
    let store = common::store().await;
    let gym = store.amenities().create(&named("Gym")).await.unwrap();
    store
        .amenities()
        .update(gym.id, &named("Fitness center"), gym.version)
        .await
        .unwrap();
    let app = app!(store);

    let uri = format!("/Amenities/Edit/{}", gym.id);
    let id = gym.id.to_string();
    let stale = gym.version.to_string();
    let req = post_form(&uri, &[("id", id.as_str()), ("name", "Workout room"), ("version", stale.as_str())]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    let body = body_text(resp).await;
    assert!(body.contains("changed by someone else"));
    assert!(body.contains("value=\"Fitness center\""));

    let saved = store.amenities().find(gym.id).await.unwrap().unwrap();
    assert_eq!(saved.name, "Fitness center");
}

#[actix_web::test]
async fn edit_of_deleted_amenity_is_not_found() {
    let store = common::store().await;
    let gym = store.amenities().create(&named("Gym")).await.unwrap();
    store.amenities().delete(gym.id).await.unwrap();
    let app = app!(store);

    let uri = format!("/Amenities/Edit/{}", gym.id);
    let id = gym.id.to_string();
    let req = post_form(&uri, &[("id", id.as_str()), ("name", "Gym"), ("version", "1")]).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn delete_confirm_then_remove() {
    let store = common::store().await;
    let spa = store.amenities().create(&named("Spa")).await.unwrap();
    let app = app!(store);
    let uri = format!("/Amenities/Delete/{}", spa.id);

    let resp = test::call_service(&app, TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_text(resp).await.contains("Are you sure you want to delete this?"));

    let resp = test::call_service(&app, post_form(&uri, &[]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/Amenities");

    let details = format!("/Amenities/Details/{}", spa.id);
    let resp = test::call_service(&app, TestRequest::get().uri(&details).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = test::call_service(&app, post_form(&uri, &[]).to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
