
use actix_web::{http::StatusCode, test};
use serde_json::{json, Value};
use studio_gallery::{
    enrichment::{CAPTION_FALLBACK, TAGS_FALLBACK},
    repositories::kv_repo::FileKvStore,
};
use test_utils::*;

#[actix_rt::test]
async fn admin_manages_events() {
    let state = memory_state();
    sign_in(&state, ADMIN_EMAIL);
    let app = test::init_service(test_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/events")
        .set_json(json!({ "name": "Smith Wedding 2024", "date": "2024-09-14" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    assert_eq!(created["type"], "Wedding");
    assert_eq!(created["isLocked"], false);
    let id = created["id"].as_str().unwrap().to_string();

    let mut renamed = created.clone();
    renamed["name"] = json!("Smith & Jones Wedding");
    let req = test::TestRequest::put()
        .uri(&format!("/admin/events/{id}"))
        .set_json(&renamed)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let events = state.store.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[2].name, "Smith & Jones Wedding");

    let req = test::TestRequest::put()
        .uri("/admin/events/e-1")
        .set_json(&renamed)
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn deleting_the_seed_wedding_keeps_its_photos() {
    let state = memory_state();
    sign_in(&state, ADMIN_EMAIL);
    let app = test::init_service(test_app(state.clone())).await;

    let req = test::TestRequest::delete().uri("/admin/events/e-1").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

    let events = state.store.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, "e-2");
    assert_eq!(state.store.photos().iter().filter(|p| p.event_id == "e-1").count(), 6);
}

#[actix_rt::test]
async fn photo_needs_an_event() {
    let state = memory_state();
    sign_in(&state, ADMIN_EMAIL);
    let app = test::init_service(test_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/admin/photos")
        .set_json(json!({ "title": "Bouquet" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["details"][0]["message"], "Please select an event");

    let req = test::TestRequest::post()
        .uri("/admin/photos")
        .set_json(json!({ "title": "Bouquet", "eventId": "e-2" }))
        .to_request();
    let photo: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(photo["eventId"], "e-2");
    assert_eq!(photo["dimensions"], json!({ "width": 1200, "height": 800 }));
    assert_eq!(state.store.photos().len(), 11);
}

#[actix_rt::test]
async fn client_download_shows_up_on_the_admin_dashboard() {
    let state = memory_state();
    sign_in(&state, CLIENT_EMAIL);
    let app = test::init_service(test_app(state.clone())).await;

    let req = test::TestRequest::post()
        .uri("/event/e-1/photos/p-2/download")
        .to_request();
    let ticket: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(ticket["fileName"], "Artworld Photography-p-2.jpg");

    let stats = state.store.stats();
    assert_eq!(stats.len(), 1);
    assert_eq!(stats[0].photo_id, "p-2");
    assert_eq!(stats[0].user_id, "u-2");

    sign_in(&state, ADMIN_EMAIL);
    let dashboard: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/admin").to_request(),
    )
    .await;
    assert_eq!(dashboard["totals"]["totalDownloads"], 1);
    assert_eq!(dashboard["downloadsByEvent"][0], json!({ "name": "Eternal Bl...", "downloads": 1 }));
    assert_eq!(dashboard["downloadsByEvent"][1]["downloads"], 0);
}

#[actix_rt::test]
async fn gallery_filters_and_reports_missing_events() {
    let state = memory_state();
    sign_in(&state, CLIENT_EMAIL);
    let app = test::init_service(test_app(state)).await;

    let view: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/event/e-1?filter=ring").to_request(),
    )
    .await;
    assert_eq!(view["event"]["id"], "e-1");
    let photos = view["photos"].as_array().unwrap();
    assert!(!photos.is_empty());
    assert!(photos.iter().all(|p| p["title"].as_str().unwrap().to_lowercase().contains("ring")));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/event/e-404").to_request()).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn insights_fall_back_when_the_model_is_unreachable() {
    let state = memory_state();
    sign_in(&state, CLIENT_EMAIL);
    let app = test::init_service(test_app(state)).await;

    let req = test::TestRequest::post()
        .uri("/event/e-1/photos/p-1/insights")
        .to_request();
    let insights: Value = test::call_and_read_body_json(&app, req).await;

    assert_eq!(insights["caption"], CAPTION_FALLBACK);
    assert_eq!(insights["tags"], json!(TAGS_FALLBACK));

    // fallback tags are searchable like any other cached tag
    let view: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/event/e-1?filter=visuals").to_request(),
    )
    .await;
    let ids: Vec<_> = view["photos"].as_array().unwrap().iter().map(|p| p["id"].clone()).collect();
    assert_eq!(ids, vec![json!("p-1")]);
}

#[actix_rt::test]
async fn contact_form_is_validated() {
    let app = test::init_service(test_app(memory_state())).await;

    let form = json!({
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "message": "<b>Portrait</b> session next month?"
    });
    let resp = test::call_service(&app, test::TestRequest::post().uri("/contact").set_json(&form).to_request()).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let receipt: Value = test::read_body_json(resp).await;
    assert!(receipt["id"].is_string());

    let mut bad = form.clone();
    bad["email"] = json!("not-an-email");
    let resp = test::call_service(&app, test::TestRequest::post().uri("/contact").set_json(&bad).to_request()).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_rt::test]
async fn state_survives_a_restart_on_file_storage() {
    let dir = tempfile::tempdir().unwrap();

    {
        let state = state_over(Box::new(FileKvStore::new(dir.path())));
        sign_in(&state, ADMIN_EMAIL);
        let app = test::init_service(test_app(state)).await;

        let req = test::TestRequest::post()
            .uri("/admin/events")
            .set_json(json!({ "name": "Gala Night", "type": "Corporate", "date": "2024-12-31" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);
    }

    let state = state_over(Box::new(FileKvStore::new(dir.path())));
    let events = state.store.events();
    assert_eq!(events.len(), 3);
    assert_eq!(events[2].name, "Gala Night");
    assert_eq!(state.store.user().map(|u| u.email), Some(ADMIN_EMAIL.to_string()));
}
