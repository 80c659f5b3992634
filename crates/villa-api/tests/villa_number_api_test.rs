mod common;

use axum::http::{header, StatusCode};
use common::{send, send_raw};
use resource_store::mock::MockStore;
use resource_store::{Repository, StoreError};
use serde_json::json;
use std::sync::Arc;
use villa_api::api;
use villa_api::clients::{VillaClient, VillaNumberClient};
use villa_api::lifecycle::VillaSystem;
use villa_api::model::{Villa, VillaNumber};

async fn system_with_villa() -> (VillaSystem, axum::Router) {
    let system = VillaSystem::new();
    let app = system.router();
    let villa = send(&app, "POST", "/villas", Some(json!({ "name": "Seaside" }))).await;
    assert_eq!(villa.status, StatusCode::CREATED);
    (system, app)
}

#[tokio::test]
async fn test_villa_number_lifecycle() {
    let (system, app) = system_with_villa().await;

    // 1. Create
    let created = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 101, "villaId": 1, "specialDetails": "Corner unit" })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.headers[header::LOCATION], "/villa-numbers/101");
    assert_eq!(created.body["statusCode"], 201);
    assert_eq!(created.body["isSuccess"], true);
    assert_eq!(created.body["errorMessages"], json!([]));
    assert_eq!(created.body["result"]["villaNo"], 101);
    assert_eq!(created.body["result"]["specialDetails"], "Corner unit");

    // 2. Get and list
    let fetched = send(&app, "GET", "/villa-numbers/101", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["statusCode"], 200);
    assert_eq!(fetched.body["result"]["villaId"], 1);

    let listed = send(&app, "GET", "/villa-numbers", None).await;
    assert_eq!(listed.status, StatusCode::OK);
    assert_eq!(listed.body["result"].as_array().unwrap().len(), 1);

    // 3. Update
    let updated = send(
        &app,
        "PUT",
        "/villa-numbers/101",
        Some(json!({ "villaNo": 101, "villaId": 1, "specialDetails": "Renovated" })),
    )
    .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(updated.body["statusCode"], 204);
    assert_eq!(updated.body["isSuccess"], true);
    let fetched = send(&app, "GET", "/villa-numbers/101", None).await;
    assert_eq!(fetched.body["result"]["specialDetails"], "Renovated");

    // 4. Delete
    let deleted = send(&app, "DELETE", "/villa-numbers/101", None).await;
    assert_eq!(deleted.status, StatusCode::OK);
    assert_eq!(deleted.body["statusCode"], 204);
    assert_eq!(deleted.body["isSuccess"], true);

    let again = send(&app, "DELETE", "/villa-numbers/101", None).await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["isSuccess"], false);

    drop(app);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unknown_villa_is_rejected() {
    let (_system, app) = system_with_villa().await;

    let rejected = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 101, "villaId": 999 })),
    )
    .await;
    assert_eq!(rejected.status, StatusCode::BAD_REQUEST);
    assert_eq!(rejected.body["isSuccess"], false);
    assert_eq!(rejected.body["errorMessages"], json!(["Villa ID is invalid"]));

    let missing = send(&app, "GET", "/villa-numbers/101", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_duplicate_number_is_rejected() {
    let (_system, app) = system_with_villa().await;
    let first = json!({ "villaNo": 101, "villaId": 1, "specialDetails": "First" });
    send(&app, "POST", "/villa-numbers", Some(first)).await;

    let duplicate = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 101, "villaId": 1, "specialDetails": "Second" })),
    )
    .await;
    assert_eq!(duplicate.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        duplicate.body["errorMessages"],
        json!(["Villa Number already exists!"])
    );

    let fetched = send(&app, "GET", "/villa-numbers/101", None).await;
    assert_eq!(fetched.body["result"]["specialDetails"], "First");
}

#[tokio::test]
async fn test_create_rejections() {
    let (_system, app) = system_with_villa().await;

    let absent = send_raw(&app, "POST", "/villa-numbers", "").await;
    assert_eq!(absent.status, StatusCode::NOT_FOUND);

    let zero = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 0, "villaId": 1 })),
    )
    .await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);

    let malformed = send_raw(&app, "POST", "/villa-numbers", "{\"villaNo\":\"x\"}").await;
    assert_eq!(malformed.status, StatusCode::BAD_REQUEST);

    let listed = send(&app, "GET", "/villa-numbers", None).await;
    assert_eq!(listed.body["result"], json!([]));
}

#[tokio::test]
async fn test_get_rejects_bad_ids() {
    let (_system, app) = system_with_villa().await;

    let zero = send(&app, "GET", "/villa-numbers/0", None).await;
    assert_eq!(zero.status, StatusCode::BAD_REQUEST);
    assert_eq!(zero.body["statusCode"], 400);

    let missing = send(&app, "GET", "/villa-numbers/7", None).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["statusCode"], 404);
    assert!(missing.body["result"].is_null());

    let zero_delete = send(&app, "DELETE", "/villa-numbers/0", None).await;
    assert_eq!(zero_delete.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_rejections() {
    let (_system, app) = system_with_villa().await;
    send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 101, "villaId": 1, "specialDetails": "Original" })),
    )
    .await;

    let mismatch = send(
        &app,
        "PUT",
        "/villa-numbers/101",
        Some(json!({ "villaNo": 102, "villaId": 1, "specialDetails": "Moved" })),
    )
    .await;
    assert_eq!(mismatch.status, StatusCode::BAD_REQUEST);

    let bad_villa = send(
        &app,
        "PUT",
        "/villa-numbers/101",
        Some(json!({ "villaNo": 101, "villaId": 999 })),
    )
    .await;
    assert_eq!(bad_villa.status, StatusCode::BAD_REQUEST);
    assert_eq!(bad_villa.body["errorMessages"], json!(["Villa ID is invalid"]));

    let absent = send_raw(&app, "PUT", "/villa-numbers/101", "").await;
    assert_eq!(absent.status, StatusCode::BAD_REQUEST);

    let fetched = send(&app, "GET", "/villa-numbers/101", None).await;
    assert_eq!(fetched.body["result"]["specialDetails"], "Original");

    let missing = send(
        &app,
        "PUT",
        "/villa-numbers/202",
        Some(json!({ "villaNo": 202, "villaId": 1 })),
    )
    .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_store_failure_returns_failed_envelope() {
    let mut numbers = MockStore::<VillaNumber>::new();
    numbers.expect_list().return_err(StoreError::Closed);
    let mut villas = MockStore::<Villa>::new();
    villas.expect_list().return_err(StoreError::Dropped);

    let numbers_repo: Arc<dyn Repository<VillaNumber>> = Arc::new(numbers.client());
    let villas_repo: Arc<dyn Repository<Villa>> = Arc::new(villas.client());
    let app = api::router(
        VillaClient::new(villas_repo.clone(), numbers_repo.clone()),
        VillaNumberClient::new(numbers_repo, villas_repo),
    );

    let listed = send(&app, "GET", "/villa-numbers", None).await;
    assert_eq!(listed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(listed.body["statusCode"], 500);
    assert_eq!(listed.body["isSuccess"], false);
    assert!(listed.body["result"].is_null());
    assert_eq!(
        listed.body["errorMessages"],
        json!(["Villa number store error: Store closed"])
    );

    let villas_listed = send(&app, "GET", "/villas", None).await;
    assert_eq!(villas_listed.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(villas_listed.body["isSuccess"], false);

    numbers.verify();
    villas.verify();
}

#[tokio::test]
async fn test_negative_numbers_are_ordinary_keys() {
    let (_system, app) = system_with_villa().await;

    let created = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": -5, "villaId": 1 })),
    )
    .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.headers[header::LOCATION], "/villa-numbers/-5");

    let fetched = send(&app, "GET", "/villa-numbers/-5", None).await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["result"]["villaNo"], -5);
}

#[tokio::test]
async fn test_lost_create_race_reports_duplicate_number() {
    let mut numbers = MockStore::<VillaNumber>::new();
    let mut villas = MockStore::<Villa>::new();

    // Pre-check sees no number and a valid villa, then the store refuses the insert
    numbers.expect_find().return_ok(None);
    villas.expect_find().return_ok(Some(Villa {
        id: 1,
        name: "Seaside".into(),
        details: String::new(),
        occupancy: 4,
        image_url: String::new(),
        sqft: 550,
        rate: 200.0,
        amenity: String::new(),
    }));
    numbers
        .expect_create()
        .return_err(StoreError::Conflict("VillaNumber 101 already exists".into()));

    let numbers_repo: Arc<dyn Repository<VillaNumber>> = Arc::new(numbers.client());
    let villas_repo: Arc<dyn Repository<Villa>> = Arc::new(villas.client());
    let app = api::router(
        VillaClient::new(villas_repo.clone(), numbers_repo.clone()),
        VillaNumberClient::new(numbers_repo, villas_repo),
    );

    let created = send(
        &app,
        "POST",
        "/villa-numbers",
        Some(json!({ "villaNo": 101, "villaId": 1 })),
    )
    .await;
    assert_eq!(created.status, StatusCode::BAD_REQUEST);
    assert_eq!(created.body["isSuccess"], false);
    assert_eq!(
        created.body["errorMessages"],
        json!(["Villa Number already exists!"])
    );

    numbers.verify();
    villas.verify();
}
