//! Router tests for the driver list page and the driver creation form

mod common;

use axum::http::StatusCode;
use serde_json::Value;

use common::{body_text, collection_field, location, page, TestApp};
use taxi_fleet::domain::gateways::{DriverRepository, PageView, PasswordHasher};
use taxi_fleet::domain::models::SearchFilter;
use taxi_fleet::infrastructure::driven_adapters::Argon2PasswordHasher;

const DRIVER_LIST_URL: &str = "/drivers/";
const DRIVER_CREATE_URL: &str = "/drivers/create/";

async fn logged_in_app() -> (TestApp, String) {
    let app = TestApp::new();
    let user = app.seed_driver("test", "test123", "TST00000").await;
    let cookie = app.force_login(&user);

    for i in 1..3 {
        app.seed_driver(&format!("test_0{i}"), "test123", &format!("TES{}", i.to_string().repeat(5)))
            .await;
    }
    app.seed_driver("somebody", "test123", "SOM12345").await;

    (app, cookie)
}

fn form_data<'a>() -> Vec<(&'a str, &'a str)> {
    vec![
        ("username", "new_user"),
        ("password1", "user1234test"),
        ("password2", "user1234test"),
        ("first_name", "Test first"),
        ("last_name", "Test last"),
        ("license_number", "TES12345"),
    ]
}

fn with_field<'a>(field: &str, value: &'a str) -> Vec<(&'a str, &'a str)> {
    form_data()
        .into_iter()
        .map(|(name, current)| (name, if name == field { value } else { current }))
        .collect()
}

fn field_errors(view: &PageView, field: &str) -> Vec<String> {
    view.get("fields")
        .and_then(Value::as_array)
        .and_then(|fields| fields.iter().find(|f| f["name"] == field))
        .and_then(|f| f["errors"].as_array())
        .map(|errors| {
            errors
                .iter()
                .filter_map(Value::as_str)
                .map(ToString::to_string)
                .collect()
        })
        .unwrap_or_default()
}

async fn driver_count(app: &TestApp) -> u64 {
    DriverRepository::count(app.store.as_ref()).await.unwrap()
}

#[tokio::test]
async fn test_login_required() {
    let app = TestApp::new();

    let response = app.get(DRIVER_LIST_URL, None).await;

    assert_ne!(response.status(), StatusCode::OK);
    assert_eq!(location(&response), "/accounts/login/?next=%2Fdrivers%2F");
}

#[tokio::test]
async fn test_retrieve_drivers() {
    let (app, cookie) = logged_in_app().await;

    let response = app.get(DRIVER_LIST_URL, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let expected: Vec<String> = DriverRepository::search(app.store.as_ref(), &SearchFilter::all())
        .await
        .unwrap()
        .iter()
        .map(|d| d.username().to_string())
        .collect();
    let view = page(&response);
    assert_eq!(view.template, "taxi/driver_list.html");
    assert_eq!(collection_field(view, "driver_list", "username"), expected);
}

#[tokio::test]
async fn test_driver_rows_never_expose_password_hashes() {
    let (app, cookie) = logged_in_app().await;

    let response = app.get(DRIVER_LIST_URL, Some(&cookie)).await;

    let rows = page(&response).get("driver_list").unwrap().to_string();
    assert!(!rows.contains("argon2"));
    assert!(!body_text(response).await.contains("argon2"));
}

#[tokio::test]
async fn test_create_driver() {
    let (app, cookie) = logged_in_app().await;

    let response = app.post_form(DRIVER_CREATE_URL, &form_data(), Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert_eq!(location(&response), DRIVER_LIST_URL);

    let new_user = DriverRepository::find_by_username(app.store.as_ref(), "new_user")
        .await
        .unwrap()
        .expect("driver was not stored");
    assert_eq!(new_user.first_name(), "Test first");
    assert_eq!(new_user.last_name(), "Test last");
    assert_eq!(new_user.license_number(), "TES12345");

    let hasher = Argon2PasswordHasher::for_tests();
    assert!(new_user.password_hash().starts_with("$argon2id$"));
    assert!(hasher.verify("user1234test", new_user.password_hash()).await.unwrap());
}

#[tokio::test]
async fn test_create_driver_form_is_rendered() {
    let (app, cookie) = logged_in_app().await;

    let response = app.get(DRIVER_CREATE_URL, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(page(&response).template, "taxi/driver_form.html");
    let body = body_text(response).await;
    assert!(body.contains(r#"name="license_number""#));
    assert!(body.contains(r#"name="password2""#));
}

#[tokio::test]
async fn test_create_driver_requires_login() {
    let (app, _cookie) = logged_in_app().await;

    let response = app.post_form(DRIVER_CREATE_URL, &form_data(), None).await;

    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(location(&response).starts_with("/accounts/login/"));
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_create_driver_with_mismatched_passwords() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .post_form(DRIVER_CREATE_URL, &with_field("password2", "user1234tesT"), Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(page(&response), "password2"),
        vec!["The two password fields didn't match."]
    );
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_create_driver_with_bad_license_number() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .post_form(DRIVER_CREATE_URL, &with_field("license_number", "tes12345"), Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(page(&response), "license_number"),
        vec!["First 3 characters should be uppercase letters"]
    );
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_create_driver_with_taken_username() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .post_form(DRIVER_CREATE_URL, &with_field("username", "test_01"), Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        field_errors(page(&response), "username"),
        vec!["A user with that username already exists."]
    );
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_create_driver_with_taken_license_number() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .post_form(DRIVER_CREATE_URL, &with_field("license_number", "SOM12345"), Some(&cookie))
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(field_errors(page(&response), "license_number").len(), 1);
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_create_driver_with_weak_password() {
    let (app, cookie) = logged_in_app().await;
    let weak = vec![
        ("username", "new_user"),
        ("password1", "12345678"),
        ("password2", "12345678"),
        ("first_name", ""),
        ("last_name", ""),
        ("license_number", "TES12345"),
    ];

    let response = app.post_form(DRIVER_CREATE_URL, &weak, Some(&cookie)).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(!field_errors(page(&response), "password2").is_empty());
    assert_eq!(driver_count(&app).await, 4);
}

#[tokio::test]
async fn test_rejected_form_echoes_values_but_not_passwords() {
    let (app, cookie) = logged_in_app().await;

    let response = app
        .post_form(DRIVER_CREATE_URL, &with_field("password2", "mismatch-secret"), Some(&cookie))
        .await;

    let body = body_text(response).await;
    assert!(body.contains(r#"value="new_user""#));
    assert!(body.contains(r#"value="Test first""#));
    assert!(!body.contains("user1234test"));
    assert!(!body.contains("mismatch-secret"));
}

#[tokio::test]
async fn test_searching_driver_find_existing_and_relevant() {
    let (app, cookie) = logged_in_app().await;

    let body = body_text(app.get("/drivers/?username=test", Some(&cookie)).await).await;

    assert!(body.contains("test_01"));
    assert!(body.contains("test_02"));
    assert!(!body.contains("somebody"));
}

#[tokio::test]
async fn test_searching_driver_doesnt_find_not_existing() {
    let (app, cookie) = logged_in_app().await;

    let body = body_text(app.get("/drivers/?username=noname", Some(&cookie)).await).await;

    assert!(!body.contains("test_01"));
    assert!(!body.contains("test_02"));
    assert!(!body.contains("somebody"));
}

#[tokio::test]
async fn test_searching_driver_find_all_if_username_empty() {
    let (app, cookie) = logged_in_app().await;

    let body = body_text(app.get("/drivers/?username=", Some(&cookie)).await).await;

    assert!(body.contains("test_01"));
    assert!(body.contains("test_02"));
    assert!(body.contains("somebody"));
}
