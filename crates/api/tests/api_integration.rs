//! API integration tests.
//!
//! These tests drive the full router over a mock database.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone)]

use std::{path::PathBuf, sync::Arc};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use chrono::Utc;
use menuboard_api::{AppState, app};
use menuboard_common::{
    LocalStorage, StorageService,
    config::{AuthConfig, Config, DatabaseConfig, ServerConfig, StorageConfig},
};
use menuboard_core::{TokenIssuer, hash_password};
use menuboard_db::entities::{category, info, sub_category, user};
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, MockExecResult};
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "integration-test-secret";
const BOUNDARY: &str = "menuboard-test-boundary";

/// Create a test configuration.
fn create_test_config(storage_path: PathBuf) -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            url: "https://menu.example.com".to_string(),
        },
        database: DatabaseConfig {
            url: "postgres://localhost/test".to_string(),
            max_connections: 10,
            min_connections: 1,
        },
        auth: AuthConfig {
            jwt_secret: SECRET.to_string(),
            token_ttl_hours: 24,
            registration_enabled: true,
        },
        storage: StorageConfig {
            base_path: storage_path,
            base_url: None,
            max_upload_bytes: 1024 * 1024,
        },
    }
}

fn temp_storage_path() -> PathBuf {
    std::env::temp_dir().join(format!("menuboard-api-{}", uuid::Uuid::new_v4()))
}

/// Build the app over a prepared mock database.
fn create_test_app(db: DatabaseConnection) -> Router {
    let config = create_test_config(temp_storage_path());
    let storage: StorageService = Arc::new(LocalStorage::new(
        config.storage.base_path.clone(),
        config.storage_base_url(),
    ));

    app(AppState::new(Arc::new(db), storage, &config))
}

fn empty_db() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres).into_connection()
}

fn bearer() -> String {
    let token = TokenIssuer::new(SECRET, 24)
        .sign(1, "admin@example.com")
        .unwrap();
    format!("Bearer {token}")
}

fn category_model(id: i32, position: i32) -> category::Model {
    let now = Utc::now().into();
    category::Model {
        id,
        title_en: "Drinks".to_string(),
        title_az: "İçkilər".to_string(),
        image: format!("https://menu.example.com/files/categories/{id}-drinks.png"),
        position,
        created_at: now,
        updated_at: now,
    }
}

fn info_model() -> info::Model {
    info::Model {
        id: 1,
        logo: None,
        background_image: None,
        title_en: "Menuboard".to_string(),
        title_az: "Menuboard".to_string(),
        phone_numbers: json!(["+994 50 000 00 00"]),
        email: "hello@example.com".to_string(),
        address_en: "Baku".to_string(),
        address_az: "Bakı".to_string(),
        instagram: String::new(),
        facebook: String::new(),
        whatsapp: String::new(),
        updated_at: Utc::now().into(),
    }
}

fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((name, file_name, data)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

fn multipart_request(method: &str, uri: &str, body: Vec<u8>) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .header(header::AUTHORIZATION, bearer())
        .body(Body::from(body))
        .unwrap()
}

fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn read_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_unknown_endpoint_returns_404() {
    let response = create_test_app(empty_db())
        .oneshot(
            Request::builder()
                .uri("/api/v1/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Not found - /api/v1/nonexistent");
}

#[tokio::test]
async fn test_invalid_id_returns_400() {
    for uri in ["/api/v1/category/abc", "/api/v1/product/0", "/api/v1/campaign/-3"] {
        let response = create_test_app(empty_db())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = read_json(response).await;
        assert_eq!(body["error"], "Invalid id");
    }
}

#[tokio::test]
async fn test_out_of_range_id_returns_404() {
    let response = create_test_app(empty_db())
        .oneshot(
            Request::builder()
                .uri("/api/v1/category/2147483648")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_write_without_token_returns_401() {
    let response = create_test_app(empty_db())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/category/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Access denied. No token provided");
}

#[tokio::test]
async fn test_write_with_bad_token_returns_403() {
    let response = create_test_app(empty_db())
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/campaign/1")
                .header(header::AUTHORIZATION, "Bearer not-a-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn test_signup_returns_201() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .append_query_results([vec![user::Model {
            id: 1,
            email: "admin@example.com".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now().into(),
        }]])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signup",
            &json!({ "email": "admin@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body, json!({ "message": "User registered successfully" }));
}

#[tokio::test]
async fn test_signup_with_short_password_returns_400() {
    let response = create_test_app(empty_db())
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/signup",
            &json!({ "email": "admin@example.com", "password": "short" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Password must be at least 8 characters");
}

#[tokio::test]
async fn test_login_with_unknown_email_returns_401() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<user::Model>::new()])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            &json!({ "email": "nobody@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_issues_usable_token() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![user::Model {
            id: 7,
            email: "admin@example.com".to_string(),
            password_hash: hash_password("password123").unwrap(),
            created_at: Utc::now().into(),
        }]])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(json_request(
            "POST",
            "/api/v1/auth/login",
            &json!({ "email": "admin@example.com", "password": "password123" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    let token = body["accessToken"].as_str().unwrap();
    let claims = TokenIssuer::new(SECRET, 24).verify(token).unwrap();
    assert_eq!(claims.sub, 7);
}

#[tokio::test]
async fn test_list_categories() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model(1, 1)]])
        .append_query_results([vec![sub_category::Model {
            id: 3,
            title_en: "Coffee".to_string(),
            title_az: "Qəhvə".to_string(),
            position: 1,
            category_id: 1,
            created_at: Utc::now().into(),
            updated_at: Utc::now().into(),
        }]])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/category")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body[0]["titleEN"], "Drinks");
    assert_eq!(body[0]["subCategories"][0]["titleAZ"], "Qəhvə");
}

#[tokio::test]
async fn test_create_category_with_image_returns_201() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<category::Model>::new()])
        .append_query_results([vec![category_model(5, 2)]])
        .into_connection();

    let body = multipart_body(
        &[("titleEN", "Drinks"), ("titleAZ", "İçkilər"), ("position", "2")],
        Some(("image", "drinks.png", b"png-bytes")),
    );
    let response = create_test_app(db)
        .oneshot(multipart_request("POST", "/api/v1/category", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = read_json(response).await;
    assert_eq!(body["id"], 5);
    assert_eq!(body["position"], 2);
}

#[tokio::test]
async fn test_create_category_without_image_returns_400() {
    let body = multipart_body(
        &[("titleEN", "Drinks"), ("titleAZ", "İçkilər"), ("position", "2")],
        None,
    );
    let response = create_test_app(empty_db())
        .oneshot(multipart_request("POST", "/api/v1/category", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Image must be provided");
}

#[tokio::test]
async fn test_create_category_with_taken_position_returns_409() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model(1, 2)]])
        .into_connection();

    let body = multipart_body(
        &[("titleEN", "Food"), ("titleAZ", "Yemək"), ("position", "2")],
        Some(("image", "food.png", b"png-bytes")),
    );
    let response = create_test_app(db)
        .oneshot(multipart_request("POST", "/api/v1/category", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Category with this position already exists");
}

#[tokio::test]
async fn test_non_numeric_position_returns_400() {
    let body = multipart_body(
        &[("titleEN", "Food"), ("titleAZ", "Yemək"), ("position", "first")],
        None,
    );
    let response = create_test_app(empty_db())
        .oneshot(multipart_request("POST", "/api/v1/category", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Position must be number");
}

#[tokio::test]
async fn test_non_numeric_price_returns_400() {
    let body = multipart_body(
        &[
            ("titleEN", "Latte"),
            ("titleAZ", "Latte"),
            ("descEN", "Milk coffee"),
            ("descAZ", "Südlü qəhvə"),
            ("price", "cheap"),
            ("gram", "250"),
            ("subCategoryId", "3"),
        ],
        None,
    );
    let response = create_test_app(empty_db())
        .oneshot(multipart_request("POST", "/api/v1/product", body))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Price must be number");
}

#[tokio::test]
async fn test_delete_category_returns_204() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![category_model(4, 1)]])
        .append_query_results([Vec::<sub_category::Model>::new()])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/v1/category/4")
                .header(header::AUTHORIZATION, bearer())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_get_missing_campaign_returns_404() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<menuboard_db::entities::campaign::Model>::new()])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/campaign/9")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["error"], "Campaign not found");
}

#[tokio::test]
async fn test_get_info_is_public() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![info_model()]])
        .into_connection();

    let response = create_test_app(db)
        .oneshot(
            Request::builder()
                .uri("/api/v1/info")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = read_json(response).await;
    assert_eq!(body["titleEN"], "Menuboard");
    assert_eq!(body["phoneNumbers"], json!(["+994 50 000 00 00"]));
}

#[tokio::test]
async fn test_update_info_requires_token() {
    let response = create_test_app(empty_db())
        .oneshot(json_request(
            "PUT",
            "/api/v1/info",
            &json!({ "titleEN": "New title" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
