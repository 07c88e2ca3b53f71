//! Shared helpers for the HTTP integration tests

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use restaurant_server::db::DbService;
use restaurant_server::{Config, ServerState, api};
use serde_json::Value;
use std::time::Duration;
use tempfile::TempDir;
use tower::ServiceExt;

/// Test application backed by a RocksDB store in a temp dir
pub struct TestApp {
    pub router: Router,
    pub state: ServerState,
    _tmp: TempDir,
}

impl TestApp {
    pub async fn new() -> Self {
        let tmp = tempfile::tempdir().unwrap();
        let config = Config::with_overrides(tmp.path().to_string_lossy(), 0);
        let db = DbService::open(
            tmp.path().join("database"),
            "test",
            "test",
            Duration::from_secs(30),
        )
        .await
        .unwrap();
        let state = ServerState::new(config, db);
        let router = api::build_app(state.clone());
        Self {
            router,
            state,
            _tmp: tmp,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(json) => builder
                .header(http::header::CONTENT_TYPE, "application/json")
                .body(Body::from(json.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn patch(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PATCH, uri, Some(body)).await
    }

    /// POST and return `inserted_id`
    pub async fn create(&self, uri: &str, body: Value) -> String {
        let (status, json) = self.post(uri, body).await;
        assert_eq!(status, StatusCode::OK, "create {uri} failed: {json}");
        json["inserted_id"].as_str().unwrap().to_string()
    }

    pub async fn create_menu(&self) -> String {
        self.create(
            "/menus",
            serde_json::json!({ "name": "Main", "category": "dinner" }),
        )
        .await
    }

    pub async fn create_food(&self, menu_id: &str, name: &str, price: f64) -> String {
        self.create(
            "/foods",
            serde_json::json!({
                "name": name,
                "price": price,
                "food_image": format!("{name}.png"),
                "menu_id": menu_id,
            }),
        )
        .await
    }

    pub async fn create_table(&self, table_number: i64, guests: i64) -> String {
        self.create(
            "/tables",
            serde_json::json!({ "table_number": table_number, "number_of_guests": guests }),
        )
        .await
    }
}
