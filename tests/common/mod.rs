#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use workforce_core::app_state::build_app_state;
use workforce_core::core::persistence::db;
use workforce_core::routes::app_router;

pub const TEST_SECRET: &str = "test-secret";

pub struct TestApp {
    router: axum::Router,
    // Holds the database file alive for the duration of the test.
    _dir: TempDir,
}

pub fn make_app() -> TestApp {
    let dir = tempfile::tempdir().unwrap();
    let pool = db::init_pool(dir.path().join("test.db")).unwrap();
    let state = build_app_state(pool, TEST_SECRET);
    TestApp {
        router: app_router(state),
        _dir: dir,
    }
}

impl TestApp {
    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(serde_json::to_vec(&json).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, json)
    }

    pub async fn request_with_bearer(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    pub async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::PUT, uri, Some(body)).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::DELETE, uri, None).await
    }

    /// Create a department and return its id.
    pub async fn seed_department(&self, name: &str) -> i64 {
        let (status, body) = self
            .post(
                "/departments/create",
                serde_json::json!({
                    "name": name,
                    "description": "seeded",
                    "location": "HQ"
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    /// Create an employee in `department_id` and return its id.
    pub async fn seed_employee(&self, email: &str, department_id: i64) -> i64 {
        let (status, body) = self
            .post(
                "/employees/create",
                serde_json::json!({
                    "firstName": "John",
                    "lastName": "Doe",
                    "email": email,
                    "phoneNumber": "1234567890",
                    "dateOfJoining": "2024-07-01",
                    "position": "Developer",
                    "salary": 60000.0,
                    "departmentId": department_id
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }

    /// Create a project in `department_id` and return its id.
    pub async fn seed_project(&self, name: &str, department_id: i64, employee_ids: &[i64]) -> i64 {
        let (status, body) = self
            .post(
                "/projects/create",
                serde_json::json!({
                    "name": name,
                    "description": "seeded",
                    "startDate": "2024-01-01",
                    "endDate": "2024-12-31",
                    "departmentId": department_id,
                    "employeeIds": employee_ids
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_i64().unwrap()
    }
}
