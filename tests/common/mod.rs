#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use classroll::router::init_router;
use classroll::state::AppState;
use classroll_auth::create_access_token;
use classroll_config::{CorsConfig, JwtConfig};
use classroll_core::Role;
use classroll_db::{InMemoryStore, SchoolStore};
use classroll_models::{NewUser, Student, StudentProfile, User};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-characters-long";

pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryStore>,
    pub jwt_config: JwtConfig,
}

pub fn setup_test_app() -> TestApp {
    let store = Arc::new(InMemoryStore::new());
    let jwt_config = JwtConfig::new(TEST_SECRET);

    let state = AppState {
        store: store.clone(),
        jwt_config: jwt_config.clone(),
        cors_config: CorsConfig::from_list("http://localhost:5173"),
    };

    TestApp {
        router: init_router(state),
        store,
        jwt_config,
    }
}

impl TestApp {
    /// Inserts an account directly, bypassing password hashing.
    pub async fn create_user(&self, email: &str, role: Role) -> User {
        self.store
            .create_user(NewUser {
                email: email.to_string(),
                password_hash: "not-a-bcrypt-hash".to_string(),
                role,
                full_name: format!("Test {}", role),
            })
            .await
            .unwrap()
    }

    pub fn token_for(&self, user: &User) -> String {
        create_access_token(user.id, &user.email, user.role, &self.jwt_config).unwrap()
    }

    /// Creates an account with the given role and returns a token for it.
    pub async fn login_as(&self, role: Role) -> (User, String) {
        let email = format!("{}-{}@school.com", role, uuid::Uuid::new_v4());
        let user = self.create_user(&email, role).await;
        let token = self.token_for(&user);
        (user, token)
    }

    pub async fn create_student(&self, full_name: &str, group_id: Option<i32>) -> Student {
        self.store
            .create_student(
                StudentProfile {
                    full_name: full_name.to_string(),
                    gender: "female".to_string(),
                    birth_date: chrono::NaiveDate::from_ymd_opt(2005, 3, 14).unwrap(),
                    group_id,
                },
                None,
            )
            .await
            .unwrap()
    }

    /// A student account linked to a fresh student record, with its token.
    pub async fn linked_student(&self) -> (Student, String) {
        let (user, token) = self.login_as(Role::Student).await;
        let student = self
            .store
            .create_student(
                StudentProfile {
                    full_name: String::new(),
                    gender: "male".to_string(),
                    birth_date: chrono::NaiveDate::from_ymd_opt(2004, 6, 1).unwrap(),
                    group_id: None,
                },
                Some(user.id),
            )
            .await
            .unwrap();
        (student, token)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("GET").uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::empty()).unwrap()).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        self.send(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, body)
    }
}
