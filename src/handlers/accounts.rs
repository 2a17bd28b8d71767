//! Account HTTP Handlers
//!
//! 파트너 쌍 계정의 등록과 로그인 엔드포인트입니다.
//! 두 엔드포인트 모두 `/api` 스코프와 루트 경로에 함께 등록됩니다.
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `POST` | `/api/register`, `/register` | 201 | 400, 409, 500 |
//! | `POST` | `/api/login`, `/login` | 200 | 400, 401, 404, 500 |
//!
//! 요청 본문:
//!
//! ```json
//! { "partner1": "Alice", "partner2": "Bob", "pin": "1234" }
//! ```
//!
//! 모든 응답은 `{"message": "..."}` 형태입니다.

use actix_web::{post, web, HttpResponse};
use crate::domain::dto::accounts::{messages, AccountRequest, MessageResponse};
use crate::errors::errors::AppError;
use crate::services::accounts::AccountService;

/// 계정 등록 핸들러
///
/// # Endpoint
/// `POST /register`
///
/// # 응답
/// - `201` 등록 성공
/// - `400` 필드 누락 또는 PIN 형식 오류 (저장소 접근 없음)
/// - `409` 같은 파트너 쌍의 계정이 이미 존재
/// - `500` 저장소 장애 (`Registration failed: ...`)
///
/// ```bash
/// curl -X POST http://localhost:5000/api/register \
///   -H "Content-Type: application/json" \
///   -d '{"partner1":"Alice","partner2":"Bob","pin":"1234"}'
/// ```
#[post("/register")]
pub async fn register(
    service: web::Data<AccountService>,
    payload: web::Json<AccountRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().into_credentials()?;

    service.register(&credentials).await?;

    Ok(HttpResponse::Created().json(MessageResponse::new(messages::REGISTRATION_SUCCESS)))
}

/// 로그인 핸들러
///
/// # Endpoint
/// `POST /login`
///
/// # 응답
/// - `200` PIN 일치
/// - `400` 필드 누락 또는 PIN 형식 오류 (저장소 접근 없음)
/// - `401` PIN 불일치
/// - `404` 등록되지 않은 파트너 쌍
/// - `500` 저장소 장애 (`Login failed: ...`)
#[post("/login")]
pub async fn login(
    service: web::Data<AccountService>,
    payload: web::Json<AccountRequest>,
) -> Result<HttpResponse, AppError> {
    let credentials = payload.into_inner().into_credentials()?;

    service.authenticate(&credentials).await?;

    Ok(HttpResponse::Ok().json(MessageResponse::new(messages::LOGIN_SUCCESS)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{http::StatusCode, test, web, App};
    use serde_json::{json, Value};
    use crate::domain::dto::accounts::messages;
    use crate::repositories::accounts::{AccountStore, MemoryAccountStore};
    use crate::repositories::accounts::test_doubles::{FailingStore, RecordingStore};
    use crate::routes::configure_all_routes;
    use crate::services::accounts::AccountService;

    async fn post_json(store: Arc<dyn AccountStore>, path: &str, body: Value) -> (StatusCode, Value) {
        let service = web::Data::new(AccountService::new(store));
        let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

        let req = test::TestRequest::post().uri(path).set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        (status, body)
    }

    #[actix_web::test]
    async fn test_register_login_walkthrough() {
        let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());

        let (status, body) = post_json(
            store.clone(),
            "/api/register",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": "1234"}),
        ).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["message"], messages::REGISTRATION_SUCCESS);

        let (status, body) = post_json(
            store.clone(),
            "/api/login",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": "1234"}),
        ).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], messages::LOGIN_SUCCESS);

        let (status, body) = post_json(
            store.clone(),
            "/api/login",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": "0000"}),
        ).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["message"], messages::INVALID_PIN);

        let (status, body) = post_json(
            store,
            "/api/login",
            json!({"partner1": "Carol", "partner2": "Dave", "pin": "1234"}),
        ).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], messages::ACCOUNT_NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_duplicate_registration_returns_conflict() {
        let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
        let body = json!({"partner1": "Alice", "partner2": "Bob", "pin": "1234"});

        let (status, _) = post_json(store.clone(), "/api/register", body.clone()).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, response) = post_json(store, "/api/register", body).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(response["message"], messages::ACCOUNT_EXISTS);
    }

    #[actix_web::test]
    async fn test_root_aliases_share_the_same_store() {
        let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());

        let (status, _) = post_json(
            store.clone(),
            "/register",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": "4321"}),
        ).await;
        assert_eq!(status, StatusCode::CREATED);

        let (status, _) = post_json(
            store,
            "/api/login",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": "4321"}),
        ).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_invalid_input_never_reaches_store() {
        let cases = [
            json!({"partner2": "Bob", "pin": "1234"}),
            json!({"partner1": "Alice", "pin": "1234"}),
            json!({"partner1": "Alice", "partner2": "Bob"}),
            json!({"partner1": "", "partner2": "Bob", "pin": "1234"}),
            json!({"partner1": "Alice", "partner2": "Bob", "pin": null}),
            json!({}),
        ];

        for path in ["/api/register", "/api/login", "/register", "/login"] {
            for case in cases.iter() {
                let store = Arc::new(RecordingStore::new());
                let (status, body) = post_json(store.clone(), path, case.clone()).await;

                assert_eq!(status, StatusCode::BAD_REQUEST, "{} {}", path, case);
                assert_eq!(body["message"], messages::MISSING_FIELDS);
                assert_eq!(store.calls(), 0);
            }
        }
    }

    #[actix_web::test]
    async fn test_malformed_pin_is_rejected_before_store() {
        for pin in ["123", "12345", "12a4"] {
            for path in ["/api/register", "/api/login"] {
                let store = Arc::new(RecordingStore::new());
                let (status, body) = post_json(
                    store.clone(),
                    path,
                    json!({"partner1": "Alice", "partner2": "Bob", "pin": pin}),
                ).await;

                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(body["message"], messages::INVALID_PIN_FORMAT);
                assert_eq!(store.calls(), 0);
            }
        }
    }

    #[actix_web::test]
    async fn test_non_string_field_is_a_validation_error() {
        let store = Arc::new(RecordingStore::new());
        let (status, body) = post_json(
            store.clone(),
            "/api/register",
            json!({"partner1": "Alice", "partner2": "Bob", "pin": 1234}),
        ).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], messages::MISSING_FIELDS);
        assert_eq!(store.calls(), 0);
    }

    #[actix_web::test]
    async fn test_unparseable_body_is_a_validation_error() {
        let service = web::Data::new(AccountService::new(Arc::new(MemoryAccountStore::new())));
        let app = test::init_service(App::new().app_data(service).configure(configure_all_routes)).await;

        let req = test::TestRequest::post()
            .uri("/api/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("partner1=Alice")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["message"], messages::MISSING_FIELDS);
    }

    #[actix_web::test]
    async fn test_store_failure_is_500_with_detail() {
        let store: Arc<dyn AccountStore> = Arc::new(FailingStore::new("server selection timeout"));
        let body = json!({"partner1": "Alice", "partner2": "Bob", "pin": "1234"});

        let (status, response) = post_json(store.clone(), "/api/register", body.clone()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["message"], "Registration failed: server selection timeout");

        let (status, response) = post_json(store, "/api/login", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(response["message"], "Login failed: server selection timeout");
    }
}
