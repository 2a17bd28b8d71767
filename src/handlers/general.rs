//! 공용 엔드포인트
//!
//! 프론트엔드 연결 확인용 인사말, 데이터 에코, 헬스체크를 제공합니다.

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;
use crate::errors::errors::AppError;
use crate::services::accounts::AccountService;

/// 에코 엔드포인트의 JSON 파싱 실패 메시지
pub const INVALID_JSON_BODY: &str = "Request body must be valid JSON.";

/// 서비스 기동 확인
///
/// `GET /`
#[get("/")]
pub async fn home() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "message": "RoomieHaus backend is running!"
    }))
}

/// 프론트엔드 인사말
///
/// `GET /api/greeting`
#[get("/greeting")]
pub async fn greeting() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "greeting": "Hello from RoomieHaus backend!"
    }))
}

/// 받은 JSON을 그대로 돌려줍니다
///
/// `POST /api/data`
///
/// ```bash
/// curl -X POST http://localhost:5000/api/data \
///   -H "Content-Type: application/json" \
///   -d '{"chores": ["dishes"]}'
/// # {"received":{"chores":["dishes"]}}
/// ```
///
/// 계정 라우트의 JSON 설정 대신 [`echo_json_config`]를 리소스에 붙여 등록합니다.
pub async fn receive_data(payload: web::Json<serde_json::Value>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "received": payload.into_inner()
    }))
}

/// 에코 엔드포인트 전용 JSON 설정
pub fn echo_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
        AppError::ValidationError(INVALID_JSON_BODY.to_string()).into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 사용합니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "roomiehaus_account_service",
///   "version": "0.1.0",
///   "timestamp": "2024-01-01T00:00:00+00:00",
///   "store": "mongodb"
/// }
/// ```
#[get("/health")]
pub async fn health_check(service: web::Data<AccountService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "store": service.store_name()
    }))
}
