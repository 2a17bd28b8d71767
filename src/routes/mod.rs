//! API 라우트 설정 모듈
//!
//! 계정 엔드포인트와 공용 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | 메서드 | 경로 | 핸들러 |
//! |--------|------|--------|
//! | `GET` | `/` | `general::home` |
//! | `GET` | `/health` | `general::health_check` |
//! | `GET` | `/api/greeting` | `general::greeting` |
//! | `POST` | `/api/data` | `general::receive_data` |
//! | `POST` | `/api/register`, `/register` | `accounts::register` |
//! | `POST` | `/api/login`, `/login` | `accounts::login` |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(account_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::web;
use log::warn;
use crate::domain::dto::accounts::messages;
use crate::errors::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 계정 요청의 JSON 본문 파싱 실패는 `AppError::ValidationError`로 바꾸어
/// 다른 검증 오류와 같은 `{"message": ...}` 형태로 응답하게 합니다.
/// `/api/data`는 리소스 단위 설정으로 이 처리기를 덮어씁니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    cfg.service(handlers::general::home);
    cfg.service(handlers::general::health_check);

    configure_api_routes(cfg);
    configure_legacy_routes(cfg);
}

/// `/api` 스코프 라우트
///
/// ```bash
/// curl -X POST http://localhost:5000/api/login \
///   -H "Content-Type: application/json" \
///   -d '{"partner1":"Alice","partner2":"Bob","pin":"1234"}'
/// ```
fn configure_api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(handlers::general::greeting)
            .service(
                web::resource("/data")
                    .app_data(handlers::general::echo_json_config())
                    .route(web::post().to(handlers::general::receive_data))
            )
            .service(handlers::accounts::register)
            .service(handlers::accounts::login)
    );
}

/// 스코프 없이 노출되던 기존 경로 (`/register`, `/login`)
fn configure_legacy_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::accounts::register);
    cfg.service(handlers::accounts::login);
}

fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, req| {
        warn!("JSON 본문 파싱 실패 ({}): {}", req.path(), err);
        AppError::ValidationError(messages::MISSING_FIELDS.to_string()).into()
    })
}
