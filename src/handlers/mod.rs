//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (RoomieHaus Frontend)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response (JSON)
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - 파싱, 검증, 상태 코드     ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 등록/인증 규칙                     ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - AccountStore                 ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 요청 처리 단계
//!
//! `RECEIVED → VALIDATED → STORE_LOOKUP → RESPONDED`
//!
//! 검증에 실패한 요청은 저장소에 도달하지 않습니다. 모든 실패는
//! [`AppError`](crate::errors::AppError)로 반환되어 `{"message": ...}` JSON이 됩니다.
//!
//! ## 의존성 주입
//!
//! 핸들러는 전역 싱글톤 대신 `web::Data<AccountService>`를 추출자로 받습니다.
//!
//! ```rust,ignore
//! #[post("/login")]
//! pub async fn login(
//!     service: web::Data<AccountService>,
//!     payload: web::Json<AccountRequest>,
//! ) -> Result<HttpResponse, AppError> {
//!     let credentials = payload.into_inner().into_credentials()?;
//!     service.authenticate(&credentials).await?;
//!     Ok(HttpResponse::Ok().json(MessageResponse::new(messages::LOGIN_SUCCESS)))
//! }
//! ```
//!
//! ## 모듈 구성
//!
//! - **`accounts`**: 등록 (`POST /register`), 로그인 (`POST /login`)
//! - **`general`**: 인사말, 데이터 에코, 헬스체크

pub mod accounts;
pub mod general;
