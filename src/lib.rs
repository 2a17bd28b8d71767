//! RoomieHaus 계정 서비스
//!
//! 가계 관리 앱 RoomieHaus의 계정 등록 및 PIN 인증 서비스입니다.
//! 커플이 두 파트너 이름과 4자리 PIN으로 등록하고, 같은 쌍으로 로그인합니다.
//!
//! # Features
//!
//! - **계정 등록**: 파트너 쌍당 하나의 계정, 중복 등록은 409
//! - **PIN 인증**: 파트너 쌍 조회 후 PIN 비교 (200 / 401 / 404)
//! - **저장소 주입**: MongoDB 또는 메모리 저장소를 `AccountStore`로 주입
//! - **Rate Limiting**: IP 단위 요청 빈도 제한
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 파싱/검증, 상태 코드 매핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 등록/인증 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← AccountStore (MongoDB | Memory)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use actix_web::{web, App};
//! use roomiehaus_account_service::repositories::accounts::MemoryAccountStore;
//! use roomiehaus_account_service::routes::configure_all_routes;
//! use roomiehaus_account_service::services::accounts::AccountService;
//!
//! let service = web::Data::new(AccountService::new(Arc::new(MemoryAccountStore::new())));
//! let app = App::new().app_data(service).configure(configure_all_routes);
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod routes;
pub mod handlers;
pub mod errors;
