//! 계정 서비스 모듈
//!
//! [`AccountService`](account_service::AccountService)는 저장소를 주입받아
//! 등록/인증 규칙을 적용합니다.

pub mod account_service;

pub use account_service::AccountService;
