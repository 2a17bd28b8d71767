//! # Domain Entities Module
//!
//! MongoDB에 영속되는 핵심 도메인 엔티티들을 정의합니다.
//!
//! ```text
//! entities/
//! └── accounts/        파트너 쌍 + PIN 계정
//! ```
//!
//! ## 주의사항
//!
//! - **식별자**: 저장소가 할당하는 `ObjectId`를 사용하며 입력값에서 키를 파생하지 않음
//! - **유니크 제약**: `(partner1, partner2)` 순서쌍 기준, 대소문자 구분
//! - **인덱스 설계**: 쿼리 패턴에 맞는 복합 인덱스 설계 필수

pub mod accounts;

pub use accounts::*;
