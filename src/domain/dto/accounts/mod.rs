//! 계정 등록/로그인 DTO 모듈
//!
//! 등록과 로그인은 동일한 요청 본문(`partner1`, `partner2`, `pin`)과
//! 동일한 검증 규칙을 공유합니다.

pub mod messages;
pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
