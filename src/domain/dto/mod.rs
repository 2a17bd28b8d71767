//! # Data Transfer Objects
//!
//! HTTP 요청/응답 본문과 클라이언트에 노출되는 메시지를 정의합니다.
//!
//! ```text
//! dto/
//! └── accounts/
//!     ├── request.rs      {partner1, partner2, pin} 파싱 + 검증
//!     ├── response.rs     {message} 응답
//!     └── messages.rs     클라이언트 메시지 상수
//! ```

pub mod accounts;

pub use accounts::*;
