//! Accounts Entity Module
//!
//! 파트너 쌍 계정 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::accounts::Account;
//!
//! let account = Account::new("Alice".to_string(), "Bob".to_string(), "1234".to_string());
//! assert!(account.pin_matches("1234"));
//! ```

pub mod account;

pub use account::Account;
