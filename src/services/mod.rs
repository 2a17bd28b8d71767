//! 비즈니스 로직 계층
//!
//! 핸들러는 검증된 입력만 서비스에 전달하고, 서비스는 [`AppError`](crate::errors::AppError)로
//! 결과를 분류하여 돌려줍니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::services::accounts::AccountService;
//! use crate::repositories::accounts::MemoryAccountStore;
//!
//! let service = AccountService::new(Arc::new(MemoryAccountStore::new()));
//! ```

pub mod accounts;
