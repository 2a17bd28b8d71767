//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 계정 저장소 인터페이스와 구현체(MongoDB, 메모리)를 제공합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::accounts::{AccountStore, MemoryAccountStore};
//!
//! let store: Arc<dyn AccountStore> = Arc::new(MemoryAccountStore::new());
//! let account = store.find_account("Alice", "Bob").await?;
//! ```

pub mod accounts;
