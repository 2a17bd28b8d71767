//! 계정 데이터 액세스 계층
//!
//! 계정 서비스는 [`AccountStore`] trait만 알고 있으며, 실제 저장소는 부팅 시
//! 선택되어 `Arc<dyn AccountStore>`로 주입됩니다.
//!
//! - [`AccountRepository`](account_repo::AccountRepository) - MongoDB 컬렉션
//! - [`MemoryAccountStore`](memory_repo::MemoryAccountStore) - 프로세스 메모리
//!
//! # 원자성
//!
//! `create_account`는 "없을 때만 삽입" 연산입니다. 같은 파트너 쌍에 대한 동시 등록 중
//! 정확히 하나만 `Created`를 받고 나머지는 `Conflict`를 받습니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::accounts::{AccountStore, CreateOutcome};
//!
//! match store.create_account("Alice", "Bob", "1234").await? {
//!     CreateOutcome::Created(account) => println!("생성됨: {:?}", account.id),
//!     CreateOutcome::Conflict => println!("이미 존재하는 계정"),
//! }
//! ```

use async_trait::async_trait;
use thiserror::Error;
use crate::domain::entities::accounts::Account;

pub mod account_repo;
pub mod memory_repo;

#[cfg(test)]
pub mod test_doubles;

pub use account_repo::AccountRepository;
pub use memory_repo::MemoryAccountStore;

/// 저장소 계층 에러
///
/// 서비스 계층에서는 구체적인 원인을 구분하지 않고 메시지로만 전달합니다.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("{0}")]
    Backend(String),
}

/// `create_account` 결과
#[derive(Debug)]
pub enum CreateOutcome {
    /// 새 계정이 저장됨 (저장소가 할당한 ID 포함)
    Created(Account),
    /// 같은 파트너 쌍의 계정이 이미 존재하여 쓰지 않음
    Conflict,
}

/// 계정 저장소 인터페이스
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// 로그 및 헬스체크용 저장소 이름
    fn name(&self) -> &str;

    /// 파트너 쌍으로 계정을 조회합니다. 입력값은 정규화 없이 그대로 비교됩니다.
    async fn find_account(&self, partner1: &str, partner2: &str) -> Result<Option<Account>, StoreError>;

    /// 파트너 쌍의 계정이 없을 때만 새 계정을 저장합니다.
    async fn create_account(&self, partner1: &str, partner2: &str, pin: &str) -> Result<CreateOutcome, StoreError>;
}
