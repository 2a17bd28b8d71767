//! # 계정 리포지토리 구현 (MongoDB)
//!
//! 계정 엔티티를 MongoDB 컬렉션에 저장하고 조회합니다.
//!
//! ## 특징
//!
//! - **저장소 할당 ID**: `_id`는 MongoDB `ObjectId`
//! - **유니크 제약**: `(partner1, partner2)` 복합 유니크 인덱스 `partners_unique`
//! - **원자적 등록**: 조회 후 쓰기 대신 인덱스에 의존하는 단일 `insert_one`

use std::sync::Arc;
use async_trait::async_trait;
use log::{debug, info, warn};
use mongodb::{
    bson::{doc, Document},
    error::{ErrorKind, WriteFailure},
    options::IndexOptions,
    Collection, IndexModel,
};
use crate::db::Database;
use crate::domain::entities::accounts::Account;
use super::{AccountStore, CreateOutcome, StoreError};

/// MongoDB 중복 키 에러 코드
const DUPLICATE_KEY_ERROR: i32 = 11000;

/// 파트너 쌍 유니크 인덱스 이름
pub const PARTNERS_INDEX_NAME: &str = "partners_unique";

/// MongoDB 기반 계정 리포지토리
///
/// ## 컬렉션
/// - **컬렉션명**: 기본값 `users` (`ACCOUNTS_COLLECTION`)
/// - **인덱스**: `{ partner1: 1, partner2: 1 }` UNIQUE
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let database = Arc::new(Database::from_env().await?);
/// let repo = AccountRepository::new(database, "users");
/// repo.create_indexes().await?;
///
/// let account = repo.find_account("Alice", "Bob").await?;
/// ```
pub struct AccountRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
    /// 계정 컬렉션 이름
    collection_name: String,
}

impl AccountRepository {
    pub fn new(db: Arc<Database>, collection_name: impl Into<String>) -> Self {
        Self {
            db,
            collection_name: collection_name.into(),
        }
    }

    fn collection(&self) -> Collection<Account> {
        self.db.collection::<Account>(&self.collection_name)
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 부팅 시 한 번 호출합니다. 인덱스가 이미 있으면 아무 일도 일어나지 않습니다.
    ///
    /// # 주의사항
    ///
    /// - **기존 데이터**: 이미 중복된 파트너 쌍이 있으면 유니크 인덱스 생성이 실패하며,
    ///   이 경우 서비스는 기동되지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), StoreError> {
        self.collection()
            .create_index(partners_index())
            .await?;

        info!(
            "📇 인덱스 확인 완료: {}.{} ({})",
            self.db.database_name(),
            self.collection_name,
            PARTNERS_INDEX_NAME
        );
        Ok(())
    }
}

#[async_trait]
impl AccountStore for AccountRepository {
    fn name(&self) -> &str {
        "mongodb"
    }

    async fn find_account(&self, partner1: &str, partner2: &str) -> Result<Option<Account>, StoreError> {
        let account = self.collection()
            .find_one(partner_filter(partner1, partner2))
            .await?;

        debug!("계정 조회 - 존재 여부: {}", account.is_some());
        Ok(account)
    }

    async fn create_account(&self, partner1: &str, partner2: &str, pin: &str) -> Result<CreateOutcome, StoreError> {
        let mut account = Account::new(partner1.to_string(), partner2.to_string(), pin.to_string());

        match self.collection().insert_one(&account).await {
            Ok(result) => {
                account.id = result.inserted_id.as_object_id();
                Ok(CreateOutcome::Created(account))
            }
            Err(e) if is_duplicate_key(&e) => {
                warn!("중복 키로 계정 삽입 거부됨 ({})", PARTNERS_INDEX_NAME);
                Ok(CreateOutcome::Conflict)
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// 두 필드에 대한 동등 비교 필터 (AND)
pub fn partner_filter(partner1: &str, partner2: &str) -> Document {
    doc! { "partner1": partner1, "partner2": partner2 }
}

/// 파트너 쌍 복합 유니크 인덱스 정의
pub fn partners_index() -> IndexModel {
    IndexModel::builder()
        .keys(doc! { "partner1": 1, "partner2": 1 })
        .options(IndexOptions::builder()
            .unique(true)
            .name(PARTNERS_INDEX_NAME.to_string())
            .build())
        .build()
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    matches!(
        error.kind.as_ref(),
        ErrorKind::Write(WriteFailure::WriteError(write_error)) if write_error.code == DUPLICATE_KEY_ERROR
    )
}
