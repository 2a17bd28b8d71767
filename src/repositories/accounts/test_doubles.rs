//! 서비스/핸들러 테스트용 저장소 대역

use std::sync::atomic::{AtomicUsize, Ordering};
use async_trait::async_trait;
use crate::domain::entities::accounts::Account;
use super::{AccountStore, CreateOutcome, MemoryAccountStore, StoreError};

/// 호출 횟수를 기록하는 메모리 저장소 래퍼
#[derive(Default)]
pub struct RecordingStore {
    inner: MemoryAccountStore,
    finds: AtomicUsize,
    creates: AtomicUsize,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finds(&self) -> usize {
        self.finds.load(Ordering::SeqCst)
    }

    pub fn creates(&self) -> usize {
        self.creates.load(Ordering::SeqCst)
    }

    pub fn calls(&self) -> usize {
        self.finds() + self.creates()
    }
}

#[async_trait]
impl AccountStore for RecordingStore {
    fn name(&self) -> &str {
        "recording"
    }

    async fn find_account(&self, partner1: &str, partner2: &str) -> Result<Option<Account>, StoreError> {
        self.finds.fetch_add(1, Ordering::SeqCst);
        self.inner.find_account(partner1, partner2).await
    }

    async fn create_account(&self, partner1: &str, partner2: &str, pin: &str) -> Result<CreateOutcome, StoreError> {
        self.creates.fetch_add(1, Ordering::SeqCst);
        self.inner.create_account(partner1, partner2, pin).await
    }
}

/// 모든 호출이 실패하는 저장소
pub struct FailingStore {
    pub detail: String,
}

impl FailingStore {
    pub fn new(detail: &str) -> Self {
        Self { detail: detail.to_string() }
    }
}

#[async_trait]
impl AccountStore for FailingStore {
    fn name(&self) -> &str {
        "failing"
    }

    async fn find_account(&self, _partner1: &str, _partner2: &str) -> Result<Option<Account>, StoreError> {
        Err(StoreError::Backend(self.detail.clone()))
    }

    async fn create_account(&self, _partner1: &str, _partner2: &str, _pin: &str) -> Result<CreateOutcome, StoreError> {
        Err(StoreError::Backend(self.detail.clone()))
    }
}

/// 조회는 항상 "없음"을 반환하고 쓰기는 항상 충돌하는 저장소.
/// 존재 확인과 삽입 사이에 다른 요청이 먼저 등록한 상황을 재현합니다.
pub struct RacingStore;

#[async_trait]
impl AccountStore for RacingStore {
    fn name(&self) -> &str {
        "racing"
    }

    async fn find_account(&self, _partner1: &str, _partner2: &str) -> Result<Option<Account>, StoreError> {
        Ok(None)
    }

    async fn create_account(&self, _partner1: &str, _partner2: &str, _pin: &str) -> Result<CreateOutcome, StoreError> {
        Ok(CreateOutcome::Conflict)
    }
}
