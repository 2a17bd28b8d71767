//! 프로세스 메모리 계정 저장소
//!
//! 데이터베이스 없이 서비스를 띄울 때(`STORE_BACKEND=memory`) 사용합니다.
//! 재시작하면 모든 계정이 사라집니다.

use std::collections::HashMap;
use std::sync::RwLock;
use async_trait::async_trait;
use log::error;
use mongodb::bson::oid::ObjectId;
use crate::domain::entities::accounts::Account;
use super::{AccountStore, CreateOutcome, StoreError};

/// `(partner1, partner2)` 순서쌍을 키로 하는 메모리 저장소
///
/// 존재 확인과 삽입이 같은 쓰기 잠금 안에서 일어납니다.
#[derive(Default)]
pub struct MemoryAccountStore {
    accounts: RwLock<HashMap<(String, String), Account>>,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> StoreError {
    error!("메모리 계정 저장소 잠금이 오염되었습니다");
    StoreError::Backend("in-memory account store lock poisoned".to_string())
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn find_account(&self, partner1: &str, partner2: &str) -> Result<Option<Account>, StoreError> {
        let accounts = self.accounts.read().map_err(poisoned)?;

        Ok(accounts
            .get(&(partner1.to_string(), partner2.to_string()))
            .cloned())
    }

    async fn create_account(&self, partner1: &str, partner2: &str, pin: &str) -> Result<CreateOutcome, StoreError> {
        let mut accounts = self.accounts.write().map_err(poisoned)?;
        let key = (partner1.to_string(), partner2.to_string());

        if accounts.contains_key(&key) {
            return Ok(CreateOutcome::Conflict);
        }

        let mut account = Account::new(key.0.clone(), key.1.clone(), pin.to_string());
        account.id = Some(ObjectId::new());
        accounts.insert(key, account.clone());

        Ok(CreateOutcome::Created(account))
    }
}
