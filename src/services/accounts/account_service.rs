//! # 계정 서비스 구현
//!
//! 파트너 쌍 계정의 등록과 PIN 인증 비즈니스 로직을 구현합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                AccountService                │
//! │  ┌──────────────────┐  ┌──────────────────┐  │
//! │  │   Registration   │  │  Authentication  │  │
//! │  │ • Duplicate Chk  │  │ • Pair Lookup    │  │
//! │  │ • Insert-if-New  │  │ • PIN Compare    │  │
//! │  └──────────────────┘  └──────────────────┘  │
//! └──────────────────────┬───────────────────────┘
//!                        ▼
//!          Arc<dyn AccountStore> (MongoDB | Memory)
//! ```
//!
//! ## 알려진 약점
//!
//! PIN은 평문으로 저장되고 일반 문자열 비교로 검증됩니다.
//! 해시 저장 및 상수 시간 비교는 적용되어 있지 않습니다.

use std::sync::Arc;
use log::{info, warn};
use crate::domain::dto::accounts::{messages, PartnerCredentials};
use crate::domain::entities::accounts::Account;
use crate::errors::errors::{AppError, AppResult, ErrorContext};
use crate::repositories::accounts::{AccountStore, CreateOutcome};

/// 계정 등록/인증 서비스
///
/// 요청 간 공유 상태는 주입된 저장소뿐입니다. `web::Data`로 감싸 핸들러에 전달합니다.
///
/// ```rust,ignore
/// let service = AccountService::new(Arc::new(MemoryAccountStore::new()));
/// let account = service.register(&credentials).await?;
/// ```
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// 현재 사용 중인 저장소 이름
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// 새 계정 등록
    ///
    /// 존재 확인으로 대부분의 중복을 걸러내고, 확인 이후에 끼어든 동시 등록은
    /// 저장소의 "없을 때만 삽입"이 `Conflict`로 돌려줍니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - 생성된 계정
    /// * `Err(AppError::ConflictError)` - 같은 파트너 쌍의 계정이 이미 존재
    /// * `Err(AppError::InternalError)` - 저장소 장애 ("Registration failed: ...")
    pub async fn register(&self, credentials: &PartnerCredentials) -> AppResult<Account> {
        let PartnerCredentials { partner1, partner2, pin } = credentials;

        let existing = self.store
            .find_account(partner1, partner2)
            .await
            .context(messages::REGISTRATION_FAILED)?;

        if existing.is_some() {
            warn!("중복 등록 시도 - 파트너: {} / {}", partner1, partner2);
            return Err(AppError::ConflictError(messages::ACCOUNT_EXISTS.to_string()));
        }

        let outcome = self.store
            .create_account(partner1, partner2, pin)
            .await
            .context(messages::REGISTRATION_FAILED)?;

        match outcome {
            CreateOutcome::Created(account) => {
                info!(
                    "계정 등록 완료 - 파트너: {} / {}, ID: {}",
                    partner1,
                    partner2,
                    account.id_string().unwrap_or_default()
                );
                Ok(account)
            }
            CreateOutcome::Conflict => {
                warn!("동시 등록 충돌 - 파트너: {} / {}", partner1, partner2);
                Err(AppError::ConflictError(messages::ACCOUNT_EXISTS.to_string()))
            }
        }
    }

    /// 파트너 쌍 + PIN 인증
    ///
    /// # 반환값
    ///
    /// * `Ok(Account)` - PIN 일치
    /// * `Err(AppError::NotFound)` - 등록되지 않은 파트너 쌍
    /// * `Err(AppError::AuthenticationError)` - PIN 불일치
    /// * `Err(AppError::InternalError)` - 저장소 장애 ("Login failed: ...")
    pub async fn authenticate(&self, credentials: &PartnerCredentials) -> AppResult<Account> {
        let PartnerCredentials { partner1, partner2, pin } = credentials;

        let account = self.store
            .find_account(partner1, partner2)
            .await
            .context(messages::LOGIN_FAILED)?
            .ok_or_else(|| AppError::NotFound(messages::ACCOUNT_NOT_FOUND.to_string()))?;

        if !account.pin_matches(pin) {
            warn!("PIN 불일치 - 파트너: {} / {}", partner1, partner2);
            return Err(AppError::AuthenticationError(messages::INVALID_PIN.to_string()));
        }

        info!("로그인 성공 - 파트너: {} / {}", partner1, partner2);
        Ok(account)
    }
}
