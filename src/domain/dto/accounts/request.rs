//! 계정 요청 DTO
//!
//! 등록/로그인 요청 본문을 매핑하고 검증합니다.
//! 필드 존재 여부를 먼저 확인한 뒤 PIN 형식을 검사하므로,
//! 필드가 비어 있으면 PIN 형식과 무관하게 "모든 필드 입력" 메시지가 반환됩니다.
use serde::Deserialize;
use validator::{Validate, ValidationError};
use crate::domain::dto::accounts::messages;
use crate::errors::errors::AppError;

/// PIN 자릿수
pub const PIN_LENGTH: usize = 4;

/// 등록/로그인 요청 본문
///
/// 누락된 필드와 `null` 필드는 모두 `None`으로 역직렬화됩니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AccountRequest {
    #[serde(default)]
    pub partner1: Option<String>,
    #[serde(default)]
    pub partner2: Option<String>,
    #[serde(default)]
    pub pin: Option<String>,
}

/// 검증을 통과한 자격 증명
///
/// 이름의 존재 여부는 `into_credentials`에서 먼저 확인하므로
/// 여기서는 PIN 형식만 검사합니다.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct PartnerCredentials {
    pub partner1: String,

    pub partner2: String,

    #[validate(custom(function = "validate_pin"))]
    pub pin: String,
}

impl AccountRequest {
    /// 요청 본문을 검증된 자격 증명으로 변환합니다.
    ///
    /// # 반환값
    ///
    /// * `Err(AppError::ValidationError)` - 필드 누락/빈 값 또는 PIN 형식 오류
    pub fn into_credentials(self) -> Result<PartnerCredentials, AppError> {
        let (Some(partner1), Some(partner2), Some(pin)) = (
            non_empty(self.partner1),
            non_empty(self.partner2),
            non_empty(self.pin),
        ) else {
            return Err(AppError::ValidationError(messages::MISSING_FIELDS.to_string()));
        };

        let credentials = PartnerCredentials { partner1, partner2, pin };

        credentials
            .validate()
            .map_err(|_| AppError::ValidationError(messages::INVALID_PIN_FORMAT.to_string()))?;

        Ok(credentials)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// 정확히 4개의 ASCII 숫자로만 이루어졌는지 확인 (`^\d{4}$`)
pub fn is_valid_pin(pin: &str) -> bool {
    pin.len() == PIN_LENGTH && pin.bytes().all(|b| b.is_ascii_digit())
}

fn validate_pin(pin: &str) -> Result<(), ValidationError> {
    if !is_valid_pin(pin) {
        return Err(ValidationError::new("invalid_pin")
            .with_message(messages::INVALID_PIN_FORMAT.into()));
    }
    Ok(())
}
