//! 계정 응답 DTO
use serde::{Deserialize, Serialize};

/// 모든 계정 엔드포인트가 사용하는 응답 본문
///
/// 계정 정보(특히 PIN)는 응답에 포함하지 않습니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
