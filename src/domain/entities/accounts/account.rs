//! Account Entity Implementation
//!
//! 한 커플(파트너 쌍)의 계정을 표현하는 엔티티입니다.
//! 등록 시에만 생성되며 이 서비스에서는 수정/삭제되지 않습니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 계정 엔티티
///
/// `(partner1, partner2)`는 입력된 그대로의 순서쌍입니다.
/// `("A", "B")`와 `("B", "A")`는 서로 다른 계정입니다.
///
/// PIN은 평문 문자열로 저장되고 비교됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 첫 번째 파트너 이름
    pub partner1: String,
    /// 두 번째 파트너 이름
    pub partner2: String,
    /// 4자리 숫자 PIN
    pub pin: String,
    /// 등록 시각
    ///
    /// 데이터베이스가 아니라 서비스 프로세스의 시계(`DateTime::now()`)로
    /// 문서를 만들 때 채워집니다. 여러 인스턴스 간 시계 차이는 보정하지 않습니다.
    #[serde(rename = "registeredAt")]
    pub registered_at: DateTime,
}

impl Account {
    /// 새 계정 생성
    ///
    /// ID는 저장 시점에 저장소가 할당하지만, `registered_at`은 여기서
    /// 서비스 프로세스 시계로 정해진 뒤 그대로 저장됩니다.
    pub fn new(partner1: String, partner2: String, pin: String) -> Self {
        Self {
            id: None,
            partner1,
            partner2,
            pin,
            registered_at: DateTime::now(),
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 저장된 PIN과 정확히 일치하는지 확인
    pub fn pin_matches(&self, pin: &str) -> bool {
        self.pin == pin
    }
}
