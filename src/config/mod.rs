//! # Configuration Module
//!
//! 계정 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="5000"
//! export WORKERS="4"
//!
//! # 저장소 설정
//! export STORE_BACKEND="mongodb"          # mongodb | memory
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="roomiehaus"
//! export ACCOUNTS_COLLECTION="users"
//!
//! # 트래픽 제어
//! export RATE_LIMIT_PER_SECOND="10"
//! export RATE_LIMIT_BURST_SIZE="20"
//! export CORS_ALLOWED_ORIGINS="http://localhost:8080"
//! ```
//!
//! 위 값들은 `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일에서도 읽힙니다.

pub mod data_config;

pub use data_config::*;
