//! RoomieHaus 계정 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동합니다.
//! 계정 저장소(MongoDB 또는 메모리)를 한 번 초기화한 뒤 모든 워커에 주입합니다.

use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use roomiehaus_account_service::config::{
    CorsConfig, DatabaseConfig, Environment, RateLimitConfig, ServerConfig, StoreBackend,
};
use roomiehaus_account_service::db::Database;
use roomiehaus_account_service::repositories::accounts::{
    AccountRepository, AccountStore, MemoryAccountStore,
};
use roomiehaus_account_service::routes::configure_all_routes;
use roomiehaus_account_service::services::accounts::AccountService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 RoomieHaus 계정 서비스 시작중... (환경: {:?})", Environment::current());

    let store = initialize_account_store().await?;
    let account_service = web::Data::new(AccountService::new(store));

    start_http_server(account_service).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(account_service: web::Data<AccountService>) -> std::io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::from_env();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other(format!(
            "잘못된 Rate Limiting 설정: {:?}", rate_limit_config
        )))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let allowed_origins = CorsConfig::allowed_origins();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&allowed_origins))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(account_service.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 계정 저장소를 초기화합니다
///
/// `STORE_BACKEND`에 따라 MongoDB 연결 + 인덱스 확인, 또는 메모리 저장소를 만듭니다.
/// MongoDB 연결이나 인덱스 생성에 실패하면 서버를 띄우지 않습니다.
async fn initialize_account_store() -> std::io::Result<Arc<dyn AccountStore>> {
    let backend = StoreBackend::current();
    info!("🗄️ 계정 저장소 백엔드: {}", backend.as_str());

    match backend {
        StoreBackend::Memory => {
            info!("🧠 메모리 계정 저장소 사용 (재시작 시 데이터 소멸)");
            Ok(Arc::new(MemoryAccountStore::new()))
        }
        StoreBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::from_env().await.map_err(|e| {
                error!("MongoDB 연결 실패: {}", e);
                std::io::Error::other(e)
            })?;

            let repo = AccountRepository::new(Arc::new(database), DatabaseConfig::accounts_collection());
            repo.create_indexes().await.map_err(|e| {
                error!("계정 인덱스 생성 실패: {}", e);
                std::io::Error::other(e)
            })?;

            Ok(Arc::new(repo))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 허용 Origin이 설정되지 않으면 모든 Origin을 허용합니다.
fn configure_cors(allowed_origins: &[String]) -> Cors {
    let cors = if allowed_origins.is_empty() {
        Cors::default().allow_any_origin()
    } else {
        allowed_origins
            .iter()
            .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
    };

    cors
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .max_age(3600)
}
