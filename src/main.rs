use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};
use mystery_message::config::{RateLimitConfig, ServerConfig};
use mystery_message::core::AppState;
use mystery_message::db::DbConnector;
use mystery_message::middlewares::{RouteGuard, SessionMiddleware};
use mystery_message::repositories::users::UserRepository;
use mystery_message::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    load_env_file();
    init_logging();

    info!("🚀 Mystery Message 서버 시작중...");

    let connector = Arc::new(DbConnector::from_env());
    let state = AppState::from_env(connector.clone()).map_err(|e| {
        error!("애플리케이션 상태 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    prepare_indexes(connector);

    start_http_server(state).await
}

/// 인덱스 생성을 백그라운드에서 시도합니다.
///
/// 첫 연결도 이 시점에 시도되며, 실패해도 서버는 뜨고 다음 요청에서 다시 연결합니다.
fn prepare_indexes(connector: Arc<DbConnector>) {
    actix_web::rt::spawn(async move {
        info!("📡 데이터베이스 연결 및 인덱스 확인 중... ({})", connector.database_name());
        match UserRepository::new(connector).create_indexes().await {
            Ok(()) => info!("✅ users 컬렉션 인덱스 준비 완료"),
            Err(e) => warn!("인덱스 준비 실패, 첫 요청 시 다시 연결합니다: {}", e),
        }
    });
}

async fn start_http_server(state: AppState) -> std::io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    let rate_limit_config = RateLimitConfig::load();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("invalid rate limit configuration"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        let cors = configure_cors();

        // wrap은 나중에 등록한 것이 먼저 실행됩니다.
        // Governor(use_headers)는 라우트를 직접 감싸야 합니다.
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Governor::new(&governor_conf))
            .wrap(RouteGuard)
            .wrap(SessionMiddleware::new(state.tokens.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(_) => {
                dotenv().ok();
            }
        },
        _ => {
            dotenv().ok();
        }
    }
}

fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")

        .allowed_methods(vec!["GET", "POST", "DELETE", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        .supports_credentials()

        .max_age(3600)
}
