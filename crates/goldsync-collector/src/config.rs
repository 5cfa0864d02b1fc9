//! 환경변수 기반 설정 모듈.

use crate::Result;
use std::time::Duration;

/// Collector 전체 설정
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    /// 데이터베이스 URL
    pub database_url: String,
    /// 데이터베이스 풀 최대 연결 수
    pub database_max_connections: u32,
    /// 금 시세 API 설정
    pub quote_api: QuoteApiConfig,
    /// 데몬 모드 설정
    pub daemon: DaemonConfig,
}

/// 금 시세 API 설정
#[derive(Debug, Clone)]
pub struct QuoteApiConfig {
    /// 시세 API URL (`run`/`daemon` 명령에서 필수)
    pub url: Option<String>,
    /// 시세 API 키 (선택)
    pub api_key: Option<String>,
}

/// 데몬 모드 설정
#[derive(Debug, Clone)]
pub struct DaemonConfig {
    /// 수집 실행 주기 (분 단위)
    pub interval_minutes: u64,
}

impl CollectorConfig {
    /// 환경변수에서 설정 로드
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL").map_err(|_| {
            crate::error::IngestionError::Config(
                "DATABASE_URL 환경변수가 설정되지 않았습니다".to_string(),
            )
        })?;

        Ok(Self {
            database_url,
            database_max_connections: env_var_parse("DATABASE_MAX_CONNECTIONS", 10),
            quote_api: QuoteApiConfig {
                url: std::env::var("GOLD_API_URL").ok(),
                api_key: std::env::var("GOLD_API_KEY").ok(),
            },
            daemon: DaemonConfig {
                interval_minutes: env_var_parse("DAEMON_INTERVAL_MINUTES", 60),
            },
        })
    }
}

impl DaemonConfig {
    /// 수집 실행 주기를 Duration으로 반환
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_minutes * 60)
    }
}

/// 환경변수에서 값을 파싱 (실패 시 기본값 사용)
fn env_var_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
