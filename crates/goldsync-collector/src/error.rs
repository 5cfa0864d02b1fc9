//! 에러 타입 정의.

use chrono::NaiveDate;
use goldsync_data::{DataError, FetchError};
use std::fmt;

/// 수집 작업 에러 타입
#[derive(Debug)]
pub enum IngestionError {
    /// 오늘 시세가 이미 기록됨 (멱등성 가드)
    AlreadyRecordedToday(NaiveDate),
    /// 시세 조회 실패 (아무것도 기록되지 않음)
    FetchFailed(FetchError),
    /// 저장 실패 (트랜잭션 롤백됨)
    PersistenceFailed(DataError),
    /// 설정 에러
    Config(String),
}

impl fmt::Display for IngestionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyRecordedToday(date) => {
                write!(f, "Gold price already recorded for {}", date)
            }
            Self::FetchFailed(e) => write!(f, "Fetch failed: {}", e),
            Self::PersistenceFailed(e) => write!(f, "Persistence failed: {}", e),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for IngestionError {}

impl From<FetchError> for IngestionError {
    fn from(err: FetchError) -> Self {
        Self::FetchFailed(err)
    }
}

impl From<DataError> for IngestionError {
    fn from(err: DataError) -> Self {
        Self::PersistenceFailed(err)
    }
}

/// Result 타입 별칭
pub type Result<T> = std::result::Result<T, IngestionError>;
