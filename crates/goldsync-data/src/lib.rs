//! 금 시세 데이터 수집 및 저장.
//!
//! 이 crate는 다음을 제공합니다:
//! - 외부 금 시세 API 클라이언트와 페이로드 디코더
//! - PostgreSQL 금 시세 이력 저장소
//! - 시세 삽입 + 상품 가격 재계산 트랜잭션

pub mod error;
pub mod provider;
pub mod storage;

pub use error::{DataError, Result};

// 시세 Provider 재내보내기
pub use provider::{decode_payload, FetchError, GoldApiClient, GoldPriceFetcher, QuoteSource};

// 저장소 타입 재내보내기
pub use storage::postgres::{
    Database, DatabaseConfig, GoldPriceRecord, GoldPriceRepository, GoldPriceStore,
};
