//! Standalone daily gold price collector for GoldSync.
//!
//! 이 crate는 쇼핑몰 API 서버와 독립적으로 금 시세를 수집하는 바이너리를
//! 제공합니다:
//! - 하루 한 번 금 시세 기록 (날짜당 한 행)
//! - 시세 기록과 같은 트랜잭션에서 상품 가격 재계산
//! - 단발 실행(`run`)과 주기 실행(`daemon`) 모드

pub mod config;
pub mod error;
pub mod modules;
pub mod stats;

pub use config::CollectorConfig;
pub use error::{IngestionError, Result};
pub use stats::IngestionStats;
