//! 수집 모듈.

pub mod daily_ingest;

pub use daily_ingest::{run_daily_ingestion, DailyIngestion};
