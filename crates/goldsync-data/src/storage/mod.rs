//! 저장소 모듈.

pub mod postgres;

pub use postgres::{Database, DatabaseConfig, GoldPriceRecord, GoldPriceRepository, GoldPriceStore};
