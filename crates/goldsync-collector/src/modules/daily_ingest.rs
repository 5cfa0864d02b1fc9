//! 일별 금 시세 수집 모듈.
//!
//! ## 실행 흐름
//!
//! 1. 멱등성 가드: 오늘 날짜의 레코드가 이미 있으면 즉시 중단
//! 2. 시세 조회: 외부 API에서 원시 페이로드를 가져와 디코딩
//! 3. 저장: 시세 삽입과 상품 가격 재계산을 하나의 트랜잭션으로 커밋
//!
//! 가드는 스냅샷 기반이라 동시 실행을 완전히 막지 못한다. 최종 방어선은
//! `date` 컬럼의 UNIQUE 제약이며, 동시 커밋 중 두 번째는 중복 오류로
//! 실패한다.

use chrono::Local;
use tracing::{info, warn};

use goldsync_data::provider::{GoldApiClient, GoldPriceFetcher, QuoteSource};
use goldsync_data::storage::{Database, GoldPriceRecord, GoldPriceRepository, GoldPriceStore};

use crate::{config::CollectorConfig, error::IngestionError, Result};

/// 일별 금 시세 수집기.
pub struct DailyIngestion<S: QuoteSource, P: GoldPriceStore> {
    fetcher: GoldPriceFetcher<S>,
    store: P,
}

impl<S: QuoteSource, P: GoldPriceStore> DailyIngestion<S, P> {
    /// 새 수집기 생성
    pub fn new(fetcher: GoldPriceFetcher<S>, store: P) -> Self {
        Self { fetcher, store }
    }

    /// 오늘의 금 시세를 수집하고 기록합니다.
    ///
    /// 가드를 시세 조회보다 먼저 평가하므로, 오늘 시세가 이미 기록되어
    /// 있으면 외부 API를 호출하지 않는다.
    pub async fn run(&self) -> Result<GoldPriceRecord> {
        let today = Local::now().date_naive();
        info!(date = %today, "일별 금 시세 수집 시작");

        if self.store.exists_for_date(today).await? {
            warn!(date = %today, "오늘 시세가 이미 기록되어 있어 수집을 중단합니다");
            return Err(IngestionError::AlreadyRecordedToday(today));
        }

        let quote = self.fetcher.fetch().await?;

        // 처리 날짜는 삽입 시점에 다시 계산한다. 가드 시점 값을 재사용하면
        // 자정 경계에서 어제 날짜로 기록될 수 있다.
        let date = Local::now().date_naive();
        let record = self.store.insert_and_reprice(&quote, date).await?;

        info!(
            metal = %record.metal,
            price_ounce = %record.price_ounce,
            price_gram = %record.price_gram,
            exchange = %record.exchange,
            date = %record.date,
            "금 시세 기록 및 상품 가격 재계산 완료"
        );

        Ok(record)
    }
}

/// 환경 설정으로 수집기를 구성하고 한 번 실행합니다.
pub async fn run_daily_ingestion(
    db: &Database,
    config: &CollectorConfig,
) -> Result<GoldPriceRecord> {
    let url = config.quote_api.url.clone().ok_or_else(|| {
        IngestionError::Config("GOLD_API_URL 환경변수가 설정되지 않았습니다".to_string())
    })?;

    let mut client = GoldApiClient::new(url);
    if let Some(api_key) = &config.quote_api.api_key {
        client = client.with_api_key(api_key.clone());
    }

    let fetcher = GoldPriceFetcher::new(client);
    let store = GoldPriceRepository::new(db.clone());

    DailyIngestion::new(fetcher, store).run().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use chrono::{NaiveDate, Utc};
    use goldsync_core::PriceQuote;
    use goldsync_data::{DataError, FetchError};
    use rust_decimal_macros::dec;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    const VALID_PAYLOAD: &str = r#"{"metal":"gold","priceOunce":2650.10,"priceGram":85.18,"percentageChange":0.42,"exchange":"LBMA","timestamp":1700000000}"#;

    #[derive(Clone)]
    struct StaticSource {
        payload: String,
        calls: Arc<AtomicUsize>,
    }

    impl StaticSource {
        fn new(payload: &str) -> Self {
            Self {
                payload: payload.to_string(),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }
    }

    #[async_trait]
    impl QuoteSource for StaticSource {
        async fn fetch_raw(&self) -> std::result::Result<String, FetchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.payload.clone())
        }
    }

    #[derive(Clone, Copy)]
    enum FailMode {
        None,
        Duplicate,
        Reprice,
    }

    #[derive(Clone)]
    struct MemoryStore {
        rows: Arc<Mutex<Vec<NaiveDate>>>,
        insert_calls: Arc<AtomicUsize>,
        fail_mode: FailMode,
    }

    impl MemoryStore {
        fn new(fail_mode: FailMode) -> Self {
            Self {
                rows: Arc::new(Mutex::new(Vec::new())),
                insert_calls: Arc::new(AtomicUsize::new(0)),
                fail_mode,
            }
        }

        fn with_row(self, date: NaiveDate) -> Self {
            self.rows.lock().unwrap().push(date);
            self
        }
    }

    #[async_trait]
    impl GoldPriceStore for MemoryStore {
        async fn exists_for_date(&self, date: NaiveDate) -> goldsync_data::Result<bool> {
            Ok(self.rows.lock().unwrap().contains(&date))
        }

        async fn insert_and_reprice(
            &self,
            quote: &PriceQuote,
            date: NaiveDate,
        ) -> goldsync_data::Result<GoldPriceRecord> {
            self.insert_calls.fetch_add(1, Ordering::SeqCst);

            match self.fail_mode {
                FailMode::Duplicate => {
                    return Err(DataError::DuplicateError(
                        "gold_price_history_date_key".to_string(),
                    ))
                }
                FailMode::Reprice => {
                    return Err(DataError::QueryError("reprice failed".to_string()))
                }
                FailMode::None => {}
            }

            self.rows.lock().unwrap().push(date);

            Ok(GoldPriceRecord {
                id: 1,
                metal: quote.metal.clone(),
                price_ounce: quote.price_ounce,
                price_gram: quote.price_gram,
                percentage_change: quote.percentage_change,
                exchange: quote.exchange.clone(),
                timestamp: quote.timestamp.clone(),
                date,
                created_at: Utc::now(),
            })
        }
    }

    fn ingestion(
        source: StaticSource,
        store: MemoryStore,
    ) -> DailyIngestion<StaticSource, MemoryStore> {
        DailyIngestion::new(GoldPriceFetcher::new(source), store)
    }

    #[tokio::test]
    async fn test_run_records_today_quote() {
        let source = StaticSource::new(VALID_PAYLOAD);
        let store = MemoryStore::new(FailMode::None);

        let record = ingestion(source, store.clone()).run().await.unwrap();

        assert_eq!(record.metal, "gold");
        assert_eq!(record.price_ounce, dec!(2650.10));
        assert_eq!(record.price_gram, dec!(85.18));
        assert_eq!(record.exchange, "LBMA");
        assert_eq!(record.timestamp, "1700000000");
        assert_eq!(store.rows.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_run_stops_when_already_recorded() {
        let today = Local::now().date_naive();
        let source = StaticSource::new(VALID_PAYLOAD);
        let store = MemoryStore::new(FailMode::None).with_row(today);

        let result = ingestion(source.clone(), store.clone()).run().await;

        assert!(
            matches!(result, Err(IngestionError::AlreadyRecordedToday(date)) if date == today)
        );
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(store.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_error_not_persisted() {
        let source = StaticSource::new("Request error: quota exceeded");
        let store = MemoryStore::new(FailMode::None);

        let result = ingestion(source, store.clone()).run().await;

        match result {
            Err(IngestionError::FetchFailed(FetchError::UpstreamReportedFailure(message))) => {
                assert_eq!(message, "Request error: quota exceeded");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(store.insert_calls.load(Ordering::SeqCst), 0);
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_malformed_payload_reports_first_missing_field() {
        let source = StaticSource::new(r#"{"metal":"gold"}"#);
        let store = MemoryStore::new(FailMode::None);

        let result = ingestion(source, store.clone()).run().await;

        match result {
            Err(IngestionError::FetchFailed(FetchError::MalformedPayload { field })) => {
                assert_eq!(field, "priceOunce");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert_eq!(store.insert_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_duplicate_insert_surfaces_as_persistence_error() {
        let source = StaticSource::new(VALID_PAYLOAD);
        let store = MemoryStore::new(FailMode::Duplicate);

        let result = ingestion(source, store.clone()).run().await;

        assert!(matches!(
            result,
            Err(IngestionError::PersistenceFailed(DataError::DuplicateError(_)))
        ));
        assert!(store.rows.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reprice_failure_leaves_no_row() {
        let source = StaticSource::new(VALID_PAYLOAD);
        let store = MemoryStore::new(FailMode::Reprice);

        let result = ingestion(source, store.clone()).run().await;

        assert!(matches!(result, Err(IngestionError::PersistenceFailed(_))));
        assert!(store.rows.lock().unwrap().is_empty());
    }
}
