//! 금 시세 페이로드 디코더.
//!
//! 외부 금 시세 API는 오류를 HTTP 상태 코드 대신 응답 본문 텍스트로
//! 보고하는 경우가 있어, JSON 디코딩 전에 본문 접두어를 먼저 검사합니다.
//!
//! ## 페이로드 특성
//! - 오류 응답: `Request error` 또는 `Unexpected error`로 시작하는 원문 텍스트
//! - `timestamp` 필드: JSON 숫자와 문자열 두 인코딩이 혼재함
//!
//! ## 사용 예시
//! ```rust,ignore
//! let client = GoldApiClient::new("https://api.example.com/XAU");
//! let fetcher = GoldPriceFetcher::new(client);
//! let quote = fetcher.fetch().await?;
//! println!("온스당 가격: {}", quote.price_ounce);
//! ```

use async_trait::async_trait;
use goldsync_core::PriceQuote;
use rust_decimal::Decimal;
use serde_json::Value;
use thiserror::Error;

/// 본문이 이 접두어로 시작하면 업스트림이 보고한 오류 응답으로 처리한다.
const UPSTREAM_ERROR_MARKERS: [&str; 2] = ["Request error", "Unexpected error"];

/// 시세 수집 에러
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("HTTP 요청 실패: {0}")]
    Http(#[from] reqwest::Error),

    #[error("업스트림 오류 응답: {0}")]
    UpstreamReportedFailure(String),

    #[error("타임스탬프 형식 오류: JSON 정수 또는 문자열이 아님")]
    MalformedTimestamp,

    #[error("페이로드 형식 오류: `{field}` 필드 누락 또는 잘못됨")]
    MalformedPayload { field: String },
}

/// 원시 시세 페이로드 소스.
///
/// 운영 환경에서는 HTTP 클라이언트가, 테스트에서는 고정 페이로드가 구현한다.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    /// 업스트림에서 원시 응답 본문을 가져옵니다.
    async fn fetch_raw(&self) -> Result<String, FetchError>;
}

/// 시세 소스에서 페이로드를 받아 [`PriceQuote`]로 디코딩하는 수집기.
pub struct GoldPriceFetcher<S: QuoteSource> {
    source: S,
}

impl<S: QuoteSource> GoldPriceFetcher<S> {
    /// 새 수집기 생성
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// 원시 페이로드를 가져와 정규화된 시세로 디코딩합니다.
    pub async fn fetch(&self) -> Result<PriceQuote, FetchError> {
        let raw = self.source.fetch_raw().await?;
        let quote = decode_payload(&raw)?;

        tracing::debug!(
            metal = %quote.metal,
            price_ounce = %quote.price_ounce,
            timestamp = %quote.timestamp,
            "금 시세 디코딩 완료"
        );

        Ok(quote)
    }
}

/// 원시 응답 본문을 [`PriceQuote`]로 디코딩합니다.
///
/// 검사 순서:
/// 1. 오류 접두어 검사 (JSON 디코딩보다 먼저 수행)
/// 2. JSON 디코딩, 필드 순서대로 추출
///
/// `timestamp`는 JSON 정수이면 십진 문자열로 변환하고, 문자열이면 그대로
/// 보존한다. 그 외 타입은 [`FetchError::MalformedTimestamp`]로 거부한다.
pub fn decode_payload(raw: &str) -> Result<PriceQuote, FetchError> {
    if UPSTREAM_ERROR_MARKERS.iter().any(|m| raw.starts_with(m)) {
        return Err(FetchError::UpstreamReportedFailure(raw.to_string()));
    }

    let root: Value = serde_json::from_str(raw).map_err(|_| FetchError::MalformedPayload {
        field: "payload".to_string(),
    })?;

    // 필드는 선언 순서대로 추출되므로, 여러 필드가 빠진 페이로드는
    // 가장 앞선 누락 필드로 보고된다.
    let quote = PriceQuote {
        metal: require_string(&root, "metal")?,
        price_ounce: require_decimal(&root, "priceOunce")?,
        price_gram: require_decimal(&root, "priceGram")?,
        percentage_change: require_decimal(&root, "percentageChange")?,
        exchange: require_string(&root, "exchange")?,
        timestamp: require_timestamp(&root)?,
    };

    Ok(quote)
}

/// 필드 존재 여부 확인
fn require<'a>(root: &'a Value, field: &str) -> Result<&'a Value, FetchError> {
    root.get(field).ok_or_else(|| FetchError::MalformedPayload {
        field: field.to_string(),
    })
}

/// 문자열 필드 추출
fn require_string(root: &Value, field: &str) -> Result<String, FetchError> {
    require(root, field)?
        .as_str()
        .map(ToOwned::to_owned)
        .ok_or_else(|| FetchError::MalformedPayload {
            field: field.to_string(),
        })
}

/// 십진수 필드 추출
fn require_decimal(root: &Value, field: &str) -> Result<Decimal, FetchError> {
    let malformed = || FetchError::MalformedPayload {
        field: field.to_string(),
    };

    match require(root, field)? {
        Value::Number(n) => n.to_string().parse::<Decimal>().map_err(|_| malformed()),
        _ => Err(malformed()),
    }
}

/// 타임스탬프 필드 추출.
///
/// 정수는 십진 문자열로 정규화하고 문자열은 그대로 통과시킨다.
/// 여기서 날짜로 해석하지 않는다.
fn require_timestamp(root: &Value) -> Result<String, FetchError> {
    match require(root, "timestamp")? {
        Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        Value::String(s) => Ok(s.clone()),
        _ => Err(FetchError::MalformedTimestamp),
    }
}
