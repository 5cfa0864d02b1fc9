//! 시세 Provider 모듈.
//!
//! 외부 소스에서 금 시세를 가져오는 Provider들을 정의합니다.
//!
//! ## 금 시세 API
//! - `GoldApiClient`: 금 시세 API HTTP 클라이언트 (API 키 선택)
//! - 온스/그램 가격, 변동률, 거래소, 타임스탬프
//!
//! ## 페이로드 디코더
//! - `GoldPriceFetcher`: 원시 응답을 `PriceQuote`로 정규화
//! - 본문 오류 접두어 검사, 혼재된 타임스탬프 인코딩 처리

pub mod fetcher;
pub mod gold_api;

pub use fetcher::{decode_payload, FetchError, GoldPriceFetcher, QuoteSource};
pub use gold_api::GoldApiClient;
